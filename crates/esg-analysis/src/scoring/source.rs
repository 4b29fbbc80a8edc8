//! Source credibility multipliers.

use esg_core::config::ScoringConfig;
use esg_core::constants::{
    DEFAULT_REGULATORY_WEIGHT, DEFAULT_WIRE_WEIGHT, NEUTRAL_SOURCE_WEIGHT, REGULATORY_SOURCE_MARKERS,
    WIRE_SOURCE_MARKERS,
};

/// Multipliers per source class. Regulatory markers are checked before wire
/// markers, so a source matching both gets the regulatory weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceWeights {
    pub regulatory: f64,
    pub wire: f64,
}

impl Default for SourceWeights {
    fn default() -> Self {
        Self {
            regulatory: DEFAULT_REGULATORY_WEIGHT,
            wire: DEFAULT_WIRE_WEIGHT,
        }
    }
}

impl SourceWeights {
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            regulatory: config.effective_regulatory_weight(),
            wire: config.effective_wire_weight(),
        }
    }

    /// Case-insensitive substring classification of `source`.
    pub fn weight(&self, source: &str) -> f64 {
        let source = source.to_lowercase();
        if REGULATORY_SOURCE_MARKERS.iter().any(|m| source.contains(m)) {
            self.regulatory
        } else if WIRE_SOURCE_MARKERS.iter().any(|m| source.contains(m)) {
            self.wire
        } else {
            NEUTRAL_SOURCE_WEIGHT
        }
    }
}

/// Weight of `source` under the default multipliers.
pub fn source_weight(source: &str) -> f64 {
    SourceWeights::default().weight(source)
}
