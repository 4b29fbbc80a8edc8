//! Greenwash detector configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Thresholds and vocabularies of the greenwash rule.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GreenwashConfig {
    /// Records required before a jump can be detected. Default: 3.
    pub min_history: Option<usize>,
    /// Stddev multiplier of the jump band. Default: 1.5.
    pub stddev_multiplier: Option<f64>,
    /// Absolute margin of the jump band. Default: 2.0.
    pub jump_margin: Option<f64>,
    /// Records with promotional language required. Default: 2.
    pub min_promo_hits: Option<usize>,
    /// Promotional vocabulary. Empty means the built-in set.
    #[serde(default)]
    pub promo_terms: Vec<String>,
    /// Evidentiary vocabulary. Empty means the built-in set.
    #[serde(default)]
    pub evidence_terms: Vec<String>,
}

impl GreenwashConfig {
    pub fn effective_min_history(&self) -> usize {
        self.min_history.unwrap_or(constants::DEFAULT_MIN_HISTORY)
    }

    pub fn effective_stddev_multiplier(&self) -> f64 {
        self.stddev_multiplier
            .unwrap_or(constants::DEFAULT_STDDEV_MULTIPLIER)
    }

    pub fn effective_jump_margin(&self) -> f64 {
        self.jump_margin.unwrap_or(constants::DEFAULT_JUMP_MARGIN)
    }

    pub fn effective_min_promo_hits(&self) -> usize {
        self.min_promo_hits
            .unwrap_or(constants::DEFAULT_MIN_PROMO_HITS)
    }

    pub fn effective_promo_terms(&self) -> Vec<String> {
        if self.promo_terms.is_empty() {
            constants::DEFAULT_PROMO_TERMS.iter().map(|t| t.to_string()).collect()
        } else {
            self.promo_terms.clone()
        }
    }

    pub fn effective_evidence_terms(&self) -> Vec<String> {
        if self.evidence_terms.is_empty() {
            constants::DEFAULT_EVIDENCE_TERMS.iter().map(|t| t.to_string()).collect()
        } else {
            self.evidence_terms.clone()
        }
    }
}
