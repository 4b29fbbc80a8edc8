//! Record scoring configuration.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants;

/// How keyword terms contribute to a dimension count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// A term counts at most once per record.
    #[default]
    Presence,
    /// A term counts once per non-overlapping occurrence.
    Occurrence,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "presence" => Ok(Self::Presence),
            "occurrence" => Ok(Self::Occurrence),
            other => Err(format!("unknown match mode '{other}'")),
        }
    }
}

/// Configuration for the per-record score formula.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight per Environmental hit. Default: 0.6.
    pub e_weight: Option<f64>,
    /// Weight per Social hit. Default: 0.5.
    pub s_weight: Option<f64>,
    /// Weight per Governance hit. Default: 0.4.
    pub g_weight: Option<f64>,
    /// Multiplier on the compound sentiment. Default: 3.0.
    pub sentiment_gain: Option<f64>,
    /// Multiplier for regulatory/official sources. Default: 1.30.
    pub regulatory_weight: Option<f64>,
    /// Multiplier for wire services. Default: 1.15.
    pub wire_weight: Option<f64>,
    /// Keyword counting mode. Default: presence.
    pub match_mode: Option<MatchMode>,
    /// Optional YAML map of extra sentiment lexicon entries.
    pub lexicon_path: Option<PathBuf>,
}

impl ScoringConfig {
    pub fn effective_e_weight(&self) -> f64 {
        self.e_weight.unwrap_or(constants::DEFAULT_E_WEIGHT)
    }

    pub fn effective_s_weight(&self) -> f64 {
        self.s_weight.unwrap_or(constants::DEFAULT_S_WEIGHT)
    }

    pub fn effective_g_weight(&self) -> f64 {
        self.g_weight.unwrap_or(constants::DEFAULT_G_WEIGHT)
    }

    pub fn effective_sentiment_gain(&self) -> f64 {
        self.sentiment_gain
            .unwrap_or(constants::DEFAULT_SENTIMENT_GAIN)
    }

    pub fn effective_regulatory_weight(&self) -> f64 {
        self.regulatory_weight
            .unwrap_or(constants::DEFAULT_REGULATORY_WEIGHT)
    }

    pub fn effective_wire_weight(&self) -> f64 {
        self.wire_weight.unwrap_or(constants::DEFAULT_WIRE_WEIGHT)
    }

    pub fn effective_match_mode(&self) -> MatchMode {
        self.match_mode.unwrap_or_default()
    }
}
