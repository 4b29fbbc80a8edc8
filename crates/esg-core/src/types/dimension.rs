//! ESG dimensions and per-dimension keyword hit counts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three ESG sub-dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "E")]
    Environmental,
    #[serde(rename = "S")]
    Social,
    #[serde(rename = "G")]
    Governance,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Self::Environmental, Self::Social, Self::Governance];

    /// The single-letter tag used in keyword catalogs.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Environmental => "E",
            Self::Social => "S",
            Self::Governance => "G",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Keyword hits of one record, per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DimensionHits {
    #[serde(rename = "E")]
    pub env: u32,
    #[serde(rename = "S")]
    pub soc: u32,
    #[serde(rename = "G")]
    pub gov: u32,
}

impl DimensionHits {
    pub fn set(&mut self, dimension: Dimension, value: u32) {
        match dimension {
            Dimension::Environmental => self.env = value,
            Dimension::Social => self.soc = value,
            Dimension::Governance => self.gov = value,
        }
    }
}
