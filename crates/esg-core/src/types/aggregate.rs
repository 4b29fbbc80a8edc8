//! Per-company summary rows.

use serde::{Deserialize, Serialize};

/// One output row per distinct company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyAggregate {
    pub company: String,
    /// Mean record score.
    pub esg_avg: f64,
    /// Score of the chronologically most recent record.
    pub esg_last: f64,
    /// Number of records, always >= 1.
    pub n_docs: usize,
    pub greenwash_flag: bool,
    pub extended: ExtendedMetrics,
}

/// Columns emitted only in extended output mode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtendedMetrics {
    /// Mean Environmental hits per record.
    pub esg_env: f64,
    /// Mean Social hits per record.
    pub esg_soc: f64,
    /// Mean Governance hits per record.
    pub esg_gov: f64,
    /// Percentage of records with positive sentiment.
    pub sentiment_pos: f64,
    /// Percentage of records with negative sentiment.
    pub sentiment_neg: f64,
    /// Value on the most recent record that has one.
    pub market_cap: Option<f64>,
    /// Value on the most recent record that has one.
    pub debt: Option<f64>,
}
