//! Per-record ESG scoring: keyword hits, sentiment and source credibility.

pub mod engine;
pub mod rounding;
pub mod source;

pub use engine::{EsgScoreEngine, ScoreCoefficients};
pub use rounding::round_to;
pub use source::{source_weight, SourceWeights};
