//! News records before and after scoring.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::DimensionHits;

/// One validated article. `company` and `cleaned_text` are never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsRecord {
    pub company: String,
    /// `None` when the input has no date column or the value did not parse.
    pub date: Option<NaiveDateTime>,
    pub title: String,
    pub content: String,
    pub source: String,
    /// Normalized `title + " " + content`.
    pub cleaned_text: String,
    /// Market capitalization, when the input carries it.
    pub market_cap: Option<f64>,
    /// Debt ratio, when the input carries it.
    pub debt: Option<f64>,
}

/// Breakdown of a record's score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordScore {
    pub hits: DimensionHits,
    /// Compound polarity in [-1, 1].
    pub sentiment: f64,
    /// Source credibility multiplier.
    pub weight: f64,
    /// Final score, rounded to three decimals.
    pub score: f64,
}

/// A record together with its score. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub record: NewsRecord,
    pub score: RecordScore,
}

impl ScoredRecord {
    pub fn esg_score(&self) -> f64 {
        self.score.score
    }

    pub fn company(&self) -> &str {
        &self.record.company
    }

    pub fn date(&self) -> Option<NaiveDateTime> {
        self.record.date
    }

    pub fn cleaned_text(&self) -> &str {
        &self.record.cleaned_text
    }
}
