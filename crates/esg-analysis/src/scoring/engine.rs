//! Per-record score: `round((0.6*E + 0.5*S + 0.4*G + 3.0*sentiment) * weight, 3)`.

use esg_core::config::{MatchMode, ScoringConfig};
use esg_core::constants::{
    DEFAULT_E_WEIGHT, DEFAULT_G_WEIGHT, DEFAULT_S_WEIGHT, DEFAULT_SENTIMENT_GAIN, SCORE_DECIMALS,
};
use esg_core::types::{DimensionHits, NewsRecord, RecordScore, ScoredRecord};

use super::rounding::round_to;
use super::source::SourceWeights;
use crate::keywords::KeywordCatalog;
use crate::sentiment::SentimentScorer;

/// Linear coefficients of the score formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreCoefficients {
    pub env: f64,
    pub soc: f64,
    pub gov: f64,
    pub sentiment_gain: f64,
}

impl Default for ScoreCoefficients {
    fn default() -> Self {
        Self {
            env: DEFAULT_E_WEIGHT,
            soc: DEFAULT_S_WEIGHT,
            gov: DEFAULT_G_WEIGHT,
            sentiment_gain: DEFAULT_SENTIMENT_GAIN,
        }
    }
}

impl ScoreCoefficients {
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            env: config.effective_e_weight(),
            soc: config.effective_s_weight(),
            gov: config.effective_g_weight(),
            sentiment_gain: config.effective_sentiment_gain(),
        }
    }

    /// Keyword part of the score.
    pub fn base(&self, hits: &DimensionHits) -> f64 {
        self.env * f64::from(hits.env) + self.soc * f64::from(hits.soc) + self.gov * f64::from(hits.gov)
    }
}

/// Scores records against a catalog with an explicitly supplied sentiment
/// scorer. Holds no mutable state: the same inputs always give the same
/// score.
pub struct EsgScoreEngine<'a> {
    catalog: &'a KeywordCatalog,
    sentiment: &'a dyn SentimentScorer,
    coefficients: ScoreCoefficients,
    sources: SourceWeights,
    match_mode: MatchMode,
}

impl<'a> EsgScoreEngine<'a> {
    /// Engine with the reference coefficients and presence counting.
    pub fn new(catalog: &'a KeywordCatalog, sentiment: &'a dyn SentimentScorer) -> Self {
        Self {
            catalog,
            sentiment,
            coefficients: ScoreCoefficients::default(),
            sources: SourceWeights::default(),
            match_mode: MatchMode::Presence,
        }
    }

    pub fn from_config(
        catalog: &'a KeywordCatalog,
        sentiment: &'a dyn SentimentScorer,
        config: &ScoringConfig,
    ) -> Self {
        Self {
            catalog,
            sentiment,
            coefficients: ScoreCoefficients::from_config(config),
            sources: SourceWeights::from_config(config),
            match_mode: config.effective_match_mode(),
        }
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Full score breakdown of one cleaned text.
    pub fn score(&self, text: &str, source: &str) -> RecordScore {
        let hits = self.catalog.hits(text, self.match_mode);
        let sentiment = self.sentiment.compound(text);
        let weight = self.sources.weight(source);
        let raw = (self.coefficients.base(&hits) + self.coefficients.sentiment_gain * sentiment) * weight;
        RecordScore {
            hits,
            sentiment,
            weight,
            score: round_to(raw, SCORE_DECIMALS),
        }
    }

    /// The rounded score alone.
    pub fn esg_score(&self, text: &str, source: &str) -> f64 {
        self.score(text, source).score
    }

    pub fn score_record(&self, record: NewsRecord) -> ScoredRecord {
        let score = self.score(&record.cleaned_text, &record.source);
        ScoredRecord { record, score }
    }
}
