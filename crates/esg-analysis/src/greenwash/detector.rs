//! Per-company greenwash rule.
//!
//! With records in chronological order, the last score is compared against
//! the mean and population standard deviation of all earlier scores. A
//! company is flagged when the jump exceeds `stddev * multiplier + margin`,
//! at least `min_promo_hits` records use promotional language, and no record
//! uses evidentiary language.

use statrs::statistics::Statistics;

use esg_core::config::GreenwashConfig;
use esg_core::errors::ConfigError;
use esg_core::types::ScoredRecord;

use crate::aggregation::sort_chronologically;
use crate::keywords::TermSet;

/// Everything the rule looked at for one company.
#[derive(Debug, Clone, PartialEq)]
pub struct GreenwashAssessment {
    /// Number of records considered.
    pub history: usize,
    /// Score of the most recent record.
    pub last: f64,
    pub prior_mean: f64,
    pub prior_std: f64,
    /// Whether `last` lies above the jump band.
    pub jump: bool,
    /// Records containing at least one promotional term.
    pub promo_hits: usize,
    /// Records containing at least one evidentiary term.
    pub evidence_hits: usize,
    pub min_promo_hits: usize,
}

impl GreenwashAssessment {
    pub fn is_flagged(&self) -> bool {
        self.jump && self.promo_hits >= self.min_promo_hits && self.evidence_hits == 0
    }
}

#[derive(Debug, Clone)]
pub struct GreenwashDetector {
    min_history: usize,
    stddev_multiplier: f64,
    jump_margin: f64,
    min_promo_hits: usize,
    promo: TermSet,
    evidence: TermSet,
}

impl GreenwashDetector {
    pub fn new(config: &GreenwashConfig) -> Result<Self, ConfigError> {
        let build = |field: &str, terms: Vec<String>| {
            TermSet::new(terms).map_err(|e| ConfigError::InvalidValue {
                field: field.to_string(),
                message: e.to_string(),
            })
        };

        Ok(Self {
            min_history: config.effective_min_history(),
            stddev_multiplier: config.effective_stddev_multiplier(),
            jump_margin: config.effective_jump_margin(),
            min_promo_hits: config.effective_min_promo_hits(),
            promo: build("greenwash.promo_terms", config.effective_promo_terms())?,
            evidence: build("greenwash.evidence_terms", config.effective_evidence_terms())?,
        })
    }

    pub fn min_history(&self) -> usize {
        self.min_history
    }

    /// Evaluate the rule for one company's records, in any order.
    ///
    /// Returns `None` when there is too little history to judge.
    pub fn assess(&self, records: &[&ScoredRecord]) -> Option<GreenwashAssessment> {
        if records.len() < self.min_history.max(2) {
            return None;
        }

        let mut ordered = records.to_vec();
        sort_chronologically(&mut ordered);

        let scores: Vec<f64> = ordered.iter().map(|r| r.esg_score()).collect();
        let (last, prior) = scores.split_last()?;
        let prior_mean = prior.iter().mean();
        let prior_std = prior.iter().population_std_dev();
        let jump = (last - prior_mean) > prior_std * self.stddev_multiplier + self.jump_margin;

        let promo_hits = ordered
            .iter()
            .filter(|r| self.promo.contains_any(r.cleaned_text()))
            .count();
        let evidence_hits = ordered
            .iter()
            .filter(|r| self.evidence.contains_any(r.cleaned_text()))
            .count();

        Some(GreenwashAssessment {
            history: ordered.len(),
            last: *last,
            prior_mean,
            prior_std,
            jump,
            promo_hits,
            evidence_hits,
            min_promo_hits: self.min_promo_hits,
        })
    }

    /// Verdict for one company. Short histories are never flagged.
    pub fn detect(&self, records: &[&ScoredRecord]) -> bool {
        self.assess(records).is_some_and(|a| a.is_flagged())
    }
}
