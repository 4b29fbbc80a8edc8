//! VADER sentiment, with an optional supplementary lexicon.

use std::fmt;

use vader_sentiment::SentimentIntensityAnalyzer;

use super::{denormalize, normalize, LexiconSentiment, SentimentScorer, COMPOUND_DECIMALS};
use crate::scoring::round_to;

/// Default scorer: the VADER compound, rounded to four decimals.
///
/// With a supplement attached, the supplement's valence sum over the same
/// text is added to the VADER sum before normalization. Supplement entries
/// are meant for words VADER has no valence for; an English word present in
/// both lexicons counts twice.
pub struct VaderSentiment {
    analyzer: SentimentIntensityAnalyzer<'static>,
    supplement: Option<LexiconSentiment>,
}

impl VaderSentiment {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
            supplement: None,
        }
    }

    /// Layer `lexicon` over VADER. An empty lexicon is dropped.
    pub fn with_supplement(mut self, lexicon: LexiconSentiment) -> Self {
        self.supplement = (!lexicon.is_empty()).then_some(lexicon);
        self
    }

    fn vader_compound(&self, text: &str) -> f64 {
        self.analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
    }
}

impl Default for VaderSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VaderSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaderSentiment")
            .field("supplement", &self.supplement)
            .finish_non_exhaustive()
    }
}

impl SentimentScorer for VaderSentiment {
    fn compound(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let base = self.vader_compound(text);
        let extra = self
            .supplement
            .as_ref()
            .map_or(0.0, |lexicon| lexicon.valence_sum(text));
        let compound = if extra == 0.0 {
            base
        } else {
            normalize(denormalize(base) + extra)
        };
        round_to(compound, COMPOUND_DECIMALS)
    }
}
