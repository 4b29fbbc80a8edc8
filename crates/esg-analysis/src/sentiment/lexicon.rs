//! Rule-based sentiment over a user-supplied lexicon.
//!
//! Valences live on the VADER [-4, 4] scale. Per token: boosters within
//! three tokens before a sentiment word push it away from zero, each
//! negation within the same window flips and dampens it once (so a double
//! negative restores the sign), and a contrastive "but" halves everything
//! before it and amplifies everything after it.

use std::io::ErrorKind;
use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};

use esg_core::errors::ConfigError;

use super::{normalize, SentimentScorer, COMPOUND_DECIMALS};
use crate::scoring::round_to;

/// Factor applied to a negated valence.
const NEGATION_SCALAR: f64 = -0.74;

/// Booster increment and decrement.
const BOOST_INCR: f64 = 0.293;
const BOOST_DECR: f64 = -0.293;

/// Booster decay by distance (1, 2, 3 tokens back).
const BOOST_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

/// Tokens looked back for boosters and negations.
const WINDOW: usize = 3;

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere", "cannot",
    "cant", "dont", "doesnt", "didnt", "isnt", "arent", "wasnt", "werent", "wont", "wouldnt",
    "shouldnt", "couldnt", "don", "doesn", "didn", "isn", "aren", "wasn", "weren", "without",
    "hardly", "rarely", "seldom",
];

const BOOSTERS_UP: &[&str] = &[
    "absolutely", "very", "extremely", "highly", "hugely", "significantly", "substantially",
    "remarkably", "greatly", "incredibly", "really", "especially", "deeply", "strongly", "totally",
    "most", "more",
];

const BOOSTERS_DOWN: &[&str] = &[
    "slightly", "somewhat", "marginally", "partly", "little", "occasionally", "less",
];

/// Lexicon scorer. Starts with no valences; entries come from
/// [`with_entries`](Self::with_entries) or a lexicon file.
#[derive(Debug, Clone)]
pub struct LexiconSentiment {
    valences: FxHashMap<String, f64>,
    boosters: FxHashMap<String, f64>,
    negations: FxHashSet<String>,
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconSentiment {
    /// Scorer with the English negation and booster rules and no valences.
    pub fn new() -> Self {
        let valences = FxHashMap::default();
        let boosters = BOOSTERS_UP
            .iter()
            .map(|w| (w.to_string(), BOOST_INCR))
            .chain(BOOSTERS_DOWN.iter().map(|w| (w.to_string(), BOOST_DECR)))
            .collect();
        let negations = NEGATIONS.iter().map(|w| w.to_string()).collect();
        Self {
            valences,
            boosters,
            negations,
        }
    }

    /// Add or replace valence entries. Words are lowercased.
    pub fn with_entries<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        for (word, valence) in entries {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() && valence.is_finite() {
                self.valences.insert(word, valence);
            }
        }
        self
    }

    /// Extend the lexicon from a YAML map of `word: valence`.
    pub fn with_lexicon_file(self, path: &Path) -> Result<Self, ConfigError> {
        let label = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound { path: label.clone() },
            _ => ConfigError::ReadFailed {
                path: label.clone(),
                message: e.to_string(),
            },
        })?;
        let entries: FxHashMap<String, f64> =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: label,
                message: e.to_string(),
            })?;
        tracing::info!(path = %path.display(), entries = entries.len(), "extra sentiment lexicon loaded");
        Ok(self.with_entries(entries))
    }

    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }

    fn token_valence(&self, tokens: &[&str], i: usize) -> f64 {
        let token = tokens[i];
        if self.boosters.contains_key(token) {
            return 0.0;
        }
        let Some(mut valence) = self.valence(token) else {
            return 0.0;
        };

        let sign = valence.signum();
        let mut negations = 0;
        for dist in 1..=WINDOW.min(i) {
            let prev = tokens[i - dist];
            if let Some(boost) = self.boosters.get(prev) {
                valence += boost * sign * BOOST_DECAY[dist - 1];
            }
            if self.negations.contains(prev) {
                negations += 1;
            }
        }
        valence * NEGATION_SCALAR.powi(negations)
    }

    /// Per-token valences after boosters, negation and the "but" rule.
    fn token_valences(&self, tokens: &[&str]) -> Vec<f64> {
        let mut valences: Vec<f64> = (0..tokens.len()).map(|i| self.token_valence(tokens, i)).collect();

        if let Some(but) = tokens.iter().position(|t| *t == "but") {
            for (i, v) in valences.iter_mut().enumerate() {
                if i < but {
                    *v *= 0.5;
                } else if i > but {
                    *v *= 1.5;
                }
            }
        }
        valences
    }

    /// Unnormalized valence sum of `text`.
    pub fn valence_sum(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();
        self.token_valences(&tokens).iter().sum()
    }
}

impl SentimentScorer for LexiconSentiment {
    fn compound(&self, text: &str) -> f64 {
        let sum = self.valence_sum(text);
        if sum == 0.0 {
            return 0.0;
        }
        round_to(normalize(sum), COMPOUND_DECIMALS)
    }
}
