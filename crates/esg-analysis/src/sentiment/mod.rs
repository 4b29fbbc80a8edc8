//! Sentiment scoring.
//!
//! Scorers are constructed explicitly and passed by reference; there is no
//! process-wide instance. [`VaderSentiment`] is the default; a
//! [`LexiconSentiment`] carries user-supplied valences (e.g. Korean terms
//! the VADER lexicon does not know) and can be layered on top of it.

pub mod lexicon;
pub mod vader;

pub use lexicon::LexiconSentiment;
pub use vader::VaderSentiment;

/// Normalization constant of the squashing function.
const ALPHA: f64 = 15.0;

/// Decimal places of a compound score.
const COMPOUND_DECIMALS: usize = 4;

/// A deterministic polarity function.
pub trait SentimentScorer: Send + Sync {
    /// Compound polarity of `text` in [-1, 1]. Identical text must always
    /// produce an identical score.
    fn compound(&self, text: &str) -> f64;
}

/// Squash an unbounded valence sum into [-1, 1] with `s / sqrt(s² + 15)`.
fn normalize(sum: f64) -> f64 {
    let score = sum / (sum * sum + ALPHA).sqrt();
    score.clamp(-1.0, 1.0)
}

/// Inverse of [`normalize`]. A saturated compound maps to a large finite sum.
fn denormalize(compound: f64) -> f64 {
    let c = compound.clamp(-0.9999, 0.9999);
    c * (ALPHA / (1.0 - c * c)).sqrt()
}
