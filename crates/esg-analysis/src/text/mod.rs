//! Text normalization.

pub mod normalizer;

pub use normalizer::{clean, clean_field, TextNormalizer};
