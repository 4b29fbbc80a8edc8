//! Keyword vocabularies: the E/S/G catalog and the term sets it is built
//! from.

pub mod catalog;
pub mod term_set;

pub use catalog::{keyword_score, KeywordCatalog};
pub use term_set::TermSet;
