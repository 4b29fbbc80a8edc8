//! ESG scoring engine.
//!
//! Turns a table of news articles into one row per company: a keyword and
//! sentiment based ESG score per article, per-company aggregates, and a
//! greenwashing flag.

pub mod aggregation;
pub mod greenwash;
pub mod keywords;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod sentiment;
pub mod text;
