//! Core types, errors, configuration, tracing and constants shared by the
//! ESG signal crates.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
