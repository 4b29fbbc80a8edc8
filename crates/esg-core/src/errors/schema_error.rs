//! Input schema errors.

use super::error_code::{self, EsgErrorCode};

/// The input table does not carry the columns the pipeline needs.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("input is missing required column '{column}'; observed columns: [{}]", .observed.join(", "))]
    MissingColumn {
        column: String,
        observed: Vec<String>,
    },

    #[error("input has no header row")]
    NoHeader,
}

impl EsgErrorCode for SchemaError {
    fn error_code(&self) -> &'static str {
        error_code::SCHEMA_ERROR
    }
}
