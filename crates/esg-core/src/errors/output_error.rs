//! Output table errors.

use super::error_code::{self, EsgErrorCode};

/// Errors that can occur while writing the result table.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to write {path}: {message}")]
    Io { path: String, message: String },

    #[error("CSV serialization failed: {0}")]
    Csv(String),

    #[error("JSON serialization failed: {0}")]
    Json(String),
}

impl EsgErrorCode for OutputError {
    fn error_code(&self) -> &'static str {
        error_code::OUTPUT_ERROR
    }
}
