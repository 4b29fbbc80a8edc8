//! Input table loading errors.

use super::error_code::{self, EsgErrorCode};
use super::SchemaError;

/// Errors that can occur while reading the news table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Input file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed CSV in {path}{}: {message}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Csv {
        path: String,
        line: Option<u64>,
        message: String,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl EsgErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Schema(e) => e.error_code(),
            _ => error_code::LOAD_ERROR,
        }
    }
}
