//! Keyword catalog errors.

use super::error_code::{self, EsgErrorCode};

/// Errors that can occur while loading the keyword catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Keyword catalog not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read keyword catalog {path}: {message}")]
    Read { path: String, message: String },

    #[error("Keyword catalog parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Keyword catalog {path} could not be compiled: {message}")]
    Matcher { path: String, message: String },
}

impl EsgErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
