//! Top-level pipeline errors.

use super::error_code::{self, EsgErrorCode};
use super::{CatalogError, ConfigError, LoadError, OutputError, SchemaError};

/// Errors that abort a pipeline run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Keyword catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("Worker pool could not be built: {0}")]
    WorkerPool(String),
}

impl From<SchemaError> for PipelineError {
    fn from(e: SchemaError) -> Self {
        Self::Load(LoadError::Schema(e))
    }
}

impl PipelineError {
    /// True for errors caused by the run's inputs or settings rather than
    /// by the environment (I/O, thread pool).
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Catalog(_) | Self::Load(LoadError::Schema(_))
        )
    }
}

impl EsgErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::Load(e) => e.error_code(),
            Self::Output(e) => e.error_code(),
            Self::WorkerPool(_) => error_code::PIPELINE_ERROR,
        }
    }
}
