//! Error handling for the ESG pipeline.
//! One error enum per subsystem, `thiserror` only.

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod load_error;
pub mod output_error;
pub mod pipeline_error;
pub mod schema_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::EsgErrorCode;
pub use load_error::LoadError;
pub use output_error::OutputError;
pub use pipeline_error::PipelineError;
pub use schema_error::SchemaError;
