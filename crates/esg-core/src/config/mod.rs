//! Configuration system for the ESG pipeline.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod esg_config;
pub mod greenwash_config;
pub mod output_config;
pub mod pipeline_config;
pub mod scoring_config;

pub use esg_config::{CliOverrides, EsgConfig};
pub use greenwash_config::GreenwashConfig;
pub use output_config::{OutputConfig, OutputFormat};
pub use pipeline_config::PipelineConfig;
pub use scoring_config::{MatchMode, ScoringConfig};
