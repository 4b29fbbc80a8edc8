//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{GreenwashConfig, MatchMode, OutputConfig, OutputFormat, PipelineConfig, ScoringConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ESG_*`)
/// 3. Config file (explicit path, or `esg.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EsgConfig {
    pub scoring: ScoringConfig,
    pub greenwash: GreenwashConfig,
    pub pipeline: PipelineConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub threads: Option<usize>,
    pub parallel: Option<bool>,
    pub output_format: Option<OutputFormat>,
    pub extended: Option<bool>,
}

impl EsgConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `config_path` must exist. Without one, `esg.toml` under
    /// `root` is used when present and skipped otherwise.
    pub fn load(
        root: &Path,
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                Self::merge_toml_file(&mut config, path)?;
            }
            None => {
                let project_config_path = root.join(constants::DEFAULT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &EsgConfig) -> Result<(), ConfigError> {
        let weights = [
            ("scoring.e_weight", config.scoring.e_weight),
            ("scoring.s_weight", config.scoring.s_weight),
            ("scoring.g_weight", config.scoring.g_weight),
            ("scoring.sentiment_gain", config.scoring.sentiment_gain),
            ("scoring.regulatory_weight", config.scoring.regulatory_weight),
            ("scoring.wire_weight", config.scoring.wire_weight),
            ("greenwash.jump_margin", config.greenwash.jump_margin),
        ];
        for (field, value) in weights {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be a finite number".to_string(),
                    });
                }
            }
        }
        if let Some(min_history) = config.greenwash.min_history {
            if min_history < 2 {
                return Err(ConfigError::ValidationFailed {
                    field: "greenwash.min_history".to_string(),
                    message: "must be at least 2".to_string(),
                });
            }
        }
        if let Some(multiplier) = config.greenwash.stddev_multiplier {
            if !multiplier.is_finite() || multiplier < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "greenwash.stddev_multiplier".to_string(),
                    message: "must be a non-negative finite number".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut EsgConfig, path: &Path) -> Result<(), ConfigError> {
        let label = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound { path: label.clone() },
            _ => ConfigError::ReadFailed {
                path: label.clone(),
                message: e.to_string(),
            },
        })?;

        let file_config: EsgConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: label,
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` (or non-empty) value.
    fn merge(base: &mut EsgConfig, other: &EsgConfig) {
        // Scoring
        if other.scoring.e_weight.is_some() {
            base.scoring.e_weight = other.scoring.e_weight;
        }
        if other.scoring.s_weight.is_some() {
            base.scoring.s_weight = other.scoring.s_weight;
        }
        if other.scoring.g_weight.is_some() {
            base.scoring.g_weight = other.scoring.g_weight;
        }
        if other.scoring.sentiment_gain.is_some() {
            base.scoring.sentiment_gain = other.scoring.sentiment_gain;
        }
        if other.scoring.regulatory_weight.is_some() {
            base.scoring.regulatory_weight = other.scoring.regulatory_weight;
        }
        if other.scoring.wire_weight.is_some() {
            base.scoring.wire_weight = other.scoring.wire_weight;
        }
        if other.scoring.match_mode.is_some() {
            base.scoring.match_mode = other.scoring.match_mode;
        }
        if other.scoring.lexicon_path.is_some() {
            base.scoring.lexicon_path = other.scoring.lexicon_path.clone();
        }

        // Greenwash
        if other.greenwash.min_history.is_some() {
            base.greenwash.min_history = other.greenwash.min_history;
        }
        if other.greenwash.stddev_multiplier.is_some() {
            base.greenwash.stddev_multiplier = other.greenwash.stddev_multiplier;
        }
        if other.greenwash.jump_margin.is_some() {
            base.greenwash.jump_margin = other.greenwash.jump_margin;
        }
        if other.greenwash.min_promo_hits.is_some() {
            base.greenwash.min_promo_hits = other.greenwash.min_promo_hits;
        }
        if !other.greenwash.promo_terms.is_empty() {
            base.greenwash.promo_terms = other.greenwash.promo_terms.clone();
        }
        if !other.greenwash.evidence_terms.is_empty() {
            base.greenwash.evidence_terms = other.greenwash.evidence_terms.clone();
        }

        // Pipeline
        if other.pipeline.parallel.is_some() {
            base.pipeline.parallel = other.pipeline.parallel;
        }
        if other.pipeline.threads.is_some() {
            base.pipeline.threads = other.pipeline.threads;
        }

        // Output
        if other.output.format.is_some() {
            base.output.format = other.output.format;
        }
        if other.output.extended.is_some() {
            base.output.extended = other.output.extended;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ESG_SCORING_MATCH_MODE`, `ESG_PIPELINE_THREADS`, etc.
    fn apply_env_overrides(config: &mut EsgConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("ESG_SCORING_MATCH_MODE") {
            let mode = val.parse::<MatchMode>().map_err(|message| ConfigError::InvalidValue {
                field: "ESG_SCORING_MATCH_MODE".to_string(),
                message,
            })?;
            config.scoring.match_mode = Some(mode);
        }
        if let Ok(val) = std::env::var("ESG_GREENWASH_MIN_HISTORY") {
            if let Ok(v) = val.parse::<usize>() {
                config.greenwash.min_history = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ESG_PIPELINE_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.pipeline.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ESG_PIPELINE_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.pipeline.parallel = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ESG_OUTPUT_FORMAT") {
            let format = val.parse::<OutputFormat>().map_err(|message| ConfigError::InvalidValue {
                field: "ESG_OUTPUT_FORMAT".to_string(),
                message,
            })?;
            config.output.format = Some(format);
        }
        if let Ok(val) = std::env::var("ESG_OUTPUT_EXTENDED") {
            if let Ok(v) = val.parse::<bool>() {
                config.output.extended = Some(v);
            }
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut EsgConfig, cli: &CliOverrides) {
        if let Some(v) = cli.threads {
            config.pipeline.threads = Some(v);
        }
        if let Some(v) = cli.parallel {
            config.pipeline.parallel = Some(v);
        }
        if let Some(v) = cli.output_format {
            config.output.format = Some(v);
        }
        if let Some(v) = cli.extended {
            config.output.extended = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
