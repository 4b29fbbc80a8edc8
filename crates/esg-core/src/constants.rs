//! Shared constants for the ESG signal pipeline.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Scoring ----

/// Weight of one Environmental keyword hit.
pub const DEFAULT_E_WEIGHT: f64 = 0.6;

/// Weight of one Social keyword hit.
pub const DEFAULT_S_WEIGHT: f64 = 0.5;

/// Weight of one Governance keyword hit.
pub const DEFAULT_G_WEIGHT: f64 = 0.4;

/// Multiplier applied to the compound sentiment score.
pub const DEFAULT_SENTIMENT_GAIN: f64 = 3.0;

/// Source multiplier for regulatory filings and official sources.
pub const DEFAULT_REGULATORY_WEIGHT: f64 = 1.30;

/// Source multiplier for major wire services.
pub const DEFAULT_WIRE_WEIGHT: f64 = 1.15;

/// Source multiplier for everything else.
pub const NEUTRAL_SOURCE_WEIGHT: f64 = 1.0;

/// Decimal places kept on a record score.
pub const SCORE_DECIMALS: usize = 3;

/// Substrings that mark a regulatory or official-filing source. Checked first.
pub const REGULATORY_SOURCE_MARKERS: [&str; 4] = ["dart", "공시", "sec", "gov"];

/// Substrings that mark a major wire-service source.
pub const WIRE_SOURCE_MARKERS: [&str; 3] = ["reuters", "bloomberg", "wsj"];

/// Compound score at or above which a record counts as positive.
pub const SENTIMENT_POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound score at or below which a record counts as negative.
pub const SENTIMENT_NEGATIVE_THRESHOLD: f64 = -0.05;

// ---- Greenwash detection ----

/// Minimum records per company before a jump can be detected.
pub const DEFAULT_MIN_HISTORY: usize = 3;

/// Standard deviations of the prior scores the last score must clear.
pub const DEFAULT_STDDEV_MULTIPLIER: f64 = 1.5;

/// Absolute margin added on top of the stddev band.
pub const DEFAULT_JUMP_MARGIN: f64 = 2.0;

/// Minimum records carrying promotional language.
pub const DEFAULT_MIN_PROMO_HITS: usize = 2;

/// Promotional vocabulary.
pub const DEFAULT_PROMO_TERMS: [&str; 5] = ["혁신", "선도", "세계적", "친환경 경영", "지속가능 리더"];

/// Evidentiary vocabulary: reductions, emissions data, certification, audits.
pub const DEFAULT_EVIDENCE_TERMS: [&str; 6] = ["감축", "배출량", "인증", "감사", "공인", "검증"];

// ---- CLI & files ----

/// Default input news table.
pub const DEFAULT_INPUT_PATH: &str = "data/news_samples.csv";

/// Default keyword catalog.
pub const DEFAULT_KEYWORDS_PATH: &str = "data/esg_keywords.yaml";

/// Default output table.
pub const DEFAULT_OUTPUT_PATH: &str = "results.csv";

/// Project config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "esg.toml";

// ---- Logging ----

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "ESG_LOG";

/// Filter used when `ESG_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "esg_core=info,esg_analysis=info,esg_cli=info";
