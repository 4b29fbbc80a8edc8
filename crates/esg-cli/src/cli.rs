use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use esg_core::config::{CliOverrides, OutputFormat};
use esg_core::constants::{DEFAULT_INPUT_PATH, DEFAULT_KEYWORDS_PATH, DEFAULT_OUTPUT_PATH};

#[derive(Parser, Debug)]
#[command(name = "esg", version, about = "Score ESG news coverage and flag likely greenwashing")]
pub struct Cli {
    #[arg(long = "in", default_value = DEFAULT_INPUT_PATH, help = "News table (CSV)")]
    pub input: PathBuf,
    #[arg(long = "kw", default_value = DEFAULT_KEYWORDS_PATH, help = "Keyword catalog (YAML with E/S/G lists)")]
    pub keywords: PathBuf,
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH, help = "Result table path")]
    pub out: PathBuf,
    #[arg(long, help = "Config file (defaults to esg.toml when present)")]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum, help = "Output format")]
    pub format: Option<FormatArg>,
    #[arg(long, default_value_t = false, help = "Append per-dimension, sentiment and financial columns")]
    pub extended: bool,
    #[arg(long, help = "Worker threads (0 = one per core)")]
    pub threads: Option<usize>,
    #[arg(long, default_value_t = false, help = "Disable parallel scoring")]
    pub sequential: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Flags that override file and environment settings. Unset flags
    /// leave lower layers alone.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            threads: self.threads,
            parallel: self.sequential.then_some(false),
            output_format: self.format.map(OutputFormat::from),
            extended: self.extended.then_some(true),
        }
    }
}
