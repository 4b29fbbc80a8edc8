use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use esg_analysis::pipeline::{execute, RunPaths};
use esg_core::config::EsgConfig;
use esg_core::errors::{EsgErrorCode, PipelineError};

mod cli;

use cli::Cli;

fn run(cli: &Cli) -> Result<(), PipelineError> {
    let config = EsgConfig::load(Path::new("."), cli.config.as_deref(), Some(&cli.overrides()))?;
    let paths = RunPaths {
        input: cli.input.clone(),
        keywords: cli.keywords.clone(),
        output: cli.out.clone(),
    };

    let output = execute(&config, &paths)?;
    tracing::debug!(diagnostics = %output.diagnostics, "run complete");
    println!("saved: {}", paths.output.display());
    Ok(())
}

fn main() -> ExitCode {
    esg_core::tracing::init_tracing();
    let cli = Cli::parse();
    tracing::debug!(version = esg_core::constants::VERSION, ?cli, "esg starting");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.error_code(), "run failed");
            eprintln!("{}", e.coded_string());
            if e.is_usage_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
