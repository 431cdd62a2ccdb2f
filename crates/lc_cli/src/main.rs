//! extract-lc - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Input read error
//! - 4: Parse error or non-string field
//! - 5: Missing key or field
//! - 6: Output write error

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lc_site::SiteConfigError;

mod cli;

use cli::Cli;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const READ_ERROR: u8 = 3;
    pub const PARSE_ERROR: u8 = 4;
    pub const LOOKUP_ERROR: u8 = 5;
    pub const WRITE_ERROR: u8 = 6;
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(ExitCodes::INVALID_ARGS)
            } else {
                ExitCode::from(ExitCodes::SUCCESS)
            };
        }
    };

    // Logs go to stderr; RUST_LOG takes precedence over the verbosity flags
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directives()));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match run(&cli) {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.extract_options();
    debug!("Running with {:?}", options);

    let report = lc_site::extract(&options).with_context(|| {
        format!(
            "Failed to extract fqdns from {}",
            options.config_path.display()
        )
    })?;

    if !cli.quiet {
        println!(
            "✅ Wrote {} fqdns to {}",
            report.fqdns.len(),
            report.output_path.display()
        );
    }

    Ok(())
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<SiteConfigError>() {
        Some(SiteConfigError::Read { .. }) => ExitCodes::READ_ERROR,
        Some(err) if err.is_parse() => ExitCodes::PARSE_ERROR,
        Some(err) if err.is_lookup() => ExitCodes::LOOKUP_ERROR,
        Some(SiteConfigError::Write { .. }) => ExitCodes::WRITE_ERROR,
        _ => ExitCodes::GENERAL_ERROR,
    }
}
