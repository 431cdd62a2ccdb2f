//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use lc_site::ExtractOptions;

/// extract-lc - Extract site infrastructure fqdns from a site level config
#[derive(Parser, Debug)]
#[command(name = "extract-lc")]
#[command(version, about = "Extract the LC fqdns from the augmented site level config file")]
#[command(long_about = r#"
Reads the augmented site level config file, collects the fqdn of every
site_infrastructure record, and writes the distinct fqdns to the output file,
one per line, in lexicographic order.

EXAMPLE:
  extract-lc -f /etc/simple_grid/site_config/augmented_site_level_config_file.yaml -o ~/.simple/lc

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Input file could not be read
  4 - Input file could not be parsed, or a field is not a string
  5 - Missing key or field
  6 - Output file could not be written
"#)]
pub struct Cli {
    /// Path to the augmented site level config file
    #[arg(short = 'f', long = "filename", value_name = "PATH")]
    pub filename: PathBuf,

    /// Path to the output file
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions::new(&self.filename, &self.output)
    }

    /// Default log filter for the chosen verbosity.
    pub fn log_directives(&self) -> &'static str {
        if self.verbose {
            "lc_cli=debug,lc_site=debug,warn"
        } else if self.quiet {
            "warn"
        } else {
            "lc_cli=info,lc_site=info,warn"
        }
    }
}
