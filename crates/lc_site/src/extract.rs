//! End-to-end extraction: read, project, write.

use std::path::PathBuf;

use tracing::info;

use crate::error::SiteResult;
use crate::fqdn::{Extractor, FqdnSet};
use crate::reader::SiteConfigReader;
use crate::writer::FqdnWriter;

/// Input and output locations for one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Augmented site level config file to read
    pub config_path: PathBuf,
    /// File that receives the fqdns
    /// File the fqdns were written to
    pub output_path: PathBuf,
}

impl ExtractOptions {
    pub fn new(config_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            output_path: output_path.into(),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct ExtractReport {
    /// Number of `site_infrastructure` records read
    pub records: usize,
    /// Distinct fqdns written
    pub fqdns: FqdnSet,
    /// File the fqdns were written to
    pub output_path: PathBuf,
}

impl ExtractReport {
    /// Records dropped because their fqdn was already seen.
    pub fn duplicates(&self) -> usize {
        self.records - self.fqdns.len()
    }
}

/// Run the extraction. The output file is only touched once the config has
/// been read and every record yielded an fqdn.
pub fn extract(options: &ExtractOptions) -> SiteResult<ExtractReport> {
    let config = SiteConfigReader::read_file(&options.config_path)?;
    let records = config.records()?.len();
    info!(
        "Loaded {} site_infrastructure records from {:?}",
        records, options.config_path
    );

    let fqdns = Extractor::extract(&config)?;

    let report = ExtractReport {
        records,
        fqdns,
        output_path: options.output_path.clone(),
    };
    if report.duplicates() > 0 {
        info!("Dropped {} duplicate fqdns", report.duplicates());
    }

    FqdnWriter::write_file(&options.output_path, &report.fqdns)?;
    info!(
        "Wrote {} fqdns to {:?}",
        report.fqdns.len(),
        options.output_path
    );

    Ok(report)
}
