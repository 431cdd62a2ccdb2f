//! Site config reading utilities.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{SiteConfigError, SiteResult};
use crate::models::SiteLevelConfig;

/// Reader for augmented site level config files.
pub struct SiteConfigReader;

impl SiteConfigReader {
    /// Read and parse a config file.
    pub fn read_file(path: impl AsRef<Path>) -> SiteResult<SiteLevelConfig> {
        let path = path.as_ref();
        debug!("Reading site config from {:?}", path);

        let content = fs::read_to_string(path).map_err(|source| SiteConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_str(&content).map_err(|source| SiteConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a config document held in memory.
    pub fn parse_str(content: &str) -> SiteResult<SiteLevelConfig> {
        let config = serde_yaml::from_str(content)?;
        Ok(config)
    }
}
