//! Output file writing.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{SiteConfigError, SiteResult};
use crate::fqdn::FqdnSet;

/// Writer for the fqdn output file.
pub struct FqdnWriter;

impl FqdnWriter {
    /// Write the set as the entire contents of `path`, replacing any existing file.
    pub fn write_file(path: impl AsRef<Path>, fqdns: &FqdnSet) -> SiteResult<()> {
        let path = path.as_ref();
        debug!("Writing {} fqdns to {:?}", fqdns.len(), path);

        fs::write(path, fqdns.render()).map_err(|source| SiteConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_overwrites_existing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("lc");
        fs::write(&path, "stale.example.com\nother.example.com\nmore\n").unwrap();

        let mut set = FqdnSet::new();
        set.insert("fresh.example.com");
        FqdnWriter::write_file(&path, &set).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh.example.com");
    }

    #[test]
    fn test_write_missing_parent_dir() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing").join("lc");

        let err = FqdnWriter::write_file(&path, &FqdnSet::new()).unwrap_err();
        assert!(matches!(err, SiteConfigError::Write { .. }));
    }
}
