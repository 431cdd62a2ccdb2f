//! Error types for site configuration extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for site configuration operations.
pub type SiteResult<T> = Result<T, SiteConfigError>;

/// Errors that can occur while extracting fqdns.
#[derive(Error, Debug)]
pub enum SiteConfigError {
    #[error("Failed to read site config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse site config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("YAML parsing error")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Missing key in site config: {0}")]
    MissingKey(String),

    #[error("Missing field '{field}' in {section} record {index}")]
    MissingField {
        section: String,
        index: usize,
        field: String,
    },

    #[error("Field '{field}' in {section} record {index} is not a string")]
    InvalidField {
        section: String,
        index: usize,
        field: String,
    },

    #[error("Failed to write output {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SiteConfigError {
    /// True for errors raised by looking up a key or field that is absent.
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::MissingKey(_) | Self::MissingField { .. })
    }

    /// True for errors raised while parsing the document or reading a
    /// field of the wrong type.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Yaml(_) | Self::InvalidField { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_leaves_cause_to_source() {
        let err = SiteConfigError::Read {
            path: PathBuf::from("site.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "Failed to read site config site.yaml");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("gone"));
    }
}
