//! FQDN projection and deduplication.

use std::collections::btree_set::{self, BTreeSet};

use tracing::debug;

use crate::error::SiteResult;
use crate::models::SiteLevelConfig;

/// Deduplicated set of fqdns.
///
/// Members iterate and render in ascending lexicographic order, so the same
/// input always yields byte-identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FqdnSet {
    fqdns: BTreeSet<String>,
}

impl FqdnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an fqdn. Returns false if it was already present.
    pub fn insert(&mut self, fqdn: impl Into<String>) -> bool {
        self.fqdns.insert(fqdn.into())
    }

    pub fn contains(&self, fqdn: &str) -> bool {
        self.fqdns.contains(fqdn)
    }

    pub fn len(&self) -> usize {
        self.fqdns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fqdns.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.fqdns.iter()
    }

    /// Members joined with `\n`, without a trailing newline.
    pub fn render(&self) -> String {
        self.fqdns
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<String> for FqdnSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            fqdns: iter.into_iter().collect(),
        }
    }
}

/// Projects fqdns out of a site config.
pub struct Extractor;

impl Extractor {
    /// Collect the fqdn of every `site_infrastructure` record.
    ///
    /// Fails on the first record without an fqdn; nothing is skipped.
    pub fn extract(config: &SiteLevelConfig) -> SiteResult<FqdnSet> {
        let records = config.records()?;
        let mut set = FqdnSet::new();

        for (index, record) in records.iter().enumerate() {
            let fqdn = record.fqdn_at(index)?;
            if !set.insert(fqdn) {
                debug!("Duplicate fqdn {} at record {}", fqdn, index);
            }
        }

        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteConfigError;
    use crate::models::SiteInfrastructure;
    use crate::reader::SiteConfigReader;

    #[test]
    fn test_extract_deduplicates() {
        let config = SiteLevelConfig::new(vec![
            SiteInfrastructure::new("a.example.com"),
            SiteInfrastructure::new("b.example.com"),
            SiteInfrastructure::new("a.example.com"),
        ]);

        let set = Extractor::extract(&config).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("a.example.com"));
        assert!(set.contains("b.example.com"));
    }

    #[test]
    fn test_extract_empty_section() {
        let set = Extractor::extract(&SiteLevelConfig::new(Vec::new())).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.render(), "");
    }

    #[test]
    fn test_extract_aborts_on_missing_fqdn() {
        let config = SiteLevelConfig::new(vec![
            SiteInfrastructure::new("a.example.com"),
            SiteInfrastructure::default(),
            SiteInfrastructure::new("c.example.com"),
        ]);

        match Extractor::extract(&config) {
            Err(SiteConfigError::MissingField { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_aborts_on_non_string_fqdn() {
        let config = SiteConfigReader::parse_str(
            "site_infrastructure:\n  - fqdn: a.example.com\n  - fqdn: 123\n",
        )
        .unwrap();

        match Extractor::extract(&config) {
            Err(SiteConfigError::InvalidField { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_missing_section() {
        let err = Extractor::extract(&SiteLevelConfig::default()).unwrap_err();
        assert!(matches!(err, SiteConfigError::MissingKey(_)));
    }

    #[test]
    fn test_render_sorted_without_trailing_newline() {
        let set: FqdnSet = ["zeta.example.com", "alpha.example.com", "mid.example.com"]
            .into_iter()
            .map(String::from)
            .collect();

        assert_eq!(
            set.render(),
            "alpha.example.com\nmid.example.com\nzeta.example.com"
        );
    }

    #[test]
    fn test_insert_reports_duplicates() {
        let mut set = FqdnSet::new();
        assert!(set.insert("lc.example.com"));
        assert!(!set.insert("lc.example.com"));
        assert_eq!(set.iter().count(), 1);
    }
}
