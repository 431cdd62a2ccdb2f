//! Data models for the augmented site level configuration.
//!
//! Only the parts of the document needed for extraction are modelled. Every
//! other key is accepted and ignored.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::error::{SiteConfigError, SiteResult};

/// Top-level key holding the infrastructure records.
pub const SITE_INFRASTRUCTURE_KEY: &str = "site_infrastructure";

/// Record field holding the fully-qualified domain name.
pub const FQDN_FIELD: &str = "fqdn";

/// The augmented site level configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteLevelConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_infrastructure: Option<Vec<SiteInfrastructure>>,
}

impl SiteLevelConfig {
    pub fn new(records: Vec<SiteInfrastructure>) -> Self {
        Self {
            site_infrastructure: Some(records),
        }
    }

    /// Infrastructure records, or a lookup error when the section is absent.
    pub fn records(&self) -> SiteResult<&[SiteInfrastructure]> {
        self.site_infrastructure
            .as_deref()
            .ok_or_else(|| SiteConfigError::MissingKey(SITE_INFRASTRUCTURE_KEY.to_string()))
    }
}

/// One host entry under `site_infrastructure`.
///
/// `fqdn` is kept as a raw YAML value so that plain scalars such as `123` or
/// `true` are rejected instead of being read as strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteInfrastructure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<Value>,
}

impl SiteInfrastructure {
    pub fn new(fqdn: impl Into<String>) -> Self {
        Self {
            fqdn: Some(Value::String(fqdn.into())),
        }
    }

    /// The record's fqdn. `index` is the record position, used in the error.
    pub fn fqdn_at(&self, index: usize) -> SiteResult<&str> {
        match &self.fqdn {
            Some(Value::String(fqdn)) => Ok(fqdn),
            None | Some(Value::Null) => Err(SiteConfigError::MissingField {
                section: SITE_INFRASTRUCTURE_KEY.to_string(),
                index,
                field: FQDN_FIELD.to_string(),
            }),
            Some(_) => Err(SiteConfigError::InvalidField {
                section: SITE_INFRASTRUCTURE_KEY.to_string(),
                index,
                field: FQDN_FIELD.to_string(),
            }),
        }
    }
}
