//! # lc_site
//!
//! Reading of the augmented site level configuration and extraction of the
//! fqdns listed under its `site_infrastructure` section.
//!
//! ## Pipeline
//!
//! 1. [`SiteConfigReader`] parses the YAML document into a [`SiteLevelConfig`].
//! 2. [`Extractor`] projects the `fqdn` of every record into an [`FqdnSet`].
//! 3. [`FqdnWriter`] writes the set, one fqdn per line, to the output file.
//!
//! [`extract()`] runs all three steps for a given [`ExtractOptions`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use lc_site::{extract, ExtractOptions};
//!
//! let options = ExtractOptions::new(
//!     "/etc/simple_grid/site_config/augmented_site_level_config_file.yaml",
//!     "/tmp/lc",
//! );
//! let report = extract(&options).unwrap();
//! println!("{} fqdns written", report.fqdns.len());
//! ```

pub mod error;
pub mod extract;
pub mod fqdn;
pub mod models;
pub mod reader;
pub mod writer;

pub use error::{SiteConfigError, SiteResult};
pub use extract::{extract, ExtractOptions, ExtractReport};
pub use fqdn::{Extractor, FqdnSet};
pub use models::{SiteInfrastructure, SiteLevelConfig, FQDN_FIELD, SITE_INFRASTRUCTURE_KEY};
pub use reader::SiteConfigReader;
pub use writer::FqdnWriter;
