//! Input loaders for catalog and profile data
//!
//! These are the external collaborators of the recommendation engine: they
//! turn files into well-formed [`Catalog`](crate::core::models::Catalog)
//! and [`StudentProfile`](crate::core::models::StudentProfile) values. The
//! engine itself never parses anything.

pub mod catalog_csv;
pub mod profile_toml;

pub use catalog_csv::parse_catalog_csv;
pub use profile_toml::load_profile_toml;
