//! Catalog file persistence.
//!
//! A catalog is the list of [`CatalogEntry`] records a scan reconciles
//! against. This crate reads and writes it as YAML or JSON, chosen by the
//! file extension. The scanning engine itself never touches these files.

pub mod error;
pub mod store;

pub use error::CatalogError;
pub use store::{CATALOG_VERSION, CatalogDocument, CatalogFormat, load_catalog, save_catalog};

pub use romscan_core::CatalogEntry;
