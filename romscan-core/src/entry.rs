//! Catalog entry record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::file::FileRef;

/// `scanned_data` key holding the backing file path.
pub const FILE_KEY: &str = "file";

/// `scanned_data` key holding the base name without extension.
pub const IDENTIFIER_KEY: &str = "identifier";

/// One item of the collection, keyed by the path of its backing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name.
    pub name: String,

    /// Data recorded by the scanner. Always contains [`FILE_KEY`] and
    /// [`IDENTIFIER_KEY`] for scanned entries.
    #[serde(default)]
    pub scanned_data: BTreeMap<String, String>,

    /// Names of the additional discs of a consolidated multi-disc set,
    /// in the order they were discovered.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disk_names: Vec<String>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scanned_data: BTreeMap::new(),
            disk_names: Vec::new(),
        }
    }

    /// Build the entry template for a scanned file.
    pub fn from_file(file: &FileRef) -> Self {
        let identifier = file.base_no_ext();
        Self::new(identifier.clone())
            .with_scanned(FILE_KEY, file.path_string())
            .with_scanned(IDENTIFIER_KEY, identifier)
    }

    pub fn with_scanned(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.scanned_data.insert(key.into(), value.into());
        self
    }

    /// Path of the backing file, if recorded.
    pub fn file(&self) -> Option<&str> {
        self.scanned_data.get(FILE_KEY).map(String::as_str)
    }

    /// The backing file as a normalized [`FileRef`].
    pub fn file_ref(&self) -> Option<FileRef> {
        self.file().map(FileRef::new)
    }

    pub fn identifier(&self) -> Option<&str> {
        self.scanned_data.get(IDENTIFIER_KEY).map(String::as_str)
    }

    /// Append a disc to this entry's multi-disc set.
    pub fn add_disk(&mut self, name: impl Into<String>) {
        self.disk_names.push(name.into());
    }

    pub fn disk_names(&self) -> &[String] {
        &self.disk_names
    }

    pub fn is_multi_disc(&self) -> bool {
        !self.disk_names.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/entry_tests.rs"]
mod tests;
