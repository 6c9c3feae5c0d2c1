//! Per-candidate accept/reject rules.

use std::collections::HashSet;

use romscan_core::{CatalogEntry, FileRef};

/// Tag that marks a BIOS image, e.g. `[BIOS] PlayStation (v3.0).bin`.
pub const BIOS_MARKER: &str = "[BIOS]";

/// Return the allowed extension `file` matches, if any.
///
/// The comparison is exact and case-sensitive against `"." + ext`. An
/// empty allow-list matches nothing.
pub fn matches_extension<'a>(file: &FileRef, extensions: &'a [String]) -> Option<&'a str> {
    let actual = file.extension();
    let actual = actual.strip_prefix('.')?;
    extensions
        .iter()
        .find(|ext| ext.as_str() == actual)
        .map(String::as_str)
}

/// True if the file's base name carries the BIOS marker.
pub fn is_bios(file: &FileRef) -> bool {
    file.base_name().contains(BIOS_MARKER)
}

/// Backing files already present in the working catalog.
///
/// Seeded from the existing catalog and grown with every accepted entry,
/// so it always covers the existing entries plus those accepted so far.
#[derive(Debug, Clone, Default)]
pub struct KnownFiles {
    files: HashSet<FileRef>,
}

impl KnownFiles {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a CatalogEntry>) -> Self {
        Self {
            files: entries.into_iter().filter_map(CatalogEntry::file_ref).collect(),
        }
    }

    /// True if an entry already points at `file` (normalized-path equality).
    pub fn is_duplicate(&self, file: &FileRef) -> bool {
        self.files.contains(file)
    }

    pub fn insert(&mut self, file: FileRef) {
        self.files.insert(file);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/filters_tests.rs"]
mod tests;
