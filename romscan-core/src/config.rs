//! Scanner settings and the typed configuration built from them.
//!
//! [`ScannerSettings`] mirrors the record a host application stores for a
//! scanner: every field is optional and keyed the way the host keys it.
//! [`ScanConfig`] is the checked, immutable form handed to every part of a
//! scan.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScanError;
use crate::file::FileRef;

/// Root used when no `rompath` is configured.
pub const DEFAULT_ROM_PATH: &str = "/";

/// Raw scanner settings as stored by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerSettings {
    /// Root directory to scan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rompath: Option<String>,

    /// Allowed extensions, `|`-separated, without leading dots (e.g. `"cue|iso"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub romext: Option<String>,

    /// Descend into subdirectories. Defaults to `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_recursive: Option<bool>,

    /// Skip files tagged `[BIOS]`. Defaults to `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_bios: Option<bool>,

    /// Consolidate multi-disc sets. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multidisc: Option<bool>,
}

/// Immutable configuration for one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub rom_path: FileRef,
    /// Allowed extensions without leading dots. Empty means nothing matches.
    pub extensions: Vec<String>,
    pub recursive: bool,
    pub ignore_bios: bool,
    pub multi_disc: bool,
}

impl ScanConfig {
    /// A configuration for `rom_path` with no allowed extensions, flat
    /// traversal, BIOS files ignored and multi-disc consolidation off.
    pub fn new(rom_path: impl AsRef<Path>) -> Self {
        Self {
            rom_path: FileRef::new(rom_path),
            extensions: Vec::new(),
            recursive: false,
            ignore_bios: true,
            multi_disc: false,
        }
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn ignore_bios(mut self, ignore_bios: bool) -> Self {
        self.ignore_bios = ignore_bios;
        self
    }

    pub fn multi_disc(mut self, multi_disc: bool) -> Self {
        self.multi_disc = multi_disc;
        self
    }

    /// Build a configuration from host settings, applying defaults.
    ///
    /// `multidisc` has no default and must be present. Extensions written
    /// with a leading dot are rejected since they could never match.
    pub fn from_settings(settings: &ScannerSettings) -> Result<Self, ScanError> {
        let multi_disc = settings
            .multidisc
            .ok_or_else(|| ScanError::missing_setting("multidisc"))?;

        let extensions = settings
            .romext
            .as_deref()
            .map(parse_extensions)
            .unwrap_or_default();
        if let Some(bad) = extensions.iter().find(|e| e.starts_with('.')) {
            return Err(ScanError::invalid_setting(
                "romext",
                format!("extension '{}' must not start with a dot", bad),
            ));
        }

        let rom_path = settings.rompath.as_deref().unwrap_or(DEFAULT_ROM_PATH);

        Ok(Self::new(rom_path)
            .extensions(extensions)
            .recursive(settings.scan_recursive.unwrap_or(false))
            .ignore_bios(settings.ignore_bios.unwrap_or(true))
            .multi_disc(multi_disc))
    }

    /// The `|`-joined extension list, as stored in [`ScannerSettings::romext`].
    pub fn romext(&self) -> String {
        self.extensions.join("|")
    }
}

impl From<&ScanConfig> for ScannerSettings {
    fn from(config: &ScanConfig) -> Self {
        Self {
            rompath: Some(config.rom_path.path_string()),
            romext: Some(config.romext()),
            scan_recursive: Some(config.recursive),
            ignore_bios: Some(config.ignore_bios),
            multidisc: Some(config.multi_disc),
        }
    }
}

/// Split a `|`-delimited extension list, dropping empty items.
pub fn parse_extensions(romext: &str) -> Vec<String> {
    romext
        .split('|')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
