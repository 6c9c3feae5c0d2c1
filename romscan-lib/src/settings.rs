//! Persistent scanner settings.
//!
//! The settings file lives at `~/.config/romscan/settings.toml`. Scanner
//! defaults are stored under a `[scanner]` table using the same keys as
//! [`ScannerSettings`]; other tables in the file are left alone.

use std::path::{Path, PathBuf};

use romscan_core::ScannerSettings;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Name of the table holding scanner settings.
pub const SCANNER_TABLE: &str = "scanner";

/// Canonical path to the settings file: `~/.config/romscan/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("romscan").join("settings.toml")
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    scanner: ScannerSettings,
}

/// Read the `[scanner]` table from `path`.
///
/// A missing file yields default (empty) settings.
pub fn load_settings(path: &Path) -> Result<ScannerSettings, SettingsError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No settings file at {}", path.display());
            return Ok(ScannerSettings::default());
        }
        Err(e) => return Err(e.into()),
    };
    let file: SettingsFile = toml::from_str(&contents)?;
    Ok(file.scanner)
}

/// Replace the `[scanner]` table in `path` with `settings`.
///
/// Uses `toml::Value` for a surgical update so unrelated tables are
/// preserved. The file is written atomically.
pub fn save_settings(path: &Path, settings: &ScannerSettings) -> Result<(), SettingsError> {
    let mut doc: toml::Value = match std::fs::read_to_string(path) {
        Ok(contents) => contents.parse()?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            toml::Value::Table(Default::default())
        }
        Err(e) => return Err(e.into()),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| SettingsError::structure("settings.toml root is not a table"))?;
    table.insert(
        SCANNER_TABLE.to_string(),
        toml::Value::try_from(settings)?,
    );

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;

    log::debug!("Saved scanner settings to {}", path.display());
    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string(path: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
