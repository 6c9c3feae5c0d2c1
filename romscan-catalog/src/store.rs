//! Loading and saving catalog files.
//!
//! On disk a catalog is a small document:
//!
//! ```yaml
//! version: 1
//! updated: 2026-10-16T09:30:00+00:00
//! entries:
//!   - name: game
//!     scanned_data:
//!       file: /roms/game.cue
//!       identifier: game
//! ```

use std::path::Path;

use romscan_core::CatalogEntry;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Current on-disk document version.
pub const CATALOG_VERSION: u32 = 1;

/// Serialization format of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Pick the format from the file extension (`.yaml`, `.yml`, `.json`).
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(CatalogFormat::Yaml),
            Some("json") => Ok(CatalogFormat::Json),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// The catalog file document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default = "default_version")]
    pub version: u32,
    /// RFC 3339 timestamp of the last save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
}

fn default_version() -> u32 {
    CATALOG_VERSION
}

impl CatalogDocument {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            version: CATALOG_VERSION,
            updated: None,
            entries,
        }
    }
}

/// Load the entries of the catalog at `path`.
///
/// A missing file is an empty catalog.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>, CatalogError> {
    let format = CatalogFormat::from_path(path)?;
    let display = path.display().to_string();

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("Catalog {} does not exist yet; starting empty", display);
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(CatalogError::Io {
                path: display,
                source: e,
            });
        }
    };

    let doc: CatalogDocument = match format {
        CatalogFormat::Yaml => {
            if contents.trim().is_empty() {
                return Ok(Vec::new());
            }
            serde_yml::from_str(&contents).map_err(|e| CatalogError::Yaml {
                path: display.clone(),
                source: e,
            })?
        }
        CatalogFormat::Json => serde_json::from_str(&contents).map_err(|e| CatalogError::Json {
            path: display.clone(),
            source: e,
        })?,
    };

    if doc.version > CATALOG_VERSION {
        return Err(CatalogError::UnsupportedVersion {
            path: display,
            found: doc.version,
            supported: CATALOG_VERSION,
        });
    }

    log::debug!("Loaded {} entries from {}", doc.entries.len(), display);
    Ok(doc.entries)
}

/// Write `entries` to `path`, replacing the file atomically.
pub fn save_catalog(path: &Path, entries: &[CatalogEntry]) -> Result<(), CatalogError> {
    let format = CatalogFormat::from_path(path)?;
    let display = path.display().to_string();
    let io_err = |e: std::io::Error| CatalogError::Io {
        path: display.clone(),
        source: e,
    };

    let mut doc = CatalogDocument::new(entries.to_vec());
    doc.updated = Some(chrono::Utc::now().to_rfc3339());

    let serialized = match format {
        CatalogFormat::Yaml => serde_yml::to_string(&doc).map_err(|e| CatalogError::Yaml {
            path: display.clone(),
            source: e,
        })?,
        CatalogFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&doc).map_err(|e| CatalogError::Json {
                    path: display.clone(),
                    source: e,
                })?;
            json.push('\n');
            json
        }
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    std::fs::write(&tmp, serialized).map_err(io_err)?;
    std::fs::rename(&tmp, path).map_err(io_err)?;

    log::debug!("Saved {} entries to {}", entries.len(), display);
    Ok(())
}
