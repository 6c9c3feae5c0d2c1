use thiserror::Error;

use romscan_catalog::CatalogError;
use romscan_core::ScanError;
use romscan_lib::SettingsError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Scan setup or enumeration failed
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// Catalog file could not be read or written
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Settings file could not be read or written
    #[error("Config error: {0}")]
    Settings(#[from] SettingsError),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
