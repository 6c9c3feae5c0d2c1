use thiserror::Error;

/// Errors that stop a scan from running.
///
/// A file being skipped, a catalog entry going missing and the user
/// canceling are ordinary outcomes and never show up here.
#[derive(Debug, Error)]
pub enum ScanError {
    /// I/O error from the file enumerator
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required scanner setting was not provided
    #[error("Missing scanner setting: {0}")]
    MissingSetting(String),

    /// A scanner setting has a value the scanner cannot use
    #[error("Invalid scanner setting '{key}': {message}")]
    InvalidSetting { key: String, message: String },

    /// No scanner is registered under the requested name
    #[error("Unknown scanner: {0}")]
    UnknownScanner(String),
}

impl ScanError {
    pub fn missing_setting(key: impl Into<String>) -> Self {
        Self::MissingSetting(key.into())
    }

    pub fn invalid_setting(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn unknown_scanner(name: impl Into<String>) -> Self {
        Self::UnknownScanner(name.into())
    }
}
