use thiserror::Error;

/// Errors reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O error while reading or writing the settings file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid TOML or has the wrong shape
    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Settings could not be serialized
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The settings document has an unexpected structure
    #[error("{0}")]
    Structure(String),
}

impl SettingsError {
    pub fn structure(msg: impl Into<String>) -> Self {
        Self::Structure(msg.into())
    }
}
