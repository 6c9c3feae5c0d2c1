use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML error in {path}: {source}")]
    Yaml {
        path: String,
        source: serde_yml::Error,
    },
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("Unsupported catalog format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
    #[error("Catalog version {found} in {path} is newer than supported version {supported}")]
    UnsupportedVersion {
        path: String,
        found: u32,
        supported: u32,
    },
}
