//! Registry of available scanner strategies.

use romscan_core::{ScanConfig, ScanError};

use crate::strategy::{FolderScanner, RomScanner};

/// Builds a scanner from a configuration.
pub type ScannerFactory = fn(ScanConfig) -> Box<dyn RomScanner>;

/// A scanner strategy registered under an id.
#[derive(Debug, Clone)]
pub struct RegisteredScanner {
    /// Short id used on the command line (e.g. "folder").
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    factory: ScannerFactory,
}

impl RegisteredScanner {
    pub fn build(&self, config: ScanConfig) -> Box<dyn RomScanner> {
        (self.factory)(config)
    }
}

/// Context holding all registered scanner strategies.
///
/// Create a registry, register strategies, then build the one a source is
/// configured with.
pub struct ScannerRegistry {
    scanners: Vec<RegisteredScanner>,
}

impl Default for ScannerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ScannerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            scanners: Vec::new(),
        }
    }

    /// A registry with the built-in strategies.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(
            "folder",
            "Folder scanner",
            "Scan a directory for files with the configured extensions",
            folder_scanner,
        );
        registry
    }

    /// Register a strategy. Lookups return the first strategy registered
    /// under an id.
    pub fn register(
        &mut self,
        id: &'static str,
        name: &'static str,
        description: &'static str,
        factory: ScannerFactory,
    ) -> &mut Self {
        self.scanners.push(RegisteredScanner {
            id,
            name,
            description,
            factory,
        });
        self
    }

    /// All registered strategies, in registration order.
    pub fn scanners(&self) -> impl Iterator<Item = &RegisteredScanner> {
        self.scanners.iter()
    }

    /// Find a strategy by id (case-insensitive).
    pub fn get(&self, id: &str) -> Option<&RegisteredScanner> {
        self.scanners.iter().find(|s| s.id.eq_ignore_ascii_case(id))
    }

    /// List all ids.
    pub fn ids(&self) -> Vec<&'static str> {
        self.scanners.iter().map(|s| s.id).collect()
    }

    /// Build the strategy registered as `id`.
    pub fn build(&self, id: &str, config: ScanConfig) -> Result<Box<dyn RomScanner>, ScanError> {
        self.get(id)
            .map(|s| s.build(config))
            .ok_or_else(|| ScanError::unknown_scanner(id))
    }
}

fn folder_scanner(config: ScanConfig) -> Box<dyn RomScanner> {
    Box::new(FolderScanner::new(config))
}

#[cfg(test)]
#[path = "tests/context_tests.rs"]
mod tests;
