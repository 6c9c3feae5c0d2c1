//! Scanner strategies.
//!
//! A scanner decides where candidates come from and how they are turned
//! into catalog entries. [`FolderScanner`] scans a plain directory tree;
//! other strategies implement [`RomScanner`] and reuse the provided
//! [`RomScanner::scan`] driver.

use romscan_core::{CatalogEntry, FileRef, ScanConfig, ScanError};

use crate::candidate::{FileCandidate, collect_candidates};
use crate::reconcile::find_dead_entries;
use crate::scanner::{ScanContext, ScanOutcome, ScanStats, process_candidates_with_stats};

/// Result of a full scan run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanRun {
    /// The catalog was updated: dead entries removed, new entries appended.
    Completed {
        new_entries: Vec<CatalogEntry>,
        dead_entries: Vec<CatalogEntry>,
        stats: ScanStats,
    },
    /// The user canceled. The catalog is unchanged.
    Aborted,
}

/// A catalog scanning strategy.
pub trait RomScanner {
    /// Human-readable name, e.g. "Folder scanner".
    fn name(&self) -> &str;

    /// Root the scanner looks in.
    fn rom_path(&self) -> &FileRef;

    /// Allowed extensions, without leading dots.
    fn rom_extensions(&self) -> &[String];

    fn scan_recursive(&self) -> bool;

    /// Whether `[BIOS]` files are skipped.
    fn ignore_bios(&self) -> bool;

    fn supports_multidisc(&self) -> bool;

    /// Discover every candidate file.
    fn get_candidates(&self, ctx: &ScanContext<'_>) -> Result<Vec<FileCandidate>, ScanError>;

    /// Remove and return the catalog entries whose file is gone.
    fn get_dead_entries(
        &self,
        catalog: &mut Vec<CatalogEntry>,
        ctx: &ScanContext<'_>,
    ) -> Vec<CatalogEntry>;

    /// Turn candidates into new catalog entries.
    fn process_candidates(
        &self,
        candidates: Vec<FileCandidate>,
        catalog: &[CatalogEntry],
        ctx: &ScanContext<'_>,
    ) -> (ScanOutcome, ScanStats);

    /// Run a complete scan against `catalog`.
    ///
    /// Candidates are collected first, then dead entries are pruned, then
    /// candidates are processed against the pruned catalog. On completion
    /// `catalog` holds the surviving entries followed by the new ones. On
    /// abort `catalog` is left exactly as it was passed in.
    fn scan(
        &self,
        catalog: &mut Vec<CatalogEntry>,
        ctx: &ScanContext<'_>,
    ) -> Result<ScanRun, ScanError> {
        log::info!("{}: scanning {}", self.name(), self.rom_path());

        let candidates = self.get_candidates(ctx)?;

        let mut working = catalog.clone();
        let dead_entries = self.get_dead_entries(&mut working, ctx);

        match self.process_candidates(candidates, &working, ctx) {
            (ScanOutcome::Completed(new_entries), stats) => {
                working.extend(new_entries.iter().cloned());
                *catalog = working;
                Ok(ScanRun::Completed {
                    new_entries,
                    dead_entries,
                    stats,
                })
            }
            (ScanOutcome::Aborted, _) => {
                log::info!("User canceled the scan. No changes have been made.");
                Ok(ScanRun::Aborted)
            }
        }
    }
}

/// Scans a directory (optionally recursively) for files with the
/// configured extensions.
#[derive(Debug, Clone)]
pub struct FolderScanner {
    config: ScanConfig,
}

impl FolderScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }
}

impl RomScanner for FolderScanner {
    fn name(&self) -> &str {
        "Folder scanner"
    }

    fn rom_path(&self) -> &FileRef {
        &self.config.rom_path
    }

    fn rom_extensions(&self) -> &[String] {
        &self.config.extensions
    }

    fn scan_recursive(&self) -> bool {
        self.config.recursive
    }

    fn ignore_bios(&self) -> bool {
        self.config.ignore_bios
    }

    fn supports_multidisc(&self) -> bool {
        self.config.multi_disc
    }

    fn get_candidates(&self, ctx: &ScanContext<'_>) -> Result<Vec<FileCandidate>, ScanError> {
        collect_candidates(&self.config, ctx)
    }

    fn get_dead_entries(
        &self,
        catalog: &mut Vec<CatalogEntry>,
        ctx: &ScanContext<'_>,
    ) -> Vec<CatalogEntry> {
        find_dead_entries(catalog, ctx.probe, ctx.progress)
    }

    fn process_candidates(
        &self,
        candidates: Vec<FileCandidate>,
        catalog: &[CatalogEntry],
        ctx: &ScanContext<'_>,
    ) -> (ScanOutcome, ScanStats) {
        process_candidates_with_stats(&self.config, candidates, catalog, ctx)
    }
}

#[cfg(test)]
#[path = "tests/strategy_tests.rs"]
mod tests;
