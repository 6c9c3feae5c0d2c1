//! Scanning engine: candidate collection, filtering, multi-disc grouping,
//! dead-entry reconciliation and the scanner strategies built on them.

pub mod candidate;
pub mod context;
pub mod disc;
pub mod enumerator;
pub mod error;
pub mod filters;
pub mod multidisc;
pub mod reconcile;
pub mod scanner;
pub mod settings;
pub mod strategy;

pub use candidate::{FileCandidate, collect_candidates};
pub use context::{RegisteredScanner, ScannerFactory, ScannerRegistry};
pub use disc::DiscTagParser;
pub use enumerator::{FileMask, LocalEnumerator};
pub use error::SettingsError;
pub use filters::{BIOS_MARKER, KnownFiles, is_bios, matches_extension};
pub use multidisc::{GroupOutcome, group_multi_disc};
pub use reconcile::find_dead_entries;
pub use scanner::{
    ScanContext, ScanOutcome, ScanStats, process_candidates, process_candidates_with_stats,
};
pub use settings::{load_settings, load_settings_string, save_settings, settings_path};
pub use strategy::{FolderScanner, RomScanner, ScanRun};

#[cfg(test)]
#[path = "tests/fakes.rs"]
pub(crate) mod fakes;
