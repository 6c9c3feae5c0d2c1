//! Dead-entry detection for a previously built catalog.

use romscan_core::{CatalogEntry, FileProbe, ScanProgress};

/// Remove entries whose backing file no longer exists.
///
/// Entries are checked from last to first. Each missing one is removed from
/// `catalog` and pushed onto the returned list, so the dead list comes back
/// in reverse catalog order. An empty catalog returns immediately without
/// probing anything. Entries with no recorded file are left alone.
pub fn find_dead_entries(
    catalog: &mut Vec<CatalogEntry>,
    probe: &dyn FileProbe,
    progress: &dyn ScanProgress,
) -> Vec<CatalogEntry> {
    let mut dead = Vec::new();
    if catalog.is_empty() {
        log::info!("Source is empty. No dead ROM check.");
        return dead;
    }

    log::info!("Starting dead items scan");
    progress.start_progress("Checking for dead ROMs ...", Some(catalog.len()));

    for (step, index) in (0..catalog.len()).rev().enumerate() {
        progress.update_progress(step);

        let Some(file) = catalog[index].file_ref() else {
            log::warn!(
                "Entry '{}' has no backing file recorded; skipping",
                catalog[index].name
            );
            continue;
        };

        log::debug!("Searching {}", file);
        if !probe.exists(&file) {
            log::info!("Not found. Marking as dead: {}", file);
            dead.push(catalog.remove(index));
        }
    }

    progress.end_progress();
    dead
}

#[cfg(test)]
#[path = "tests/reconcile_tests.rs"]
mod tests;
