//! Consolidation of multi-disc sets into a single catalog entry.

use romscan_core::{CatalogEntry, FileRef, MultiDiscVerdict, ScanLog};

/// What the orchestrator should do with a candidate after grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupOutcome {
    /// Keep checking the candidate, backed by this file.
    Continue(FileRef),
    /// The candidate was added to an existing set; nothing more to do.
    Consumed,
}

/// Apply a multi-disc verdict to a candidate.
///
/// The first disc seen for a set becomes the set's representative and is
/// re-pointed at `<dir>/<set_name>`. Later discs are appended to the
/// representative's disk list, in the order they arrive. Discs are never
/// renumbered or re-sorted here.
pub fn group_multi_disc(
    file: &FileRef,
    verdict: &MultiDiscVerdict,
    multi_disc: bool,
    new_entries: &mut [CatalogEntry],
    log: &dyn ScanLog,
) -> GroupOutcome {
    if !verdict.is_multi_disc {
        log.write("  ROM does not belong to a multidisc set.");
        return GroupOutcome::Continue(file.clone());
    }

    if !multi_disc {
        log.write("  ROM belongs to a multidisc set but Multidisc support is disabled.");
        return GroupOutcome::Continue(file.clone());
    }

    log::info!("ROM belongs to a multidisc set.");
    log::info!("setName     \"{}\"", verdict.set_name);
    log::info!("discName    \"{}\"", verdict.disc_name);
    log::info!("extension   \"{}\"", verdict.extension);
    log::info!("order       \"{}\"", verdict.order);
    log.write("  ROM belongs to a multidisc set.");

    match find_set_entry(new_entries, &verdict.set_name) {
        Some(entry) => {
            log::info!("Adding additional disk \"{}\"", verdict.disc_name);
            entry.add_disk(verdict.disc_name.clone());
            GroupOutcome::Consumed
        }
        None => {
            let set_file = file.dir().join(&verdict.set_name);
            log::info!("First ROM in the set. Cataloguing as \"{}\"", set_file);
            GroupOutcome::Continue(set_file)
        }
    }
}

/// The entry whose backing file is named `set_name`, if one was accepted.
fn find_set_entry<'a>(
    entries: &'a mut [CatalogEntry],
    set_name: &str,
) -> Option<&'a mut CatalogEntry> {
    entries.iter_mut().find(|entry| {
        entry
            .file_ref()
            .is_some_and(|file| file.base_name() == set_name)
    })
}

#[cfg(test)]
#[path = "tests/multidisc_tests.rs"]
mod tests;
