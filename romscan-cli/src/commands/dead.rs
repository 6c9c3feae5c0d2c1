use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romscan_catalog::{load_catalog, save_catalog};
use romscan_core::LocalProbe;
use romscan_lib::find_dead_entries;

use crate::error::CliError;
use crate::progress::BarProgress;

use super::print_entry;

/// Report catalog entries whose file is gone, optionally removing them.
pub(crate) fn run_dead(catalog_path: &Path, prune: bool, quiet: bool) -> Result<(), CliError> {
    let mut catalog = load_catalog(catalog_path)?;
    let total = catalog.len();

    let progress = BarProgress::new(quiet);
    let dead = find_dead_entries(&mut catalog, &LocalProbe, &progress);

    if dead.is_empty() {
        log::info!(
            "{} All {} entries in {} are present",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            total,
            catalog_path.display(),
        );
        return Ok(());
    }

    log::info!(
        "{} of {} entries are dead:",
        dead.len().if_supports_color(Stdout, |t| t.bold()),
        total,
    );
    let marker = format!("{}", "\u{2718}".if_supports_color(Stdout, |t| t.red()));
    for entry in dead.iter().rev() {
        print_entry(&marker, entry);
    }

    if prune {
        save_catalog(catalog_path, &catalog)?;
        log::info!(
            "Removed {} entries from {}",
            dead.len(),
            catalog_path.display()
        );
    } else {
        log::info!("");
        log::info!("Run with --prune to remove them.");
    }
    Ok(())
}
