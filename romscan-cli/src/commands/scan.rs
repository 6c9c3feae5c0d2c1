use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romscan_catalog::{load_catalog, save_catalog};
use romscan_core::{CatalogEntry, ScanConfig, ScanLog, SilentLog, WriterLog};
use romscan_lib::{
    DiscTagParser, LocalEnumerator, ScanContext, ScanRun, ScanStats, ScannerRegistry,
    load_settings, settings_path,
};

use crate::cli_types::ScannerArgs;
use crate::error::CliError;
use crate::progress::BarProgress;

use super::{ctrl_c_token, print_entry};

/// Options for a single `scan` invocation.
pub(crate) struct ScanRequest {
    pub catalog: PathBuf,
    pub scanner: String,
    pub settings: ScannerArgs,
    pub report: Option<PathBuf>,
    pub dry_run: bool,
}

/// Scan the configured ROM folder and merge the result into a catalog file.
pub(crate) fn run_scan(
    registry: &ScannerRegistry,
    request: ScanRequest,
    quiet: bool,
) -> Result<(), CliError> {
    let mut settings = load_settings(&settings_path())?;
    request.settings.apply(&mut settings);
    let config = ScanConfig::from_settings(&settings)?;
    print_config(&config);

    let scanner = registry.build(&request.scanner, config)?;
    let mut catalog = load_catalog(&request.catalog)?;
    log::info!(
        "Catalog {} has {} entries",
        request.catalog.display(),
        catalog.len()
    );
    log::info!("");

    let report = match &request.report {
        Some(path) => Some(WriterLog::new(BufWriter::new(File::create(path)?))),
        None => None,
    };
    let scan_log: &dyn ScanLog = match &report {
        Some(report) => report,
        None => &SilentLog,
    };

    let (_runtime, cancel) = ctrl_c_token()?;
    let enumerator = LocalEnumerator::new();
    let parser = DiscTagParser;
    let progress = BarProgress::new(quiet);
    let ctx = ScanContext::new(&enumerator, &parser)
        .progress(&progress)
        .log(scan_log)
        .cancel(cancel);

    let run = scanner.scan(&mut catalog, &ctx);

    if let (Some(report), Some(path)) = (report, &request.report) {
        close_report(report, path);
    }

    match run? {
        ScanRun::Aborted => {
            log::warn!(
                "Scan canceled. {} was not modified.",
                request.catalog.display()
            );
        }
        ScanRun::Completed {
            new_entries,
            dead_entries,
            stats,
        } => {
            if !dead_entries.is_empty() {
                log::info!(
                    "{}",
                    "Removed (file missing):".if_supports_color(Stdout, |t| t.bold())
                );
                let marker = format!("{}", "-".if_supports_color(Stdout, |t| t.red()));
                for entry in dead_entries.iter().rev() {
                    print_entry(&marker, entry);
                }
                log::info!("");
            }
            if !new_entries.is_empty() {
                log::info!("{}", "Added:".if_supports_color(Stdout, |t| t.bold()));
                let marker = format!("{}", "+".if_supports_color(Stdout, |t| t.green()));
                for entry in &new_entries {
                    print_entry(&marker, entry);
                }
                log::info!("");
            }

            print_summary(&stats, dead_entries.len());
            finish(&request.catalog, &catalog, request.dry_run)?;
        }
    }
    Ok(())
}

/// Flush the scan report. A failed report is logged and never fails the scan.
fn close_report<W: Write>(report: WriterLog<W>, path: &Path) -> bool {
    match report.into_inner() {
        Ok(_) => {
            log::debug!("Scan report written to {}", path.display());
            true
        }
        Err(e) => {
            log::warn!("Could not write scan report {}: {}", path.display(), e);
            false
        }
    }
}

fn print_config(config: &ScanConfig) {
    log::info!(
        "Scanning {}",
        config.rom_path.if_supports_color(Stdout, |t| t.cyan())
    );
    let extensions = if config.extensions.is_empty() {
        "(none)".to_string()
    } else {
        config.extensions.join(", ")
    };
    log::info!("  Extensions: {}", extensions);
    log::info!(
        "  Recursive: {}  Ignore BIOS: {}  Multi-disc: {}",
        config.recursive,
        config.ignore_bios,
        config.multi_disc
    );
    if config.extensions.is_empty() {
        log::warn!(
            "No ROM extensions configured; nothing will be added. Use --ext or `romscan config set --ext`."
        );
    }
}

fn print_summary(stats: &ScanStats, dead: usize) {
    log::info!("{}", "Summary".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Files found:       {}", stats.candidates);
    log::info!(
        "  Added:             {}",
        stats.added.if_supports_color(Stdout, |t| t.green())
    );
    log::info!(
        "  Removed (dead):    {}",
        dead.if_supports_color(Stdout, |t| t.red())
    );
    log::info!("  Already listed:    {}", stats.duplicates);
    log::info!("  Merged discs:      {}", stats.grouped_discs);
    log::info!("  BIOS skipped:      {}", stats.excluded);
    log::info!("  Other extensions:  {}", stats.wrong_extension);
}

fn finish(path: &Path, catalog: &[CatalogEntry], dry_run: bool) -> Result<(), CliError> {
    if dry_run {
        log::info!("");
        log::info!(
            "{} Dry run: {} was not written",
            "\u{2139}".if_supports_color(Stdout, |t| t.cyan()),
            path.display()
        );
        return Ok(());
    }
    save_catalog(path, catalog)?;
    log::info!("");
    log::info!(
        "{} Saved {} entries to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        catalog.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
#[path = "tests/scan_tests.rs"]
mod tests;
