pub(crate) mod config;
pub(crate) mod dead;
pub(crate) mod list;
pub(crate) mod scan;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romscan_core::{CancelToken, CatalogEntry};

use crate::error::CliError;

/// Print one catalog entry as a list item, with its extra discs below it.
pub(crate) fn print_entry(marker: &str, entry: &CatalogEntry) {
    log::info!(
        "  {} {} {}",
        marker,
        entry.name.if_supports_color(Stdout, |t| t.bold()),
        entry
            .file()
            .unwrap_or("(no file)")
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    for disk in entry.disk_names() {
        log::info!("      + {}", disk);
    }
}

/// Start a background runtime that cancels the returned token on Ctrl-C.
///
/// The runtime must be kept alive for as long as the token is in use.
pub(crate) fn ctrl_c_token() -> Result<(tokio::runtime::Runtime, CancelToken), CliError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .map_err(|e| CliError::runtime(e.to_string()))?;

    let cancel = CancelToken::new();
    let watcher = cancel.clone();
    runtime.spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("Interrupted; stopping after the current file ...");
            watcher.cancel();
        }
    });

    Ok((runtime, cancel))
}
