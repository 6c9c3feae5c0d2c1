use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romscan_lib::ScannerRegistry;

pub(crate) fn run_list(registry: &ScannerRegistry) {
    log::info!("Available scanners:");
    log::info!("");

    for scanner in registry.scanners() {
        log::info!(
            "  {} [{}]",
            scanner.id.if_supports_color(Stdout, |t| t.bold()),
            scanner.name.if_supports_color(Stdout, |t| t.cyan()),
        );
        log::info!("    {}", scanner.description);
    }
}
