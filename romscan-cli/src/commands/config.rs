use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romscan_core::{DEFAULT_ROM_PATH, ScanConfig};
use romscan_lib::{load_settings, load_settings_string, save_settings, settings_path};

use crate::cli_types::ScannerArgs;
use crate::error::CliError;

/// Show the settings file and the scanner configuration it produces.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "Scanner Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    match load_settings_string(&path) {
        Some(contents) => {
            log::info!(
                "  Settings file: {} {}",
                path.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
            log::info!("");
            for line in contents.lines() {
                log::info!("    {}", line);
            }
        }
        None => {
            log::info!(
                "  Settings file: {} {}",
                path.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
    log::info!("");

    let settings = load_settings(&path)?;
    match ScanConfig::from_settings(&settings) {
        Ok(config) => {
            log::info!("  Effective settings:");
            log::info!("    rompath        = {}", config.rom_path);
            log::info!("    romext         = {}", config.romext());
            log::info!("    scan_recursive = {}", config.recursive);
            log::info!("    ignore_bios    = {}", config.ignore_bios);
            log::info!("    multidisc      = {}", config.multi_disc);
        }
        Err(e) => {
            log::info!(
                "  {} {}",
                "Incomplete:".if_supports_color(Stdout, |t| t.yellow()),
                e
            );
            log::info!(
                "  Set it with `romscan config set --multidisc` (or --no-multidisc). \
                 rompath defaults to {}.",
                DEFAULT_ROM_PATH
            );
        }
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings_path().display());
}

/// Store the given flags as scanner defaults.
pub(crate) fn run_config_set(args: &ScannerArgs) -> Result<(), CliError> {
    let path = settings_path();
    let mut settings = load_settings(&path)?;
    args.apply(&mut settings);

    if let Err(e) = ScanConfig::from_settings(&settings) {
        log::warn!("Saved settings are not usable yet: {}", e);
    }

    save_settings(&path, &settings)?;
    log::info!(
        "{} Settings saved to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display()
    );
    Ok(())
}
