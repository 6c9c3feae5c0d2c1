//! romscan CLI
//!
//! Command-line interface for scanning ROM folders into a game catalog.

mod cli_types;
mod commands;
mod error;
mod logging;
mod progress;

use clap::Parser;

use romscan_lib::ScannerRegistry;

use cli_types::{Cli, Commands, ConfigAction};
use commands::scan::ScanRequest;
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        log::logger().flush();
        std::process::exit(1);
    }
    log::logger().flush();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let registry = ScannerRegistry::with_builtin();

    match cli.command {
        Commands::Scan {
            catalog,
            scanner,
            settings,
            report,
            dry_run,
        } => commands::scan::run_scan(
            &registry,
            ScanRequest {
                catalog,
                scanner,
                settings,
                report,
                dry_run,
            },
            cli.quiet,
        ),
        Commands::Dead { catalog, prune } => {
            commands::dead::run_dead(&catalog, prune, cli.quiet)
        }
        Commands::List => {
            commands::list::run_list(&registry);
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::Set { settings } => commands::config::run_config_set(&settings),
        },
    }
}
