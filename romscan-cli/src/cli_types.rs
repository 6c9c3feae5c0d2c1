//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use romscan_core::ScannerSettings;

#[derive(Parser)]
#[command(name = "romscan")]
#[command(about = "Scan ROM folders into a game catalog", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Scanner settings that can be given on the command line. Each one
/// overrides the value from the settings file.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct ScannerArgs {
    /// Folder to scan for ROMs
    #[arg(short = 'p', long)]
    pub rom_path: Option<PathBuf>,

    /// Allowed ROM extensions (e.g., cue,iso,chd)
    #[arg(short, long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Scan subdirectories too
    #[arg(short, long, conflicts_with = "no_recursive")]
    pub recursive: bool,

    /// Only scan the top-level folder
    #[arg(long)]
    pub no_recursive: bool,

    /// Catalog files tagged [BIOS] instead of skipping them
    #[arg(long, conflicts_with = "ignore_bios")]
    pub keep_bios: bool,

    /// Skip files tagged [BIOS]
    #[arg(long)]
    pub ignore_bios: bool,

    /// Merge multi-disc sets into one entry
    #[arg(long, conflicts_with = "no_multidisc")]
    pub multidisc: bool,

    /// Catalog every disc of a multi-disc set separately
    #[arg(long)]
    pub no_multidisc: bool,
}

impl ScannerArgs {
    /// Apply the given flags on top of `settings`.
    pub(crate) fn apply(&self, settings: &mut ScannerSettings) {
        if let Some(path) = &self.rom_path {
            settings.rompath = Some(path.display().to_string());
        }
        if let Some(ext) = &self.ext {
            let ext: Vec<&str> = ext
                .iter()
                .map(|e| e.trim().trim_start_matches('.'))
                .filter(|e| !e.is_empty())
                .collect();
            settings.romext = Some(ext.join("|"));
        }
        if self.recursive {
            settings.scan_recursive = Some(true);
        }
        if self.no_recursive {
            settings.scan_recursive = Some(false);
        }
        if self.keep_bios {
            settings.ignore_bios = Some(false);
        }
        if self.ignore_bios {
            settings.ignore_bios = Some(true);
        }
        if self.multidisc {
            settings.multidisc = Some(true);
        }
        if self.no_multidisc {
            settings.multidisc = Some(false);
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Scan a ROM folder and merge what is found into a catalog file
    Scan {
        /// Catalog file (.yaml, .yml or .json); created if missing
        #[arg(short, long)]
        catalog: PathBuf,

        /// Scanner strategy to use (see `romscan list`)
        #[arg(short, long, default_value = "folder")]
        scanner: String,

        #[command(flatten)]
        settings: ScannerArgs,

        /// Write the per-file scan report to this file
        #[arg(long)]
        report: Option<PathBuf>,

        /// Show what would change without writing the catalog
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Find catalog entries whose file no longer exists
    Dead {
        /// Catalog file (.yaml, .yml or .json)
        #[arg(short, long)]
        catalog: PathBuf,

        /// Remove dead entries from the catalog file
        #[arg(long)]
        prune: bool,
    },

    /// List available scanner strategies
    List,

    /// Manage scanner settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the current settings file
    Show,

    /// Print the settings file path
    Path,

    /// Save scanner defaults to the settings file
    Set {
        #[command(flatten)]
        settings: ScannerArgs,
    },
}

#[cfg(test)]
#[path = "tests/cli_types_tests.rs"]
mod tests;
