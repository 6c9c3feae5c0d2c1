//! Console and log-file output for the `log` facade.
//!
//! Info messages go to stdout as plain lines; warnings and errors go to
//! stderr with a coloured prefix. With `--verbose` every line is stamped
//! and debug messages are shown. `--logfile` mirrors everything to a file
//! with ANSI codes removed.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::error::CliError;

struct CliLogger {
    console_level: LevelFilter,
    verbose: bool,
    file: Option<(LevelFilter, Mutex<File>)>,
}

impl CliLogger {
    fn console(&self, record: &Record) {
        let message = if self.verbose {
            format!(
                "{} {:<5} {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        } else {
            record.args().to_string()
        };

        match record.level() {
            Level::Error => eprintln!(
                "{} {}",
                "error:".if_supports_color(Stderr, |t| t.red()),
                message
            ),
            Level::Warn => eprintln!(
                "{} {}",
                "warning:".if_supports_color(Stderr, |t| t.yellow()),
                message
            ),
            _ => println!("{}", message),
        }
    }

    fn file(&self, file: &Mutex<File>, record: &Record) {
        let line = format!(
            "{} {:<5} {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.args()
        );
        let line = strip_ansi_escapes::strip_str(&line);
        if let Ok(mut file) = file.lock() {
            let _ = writeln!(file, "{}", line);
        }
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.console_level
            || self
                .file
                .as_ref()
                .is_some_and(|(level, _)| metadata.level() <= *level)
    }

    fn log(&self, record: &Record) {
        if record.level() <= self.console_level {
            self.console(record);
        }
        if let Some((level, file)) = &self.file {
            if record.level() <= *level {
                self.file(file, record);
            }
        }
    }

    fn flush(&self) {
        if let Some((_, file)) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// Install the logger for this process.
///
/// `--quiet` limits the console to warnings and errors; the log file still
/// receives info messages.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let detail = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let console_level = if quiet { LevelFilter::Warn } else { detail };

    let file = match logfile {
        Some(path) => Some((detail, Mutex::new(File::create(path)?))),
        None => None,
    };
    let max_level = match &file {
        Some((level, _)) => console_level.max(*level),
        None => console_level,
    };

    log::set_boxed_logger(Box::new(CliLogger {
        console_level,
        verbose,
        file,
    }))
    .map_err(|e| CliError::other(format!("Failed to install logger: {}", e)))?;
    log::set_max_level(max_level);
    Ok(())
}
