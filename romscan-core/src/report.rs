//! Human-readable scan log.
//!
//! The scan writes one line per decision it takes about a file. The log is
//! append-only and has no structure beyond lines.

use std::io::Write;
use std::sync::Mutex;

/// Append-only line sink for the scan log.
pub trait ScanLog {
    fn write(&self, line: &str);
}

/// Discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentLog;

impl ScanLog for SilentLog {
    fn write(&self, _line: &str) {}
}

/// Keeps lines in memory; mostly useful for tests and summaries.
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// True if any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|l| l.contains(needle))
    }
}

impl ScanLog for MemoryLog {
    fn write(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}

/// Writes lines to any [`Write`] target (a report file, stdout, ...).
///
/// Write failures are logged once and further lines are dropped, so a full
/// disk never interrupts a scan.
#[derive(Debug)]
pub struct WriterLog<W: Write> {
    inner: Mutex<WriterState<W>>,
}

#[derive(Debug)]
struct WriterState<W> {
    writer: W,
    failed: bool,
}

impl<W: Write> WriterLog<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(WriterState {
                writer,
                failed: false,
            }),
        }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> std::io::Result<W> {
        let mut state = self
            .inner
            .into_inner()
            .map_err(|_| std::io::Error::other("scan log lock poisoned"))?;
        state.writer.flush()?;
        Ok(state.writer)
    }
}

impl<W: Write> ScanLog for WriterLog<W> {
    fn write(&self, line: &str) {
        let Ok(mut state) = self.inner.lock() else {
            return;
        };
        if state.failed {
            return;
        }
        if let Err(e) = writeln!(state.writer, "{}", line) {
            log::warn!("Failed to write scan log: {}", e);
            state.failed = true;
        }
    }
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
