//! Scan progress reporting.

/// Receives progress updates while a scan runs.
///
/// Updates are fire-and-forget: implementations should return quickly and
/// have no way to push back on the scan.
pub trait ScanProgress {
    /// A new phase starts. `total_steps` is `None` when the size is not yet known.
    fn start_progress(&self, message: &str, total_steps: Option<usize>);

    /// The phase reached step `step_index` (zero based).
    fn update_progress(&self, step_index: usize);

    /// Replace the detail message shown for the current phase.
    fn update_message(&self, message: &str);

    /// The number of steps became known part way through the phase.
    fn set_steps(&self, total_steps: usize);

    /// Advance by one step.
    fn increment_step(&self);

    /// The current phase finished (or was abandoned).
    fn end_progress(&self);
}

/// A no-op progress reporter that discards all updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ScanProgress for SilentProgress {
    fn start_progress(&self, _message: &str, _total_steps: Option<usize>) {}
    fn update_progress(&self, _step_index: usize) {}
    fn update_message(&self, _message: &str) {}
    fn set_steps(&self, _total_steps: usize) {}
    fn increment_step(&self) {}
    fn end_progress(&self) {}
}

/// A progress reporter that logs to the `log` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ScanProgress for LogProgress {
    fn start_progress(&self, message: &str, total_steps: Option<usize>) {
        match total_steps {
            Some(total) => log::info!("{} ({} steps)", message, total),
            None => log::info!("{}", message),
        }
    }

    fn update_progress(&self, step_index: usize) {
        if step_index > 0 && step_index.is_multiple_of(500) {
            log::info!("  [{}]", step_index);
        }
    }

    fn update_message(&self, message: &str) {
        log::trace!("{}", message.replace('\n', " - "));
    }

    fn set_steps(&self, total_steps: usize) {
        log::debug!("  {} steps", total_steps);
    }

    fn increment_step(&self) {}

    fn end_progress(&self) {}
}
