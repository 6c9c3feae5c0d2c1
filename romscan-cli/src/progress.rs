//! Terminal progress bar for scan phases.

use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use romscan_core::ScanProgress;

/// Draws one bar per scan phase with indicatif.
pub(crate) struct BarProgress {
    quiet: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl BarProgress {
    pub(crate) fn new(quiet: bool) -> Self {
        Self {
            quiet,
            bar: Mutex::new(None),
        }
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(bar) = self.bar.lock() {
            if let Some(bar) = bar.as_ref() {
                f(bar);
            }
        }
    }
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("  {prefix} [{bar:30.cyan/dim}] {pos}/{len} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("  {spinner:.cyan} {prefix} {pos} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("/-\\|")
}

impl ScanProgress for BarProgress {
    fn start_progress(&self, message: &str, total_steps: Option<usize>) {
        let bar = match total_steps {
            Some(total) => ProgressBar::new(total as u64).with_style(bar_style()),
            None => ProgressBar::new_spinner().with_style(spinner_style()),
        };
        if self.quiet {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        bar.set_prefix(message.to_string());

        if let Ok(mut slot) = self.bar.lock() {
            if let Some(old) = slot.replace(bar) {
                old.finish_and_clear();
            }
        }
    }

    fn update_progress(&self, step_index: usize) {
        self.with_bar(|bar| bar.set_position(step_index as u64));
    }

    fn update_message(&self, message: &str) {
        // Messages carry a second detail line; the bar shows the first.
        let first = message.lines().next().unwrap_or_default().to_string();
        self.with_bar(|bar| bar.set_message(first));
    }

    fn set_steps(&self, total_steps: usize) {
        self.with_bar(|bar| {
            bar.set_length(total_steps as u64);
            bar.set_style(bar_style());
        });
    }

    fn increment_step(&self) {
        self.with_bar(|bar| bar.inc(1));
    }

    fn end_progress(&self) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(bar) = slot.take() {
                bar.finish_and_clear();
            }
        }
    }
}
