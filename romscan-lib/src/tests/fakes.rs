//! In-memory collaborators shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::io;

use romscan_core::{
    CancelToken, FileEnumerator, FileProbe, FileRef, MultiDiscParser, MultiDiscVerdict,
    ScanProgress,
};

/// Enumerator returning canned file lists and counting calls.
#[derive(Default)]
pub struct FakeEnumerator {
    flat: Vec<FileRef>,
    recursive: Vec<FileRef>,
    fail: bool,
    pub flat_calls: Cell<usize>,
    pub recursive_calls: Cell<usize>,
    pub masks: RefCell<Vec<String>>,
}

impl FakeEnumerator {
    /// Same listing for flat and recursive scans.
    pub fn new(files: &[&str]) -> Self {
        Self::split(files, files)
    }

    pub fn split(flat: &[&str], recursive: &[&str]) -> Self {
        Self {
            flat: flat.iter().map(|p| FileRef::from(*p)).collect(),
            recursive: recursive.iter().map(|p| FileRef::from(*p)).collect(),
            ..Default::default()
        }
    }

    /// Every call fails with a not-found error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn list(
        &self,
        files: &[FileRef],
        mask: &str,
        on_steps_known: &mut dyn FnMut(usize),
        on_step_done: &mut dyn FnMut(),
    ) -> io::Result<Vec<FileRef>> {
        self.masks.borrow_mut().push(mask.to_string());
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"));
        }
        on_steps_known(files.len());
        for _ in files {
            on_step_done();
        }
        Ok(files.to_vec())
    }
}

impl FileEnumerator for FakeEnumerator {
    fn scan_files(
        &self,
        _root: &FileRef,
        mask: &str,
        on_steps_known: &mut dyn FnMut(usize),
        on_step_done: &mut dyn FnMut(),
    ) -> io::Result<Vec<FileRef>> {
        self.flat_calls.set(self.flat_calls.get() + 1);
        self.list(&self.flat, mask, on_steps_known, on_step_done)
    }

    fn scan_files_recursive(
        &self,
        _root: &FileRef,
        mask: &str,
        on_steps_known: &mut dyn FnMut(usize),
        on_step_done: &mut dyn FnMut(),
    ) -> io::Result<Vec<FileRef>> {
        self.recursive_calls.set(self.recursive_calls.get() + 1);
        self.list(&self.recursive, mask, on_steps_known, on_step_done)
    }
}

/// Parser answering from a table keyed by base name; anything else is a
/// single-disc file.
#[derive(Default)]
pub struct FakeParser {
    verdicts: HashMap<String, MultiDiscVerdict>,
}

impl FakeParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `disc_name` as disc `order` of the set `set_name`.
    pub fn disc(mut self, disc_name: &str, set_name: &str, order: u32) -> Self {
        let extension = FileRef::from(disc_name).extension();
        self.verdicts.insert(
            disc_name.to_string(),
            MultiDiscVerdict::disc(set_name, disc_name, extension, order),
        );
        self
    }
}

impl MultiDiscParser for FakeParser {
    fn parse(&self, file: &FileRef) -> MultiDiscVerdict {
        self.verdicts
            .get(&file.base_name())
            .cloned()
            .unwrap_or_else(MultiDiscVerdict::single)
    }
}

/// Probe that reports every file present except the listed ones, counting
/// each call.
#[derive(Default)]
pub struct CountingProbe {
    missing: HashSet<FileRef>,
    pub calls: Cell<usize>,
    pub probed: RefCell<Vec<FileRef>>,
}

impl CountingProbe {
    pub fn missing(paths: &[&str]) -> Self {
        Self {
            missing: paths.iter().map(|p| FileRef::from(*p)).collect(),
            ..Default::default()
        }
    }

    pub fn all_present() -> Self {
        Self::default()
    }
}

impl FileProbe for CountingProbe {
    fn exists(&self, file: &FileRef) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.probed.borrow_mut().push(file.clone());
        !self.missing.contains(file)
    }
}

/// Progress reporter that records every call, and can trip a cancel
/// token once a given step is reported.
#[derive(Default)]
pub struct RecordingProgress {
    pub events: RefCell<Vec<String>>,
    cancel_at: Option<(usize, CancelToken)>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel `token` when `update_progress(step)` is called.
    pub fn cancel_at(step: usize, token: CancelToken) -> Self {
        Self {
            cancel_at: Some((step, token)),
            ..Default::default()
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    fn record(&self, event: String) {
        self.events.borrow_mut().push(event);
    }
}

impl ScanProgress for RecordingProgress {
    fn start_progress(&self, message: &str, total_steps: Option<usize>) {
        self.record(format!("start {} {:?}", message, total_steps));
    }

    fn update_progress(&self, step_index: usize) {
        self.record(format!("step {}", step_index));
        if let Some((at, token)) = &self.cancel_at {
            if *at == step_index {
                token.cancel();
            }
        }
    }

    fn update_message(&self, _message: &str) {}

    fn set_steps(&self, total_steps: usize) {
        self.record(format!("steps {}", total_steps));
    }

    fn increment_step(&self) {
        self.record("increment".to_string());
    }

    fn end_progress(&self) {
        self.record("end".to_string());
    }
}
