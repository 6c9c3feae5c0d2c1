use std::io;

pub mod cancel;
pub mod config;
pub mod entry;
pub mod error;
pub mod file;
pub mod multidisc;
pub mod progress;
pub mod report;

pub use cancel::CancelToken;
pub use config::{DEFAULT_ROM_PATH, ScanConfig, ScannerSettings, parse_extensions};
pub use entry::{CatalogEntry, FILE_KEY, IDENTIFIER_KEY};
pub use error::ScanError;
pub use file::FileRef;
pub use multidisc::{MultiDiscParser, MultiDiscVerdict};
pub use progress::{LogProgress, ScanProgress, SilentProgress};
pub use report::{MemoryLog, ScanLog, SilentLog, WriterLog};

/// Mask passed to enumerators to request every file.
pub const ALL_FILES_MASK: &str = "*.*";

/// Source of file listings for a scan.
///
/// Both variants return files only, never directory entries. Implementors
/// call `on_steps_known` once with the number of files they are about to
/// hand back, then `on_step_done` once per file.
pub trait FileEnumerator {
    /// List the files directly inside `root` matching `mask`.
    fn scan_files(
        &self,
        root: &FileRef,
        mask: &str,
        on_steps_known: &mut dyn FnMut(usize),
        on_step_done: &mut dyn FnMut(),
    ) -> io::Result<Vec<FileRef>>;

    /// List the files in `root` and all of its subdirectories matching `mask`.
    fn scan_files_recursive(
        &self,
        root: &FileRef,
        mask: &str,
        on_steps_known: &mut dyn FnMut(usize),
        on_step_done: &mut dyn FnMut(),
    ) -> io::Result<Vec<FileRef>>;
}

/// Answers whether a catalog entry's backing file is still present.
pub trait FileProbe {
    fn exists(&self, file: &FileRef) -> bool;
}

/// Probe backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProbe;

impl FileProbe for LocalProbe {
    fn exists(&self, file: &FileRef) -> bool {
        file.exists()
    }
}
