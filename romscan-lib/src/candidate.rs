//! Scan candidates: every file found under the ROM path, before filtering.

use romscan_core::{ALL_FILES_MASK, CatalogEntry, FileRef, ScanConfig, ScanError};

use crate::scanner::ScanContext;

/// A file being considered for the catalog during one scan pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    file: FileRef,
    sort_key: String,
}

impl FileCandidate {
    pub fn new(file: FileRef) -> Self {
        let sort_key = file.base_name();
        Self { file, sort_key }
    }

    pub fn file(&self) -> &FileRef {
        &self.file
    }

    /// Key candidates are processed in: the file's base name.
    pub fn sort_key(&self) -> &str {
        &self.sort_key
    }

    /// The same candidate, now backed by `file` (used when a multi-disc set
    /// is catalogued under its set name).
    pub fn with_file(&self, file: FileRef) -> Self {
        Self {
            file,
            sort_key: self.sort_key.clone(),
        }
    }

    /// Materialize the catalog entry for this candidate.
    pub fn to_entry(&self) -> CatalogEntry {
        CatalogEntry::from_file(&self.file)
    }
}

/// Enumerate every file under the configured ROM path and wrap each one as
/// a candidate. No filtering happens here.
pub fn collect_candidates(
    config: &ScanConfig,
    ctx: &ScanContext<'_>,
) -> Result<Vec<FileCandidate>, ScanError> {
    ctx.progress
        .start_progress("Scanning and caching files in ROM path ...", None);
    ctx.log
        .write(&format!("Scanning files in {}", config.rom_path));

    let mut on_steps_known = |count: usize| ctx.progress.set_steps(count);
    let mut on_step_done = || ctx.progress.increment_step();

    let files = if config.recursive {
        log::info!("Recursive scan activated");
        ctx.enumerator.scan_files_recursive(
            &config.rom_path,
            ALL_FILES_MASK,
            &mut on_steps_known,
            &mut on_step_done,
        )
    } else {
        log::info!("Recursive scan not activated");
        ctx.enumerator.scan_files(
            &config.rom_path,
            ALL_FILES_MASK,
            &mut on_steps_known,
            &mut on_step_done,
        )
    };

    let files = match files {
        Ok(files) => files,
        Err(e) => {
            ctx.progress.end_progress();
            return Err(e.into());
        }
    };

    ctx.log
        .write(&format!("  File scanner found {} files", files.len()));
    ctx.progress.end_progress();

    Ok(files.into_iter().map(FileCandidate::new).collect())
}
