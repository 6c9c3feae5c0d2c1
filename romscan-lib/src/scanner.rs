//! Candidate processing: the per-file pipeline of a scan.
//!
//! Candidates are sorted by base name and pushed one at a time through the
//! extension filter, the multi-disc grouper, the duplicate check and the
//! BIOS filter. Survivors become new catalog entries. Cancellation is
//! checked after every candidate.

use romscan_core::{
    CancelToken, CatalogEntry, FileEnumerator, FileProbe, LocalProbe, MultiDiscParser, ScanConfig,
    ScanLog, ScanProgress, SilentLog, SilentProgress,
};

use crate::candidate::FileCandidate;
use crate::filters::{KnownFiles, is_bios, matches_extension};
use crate::multidisc::{GroupOutcome, group_multi_disc};

/// The collaborators a scan talks to.
pub struct ScanContext<'a> {
    pub enumerator: &'a dyn FileEnumerator,
    pub parser: &'a dyn MultiDiscParser,
    pub probe: &'a dyn FileProbe,
    pub progress: &'a dyn ScanProgress,
    pub log: &'a dyn ScanLog,
    pub cancel: CancelToken,
}

impl<'a> ScanContext<'a> {
    /// A context probing the local filesystem, with silent progress and
    /// log, and a fresh cancel token.
    pub fn new(enumerator: &'a dyn FileEnumerator, parser: &'a dyn MultiDiscParser) -> Self {
        Self {
            enumerator,
            parser,
            probe: &LocalProbe,
            progress: &SilentProgress,
            log: &SilentLog,
            cancel: CancelToken::new(),
        }
    }

    pub fn probe(mut self, probe: &'a dyn FileProbe) -> Self {
        self.probe = probe;
        self
    }

    pub fn progress(mut self, progress: &'a dyn ScanProgress) -> Self {
        self.progress = progress;
        self
    }

    pub fn log(mut self, log: &'a dyn ScanLog) -> Self {
        self.log = log;
        self
    }

    pub fn cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }
}

/// Result of processing a batch of candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Every candidate was processed; these entries are new.
    Completed(Vec<CatalogEntry>),
    /// The scan was canceled. Nothing it found should be kept.
    Aborted,
}

impl ScanOutcome {
    pub fn is_aborted(&self) -> bool {
        matches!(self, ScanOutcome::Aborted)
    }
}

/// Counts from one processing pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub candidates: u64,
    pub wrong_extension: u64,
    pub grouped_discs: u64,
    pub duplicates: u64,
    pub excluded: u64,
    pub added: u64,
}

impl ScanStats {
    fn record(&mut self, decision: Decision) {
        match decision {
            Decision::WrongExtension => self.wrong_extension += 1,
            Decision::GroupedDisc => self.grouped_discs += 1,
            Decision::Duplicate => self.duplicates += 1,
            Decision::Excluded => self.excluded += 1,
            Decision::Added => self.added += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    WrongExtension,
    GroupedDisc,
    Duplicate,
    Excluded,
    Added,
}

/// Process candidates against an existing catalog.
///
/// See [`process_candidates_with_stats`].
pub fn process_candidates(
    config: &ScanConfig,
    candidates: Vec<FileCandidate>,
    existing: &[CatalogEntry],
    ctx: &ScanContext<'_>,
) -> ScanOutcome {
    process_candidates_with_stats(config, candidates, existing, ctx).0
}

/// Process candidates against an existing catalog, returning per-pass counts.
///
/// `existing` is only read. New entries are returned in the order they were
/// accepted; multi-disc representatives may have had discs appended after
/// being accepted.
pub fn process_candidates_with_stats(
    config: &ScanConfig,
    mut candidates: Vec<FileCandidate>,
    existing: &[CatalogEntry],
    ctx: &ScanContext<'_>,
) -> (ScanOutcome, ScanStats) {
    let total = candidates.len();
    let mut stats = ScanStats {
        candidates: total as u64,
        ..Default::default()
    };
    let mut new_entries: Vec<CatalogEntry> = Vec::new();
    let mut known = KnownFiles::from_entries(existing);

    ctx.progress.start_progress("Scanning found items", Some(total));
    log::debug!("Processing {} candidates", total);
    ctx.log.write("Processing files ...");

    candidates.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));

    for (index, candidate) in candidates.iter().enumerate() {
        ctx.progress.update_progress(index);

        let decision = process_candidate(config, candidate, &mut known, &mut new_entries, ctx);
        stats.record(decision);

        if ctx.cancel.is_canceled() {
            ctx.progress.end_progress();
            ctx.log.write("Scan canceled. No changes have been made.");
            log::info!(
                "Scan canceled after {} of {} candidates. Discarding {} new entries.",
                index + 1,
                total,
                new_entries.len()
            );
            return (ScanOutcome::Aborted, stats);
        }
    }

    ctx.progress.end_progress();
    log::info!(
        "Processed {} candidates: {} added, {} grouped discs, {} duplicates, {} BIOS, {} wrong extension",
        stats.candidates,
        stats.added,
        stats.grouped_discs,
        stats.duplicates,
        stats.excluded,
        stats.wrong_extension
    );

    (ScanOutcome::Completed(new_entries), stats)
}

fn process_candidate(
    config: &ScanConfig,
    candidate: &FileCandidate,
    known: &mut KnownFiles,
    new_entries: &mut Vec<CatalogEntry>,
    ctx: &ScanContext<'_>,
) -> Decision {
    let rom_file = candidate.file();
    ctx.log.write(&format!(">>> {}", rom_file));

    let file_text = format!("ROM {}", rom_file.base_name());
    ctx.progress
        .update_message(&format!("{}\nChecking if has ROM extension ...", file_text));

    match matches_extension(rom_file, &config.extensions) {
        Some(ext) => ctx
            .log
            .write(&format!("  Expected '{}' extension detected", ext)),
        None => {
            ctx.log
                .write("  File has not an expected extension. Skipping file.");
            return Decision::WrongExtension;
        }
    }

    ctx.progress.update_message(&format!(
        "{}\nChecking if ROM belongs to multidisc set..",
        file_text
    ));
    let verdict = ctx.parser.parse(rom_file);
    let file = match group_multi_disc(rom_file, &verdict, config.multi_disc, new_entries, ctx.log)
    {
        GroupOutcome::Consumed => return Decision::GroupedDisc,
        GroupOutcome::Continue(file) => file,
    };

    ctx.progress.update_message(&format!(
        "{}\nChecking if ROM is not already in source...",
        file_text
    ));
    if known.is_duplicate(&file) {
        ctx.log.write("  File already into ROM list. Skipping file.");
        return Decision::Duplicate;
    }
    ctx.log.write("  File not in ROM list. Processing it ...");

    if config.ignore_bios && is_bios(&file) {
        log::info!("BIOS detected. Skipping ROM '{}'", file);
        ctx.log.write("  BIOS detected. Skipping file.");
        return Decision::Excluded;
    }

    let entry = candidate.with_file(file.clone()).to_entry();
    known.insert(file);
    new_entries.push(entry);
    Decision::Added
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
