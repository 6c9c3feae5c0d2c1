//! File enumeration on the local filesystem.

use std::io;

use romscan_core::{FileEnumerator, FileRef};
use walkdir::WalkDir;

/// Lists files with `std::fs` (flat) or `walkdir` (recursive).
///
/// Results are sorted by path so scans are reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalEnumerator {
    follow_links: bool,
}

impl LocalEnumerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow symbolic links during recursive traversal.
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }
}

impl FileEnumerator for LocalEnumerator {
    fn scan_files(
        &self,
        root: &FileRef,
        mask: &str,
        on_steps_known: &mut dyn FnMut(usize),
        on_step_done: &mut dyn FnMut(),
    ) -> io::Result<Vec<FileRef>> {
        let mask = FileMask::new(mask);
        let mut paths: Vec<_> = std::fs::read_dir(root.path())?
            .flatten()
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| mask.matches(n))
            })
            .collect();
        paths.sort();

        Ok(report_steps(paths, on_steps_known, on_step_done))
    }

    fn scan_files_recursive(
        &self,
        root: &FileRef,
        mask: &str,
        on_steps_known: &mut dyn FnMut(usize),
        on_step_done: &mut dyn FnMut(),
    ) -> io::Result<Vec<FileRef>> {
        let mask = FileMask::new(mask);
        let mut paths = Vec::new();

        for entry in WalkDir::new(root.path()).follow_links(self.follow_links) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    log::warn!("Error walking directory: {}", e);
                    continue;
                }
            };
            // Symlinks to files count as files, as in the flat listing.
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }
            if entry
                .file_name()
                .to_str()
                .is_some_and(|n| mask.matches(n))
            {
                paths.push(entry.into_path());
            }
        }
        paths.sort();

        Ok(report_steps(paths, on_steps_known, on_step_done))
    }
}

fn report_steps(
    paths: Vec<std::path::PathBuf>,
    on_steps_known: &mut dyn FnMut(usize),
    on_step_done: &mut dyn FnMut(),
) -> Vec<FileRef> {
    on_steps_known(paths.len());
    paths
        .into_iter()
        .map(|p| {
            on_step_done();
            FileRef::new(p)
        })
        .collect()
}

/// A file name mask with `*` and `?` wildcards. `*` and `*.*` match every file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMask {
    pattern: Option<Vec<char>>,
}

impl FileMask {
    pub fn new(mask: &str) -> Self {
        let pattern = match mask {
            "" | "*" | "*.*" => None,
            other => Some(other.chars().collect()),
        };
        Self { pattern }
    }

    pub fn matches(&self, name: &str) -> bool {
        match &self.pattern {
            None => true,
            Some(pattern) => {
                let name: Vec<char> = name.chars().collect();
                wildcard_match(pattern, &name)
            }
        }
    }
}

/// Iterative wildcard matcher with single-star backtracking.
fn wildcard_match(pattern: &[char], text: &[char]) -> bool {
    let (mut p, mut t) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == text[t]) {
            p += 1;
            t += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star = Some((p, t));
            p += 1;
        } else if let Some((sp, st)) = star {
            p = sp + 1;
            t = st + 1;
            star = Some((sp, st + 1));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}

#[cfg(test)]
#[path = "tests/enumerator_tests.rs"]
mod tests;
