//! Disc tag recognition for multi-disc file names.
//!
//! Understands the tags used by No-Intro and Redump style names, in either
//! parentheses or brackets:
//!
//! - `"Final Fantasy VII (USA) (Disc 1).bin"`
//! - `"Panzer Dragoon Saga (Europe) (Disc 2 of 4).cue"`
//! - `"Riven [CD 3].iso"`
//! - `"Resident Evil 2 (USA) (Disc 1 - Leon).chd"`

use romscan_core::{FileRef, MultiDiscParser, MultiDiscVerdict};

/// Words that introduce a disc number inside a tag.
const DISC_WORDS: &[&str] = &["Disc", "Disk", "CD"];

/// Location of a disc tag within a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DiscTag {
    /// Byte offset of the opening `(` or `[`.
    start: usize,
    /// Byte offset just past the closing `)` or `]`.
    end: usize,
    number: u32,
}

/// Multi-disc parser driven by disc tags in the file name.
///
/// The set is named after the file with its disc tag removed, keeping the
/// extension: `"Best Game (Disc 2).bin"` belongs to `"Best Game.bin"`. Each
/// disc is recorded under its own file name.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscTagParser;

impl MultiDiscParser for DiscTagParser {
    fn parse(&self, file: &FileRef) -> MultiDiscVerdict {
        let stem = file.base_no_ext();
        let Some(tag) = find_disc_tag(&stem) else {
            return MultiDiscVerdict::single();
        };

        let extension = file.extension();
        let set_name = format!("{}{}", remove_tag(&stem, tag), extension);
        MultiDiscVerdict::disc(set_name, file.base_name(), extension, tag.number)
    }
}

/// Remove the disc tag from a name, preserving other tags.
///
/// Examples:
/// - `"Final Fantasy VII (Disc 1) (USA)"` → `"Final Fantasy VII (USA)"`
/// - `"Crash Bandicoot (USA)"` → `"Crash Bandicoot (USA)"` (unchanged)
pub fn strip_disc_tag(name: &str) -> String {
    match find_disc_tag(name) {
        Some(tag) => remove_tag(name, tag),
        None => name.to_string(),
    }
}

/// Extract the disc number from a name.
///
/// Examples:
/// - `"Final Fantasy VII (USA) (Disc 2)"` → `Some(2)`
/// - `"Crash Bandicoot (USA)"` → `None`
pub fn extract_disc_number(name: &str) -> Option<u32> {
    find_disc_tag(name).map(|tag| tag.number)
}

fn remove_tag(name: &str, tag: DiscTag) -> String {
    let before = name[..tag.start].trim_end();
    let after = name[tag.end..].trim_start();
    match (before.is_empty(), after.is_empty()) {
        (_, true) => before.to_string(),
        (true, false) => after.to_string(),
        (false, false) => format!("{} {}", before, after),
    }
}

/// Find the first `(...)` or `[...]` group that is a disc tag.
fn find_disc_tag(name: &str) -> Option<DiscTag> {
    let mut search = 0;
    while let Some(offset) = name[search..].find(['(', '[']) {
        let start = search + offset;
        let close = if name[start..].starts_with('(') { ')' } else { ']' };
        let inner_start = start + 1;
        let Some(inner_len) = name[inner_start..].find(close) else {
            search = inner_start;
            continue;
        };
        let inner = &name[inner_start..inner_start + inner_len];

        if let Some(number) = parse_disc_label(inner) {
            return Some(DiscTag {
                start,
                end: inner_start + inner_len + 1,
                number,
            });
        }
        search = inner_start;
    }
    None
}

/// Parse the inside of a tag: `"Disc 2"`, `"Disc 2 of 4"`, `"Disc 1 - Leon"`.
fn parse_disc_label(inner: &str) -> Option<u32> {
    let (word, rest) = inner.trim().split_once(' ')?;
    if !DISC_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word)) {
        return None;
    }

    let rest = rest.trim_start();
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits == 0 {
        return None;
    }
    let number = rest[..digits].parse().ok()?;

    let tail = rest[digits..].trim();
    let tail_ok = tail.is_empty()
        || tail.starts_with('-')
        || tail
            .strip_prefix("of ")
            .is_some_and(|t| t.trim_start().starts_with(|c: char| c.is_ascii_digit()));
    tail_ok.then_some(number)
}

#[cfg(test)]
#[path = "tests/disc_tests.rs"]
mod tests;
