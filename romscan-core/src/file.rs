//! Path handle used throughout a scan.
//!
//! A [`FileRef`] is a value wrapper around a lexically normalized path, so
//! two references to the same file compare equal even when they were built
//! from differently spelled paths (`roms/./game.cue` vs `roms/game.cue`).

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A reference to a file or directory on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileRef {
    path: PathBuf,
}

impl FileRef {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: normalize_path(path.as_ref()),
        }
    }

    /// The normalized path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The normalized path as a string (lossy for non-UTF-8 paths).
    pub fn path_string(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    /// File name including extension, e.g. `"game.cue"`.
    pub fn base_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name without its final extension, e.g. `"game"`.
    pub fn base_no_ext(&self) -> String {
        self.path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Final extension with its leading dot (`".cue"`), or empty if none.
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default()
    }

    /// The containing directory.
    pub fn dir(&self) -> FileRef {
        FileRef::new(self.path.parent().unwrap_or_else(|| Path::new("")))
    }

    /// A reference to `name` inside this directory.
    pub fn join(&self, name: impl AsRef<Path>) -> FileRef {
        FileRef::new(self.path.join(name))
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl From<&str> for FileRef {
    fn from(path: &str) -> Self {
        FileRef::new(path)
    }
}

impl From<&Path> for FileRef {
    fn from(path: &Path) -> Self {
        FileRef::new(path)
    }
}

impl From<PathBuf> for FileRef {
    fn from(path: PathBuf) -> Self {
        FileRef::new(path)
    }
}

/// Lexically normalize a path without touching the filesystem.
///
/// `.` segments are dropped and `..` removes the preceding normal segment.
/// A `..` that would climb above the root is discarded; one at the start
/// of a relative path is kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() && !path.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

#[cfg(test)]
#[path = "tests/file_tests.rs"]
mod tests;
