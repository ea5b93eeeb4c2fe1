//! Shared path helpers for tree walking

use std::fs::{self, DirEntry};
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{ListError, Result};

/// Get the display name of a directory entry.
pub fn entry_name(entry: &DirEntry) -> String {
    entry.file_name().to_string_lossy().to_string()
}

/// Read a directory and return its entries sorted by file name.
///
/// Any failure, including one on an individual entry, aborts the read.
pub fn read_sorted_entries(path: &Path) -> Result<Vec<DirEntry>> {
    let entries = fs::read_dir(path).map_err(|e| ListError::io(path, e))?;
    let mut entries = entries
        .collect::<io::Result<Vec<_>>>()
        .map_err(|e| ListError::io(path, e))?;
    entries.sort_by_key(|a| a.file_name());
    Ok(entries)
}

/// Make `path` absolute against the working directory, without touching the
/// filesystem beyond reading the cwd, and drop `.` and `..` components.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    std::path::absolute(path).map(|p| clean_path(&p))
}

/// Lexically remove `.` and `..` from an absolute path.
///
/// `..` at the root stays at the root.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}

/// Resolve the target of the symlink at `link` to an absolute path.
///
/// Relative targets are taken relative to `parent`, the directory holding
/// the link, which must already be absolute.
pub fn resolve_link(parent: &Path, link: &Path) -> Result<PathBuf> {
    let target = fs::read_link(link).map_err(|e| ListError::io(link, e))?;
    Ok(clean_path(&parent.join(target)))
}
