//! Serializable record types for tree output

use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One directory entry, with its children when the listing was recursive.
///
/// The same shape is written by every structured renderer, so a listing
/// encoded as JSON and one encoded as YAML decode back into equal values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub name: String,
    pub modified_time: DateTime<Local>,
    /// Length as reported by the filesystem. Left untouched for directories.
    pub size: u64,
    pub is_dir: bool,
    pub is_link: bool,
    /// Absolute path the link points at; only set when `is_link` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_target: Option<PathBuf>,
    #[serde(default)]
    pub children: Vec<FileRecord>,
}

impl FileRecord {
    /// Number of records in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + count_records(&self.children)
    }
}

/// Total number of records in a listing, counting nested children.
pub fn count_records(records: &[FileRecord]) -> usize {
    records.iter().map(FileRecord::subtree_len).sum()
}
