//! TreeWalker - builds the full listing in memory

use std::fs::DirEntry;
use std::path::Path;

use chrono::{DateTime, Local};
use tracing::{debug, trace};

use crate::error::{ListError, Result};

use super::config::WalkerConfig;
use super::record::{FileRecord, count_records};
use super::utils::{absolute_path, entry_name, read_sorted_entries, resolve_link};

/// Tree walker that materializes every record before anything is rendered.
///
/// The walk is fail-fast: the first filesystem error anywhere in the tree
/// aborts it and no partial listing is returned.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// List `root`, descending into subdirectories when configured to.
    pub fn walk(&self, root: &Path) -> Result<Vec<FileRecord>> {
        let root = absolute_path(root).map_err(|e| ListError::io(root, e))?;
        let records = self.walk_dir(&root)?;
        debug!(
            root = %root.display(),
            records = count_records(&records),
            "listing complete"
        );
        Ok(records)
    }

    fn walk_dir(&self, path: &Path) -> Result<Vec<FileRecord>> {
        debug!(path = %path.display(), "reading directory");
        read_sorted_entries(path)?
            .iter()
            .map(|entry| self.to_record(path, entry))
            .collect()
    }

    fn to_record(&self, parent: &Path, entry: &DirEntry) -> Result<FileRecord> {
        let name = entry_name(entry);
        let entry_path = parent.join(entry.file_name());

        // Entry metadata does not follow symlinks.
        let metadata = entry
            .metadata()
            .map_err(|e| ListError::io(&entry_path, e))?;
        let modified = metadata
            .modified()
            .map_err(|e| ListError::io(&entry_path, e))?;
        let file_type = metadata.file_type();
        let is_link = file_type.is_symlink();
        let is_dir = file_type.is_dir();

        let link_target = if is_link {
            Some(resolve_link(parent, &entry_path)?)
        } else {
            None
        };

        let children = if self.config.recursive && is_dir && !is_link {
            self.walk_dir(&entry_path)?
        } else {
            Vec::new()
        };

        trace!(path = %entry_path.display(), is_dir, is_link, "record");

        Ok(FileRecord {
            name,
            modified_time: DateTime::<Local>::from(modified),
            size: metadata.len(),
            is_dir,
            is_link,
            link_target,
            children,
        })
    }
}

/// Build the listing of `path`; shorthand for a [`TreeWalker`] walk.
pub fn build(path: impl AsRef<Path>, recursive: bool) -> Result<Vec<FileRecord>> {
    TreeWalker::new(WalkerConfig { recursive }).walk(path.as_ref())
}
