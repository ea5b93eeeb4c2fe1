//! Directory tree walking logic
//!
//! `TreeWalker` reads a directory once, optionally recursing into
//! subdirectories, and returns the whole listing as owned `FileRecord`s.
//! Symlinks are reported but never followed.

mod config;
mod record;
mod utils;
mod walker;

pub use config::WalkerConfig;
pub use record::{FileRecord, count_records};
pub use utils::{absolute_path, clean_path};
pub use walker::{TreeWalker, build};
