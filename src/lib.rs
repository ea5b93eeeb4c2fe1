//! Filelist - list a directory, optionally recursively, as text, JSON or YAML

pub mod config;
pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ListingConfig, run};
pub use error::{ListError, Result};
pub use output::{OutputFormat, TextFormatter, print_listing, render, render_json, render_yaml};
pub use tree::{FileRecord, TreeWalker, WalkerConfig, build, count_records};
