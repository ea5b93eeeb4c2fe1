//! Listing renderers
//!
//! This module provides the three ways a built listing can be written:
//! - `text` - root path plus tab-indented names
//! - `json` - pretty-printed JSON
//! - `yaml` - block-style YAML
//!
//! `render` dispatches on an `OutputFormat`.

mod config;
mod json;
mod text;
mod yaml;

use std::io::{self, Write};
use std::path::Path;

use crate::error::Result;
use crate::tree::FileRecord;

pub use config::OutputFormat;
pub use json::render_json;
pub use text::TextFormatter;
pub use yaml::render_yaml;

/// Render a listing of `root` in the given format.
///
/// `root` is only used by the text format; the structured formats encode
/// the records alone.
pub fn render(format: OutputFormat, root: &Path, records: &[FileRecord]) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(TextFormatter::new().format(root, records)),
        OutputFormat::Json => render_json(records),
        OutputFormat::Yaml => render_yaml(records),
    }
}

/// Write already rendered output to stdout.
pub fn print_listing(rendered: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()
}
