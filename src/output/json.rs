//! JSON output formatting

use serde::Serialize;

use crate::error::Result;

/// Render a listing, or a single record, as pretty-printed JSON.
///
/// Both paths use the same two-space indentation.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
