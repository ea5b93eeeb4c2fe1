//! YAML output formatting

use serde::Serialize;

use crate::error::Result;

/// Render a listing, or a single record, as block-style YAML.
pub fn render_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}
