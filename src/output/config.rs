//! Output format selection

use std::fmt;
use std::str::FromStr;

use crate::error::ListError;

/// The closed set of renderers a listing can be written with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-indented names, one per line
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Yaml];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ListError;

    /// Format keys are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_lowercase();
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == key)
            .ok_or_else(|| ListError::UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
