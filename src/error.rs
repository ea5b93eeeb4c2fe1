//! Error type shared by the tree builder and the renderers

use std::io;
use std::path::PathBuf;

/// Everything that can abort a listing.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// A directory listing, metadata read or link read failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot encode listing as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot encode listing as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("output format must be one of text|json|yaml, got '{0}'")]
    UnknownFormat(String),

    #[error("path cannot be empty")]
    EmptyPath,
}

impl ListError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures raised while encoding an already built tree.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Json(_) | Self::Yaml(_))
    }
}

pub type Result<T> = std::result::Result<T, ListError>;
