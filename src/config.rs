//! Resolved configuration for one listing run

use std::path::PathBuf;

use crate::error::{ListError, Result};
use crate::output::{OutputFormat, render};
use crate::tree::{TreeWalker, WalkerConfig};

/// What to list and how to write it, after argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    pub path: PathBuf,
    pub recursive: bool,
    pub format: OutputFormat,
}

impl ListingConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            recursive: false,
            format: OutputFormat::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ListError::EmptyPath);
        }
        Ok(())
    }

    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            recursive: self.recursive,
        }
    }
}

/// Validate `config`, build its listing and render it.
pub fn run(config: &ListingConfig) -> Result<String> {
    config.validate()?;
    let records = TreeWalker::new(config.walker_config()).walk(&config.path)?;
    render(config.format, &config.path, &records)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::TestDir;

    use super::*;

    #[test]
    fn test_empty_path_rejected() {
        let config = ListingConfig::new("");
        assert!(matches!(config.validate(), Err(ListError::EmptyPath)));
        assert!(matches!(run(&config), Err(ListError::EmptyPath)));
    }

    #[test]
    fn test_run_text_uses_path_as_given() {
        let dir = TestDir::new();
        dir.add_file("a.txt", "a");
        let config = ListingConfig::new(dir.path());

        let output = run(&config).unwrap();
        let expected = format!("{}/\n\ta.txt\n", dir.path().display());
        assert_eq!(output, expected);
    }

    #[test]
    fn test_run_recursive_json() {
        let dir = TestDir::new();
        dir.add_file("b/c.txt", "");
        let config = ListingConfig {
            recursive: true,
            format: OutputFormat::Json,
            ..ListingConfig::new(dir.path())
        };

        let output = run(&config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["name"], "b");
        assert_eq!(value[0]["children"][0]["name"], "c.txt");
    }
}
