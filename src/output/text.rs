//! Text formatter for plain listings
//!
//! This module provides `TextFormatter`, which renders a listing as the root
//! path followed by one tab-indented line per record in pre-order.

use std::path::{MAIN_SEPARATOR, Path};

use crate::tree::FileRecord;

/// Separator written between a link's name and its target.
const LINK_ARROW: &str = "*  ->  ";

/// Formatter for plain text output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Render the whole listing of `root`.
    pub fn format(&self, root: &Path, records: &[FileRecord]) -> String {
        let mut output = root_line(root);
        output.push('\n');
        for record in records {
            output.push_str(&self.format_record(record, 1));
        }
        output
    }

    /// Render one record and its children, starting `level` tabs deep.
    pub fn format_record(&self, record: &FileRecord, level: usize) -> String {
        let mut output = String::new();
        self.format_node(record, level, &mut output);
        output
    }

    fn format_node(&self, record: &FileRecord, level: usize, output: &mut String) {
        output.extend(std::iter::repeat_n('\t', level));
        output.push_str(&display_name(record));
        output.push('\n');
        for child in &record.children {
            self.format_node(child, level + 1, output);
        }
    }
}

/// The root path with a trailing separator.
fn root_line(root: &Path) -> String {
    let mut line = root.to_string_lossy().to_string();
    if !line.ends_with(MAIN_SEPARATOR) {
        line.push(MAIN_SEPARATOR);
    }
    line
}

/// Links are checked before directories, so a link to a directory shows its target.
fn display_name(record: &FileRecord) -> String {
    if record.is_link {
        let target = record
            .link_target
            .as_deref()
            .map(|t| t.to_string_lossy().to_string())
            .unwrap_or_default();
        format!("{}{}{}", record.name, LINK_ARROW, target)
    } else if record.is_dir {
        format!("{}/", record.name)
    } else {
        record.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::Local;

    use super::*;

    fn file(name: &str) -> FileRecord {
        FileRecord {
            name: name.to_string(),
            modified_time: Local::now(),
            size: 0,
            is_dir: false,
            is_link: false,
            link_target: None,
            children: Vec::new(),
        }
    }

    fn dir(name: &str, children: Vec<FileRecord>) -> FileRecord {
        FileRecord {
            is_dir: true,
            children,
            ..file(name)
        }
    }

    fn link(name: &str, target: &str) -> FileRecord {
        FileRecord {
            is_link: true,
            link_target: Some(PathBuf::from(target)),
            ..file(name)
        }
    }

    #[test]
    fn test_scenario_output() {
        let records = vec![file("a.txt"), dir("b", vec![file("c.txt")])];
        let output = TextFormatter::new().format(Path::new("/tmp/x"), &records);
        assert_eq!(output, "/tmp/x/\n\ta.txt\n\tb/\n\t\tc.txt\n");
    }

    #[test]
    fn test_root_separator_not_doubled() {
        let output = TextFormatter::new().format(Path::new("/tmp/x/"), &[]);
        assert_eq!(output, "/tmp/x/\n");
    }

    #[test]
    fn test_link_rendered_before_dir() {
        let mut record = link("shortcut", "/srv/data");
        record.is_dir = true;
        let output = TextFormatter::new().format_record(&record, 1);
        assert_eq!(output, "\tshortcut*  ->  /srv/data\n");
    }

    #[test]
    fn test_pre_order_depth() {
        let records = vec![dir(
            "a",
            vec![dir("b", vec![file("c")]), file("d")],
        )];
        let output = TextFormatter::new().format(Path::new("/r"), &records);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, ["/r/", "\ta/", "\t\tb/", "\t\t\tc", "\t\td"]);
    }

    #[test]
    fn test_format_record_level_zero() {
        let output = TextFormatter::new().format_record(&dir("top", vec![file("f")]), 0);
        assert_eq!(output, "top/\n\tf\n");
    }
}
