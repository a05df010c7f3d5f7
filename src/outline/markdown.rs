//! Markdown heading extraction
//!
//! A line is a heading when it starts with one or more `#` followed by
//! whitespace and some text. Every such line is reported, including ones
//! inside fenced code blocks.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::Outliner;
use super::types::Heading;
use crate::error::Result;
use crate::string_utils::normalize_newlines;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+)\s+(.*)").expect("HEADING regex is invalid"));

/// Extracts the heading outline of Markdown files.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadingOutliner;

impl HeadingOutliner {
    pub fn new() -> Self {
        Self
    }
}

impl Outliner for HeadingOutliner {
    type Output = Vec<Heading>;

    fn outline_file(&self, path: &Path) -> Result<Vec<Heading>> {
        let content = std::fs::read_to_string(path)?;
        Ok(extract_headings(&content))
    }

    fn name(&self) -> &'static str {
        "markdown"
    }
}

/// Collect headings from Markdown text, with 1-based line numbers.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn extract_headings(content: &str) -> Vec<Heading> {
    normalize_newlines(content)
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let caps = HEADING.captures(line)?;
            let text = caps.get(2)?.as_str().trim();
            if text.is_empty() {
                return None;
            }
            Some(Heading {
                level: caps.get(1)?.as_str().len(),
                text: text.to_string(),
                line: i + 1,
            })
        })
        .collect()
}
