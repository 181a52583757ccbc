//! Input format detection.

use crate::error::Result;
use crate::model::FactSheet;
use crate::parser::fence::strip;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Shape of incoming content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    /// Hybrid Markdown text (headings, tables, lists, emphasis)
    Markdown,
    /// JSON fact sheet object
    FactSheet,
}

impl InputFormat {
    /// Parse a format name (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" | "text" => Some(Self::Markdown),
            "json" | "fact_sheet" | "factsheet" | "fact-sheet" => Some(Self::FactSheet),
            _ => None,
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Markdown => write!(f, "Markdown"),
            InputFormat::FactSheet => write!(f, "JSON fact sheet"),
        }
    }
}

/// Detect the format of a content string.
///
/// Content is a fact sheet when, after dropping fence lines, it is a JSON
/// object carrying at least one fact-sheet key. Everything else, including
/// broken JSON, is treated as Markdown.
///
/// # Example
/// ```
/// use lessonmark::detect::{detect_format, InputFormat};
///
/// assert_eq!(detect_format("# Title"), InputFormat::Markdown);
/// assert_eq!(
///     detect_format("```json\n{\"concept\": \"x\"}\n```"),
///     InputFormat::FactSheet
/// );
/// ```
pub fn detect_format(input: &str) -> InputFormat {
    if sniff_fact_sheet(input).is_some() {
        InputFormat::FactSheet
    } else {
        InputFormat::Markdown
    }
}

/// Detect the format of a file's content.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let content = fs::read_to_string(path)?;
    Ok(detect_format(&content))
}

/// Check if a content string is a JSON fact sheet.
pub fn is_fact_sheet(input: &str) -> bool {
    detect_format(input) == InputFormat::FactSheet
}

/// Decode the content as a fact-sheet JSON object if it looks like one.
pub(crate) fn sniff_fact_sheet(input: &str) -> Option<Value> {
    let cleaned = strip(input);
    let trimmed = cleaned.trim();
    if !(trimmed.starts_with('{') && trimmed.ends_with('}')) {
        return None;
    }
    let value: Value = serde_json::from_str(trimmed).ok()?;
    match value.as_object() {
        Some(map) if FactSheet::is_fact_sheet_object(map) => Some(value),
        _ => None,
    }
}
