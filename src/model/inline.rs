//! Inline (text-level) types.

use serde::{Deserialize, Serialize};

/// Emphasis style of an inline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InlineStyle {
    /// No emphasis
    #[default]
    Plain,
    /// `**x**`
    Bold,
    /// `*x*` or `_x_`
    Italic,
    /// `***x***` or `*_x_*`
    BoldItalic,
    /// `` `x` ``
    Code,
}

impl InlineStyle {
    /// Check if the style renders bold.
    pub fn is_bold(self) -> bool {
        matches!(self, InlineStyle::Bold | InlineStyle::BoldItalic)
    }

    /// Check if the style renders italic.
    pub fn is_italic(self) -> bool {
        matches!(self, InlineStyle::Italic | InlineStyle::BoldItalic)
    }

    /// Check if the style is inline code.
    pub fn is_code(self) -> bool {
        self == InlineStyle::Code
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineRun {
    /// Text styling
    pub style: InlineStyle,

    /// The text content, delimiters removed
    pub text: String,
}

impl InlineRun {
    /// Create a run with the given style.
    pub fn new(style: InlineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    /// Create a plain run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(InlineStyle::Plain, text)
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(InlineStyle::Bold, text)
    }

    /// Create an italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(InlineStyle::Italic, text)
    }

    /// Create a bold-italic run.
    pub fn bold_italic(text: impl Into<String>) -> Self {
        Self::new(InlineStyle::BoldItalic, text)
    }

    /// Create an inline code run.
    pub fn code(text: impl Into<String>) -> Self {
        Self::new(InlineStyle::Code, text)
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Inline content within a rendered paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InlineContent {
    /// A styled text run
    Run(InlineRun),

    /// A hard line break between source lines
    LineBreak,
}

impl InlineContent {
    /// Get the run if this is one.
    pub fn as_run(&self) -> Option<&InlineRun> {
        match self {
            InlineContent::Run(run) => Some(run),
            InlineContent::LineBreak => None,
        }
    }

    /// Check if this is a line break.
    pub fn is_line_break(&self) -> bool {
        matches!(self, InlineContent::LineBreak)
    }
}

impl From<InlineRun> for InlineContent {
    fn from(run: InlineRun) -> Self {
        InlineContent::Run(run)
    }
}
