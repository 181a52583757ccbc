//! Section and block types.

use super::Table;
use serde::{Deserialize, Serialize};

/// Deepest heading level the model carries.
pub const MAX_HEADING_LEVEL: u8 = 3;

/// A heading plus the blocks that follow it until the next heading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text, `None` for the implicit leading section
    pub heading: Option<String>,

    /// Heading level (1-3), set whenever `heading` is set
    pub level: Option<u8>,

    /// Content blocks in source order
    pub blocks: Vec<Block>,
}

impl Section {
    /// Create a title-less section.
    pub fn implicit() -> Self {
        Self::default()
    }

    /// Create a section with a heading. The level is clamped to 1-3.
    pub fn titled(heading: impl Into<String>, level: u8) -> Self {
        Self {
            heading: Some(heading.into()),
            level: Some(level.clamp(1, MAX_HEADING_LEVEL)),
            blocks: Vec::new(),
        }
    }

    /// Add a block to the section.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Add a text block.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::markdown(text));
    }

    /// Add a table block.
    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    /// Check if this section has no heading.
    pub fn is_implicit(&self) -> bool {
        self.heading.is_none()
    }

    /// Check if the section has neither a heading nor blocks.
    pub fn is_empty(&self) -> bool {
        self.heading.is_none() && self.blocks.is_empty()
    }
}

/// A content block within a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    /// Free-form text in the hybrid Markdown dialect, lines joined with `\n`
    Markdown {
        /// Raw text, emphasis delimiters still in place
        text: String,
    },

    /// A table
    Table(Table),
}

impl Block {
    /// Create a text block.
    pub fn markdown(text: impl Into<String>) -> Self {
        Block::Markdown { text: text.into() }
    }

    /// Check if this block is a text block.
    pub fn is_markdown(&self) -> bool {
        matches!(self, Block::Markdown { .. })
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Get the table if this block is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(t) => Some(t),
            Block::Markdown { .. } => None,
        }
    }

    /// Get the raw text if this block is a text block.
    pub fn as_markdown(&self) -> Option<&str> {
        match self {
            Block::Markdown { text } => Some(text),
            Block::Table(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titled_clamps_level() {
        assert_eq!(Section::titled("Deep", 6).level, Some(3));
        assert_eq!(Section::titled("Zero", 0).level, Some(1));
        assert_eq!(Section::titled("Two", 2).level, Some(2));
    }

    #[test]
    fn test_section_is_empty() {
        assert!(Section::implicit().is_empty());
        assert!(!Section::titled("Heading only", 1).is_empty());

        let mut s = Section::implicit();
        s.add_text("body");
        assert!(!s.is_empty());
        assert!(s.is_implicit());
    }

    #[test]
    fn test_block_serializes_with_type_tag() {
        let json = serde_json::to_value(Block::markdown("hi")).unwrap();
        assert_eq!(json["type"], "markdown");
        assert_eq!(json["text"], "hi");

        let table = Table::new(vec!["A".into()]);
        let json = serde_json::to_value(Block::Table(table)).unwrap();
        assert_eq!(json["type"], "table");
        assert_eq!(json["headers"][0], "A");
    }

    #[test]
    fn test_block_accessors() {
        let text = Block::markdown("x");
        assert!(text.is_markdown());
        assert_eq!(text.as_markdown(), Some("x"));
        assert!(text.as_table().is_none());
    }
}
