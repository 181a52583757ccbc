//! Document-level types.

use super::{Block, Section, Table};
use serde::{Deserialize, Serialize};

/// A parsed study document: an ordered list of sections.
///
/// Sections keep source order. Text with no headings parses to exactly one
/// implicit section (heading `None`) holding every block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Sections in source order
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Create a document from already assembled sections.
    pub fn from_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Add a section to the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Check if the document has neither headings nor blocks.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(Section::is_empty)
    }

    /// Iterate over every block in document order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections.iter().flat_map(|s| s.blocks.iter())
    }

    /// Iterate over every table in document order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            Block::Markdown { .. } => None,
        })
    }

    /// Get plain text: headings, text without emphasis, tables tab separated.
    pub fn plain_text(&self) -> String {
        crate::render::to_text(self)
    }

    /// Iterate over the headings of titled sections.
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().filter_map(|s| s.heading.as_deref())
    }
}

impl From<Vec<Section>> for Document {
    fn from(sections: Vec<Section>) -> Self {
        Self::from_sections(sections)
    }
}
