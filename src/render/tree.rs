//! Render tree types handed to the host.
//!
//! The tree is renderer-agnostic: it says *what* to paint (a section with a
//! tone, a paragraph of styled runs, a grid or a stack of fact cards) and
//! leaves colours, fonts and spacing to the host theme.

use serde::{Deserialize, Serialize};

use super::Viewport;
use crate::model::{InlineContent, InlineRun};

/// Laid-out document for one viewport class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderTree {
    /// Viewport the tree was laid out for
    pub viewport: Viewport,
    /// Top-level nodes in document order
    pub nodes: Vec<RenderNode>,
}

impl RenderTree {
    /// Create an empty tree.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            nodes: Vec::new(),
        }
    }

    /// Count every node, nested children included.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[RenderNode]) -> usize {
            nodes
                .iter()
                .map(|n| match n {
                    RenderNode::Section { children, .. } => 1 + count(children),
                    _ => 1,
                })
                .sum()
        }
        count(&self.nodes)
    }

    /// Check if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// One node of the render tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderNode {
    /// Section boundary. Implicit sections have no heading, level or tone.
    Section {
        heading: Option<String>,
        level: Option<u8>,
        tone: Option<HeadingTone>,
        children: Vec<RenderNode>,
    },
    /// Styled runs with explicit line breaks between source lines
    Paragraph { runs: Vec<InlineContent> },
    /// Table stacked as one card per row (compact layout)
    FactCardTable {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        cards: Vec<FactCard>,
    },
    /// Table as a multi-column grid (wide layout)
    GridTable {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        headers: Vec<Cell>,
        rows: Vec<Vec<Cell>>,
    },
}

impl RenderNode {
    /// Check if this node is a table in either layout.
    pub fn is_table(&self) -> bool {
        matches!(
            self,
            RenderNode::FactCardTable { .. } | RenderNode::GridTable { .. }
        )
    }
}

/// Heading accent, a pure function of the heading level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeadingTone {
    Primary,
    Secondary,
    Tertiary,
}

impl HeadingTone {
    /// Tone for a heading level: 1 primary, 2 secondary, 3 and deeper tertiary.
    pub fn for_level(level: u8) -> Self {
        match level {
            0 | 1 => HeadingTone::Primary,
            2 => HeadingTone::Secondary,
            _ => HeadingTone::Tertiary,
        }
    }
}

/// Table cell with its source text and lexed runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    pub runs: Vec<InlineRun>,
}

impl Cell {
    /// Create a cell from already lexed runs.
    pub fn new(text: impl Into<String>, runs: Vec<InlineRun>) -> Self {
        Self {
            text: text.into(),
            runs,
        }
    }

    /// Check if the cell has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// One table row stacked as a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCard {
    /// First cell of the row
    pub title: Cell,
    /// Remaining cells, labelled
    pub fields: Vec<FactField>,
}

/// Labelled value inside a fact card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactField {
    pub label: String,
    pub value: Cell,
}
