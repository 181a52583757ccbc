//! Adaptive layout: document plus viewport into a render tree.
//!
//! This is the only place the viewport is consulted. Tables become grids on
//! wide screens and stacked fact cards on compact screens; everything else
//! lays out the same way on both.

use super::tree::{Cell, FactCard, FactField, HeadingTone, RenderNode, RenderTree};
use super::RenderOptions;
use crate::model::{Block, Document, InlineContent, InlineRun, Section, Table};
use crate::parser::{lex, lex_multiline};

/// Lay out a document for the configured viewport.
///
/// # Example
/// ```
/// use lessonmark::render::{render, RenderNode, RenderOptions};
///
/// let doc = lessonmark::parse_str("| Drug | Dose |\n|---|---|\n| A | 5 mg |").unwrap();
/// let tree = render(&doc, &RenderOptions::new().compact());
/// let RenderNode::Section { children, .. } = &tree.nodes[0] else { unreachable!() };
/// assert!(matches!(children[0], RenderNode::FactCardTable { .. }));
/// ```
pub fn render(doc: &Document, options: &RenderOptions) -> RenderTree {
    LayoutRenderer::new(options.clone()).render(doc)
}

/// Layout renderer.
pub struct LayoutRenderer {
    options: RenderOptions,
}

impl LayoutRenderer {
    /// Create a new layout renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Get the render options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Lay out a whole document.
    pub fn render(&self, doc: &Document) -> RenderTree {
        let nodes = doc.sections.iter().map(|s| self.render_section(s)).collect();
        let tree = RenderTree {
            viewport: self.options.viewport,
            nodes,
        };
        log::debug!(
            "Layout: {} node(s) for {} viewport",
            tree.node_count(),
            tree.viewport
        );
        tree
    }

    /// Lay out one section.
    pub fn render_section(&self, section: &Section) -> RenderNode {
        let level = section.heading.as_ref().and(section.level);
        RenderNode::Section {
            heading: section.heading.clone(),
            level,
            tone: level.map(HeadingTone::for_level),
            children: section
                .blocks
                .iter()
                .filter_map(|b| self.render_block(b))
                .collect(),
        }
    }

    /// Lay out one block. Text that leaves nothing to paint yields `None`.
    pub fn render_block(&self, block: &Block) -> Option<RenderNode> {
        match block {
            Block::Markdown { text } => {
                let runs = self.paragraph(text);
                let has_runs = runs.iter().any(|c| c.as_run().is_some());
                has_runs.then_some(RenderNode::Paragraph { runs })
            }
            Block::Table(table) if self.options.uses_cards() => Some(self.fact_cards(table)),
            Block::Table(table) => Some(self.grid(table)),
        }
    }

    fn paragraph(&self, text: &str) -> Vec<InlineContent> {
        let content = lex_multiline(text);
        if self.options.keep_empty_runs {
            return content;
        }
        content
            .into_iter()
            .filter(|c| c.as_run().map_or(true, |r| !r.is_empty()))
            .collect()
    }

    fn runs(&self, text: &str) -> Vec<InlineRun> {
        let runs = lex(text);
        if self.options.keep_empty_runs {
            return runs;
        }
        runs.into_iter().filter(|r| !r.is_empty()).collect()
    }

    fn cell(&self, text: &str) -> Cell {
        Cell::new(text, self.runs(text))
    }

    /// One card per row: the first cell titles the card, the rest become
    /// fields labelled by their header.
    fn fact_cards(&self, table: &Table) -> RenderNode {
        let cards = table
            .rows
            .iter()
            .map(|row| {
                let title = row.first().map(|t| self.cell(t)).unwrap_or_default();
                let fields = row
                    .iter()
                    .enumerate()
                    .skip(1)
                    .map(|(col, value)| FactField {
                        label: self.field_label(table, col),
                        value: self.cell(value),
                    })
                    .collect();
                FactCard { title, fields }
            })
            .collect();

        RenderNode::FactCardTable {
            caption: table.caption.clone(),
            cards,
        }
    }

    fn field_label(&self, table: &Table, col: usize) -> String {
        match table.headers.get(col) {
            Some(header) => header.clone(),
            None => format!("{} {}", self.options.field_label_prefix, col + 1),
        }
    }

    /// One column per header; rows padded or truncated to fit.
    fn grid(&self, table: &Table) -> RenderNode {
        if table.is_ragged() {
            log::trace!("Layout: fitting ragged table to {} column(s)", table.column_count());
        }
        let headers = table.headers.iter().map(|h| self.cell(h)).collect();
        let rows = (0..table.row_count())
            .map(|r| {
                table
                    .fitted_row(r)
                    .into_iter()
                    .map(|text| self.cell(text))
                    .collect()
            })
            .collect();

        RenderNode::GridTable {
            caption: table.caption.clone(),
            headers,
            rows,
        }
    }
}
