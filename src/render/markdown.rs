//! Markdown rendering.
//!
//! Writes the normalised hybrid dialect the parser reads: ATX headings,
//! pipe tables with a `---` separator row, text blocks verbatim. A document
//! parsed from Markdown with default options re-parses to itself.

use crate::model::{Block, Document, Section, Table};

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document) -> String {
    MarkdownRenderer::new().render(doc)
}

/// Markdown renderer.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    captions: bool,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new() -> Self {
        Self { captions: true }
    }

    /// Write table captions as a bold line above the table.
    pub fn with_captions(mut self, captions: bool) -> Self {
        self.captions = captions;
        self
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &Document) -> String {
        let mut parts = Vec::new();
        for section in &doc.sections {
            self.render_section(section, &mut parts);
        }

        let mut output = parts.join("\n\n");
        if !output.is_empty() {
            output.push('\n');
        }
        output
    }

    fn render_section(&self, section: &Section, parts: &mut Vec<String>) {
        if let Some(heading) = &section.heading {
            let level = section.level.unwrap_or(1).max(1);
            parts.push(format!("{} {}", "#".repeat(level as usize), heading));
        }
        for block in &section.blocks {
            match block {
                Block::Markdown { text } if text.trim().is_empty() => {}
                Block::Markdown { text } => parts.push(text.clone()),
                Block::Table(table) => {
                    if let Some(caption) = table.caption.as_deref().filter(|_| self.captions) {
                        parts.push(format!("**{}**", caption));
                    }
                    parts.push(self.render_table(table));
                }
            }
        }
    }

    fn render_table(&self, table: &Table) -> String {
        let mut lines = Vec::with_capacity(table.row_count() + 2);
        lines.push(pipe_row(&table.headers));
        lines.push(pipe_row(&vec!["---".to_string(); table.column_count()]));
        for row in &table.rows {
            lines.push(pipe_row(row));
        }
        lines.join("\n")
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn pipe_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_markdown() {
        let mut intro = Section::implicit();
        intro.add_text("Welcome\n- **one**");
        let mut facts = Section::titled("Facts", 3);
        facts.add_text("Lead in");
        let mut table = Table::new(vec!["A".into(), "B".into()]);
        table.push_row(["1", "2", "3"]);
        facts.add_table(table);

        let md = to_markdown(&Document::from_sections(vec![intro, facts]));
        assert_eq!(
            md,
            "Welcome\n- **one**\n\n### Facts\n\nLead in\n\n| A | B |\n| --- | --- |\n| 1 | 2 | 3 |\n"
        );
    }

    #[test]
    fn test_captions() {
        let mut section = Section::implicit();
        section.add_table(Table::new(vec!["A".into()]).with_caption("Doses"));
        let doc = Document::from_sections(vec![section]);

        assert!(to_markdown(&doc).starts_with("**Doses**\n\n| A |"));
        assert!(MarkdownRenderer::new()
            .with_captions(false)
            .render(&doc)
            .starts_with("| A |"));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_markdown(&Document::new()), "");
        assert_eq!(to_markdown(&Document::from_sections(vec![Section::implicit()])), "");
    }
}
