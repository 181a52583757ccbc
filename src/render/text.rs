//! Plain text rendering.

use crate::model::{Block, Document, Table};
use crate::parser::strip_markup;

/// Convert a document to plain text.
///
/// Emphasis delimiters are removed, headings become bare lines and tables
/// are written tab separated. Blocks are separated by blank lines.
pub fn to_text(doc: &Document) -> String {
    let mut parts = Vec::new();

    for section in &doc.sections {
        if let Some(heading) = &section.heading {
            parts.push(heading.clone());
        }
        for block in &section.blocks {
            match block {
                Block::Markdown { text } => parts.push(text_block(text)),
                Block::Table(table) => parts.push(table_text(table)),
            }
        }
    }

    parts.retain(|p| !p.is_empty());
    parts.join("\n\n")
}

fn text_block(text: &str) -> String {
    text.lines().map(strip_markup).collect::<Vec<_>>().join("\n")
}

fn table_text(table: &Table) -> String {
    let body = table
        .plain_text()
        .lines()
        .map(strip_markup)
        .collect::<Vec<_>>()
        .join("\n");
    match &table.caption {
        Some(caption) => format!("{}\n{}", caption, body),
        None => body,
    }
}
