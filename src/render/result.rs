//! Document statistics.

use crate::model::{Block, Document};
use crate::parser::strip_markup;
use serde::{Deserialize, Serialize};

/// Counts collected from a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Number of sections, implicit ones included
    pub section_count: u32,

    /// Number of titled sections
    pub heading_count: u32,

    /// Number of text blocks
    pub text_block_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Number of table data rows
    pub table_row_count: u32,

    /// Approximate word count (whitespace-separated tokens, markup removed)
    pub word_count: u32,
}

impl DocumentStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from a document.
    pub fn collect(doc: &Document) -> Self {
        let mut stats = Self::new();
        for section in &doc.sections {
            stats.section_count += 1;
            if let Some(heading) = &section.heading {
                stats.heading_count += 1;
                stats.count_text(heading);
            }
            for block in &section.blocks {
                match block {
                    Block::Markdown { text } => {
                        stats.text_block_count += 1;
                        for line in text.lines() {
                            stats.count_text(&strip_markup(line));
                        }
                    }
                    Block::Table(table) => {
                        stats.table_count += 1;
                        stats.table_row_count += table.row_count() as u32;
                        for cell in table.headers.iter().chain(table.rows.iter().flatten()) {
                            stats.count_text(&strip_markup(cell));
                        }
                    }
                }
            }
        }
        stats
    }

    /// Add word counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &DocumentStats) {
        self.section_count += other.section_count;
        self.heading_count += other.heading_count;
        self.text_block_count += other.text_block_count;
        self.table_count += other.table_count;
        self.table_row_count += other.table_row_count;
        self.word_count += other.word_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Section, Table};

    #[test]
    fn test_collect() {
        let mut intro = Section::implicit();
        intro.add_text("Two **words**");
        let mut facts = Section::titled("Key Facts", 2);
        let mut table = Table::new(vec!["Stage".into(), "Duration".into()]);
        table.push_row(["1", "5 min"]);
        table.push_row(["2"]);
        facts.add_table(table);
        facts.add_text("- one\n- two");

        let stats = DocumentStats::collect(&Document::from_sections(vec![intro, facts]));
        assert_eq!(stats.section_count, 2);
        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.text_block_count, 2);
        assert_eq!(stats.table_count, 1);
        assert_eq!(stats.table_row_count, 2);
        // list markers count as words
        assert_eq!(stats.word_count, 14);
    }

    #[test]
    fn test_merge() {
        let mut a = DocumentStats {
            section_count: 1,
            word_count: 4,
            ..Default::default()
        };
        let b = DocumentStats {
            section_count: 2,
            table_count: 1,
            ..Default::default()
        };
        a.merge(&b);
        assert_eq!(a.section_count, 3);
        assert_eq!(a.table_count, 1);
        assert_eq!(a.word_count, 4);
    }
}
