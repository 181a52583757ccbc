//! Section assembly.

use super::segment::{RawBlock, RawBlockKind};
use super::table::parse_table;
use crate::model::{Block, Section};

/// Group raw blocks under the nearest preceding heading.
///
/// Always returns at least one section: input without headings produces a
/// single implicit section (heading `None`), even when it holds no blocks.
pub fn assemble(raw_blocks: Vec<RawBlock>) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section::implicit();

    for raw in raw_blocks {
        match raw.kind {
            RawBlockKind::Heading => {
                if !current.is_empty() {
                    sections.push(std::mem::take(&mut current));
                }
                let text = raw.lines.into_iter().next().unwrap_or_default();
                current = Section::titled(text, raw.level.unwrap_or(1));
            }
            RawBlockKind::Table => match parse_table(&raw.lines) {
                Some(table) => current.add_block(Block::Table(table)),
                None => log::debug!(
                    "Assemble: dropped malformed table of {} line(s)",
                    raw.lines.len()
                ),
            },
            RawBlockKind::Text => current.add_block(Block::markdown(raw.lines.join("\n"))),
        }
    }

    if !current.is_empty() || sections.is_empty() {
        sections.push(current);
    }
    sections
}
