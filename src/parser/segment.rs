//! Block segmentation.
//!
//! Walks cleaned lines, classifies each one and groups them into raw blocks:
//! headings, runs of table rows and runs of text lines. Blank lines end a
//! run but are never emitted.

use super::inline::{lex, strip_markup};
use super::table::{is_separator_row, is_table_row};
use super::ParseOptions;
use crate::model::{InlineStyle, MAX_HEADING_LEVEL};

/// Level given to `***Title***` headings.
const BOLD_HEADING_LEVEL: u8 = 3;

/// Plain bullet markers that get rewritten to `-`.
const BULLETS: [char; 9] = ['-', '*', '+', '•', '●', '○', '▪', '◦', '‣'];

/// Kind of a raw block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawBlockKind {
    /// A single heading line
    Heading,
    /// Consecutive table rows, separator rows removed
    Table,
    /// Consecutive text and list lines
    Text,
}

/// A group of source lines of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    /// Block kind
    pub kind: RawBlockKind,

    /// Lines in source order (heading blocks hold the heading text)
    pub lines: Vec<String>,

    /// Heading level for heading blocks
    pub level: Option<u8>,
}

impl RawBlock {
    /// Create a heading block.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Self {
            kind: RawBlockKind::Heading,
            lines: vec![text.into()],
            level: Some(level),
        }
    }

    /// Create a table block.
    pub fn table(lines: Vec<String>) -> Self {
        Self {
            kind: RawBlockKind::Table,
            lines,
            level: None,
        }
    }

    /// Create a text block.
    pub fn text(lines: Vec<String>) -> Self {
        Self {
            kind: RawBlockKind::Text,
            lines,
            level: None,
        }
    }

    /// Get the heading text of a heading block.
    pub fn heading_text(&self) -> Option<&str> {
        match self.kind {
            RawBlockKind::Heading => self.lines.first().map(String::as_str),
            _ => None,
        }
    }
}

/// Marker that opened a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `-`, `*`, `+`, `•` and friends
    Bullet(char),
    /// `1.` or `1)`
    Numbered(u32),
    /// A leading emoji pictograph (`✅ item`)
    Emoji(char),
}

/// Classification of one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only
    Blank,
    /// A heading with its level and plain text
    Heading {
        /// Level 1-3
        level: u8,
        /// Heading text, emphasis removed
        text: String,
    },
    /// A pipe-delimited table row
    TableRow,
    /// A list item
    ListItem(ListMarker),
    /// Anything else
    Text,
}

/// Classify a single line.
pub fn classify(line: &str, options: &ParseOptions) -> LineKind {
    let t = line.trim();
    if t.is_empty() {
        return LineKind::Blank;
    }
    if let Some((level, text)) = parse_heading(t) {
        return LineKind::Heading {
            level,
            text: strip_markup(text).trim().to_string(),
        };
    }
    if options.bold_headings {
        if let Some(text) = parse_bold_heading(t) {
            return LineKind::Heading {
                level: BOLD_HEADING_LEVEL,
                text,
            };
        }
    }
    if is_table_row(t) {
        return LineKind::TableRow;
    }
    if let Some(marker) = parse_list_marker(t) {
        return LineKind::ListItem(marker);
    }
    LineKind::Text
}

/// Group lines into raw blocks.
pub fn segment<S: AsRef<str>>(lines: &[S], options: &ParseOptions) -> Vec<RawBlock> {
    let classified: Vec<(LineKind, &str)> = lines
        .iter()
        .map(|l| {
            let line = l.as_ref();
            let kind = classify(line, options);
            log::trace!("Segment: {:?} <- {:?}", kind, line);
            (kind, line)
        })
        .collect();

    let mut blocks = Vec::new();
    let mut text: Vec<String> = Vec::new();
    let mut table: Vec<String> = Vec::new();

    for (i, (kind, line)) in classified.iter().enumerate() {
        match kind {
            LineKind::Blank => {
                flush(&mut blocks, &mut text, RawBlock::text);
                flush(&mut blocks, &mut table, RawBlock::table);
            }
            LineKind::Heading { level, text: title } => {
                flush(&mut blocks, &mut text, RawBlock::text);
                flush(&mut blocks, &mut table, RawBlock::table);
                if options.suppress_table_headings && introduces_table(&classified[i + 1..]) {
                    log::debug!("Segment: suppressing heading {:?} before table", title);
                    continue;
                }
                blocks.push(RawBlock::heading(title.clone(), *level));
            }
            LineKind::TableRow => {
                flush(&mut blocks, &mut text, RawBlock::text);
                if !is_separator_row(line) {
                    table.push(line.trim().to_string());
                }
            }
            LineKind::ListItem(marker) => {
                flush(&mut blocks, &mut table, RawBlock::table);
                text.push(list_line(line.trim(), *marker, options.normalize_bullets));
            }
            LineKind::Text => {
                flush(&mut blocks, &mut table, RawBlock::table);
                text.push(line.trim().to_string());
            }
        }
    }
    flush(&mut blocks, &mut text, RawBlock::text);
    flush(&mut blocks, &mut table, RawBlock::table);

    log::debug!(
        "Segment: {} line(s) into {} block(s)",
        classified.len(),
        blocks.len()
    );
    blocks
}

fn flush(blocks: &mut Vec<RawBlock>, pending: &mut Vec<String>, make: fn(Vec<String>) -> RawBlock) {
    if !pending.is_empty() {
        blocks.push(make(std::mem::take(pending)));
    }
}

/// Check if the line right after a heading is a table row.
fn introduces_table(rest: &[(LineKind, &str)]) -> bool {
    rest.first()
        .is_some_and(|(kind, _)| *kind == LineKind::TableRow)
}

/// `#`, `##` or `###`, whitespace, then non-empty text. Closing hashes are
/// dropped.
fn parse_heading(t: &str) -> Option<(u8, &str)> {
    let hashes = t.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > MAX_HEADING_LEVEL as usize {
        return None;
    }
    let rest = &t[hashes..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim().trim_end_matches('#').trim_end();
    if text.is_empty() {
        return None;
    }
    Some((hashes as u8, text))
}

/// A line that is entirely one `***Title***` run.
fn parse_bold_heading(t: &str) -> Option<String> {
    if !t.starts_with("***") {
        return None;
    }
    match lex(t).as_slice() {
        [run] if run.style == InlineStyle::BoldItalic && !run.text.trim().is_empty() => {
            Some(run.text.trim().to_string())
        }
        _ => None,
    }
}

fn parse_list_marker(t: &str) -> Option<ListMarker> {
    let mut chars = t.chars();
    let first = chars.next()?;

    if BULLETS.contains(&first) {
        return chars
            .next()
            .filter(|c| c.is_whitespace())
            .map(|_| ListMarker::Bullet(first));
    }

    if first.is_ascii_digit() {
        let digits = t.chars().take_while(char::is_ascii_digit).count();
        let mut rest = t[digits..].chars();
        let delimiter = rest.next()?;
        let space = rest.next()?;
        if matches!(delimiter, '.' | ')') && space.is_whitespace() {
            return t[..digits].parse().ok().map(ListMarker::Numbered);
        }
        return None;
    }

    if is_pictograph(first) {
        let after = chars.find(|&c| !is_emoji_modifier(c) && !is_pictograph(c))?;
        if after.is_whitespace() {
            return Some(ListMarker::Emoji(first));
        }
    }
    None
}

fn list_line(t: &str, marker: ListMarker, normalize: bool) -> String {
    match marker {
        ListMarker::Bullet(c) if normalize && c != '-' => {
            let body = t[c.len_utf8()..].trim_start();
            format!("- {}", body)
        }
        _ => t.to_string(),
    }
}

fn is_pictograph(c: char) -> bool {
    matches!(
        c as u32,
        0x2300..=0x23FF | 0x2600..=0x27BF | 0x2B00..=0x2BFF | 0x1F000..=0x1FAFF
    )
}

fn is_emoji_modifier(c: char) -> bool {
    matches!(c as u32, 0xFE0F | 0x200D | 0x20E3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ParseOptions {
        ParseOptions::default()
    }

    fn seg(text: &str) -> Vec<RawBlock> {
        let lines: Vec<&str> = text.lines().collect();
        segment(&lines, &opts())
    }

    #[test]
    fn test_classify_headings() {
        let o = opts();
        assert_eq!(
            classify("# Title", &o),
            LineKind::Heading {
                level: 1,
                text: "Title".into()
            }
        );
        assert_eq!(
            classify("  ### **Key** Facts ###", &o),
            LineKind::Heading {
                level: 3,
                text: "Key Facts".into()
            }
        );
        assert_eq!(classify("#### Too deep", &o), LineKind::Text);
        assert_eq!(classify("#hashtag", &o), LineKind::Text);
        assert_eq!(classify("##", &o), LineKind::Text);
    }

    #[test]
    fn test_classify_bold_heading() {
        let o = opts();
        assert_eq!(
            classify("***Clinical Pearls***", &o),
            LineKind::Heading {
                level: 3,
                text: "Clinical Pearls".into()
            }
        );
        assert_eq!(classify("***a*** and more", &o), LineKind::Text);
        assert_eq!(classify("**Bold line**", &o), LineKind::Text);

        let o = opts().with_bold_headings(false);
        assert_eq!(classify("***Clinical Pearls***", &o), LineKind::Text);
    }

    #[test]
    fn test_classify_list_items() {
        let o = opts();
        assert_eq!(classify("- a", &o), LineKind::ListItem(ListMarker::Bullet('-')));
        assert_eq!(classify("* a", &o), LineKind::ListItem(ListMarker::Bullet('*')));
        assert_eq!(classify("• a", &o), LineKind::ListItem(ListMarker::Bullet('•')));
        assert_eq!(classify("12. a", &o), LineKind::ListItem(ListMarker::Numbered(12)));
        assert_eq!(classify("3) a", &o), LineKind::ListItem(ListMarker::Numbered(3)));
        assert_eq!(classify("✅ done", &o), LineKind::ListItem(ListMarker::Emoji('✅')));
        assert_eq!(
            classify("⚠\u{FE0F} careful", &o),
            LineKind::ListItem(ListMarker::Emoji('⚠'))
        );
        assert_eq!(classify("**bold** start", &o), LineKind::Text);
        assert_eq!(classify("2024 was a year", &o), LineKind::Text);
        assert_eq!(classify("3.5 mg", &o), LineKind::Text);
    }

    #[test]
    fn test_classify_table_and_blank() {
        let o = opts();
        assert_eq!(classify("| a | b |", &o), LineKind::TableRow);
        assert_eq!(classify("|---|---|", &o), LineKind::TableRow);
        assert_eq!(classify("   ", &o), LineKind::Blank);
    }

    #[test]
    fn test_segment_groups_runs() {
        let blocks = seg("Intro line\nsecond line\n\n| a | b |\n|---|---|\n| 1 | 2 |\nAfter");
        assert_eq!(
            blocks,
            vec![
                RawBlock::text(vec!["Intro line".into(), "second line".into()]),
                RawBlock::table(vec!["| a | b |".into(), "| 1 | 2 |".into()]),
                RawBlock::text(vec!["After".into()]),
            ]
        );
    }

    #[test]
    fn test_segment_blank_lines_split_text() {
        let blocks = seg("one\n\n\ntwo");
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b.kind == RawBlockKind::Text));
    }

    #[test]
    fn test_segment_suppresses_heading_before_table() {
        let blocks = seg("# Title\n|a|b|\n|-|-|\n|1|2|");
        assert_eq!(blocks, vec![RawBlock::table(vec!["|a|b|".into(), "|1|2|".into()])]);

        let blocks = seg("## Doses\n| Drug | mg |\n| A | 5 |");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, RawBlockKind::Table);
    }

    #[test]
    fn test_segment_keeps_heading_separated_from_table() {
        let blocks = seg("## Doses\n\n| Drug | mg |\n| A | 5 |");
        assert_eq!(blocks[0], RawBlock::heading("Doses", 2));
        assert_eq!(blocks[1].kind, RawBlockKind::Table);
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_segment_keeps_heading_when_suppression_disabled() {
        let lines: Vec<&str> = "# Title\n|a|b|\n|1|2|".lines().collect();
        let blocks = segment(&lines, &opts().with_table_heading_suppression(false));
        assert_eq!(blocks[0], RawBlock::heading("Title", 1));
        assert_eq!(blocks[1].kind, RawBlockKind::Table);
    }

    #[test]
    fn test_segment_keeps_heading_before_text() {
        let blocks = seg("### Key Facts\n- fact\n\n| a |\n| 1 |");
        assert_eq!(blocks[0], RawBlock::heading("Key Facts", 3));
        assert_eq!(blocks[1], RawBlock::text(vec!["- fact".into()]));
        assert_eq!(blocks[2].kind, RawBlockKind::Table);
    }

    #[test]
    fn test_segment_normalizes_bullets() {
        let blocks = seg("* star *item*\n+ plus\n• dot\n1. one\n🔥 hot");
        assert_eq!(
            blocks,
            vec![RawBlock::text(vec![
                "- star *item*".into(),
                "- plus".into(),
                "- dot".into(),
                "1. one".into(),
                "🔥 hot".into(),
            ])]
        );

        let lines = ["* star"];
        let blocks = segment(&lines, &opts().with_bullet_normalization(false));
        assert_eq!(blocks[0].lines, vec!["* star"]);
    }

    #[test]
    fn test_segment_separator_only_run_is_dropped() {
        let blocks = seg("|---|---|\ntext");
        assert_eq!(blocks, vec![RawBlock::text(vec!["text".into()])]);
    }

    #[test]
    fn test_heading_text_accessor() {
        assert_eq!(RawBlock::heading("H", 2).heading_text(), Some("H"));
        assert_eq!(RawBlock::text(vec!["x".into()]).heading_text(), None);
    }
}
