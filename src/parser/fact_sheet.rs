//! JSON fact-sheet adaptation.
//!
//! Maps a [`FactSheet`] onto the same section model the text path produces,
//! so layout never needs to know which shape the content arrived in.

use super::fence::strip;
use super::table::{is_table_row, parse_table};
use crate::model::{FactSheet, FactTable, Section};
use serde_json::{Map, Value};

/// Heading for the concept summary.
pub const CONCEPT_HEADING: &str = "Central Concepts";
/// Heading for the high-yield fact list.
pub const HIGH_YIELD_HEADING: &str = "High-Yield Facts";
/// Heading for the exam pointer list.
pub const EXAM_POINTERS_HEADING: &str = "Exam Pointers";

const TOP_LEVEL: u8 = 2;
const CASE_LEVEL: u8 = 3;

/// Adapt a fact sheet into sections.
///
/// Order: concept, cases, high-yield facts, tables, exam pointers. Absent
/// or empty fields produce no section.
pub fn adapt_fact_sheet(fs: &FactSheet) -> Vec<Section> {
    let mut sections = Vec::new();

    if let Some(concept) = fs.concept.as_deref().map(str::trim) {
        if !concept.is_empty() {
            let mut section = Section::titled(CONCEPT_HEADING, TOP_LEVEL);
            section.add_text(concept);
            sections.push(section);
        }
    }

    for case in &fs.cases {
        sections.extend(case_sections(case));
    }

    let facts: Vec<&str> = fs
        .high_yield_facts
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect();
    if !facts.is_empty() {
        let mut section = Section::titled(HIGH_YIELD_HEADING, TOP_LEVEL);
        for fact in facts {
            section.add_text(fact);
        }
        sections.push(section);
    }

    for entry in &fs.tables {
        if let Some(section) = table_section(entry) {
            sections.push(section);
        }
    }

    let pointers = bullet_lines(fs.exam_pointers.iter().map(String::as_str));
    if !pointers.is_empty() {
        let mut section = Section::titled(EXAM_POINTERS_HEADING, TOP_LEVEL);
        section.add_text(pointers.join("\n"));
        sections.push(section);
    }

    log::debug!("FactSheet: adapted into {} section(s)", sections.len());
    sections
}

/// One section per key of a case entry, body lines `- label: value`.
fn case_sections(case: &Map<String, Value>) -> Vec<Section> {
    case.iter()
        .filter_map(|(title, body)| {
            let lines: Vec<String> = match body {
                Value::Object(fields) => fields
                    .iter()
                    .map(|(label, value)| format!("- {}: {}", label, value_text(value)))
                    .collect(),
                Value::Null => Vec::new(),
                other => bullet_lines(std::iter::once(value_text(other).as_str())),
            };
            if lines.is_empty() {
                log::debug!("FactSheet: skipping empty case {:?}", title);
                return None;
            }
            let mut section = Section::titled(title.trim(), CASE_LEVEL);
            section.add_text(lines.join("\n"));
            Some(section)
        })
        .collect()
}

fn table_section(entry: &FactTable) -> Option<Section> {
    let cleaned = strip(&entry.markdown);
    let rows: Vec<&str> = cleaned.lines().filter(|l| is_table_row(l)).collect();
    let Some(mut table) = parse_table(&rows) else {
        log::debug!(
            "FactSheet: dropping unparseable table {:?}",
            entry.title.as_deref().unwrap_or("")
        );
        return None;
    };
    if let Some(title) = entry.title.as_deref().map(str::trim) {
        if !title.is_empty() {
            table.caption = Some(title.to_string());
        }
    }
    let mut section = Section::implicit();
    section.add_table(table);
    Some(section)
}

fn bullet_lines<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    items
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("- {}", s))
        .collect()
}

/// Strings verbatim, everything else as its JSON text.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}
