//! Integration tests for the JSON fact-sheet path.

use lessonmark::model::{Block, FactSheet};
use lessonmark::parser::{adapt_fact_sheet, CONCEPT_HEADING, EXAM_POINTERS_HEADING, HIGH_YIELD_HEADING};
use lessonmark::render::{render, RenderNode, RenderOptions};
use lessonmark::{
    detect_format, parse_fact_sheet, parse_str, parse_str_with_options, Error, InputFormat,
    ParseOptions,
};

const SHEET: &str = r#"```json
{
    "concept": "Narcolepsy is a disorder of **REM** regulation.",
    "cases": [
        {"Case 1: Daytime sleepiness": {"Age": "24", "Finding": "Cataplexy", "Latency (min)": 3}},
        {"Case 2": "Sleep paralysis on waking"}
    ],
    "high_yield_facts": ["Orexin is low in CSF", "  ", "HLA-DQB1*06:02"],
    "tables": [
        {"title": "Sleep stages", "markdown": "| Stage | Waves |\n|---|---|\n| N1 | theta |\n| REM | sawtooth |"},
        {"title": "Broken", "markdown": "just prose"}
    ],
    "exam_pointers": ["Treat with modafinil", "Sodium oxybate for cataplexy"]
}
```"#;

#[test]
fn test_detects_fenced_fact_sheet() {
    assert_eq!(detect_format(SHEET), InputFormat::FactSheet);
}

#[test]
fn test_fact_sheet_sections() {
    let doc = parse_str(SHEET).unwrap();

    let headings: Vec<Option<&str>> = doc.sections.iter().map(|s| s.heading.as_deref()).collect();
    assert_eq!(
        headings,
        vec![
            Some(CONCEPT_HEADING),
            Some("Case 1: Daytime sleepiness"),
            Some("Case 2"),
            Some(HIGH_YIELD_HEADING),
            None,
            Some(EXAM_POINTERS_HEADING),
        ]
    );

    assert_eq!(
        doc.sections[1].blocks,
        vec![Block::markdown(
            "- Age: 24\n- Finding: Cataplexy\n- Latency (min): 3"
        )]
    );
    assert_eq!(
        doc.sections[2].blocks,
        vec![Block::markdown("- Sleep paralysis on waking")]
    );
    assert_eq!(doc.sections[3].blocks.len(), 2);

    let table = doc.sections[4].blocks[0].as_table().unwrap();
    assert_eq!(table.caption.as_deref(), Some("Sleep stages"));
    assert_eq!(table.headers, vec!["Stage", "Waves"]);
    assert_eq!(table.row_count(), 2);
}

#[test]
fn test_levels() {
    let doc = parse_str(SHEET).unwrap();
    let levels: Vec<Option<u8>> = doc.sections.iter().map(|s| s.level).collect();
    assert_eq!(
        levels,
        vec![Some(2), Some(3), Some(3), Some(2), None, Some(2)]
    );
}

#[test]
fn test_same_layout_as_markdown_path() {
    let doc = parse_str(SHEET).unwrap();
    let tree = render(&doc, &RenderOptions::new().compact());

    let RenderNode::Section { children, heading, .. } = &tree.nodes[4] else {
        panic!("expected section");
    };
    assert!(heading.is_none());
    let RenderNode::FactCardTable { caption, cards } = &children[0] else {
        panic!("expected fact cards");
    };
    assert_eq!(caption.as_deref(), Some("Sleep stages"));
    assert_eq!(cards[1].title.text, "REM");
    assert_eq!(cards[1].fields[0].label, "Waves");
}

#[test]
fn test_adapter_is_deterministic() {
    let sheet = FactSheet::from_json(&lessonmark::parser::strip(SHEET)).unwrap();
    assert_eq!(adapt_fact_sheet(&sheet), adapt_fact_sheet(&sheet));
    assert_eq!(parse_str(SHEET).unwrap(), parse_str(SHEET).unwrap());
}

#[test]
fn test_empty_fact_sheet() {
    let doc = parse_fact_sheet("{}").unwrap();
    assert_eq!(doc.section_count(), 0);
    assert!(doc.is_empty());

    let doc = parse_fact_sheet(r#"{"concept": null, "cases": null, "exam_pointers": []}"#).unwrap();
    assert_eq!(doc.section_count(), 0);
}

#[test]
fn test_non_object_is_invalid_input() {
    for input in ["null", "[]", "\"text\"", "42"] {
        let err = parse_fact_sheet(input).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)), "input {}", input);
    }
}

#[test]
fn test_broken_json_when_forced() {
    let options = ParseOptions::new().with_format(InputFormat::FactSheet);
    let err = parse_str_with_options("{\"concept\": ", options).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_broken_json_falls_back_to_markdown() {
    let doc = parse_str("{\"concept\":").unwrap();
    assert_eq!(doc.sections[0].blocks, vec![Block::markdown("{\"concept\":")]);
}

#[test]
fn test_unrelated_json_object_is_markdown() {
    let doc = parse_str(r#"{"title": "not a sheet"}"#).unwrap();
    assert!(doc.sections[0].heading.is_none());
    assert!(doc.sections[0].blocks[0].is_markdown());
}
