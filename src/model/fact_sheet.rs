//! JSON fact-sheet input shape.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Top-level keys that identify a fact sheet.
pub(crate) const FACT_SHEET_KEYS: [&str; 5] = [
    "concept",
    "cases",
    "high_yield_facts",
    "tables",
    "exam_pointers",
];

/// A structured concept summary returned by the content service.
///
/// Built once per upstream response and adapted into sections straight away;
/// nothing mutates it afterwards. Every field is optional on input and a JSON
/// `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactSheet {
    /// Central concept summary
    #[serde(default)]
    pub concept: Option<String>,

    /// Clinical cases: `{ "Case title": { "label": "value", ... } }` per entry
    #[serde(default, deserialize_with = "null_as_default")]
    pub cases: Vec<Map<String, Value>>,

    /// High-yield facts, one per entry
    #[serde(default, deserialize_with = "null_as_default")]
    pub high_yield_facts: Vec<String>,

    /// Tables as embedded Markdown
    #[serde(default, deserialize_with = "null_as_default")]
    pub tables: Vec<FactTable>,

    /// Exam pointers, one per entry
    #[serde(default, deserialize_with = "null_as_default")]
    pub exam_pointers: Vec<String>,
}

impl FactSheet {
    /// Parse a fact sheet from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Build a fact sheet from an already decoded JSON value.
    ///
    /// Anything but a JSON object (including `null`) is a caller error.
    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::InvalidInput(format!(
                "expected a JSON object for a fact sheet, found {}",
                json_kind(value)
            )));
        }
        Ok(Self::deserialize(value)?)
    }

    /// Check if an object carries at least one fact-sheet key.
    pub fn is_fact_sheet_object(map: &Map<String, Value>) -> bool {
        FACT_SHEET_KEYS.iter().any(|k| map.contains_key(*k))
    }

    /// Check if every field is absent or empty.
    pub fn is_empty(&self) -> bool {
        self.concept.as_deref().map_or(true, |c| c.trim().is_empty())
            && self.cases.is_empty()
            && self.high_yield_facts.is_empty()
            && self.tables.is_empty()
            && self.exam_pointers.is_empty()
    }
}

/// A table embedded in a fact sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactTable {
    /// Optional table title
    #[serde(default)]
    pub title: Option<String>,

    /// Pipe-table Markdown
    #[serde(default)]
    pub markdown: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_full() {
        let fs = FactSheet::from_json(
            r#"{
                "concept": "Sleep has stages.",
                "cases": [{"Case 1": {"Age": "34", "Finding": "Insomnia"}}],
                "high_yield_facts": ["REM is stage 5"],
                "tables": [{"title": "Stages", "markdown": "| A | B |\n|---|---|\n| 1 | 2 |"}],
                "exam_pointers": ["Know the stages"]
            }"#,
        )
        .unwrap();

        assert_eq!(fs.concept.as_deref(), Some("Sleep has stages."));
        assert_eq!(fs.cases.len(), 1);
        assert_eq!(fs.tables[0].title.as_deref(), Some("Stages"));
        assert!(!fs.is_empty());
    }

    #[test]
    fn test_nulls_and_missing_fields_are_empty() {
        let fs = FactSheet::from_json(r#"{"concept": null, "cases": null, "tables": null}"#)
            .unwrap();
        assert!(fs.is_empty());
    }

    #[test]
    fn test_non_object_is_invalid_input() {
        let err = FactSheet::from_value(&Value::Null).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("null"));

        let err = FactSheet::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        let err = FactSheet::from_json("{\"concept\": ").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_case_key_order_is_preserved() {
        let fs = FactSheet::from_json(
            r#"{"cases": [{"Case": {"Zeta": "1", "Alpha": "2", "Mid": "3"}}]}"#,
        )
        .unwrap();
        let labels: Vec<&String> = fs.cases[0]["Case"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(labels, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_is_fact_sheet_object() {
        let value: Value = serde_json::from_str(r#"{"exam_pointers": []}"#).unwrap();
        assert!(FactSheet::is_fact_sheet_object(value.as_object().unwrap()));

        let value: Value = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
        assert!(!FactSheet::is_fact_sheet_object(value.as_object().unwrap()));
    }
}
