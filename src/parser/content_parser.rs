//! Content parser: runs the stage pipeline for either input shape.

use std::fs;
use std::io::Read;
use std::path::Path;

use rayon::prelude::*;
use serde_json::Value;

use crate::detect::{sniff_fact_sheet, InputFormat};
use crate::error::Result;
use crate::model::{Document, FactSheet};

use super::fact_sheet::adapt_fact_sheet;
use super::fence::{normalize, strip};
use super::options::ParseOptions;
use super::section::assemble;
use super::segment::segment;

/// Parser for generated study content.
///
/// Holds no state besides its options; every call is independent, so one
/// parser can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ContentParser {
    options: ParseOptions,
}

impl ContentParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Get the parser options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse content, detecting its format unless one is forced.
    pub fn parse(&self, input: &str) -> Result<Document> {
        match self.options.format {
            Some(InputFormat::Markdown) => Ok(self.parse_markdown(input)),
            Some(InputFormat::FactSheet) => self.parse_fact_sheet(input),
            None => match sniff_fact_sheet(input) {
                Some(value) => {
                    log::debug!("Parser: detected JSON fact sheet");
                    self.parse_value(&value)
                }
                None => {
                    log::debug!("Parser: treating input as Markdown");
                    Ok(self.parse_markdown(input))
                }
            },
        }
    }

    /// Parse hybrid Markdown text. Never fails: malformed pieces degrade.
    pub fn parse_markdown(&self, input: &str) -> Document {
        let normalized;
        let source = if self.options.normalize_unicode {
            normalized = normalize(input);
            normalized.as_str()
        } else {
            input
        };

        let cleaned = strip(source);
        let lines: Vec<&str> = cleaned.lines().collect();
        let raw_blocks = segment(&lines, &self.options);
        Document::from_sections(assemble(raw_blocks))
    }

    /// Parse JSON fact-sheet text. Fence lines around the JSON are ignored.
    pub fn parse_fact_sheet(&self, input: &str) -> Result<Document> {
        let sheet = FactSheet::from_json(&strip(input))?;
        Ok(self.adapt(&sheet))
    }

    /// Parse an already decoded JSON value as a fact sheet.
    pub fn parse_value(&self, value: &Value) -> Result<Document> {
        let sheet = FactSheet::from_value(value)?;
        Ok(self.adapt(&sheet))
    }

    /// Adapt a fact sheet into a document.
    pub fn adapt(&self, sheet: &FactSheet) -> Document {
        Document::from_sections(adapt_fact_sheet(sheet))
    }

    /// Parse a file.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let content = fs::read_to_string(path)?;
        self.parse(&content)
    }

    /// Parse content from a reader.
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<Document> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        self.parse(&content)
    }

    /// Parse many inputs. Results keep input order.
    pub fn parse_batch<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Vec<Result<Document>> {
        if self.options.parallel {
            inputs.par_iter().map(|i| self.parse(i.as_ref())).collect()
        } else {
            inputs.iter().map(|i| self.parse(i.as_ref())).collect()
        }
    }
}
