//! # lessonmark
//!
//! Adaptive structured content renderer for generated study material.
//!
//! This library reads semi-structured lesson text (hybrid Markdown with
//! headings, pipe tables, lists and inline emphasis) or JSON fact sheets,
//! builds one renderer-agnostic document model, and lays it out per
//! viewport class: grids on wide screens, stacked fact cards on compact ones.
//!
//! ## Quick Start
//!
//! ```
//! use lessonmark::{parse_str, render, RenderOptions};
//!
//! fn main() -> lessonmark::Result<()> {
//!     let doc = parse_str("### Key Facts\n| Stage | Duration |\n|---|---|\n| 1 | 5 min |")?;
//!
//!     let tree = render::render(&doc, &RenderOptions::new().compact());
//!     println!("{}", render::to_json(&tree, render::JsonFormat::Pretty)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two input shapes**: hybrid Markdown and JSON fact sheets, auto-detected
//! - **Lossless emphasis**: bold, italic, bold-italic, `*_x_*`, inline code
//! - **Adaptive tables**: grid or fact cards from the same model
//! - **Host contract**: visitor hooks over the render tree
//! - **Parallel batches**: Rayon fan-out with input order preserved

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format, detect_format_from_path, is_fact_sheet, InputFormat};
pub use error::{Error, Result};
pub use model::{
    Block, Document, FactSheet, FactTable, InlineContent, InlineRun, InlineStyle, Section, Table,
};
pub use parser::{ContentParser, ParseOptions};
pub use render::{
    DocumentStats, JsonFormat, RenderNode, RenderOptions, RenderTree, TableLayout, Viewport,
};

use std::io::Read;
use std::path::Path;

/// Parse content, detecting whether it is Markdown or a JSON fact sheet.
///
/// # Example
///
/// ```
/// use lessonmark::parse_str;
///
/// let doc = parse_str("## Sleep\nREM is *stage 5*").unwrap();
/// assert_eq!(doc.sections[0].heading.as_deref(), Some("Sleep"));
/// ```
pub fn parse_str(input: &str) -> Result<Document> {
    ContentParser::new().parse(input)
}

/// Parse content with custom options.
///
/// # Example
///
/// ```
/// use lessonmark::{parse_str_with_options, InputFormat, ParseOptions};
///
/// let options = ParseOptions::new().with_format(InputFormat::Markdown);
/// let doc = parse_str_with_options("{\"concept\": \"kept as text\"}", options).unwrap();
/// assert!(doc.sections[0].heading.is_none());
/// ```
pub fn parse_str_with_options(input: &str, options: ParseOptions) -> Result<Document> {
    ContentParser::with_options(options).parse(input)
}

/// Parse hybrid Markdown. Never fails.
pub fn parse_markdown(input: &str) -> Document {
    ContentParser::new().parse_markdown(input)
}

/// Parse JSON fact-sheet text.
///
/// # Example
///
/// ```
/// use lessonmark::parse_fact_sheet;
///
/// let doc = parse_fact_sheet(r#"{"exam_pointers": ["Know REM latency"]}"#).unwrap();
/// assert_eq!(doc.sections[0].heading.as_deref(), Some("Exam Pointers"));
///
/// assert!(parse_fact_sheet("null").is_err());
/// ```
pub fn parse_fact_sheet(input: &str) -> Result<Document> {
    ContentParser::new().parse_fact_sheet(input)
}

/// Parse a file, detecting its format from the content.
///
/// # Example
///
/// ```no_run
/// use lessonmark::parse_file;
///
/// let doc = parse_file("lesson.md").unwrap();
/// println!("Sections: {}", doc.section_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    ContentParser::new().parse_file(path)
}

/// Parse a file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    ContentParser::with_options(options).parse_file(path)
}

/// Parse content from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    ContentParser::new().parse_reader(reader)
}

/// Parse many inputs in parallel. Results keep input order.
pub fn parse_batch<S: AsRef<str> + Sync>(inputs: &[S]) -> Vec<Result<Document>> {
    ContentParser::new().parse_batch(inputs)
}

/// Lay out a document for a viewport.
pub fn render(doc: &Document, options: &RenderOptions) -> RenderTree {
    render::render(doc, options)
}

/// Parse content and lay it out for a viewport in one step.
pub fn render_str(input: &str, viewport: Viewport) -> Result<RenderTree> {
    let doc = parse_str(input)?;
    Ok(render(&doc, &RenderOptions::new().with_viewport(viewport)))
}

/// Builder for parsing and laying out content.
///
/// # Example
///
/// ```
/// use lessonmark::Lessonmark;
///
/// let json = Lessonmark::new()
///     .compact()
///     .parse("| Drug | Dose |\n|---|---|\n| A | 5 mg |")?
///     .to_render_json(lessonmark::JsonFormat::Compact)?;
/// assert!(json.contains("factCardTable"));
/// # Ok::<(), lessonmark::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Lessonmark {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Lessonmark {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out for the compact viewport.
    pub fn compact(mut self) -> Self {
        self.render_options = self.render_options.compact();
        self
    }

    /// Lay out for the wide viewport.
    pub fn wide(mut self) -> Self {
        self.render_options = self.render_options.wide();
        self
    }

    /// Set the viewport.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.render_options = self.render_options.with_viewport(viewport);
        self
    }

    /// Force a table layout regardless of viewport.
    pub fn with_table_layout(mut self, layout: TableLayout) -> Self {
        self.render_options = self.render_options.with_table_layout(layout);
        self
    }

    /// Force an input format instead of detecting it.
    pub fn with_format(mut self, format: InputFormat) -> Self {
        self.parse_options = self.parse_options.with_format(format);
        self
    }

    /// Disable parallel batch processing.
    pub fn sequential(mut self) -> Self {
        self.parse_options = self.parse_options.sequential();
        self
    }

    /// Replace the parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Replace the render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Parse content and return a result wrapper.
    pub fn parse(self, input: &str) -> Result<LessonmarkResult> {
        let document = ContentParser::with_options(self.parse_options).parse(input)?;
        Ok(LessonmarkResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a file and return a result wrapper.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<LessonmarkResult> {
        let document = ContentParser::with_options(self.parse_options).parse_file(path)?;
        Ok(LessonmarkResult {
            document,
            render_options: self.render_options,
        })
    }
}

/// Result of parsing content through the builder.
#[derive(Debug, Clone)]
pub struct LessonmarkResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl LessonmarkResult {
    /// Lay out the document.
    pub fn render(&self) -> RenderTree {
        render::render(&self.document, &self.render_options)
    }

    /// Lay out the document and convert the tree to JSON.
    pub fn to_render_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.render(), format)
    }

    /// Convert the document model to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Convert to Markdown.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.document)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Collect document statistics.
    pub fn stats(&self) -> DocumentStats {
        DocumentStats::collect(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get the render options.
    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }
}
