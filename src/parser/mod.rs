//! Content parsing module.
//!
//! Stages run in order: fence stripping, segmentation, section assembly.
//! JSON fact sheets skip segmentation and are adapted straight into sections.

mod content_parser;
mod fact_sheet;
pub mod fence;
pub mod inline;
mod options;
pub mod segment;
mod section;
mod table;

pub use content_parser::ContentParser;
pub use fact_sheet::{
    adapt_fact_sheet, CONCEPT_HEADING, EXAM_POINTERS_HEADING, HIGH_YIELD_HEADING,
};
pub use fence::strip;
pub use inline::{lex, lex_multiline, strip_markup};
pub use options::ParseOptions;
pub use section::assemble;
pub use segment::{classify, segment, LineKind, ListMarker, RawBlock, RawBlockKind};
pub use table::{is_separator_row, is_table_row, parse_table, split_cells};
