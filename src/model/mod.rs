//! Document model types for structured study content.
//!
//! This module defines the intermediate representation (IR) that bridges
//! parsing and adaptive layout. The model is viewport-agnostic and holds
//! the same shape whether it came from hybrid Markdown or a JSON fact sheet.

mod document;
mod fact_sheet;
mod inline;
mod section;
mod table;

pub use document::Document;
pub use fact_sheet::{FactSheet, FactTable};
pub use inline::{InlineContent, InlineRun, InlineStyle};
pub use section::{Block, Section, MAX_HEADING_LEVEL};
pub use table::Table;
