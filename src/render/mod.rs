//! Rendering module: adaptive layout and output formats.

mod json;
mod layout;
mod markdown;
mod options;
mod result;
mod text;
mod tree;
pub mod visitor;

pub use json::{to_json, JsonFormat};
pub use layout::{render, LayoutRenderer};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::{RenderOptions, TableLayout, Viewport, VIEWPORT_ENV};
pub use result::DocumentStats;
pub use text::to_text;
pub use tree::{Cell, FactCard, FactField, HeadingTone, RenderNode, RenderTree};
pub use visitor::{CompositeVisitor, DefaultVisitor, RenderVisitor, VisitorAction};
