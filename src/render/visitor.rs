//! Visitor contract for hosts that paint the render tree.
//!
//! The host implements [`RenderVisitor`] and calls [`RenderTree::walk`]; hooks
//! fire in document order. Every hook has a no-op default, so a host only
//! overrides the node kinds it paints.
//!
//! # Example
//!
//! ```
//! use lessonmark::render::visitor::{RenderVisitor, VisitorAction};
//! use lessonmark::render::HeadingTone;
//!
//! #[derive(Default)]
//! struct Outline(Vec<String>);
//!
//! impl RenderVisitor for Outline {
//!     fn visit_section(
//!         &mut self,
//!         heading: Option<&str>,
//!         _level: Option<u8>,
//!         _tone: Option<HeadingTone>,
//!     ) -> VisitorAction {
//!         if let Some(h) = heading {
//!             self.0.push(h.to_string());
//!         }
//!         VisitorAction::SkipChildren
//!     }
//! }
//!
//! let tree = lessonmark::Lessonmark::new()
//!     .parse("# One\ntext\n# Two")?
//!     .render();
//! let mut outline = Outline::default();
//! tree.walk(&mut outline);
//! assert_eq!(outline.0, vec!["One", "Two"]);
//! # Ok::<(), lessonmark::Error>(())
//! ```

use super::tree::{Cell, FactCard, HeadingTone, RenderNode, RenderTree};
use crate::model::InlineContent;

/// Action returned by visitor hooks to steer the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitorAction {
    /// Keep walking, into children where there are any.
    #[default]
    Continue,

    /// Do not descend into this section's children.
    SkipChildren,

    /// End the walk immediately.
    Stop,
}

impl VisitorAction {
    /// Check if this action ends the walk.
    pub fn is_stop(self) -> bool {
        self == VisitorAction::Stop
    }
}

/// Hooks called while walking a render tree.
pub trait RenderVisitor {
    /// Called when entering a section.
    fn visit_section(
        &mut self,
        heading: Option<&str>,
        level: Option<u8>,
        tone: Option<HeadingTone>,
    ) -> VisitorAction {
        let _ = (heading, level, tone);
        VisitorAction::Continue
    }

    /// Called after a section's children, unless the walk stopped.
    fn leave_section(&mut self, heading: Option<&str>) {
        let _ = heading;
    }

    /// Called for a paragraph.
    fn visit_paragraph(&mut self, runs: &[InlineContent]) -> VisitorAction {
        let _ = runs;
        VisitorAction::Continue
    }

    /// Called for a table laid out as fact cards.
    fn visit_fact_cards(&mut self, caption: Option<&str>, cards: &[FactCard]) -> VisitorAction {
        let _ = (caption, cards);
        VisitorAction::Continue
    }

    /// Called for a table laid out as a grid.
    fn visit_grid(
        &mut self,
        caption: Option<&str>,
        headers: &[Cell],
        rows: &[Vec<Cell>],
    ) -> VisitorAction {
        let _ = (caption, headers, rows);
        VisitorAction::Continue
    }
}

impl RenderTree {
    /// Walk the tree in document order.
    ///
    /// Returns `false` when a hook stopped the walk early.
    pub fn walk<V: RenderVisitor + ?Sized>(&self, visitor: &mut V) -> bool {
        walk_nodes(&self.nodes, visitor)
    }
}

fn walk_nodes<V: RenderVisitor + ?Sized>(nodes: &[RenderNode], visitor: &mut V) -> bool {
    for node in nodes {
        let action = match node {
            RenderNode::Section {
                heading,
                level,
                tone,
                children,
            } => {
                let action = visitor.visit_section(heading.as_deref(), *level, *tone);
                if action.is_stop() {
                    return false;
                }
                if action == VisitorAction::Continue && !walk_nodes(children, visitor) {
                    return false;
                }
                visitor.leave_section(heading.as_deref());
                VisitorAction::Continue
            }
            RenderNode::Paragraph { runs } => visitor.visit_paragraph(runs),
            RenderNode::FactCardTable { caption, cards } => {
                visitor.visit_fact_cards(caption.as_deref(), cards)
            }
            RenderNode::GridTable {
                caption,
                headers,
                rows,
            } => visitor.visit_grid(caption.as_deref(), headers, rows),
        };
        if action.is_stop() {
            return false;
        }
    }
    true
}

/// Visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl RenderVisitor for DefaultVisitor {}

/// Composite visitor that chains multiple visitors.
///
/// Every visitor sees every hook in order. The strongest action wins:
/// `Stop` over `SkipChildren` over `Continue`.
#[derive(Default)]
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn RenderVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: RenderVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    /// Get the number of chained visitors.
    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    /// Check if no visitor is chained.
    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }

    fn fold<F>(&mut self, mut hook: F) -> VisitorAction
    where
        F: FnMut(&mut Box<dyn RenderVisitor>) -> VisitorAction,
    {
        let mut result = VisitorAction::Continue;
        for visitor in &mut self.visitors {
            match hook(visitor) {
                VisitorAction::Stop => return VisitorAction::Stop,
                VisitorAction::SkipChildren => result = VisitorAction::SkipChildren,
                VisitorAction::Continue => {}
            }
        }
        result
    }
}

impl RenderVisitor for CompositeVisitor {
    fn visit_section(
        &mut self,
        heading: Option<&str>,
        level: Option<u8>,
        tone: Option<HeadingTone>,
    ) -> VisitorAction {
        self.fold(|v| v.visit_section(heading, level, tone))
    }

    fn leave_section(&mut self, heading: Option<&str>) {
        for visitor in &mut self.visitors {
            visitor.leave_section(heading);
        }
    }

    fn visit_paragraph(&mut self, runs: &[InlineContent]) -> VisitorAction {
        self.fold(|v| v.visit_paragraph(runs))
    }

    fn visit_fact_cards(&mut self, caption: Option<&str>, cards: &[FactCard]) -> VisitorAction {
        self.fold(|v| v.visit_fact_cards(caption, cards))
    }

    fn visit_grid(
        &mut self,
        caption: Option<&str>,
        headers: &[Cell],
        rows: &[Vec<Cell>],
    ) -> VisitorAction {
        self.fold(|v| v.visit_grid(caption, headers, rows))
    }
}
