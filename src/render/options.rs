//! Rendering options and configuration.

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable read by [`Viewport::from_env`].
pub const VIEWPORT_ENV: &str = "LESSONMARK_VIEWPORT";

/// Viewport class supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Viewport {
    /// Narrow screens: tables stack into fact cards
    Compact,
    /// Wide screens: tables render as multi-column grids
    #[default]
    Wide,
}

impl Viewport {
    /// Parse a viewport name (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "narrow" | "phone" => Some(Self::Compact),
            "wide" | "tablet" | "desktop" => Some(Self::Wide),
            _ => None,
        }
    }

    /// Reads the viewport from `LESSONMARK_VIEWPORT`, falling back to wide.
    pub fn from_env() -> Self {
        env::var(VIEWPORT_ENV)
            .ok()
            .and_then(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    /// Check if this is the compact class.
    pub fn is_compact(self) -> bool {
        self == Viewport::Compact
    }
}

impl std::fmt::Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Viewport::Compact => write!(f, "compact"),
            Viewport::Wide => write!(f, "wide"),
        }
    }
}

/// How tables are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableLayout {
    /// Follow the viewport: cards when compact, grid when wide
    #[default]
    Auto,
    /// Always stacked fact cards
    Cards,
    /// Always a grid
    Grid,
}

/// Options for laying out a document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Viewport class of the host
    pub viewport: Viewport,

    /// Table layout override
    pub table_layout: TableLayout,

    /// Keep zero-length inline runs (`****`) in paragraphs and cells
    pub keep_empty_runs: bool,

    /// Label prefix for fact-card fields beyond the header count
    pub field_label_prefix: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewport.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Shorthand for the compact viewport.
    pub fn compact(self) -> Self {
        self.with_viewport(Viewport::Compact)
    }

    /// Shorthand for the wide viewport.
    pub fn wide(self) -> Self {
        self.with_viewport(Viewport::Wide)
    }

    /// Force a table layout regardless of viewport.
    pub fn with_table_layout(mut self, layout: TableLayout) -> Self {
        self.table_layout = layout;
        self
    }

    /// Keep or drop zero-length inline runs.
    pub fn with_empty_runs(mut self, keep: bool) -> Self {
        self.keep_empty_runs = keep;
        self
    }

    /// Set the fact-card field label prefix.
    pub fn with_field_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.field_label_prefix = prefix.into();
        self
    }

    /// Whether tables should render as fact cards.
    pub fn uses_cards(&self) -> bool {
        match self.table_layout {
            TableLayout::Auto => self.viewport.is_compact(),
            TableLayout::Cards => true,
            TableLayout::Grid => false,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::Wide,
            table_layout: TableLayout::Auto,
            keep_empty_runs: false,
            field_label_prefix: "Field".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .compact()
            .with_empty_runs(true)
            .with_field_label_prefix("Col");

        assert_eq!(options.viewport, Viewport::Compact);
        assert!(options.keep_empty_runs);
        assert_eq!(options.field_label_prefix, "Col");
    }

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.viewport, Viewport::Wide);
        assert_eq!(options.table_layout, TableLayout::Auto);
        assert!(!options.keep_empty_runs);
        assert_eq!(options.field_label_prefix, "Field");
    }

    #[test]
    fn test_uses_cards() {
        assert!(!RenderOptions::new().uses_cards());
        assert!(RenderOptions::new().compact().uses_cards());
        assert!(!RenderOptions::new()
            .compact()
            .with_table_layout(TableLayout::Grid)
            .uses_cards());
        assert!(RenderOptions::new()
            .with_table_layout(TableLayout::Cards)
            .uses_cards());
    }

    #[test]
    fn test_viewport_parse() {
        assert_eq!(Viewport::parse("COMPACT"), Some(Viewport::Compact));
        assert_eq!(Viewport::parse(" wide "), Some(Viewport::Wide));
        assert_eq!(Viewport::parse("tablet"), Some(Viewport::Wide));
        assert_eq!(Viewport::parse("huge"), None);
        assert_eq!(Viewport::Compact.to_string(), "compact");
    }

    #[test]
    fn test_viewport_serde() {
        assert_eq!(serde_json::to_string(&Viewport::Compact).unwrap(), "\"compact\"");
        let v: Viewport = serde_json::from_str("\"wide\"").unwrap();
        assert_eq!(v, Viewport::Wide);
    }
}
