//! Parsing options and configuration.

use crate::detect::InputFormat;

/// Options for parsing study content.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Forced input format (`None` = detect from the content)
    pub format: Option<InputFormat>,

    /// Normalize Unicode to NFC form before parsing
    pub normalize_unicode: bool,

    /// Rewrite plain bullet markers (`*`, `+`, `•`, ...) to `- `
    pub normalize_bullets: bool,

    /// Treat lines that are entirely `***Title***` as level-3 headings
    pub bold_headings: bool,

    /// Drop a heading whose very next line is a table row
    pub suppress_table_headings: bool,

    /// Whether batch parsing runs on the rayon pool
    pub parallel: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the input format instead of detecting it.
    pub fn with_format(mut self, format: InputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Detect the input format from the content (default).
    pub fn auto_format(mut self) -> Self {
        self.format = None;
        self
    }

    /// Enable or disable Unicode normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Enable or disable bullet normalization.
    pub fn with_bullet_normalization(mut self, normalize: bool) -> Self {
        self.normalize_bullets = normalize;
        self
    }

    /// Enable or disable `***Title***` headings.
    pub fn with_bold_headings(mut self, enabled: bool) -> Self {
        self.bold_headings = enabled;
        self
    }

    /// Enable or disable suppression of headings that only introduce a table.
    pub fn with_table_heading_suppression(mut self, enabled: bool) -> Self {
        self.suppress_table_headings = enabled;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            format: None,
            normalize_unicode: true,
            normalize_bullets: true,
            bold_headings: true,
            suppress_table_headings: true,
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .with_format(InputFormat::FactSheet)
            .with_bold_headings(false)
            .with_table_heading_suppression(false)
            .sequential();

        assert_eq!(options.format, Some(InputFormat::FactSheet));
        assert!(!options.bold_headings);
        assert!(!options.suppress_table_headings);
        assert!(!options.parallel);

        let options = options.auto_format();
        assert_eq!(options.format, None);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.format, None);
        assert!(options.normalize_unicode);
        assert!(options.normalize_bullets);
        assert!(options.bold_headings);
        assert!(options.suppress_table_headings);
        assert!(options.parallel);
    }
}
