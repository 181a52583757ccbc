//! Fence and noise stripping.
//!
//! Generated content is sometimes wrapped in code fences, sometimes only
//! opened or only closed, and often sprinkled with `---` separators. Neither
//! carries structure we want, so those lines are dropped before segmentation
//! without trying to pair fences up.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// A line holding only a fence delimiter: 3+ backticks, optional language tag.
static FENCE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*`{3,}[^\s`]*\s*$").expect("fence pattern is valid"));

/// A line holding only a horizontal rule made of hyphens.
static RULE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-{3,}\s*$").expect("rule pattern is valid"));

/// Remove fence delimiter lines and hyphen rules.
///
/// Other lines keep their content and order; lines are re-joined with `\n`.
/// Running it twice gives the same output as running it once.
pub fn strip(raw: &str) -> String {
    raw.lines()
        .filter(|line| !is_noise_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Normalize Unicode to NFC form.
pub fn normalize(raw: &str) -> String {
    raw.nfc().collect()
}

/// Check if a line is a fence delimiter or a hyphen rule.
pub fn is_noise_line(line: &str) -> bool {
    is_fence_line(line) || RULE_LINE.is_match(line)
}

/// Check if a line is a fence delimiter (balanced or not).
pub fn is_fence_line(line: &str) -> bool {
    FENCE_LINE.is_match(line)
}
