//! Inline markup lexer.
//!
//! Turns one line of text into flat emphasis runs. At every position the
//! longest matching opener is taken and only that form's closer is searched
//! for. Nothing nests: the first closer found ends the run and its contents
//! are not lexed again. An opener without a closer leaves one literal
//! character behind and the scan moves on.

use crate::model::{InlineContent, InlineRun, InlineStyle};

/// Delimiter forms in match order: (opener, closer, style).
const FORMS: [(&str, &str, InlineStyle); 6] = [
    ("***", "***", InlineStyle::BoldItalic),
    ("**", "**", InlineStyle::Bold),
    ("*_", "_*", InlineStyle::BoldItalic),
    ("*", "*", InlineStyle::Italic),
    ("_", "_", InlineStyle::Italic),
    ("`", "`", InlineStyle::Code),
];

/// Lex a line into styled runs.
///
/// Adjacent literal text is merged into a single plain run. Empty delimiter
/// pairs (`****`) produce zero-length runs; callers that paint runs should
/// skip them.
pub fn lex(text: &str) -> Vec<InlineRun> {
    let mut runs = Vec::new();
    let mut plain = String::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];

        if let Some((style, inner, consumed)) = match_delimited(rest) {
            if !plain.is_empty() {
                runs.push(InlineRun::plain(std::mem::take(&mut plain)));
            }
            runs.push(InlineRun::new(style, inner));
            pos += consumed;
            continue;
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        plain.push(ch);
        pos += ch.len_utf8();
    }

    if !plain.is_empty() {
        runs.push(InlineRun::plain(plain));
    }
    runs
}

/// Lex multi-line text, keeping an explicit break between source lines.
pub fn lex_multiline(text: &str) -> Vec<InlineContent> {
    let mut content = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            content.push(InlineContent::LineBreak);
        }
        content.extend(lex(line).into_iter().map(InlineContent::Run));
    }
    content
}

/// Concatenate run texts, dropping all emphasis.
pub fn plain_text(runs: &[InlineRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

/// Strip emphasis delimiters from a line.
pub fn strip_markup(text: &str) -> String {
    plain_text(&lex(text))
}

/// Match the longest opener at the start of `rest` against its own closer.
///
/// Returns the style, the enclosed text and the number of bytes consumed
/// including both delimiters. Shorter forms are not retried when the closer
/// is missing.
fn match_delimited(rest: &str) -> Option<(InlineStyle, &str, usize)> {
    let &(open, close, style) = FORMS.iter().find(|(open, _, _)| rest.starts_with(*open))?;
    let body = &rest[open.len()..];
    let end = body.find(close)?;
    Some((style, &body[..end], open.len() + end + close.len()))
}
