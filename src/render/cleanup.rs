//! Final whitespace normalization.

use std::sync::OnceLock;

use regex::{Captures, Regex};

fn whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Collapse whitespace across the whole extracted text.
///
/// A run of whitespace becomes one space, unless it holds two or more
/// newlines, in which case it becomes exactly one blank line. The result is
/// trimmed. Applying this twice gives the same string as applying it once.
///
/// # Example
/// ```
/// use pdfstrings::render::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  a \t b\n c  "), "a b c");
/// assert_eq!(normalize_whitespace("a\n \n\n b"), "a\n\nb");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    whitespace_regex()
        .replace_all(text, |caps: &Captures<'_>| {
            if caps[0].matches('\n').count() >= 2 {
                "\n\n"
            } else {
                " "
            }
        })
        .trim()
        .to_string()
}
