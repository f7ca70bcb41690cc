//! Text token passes over a single stream payload.
//!
//! Three independent passes run in a fixed order: literal strings, hex
//! strings, then literal strings shown with `Tj`. The passes overlap, so a
//! string shown with `Tj` appears once from the literal pass and again from
//! the show pass. That duplication is part of the output contract.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::bytes::Regex;
use serde::{Deserialize, Serialize};

/// Escape substitutions, applied one after another over the whole string.
/// The order matters: `\\` is handled last.
const ESCAPES: [(&str, &str); 6] = [
    ("\\n", "\n"),
    ("\\r", "\r"),
    ("\\t", "\t"),
    ("\\(", "("),
    ("\\)", ")"),
    ("\\\\", "\\"),
];

fn literal_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s-u)\(((?:\\.|[^\\)])*)\)").expect("literal pattern is valid")
    })
}

fn hex_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?-u)<([0-9A-Fa-f\s]+)>").expect("hex pattern is valid"))
}

fn show_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s-u)\(((?:\\.|[^\\)])*)\)\s*Tj").expect("show pattern is valid")
    })
}

/// Number of non-empty fragments produced by each pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCounts {
    /// Fragments from the literal-string pass
    pub literal: u32,
    /// Fragments from the hex-string pass
    pub hex: u32,
    /// Fragments from the `Tj` pass
    pub shown: u32,
}

impl TokenCounts {
    /// Total fragments across all passes.
    pub fn total(&self) -> u32 {
        self.literal + self.hex + self.shown
    }

    /// Accumulate counts from another stream.
    pub fn merge(&mut self, other: TokenCounts) {
        self.literal += other.literal;
        self.hex += other.hex;
        self.shown += other.shown;
    }
}

/// Decode the body of a literal string: escapes first, then drop every
/// character outside printable ASCII except newline, carriage return and tab.
///
/// # Example
/// ```
/// use pdfstrings::parser::decode_literal;
///
/// assert_eq!(decode_literal(br"Hello\nWorld"), "Hello\nWorld");
/// assert_eq!(decode_literal(br"a\\b"), "a\\b");
/// ```
pub fn decode_literal(raw: &[u8]) -> String {
    let mut text: Cow<'_, str> = String::from_utf8_lossy(raw);
    for (from, to) in ESCAPES {
        if text.contains(from) {
            text = Cow::Owned(text.replace(from, to));
        }
    }
    text.chars().filter(|&c| is_kept_char(c)).collect()
}

/// Decode the body of a hex string.
///
/// Anything other than a hex digit is ignored, which covers every
/// whitespace byte the hex pass admits (vertical tab included). An odd
/// number of digits yields an empty string; byte values outside printable
/// ASCII are dropped.
pub fn decode_hex(raw: &[u8]) -> String {
    let digits: Vec<u8> = raw
        .iter()
        .copied()
        .filter(u8::is_ascii_hexdigit)
        .collect();

    if digits.len() % 2 != 0 {
        return String::new();
    }

    digits
        .chunks_exact(2)
        .filter_map(|pair| Some((hex_value(pair[0])? << 4) | hex_value(pair[1])?))
        .filter(|b| (32..=126).contains(b))
        .map(char::from)
        .collect()
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

fn is_kept_char(c: char) -> bool {
    matches!(c, ' '..='~' | '\n' | '\r' | '\t')
}

fn collect_fragments(re: &Regex, payload: &[u8], decode: fn(&[u8]) -> String) -> Vec<String> {
    re.captures_iter(payload)
        .filter_map(|caps| caps.get(1))
        .map(|body| decode(body.as_bytes()))
        .filter(|text| !text.is_empty())
        .collect()
}

/// Literal-string pass: every `( ... )` with its escapes decoded.
pub fn literal_strings(payload: &[u8]) -> Vec<String> {
    collect_fragments(literal_regex(), payload, decode_literal)
}

/// Hex-string pass: every `< ... >` made only of hex digits and whitespace.
pub fn hex_strings(payload: &[u8]) -> Vec<String> {
    collect_fragments(hex_regex(), payload, decode_hex)
}

/// Text-show pass: literal strings followed by the `Tj` operator.
pub fn shown_strings(payload: &[u8]) -> Vec<String> {
    collect_fragments(show_regex(), payload, decode_literal)
}

/// Run all three passes over one payload.
///
/// Each fragment is followed by a single space. Returns the stream text
/// (unnormalized) with the per-pass fragment counts.
pub fn extract_stream_text(payload: &[u8]) -> (String, TokenCounts) {
    let literal = literal_strings(payload);
    let hex = hex_strings(payload);
    let shown = shown_strings(payload);

    let counts = TokenCounts {
        literal: literal.len() as u32,
        hex: hex.len() as u32,
        shown: shown.len() as u32,
    };

    let mut text = String::new();
    for fragment in literal.iter().chain(&hex).chain(&shown) {
        text.push_str(fragment);
        text.push(' ');
    }

    (text, counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_and_show_passes_both_decode() {
        let payload = br"(Hello\nWorld)Tj";
        assert_eq!(literal_strings(payload), vec!["Hello\nWorld"]);
        assert_eq!(shown_strings(payload), vec!["Hello\nWorld"]);
    }

    #[test]
    fn test_stream_text_keeps_duplicates() {
        let (text, counts) = extract_stream_text(b"BT (Title) Tj ET");
        assert_eq!(text, "Title Title ");
        assert_eq!(
            counts,
            TokenCounts {
                literal: 1,
                hex: 0,
                shown: 1
            }
        );
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn test_pass_order_within_stream() {
        let (text, _) = extract_stream_text(b"(a) Tj <42> (c) Td");
        assert_eq!(text, "a c B a ");
    }

    #[test]
    fn test_escape_order() {
        assert_eq!(decode_literal(br"\n"), "\n");
        assert_eq!(decode_literal(br"\\"), "\\");
        assert_eq!(decode_literal(br"\r\t"), "\r\t");
        assert_eq!(decode_literal(br"\(x\)"), "(x)");
    }

    #[test]
    fn test_escape_substitutions_are_sequential() {
        // `\\n`: the `\n` rule fires before the `\\` rule sees the pair.
        assert_eq!(decode_literal(br"\\n"), "\\\n");
        // Four backslashes collapse pairwise, once.
        assert_eq!(decode_literal(br"\\\\"), "\\\\");
    }

    #[test]
    fn test_literal_drops_non_printable() {
        assert_eq!(decode_literal(b"A\x01B\x7fC\xe9D"), "ABCD");
        assert_eq!(decode_literal(b"tab\there"), "tab\there");
    }

    #[test]
    fn test_unknown_escape_kept_verbatim() {
        assert_eq!(decode_literal(br"\101"), "\\101");
    }

    #[test]
    fn test_escaped_paren_does_not_close_literal() {
        assert_eq!(literal_strings(br"(a\)b) Tj"), vec!["a)b"]);
    }

    #[test]
    fn test_literal_stops_at_first_close() {
        assert_eq!(literal_strings(b"(one) (two)"), vec!["one", "two"]);
    }

    #[test]
    fn test_show_pass_needs_tj() {
        let payload = b"(skip) Td (keep)\n  Tj (also) TJ";
        assert_eq!(shown_strings(payload), vec!["keep"]);
        assert_eq!(literal_strings(payload), vec!["skip", "keep", "also"]);
    }

    #[test]
    fn test_empty_literals_skipped() {
        assert!(literal_strings(b"() Tj").is_empty());
        assert!(literal_strings(b"(\x01\x02)").is_empty());
    }

    #[test]
    fn test_hex_decoding() {
        assert_eq!(hex_strings(b"<48656C6C6F>"), vec!["Hello"]);
        assert_eq!(hex_strings(b"<48 65 6c\n6c 6f>"), vec!["Hello"]);
    }

    #[test]
    fn test_hex_vertical_tab_stripped() {
        assert_eq!(hex_strings(b"<48\x0B65>"), vec!["He"]);
        assert_eq!(hex_strings(b"<48\x0B65\x0C6C>"), vec!["Hel"]);
        assert_eq!(decode_hex(b"4\x0B8"), "H");
    }

    #[test]
    fn test_hex_outside_brackets_ignored() {
        assert_eq!(hex_strings(b"<48656C6C>6F"), vec!["Hell"]);
    }

    #[test]
    fn test_odd_hex_contributes_nothing() {
        assert!(hex_strings(b"<6>").is_empty());
        assert_eq!(decode_hex(b"486"), "");
    }

    #[test]
    fn test_hex_drops_non_printable_bytes() {
        assert_eq!(decode_hex(b"00410A42FF"), "AB");
    }

    #[test]
    fn test_dictionary_brackets_not_hex() {
        assert!(hex_strings(b"<< /Length 12 /Filter /FlateDecode >>").is_empty());
    }

    #[test]
    fn test_token_counts_merge() {
        let mut total = TokenCounts::default();
        total.merge(TokenCounts {
            literal: 2,
            hex: 1,
            shown: 2,
        });
        total.merge(TokenCounts {
            literal: 1,
            hex: 0,
            shown: 0,
        });
        assert_eq!(total.literal, 3);
        assert_eq!(total.total(), 6);
    }
}
