//! Locating `stream ... endstream` regions in a raw PDF buffer.
//!
//! No object model is built: the buffer is scanned for the two keywords and
//! every non-overlapping pair becomes one payload. Binary data that happens
//! to contain the keywords produces false positives, which are kept.

use std::ops::Range;
use std::sync::OnceLock;

use regex::bytes::Regex;

/// Byte range of one stream payload inside the document buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamSpan {
    /// Zero-based position of the stream in document order
    pub index: usize,
    /// Payload byte range, markers and adjacent line breaks excluded
    pub range: Range<usize>,
}

impl StreamSpan {
    /// Borrow the payload bytes from the buffer this span was located in.
    ///
    /// # Panics
    ///
    /// Panics if `data` is shorter than `range.end`, which can only happen
    /// when the span came from a different buffer.
    pub fn payload<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.range.clone()]
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

fn stream_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // One optional line break after `stream` and before `endstream`;
    // the lazy body stops at the first close marker.
    RE.get_or_init(|| {
        Regex::new(r"(?s-u)stream(?:\r\n|\n)?(.*?)(?:\r\n|\n)?endstream")
            .expect("stream pattern is valid")
    })
}

/// Lazily locate every stream payload in ascending offset order.
///
/// A `stream` keyword without a later `endstream` yields nothing.
///
/// # Example
/// ```
/// use pdfstrings::parser::locate_streams;
///
/// let data = b"%PDF-1.4\n1 0 obj\nstream\nBT (Hi) Tj ET\nendstream\nendobj";
/// let spans: Vec<_> = locate_streams(data).collect();
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].payload(data), b"BT (Hi) Tj ET");
/// ```
pub fn locate_streams(data: &[u8]) -> impl Iterator<Item = StreamSpan> + '_ {
    stream_regex()
        .captures_iter(data)
        .filter_map(|caps| caps.get(1))
        .enumerate()
        .map(|(index, body)| StreamSpan {
            index,
            range: body.range(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payloads(data: &[u8]) -> Vec<&[u8]> {
        locate_streams(data).map(|s| s.payload(data)).collect()
    }

    #[test]
    fn test_single_stream_trims_line_breaks() {
        let data = b"obj\nstream\nabc\nendstream\nendobj";
        assert_eq!(payloads(data), vec![&b"abc"[..]]);
    }

    #[test]
    fn test_crlf_line_breaks() {
        let data = b"stream\r\nabc\r\nendstream";
        assert_eq!(payloads(data), vec![&b"abc"[..]]);
    }

    #[test]
    fn test_markers_without_line_breaks() {
        let data = b"streamabcendstream";
        assert_eq!(payloads(data), vec![&b"abc"[..]]);
    }

    #[test]
    fn test_payload_spanning_lines() {
        let data = b"stream\nBT\n(a) Tj\nET\nendstream";
        assert_eq!(payloads(data), vec![&b"BT\n(a) Tj\nET"[..]]);
    }

    #[test]
    fn test_non_greedy_and_ordered() {
        let data = b"stream\none\nendstream\nstream\ntwo\nendstream";
        let spans: Vec<_> = locate_streams(data).collect();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].index, 0);
        assert_eq!(spans[1].index, 1);
        assert!(spans[0].range.end < spans[1].range.start);
        assert_eq!(spans[0].payload(data), b"one");
        assert_eq!(spans[1].payload(data), b"two");
    }

    #[test]
    fn test_unterminated_stream_dropped() {
        let data = b"stream\nok\nendstream\nstream\nnever closed";
        assert_eq!(payloads(data), vec![&b"ok"[..]]);
    }

    #[test]
    fn test_no_streams() {
        assert_eq!(locate_streams(b"%PDF-1.4\n%%EOF").count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_payload_from_shorter_buffer_panics() {
        let data = b"stream\nlong enough payload\nendstream";
        let span = locate_streams(data).next().unwrap();
        span.payload(b"short");
    }

    #[test]
    fn test_binary_payload() {
        let data = b"stream\n\x78\x9c\x00\xff\nendstream";
        let spans: Vec<_> = locate_streams(data).collect();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].len(), 4);
        assert!(!spans[0].is_empty());
    }

    #[test]
    fn test_empty_payload() {
        let spans: Vec<_> = locate_streams(b"stream\nendstream").collect();
        assert_eq!(spans.len(), 1);
        assert!(spans[0].is_empty());
    }
}
