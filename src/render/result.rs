//! Extraction result with statistics.

use serde::{Deserialize, Serialize};

use crate::parser::TokenCounts;

/// Extracted text together with the statistics collected while scanning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Extraction {
    /// Normalized document text
    pub text: String,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl Extraction {
    /// Create a new extraction result.
    pub fn new(text: String, stats: ExtractionStats) -> Self {
        Self { text, stats }
    }

    /// Get the text length in bytes.
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    /// Whether no text was recovered.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Statistics collected during extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Header version (e.g. "1.4"), if present
    pub pdf_version: Option<String>,

    /// Size of the input buffer
    pub input_bytes: u64,

    /// Number of located streams
    pub stream_count: u32,

    /// Streams that inflated successfully
    pub inflated_stream_count: u32,

    /// Streams scanned as raw bytes
    pub raw_stream_count: u32,

    /// Total bytes produced by inflation
    pub inflated_bytes: u64,

    /// Fragments produced by each pass
    pub tokens: TokenCounts,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one scanned stream.
    pub fn add_stream(&mut self, inflated: bool, tokens: TokenCounts) {
        self.stream_count += 1;
        if inflated {
            self.inflated_stream_count += 1;
        } else {
            self.raw_stream_count += 1;
        }
        self.tokens.merge(tokens);
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}
