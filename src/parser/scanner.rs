//! Document-level text scanner.

use crate::detect::{check_signature, detect_version};
use crate::error::{Error, ResourceKind, Result};
use crate::render::{normalize_whitespace, Extraction, ExtractionStats};

use super::inflate::InflateBudget;
use super::options::ExtractOptions;
use super::streams::locate_streams;
use super::tokens::extract_stream_text;

/// Scans a PDF buffer for text without building an object model.
///
/// The buffer is borrowed for the scanner's lifetime; each call to
/// [`TextScanner::scan`] runs the whole pipeline and keeps no state.
pub struct TextScanner<'a> {
    data: &'a [u8],
    options: ExtractOptions,
}

impl<'a> TextScanner<'a> {
    /// Create a scanner over a PDF buffer.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        Self::with_options(data, ExtractOptions::default())
    }

    /// Create a scanner with custom options.
    ///
    /// Fails with [`Error::InvalidFormat`] if the buffer lacks the PDF
    /// signature.
    pub fn with_options(data: &'a [u8], options: ExtractOptions) -> Result<Self> {
        check_signature(data)?;
        Ok(Self { data, options })
    }

    /// Get the scanner options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Run the pipeline and return only the normalized text.
    pub fn scan_text(&self) -> Result<String> {
        self.scan().map(|extraction| extraction.text)
    }

    /// Run the pipeline: locate, inflate, extract tokens, normalize.
    pub fn scan(&self) -> Result<Extraction> {
        let level = self.options.progress_level();
        let mut stats = ExtractionStats::new();
        stats.pdf_version = detect_version(self.data);
        stats.input_bytes = self.data.len() as u64;

        log::log!(level, "PDF buffer size: {} bytes", self.data.len());

        let mut budget = InflateBudget::new(self.options.max_inflated_bytes);
        let mut raw_text = String::new();

        for span in locate_streams(self.data) {
            if let Some(max) = self.options.max_streams {
                if span.index >= max {
                    log::warn!("Stream cap of {} reached at offset {}", max, span.range.start);
                    return Err(Error::ResourceLimitExceeded {
                        kind: ResourceKind::Streams,
                        limit: max as u64,
                    });
                }
            }

            let payload = budget.inflate(span.payload(self.data))?;
            log::log!(
                level,
                "Processing stream {} at offset {} ({} bytes, {})",
                span.index + 1,
                span.range.start,
                span.len(),
                if payload.is_inflated() {
                    "inflated"
                } else {
                    "raw"
                }
            );

            let (text, counts) = extract_stream_text(payload.bytes());
            stats.add_stream(payload.is_inflated(), counts);
            if !text.is_empty() {
                raw_text.push_str(&text);
                raw_text.push(' ');
            }
        }

        let text = normalize_whitespace(&raw_text);
        stats.inflated_bytes = budget.used();
        stats.count_text(&text);

        log::log!(
            level,
            "Found {} streams, extracted {} characters",
            stats.stream_count,
            text.len()
        );

        Ok(Extraction::new(text, stats))
    }
}
