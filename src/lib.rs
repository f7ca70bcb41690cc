//! # pdfstrings
//!
//! Lightweight PDF text extraction for Rust.
//!
//! This library recovers readable text from PDF files by scanning the raw
//! bytes for content streams and the string operands inside them. It does
//! not build an object model, read the cross-reference table, or decode
//! fonts: it trades fidelity for a small, dependable pipeline.
//!
//! ## Quick Start
//!
//! ```
//! fn main() -> pdfstrings::Result<()> {
//!     let data = b"%PDF-1.4\n1 0 obj\nstream\n<48656C6C6F>\nendstream\nendobj\n";
//!     let text = pdfstrings::extract(data)?;
//!     assert_eq!(text, "Hello");
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Format guard**: the buffer must start with `%PDF-`
//! - **Stream locator**: every `stream ... endstream` region, in file order
//! - **Decompressor**: zlib inflation, raw bytes on failure
//! - **Token passes**: literal strings, hex strings, `Tj`-shown strings
//! - **Normalization**: whitespace collapsed once over the whole text
//!
//! The token passes overlap. A string shown with `Tj` is emitted by both the
//! literal pass and the show pass, so callers must not assume each fragment
//! appears once.

pub mod convert;
pub mod detect;
pub mod error;
pub mod parser;
pub mod reader;
pub mod render;

// Re-export commonly used types
pub use convert::{CommandExtractor, ScanExtractor, TextExtractor};
pub use detect::{check_signature, detect_version, is_pdf_bytes};
pub use error::{Error, ResourceKind, Result};
pub use parser::{ExtractOptions, TextScanner};
pub use reader::PdfReader;
pub use render::{normalize_whitespace, Extraction, ExtractionStats, JsonFormat};

use std::path::Path;

/// Extract text from a PDF held in memory.
///
/// Returns an empty string when the document has no recognizable text.
/// The only error with default options is [`Error::InvalidFormat`].
///
/// # Example
///
/// ```
/// let result = pdfstrings::extract(b"not a pdf");
/// assert!(matches!(result, Err(pdfstrings::Error::InvalidFormat)));
/// ```
pub fn extract(data: &[u8]) -> Result<String> {
    extract_with_options(data, &ExtractOptions::default())
}

/// Extract text with custom options.
///
/// # Example
///
/// ```
/// use pdfstrings::{extract_with_options, ExtractOptions};
///
/// let options = ExtractOptions::new().with_verbose(true).hardened();
/// let text = extract_with_options(b"%PDF-1.7\n", &options).unwrap();
/// assert!(text.is_empty());
/// ```
pub fn extract_with_options(data: &[u8], options: &ExtractOptions) -> Result<String> {
    TextScanner::with_options(data, options.clone())?.scan_text()
}

/// Extract text and scanning statistics.
pub fn extract_with_stats(data: &[u8], options: &ExtractOptions) -> Result<Extraction> {
    TextScanner::with_options(data, options.clone())?.scan()
}

/// Extract text from a PDF file.
///
/// # Example
///
/// ```no_run
/// let text = pdfstrings::extract_file("document.pdf").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<String> {
    ScanExtractor::new().extract_path(path.as_ref())
}
