//! Interchangeable extraction strategies.
//!
//! The in-process scanner and the external-command fallback implement the
//! same [`TextExtractor`] contract so callers can pick one at runtime.
//!
//! # Example
//!
//! ```no_run
//! use pdfstrings::convert::{CommandExtractor, ScanExtractor, TextExtractor};
//! use std::path::Path;
//!
//! fn main() -> pdfstrings::Result<()> {
//!     let strategies: Vec<Box<dyn TextExtractor>> = vec![
//!         Box::new(ScanExtractor::new()),
//!         Box::new(CommandExtractor::python("extract.py")),
//!     ];
//!
//!     for strategy in &strategies {
//!         let text = strategy.extract_path(Path::new("report.pdf"))?;
//!         println!("{}: {}", strategy.name(), text);
//!     }
//!     Ok(())
//! }
//! ```

mod command;
mod scan;

pub use command::CommandExtractor;
pub use scan::ScanExtractor;

use crate::error::Result;
use std::path::Path;

/// A way of turning a PDF into plain text.
pub trait TextExtractor: Send + Sync {
    /// Short name of this strategy.
    fn name(&self) -> &str;

    /// Extract text from a file on disk.
    fn extract_path(&self, path: &Path) -> Result<String>;

    /// Extract text from an in-memory buffer.
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String>;
}
