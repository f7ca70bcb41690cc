//! In-process extraction strategy.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::parser::{ExtractOptions, TextScanner};

use super::TextExtractor;

/// Extracts text with the built-in stream scanner.
#[derive(Debug, Clone, Default)]
pub struct ScanExtractor {
    options: ExtractOptions,
}

impl ScanExtractor {
    /// Create a scanner strategy with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner strategy with custom options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }
}

impl TextExtractor for ScanExtractor {
    fn name(&self) -> &str {
        "scan"
    }

    fn extract_path(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let data = fs::read(path)?;
        self.extract_bytes(&data)
    }

    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        TextScanner::with_options(bytes, self.options.clone())?.scan_text()
    }
}
