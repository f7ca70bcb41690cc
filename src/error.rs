//! Error types for pdfstrings library.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pdfstrings operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The buffer does not start with the `%PDF-` signature.
    #[error("Invalid format: not a PDF file")]
    InvalidFormat,

    /// A configured resource cap was exceeded.
    #[error("Resource limit exceeded: more than {limit} {kind}")]
    ResourceLimitExceeded {
        /// Which resource ran out.
        kind: ResourceKind,
        /// The configured cap.
        limit: u64,
    },

    /// The resolved input file does not exist.
    #[error("File does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The external extraction command failed.
    #[error("Extraction command failed: {0}")]
    Command(String),

    /// Error serializing extraction output.
    #[error("Rendering error: {0}")]
    Render(String),
}

/// Resource kinds guarded by [`Error::ResourceLimitExceeded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Number of located content streams.
    Streams,
    /// Total bytes produced by stream inflation.
    InflatedBytes,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Streams => f.write_str("streams"),
            ResourceKind::InflatedBytes => f.write_str("inflated bytes"),
        }
    }
}
