//! Best-effort stream decompression.
//!
//! Every payload is run through a zlib decoder regardless of its declared
//! `/Filter`. Anything that fails to inflate is used as-is.

use flate2::{Decompress, FlushDecompress, Status};

use crate::error::{Error, ResourceKind, Result};

const CHUNK: usize = 32 * 1024;

/// A stream payload after the decompression attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload<'a> {
    /// Inflation succeeded
    Inflated(Vec<u8>),
    /// Not deflate data (or corrupt); the original bytes
    Raw(&'a [u8]),
}

impl Payload<'_> {
    /// The bytes to scan for text.
    pub fn bytes(&self) -> &[u8] {
        match self {
            Payload::Inflated(data) => data,
            Payload::Raw(data) => data,
        }
    }

    /// Whether inflation succeeded.
    pub fn is_inflated(&self) -> bool {
        matches!(self, Payload::Inflated(_))
    }
}

enum Outcome {
    Complete(Vec<u8>),
    Corrupt,
    OverCap,
}

/// Inflate a complete zlib stream. A stream that ends before its
/// terminating block counts as corrupt.
fn inflate_zlib(payload: &[u8], cap: Option<u64>) -> Outcome {
    let mut decoder = Decompress::new(true);
    let mut out: Vec<u8> = Vec::new();

    loop {
        out.reserve(CHUNK);
        let before_in = decoder.total_in();
        let before_out = decoder.total_out();
        let offset = before_in as usize;

        let input = &payload[offset..];
        let status = match decoder.decompress_vec(input, &mut out, FlushDecompress::None) {
            Ok(status) => status,
            Err(_) => return Outcome::Corrupt,
        };

        if cap.is_some_and(|cap| out.len() as u64 > cap) {
            return Outcome::OverCap;
        }

        match status {
            Status::StreamEnd => return Outcome::Complete(out),
            _ => {
                if decoder.total_in() == before_in && decoder.total_out() == before_out {
                    // Output space was available, so the input ran dry.
                    return Outcome::Corrupt;
                }
            }
        }
    }
}

/// Try to inflate a payload, falling back to the raw bytes on any error.
///
/// # Example
/// ```
/// use pdfstrings::parser::inflate_or_passthrough;
///
/// let raw = b"BT (plain) Tj ET";
/// assert_eq!(inflate_or_passthrough(raw).bytes(), raw);
/// ```
pub fn inflate_or_passthrough(payload: &[u8]) -> Payload<'_> {
    match inflate_zlib(payload, None) {
        Outcome::Complete(data) => Payload::Inflated(data),
        Outcome::Corrupt | Outcome::OverCap => Payload::Raw(payload),
    }
}

/// Tracks inflated bytes across one document against an optional cap.
#[derive(Debug, Clone)]
pub(crate) struct InflateBudget {
    limit: Option<u64>,
    used: u64,
}

impl InflateBudget {
    pub(crate) fn new(limit: Option<u64>) -> Self {
        Self { limit, used: 0 }
    }

    /// Total inflated bytes charged so far.
    pub(crate) fn used(&self) -> u64 {
        self.used
    }

    /// Inflate within the remaining budget.
    ///
    /// Corrupt data still falls back to the raw payload; only output that
    /// would push the total past the cap is an error.
    pub(crate) fn inflate<'a>(&mut self, payload: &'a [u8]) -> Result<Payload<'a>> {
        let remaining = self.limit.map(|limit| limit.saturating_sub(self.used));
        match inflate_zlib(payload, remaining) {
            Outcome::Complete(data) => {
                self.used += data.len() as u64;
                Ok(Payload::Inflated(data))
            }
            Outcome::Corrupt => Ok(Payload::Raw(payload)),
            Outcome::OverCap => Err(Error::ResourceLimitExceeded {
                kind: ResourceKind::InflatedBytes,
                limit: self.limit.unwrap_or_default(),
            }),
        }
    }
}
