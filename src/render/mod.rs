//! Output shaping: whitespace normalization, statistics and JSON.

mod cleanup;
mod json;
mod result;

pub use cleanup::normalize_whitespace;
pub use json::{to_json, JsonFormat};
pub use result::{Extraction, ExtractionStats};
