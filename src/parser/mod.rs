//! Content stream scanning.

mod inflate;
mod options;
mod scanner;
mod streams;
mod tokens;

pub use inflate::{inflate_or_passthrough, Payload};
pub use options::ExtractOptions;
pub use scanner::TextScanner;
pub use streams::{locate_streams, StreamSpan};
pub use tokens::{
    decode_hex, decode_literal, extract_stream_text, hex_strings, literal_strings, shown_strings,
    TokenCounts,
};
