//! PDF signature check and header inspection.

use crate::error::{Error, Result};

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Check that a buffer starts with the `%PDF-` signature.
///
/// This is advisory only: nothing after the signature is validated.
///
/// # Example
/// ```
/// use pdfstrings::detect::check_signature;
///
/// assert!(check_signature(b"%PDF-1.4\n").is_ok());
/// assert!(check_signature(b"<html>").is_err());
/// ```
pub fn check_signature(data: &[u8]) -> Result<()> {
    if data.starts_with(PDF_MAGIC) {
        Ok(())
    } else {
        Err(Error::InvalidFormat)
    }
}

/// Check if bytes start with the PDF signature.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    check_signature(data).is_ok()
}

/// Read the header version (e.g. "1.7") following the signature.
///
/// Returns `None` when the signature is missing or the version is not of
/// the `digit.digit` form. Used for diagnostics only.
pub fn detect_version(data: &[u8]) -> Option<String> {
    if data.len() < PDF_MAGIC_LEN + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return None;
    }

    let version = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
    if version[0].is_ascii_digit() && version[1] == b'.' && version[2].is_ascii_digit() {
        Some(String::from_utf8_lossy(version).into_owned())
    } else {
        None
    }
}
