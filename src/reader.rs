//! File-level reading: path resolution, existence checks and batches.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::parser::{ExtractOptions, TextScanner};
use crate::render::Extraction;

/// Reads PDF files from disk and extracts their text.
///
/// Names that are absolute or already end in `.pdf` are used as given.
/// Anything else is treated as a bare document name and resolved to
/// `<base_dir>/<name>.pdf`, with the base directory defaulting to `.`.
///
/// # Example
///
/// ```no_run
/// use pdfstrings::PdfReader;
///
/// let reader = PdfReader::new().with_base_dir("documents");
/// let text = reader.read_to_string("report")?; // documents/report.pdf
/// # Ok::<(), pdfstrings::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdfReader {
    base_dir: Option<PathBuf>,
    options: ExtractOptions,
}

impl PdfReader {
    /// Create a reader resolving against the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory bare names are resolved against.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Set extraction options.
    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Enable verbose narration.
    pub fn verbose(mut self) -> Self {
        self.options = self.options.with_verbose(true);
        self
    }

    /// Get the extraction options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Resolve a document name to a file path.
    pub fn resolve_path(&self, name: impl AsRef<Path>) -> PathBuf {
        let name = name.as_ref();
        let has_pdf_extension = name
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

        if name.is_absolute() || has_pdf_extension {
            return name.to_path_buf();
        }

        let base = self.base_dir.as_deref().unwrap_or_else(|| Path::new("."));
        let mut file_name = name.as_os_str().to_os_string();
        file_name.push(".pdf");
        base.join(file_name)
    }

    /// Resolve, read and scan a document, returning text and statistics.
    pub fn read(&self, name: impl AsRef<Path>) -> Result<Extraction> {
        let path = self.resolve_path(name);
        log::log!(self.options.progress_level(), "Reading file: {}", path.display());

        if !path.exists() {
            return Err(Error::FileNotFound(path));
        }

        let data = fs::read(&path)?;
        TextScanner::with_options(&data, self.options.clone())?.scan()
    }

    /// Resolve, read and scan a document, returning only its text.
    pub fn read_to_string(&self, name: impl AsRef<Path>) -> Result<String> {
        self.read(name).map(|extraction| extraction.text)
    }

    /// Read several documents, in parallel unless the options say otherwise.
    ///
    /// Results come back in input order, paired with the resolved path.
    pub fn read_many<P>(&self, names: &[P]) -> Vec<(PathBuf, Result<String>)>
    where
        P: AsRef<Path> + Sync,
    {
        let read_one = |name: &P| {
            let path = self.resolve_path(name);
            let result = self.read_to_string(&path);
            (path, result)
        };

        if self.options.parallel {
            names.par_iter().map(read_one).collect()
        } else {
            names.iter().map(read_one).collect()
        }
    }
}
