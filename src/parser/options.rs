//! Extraction options and configuration.

/// Options for extracting text from PDF buffers.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Narrate per-stream progress at `info` level instead of `debug`
    pub verbose: bool,

    /// Maximum number of located streams (None = unlimited)
    pub max_streams: Option<usize>,

    /// Maximum total inflated bytes across the document (None = unlimited)
    pub max_inflated_bytes: Option<u64>,

    /// Whether batch reads run in parallel
    pub parallel: bool,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable verbose narration.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Cap the number of streams scanned per document.
    pub fn with_max_streams(mut self, max: usize) -> Self {
        self.max_streams = Some(max);
        self
    }

    /// Cap the total number of inflated bytes per document.
    pub fn with_max_inflated_bytes(mut self, max: u64) -> Self {
        self.max_inflated_bytes = Some(max);
        self
    }

    /// Apply conservative caps suitable for untrusted input.
    pub fn hardened(self) -> Self {
        self.with_max_streams(10_000)
            .with_max_inflated_bytes(256 * 1024 * 1024)
    }

    /// Enable or disable parallel batch processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel batch processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub(crate) fn progress_level(&self) -> log::Level {
        if self.verbose {
            log::Level::Info
        } else {
            log::Level::Debug
        }
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            max_streams: None,
            max_inflated_bytes: None,
            parallel: true,
        }
    }
}
