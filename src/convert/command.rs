//! External-program extraction strategy.

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use crate::detect::check_signature;
use crate::error::{Error, Result};

use super::TextExtractor;

/// Extracts text by running an external program on the file.
///
/// The program is invoked as `<program> <args...> <file>` and its standard
/// output is returned unchanged. A non-zero exit status is an error carrying
/// the program's standard error.
#[derive(Debug, Clone)]
pub struct CommandExtractor {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandExtractor {
    /// Create a strategy running `program` with the file as its only argument.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Run a Python script as `python3 <script> <file>`.
    pub fn python(script: impl Into<OsString>) -> Self {
        Self::new("python3").with_arg(script)
    }

    /// Append an argument placed before the file path.
    pub fn with_arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// The program that will be run.
    pub fn program(&self) -> &OsString {
        &self.program
    }
}

impl Default for CommandExtractor {
    fn default() -> Self {
        Self::python("extract.py")
    }
}

impl TextExtractor for CommandExtractor {
    fn name(&self) -> &str {
        "command"
    }

    fn extract_path(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        log::debug!(
            "Running {:?} {:?} on {}",
            self.program,
            self.args,
            path.display()
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .output()
            .map_err(|e| Error::Command(format!("failed to run {:?}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Command(format!(
                "{:?} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        check_signature(bytes)?;

        let mut file = tempfile::Builder::new()
            .prefix("pdfstrings-")
            .suffix(".pdf")
            .tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;

        self.extract_path(file.path())
    }
}
