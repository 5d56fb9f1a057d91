//! Generate Options

use std::path::PathBuf;

/// Options for the generate use case
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Requested output format (a file stem under `formats/`)
    pub format: String,
    /// Formats the workspace defines
    pub available_formats: Vec<String>,
    /// Where `code_structure.txt` and `code_context.json` are written
    pub output_dir: PathBuf,
    /// Generator argv; `{format}` and `{output}` are substituted
    pub command: Vec<String>,
    /// Working directory for the generator
    pub working_dir: Option<PathBuf>,
}

impl GenerateOptions {
    pub fn new(format: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            format: format.into(),
            available_formats: Vec::new(),
            output_dir: output_dir.into(),
            command: Vec::new(),
            working_dir: None,
        }
    }

    pub fn with_available_formats(mut self, formats: Vec<String>) -> Self {
        self.available_formats = formats;
        self
    }

    pub fn with_command(mut self, command: Vec<String>) -> Self {
        self.command = command;
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}
