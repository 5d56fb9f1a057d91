//! Generate Result

use std::path::PathBuf;

use crate::domain::services::SkippedFile;

/// Result of a generate run
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Generator stdout
    pub prompt: String,
    /// Written outline
    pub structure_path: PathBuf,
    /// Written context bundle
    pub context_path: PathBuf,
    /// Files included in the bundle
    pub files: usize,
    /// Selected files that could not be read
    pub skipped: Vec<SkippedFile>,
}

impl GenerateResult {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
