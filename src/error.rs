//! Error types for promptweave
//!
//! Library code returns `WeaveResult`; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for promptweave operations
pub type WeaveResult<T> = Result<T, WeaveError>;

/// Main error type for promptweave operations
#[derive(Error, Debug)]
pub enum WeaveError {
    /// A directory in the source tree could not be listed
    #[error("cannot read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persisted selection could not be read or parsed
    #[error("cannot read saved selection from {path}: {message}")]
    PersistenceRead { path: PathBuf, message: String },

    /// The selection could not be written back
    #[error("cannot save selection to {path}: {message}")]
    PersistenceWrite { path: PathBuf, message: String },

    /// A toggle referenced a path that is not part of the rendered tree
    #[error("'{path}' is not in the current file tree")]
    UnknownNode { path: String },

    /// A mutation was attempted before a tree was rendered
    #[error("no file tree is loaded")]
    NotRendered,

    /// An exclusion pattern could not be compiled
    #[error("invalid exclusion pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// `source_directory` is missing from the user config
    #[error("no source directory configured - run 'promptweave source <DIR>' first")]
    SourceNotConfigured,

    /// The source directory is too close to the filesystem root to scan
    #[error("refusing to scan {path}: directory is too high in the hierarchy")]
    SourceTooHigh { path: PathBuf },

    /// A config or template name resolves outside the workspace
    #[error("'{name}' is not a plain file name inside {root}")]
    PathEscape { name: String, root: PathBuf },

    /// A named config would overwrite one of the workspace's own documents
    #[error("'{name}' is reserved for the workspace; pick another config name")]
    ReservedName { name: String },

    /// The requested output format has no definition in `formats/`
    #[error("unknown format '{name}' (available: {available})")]
    UnknownFormat { name: String, available: String },

    /// No command is configured for an external step
    #[error("no {step} command configured")]
    CommandNotConfigured { step: &'static str },

    /// An external command could not be started
    #[error("failed to start '{program}': {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// An external command exited unsuccessfully
    #[error("'{program}' failed with exit code {code:?}: {details}")]
    CommandFailed {
        program: String,
        code: Option<i32>,
        details: String,
    },

    /// Apply was asked to process a blank response
    #[error("the response is empty")]
    EmptyResponse,

    /// Settings file could not be parsed
    #[error("invalid settings in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WeaveError {
    /// Whether the UI may recover by showing an empty selection
    pub fn is_degradable(&self) -> bool {
        matches!(self, WeaveError::PersistenceRead { .. })
    }
}
