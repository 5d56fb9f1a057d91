//! Workspace file name value object
//!
//! Config, template and format names arrive from the command line and are
//! joined onto workspace directories. A `FileName` is a single plain path
//! segment, so joining it can never leave the directory.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{WeaveError, WeaveResult};

/// A validated single-segment file name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName(String);

impl FileName {
    /// Validate `name` as a plain file name for files under `root`
    pub fn new(name: &str, root: &Path) -> WeaveResult<Self> {
        let escapes = name.is_empty()
            || name == "."
            || name == ".."
            || name.contains('/')
            || name.contains('\\')
            || name.contains('\0')
            || Path::new(name).is_absolute();

        if escapes {
            return Err(WeaveError::PathEscape {
                name: name.to_string(),
                root: root.to_path_buf(),
            });
        }

        Ok(Self(name.to_string()))
    }

    /// Validate and append `extension` when the name lacks it
    pub fn with_extension(name: &str, extension: &str, root: &Path) -> WeaveResult<Self> {
        let name = if name.ends_with(&format!(".{}", extension)) {
            name.to_string()
        } else {
            format!("{}.{}", name, extension)
        };
        Self::new(&name, root)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join onto a directory
    pub fn within(&self, dir: &Path) -> PathBuf {
        dir.join(&self.0)
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
