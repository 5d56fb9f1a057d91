//! Source Policy
//!
//! Guards against scanning locations that are far too broad to be a project
//! (the filesystem root, `/home`).

use std::path::{Component, Path, PathBuf};

use crate::error::{WeaveError, WeaveResult};

/// Roots refused when no list is configured
pub const DEFAULT_FORBIDDEN_ROOTS: &[&str] = &["/", "/home"];

/// Policy deciding which source directories may be scanned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePolicy {
    forbidden: Vec<PathBuf>,
}

impl Default for SourcePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_FORBIDDEN_ROOTS.iter().map(PathBuf::from))
    }
}

impl SourcePolicy {
    pub fn new<I: IntoIterator<Item = PathBuf>>(forbidden: I) -> Self {
        Self {
            forbidden: forbidden.into_iter().map(|p| lexical_normalize(&p)).collect(),
        }
    }

    /// Policy that allows every directory
    pub fn permissive() -> Self {
        Self {
            forbidden: Vec::new(),
        }
    }

    /// Check `source` against the forbidden list.
    ///
    /// Relative paths are resolved against `cwd`; symlinks are not followed.
    pub fn check(&self, source: &Path, cwd: &Path) -> WeaveResult<()> {
        let absolute = if source.is_absolute() {
            source.to_path_buf()
        } else {
            cwd.join(source)
        };
        let normalized = lexical_normalize(&absolute);

        if self.forbidden.iter().any(|f| f == &normalized) {
            return Err(WeaveError::SourceTooHigh { path: normalized });
        }
        Ok(())
    }
}

/// Resolve `.` and `..` without touching the filesystem
fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
