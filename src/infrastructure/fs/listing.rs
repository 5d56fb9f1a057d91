//! Single-level directory listing for browsing

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{WeaveError, WeaveResult};

/// Immediate children of a directory, split by kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirListing {
    pub dir_path: PathBuf,
    pub dirs: Vec<String>,
    pub files: Vec<String>,
}

/// List one directory without filtering
pub fn list_dir(dir: &Path) -> WeaveResult<DirListing> {
    let read_err = |source| WeaveError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().map_err(read_err)?.is_dir() {
            dirs.push(name);
        } else {
            files.push(name);
        }
    }
    dirs.sort();
    files.sort();

    Ok(DirListing {
        dir_path: dir.to_path_buf(),
        dirs,
        files,
    })
}
