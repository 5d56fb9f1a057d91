//! Project backend port
//!
//! Everything the tree controller needs from the outside world: the current
//! source directory, the filtered tree under it, and selection persistence.

use std::path::{Path, PathBuf};

use crate::domain::entities::TreeNode;
use crate::error::WeaveResult;

use super::selection_store::SelectionStore;

/// Collaborator behind the tree controller
pub trait ProjectBackend: SelectionStore {
    /// Configured source directory
    fn source_directory(&self) -> WeaveResult<PathBuf>;

    /// Point the backend at a different source directory
    fn set_source_directory(&self, dir: &Path) -> WeaveResult<()>;

    /// Filtered tree of the configured source directory
    fn file_structure(&self) -> WeaveResult<Vec<TreeNode>>;
}
