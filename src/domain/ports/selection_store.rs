//! Selection store port
//!
//! Persists the set of selected paths between sessions.

use crate::domain::value_objects::SelectionSet;
use crate::error::WeaveResult;

/// Persisted selection storage
///
/// Implementations:
/// - `LocalBackend` - `selected_files` in the workspace `user_config.yaml`
/// - `MemorySelectionStore` - in-memory, for tests
pub trait SelectionStore {
    /// Read the saved selection.
    ///
    /// Returns an empty set when nothing was recorded yet, and
    /// `WeaveError::PersistenceRead` when the store is unreadable.
    fn load(&self) -> WeaveResult<SelectionSet>;

    /// Replace the saved selection. Readers never see a partial write.
    fn save(&self, selection: &SelectionSet) -> WeaveResult<()>;
}
