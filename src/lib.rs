//! promptweave - select project files and assemble AI assistant prompts
//!
//! promptweave builds a filtered tree of a source directory, keeps a
//! persistent selection of files from it, and turns that selection into an
//! outline and a context bundle for an external prompt generator. Responses
//! from the assistant go back to disk through an external applier.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    ApplyUseCase, ControllerState, GenerateUseCase, SelectionState, TreeController, UiStore,
};
pub use config::Settings;
pub use domain::entities::{NodeKind, TreeNode};
pub use domain::value_objects::{is_excluded, toggle, ExclusionMatcher, SelectionSet};
pub use error::{WeaveError, WeaveResult};
pub use infrastructure::fs::build_tree;
pub use infrastructure::{LocalBackend, Workspace};
