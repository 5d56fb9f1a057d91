//! Domain Entities
//!
//! - `TreeNode` - one file or directory of the filtered project tree

mod tree;

pub use tree::{all_paths, files, find_node, NodeKind, TreeNode};
