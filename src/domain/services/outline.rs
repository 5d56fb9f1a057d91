//! Project outline rendering
//!
//! Produces the plain-text structure listing handed to the prompt generator:
//!
//! ```text
//! Project Root: app
//!   - README.md
//!   Directory: src/
//!     - main.rs
//! ```
//!
//! Each level lists its files before its subdirectories.

use crate::domain::entities::{NodeKind, TreeNode};

/// Render `tree` as an indented outline under `root_name`
pub fn render_outline(root_name: &str, tree: &[TreeNode]) -> String {
    let mut lines = Vec::new();
    if tree.is_empty() {
        return String::new();
    }

    lines.push(format!("Project Root: {}", root_name));
    render_level(tree, 0, &mut lines);
    lines.join("\n")
}

fn render_level(nodes: &[TreeNode], level: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(level);

    for node in nodes.iter().filter(|n| n.kind == NodeKind::File) {
        lines.push(format!("{}  - {}", indent, node.name));
    }

    for node in nodes.iter().filter(|n| n.kind == NodeKind::Directory) {
        lines.push(format!("{}  Directory: {}/", indent, node.name));
        render_level(&node.children, level + 1, lines);
    }
}
