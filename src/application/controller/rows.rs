//! Flattened rows for rendering the tree

use std::collections::BTreeSet;

use crate::domain::entities::{NodeKind, TreeNode};
use crate::domain::value_objects::SelectionSet;

/// Checkbox state of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    Selected,
    #[default]
    Unselected,
    /// Some but not all descendant files are selected
    Partial,
}

/// Checkbox state of `node` under `selection`.
///
/// Files reflect their own membership. Directories derive their state from
/// the files below them.
pub fn selection_state(node: &TreeNode, selection: &SelectionSet) -> SelectionState {
    if !node.is_dir() {
        return if selection.contains(&node.path) {
            SelectionState::Selected
        } else {
            SelectionState::Unselected
        };
    }

    let (selected, total) = count_selected(node, selection);
    match selected {
        0 => SelectionState::Unselected,
        n if n == total => SelectionState::Selected,
        _ => SelectionState::Partial,
    }
}

fn count_selected(node: &TreeNode, selection: &SelectionSet) -> (usize, usize) {
    match node.kind {
        NodeKind::File => (usize::from(selection.contains(&node.path)), 1),
        NodeKind::Directory => node
            .children
            .iter()
            .map(|c| count_selected(c, selection))
            .fold((0, 0), |(s, t), (cs, ct)| (s + cs, t + ct)),
    }
}

/// One visible line of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub path: String,
    pub name: String,
    /// 0 for top-level entries
    pub depth: usize,
    pub kind: NodeKind,
    pub state: SelectionState,
    pub expanded: bool,
    pub has_children: bool,
    /// Files in this subtree
    pub file_count: usize,
}

/// Depth-first rows, descending only into expanded directories
pub fn flatten(
    nodes: &[TreeNode],
    selection: &SelectionSet,
    expanded: &BTreeSet<String>,
) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    push_rows(nodes, 0, selection, expanded, &mut rows);
    rows
}

fn push_rows(
    nodes: &[TreeNode],
    depth: usize,
    selection: &SelectionSet,
    expanded: &BTreeSet<String>,
    rows: &mut Vec<TreeRow>,
) {
    for node in nodes {
        let is_expanded = node.is_dir() && expanded.contains(&node.path);
        rows.push(TreeRow {
            path: node.path.clone(),
            name: node.name.clone(),
            depth,
            kind: node.kind,
            state: selection_state(node, selection),
            expanded: is_expanded,
            has_children: !node.children.is_empty(),
            file_count: node.file_count(),
        });
        if is_expanded {
            push_rows(&node.children, depth + 1, selection, expanded, rows);
        }
    }
}
