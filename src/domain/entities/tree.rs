//! File tree entity
//!
//! A `TreeNode` is one file or directory of the filtered project structure.
//! Nodes are produced by the tree builder and never mutated afterwards; the
//! node `path` is the only identity used for selection.

use serde::{Deserialize, Serialize};

/// Kind of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// A node in the filtered file tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Entry name (last path segment)
    pub name: String,
    /// Path relative to the source root, always `/`-separated
    pub path: String,
    /// File or directory
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Child nodes (directories only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a file node
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::File,
            children: Vec::new(),
        }
    }

    /// Create a directory node with the given children
    pub fn directory(
        name: impl Into<String>,
        path: impl Into<String>,
        children: Vec<TreeNode>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::Directory,
            children,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Paths of every node below this one (not including itself)
    pub fn descendant_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        for child in &self.children {
            child.collect_paths(&mut out);
        }
        out
    }

    /// This node's path followed by every descendant path
    pub fn subtree_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_paths(&mut out);
        out
    }

    fn collect_paths(&self, out: &mut Vec<String>) {
        out.push(self.path.clone());
        for child in &self.children {
            child.collect_paths(out);
        }
    }

    /// Number of file nodes in this subtree
    pub fn file_count(&self) -> usize {
        match self.kind {
            NodeKind::File => 1,
            NodeKind::Directory => self.children.iter().map(TreeNode::file_count).sum(),
        }
    }
}

/// Find a node by path anywhere in a forest
pub fn find_node<'a>(nodes: &'a [TreeNode], path: &str) -> Option<&'a TreeNode> {
    for node in nodes {
        if node.path == path {
            return Some(node);
        }
        if node.is_dir() && is_ancestor_path(&node.path, path) {
            return find_node(&node.children, path);
        }
    }
    None
}

/// Every node path in depth-first order
pub fn all_paths(nodes: &[TreeNode]) -> Vec<String> {
    nodes.iter().flat_map(TreeNode::subtree_paths).collect()
}

/// Every file node in depth-first order
pub fn files(nodes: &[TreeNode]) -> Vec<&TreeNode> {
    fn walk<'a>(nodes: &'a [TreeNode], out: &mut Vec<&'a TreeNode>) {
        for node in nodes {
            match node.kind {
                NodeKind::File => out.push(node),
                NodeKind::Directory => walk(&node.children, out),
            }
        }
    }

    let mut out = Vec::new();
    walk(nodes, &mut out);
    out
}

fn is_ancestor_path(dir: &str, path: &str) -> bool {
    path.len() > dir.len() && path.starts_with(dir) && path.as_bytes()[dir.len()] == b'/'
}
