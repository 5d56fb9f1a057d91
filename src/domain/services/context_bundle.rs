//! Code context bundle
//!
//! Collects the contents of the selected files, in tree order, so the prompt
//! generator can embed them. File reading is injected, which keeps this
//! service free of I/O.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{files, TreeNode};
use crate::domain::value_objects::SelectionSet;

/// One numbered source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextLine {
    pub number: usize,
    pub text: String,
}

/// One selected file with its contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextFile {
    pub path: String,
    pub language: String,
    pub lines: Vec<ContextLine>,
}

/// A selected file that could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

/// The selected files of a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextBundle {
    pub files: Vec<ContextFile>,
}

impl ContextBundle {
    /// Gather every selected file node of `tree` using `read`.
    ///
    /// Directory paths in the selection are ignored; only file nodes carry
    /// content. Unreadable files are reported instead of failing the bundle.
    pub fn assemble<F>(
        tree: &[TreeNode],
        selection: &SelectionSet,
        mut read: F,
    ) -> (Self, Vec<SkippedFile>)
    where
        F: FnMut(&str) -> std::io::Result<String>,
    {
        let mut bundle = Self::default();
        let mut skipped = Vec::new();

        for node in files(tree) {
            if !selection.contains(&node.path) {
                continue;
            }
            match read(&node.path) {
                Ok(content) => bundle.files.push(ContextFile {
                    path: node.path.clone(),
                    language: detect_language(&node.path).to_string(),
                    lines: number_lines(&content),
                }),
                Err(e) => skipped.push(SkippedFile {
                    path: node.path.clone(),
                    reason: e.to_string(),
                }),
            }
        }

        (bundle, skipped)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn number_lines(content: &str) -> Vec<ContextLine> {
    content
        .lines()
        .enumerate()
        .map(|(i, text)| ContextLine {
            number: i + 1,
            text: text.to_string(),
        })
        .collect()
}

/// Language tag for a file path, based on its extension
pub fn detect_language(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "js" | "jsx" | "mjs" | "cjs" => "javascript",
        "ts" | "tsx" => "typescript",
        "py" => "python",
        "html" | "htm" => "html",
        "css" => "css",
        "json" => "json",
        "yaml" | "yml" => "yaml",
        "md" => "markdown",
        "rs" => "rust",
        "toml" => "toml",
        "sh" => "shell",
        _ => "text",
    }
}
