//! Filtered directory tree construction

use std::fs;
use std::path::Path;

use crate::domain::entities::TreeNode;
use crate::domain::value_objects::ExclusionMatcher;
use crate::error::{WeaveError, WeaveResult};

/// Walk `root` and return its filtered tree.
///
/// Entries are sorted by name. Paths are relative to `root` and joined with
/// `/`. Excluded entries are skipped before recursing, and a directory only
/// survives when at least one descendant file does. Anything that is not a
/// directory (symlinks included) becomes a file node.
///
/// Any directory that cannot be listed aborts the whole build.
pub fn build_tree(root: &Path, matcher: &ExclusionMatcher) -> WeaveResult<Vec<TreeNode>> {
    walk(root, "", matcher)
}

fn walk(dir: &Path, prefix: &str, matcher: &ExclusionMatcher) -> WeaveResult<Vec<TreeNode>> {
    let read_err = |source| WeaveError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(read_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_err)?;
    entries.sort_by_key(|e| e.file_name());

    let mut nodes = Vec::new();
    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        let relative = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}/{}", prefix, name)
        };

        if matcher.is_excluded(&relative) {
            continue;
        }

        let file_type = entry.file_type().map_err(read_err)?;
        if file_type.is_dir() {
            let children = walk(&entry.path(), &relative, matcher)?;
            if !children.is_empty() {
                nodes.push(TreeNode::directory(name, relative, children));
            }
        } else {
            nodes.push(TreeNode::file(name, relative));
        }
    }

    Ok(nodes)
}
