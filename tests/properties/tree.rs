//! Property tests for filtered tree construction on real directories.

use std::fs;
use std::path::Path;

use proptest::prelude::*;

use promptweave::domain::entities::all_paths;
use promptweave::{build_tree, ExclusionMatcher, TreeNode};

fn file_path() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-d]{1,2}", 1..=3)
}

fn layout() -> impl Strategy<Value = Vec<Vec<String>>> {
    proptest::collection::vec(file_path(), 0..=10)
}

/// Write files, skipping any whose parent would have to be a file
fn materialize(root: &Path, layout: &[Vec<String>]) {
    for parts in layout {
        let path = root.join(parts.join("/"));
        let parent_ok = path
            .ancestors()
            .skip(1)
            .take_while(|a| *a != root)
            .all(|a| !a.is_file());
        if !parent_ok || path.is_dir() {
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "x").unwrap();
    }
}

fn check_nodes(nodes: &[TreeNode], prefix: &str) -> Result<(), TestCaseError> {
    let names: Vec<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    prop_assert_eq!(&names, &sorted, "siblings must be sorted by name");

    for node in nodes {
        let expected = if prefix.is_empty() {
            node.name.clone()
        } else {
            format!("{}/{}", prefix, node.name)
        };
        prop_assert_eq!(&node.path, &expected);
        if node.is_dir() {
            prop_assert!(node.file_count() > 0, "directory {} is empty", node.path);
            check_nodes(&node.children, &node.path)?;
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Trees are sorted, paths are consistent, no directory is empty.
    #[test]
    fn property_tree_shape(
        files in layout(),
        empty_dirs in proptest::collection::vec("[e-f]{1,2}", 0..=3),
    ) {
        let dir = tempfile::tempdir().unwrap();
        materialize(dir.path(), &files);
        for d in &empty_dirs {
            fs::create_dir_all(dir.path().join(d)).unwrap();
        }

        let tree = build_tree(dir.path(), &ExclusionMatcher::empty()).unwrap();
        check_nodes(&tree, "")?;
        for d in &empty_dirs {
            prop_assert!(!all_paths(&tree).contains(d));
        }
    }

    /// PROPERTY: Nothing in the tree matches an exclusion pattern.
    #[test]
    fn property_no_excluded_path_survives(
        files in layout(),
        patterns in proptest::collection::vec("[a-d*]{1,2}", 0..=2),
    ) {
        let dir = tempfile::tempdir().unwrap();
        materialize(dir.path(), &files);

        let matcher = ExclusionMatcher::new(&patterns).unwrap();
        let tree = build_tree(dir.path(), &matcher).unwrap();
        for path in all_paths(&tree) {
            prop_assert!(!matcher.is_excluded(&path), "{} should be hidden", path);
        }
    }
}
