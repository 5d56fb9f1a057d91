//! Selection set value object
//!
//! The set of tree paths the user has marked for inclusion in the prompt.
//! Backed by a `BTreeSet` so persisted output is sorted and stable.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Set of selected tree paths
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    paths: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Set membership of a single path
    pub fn set(&mut self, path: &str, included: bool) {
        if included {
            self.paths.insert(path.to_string());
        } else {
            self.paths.remove(path);
        }
    }

    /// Set membership of many paths in one update
    pub fn set_many<I, S>(&mut self, paths: I, included: bool)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for path in paths {
            self.set(path.as_ref(), included);
        }
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Paths in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.paths.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Add or remove `path`, returning the updated set.
///
/// Pure over its input; persisting the result is the caller's job.
pub fn toggle(path: &str, included: bool, selection: &SelectionSet) -> SelectionSet {
    let mut next = selection.clone();
    next.set(path, included);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_and_removes() {
        let empty = SelectionSet::new();
        let with = toggle("src/a.js", true, &empty);
        assert!(with.contains("src/a.js"));
        assert!(empty.is_empty(), "input must not change");

        let without = toggle("src/a.js", false, &with);
        assert_eq!(without, empty);
    }

    #[test]
    fn toggle_is_idempotent() {
        let base: SelectionSet = ["a", "b"].into_iter().collect();
        let once = toggle("a", true, &base);
        assert_eq!(once, base);
        let removed = toggle("missing", false, &base);
        assert_eq!(removed, base);
    }

    #[test]
    fn set_many_has_no_duplicates() {
        let mut set = SelectionSet::new();
        set.set_many(["b", "a", "b"], true);
        assert_eq!(set.to_vec(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn serializes_as_sorted_list() {
        let set: SelectionSet = ["z.rs", "a.rs"].into_iter().collect();
        let yaml = serde_yaml_ng::to_string(&set).unwrap();
        assert_eq!(yaml, "- a.rs\n- z.rs\n");
        let back: SelectionSet = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(back, set);
    }
}
