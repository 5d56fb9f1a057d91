//! Tree Controller
//!
//! Headless state machine behind every tree view:
//!
//! ```text
//! Idle ──begin_load──▶ Loading ──complete_load──▶ Rendered | LoadError
//!                         ▲                            │
//!                         └──── reload / change_dir ───┘
//! ```
//!
//! Loads are split into `begin_load`, `fetch` and `complete_load` so a host
//! event loop can interleave them. Every `begin_load` issues a numbered
//! ticket and only the newest ticket may complete; older results are
//! dropped.
//!
//! Selection mutations require a rendered tree, update the in-memory
//! selection, publish it to the `UiStore` and persist it through the
//! backend once per mutation. When persisting fails the in-memory selection
//! stays authoritative and the controller is marked unsaved until
//! `retry_save` succeeds.

mod rows;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::{all_paths, files, find_node, TreeNode};
use crate::domain::ports::{EventSink, ProjectBackend, WeaveEvent};
use crate::domain::value_objects::SelectionSet;
use crate::error::{WeaveError, WeaveResult};

use super::store::UiStore;

pub use rows::{flatten, selection_state, SelectionState, TreeRow};

/// Lifecycle state of the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Loading { seq: u64 },
    Rendered,
    LoadError { message: String },
}

/// Proof of a started load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
}

impl LoadTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Everything a load fetched from the backend
#[derive(Debug)]
pub struct FetchedTree {
    pub ticket: LoadTicket,
    pub root: Option<PathBuf>,
    pub tree: WeaveResult<Vec<TreeNode>>,
    pub selection: WeaveResult<SelectionSet>,
}

/// What `complete_load` did with a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Rendered,
    /// A newer load was started; this one was ignored
    Stale,
}

/// Headless controller for a selectable file tree
pub struct TreeController<B: ProjectBackend> {
    backend: B,
    events: Arc<dyn EventSink>,
    store: UiStore,
    state: ControllerState,
    latest_seq: u64,
    tree: Vec<TreeNode>,
    selection: SelectionSet,
    expanded: BTreeSet<String>,
    cursor: usize,
    unsaved: bool,
}

impl<B: ProjectBackend> TreeController<B> {
    pub fn new(backend: B, events: Arc<dyn EventSink>, store: UiStore) -> Self {
        Self {
            backend,
            events,
            store,
            state: ControllerState::Idle,
            latest_seq: 0,
            tree: Vec::new(),
            selection: SelectionSet::new(),
            expanded: BTreeSet::new(),
            cursor: 0,
            unsaved: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn store(&self) -> &UiStore {
        &self.store
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn tree(&self) -> &[TreeNode] {
        &self.tree
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The last save failed and has not been retried successfully
    pub fn is_unsaved(&self) -> bool {
        self.unsaved
    }

    // ---- loading -----------------------------------------------------------

    /// Enter `Loading` and issue a ticket for the new load
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_seq += 1;
        let seq = self.latest_seq;
        self.state = ControllerState::Loading { seq };
        self.store.update(|s| {
            s.loading = true;
            s.error = None;
        });
        self.events.on_event(WeaveEvent::LoadStarted { seq });
        LoadTicket { seq }
    }

    /// Ask the backend for the tree and the saved selection
    pub fn fetch(&self, ticket: LoadTicket) -> FetchedTree {
        FetchedTree {
            ticket,
            root: self.backend.source_directory().ok(),
            tree: self.backend.file_structure(),
            selection: self.backend.load(),
        }
    }

    /// Apply a fetch if its ticket is still the newest.
    ///
    /// A failed tree build moves to `LoadError`, clears the previous tree and
    /// is returned to the caller. An unreadable selection does not fail the
    /// load; an empty selection is used instead.
    pub fn complete_load(&mut self, fetched: FetchedTree) -> WeaveResult<LoadStatus> {
        let seq = fetched.ticket.seq;
        if seq != self.latest_seq {
            self.events.on_event(WeaveEvent::StaleLoadIgnored {
                seq,
                latest: self.latest_seq,
            });
            return Ok(LoadStatus::Stale);
        }

        let tree = match fetched.tree {
            Ok(tree) => tree,
            Err(e) => {
                let message = e.to_string();
                self.state = ControllerState::LoadError {
                    message: message.clone(),
                };
                self.tree.clear();
                self.cursor = 0;
                self.store.update(|s| {
                    s.loading = false;
                    s.tree.clear();
                    s.error = Some(message.clone());
                });
                self.events.on_event(WeaveEvent::LoadFailed { seq, message });
                return Err(e);
            }
        };

        // An unsaved in-memory selection is newer than anything on disk.
        if !self.unsaved {
            self.selection = match fetched.selection {
                Ok(selection) => selection,
                Err(e) => {
                    self.events.on_event(WeaveEvent::SelectionDegraded {
                        message: e.to_string(),
                    });
                    SelectionSet::new()
                }
            };
        }

        self.tree = tree;
        self.state = ControllerState::Rendered;
        self.clamp_cursor();

        let root = fetched.root;
        self.events.on_event(WeaveEvent::TreeLoaded {
            seq,
            root: root.clone().unwrap_or_default(),
            files: files(&self.tree).len(),
            selected: self.selection.len(),
        });

        let tree = self.tree.clone();
        let selection = self.selection.clone();
        self.store.update(move |s| {
            s.loading = false;
            s.error = None;
            s.tree = tree;
            s.selection = selection;
            if root.is_some() {
                s.current_dir = root;
            }
        });

        Ok(LoadStatus::Rendered)
    }

    /// `begin_load`, `fetch` and `complete_load` in one go
    pub fn reload(&mut self) -> WeaveResult<LoadStatus> {
        let ticket = self.begin_load();
        let fetched = self.fetch(ticket);
        self.complete_load(fetched)
    }

    /// Point the backend at `dir` and reload. The selection is kept.
    pub fn change_directory(&mut self, dir: &Path) -> WeaveResult<LoadStatus> {
        self.backend.set_source_directory(dir)?;
        self.reload()
    }

    // ---- selection ---------------------------------------------------------

    /// Set `path` (and, for a directory, every descendant) to `included`,
    /// then save once
    pub fn toggle(&mut self, path: &str, included: bool) -> WeaveResult<()> {
        self.toggle_many(&[path], included)
    }

    /// `toggle` for several paths with a single save. Every path is looked
    /// up first; one unknown path leaves the selection untouched.
    pub fn toggle_many<S: AsRef<str>>(&mut self, paths: &[S], included: bool) -> WeaveResult<()> {
        self.ensure_rendered()?;
        let mut touched = Vec::new();
        for path in paths {
            let path = path.as_ref();
            let node = find_node(&self.tree, path).ok_or_else(|| WeaveError::UnknownNode {
                path: path.to_string(),
            })?;
            touched.extend(node.subtree_paths());
        }

        self.selection.set_many(touched, included);
        for path in paths {
            self.sync_ancestors(path.as_ref());
        }
        self.persist()
    }

    /// A directory path is stored exactly when everything below it is.
    /// Re-derive that for each directory above `path`, innermost first.
    fn sync_ancestors(&mut self, path: &str) {
        let mut current = path;
        while let Some((parent, _)) = current.rsplit_once('/') {
            let full = find_node(&self.tree, parent).map(|node| {
                node.subtree_paths()
                    .iter()
                    .skip(1)
                    .all(|p| self.selection.contains(p))
            });
            if let Some(full) = full {
                self.selection.set(parent, full);
            }
            current = parent;
        }
    }

    /// Select every node of the rendered tree
    pub fn select_all(&mut self) -> WeaveResult<()> {
        self.ensure_rendered()?;
        self.selection.set_many(all_paths(&self.tree), true);
        self.persist()
    }

    /// Deselect every node of the rendered tree. Paths that are not in the
    /// tree stay selected.
    pub fn deselect_all(&mut self) -> WeaveResult<()> {
        self.ensure_rendered()?;
        self.selection.set_many(all_paths(&self.tree), false);
        self.persist()
    }

    /// Drop every selected path, including ones no longer in the tree
    pub fn clear_selection(&mut self) -> WeaveResult<()> {
        self.ensure_rendered()?;
        self.selection.clear();
        self.persist()
    }

    /// Try again to save after a failed save
    pub fn retry_save(&mut self) -> WeaveResult<()> {
        if !self.unsaved {
            return Ok(());
        }
        self.persist()
    }

    /// Selected paths that are not part of the rendered tree
    pub fn stale_selection(&self) -> Vec<String> {
        self.selection
            .iter()
            .filter(|p| find_node(&self.tree, p).is_none())
            .map(str::to_string)
            .collect()
    }

    /// Checkbox state of a rendered node
    pub fn node_state(&self, path: &str) -> Option<SelectionState> {
        find_node(&self.tree, path).map(|n| selection_state(n, &self.selection))
    }

    fn persist(&mut self) -> WeaveResult<()> {
        let selection = self.selection.clone();
        self.store.update(|s| s.selection = selection);

        match self.backend.save(&self.selection) {
            Ok(()) => {
                self.unsaved = false;
                self.events.on_event(WeaveEvent::SelectionSaved {
                    count: self.selection.len(),
                });
                Ok(())
            }
            Err(e) => {
                self.unsaved = true;
                self.events.on_event(WeaveEvent::SaveFailed {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    fn ensure_rendered(&self) -> WeaveResult<()> {
        match self.state {
            ControllerState::Rendered => Ok(()),
            _ => Err(WeaveError::NotRendered),
        }
    }

    // ---- view --------------------------------------------------------------

    /// Visible rows in display order
    pub fn rows(&self) -> Vec<TreeRow> {
        flatten(&self.tree, &self.selection, &self.expanded)
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    /// Expand or collapse a directory. Never touches the selection.
    pub fn set_expanded(&mut self, path: &str, expanded: bool) -> WeaveResult<()> {
        let node = find_node(&self.tree, path).ok_or_else(|| WeaveError::UnknownNode {
            path: path.to_string(),
        })?;
        if !node.is_dir() {
            return Ok(());
        }
        if expanded {
            self.expanded.insert(path.to_string());
        } else {
            self.expanded.remove(path);
        }
        self.clamp_cursor();
        Ok(())
    }

    /// Flip the expansion of a directory; returns the new state
    pub fn toggle_expanded(&mut self, path: &str) -> WeaveResult<bool> {
        let expanded = !self.is_expanded(path);
        self.set_expanded(path, expanded)?;
        Ok(self.is_expanded(path))
    }

    pub fn expand_all(&mut self) {
        fn walk(nodes: &[TreeNode], out: &mut BTreeSet<String>) {
            for node in nodes.iter().filter(|n| n.is_dir()) {
                out.insert(node.path.clone());
                walk(&node.children, out);
            }
        }
        walk(&self.tree, &mut self.expanded);
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
        self.clamp_cursor();
    }

    // ---- cursor ------------------------------------------------------------

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.rows().len() {
            self.cursor += 1;
        }
    }

    /// Row under the cursor
    pub fn current_row(&self) -> Option<TreeRow> {
        self.rows().into_iter().nth(self.cursor)
    }

    /// Toggle the row under the cursor: anything not fully selected becomes
    /// selected, a fully selected row becomes unselected
    pub fn toggle_current(&mut self) -> WeaveResult<()> {
        let Some(row) = self.current_row() else {
            return Ok(());
        };
        let included = row.state != SelectionState::Selected;
        self.toggle(&row.path, included)
    }

    /// Expand the directory under the cursor
    pub fn expand_current(&mut self) -> WeaveResult<()> {
        match self.current_row() {
            Some(row) if row.has_children => self.set_expanded(&row.path, true),
            _ => Ok(()),
        }
    }

    /// Collapse the directory under the cursor, or jump to its parent
    pub fn collapse_current(&mut self) -> WeaveResult<()> {
        let Some(row) = self.current_row() else {
            return Ok(());
        };
        if row.expanded {
            return self.set_expanded(&row.path, false);
        }
        if let Some((parent, _)) = row.path.rsplit_once('/') {
            let parent = parent.to_string();
            self.set_expanded(&parent, false)?;
            if let Some(idx) = self.rows().iter().position(|r| r.path == parent) {
                self.cursor = idx;
            }
        }
        Ok(())
    }

    fn clamp_cursor(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}
