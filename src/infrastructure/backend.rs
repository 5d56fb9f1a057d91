//! Local project backend
//!
//! Joins the workspace documents with the tree walker: the tree is built
//! from the configured source directory using the merged exclusion
//! patterns, and the selection lives in `user_config.yaml`.

use std::path::{Path, PathBuf};

use crate::domain::entities::TreeNode;
use crate::domain::policies::SourcePolicy;
use crate::domain::ports::{ProjectBackend, SelectionStore};
use crate::domain::value_objects::{ExclusionMatcher, SelectionSet};
use crate::error::WeaveResult;
use crate::infrastructure::fs::build_tree;
use crate::infrastructure::workspace::Workspace;

/// `ProjectBackend` over a workspace on the local disk
#[derive(Debug, Clone)]
pub struct LocalBackend {
    workspace: Workspace,
    policy: SourcePolicy,
}

impl LocalBackend {
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace,
            policy: SourcePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SourcePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Exclusion matcher for the current patterns
    pub fn matcher(&self) -> WeaveResult<ExclusionMatcher> {
        ExclusionMatcher::new(self.workspace.exclude_patterns()?)
    }

    /// Source directory after the policy check
    pub fn checked_source(&self) -> WeaveResult<PathBuf> {
        let source = self.workspace.source_directory()?;
        self.policy.check(&source, self.workspace.base())?;
        Ok(source)
    }
}

impl SelectionStore for LocalBackend {
    fn load(&self) -> WeaveResult<SelectionSet> {
        self.workspace.selected_files()
    }

    fn save(&self, selection: &SelectionSet) -> WeaveResult<()> {
        self.workspace.save_selected_files(selection)
    }
}

impl ProjectBackend for LocalBackend {
    fn source_directory(&self) -> WeaveResult<PathBuf> {
        self.workspace.source_directory()
    }

    fn set_source_directory(&self, dir: &Path) -> WeaveResult<()> {
        self.policy.check(dir, self.workspace.base())?;
        self.workspace.update_source(dir)
    }

    fn file_structure(&self) -> WeaveResult<Vec<TreeNode>> {
        let source = self.checked_source()?;
        build_tree(&source, &self.matcher()?)
    }
}
