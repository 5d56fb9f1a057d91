//! Workspace directory
//!
//! A workspace (default `.promptweave/` in the project directory) holds the
//! YAML documents the tool reads and writes:
//!
//! ```text
//! .promptweave/
//! ├── user_config.yaml      source_directory, exclude_patterns, selected_files, ...
//! ├── ignore_config.yaml    ignore_patterns merged into every tree build
//! ├── final_request.yaml    final_request
//! ├── promptweave.toml      tool settings (optional)
//! ├── formats/*.xml         output formats
//! ├── templates/*.yaml      config templates
//! └── *.yaml                named configs
//! ```
//!
//! Relative `source_directory` values resolve against the directory that
//! contains the workspace.

mod documents;
#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{FileName, SelectionSet};
use crate::error::{WeaveError, WeaveResult};
use crate::infrastructure::fs::{atomic_write, list_dir, DirListing, FileLock};

pub use documents::{FinalRequest, IgnoreConfig, UserConfig};

/// Workspace directory name used when none is given
pub const DEFAULT_WORKSPACE_DIR: &str = ".promptweave";

const USER_CONFIG: &str = "user_config.yaml";
const IGNORE_CONFIG: &str = "ignore_config.yaml";
const FINAL_REQUEST: &str = "final_request.yaml";
const RESERVED_CONFIGS: &[&str] = &[USER_CONFIG, IGNORE_CONFIG, FINAL_REQUEST];
const FORMATS_DIR: &str = "formats";
const TEMPLATES_DIR: &str = "templates";

const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    ".git",
    DEFAULT_WORKSPACE_DIR,
    "node_modules",
    "target",
    "__pycache__",
    "*.pyc",
    ".DS_Store",
];

const DEFAULT_FORMAT: &str = r#"<format>
  <name>markdown</name>
  <description>Plain markdown prompt with fenced code blocks</description>
</format>
"#;

const DEFAULT_TEMPLATE: &str = r#"project_name: ""
objectives: []
code_conventions:
  language_stack:
    frontend: ""
    backend: ""
"#;

/// Handle on a workspace directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
    base: PathBuf,
}

impl Workspace {
    /// Workspace at `root`; relative sources resolve against its parent
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let base = match root.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self { root, base }
    }

    /// Default workspace inside `project_dir`
    pub fn in_project(project_dir: &Path) -> Self {
        Self::new(project_dir.join(DEFAULT_WORKSPACE_DIR))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory relative source paths are resolved against
    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    pub fn user_config_path(&self) -> PathBuf {
        self.root.join(USER_CONFIG)
    }

    pub fn ignore_config_path(&self) -> PathBuf {
        self.root.join(IGNORE_CONFIG)
    }

    pub fn final_request_path(&self) -> PathBuf {
        self.root.join(FINAL_REQUEST)
    }

    pub fn formats_dir(&self) -> PathBuf {
        self.root.join(FORMATS_DIR)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    /// Create the workspace layout. Existing files are left alone.
    ///
    /// Returns the files that were written.
    pub fn init(&self, source: Option<&Path>) -> WeaveResult<Vec<PathBuf>> {
        fs::create_dir_all(self.formats_dir())?;
        fs::create_dir_all(self.templates_dir())?;

        let user_config = UserConfig {
            source_directory: Some(source.map(Path::to_path_buf).unwrap_or_else(|| ".".into())),
            selected_files: serde_yaml_ng::Value::Sequence(Vec::new()),
            ..UserConfig::default()
        };
        let ignore_config = IgnoreConfig {
            ignore_patterns: DEFAULT_IGNORE_PATTERNS.iter().map(|s| s.to_string()).collect(),
        };

        let seeds = [
            (self.user_config_path(), serde_yaml_ng::to_string(&user_config)?),
            (self.ignore_config_path(), serde_yaml_ng::to_string(&ignore_config)?),
            (
                self.final_request_path(),
                serde_yaml_ng::to_string(&FinalRequest::default())?,
            ),
            (self.formats_dir().join("markdown.xml"), DEFAULT_FORMAT.to_string()),
            (
                self.templates_dir().join("project_data.yaml"),
                DEFAULT_TEMPLATE.to_string(),
            ),
        ];

        let mut created = Vec::new();
        for (path, content) in seeds {
            if path.exists() {
                continue;
            }
            atomic_write(&path, content.as_bytes())?;
            created.push(path);
        }
        Ok(created)
    }

    // ---- user_config.yaml ------------------------------------------------

    /// Read `user_config.yaml`; a missing file reads as empty
    pub fn read_user_config(&self) -> WeaveResult<UserConfig> {
        let path = self.user_config_path();
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(UserConfig::default()),
            Err(e) => {
                return Err(WeaveError::PersistenceRead {
                    path,
                    message: e.to_string(),
                })
            }
        };
        documents::parse(&content).map_err(|e| WeaveError::PersistenceRead {
            path,
            message: e.to_string(),
        })
    }

    /// Locked read-modify-write of `user_config.yaml`
    pub fn update_user_config<F>(&self, mutate: F) -> WeaveResult<UserConfig>
    where
        F: FnOnce(&mut UserConfig),
    {
        let path = self.user_config_path();
        let write_err = |e: &dyn std::fmt::Display| WeaveError::PersistenceWrite {
            path: path.clone(),
            message: e.to_string(),
        };

        let _lock = FileLock::acquire(&path).map_err(|e| write_err(&e))?;
        let mut config = self.read_user_config()?;
        mutate(&mut config);

        let yaml = serde_yaml_ng::to_string(&config).map_err(|e| write_err(&e))?;
        atomic_write(&path, yaml.as_bytes()).map_err(|e| write_err(&e))?;
        Ok(config)
    }

    /// Saved selection. Only `selected_files` is decoded here, so a bad
    /// value fails this call without affecting the other keys.
    pub fn selected_files(&self) -> WeaveResult<SelectionSet> {
        let path = self.user_config_path();
        self.read_user_config()?
            .selection()
            .map_err(|e| WeaveError::PersistenceRead {
                path,
                message: format!("selected_files: {}", e),
            })
    }

    /// Replace `selected_files`, overwriting a malformed value. Every
    /// failure is reported as `PersistenceWrite`.
    pub fn save_selected_files(&self, selection: &SelectionSet) -> WeaveResult<()> {
        let path = self.user_config_path();
        let write_err = |message: String| WeaveError::PersistenceWrite {
            path: path.clone(),
            message,
        };

        let value = serde_yaml_ng::to_value(selection).map_err(|e| write_err(e.to_string()))?;
        self.update_user_config(|c| c.selected_files = value)
            .map(|_| ())
            .map_err(|e| match e {
                WeaveError::PersistenceWrite { .. } => e,
                other => write_err(other.to_string()),
            })
    }

    /// Configured source directory, resolved against the workspace base
    pub fn source_directory(&self) -> WeaveResult<PathBuf> {
        let configured = self
            .read_user_config()?
            .source_directory
            .ok_or(WeaveError::SourceNotConfigured)?;
        Ok(self.resolve(&configured))
    }

    /// Store a new source directory as given
    pub fn update_source(&self, dir: &Path) -> WeaveResult<()> {
        self.update_user_config(|c| c.source_directory = Some(dir.to_path_buf()))?;
        Ok(())
    }

    /// Record which named configs are in use
    pub fn update_selected_configs(
        &self,
        project_data: Option<&str>,
        user_config: Option<&str>,
    ) -> WeaveResult<()> {
        let project_data = project_data
            .map(|n| FileName::with_extension(n, "yaml", &self.root))
            .transpose()?;
        let user_config = user_config
            .map(|n| FileName::with_extension(n, "yaml", &self.root))
            .transpose()?;

        self.update_user_config(|c| {
            c.selected_project_data = project_data.map(|n| n.to_string());
            c.selected_user_config = user_config.map(|n| n.to_string());
        })?;
        Ok(())
    }

    // ---- exclusion -------------------------------------------------------

    pub fn ignore_patterns(&self) -> WeaveResult<Vec<String>> {
        let path = self.ignore_config_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path)?;
        let config: IgnoreConfig = documents::parse(&content).map_err(|e| WeaveError::Config {
            file: path,
            message: e.to_string(),
        })?;
        Ok(config.ignore_patterns)
    }

    /// `exclude_patterns` followed by `ignore_patterns`, without duplicates
    pub fn exclude_patterns(&self) -> WeaveResult<Vec<String>> {
        let mut patterns = self.read_user_config()?.exclude_patterns;
        for pattern in self.ignore_patterns()? {
            if !patterns.contains(&pattern) {
                patterns.push(pattern);
            }
        }
        Ok(patterns)
    }

    // ---- final_request.yaml ----------------------------------------------

    pub fn final_request(&self) -> WeaveResult<String> {
        let path = self.final_request_path();
        if !path.exists() {
            return Ok(String::new());
        }
        let doc: FinalRequest = documents::parse(&fs::read_to_string(&path)?)?;
        Ok(doc.final_request)
    }

    pub fn update_final_request(&self, text: &str) -> WeaveResult<()> {
        let doc = FinalRequest {
            final_request: text.to_string(),
        };
        atomic_write(&self.final_request_path(), serde_yaml_ng::to_string(&doc)?.as_bytes())?;
        Ok(())
    }

    // ---- formats, templates, named configs ---------------------------------

    /// Format names (`formats/*.xml` without the extension)
    pub fn list_formats(&self) -> WeaveResult<Vec<String>> {
        Ok(files_with_extension(&self.formats_dir(), "xml")?
            .into_iter()
            .filter_map(|f| f.strip_suffix(".xml").map(str::to_string))
            .collect())
    }

    /// Fail with `UnknownFormat` unless `name` is listed
    pub fn ensure_format(&self, name: &str) -> WeaveResult<()> {
        let formats = self.list_formats()?;
        if formats.iter().any(|f| f == name) {
            return Ok(());
        }
        Err(WeaveError::UnknownFormat {
            name: name.to_string(),
            available: if formats.is_empty() {
                "none".to_string()
            } else {
                formats.join(", ")
            },
        })
    }

    pub fn list_templates(&self) -> WeaveResult<Vec<String>> {
        files_with_extension(&self.templates_dir(), "yaml")
    }

    /// Every `*.yaml` directly in the workspace root
    pub fn list_configs(&self) -> WeaveResult<Vec<String>> {
        files_with_extension(&self.root, "yaml")
    }

    pub fn config_content(&self, name: &str) -> WeaveResult<String> {
        let name = FileName::with_extension(name, "yaml", &self.root)?;
        Ok(fs::read_to_string(name.within(&self.root))?)
    }

    pub fn template_content(&self, template: &str) -> WeaveResult<String> {
        let dir = self.templates_dir();
        let name = FileName::with_extension(template, "yaml", &dir)?;
        Ok(fs::read_to_string(name.within(&dir))?)
    }

    /// Copy a template into a new named config
    pub fn create_config_from_template(&self, template: &str, name: &str) -> WeaveResult<PathBuf> {
        let target = self.new_config_path(name)?;
        let content = self.template_content(template)?;
        atomic_write(&target, content.as_bytes())?;
        Ok(target)
    }

    /// Write arbitrary YAML data as a new named config
    pub fn create_custom_config(
        &self,
        name: &str,
        data: &serde_yaml_ng::Value,
    ) -> WeaveResult<PathBuf> {
        let target = self.new_config_path(name)?;
        atomic_write(&target, serde_yaml_ng::to_string(data)?.as_bytes())?;
        Ok(target)
    }

    /// Target of a named config. The workspace's own documents are refused,
    /// ignoring case.
    fn new_config_path(&self, name: &str) -> WeaveResult<PathBuf> {
        let name = FileName::with_extension(name, "yaml", &self.root)?;
        if RESERVED_CONFIGS
            .iter()
            .any(|r| r.eq_ignore_ascii_case(name.as_str()))
        {
            return Err(WeaveError::ReservedName {
                name: name.to_string(),
            });
        }
        Ok(name.within(&self.root))
    }

    // ---- browsing ----------------------------------------------------------

    /// List `dir` (default: the workspace base)
    pub fn list_dir(&self, dir: Option<&Path>) -> WeaveResult<DirListing> {
        match dir {
            Some(d) => list_dir(&self.resolve(d)),
            None => list_dir(&self.base),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        let path = crate::infrastructure::fs::expand_home(path);
        if path.is_absolute() {
            path
        } else {
            self.base.join(path)
        }
    }
}

/// Sorted names of the files in `dir` ending in `.{ext}`
fn files_with_extension(dir: &Path, ext: &str) -> WeaveResult<Vec<String>> {
    let suffix = format!(".{}", ext);
    let listing = list_dir(dir)?;
    Ok(listing
        .files
        .into_iter()
        .filter(|f| f.ends_with(&suffix))
        .collect())
}
