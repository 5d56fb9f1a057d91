//! Settings type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::policies::{SourcePolicy, DEFAULT_FORBIDDEN_ROOTS};
use crate::error::WeaveResult;

use super::loader;
use super::ConfigWarning;

/// External command configuration.
///
/// Each command is an argv list. `{format}` and `{output}` are substituted
/// in the generator, `{response}` in the applier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CommandsConfig {
    #[serde(default)]
    pub generate: Vec<String>,

    #[serde(default)]
    pub apply: Vec<String>,
}

/// Source directory safety rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyConfig {
    #[serde(default = "default_forbidden_roots")]
    pub forbidden_roots: Vec<PathBuf>,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            forbidden_roots: default_forbidden_roots(),
        }
    }
}

fn default_forbidden_roots() -> Vec<PathBuf> {
    DEFAULT_FORBIDDEN_ROOTS.iter().map(PathBuf::from).collect()
}

impl SafetyConfig {
    pub fn policy(&self) -> SourcePolicy {
        SourcePolicy::new(self.forbidden_roots.iter().cloned())
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Some(Self::Quiet),
            "normal" => Some(Self::Normal),
            "verbose" => Some(Self::Verbose),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }

    /// Level reached by repeating `-v`
    pub fn from_flag_count(count: u8) -> Self {
        match count {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }
}

/// Tool settings (`promptweave.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Where `code_structure.txt` and `code_context.json` are written,
    /// relative to the workspace directory
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub commands: CommandsConfig,

    #[serde(default)]
    pub safety: SafetyConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            commands: CommandsConfig::default(),
            safety: SafetyConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Settings {
    /// Load one settings file
    pub fn load(path: &Path) -> WeaveResult<Self> {
        let (settings, _warnings) = loader::load_with_warnings(path)?;
        Ok(settings)
    }

    /// Load one settings file and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> WeaveResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Workspace settings, else user settings, else defaults; then env
    pub fn load_layered(workspace_root: &Path) -> WeaveResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(workspace_root)
    }

    /// Apply `PROMPTWEAVE_*` environment overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }
}
