//! Settings for promptweave
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PROMPTWEAVE_*)
//! 3. Workspace settings (`<workspace>/promptweave.toml`)
//! 4. User settings (`~/.config/promptweave/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{with_env_overrides, SETTINGS_FILE};
pub use types::{CommandsConfig, ColorMode, OutputConfig, SafetyConfig, Settings, Verbosity};
