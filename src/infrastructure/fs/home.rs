//! Home directory resolution with test isolation support.
//!
//! `dirs::home_dir()` ignores `HOME` on some platforms, so tests point the
//! user-level settings somewhere else through `PROMPTWEAVE_TEST_HOME`.

use std::path::PathBuf;

/// Environment variable overriding the home directory
pub const TEST_HOME_VAR: &str = "PROMPTWEAVE_TEST_HOME";

/// Home directory for promptweave's own files (user settings)
pub fn home_dir() -> Option<PathBuf> {
    std::env::var(TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// `~/.config/promptweave/config.toml`
pub fn user_settings_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".config/promptweave/config.toml"))
}

/// Expand a leading `~` using the real home directory
pub fn expand_home(path: &std::path::Path) -> PathBuf {
    let s = path.to_string_lossy();
    if s == "~" {
        return dirs::home_dir().unwrap_or_else(|| path.to_path_buf());
    }
    if let Some(rest) = s.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
