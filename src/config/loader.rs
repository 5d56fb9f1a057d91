//! Settings loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{WeaveError, WeaveResult};
use crate::infrastructure::fs::user_settings_path;

use super::types::{Settings, Verbosity};
use super::ConfigWarning;

/// Settings file name inside a workspace
pub const SETTINGS_FILE: &str = "promptweave.toml";

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> WeaveResult<(Settings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| WeaveError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((settings, warnings))
}

/// Workspace settings, then user settings, then defaults. Environment
/// overrides apply on top of whichever was found.
pub fn load_layered(workspace_root: &Path) -> WeaveResult<(Settings, Vec<ConfigWarning>)> {
    for candidate in candidate_files(workspace_root) {
        if candidate.is_file() {
            let (settings, warnings) = load_with_warnings(&candidate)?;
            return Ok((settings.with_env_overrides(), warnings));
        }
    }
    Ok((Settings::default().with_env_overrides(), Vec::new()))
}

fn candidate_files(workspace_root: &Path) -> Vec<PathBuf> {
    let mut files = vec![workspace_root.join(SETTINGS_FILE)];
    if let Some(user) = user_settings_path() {
        files.push(user);
    }
    files
}

/// Apply environment overrides read through `get_env`
pub fn with_env_overrides(
    mut settings: Settings,
    get_env: impl Fn(&str) -> Option<String>,
) -> Settings {
    if let Some(value) = get_env("PROMPTWEAVE_VERBOSITY") {
        if let Some(verbosity) = Verbosity::parse(&value) {
            settings.output.verbosity = verbosity;
        }
    }

    if let Some(dir) = get_env("PROMPTWEAVE_OUTPUT_DIR") {
        if !dir.trim().is_empty() {
            settings.output_dir = PathBuf::from(dir);
        }
    }

    if let Some(cmd) = get_env("PROMPTWEAVE_GENERATE_CMD") {
        settings.commands.generate = split_command(&cmd);
    }

    if let Some(cmd) = get_env("PROMPTWEAVE_APPLY_CMD") {
        settings.commands.apply = split_command(&cmd);
    }

    settings
}

/// Whitespace-separated argv; no quoting
fn split_command(cmd: &str) -> Vec<String> {
    cmd.split_whitespace().map(str::to_string).collect()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output_dir",
        "commands",
        "generate",
        "apply",
        "safety",
        "forbidden_roots",
        "output",
        "verbosity",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_chars.len()]
}
