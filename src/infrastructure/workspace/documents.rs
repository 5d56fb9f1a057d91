//! YAML documents stored in the workspace

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::value_objects::SelectionSet;

/// `user_config.yaml`
///
/// Keys this tool does not know about are kept in `extra` and written back
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_directory: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_patterns: Vec<String>,

    /// Kept undecoded so a malformed selection never hides the source
    /// directory or the patterns. See [`UserConfig::selection`].
    #[serde(default, skip_serializing_if = "serde_yaml_ng::Value::is_null")]
    pub selected_files: serde_yaml_ng::Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_project_data: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_user_config: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml_ng::Value>,
}

impl UserConfig {
    /// Decode `selected_files`; a missing or null entry is an empty set
    pub fn selection(&self) -> Result<SelectionSet, serde_yaml_ng::Error> {
        if self.selected_files.is_null() {
            return Ok(SelectionSet::new());
        }
        serde_yaml_ng::from_value(self.selected_files.clone())
    }
}

/// `ignore_config.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreConfig {
    #[serde(default, deserialize_with = "nullable")]
    pub ignore_patterns: Vec<String>,
}

/// `final_request.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalRequest {
    #[serde(default, deserialize_with = "nullable")]
    pub final_request: String,
}

/// Treat an explicit `null` like a missing key
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a YAML document, treating an empty file as the default value
pub fn parse<T>(content: &str) -> Result<T, serde_yaml_ng::Error>
where
    T: for<'de> Deserialize<'de> + Default,
{
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml_ng::from_str(content)
}
