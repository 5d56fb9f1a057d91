//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod exclusion;
mod file_name;
mod selection;

pub use config_warning::ConfigWarning;
pub use exclusion::{is_excluded, normalize_path, ExclusionMatcher};
pub use file_name::FileName;
pub use selection::{toggle, SelectionSet};
