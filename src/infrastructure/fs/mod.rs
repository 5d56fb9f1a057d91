//! File system helpers
//!
//! Tree walking, directory listing, atomic writes and home resolution.

mod atomic;
mod home;
mod listing;
mod walker;

pub use atomic::{atomic_write, FileLock};
pub use home::{expand_home, home_dir, user_settings_path, TEST_HOME_VAR};
pub use listing::{list_dir, DirListing};
pub use walker::build_tree;
