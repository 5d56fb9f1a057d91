//! Domain Policies
//!
//! Business rules and policies that govern behavior.

mod source_policy;

pub use source_policy::{SourcePolicy, DEFAULT_FORBIDDEN_ROOTS};
