//! Text views for command output

pub mod report;
pub mod tree;
