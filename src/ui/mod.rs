//! Terminal presentation for the binary

pub mod picker;
pub mod terminal;
pub mod theme;
pub mod views;
