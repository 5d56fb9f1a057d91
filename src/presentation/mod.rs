//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions (`Cli`, `Commands`)
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use promptweave::presentation::factory::{self, Session};
//!
//! let session = Session::open(None, &cwd)?;
//! let mut controller = factory::create_tree_controller(&session, events);
//! controller.reload()?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, ConfigCommands};
pub use factory::Session;
