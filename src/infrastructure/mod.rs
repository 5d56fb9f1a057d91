//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - tree walking, listings, atomic writes, home resolution
//! - `workspace/` - the YAML documents of a `.promptweave/` directory
//! - `backend` - `ProjectBackend` over a local workspace
//! - `process` - `CommandRunner` over `std::process`
//! - `events/` - console and NDJSON event sinks

pub mod backend;
pub mod events;
pub mod fs;
pub mod process;
pub mod workspace;

pub use backend::LocalBackend;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use process::SystemCommandRunner;
pub use workspace::Workspace;
