//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod events;
pub mod project_backend;
pub mod selection_store;

pub use command_runner::{CommandOutput, CommandRunner, CommandSpec};
pub use events::{EventSink, NoopEventSink, WeaveEvent};
pub use project_backend::ProjectBackend;
pub use selection_store::SelectionStore;
