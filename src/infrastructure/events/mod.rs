//! Event Sink Implementations
//!
//! - `ConsoleEventSink`: human-readable lines on stderr
//! - `JsonEventSink`: NDJSON for scripts

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
