//! Event Port
//!
//! Observable interface for tree loads, selection persistence and external
//! commands. Sinks turn events into console lines or NDJSON.

use std::path::PathBuf;

/// Event emitted while working on a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeaveEvent {
    /// A tree load was requested
    LoadStarted { seq: u64 },

    /// A tree load finished and was rendered
    TreeLoaded {
        seq: u64,
        root: PathBuf,
        files: usize,
        selected: usize,
    },

    /// A tree load failed
    LoadFailed { seq: u64, message: String },

    /// A load finished after a newer one was requested and was dropped
    StaleLoadIgnored { seq: u64, latest: u64 },

    /// The saved selection was unreadable and an empty one is used instead
    SelectionDegraded { message: String },

    /// The selection was written to storage
    SelectionSaved { count: usize },

    /// Writing the selection failed; memory still holds the change
    SaveFailed { message: String },

    /// A selected file could not be read while building the context bundle
    FileSkipped { path: String, reason: String },

    /// An external command is about to run
    CommandStarted { program: String },

    /// An external command finished
    CommandFinished { program: String, code: Option<i32> },

    /// Non-fatal settings issue (e.g. an unknown key)
    Warning { message: String },
}

/// Trait for receiving events
///
/// Implementations:
/// - `ConsoleEventSink` - human-readable lines on stderr
/// - `JsonEventSink` - NDJSON on stderr
/// - `NoopEventSink` - silent
pub trait EventSink: Send + Sync {
    /// Handle an event
    fn on_event(&self, event: WeaveEvent);

    /// Whether per-file and per-command detail is wanted
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn on_event(&self, _event: WeaveEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
