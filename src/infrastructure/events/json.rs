//! JSON Event Sink
//!
//! Outputs events as NDJSON for scripts and editor integrations.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{EventSink, WeaveEvent};

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a JSON event sink writing to stderr, so stdout stays free
    /// for the command's own JSON result
    pub fn stderr() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl EventSink for JsonEventSink {
    fn on_event(&self, event: WeaveEvent) {
        let json = match event {
            WeaveEvent::LoadStarted { seq } => serde_json::json!({
                "event": "load_started",
                "seq": seq,
            }),

            WeaveEvent::TreeLoaded {
                seq,
                root,
                files,
                selected,
            } => serde_json::json!({
                "event": "tree_loaded",
                "seq": seq,
                "root": root.display().to_string(),
                "files": files,
                "selected": selected,
            }),

            WeaveEvent::LoadFailed { seq, message } => serde_json::json!({
                "event": "load_failed",
                "seq": seq,
                "error": message,
            }),

            WeaveEvent::StaleLoadIgnored { seq, latest } => serde_json::json!({
                "event": "stale_load_ignored",
                "seq": seq,
                "latest": latest,
            }),

            WeaveEvent::SelectionDegraded { message } => serde_json::json!({
                "event": "selection_degraded",
                "error": message,
            }),

            WeaveEvent::SelectionSaved { count } => serde_json::json!({
                "event": "selection_saved",
                "count": count,
            }),

            WeaveEvent::SaveFailed { message } => serde_json::json!({
                "event": "save_failed",
                "error": message,
            }),

            WeaveEvent::FileSkipped { path, reason } => serde_json::json!({
                "event": "file_skipped",
                "path": path,
                "reason": reason,
            }),

            WeaveEvent::CommandStarted { program } => serde_json::json!({
                "event": "command_started",
                "program": program,
            }),

            WeaveEvent::CommandFinished { program, code } => {
                let status = if code == Some(0) {
                    "success"
                } else {
                    "failure"
                };
                serde_json::json!({
                    "event": "command_finished",
                    "program": program,
                    "code": code,
                    "status": status,
                })
            }

            WeaveEvent::Warning { message } => serde_json::json!({
                "event": "warning",
                "message": message,
            }),
        };

        self.write_event(json);
    }
}
