//! Apply Use Case
//!
//! Hands a pasted assistant response to the external applier:
//! 1. Write the response to a temporary file
//! 2. Run the applier with `{response}` replaced by that file's path
//! 3. Parse the change summary from its stdout
//!
//! The temporary file is removed when the run finishes, whatever the outcome.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::ports::{CommandRunner, CommandSpec, EventSink, NoopEventSink, WeaveEvent};
use crate::domain::services::{parse_change_summary, ChangeSummary};
use crate::error::{WeaveError, WeaveResult};

const RESPONSE_PLACEHOLDER: &str = "{response}";

/// Options for the apply use case
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// Applier argv. The response path replaces `{response}`, or is
    /// appended when no argument mentions it.
    pub command: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

/// Result of a successful apply
#[derive(Debug, Clone)]
pub struct ApplyResult {
    /// Applier stdout
    pub output: String,
    pub changes: Vec<ChangeSummary>,
}

/// Apply use case - response to edits on disk
pub struct ApplyUseCase<R: CommandRunner> {
    runner: R,
    events: Arc<dyn EventSink>,
}

impl<R: CommandRunner> ApplyUseCase<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn execute(&self, response: &str, options: &ApplyOptions) -> WeaveResult<ApplyResult> {
        if response.trim().is_empty() {
            return Err(WeaveError::EmptyResponse);
        }
        if options.command.is_empty() {
            return Err(WeaveError::CommandNotConfigured { step: "apply" });
        }

        let mut file = tempfile::Builder::new()
            .prefix("response-")
            .suffix(".txt")
            .tempfile()?;
        file.write_all(response.as_bytes())?;
        file.flush()?;

        let response_path = file.path().display().to_string();
        let spec = self.spec_for(options, &response_path)?;

        self.events.on_event(WeaveEvent::CommandStarted {
            program: spec.program.clone(),
        });
        let output = self.runner.run(&spec)?;
        self.events.on_event(WeaveEvent::CommandFinished {
            program: spec.program.clone(),
            code: output.code,
        });
        drop(file);

        if !output.success() {
            return Err(WeaveError::CommandFailed {
                program: spec.program,
                code: output.code,
                details: output.details().to_string(),
            });
        }

        Ok(ApplyResult {
            changes: parse_change_summary(&output.stdout),
            output: output.stdout,
        })
    }

    fn spec_for(&self, options: &ApplyOptions, response_path: &str) -> WeaveResult<CommandSpec> {
        let mentions_response = options
            .command
            .iter()
            .any(|a| a.contains(RESPONSE_PLACEHOLDER));

        let mut spec =
            CommandSpec::from_template(&options.command, &[("response", response_path)])
                .ok_or(WeaveError::CommandNotConfigured { step: "apply" })?;
        if !mentions_response {
            spec = spec.arg(response_path);
        }
        if let Some(dir) = &options.working_dir {
            spec = spec.current_dir(dir);
        }
        Ok(spec)
    }
}
