//! Generate Use Case
//!
//! 1. Check the format and the generator command
//! 2. Build the filtered tree and load the selection
//! 3. Write the outline and the context bundle into the output directory
//! 4. Run the generator and return its stdout as the prompt

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::domain::ports::{
    CommandRunner, CommandSpec, EventSink, NoopEventSink, ProjectBackend, WeaveEvent,
};
use crate::domain::services::{render_outline, ContextBundle};
use crate::domain::value_objects::SelectionSet;
use crate::error::{WeaveError, WeaveResult};
use crate::infrastructure::fs::atomic_write;

use super::options::GenerateOptions;
use super::result::GenerateResult;

/// Outline file name inside the output directory
pub const STRUCTURE_FILE: &str = "code_structure.txt";
/// Context bundle file name inside the output directory
pub const CONTEXT_FILE: &str = "code_context.json";

/// Generate use case - selection to prompt
pub struct GenerateUseCase<B, R>
where
    B: ProjectBackend,
    R: CommandRunner,
{
    backend: B,
    runner: R,
    events: Arc<dyn EventSink>,
}

impl<B, R> GenerateUseCase<B, R>
where
    B: ProjectBackend,
    R: CommandRunner,
{
    pub fn new(backend: B, runner: R) -> Self {
        Self {
            backend,
            runner,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn execute(&self, options: &GenerateOptions) -> WeaveResult<GenerateResult> {
        if !options.available_formats.contains(&options.format) {
            let available = if options.available_formats.is_empty() {
                "none".to_string()
            } else {
                options.available_formats.join(", ")
            };
            return Err(WeaveError::UnknownFormat {
                name: options.format.clone(),
                available,
            });
        }
        if options.command.is_empty() {
            return Err(WeaveError::CommandNotConfigured { step: "generate" });
        }

        let source = self.backend.source_directory()?;
        let tree = self.backend.file_structure()?;
        let selection = self.load_selection();

        let root_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.display().to_string());
        let outline = render_outline(&root_name, &tree);
        let (bundle, skipped) =
            ContextBundle::assemble(&tree, &selection, |p| fs::read_to_string(source.join(p)));

        for file in &skipped {
            self.events.on_event(WeaveEvent::FileSkipped {
                path: file.path.clone(),
                reason: file.reason.clone(),
            });
        }

        fs::create_dir_all(&options.output_dir)?;
        let structure_path = options.output_dir.join(STRUCTURE_FILE);
        let context_path = options.output_dir.join(CONTEXT_FILE);
        atomic_write(&structure_path, outline.as_bytes())?;
        atomic_write(&context_path, serde_json::to_string_pretty(&bundle)?.as_bytes())?;

        let prompt = self.run_generator(options, &options.output_dir)?;

        Ok(GenerateResult {
            prompt,
            structure_path,
            context_path,
            files: bundle.len(),
            skipped,
        })
    }

    fn load_selection(&self) -> SelectionSet {
        self.backend.load().unwrap_or_else(|e| {
            self.events.on_event(WeaveEvent::SelectionDegraded {
                message: e.to_string(),
            });
            SelectionSet::new()
        })
    }

    fn run_generator(&self, options: &GenerateOptions, output_dir: &Path) -> WeaveResult<String> {
        let output = output_dir.display().to_string();
        let mut spec = CommandSpec::from_template(
            &options.command,
            &[("format", &options.format), ("output", &output)],
        )
        .ok_or(WeaveError::CommandNotConfigured { step: "generate" })?;
        if let Some(dir) = &options.working_dir {
            spec = spec.current_dir(dir);
        }

        self.events.on_event(WeaveEvent::CommandStarted {
            program: spec.program.clone(),
        });
        let result = self.runner.run(&spec)?;
        self.events.on_event(WeaveEvent::CommandFinished {
            program: spec.program.clone(),
            code: result.code,
        });

        if !result.success() {
            return Err(WeaveError::CommandFailed {
                program: spec.program,
                code: result.code,
                details: result.details().to_string(),
            });
        }
        Ok(result.stdout)
    }
}
