//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::{
    ApplyOptions, ApplyUseCase, GenerateOptions, GenerateUseCase, TreeController, UiStore,
};
use crate::config::{ColorMode, ConfigWarning, Settings, Verbosity};
use crate::domain::ports::{EventSink, WeaveEvent};
use crate::error::WeaveResult;
use crate::infrastructure::{
    ConsoleEventSink, JsonEventSink, LocalBackend, SystemCommandRunner, Workspace,
};

use super::cli::ColorWhen;

/// Type alias for the concrete controller
pub type ConcreteTreeController = TreeController<LocalBackend>;

/// Type alias for the concrete generate use case
pub type ConcreteGenerateUseCase = GenerateUseCase<LocalBackend, SystemCommandRunner>;

/// Type alias for the concrete apply use case
pub type ConcreteApplyUseCase = ApplyUseCase<SystemCommandRunner>;

/// Workspace plus the settings that apply to it
#[derive(Debug, Clone)]
pub struct Session {
    pub workspace: Workspace,
    pub settings: Settings,
    pub warnings: Vec<ConfigWarning>,
}

impl Session {
    /// Open the workspace at `dir`, or `.promptweave` under `cwd`
    pub fn open(dir: Option<&Path>, cwd: &Path) -> WeaveResult<Self> {
        let workspace = match dir {
            Some(d) if d.is_absolute() => Workspace::new(d),
            Some(d) => Workspace::new(cwd.join(d)),
            None => Workspace::in_project(cwd),
        };
        let (settings, warnings) = Settings::load_layered(workspace.root())?;
        Ok(Self {
            workspace,
            settings,
            warnings,
        })
    }

    pub fn backend(&self) -> LocalBackend {
        LocalBackend::new(self.workspace.clone()).with_policy(self.settings.safety.policy())
    }

    /// Output directory, resolved against the workspace directory
    pub fn output_dir(&self) -> PathBuf {
        if self.settings.output_dir.is_absolute() {
            self.settings.output_dir.clone()
        } else {
            self.workspace.root().join(&self.settings.output_dir)
        }
    }

    /// Effective verbosity: the louder of settings and `-v` flags
    pub fn verbosity(&self, flag_count: u8) -> Verbosity {
        let flags = Verbosity::from_flag_count(flag_count);
        if flag_count == 0 {
            self.settings.output.verbosity
        } else {
            flags.max(self.settings.output.verbosity)
        }
    }

    /// Whether to color output; the CLI flag wins over settings
    pub fn color(&self, flag: Option<ColorWhen>, is_tty: bool) -> bool {
        let mode = match flag {
            Some(ColorWhen::Always) => ColorMode::Always,
            Some(ColorWhen::Never) => ColorMode::Never,
            Some(ColorWhen::Auto) => ColorMode::Auto,
            None => self.settings.output.color,
        };
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_tty,
        }
    }

    /// Emit one `Warning` event per unknown settings key
    pub fn report_warnings(&self, events: &dyn EventSink) {
        for warning in &self.warnings {
            events.on_event(WeaveEvent::Warning {
                message: warning.to_string(),
            });
        }
    }
}

/// Event sink for the chosen output mode
pub fn create_event_sink(json: bool, verbosity: Verbosity, color: bool) -> Arc<dyn EventSink> {
    if json {
        Arc::new(JsonEventSink::stderr())
    } else {
        Arc::new(ConsoleEventSink::stderr(verbosity, color))
    }
}

/// Create a tree controller over the session's workspace
pub fn create_tree_controller(
    session: &Session,
    events: Arc<dyn EventSink>,
) -> ConcreteTreeController {
    TreeController::new(session.backend(), events, UiStore::new())
}

/// Create a generate use case with all dependencies wired up
pub fn create_generate_use_case(
    session: &Session,
    events: Arc<dyn EventSink>,
) -> ConcreteGenerateUseCase {
    GenerateUseCase::new(session.backend(), SystemCommandRunner).with_events(events)
}

/// Create an apply use case with all dependencies wired up
pub fn create_apply_use_case(events: Arc<dyn EventSink>) -> ConcreteApplyUseCase {
    ApplyUseCase::new(SystemCommandRunner).with_events(events)
}

/// Generate options from the session's settings and formats
pub fn generate_options(session: &Session, format: &str) -> WeaveResult<GenerateOptions> {
    Ok(GenerateOptions::new(format, session.output_dir())
        .with_available_formats(session.workspace.list_formats()?)
        .with_command(session.settings.commands.generate.clone())
        .with_working_dir(session.workspace.root()))
}

/// Apply options from the session's settings
pub fn apply_options(session: &Session) -> ApplyOptions {
    ApplyOptions {
        command: session.settings.commands.apply.clone(),
        working_dir: Some(session.workspace.base().to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn session() -> (tempfile::TempDir, Session) {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::open(None, dir.path()).unwrap();
        (dir, session)
    }

    #[test]
    fn default_workspace_lives_in_project() {
        let (dir, session) = session();
        assert_eq!(session.workspace.root(), dir.path().join(".promptweave"));
        assert_eq!(
            session.output_dir(),
            dir.path().join(".promptweave").join("generated")
        );
    }

    #[test]
    fn relative_workspace_flag_resolves_against_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::open(Some(Path::new("ws")), dir.path()).unwrap();
        assert_eq!(session.workspace.root(), dir.path().join("ws"));
        assert_eq!(session.workspace.base(), dir.path());
    }

    #[test]
    fn workspace_settings_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let ws = dir.path().join(".promptweave");
        fs::create_dir_all(&ws).unwrap();
        fs::write(
            ws.join("promptweave.toml"),
            "output_dir = \"/tmp/out\"\n[commands]\ngenerate = [\"gen\", \"{format}\"]\n",
        )
        .unwrap();

        let session = Session::open(None, dir.path()).unwrap();
        let options = generate_options(&session, "markdown").unwrap();

        assert_eq!(options.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(options.command, vec!["gen", "{format}"]);
    }

    #[test]
    fn verbosity_flags_only_raise_the_level() {
        let (_dir, mut session) = session();
        session.settings.output.verbosity = Verbosity::Debug;
        assert_eq!(session.verbosity(1), Verbosity::Debug);

        session.settings.output.verbosity = Verbosity::Quiet;
        assert_eq!(session.verbosity(0), Verbosity::Quiet);
        assert_eq!(session.verbosity(1), Verbosity::Verbose);
    }

    #[test]
    fn color_flag_overrides_settings() {
        let (_dir, mut session) = session();
        session.settings.output.color = ColorMode::Always;
        assert!(session.color(None, false));
        assert!(!session.color(Some(ColorWhen::Never), true));
        assert!(session.color(Some(ColorWhen::Auto), true));
    }
}
