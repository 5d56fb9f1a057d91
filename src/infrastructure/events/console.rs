//! Console Event Sink
//!
//! Human-readable event lines on stderr, gated by verbosity.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::{Color, Stylize};

use crate::config::Verbosity;
use crate::domain::ports::{EventSink, WeaveEvent};

/// Severity used to gate and color a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Warn,
    Info,
    Debug,
}

impl Level {
    fn min_verbosity(self) -> Verbosity {
        match self {
            Level::Warn => Verbosity::Quiet,
            Level::Info => Verbosity::Verbose,
            Level::Debug => Verbosity::Debug,
        }
    }

    fn color(self) -> Color {
        match self {
            Level::Warn => Color::Yellow,
            Level::Info => Color::Cyan,
            Level::Debug => Color::DarkGrey,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Level::Warn => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }
}

/// Event sink printing to stderr
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbosity: Verbosity,
    color: bool,
}

impl ConsoleEventSink {
    pub fn stderr(verbosity: Verbosity, color: bool) -> Self {
        Self::with_writer(io::stderr(), verbosity, color)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        verbosity: Verbosity,
        color: bool,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbosity,
            color,
        }
    }

    fn line(&self, level: Level, message: String) {
        if self.verbosity < level.min_verbosity() {
            return;
        }
        let tag = if self.color {
            format!("{}", level.tag().with(level.color()))
        } else {
            level.tag().to_string()
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}: {}", tag, message);
            let _ = writer.flush();
        }
    }
}

impl EventSink for ConsoleEventSink {
    fn on_event(&self, event: WeaveEvent) {
        match event {
            WeaveEvent::LoadStarted { seq } => {
                self.line(Level::Debug, format!("load #{} started", seq))
            }
            WeaveEvent::TreeLoaded {
                seq,
                root,
                files,
                selected,
            } => self.line(
                Level::Info,
                format!(
                    "load #{}: {} files under {}, {} selected",
                    seq,
                    files,
                    root.display(),
                    selected
                ),
            ),
            WeaveEvent::LoadFailed { seq, message } => {
                self.line(Level::Warn, format!("load #{} failed: {}", seq, message))
            }
            WeaveEvent::StaleLoadIgnored { seq, latest } => self.line(
                Level::Debug,
                format!("load #{} ignored, #{} is newer", seq, latest),
            ),
            WeaveEvent::SelectionDegraded { message } => self.line(
                Level::Warn,
                format!("saved selection unreadable, starting empty ({})", message),
            ),
            WeaveEvent::SelectionSaved { count } => {
                self.line(Level::Debug, format!("saved {} selected paths", count))
            }
            WeaveEvent::SaveFailed { message } => {
                self.line(Level::Warn, format!("selection not saved: {}", message))
            }
            WeaveEvent::FileSkipped { path, reason } => {
                self.line(Level::Warn, format!("skipped {}: {}", path, reason))
            }
            WeaveEvent::CommandStarted { program } => {
                self.line(Level::Info, format!("running {}", program))
            }
            WeaveEvent::CommandFinished { program, code } => self.line(
                Level::Info,
                match code {
                    Some(code) => format!("{} exited with {}", program, code),
                    None => format!("{} was terminated by a signal", program),
                },
            ),
            WeaveEvent::Warning { message } => self.line(Level::Warn, message),
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }
}
