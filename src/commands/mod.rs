//! Command handlers
//!
//! Each handler receives a `CommandContext` built once from the global flags.

pub mod configs;
pub mod generate;
pub mod init;
pub mod pick;
pub mod selection;
pub mod tree;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use promptweave::domain::ports::EventSink;
use promptweave::presentation::factory::{self, Session};
use promptweave::presentation::Cli;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Everything a handler needs besides its own arguments
pub struct CommandContext {
    pub session: Session,
    pub events: Arc<dyn EventSink>,
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
    pub caps: TerminalCapabilities,
}

impl CommandContext {
    pub fn from_cli(cli: &Cli, cwd: &Path) -> Result<Self> {
        let session = Session::open(cli.workspace.as_deref(), cwd)?;
        let caps = detect_capabilities();
        let color = !cli.json && session.color(cli.color, caps.supports_color);
        let unicode = caps.supports_unicode && session.settings.output.unicode;
        let events = factory::create_event_sink(cli.json, session.verbosity(cli.verbose), color);
        session.report_warnings(events.as_ref());

        Ok(Self {
            session,
            events,
            json: cli.json,
            color,
            unicode,
            caps,
        })
    }

    pub fn controller(&self) -> factory::ConcreteTreeController {
        factory::create_tree_controller(&self.session, Arc::clone(&self.events))
    }

    /// Controller with the tree already loaded
    pub fn loaded_controller(&self) -> Result<factory::ConcreteTreeController> {
        let mut controller = self.controller();
        controller.reload()?;
        Ok(controller)
    }
}

/// Pretty JSON on stdout
pub fn emit_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
