//! Interactive tree picker
//!
//! A raw-mode terminal loop over a `TreeController`. Every selection change
//! is saved immediately by the controller, so quitting never discards work.
//!
//! # Module Structure
//!
//! - `input` - Keyboard mapping (`key_to_action`)
//! - `render` - String rendering of rows, status and help bars

mod input;
mod render;

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};

use promptweave::application::TreeController;
use promptweave::domain::entities::files;
use promptweave::domain::ports::ProjectBackend;
use promptweave::WeaveResult;

pub use input::{key_to_action, PickerAction};
use render::{render_help_bar, render_row, render_status_bar, rule, visible_window};

/// Lines taken by the header, rule, status and help bars
const CHROME_LINES: u16 = 7;

/// Restores the terminal on every exit path
struct RawModeGuard;

impl RawModeGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = execute!(out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Apply one action to the controller. Returns `false` to stop.
pub fn handle_action<B: ProjectBackend>(
    controller: &mut TreeController<B>,
    action: PickerAction,
) -> WeaveResult<bool> {
    match action {
        PickerAction::Up => controller.cursor_up(),
        PickerAction::Down => controller.cursor_down(),
        PickerAction::Toggle => controller.toggle_current()?,
        PickerAction::Expand => controller.expand_current()?,
        PickerAction::Collapse => controller.collapse_current()?,
        PickerAction::SelectAll => controller.select_all()?,
        PickerAction::SelectNone => controller.deselect_all()?,
        PickerAction::ExpandAll => controller.expand_all(),
        PickerAction::CollapseAll => controller.collapse_all(),
        PickerAction::Reload => {
            controller.reload()?;
        }
        PickerAction::RetrySave => controller.retry_save()?,
        PickerAction::Quit => return Ok(false),
    }
    Ok(true)
}

/// Run the picker until the user quits. The tree must already be loaded.
pub fn run_picker<B: ProjectBackend>(
    controller: &mut TreeController<B>,
    title: &str,
    unicode: bool,
    color: bool,
) -> io::Result<()> {
    // Errors reach the store through the controller; the loop only renders
    // what the store last reported.
    let store_error = Arc::new(Mutex::new(None::<String>));
    let sink = Arc::clone(&store_error);
    let _subscription = controller.store().subscribe(move |state| {
        if let Ok(mut slot) = sink.lock() {
            slot.clone_from(&state.error);
        }
    });

    let mut stdout = io::stdout();
    let _guard = RawModeGuard::enter(&mut stdout)?;
    let mut message: Option<String> = None;

    loop {
        let error = store_error.lock().ok().and_then(|e| e.clone());
        draw(
            &mut stdout,
            controller,
            title,
            error.as_deref().or(message.as_deref()),
            unicode,
            color,
        )?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = key_to_action(key) else {
            continue;
        };

        match handle_action(controller, action) {
            Ok(true) => message = None,
            Ok(false) => break,
            Err(e) => message = Some(e.to_string()),
        }
    }

    Ok(())
}

fn draw<B: ProjectBackend>(
    out: &mut impl Write,
    controller: &TreeController<B>,
    title: &str,
    message: Option<&str>,
    unicode: bool,
    color: bool,
) -> io::Result<()> {
    let (width, height) = terminal::size().unwrap_or((80, 24));
    let rows = controller.rows();
    let window = visible_window(
        rows.len(),
        controller.cursor(),
        height.saturating_sub(CHROME_LINES) as usize,
    );

    let selected_files = files(controller.tree())
        .iter()
        .filter(|f| controller.selection().contains(&f.path))
        .count();
    let total_files = files(controller.tree()).len();

    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    queue!(out, Print(format!("{}\r\n\r\n", title)))?;

    if rows.is_empty() {
        queue!(out, Print("  (no files)\r\n"))?;
    }
    for idx in window {
        let line = render_row(
            &rows[idx],
            idx == controller.cursor(),
            width as usize,
            unicode,
            color,
        );
        queue!(out, Print(format!("{}\r\n", line)))?;
    }

    queue!(out, Print(format!("{}\r\n", rule(width as usize, unicode))))?;
    let status = render_status_bar(
        selected_files,
        total_files,
        controller.is_unsaved(),
        unicode,
        color,
    );
    queue!(out, Print(format!("{}\r\n", status)))?;
    if let Some(message) = message {
        queue!(out, Print(format!("{}\r\n", message)))?;
    }
    for line in render_help_bar(unicode).lines() {
        queue!(out, Print(format!("{}\r\n", line)))?;
    }

    out.flush()
}
