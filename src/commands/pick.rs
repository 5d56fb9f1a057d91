//! `pick` handler

use anyhow::{bail, Result};

use promptweave::domain::ports::ProjectBackend;

use super::CommandContext;
use crate::ui::picker::run_picker;
use crate::ui::views::report::render_selection;

pub fn cmd_pick(ctx: &CommandContext) -> Result<()> {
    if ctx.json || !ctx.caps.stdin_tty || !ctx.caps.stdout_tty {
        bail!("'pick' needs an interactive terminal; use 'select' and 'deselect' instead");
    }

    let mut controller = ctx.loaded_controller()?;
    let source = controller.backend().source_directory()?;
    let title = format!("promptweave - {}", source.display());

    run_picker(&mut controller, &title, ctx.unicode, ctx.color)?;

    if controller.is_unsaved() {
        bail!("the selection could not be saved");
    }
    let paths = controller.selection().to_vec();
    println!("{}", render_selection(&paths, &controller.stale_selection(), ctx.color));
    Ok(())
}
