//! `select`, `deselect` and `selection` handlers

use anyhow::Result;

use super::{emit_json, CommandContext};
use crate::ui::views::report::{render_selection, success_line};

pub fn cmd_select(ctx: &CommandContext, paths: &[String], all: bool) -> Result<()> {
    change(ctx, paths, all, true)
}

pub fn cmd_deselect(ctx: &CommandContext, paths: &[String], all: bool) -> Result<()> {
    change(ctx, paths, all, false)
}

fn change(ctx: &CommandContext, paths: &[String], all: bool, included: bool) -> Result<()> {
    let mut controller = ctx.loaded_controller()?;

    match (all, included) {
        (true, true) => controller.select_all()?,
        (true, false) => controller.deselect_all()?,
        (false, _) => {
            let paths: Vec<String> = paths.iter().map(|p| normalize(p)).collect();
            controller.toggle_many(&paths, included)?;
        }
    }

    let count = controller.selection().len();
    if ctx.json {
        return emit_json(&serde_json::json!({
            "selected": controller.selection(),
            "count": count,
        }));
    }
    println!(
        "{}",
        success_line(&format!("{} path(s) selected", count), ctx.unicode, ctx.color)
    );
    Ok(())
}

/// Accept `./src/`, `src\lib.rs` and friends as tree paths
fn normalize(path: &str) -> String {
    let path = path.replace('\\', "/");
    let path = path.trim_start_matches("./").trim_end_matches('/');
    path.to_string()
}

/// Print the saved selection, or clear it
pub fn cmd_selection(ctx: &CommandContext, clear: bool) -> Result<()> {
    let mut controller = ctx.loaded_controller()?;
    if clear {
        controller.clear_selection()?;
    }

    let paths = controller.selection().to_vec();
    let stale = controller.stale_selection();

    if ctx.json {
        return emit_json(&serde_json::json!({
            "selected": paths,
            "missing": stale,
        }));
    }
    println!("{}", render_selection(&paths, &stale, ctx.color));
    Ok(())
}
