//! `tree`, `structure` and `ls` handlers

use std::path::Path;

use anyhow::Result;

use promptweave::domain::ports::ProjectBackend;
use promptweave::domain::services::render_outline;

use super::{emit_json, CommandContext};
use crate::ui::views::tree::render_tree;

/// Print the filtered tree, fully expanded, with selection marks
pub fn cmd_tree(ctx: &CommandContext) -> Result<()> {
    let mut controller = ctx.loaded_controller()?;

    if ctx.json {
        return emit_json(controller.tree());
    }

    controller.expand_all();
    let rows = controller.rows();
    if rows.is_empty() {
        println!("(no files)");
        return Ok(());
    }
    print!("{}", render_tree(&rows, ctx.unicode, ctx.color));
    Ok(())
}

/// Print the project outline handed to the generator
pub fn cmd_structure(ctx: &CommandContext) -> Result<()> {
    let backend = ctx.session.backend();
    let source = backend.source_directory()?;
    let tree = backend.file_structure()?;
    let root_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string());
    let outline = render_outline(&root_name, &tree);

    if ctx.json {
        return emit_json(&serde_json::json!({ "structure": outline }));
    }
    println!("{}", outline);
    Ok(())
}

/// List one directory, unfiltered
pub fn cmd_ls(ctx: &CommandContext, dir: Option<&Path>) -> Result<()> {
    let listing = ctx.session.workspace.list_dir(dir)?;

    if ctx.json {
        return emit_json(&listing);
    }
    println!("{}", listing.dir_path.display());
    for d in &listing.dirs {
        println!("  {}/", d);
    }
    for f in &listing.files {
        println!("  {}", f);
    }
    Ok(())
}
