//! `init` and `source` handlers

use std::path::Path;

use anyhow::{bail, Result};

use promptweave::domain::entities::files;
use promptweave::domain::ports::ProjectBackend;

use super::{emit_json, CommandContext};
use crate::ui::views::report::success_line;

/// Create the workspace layout
pub fn cmd_init(ctx: &CommandContext, source: Option<&Path>) -> Result<()> {
    let workspace = &ctx.session.workspace;
    if let Some(source) = source {
        ctx.session
            .settings
            .safety
            .policy()
            .check(source, workspace.base())?;
    }

    let created = workspace.init(source)?;

    if ctx.json {
        #[derive(serde::Serialize)]
        struct InitOutput<'a> {
            workspace: &'a Path,
            created: &'a [std::path::PathBuf],
        }
        return emit_json(&InitOutput {
            workspace: workspace.root(),
            created: &created,
        });
    }

    if created.is_empty() {
        println!(
            "{} is already initialized",
            workspace.root().display()
        );
        return Ok(());
    }
    for path in &created {
        println!("{}", success_line(&format!("created {}", path.display()), ctx.unicode, ctx.color));
    }
    Ok(())
}

/// Print or change the source directory
pub fn cmd_source(ctx: &CommandContext, dir: Option<&Path>) -> Result<()> {
    let Some(dir) = dir else {
        let source = ctx.session.backend().source_directory()?;
        if ctx.json {
            return emit_json(&serde_json::json!({ "source_directory": source }));
        }
        println!("{}", source.display());
        return Ok(());
    };

    let resolved = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        ctx.session.workspace.base().join(dir)
    };
    if !resolved.is_dir() {
        bail!("{} is not a directory", resolved.display());
    }

    let mut controller = ctx.controller();
    controller.change_directory(dir)?;
    let file_count = files(controller.tree()).len();

    if ctx.json {
        return emit_json(&serde_json::json!({
            "source_directory": resolved,
            "files": file_count,
            "selected": controller.selection().len(),
        }));
    }
    println!(
        "{}",
        success_line(
            &format!("source set to {} ({} files)", resolved.display(), file_count),
            ctx.unicode,
            ctx.color
        )
    );
    Ok(())
}
