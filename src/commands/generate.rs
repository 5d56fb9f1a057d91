//! `generate` and `apply` handlers

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use promptweave::presentation::factory;

use super::{emit_json, CommandContext};
use crate::ui::views::report::{render_changes, render_generate_summary};

/// Build the outline and bundle, run the generator, print the prompt
pub fn cmd_generate(ctx: &CommandContext, format: &str) -> Result<()> {
    let options = factory::generate_options(&ctx.session, format)?;
    let use_case = factory::create_generate_use_case(&ctx.session, Arc::clone(&ctx.events));
    let result = use_case.execute(&options)?;

    if ctx.json {
        return emit_json(&serde_json::json!({
            "prompt": result.prompt,
            "structure": result.structure_path,
            "context": result.context_path,
            "files": result.files,
            "skipped": result
                .skipped
                .iter()
                .map(|s| serde_json::json!({ "path": s.path, "reason": s.reason }))
                .collect::<Vec<_>>(),
        }));
    }

    // The prompt goes to stdout so it can be piped; the summary to stderr.
    print!("{}", result.prompt);
    eprintln!("{}", render_generate_summary(&result, ctx.unicode, ctx.color));
    Ok(())
}

/// Read a response from a file or stdin and hand it to the applier
pub fn cmd_apply(ctx: &CommandContext, file: &Path) -> Result<()> {
    let response = if file == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read the response from stdin")?;
        buf
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?
    };

    let options = factory::apply_options(&ctx.session);
    let use_case = factory::create_apply_use_case(Arc::clone(&ctx.events));
    let result = use_case.execute(&response, &options)?;

    if ctx.json {
        return emit_json(&serde_json::json!({
            "output": result.output,
            "changes": result.changes,
        }));
    }
    println!("{}", render_changes(&result.changes, ctx.unicode, ctx.color));
    Ok(())
}
