//! promptweave CLI - pick project files and assemble AI assistant prompts
//!
//! Usage: promptweave <COMMAND>
//!
//! Commands:
//!   init       Create the workspace directory
//!   tree       Show the filtered tree with selection marks
//!   select     Add paths to the selection
//!   pick       Choose files interactively
//!   generate   Build the prompt with the external generator
//!   apply      Hand a response to the external applier

mod commands;
mod ui;

use anyhow::{bail, Result};
use clap::Parser;

use promptweave::presentation::{Cli, Commands};

use commands::CommandContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let ctx = CommandContext::from_cli(&cli, &cwd)?;

    if !matches!(cli.command, Commands::Init { .. } | Commands::Ls { .. })
        && !ctx.session.workspace.exists()
    {
        bail!(
            "no workspace at {} - run 'promptweave init' first",
            ctx.session.workspace.root().display()
        );
    }

    match &cli.command {
        Commands::Init { source } => commands::init::cmd_init(&ctx, source.as_deref()),
        Commands::Source { dir } => commands::init::cmd_source(&ctx, dir.as_deref()),
        Commands::Tree => commands::tree::cmd_tree(&ctx),
        Commands::Select { paths, all } => commands::selection::cmd_select(&ctx, paths, *all),
        Commands::Deselect { paths, all } => {
            commands::selection::cmd_deselect(&ctx, paths, *all)
        }
        Commands::Selection { clear } => commands::selection::cmd_selection(&ctx, *clear),
        Commands::Pick => commands::pick::cmd_pick(&ctx),
        Commands::Structure => commands::tree::cmd_structure(&ctx),
        Commands::Formats => commands::configs::cmd_formats(&ctx),
        Commands::Templates => commands::configs::cmd_templates(&ctx),
        Commands::Configs => commands::configs::cmd_configs(&ctx),
        Commands::Config { action } => commands::configs::cmd_config(&ctx, action),
        Commands::Request { text } => commands::configs::cmd_request(&ctx, text.as_deref()),
        Commands::Generate { format } => commands::generate::cmd_generate(&ctx, format),
        Commands::Apply { file } => commands::generate::cmd_apply(&ctx, file),
        Commands::Ls { dir } => commands::tree::cmd_ls(&ctx, dir.as_deref()),
    }
}
