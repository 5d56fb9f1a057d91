//! Workspace document handlers: formats, templates, named configs and the
//! final request

use anyhow::{Context, Result};

use promptweave::presentation::ConfigCommands;

use super::{emit_json, CommandContext};
use crate::ui::views::report::success_line;

fn print_names(ctx: &CommandContext, key: &str, names: &[String]) -> Result<()> {
    if ctx.json {
        return emit_json(&serde_json::json!({ key: names }));
    }
    if names.is_empty() {
        println!("(none)");
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

pub fn cmd_formats(ctx: &CommandContext) -> Result<()> {
    print_names(ctx, "formats", &ctx.session.workspace.list_formats()?)
}

pub fn cmd_templates(ctx: &CommandContext) -> Result<()> {
    print_names(ctx, "templates", &ctx.session.workspace.list_templates()?)
}

pub fn cmd_configs(ctx: &CommandContext) -> Result<()> {
    print_names(ctx, "configs", &ctx.session.workspace.list_configs()?)
}

pub fn cmd_config(ctx: &CommandContext, action: &ConfigCommands) -> Result<()> {
    let workspace = &ctx.session.workspace;

    match action {
        ConfigCommands::Show { name } => {
            let content = workspace.config_content(name)?;
            if ctx.json {
                let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(&content)?;
                return emit_json(&value);
            }
            print!("{}", content);
            Ok(())
        }
        ConfigCommands::New { name, template } => {
            let path = match template {
                Some(template) => workspace.create_config_from_template(template, name)?,
                None => workspace.create_custom_config(
                    name,
                    &serde_yaml_ng::Value::Mapping(serde_yaml_ng::Mapping::new()),
                )?,
            };
            if ctx.json {
                return emit_json(&serde_json::json!({ "created": path }));
            }
            println!(
                "{}",
                success_line(&format!("created {}", path.display()), ctx.unicode, ctx.color)
            );
            Ok(())
        }
        ConfigCommands::Use {
            project_data,
            user_config,
        } => {
            for name in [project_data, user_config].into_iter().flatten() {
                workspace
                    .config_content(name)
                    .with_context(|| format!("config '{}' cannot be used", name))?;
            }
            workspace.update_selected_configs(project_data.as_deref(), user_config.as_deref())?;
            let config = workspace.read_user_config()?;
            if ctx.json {
                return emit_json(&serde_json::json!({
                    "selected_project_data": config.selected_project_data,
                    "selected_user_config": config.selected_user_config,
                }));
            }
            println!(
                "{}",
                success_line("selected configs updated", ctx.unicode, ctx.color)
            );
            Ok(())
        }
    }
}

/// Show or replace the final request text
pub fn cmd_request(ctx: &CommandContext, text: Option<&str>) -> Result<()> {
    let workspace = &ctx.session.workspace;
    if let Some(text) = text {
        workspace.update_final_request(text)?;
    }
    let current = workspace.final_request()?;

    if ctx.json {
        return emit_json(&serde_json::json!({ "final_request": current }));
    }
    if text.is_some() {
        println!("{}", success_line("final request saved", ctx.unicode, ctx.color));
    } else {
        println!("{}", current);
    }
    Ok(())
}
