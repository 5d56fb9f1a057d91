//! Summaries printed after generate, apply and selection changes

use promptweave::application::GenerateResult;
use promptweave::domain::services::ChangeSummary;

use crate::ui::theme::{colors, icon, icons, icons_ascii, paint};

pub fn success_line(message: &str, unicode: bool, color: bool) -> String {
    let mark = icon(unicode, icons::SUCCESS, icons_ascii::SUCCESS);
    format!("{} {}", paint(mark, colors::SUCCESS, color), message)
}

pub fn warning_line(message: &str, unicode: bool, color: bool) -> String {
    let mark = icon(unicode, icons::WARNING, icons_ascii::WARNING);
    format!("{} {}", paint(mark, colors::WARNING, color), message)
}

/// Files written by generate plus any skipped inputs
pub fn render_generate_summary(result: &GenerateResult, unicode: bool, color: bool) -> String {
    let mut lines = vec![
        success_line(
            &format!(
                "{} file(s) bundled into {}",
                result.files,
                result.context_path.display()
            ),
            unicode,
            color,
        ),
        success_line(
            &format!("outline written to {}", result.structure_path.display()),
            unicode,
            color,
        ),
    ];
    for skipped in &result.skipped {
        lines.push(warning_line(
            &format!("skipped {}: {}", skipped.path, skipped.reason),
            unicode,
            color,
        ));
    }
    lines.join("\n")
}

/// One line per changed file, aligned on the file column
pub fn render_changes(changes: &[ChangeSummary], unicode: bool, color: bool) -> String {
    if changes.is_empty() {
        return warning_line("the applier reported no changes", unicode, color);
    }

    let width = changes.iter().map(|c| c.file.len()).max().unwrap_or(0);
    changes
        .iter()
        .map(|c| {
            let counts = format!(
                "{} {}",
                paint(&format!("+{}", c.additions), colors::SUCCESS, color),
                paint(&format!("-{}", c.deletions), colors::ERROR, color),
            );
            success_line(&format!("{:<width$}  {}", c.file, counts), unicode, color)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Selected paths, marking ones missing from the tree
pub fn render_selection(paths: &[String], stale: &[String], color: bool) -> String {
    if paths.is_empty() {
        return "nothing selected".to_string();
    }
    paths
        .iter()
        .map(|p| {
            if stale.contains(p) {
                format!("{} {}", p, paint("(missing)", colors::DIM, color))
            } else {
                p.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
