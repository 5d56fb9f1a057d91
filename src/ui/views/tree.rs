//! Tree rendering shared by `tree` and the picker

use promptweave::application::{SelectionState, TreeRow};
use promptweave::domain::entities::NodeKind;

use crate::ui::theme::{colors, icon, icons, icons_ascii, paint};

pub fn state_icon(state: SelectionState, unicode: bool) -> &'static str {
    match state {
        SelectionState::Selected => icon(unicode, icons::SELECTED, icons_ascii::SELECTED),
        SelectionState::Unselected => icon(unicode, icons::UNSELECTED, icons_ascii::UNSELECTED),
        SelectionState::Partial => icon(unicode, icons::PARTIAL, icons_ascii::PARTIAL),
    }
}

/// One row without color: indent, expansion marker, checkbox, name
pub fn row_text(row: &TreeRow, unicode: bool) -> String {
    let indent = "  ".repeat(row.depth);

    let expand_icon = if row.has_children {
        let marker = if row.expanded {
            icon(unicode, icons::EXPAND, icons_ascii::EXPAND)
        } else {
            icon(unicode, icons::COLLAPSE, icons_ascii::COLLAPSE)
        };
        format!("{} ", marker)
    } else {
        String::from("  ")
    };

    let (name, count_suffix) = match row.kind {
        NodeKind::Directory => (
            format!("{}/", row.name),
            match row.file_count {
                1 => " (1 file)".to_string(),
                n => format!(" ({} files)", n),
            },
        ),
        NodeKind::File => (row.name.clone(), String::new()),
    };

    format!(
        "{}{}{} {}{}",
        indent,
        expand_icon,
        state_icon(row.state, unicode),
        name,
        count_suffix
    )
}

/// Color for a row's selection state
pub fn state_color(state: SelectionState) -> crossterm::style::Color {
    match state {
        SelectionState::Selected => colors::SUCCESS,
        SelectionState::Partial => colors::WARNING,
        SelectionState::Unselected => colors::DIM,
    }
}

/// Every row on its own line
pub fn render_tree(rows: &[TreeRow], unicode: bool, color: bool) -> String {
    let mut out = String::new();
    for row in rows {
        let text = row_text(row, unicode);
        let line = if row.state == SelectionState::Unselected {
            text
        } else {
            paint(&text, state_color(row.state), color)
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}
