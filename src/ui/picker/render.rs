//! Picker screen rendering
//!
//! Everything is rendered to strings first so it can be tested without a
//! terminal.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use promptweave::application::{SelectionState, TreeRow};

use crate::ui::theme::{colors, icon, icons, icons_ascii, paint};
use crate::ui::views::tree::{row_text, state_color, state_icon};

/// Cut `text` to at most `max` display columns, marking the cut
pub fn truncate_to_width(text: &str, max: usize, unicode: bool) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let ellipsis = icon(unicode, icons::ELLIPSIS, icons_ascii::ELLIPSIS);
    let budget = max.saturating_sub(ellipsis.width());

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    if max >= ellipsis.width() {
        out.push_str(ellipsis);
    }
    out
}

/// One row with the cursor marker, fitted to `width` columns
pub fn render_row(row: &TreeRow, is_active: bool, width: usize, unicode: bool, color: bool) -> String {
    let cursor = if is_active { "> " } else { "  " };
    let text = truncate_to_width(&row_text(row, unicode), width.saturating_sub(2), unicode);
    if row.state == SelectionState::Unselected || !color {
        format!("{}{}", cursor, text)
    } else {
        format!("{}{}", cursor, paint(&text, state_color(row.state), color))
    }
}

/// Rows visible in a window of `height` lines that keeps `cursor` on screen
pub fn visible_window(total: usize, cursor: usize, height: usize) -> std::ops::Range<usize> {
    if height == 0 || total <= height {
        return 0..total;
    }
    let start = cursor.saturating_sub(height - 1).min(total - height);
    start..start + height
}

pub fn render_status_bar(
    selected_files: usize,
    total_files: usize,
    unsaved: bool,
    unicode: bool,
    color: bool,
) -> String {
    let mut status = format!(
        "Selected: {}/{} files    {} = selected    {} = partial    {} = not selected",
        selected_files,
        total_files,
        state_icon(SelectionState::Selected, unicode),
        state_icon(SelectionState::Partial, unicode),
        state_icon(SelectionState::Unselected, unicode),
    );
    if unsaved {
        status.push_str("    ");
        status.push_str(&paint("unsaved - press [s] to retry", colors::ERROR, color));
    }
    status
}

pub fn render_help_bar(unicode: bool) -> String {
    let arrows = if unicode { "↑↓" } else { "up/down" };
    format!(
        "[Space] Toggle    [a] All    [n] None    [E/C] Expand/Collapse all    [r] Reload    [q] Done\n\
         (Use {} to navigate, left/right to collapse/expand)",
        arrows
    )
}

pub fn rule(width: usize, unicode: bool) -> String {
    icon(unicode, icons::RULE, icons_ascii::RULE).repeat(width.min(80))
}
