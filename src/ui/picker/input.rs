//! Keyboard mapping for the picker

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Picker action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    Up,
    Down,
    Toggle,
    Expand,
    Collapse,
    SelectAll,
    SelectNone,
    ExpandAll,
    CollapseAll,
    Reload,
    RetrySave,
    Quit,
}

/// Convert a keyboard event to a picker action
pub fn key_to_action(key: KeyEvent) -> Option<PickerAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(PickerAction::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(PickerAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(PickerAction::Down),
        KeyCode::Char(' ') => Some(PickerAction::Toggle),
        KeyCode::Right | KeyCode::Char('l') => Some(PickerAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(PickerAction::Collapse),
        KeyCode::Char('a') => Some(PickerAction::SelectAll),
        KeyCode::Char('n') => Some(PickerAction::SelectNone),
        KeyCode::Char('E') => Some(PickerAction::ExpandAll),
        KeyCode::Char('C') => Some(PickerAction::CollapseAll),
        KeyCode::Char('r') => Some(PickerAction::Reload),
        KeyCode::Char('s') => Some(PickerAction::RetrySave),
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => Some(PickerAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrow_and_vim_keys_navigate() {
        assert_eq!(key_to_action(key(KeyCode::Up)), Some(PickerAction::Up));
        assert_eq!(key_to_action(key(KeyCode::Char('j'))), Some(PickerAction::Down));
        assert_eq!(key_to_action(key(KeyCode::Left)), Some(PickerAction::Collapse));
        assert_eq!(key_to_action(key(KeyCode::Char('l'))), Some(PickerAction::Expand));
    }

    #[test]
    fn bulk_shortcuts() {
        assert_eq!(key_to_action(key(KeyCode::Char('a'))), Some(PickerAction::SelectAll));
        assert_eq!(key_to_action(key(KeyCode::Char('n'))), Some(PickerAction::SelectNone));
        assert_eq!(key_to_action(key(KeyCode::Char('E'))), Some(PickerAction::ExpandAll));
        assert_eq!(key_to_action(key(KeyCode::Char('C'))), Some(PickerAction::CollapseAll));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(key_to_action(key(KeyCode::Esc)), Some(PickerAction::Quit));
        assert_eq!(key_to_action(key(KeyCode::Enter)), Some(PickerAction::Quit));
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(PickerAction::Quit)
        );
    }

    #[test]
    fn unknown_keys_do_nothing() {
        assert_eq!(key_to_action(key(KeyCode::Char('z'))), None);
        assert_eq!(key_to_action(key(KeyCode::F(1))), None);
    }
}
