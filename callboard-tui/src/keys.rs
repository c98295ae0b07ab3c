//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SimulateIncoming,
    Answer,
    Reject,
    EndCall,
    MoveUp,
    MoveDown,
    NextFilter,
    PrevFilter,
    SwitchFilter(usize),
    OpenSearch,
    OpenHelp,
    Cancel,
}

/// Keys while the search box has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    Insert(char),
    Backspace,
    /// Keep the term and leave the box.
    Commit,
    /// Clear the term and leave the box.
    Discard,
}

/// Ctrl-C quits from every input mode.
pub fn is_interrupt(event: &KeyEvent) -> bool {
    event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c')
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    if is_interrupt(&event) {
        return Some(Action::Quit);
    }
    let KeyEvent { code, modifiers, .. } = event;
    if modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('/') => Some(Action::OpenSearch),
        KeyCode::Char('n') => Some(Action::SimulateIncoming),
        KeyCode::Char('a') => Some(Action::Answer),
        KeyCode::Char('r') => Some(Action::Reject),
        KeyCode::Char('e') => Some(Action::EndCall),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab => Some(Action::NextFilter),
        KeyCode::BackTab => Some(Action::PrevFilter),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Char(c @ '1'..='6') => Some(Action::SwitchFilter(c as usize - '1' as usize)),
        _ => None,
    }
}

/// Ctrl chords, Ctrl-C included, are not search input; see [`is_interrupt`].
pub fn map_search_key(event: KeyEvent) -> Option<SearchKey> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match code {
        KeyCode::Enter => Some(SearchKey::Commit),
        KeyCode::Esc => Some(SearchKey::Discard),
        KeyCode::Backspace => Some(SearchKey::Backspace),
        KeyCode::Char(c) => Some(SearchKey::Insert(c)),
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
    fn test_call_action_keys() {
        assert_eq!(map_key(key(KeyCode::Char('n'))), Some(Action::SimulateIncoming));
        assert_eq!(map_key(key(KeyCode::Char('a'))), Some(Action::Answer));
        assert_eq!(map_key(key(KeyCode::Char('r'))), Some(Action::Reject));
        assert_eq!(map_key(key(KeyCode::Char('e'))), Some(Action::EndCall));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), Some(Action::Quit));
    }

    #[test]
    fn test_digits_outside_filter_range_unmapped() {
        assert_eq!(map_key(key(KeyCode::Char('7'))), None);
        assert_eq!(map_key(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_search_keys() {
        assert_eq!(map_search_key(key(KeyCode::Char('q'))), Some(SearchKey::Insert('q')));
        assert_eq!(map_search_key(key(KeyCode::Enter)), Some(SearchKey::Commit));
        assert_eq!(map_search_key(key(KeyCode::Esc)), Some(SearchKey::Discard));
        assert_eq!(map_search_key(key(KeyCode::Backspace)), Some(SearchKey::Backspace));
        assert_eq!(map_search_key(key(KeyCode::Tab)), None);
    }

    #[test]
    fn test_ctrl_c_is_not_search_input() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_interrupt(&event));
        assert_eq!(map_search_key(event), None);
        assert!(!is_interrupt(&key(KeyCode::Char('c'))));
    }
}
