//! Key mapping from terminal events to input events.

use crate::types::{Direction, InputEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a keyboard event to an input event.
///
/// Only presses count; repeats and releases map to [`InputEvent::Other`].
pub fn map_key(key: KeyEvent) -> InputEvent {
    if key.kind != KeyEventKind::Press {
        return InputEvent::Other;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputEvent::Interrupt;
    }

    match key.code {
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => InputEvent::Move(Direction::Up),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => InputEvent::Move(Direction::Down),
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => InputEvent::Move(Direction::Left),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => InputEvent::Move(Direction::Right),

        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => InputEvent::Escape,

        _ => InputEvent::Other,
    }
}

/// Check if key should end the session (normally or by interrupt).
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(map_key(key), InputEvent::Escape | InputEvent::Interrupt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Up)),
            InputEvent::Move(Direction::Up)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            InputEvent::Move(Direction::Down)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            InputEvent::Move(Direction::Left)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            InputEvent::Move(Direction::Right)
        );
    }

    #[test]
    fn test_letter_aliases() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('K'))),
            InputEvent::Move(Direction::Up)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('s'))),
            InputEvent::Move(Direction::Down)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('h'))),
            InputEvent::Move(Direction::Left)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('D'))),
            InputEvent::Move(Direction::Right)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), InputEvent::Escape);
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('q'))),
            InputEvent::Escape
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputEvent::Interrupt
        );
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), InputEvent::Other);
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('c'))),
            InputEvent::Other
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), InputEvent::Other);
    }

    #[test]
    fn test_release_and_repeat_are_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Up,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        let repeat =
            KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(map_key(release), InputEvent::Other);
        assert_eq!(map_key(repeat), InputEvent::Other);
    }
}
