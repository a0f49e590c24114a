//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement: arrows, vi keys, WASD
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::Move(Direction::Up)),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameAction::Move(Direction::Down)),
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameAction::Move(Direction::Left)),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameAction::Move(Direction::Right)),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn moved(code: KeyCode) -> Option<Direction> {
        match handle_key_event(KeyEvent::from(code)) {
            Some(GameAction::Move(dir)) => Some(dir),
            _ => None,
        }
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(moved(KeyCode::Up), Some(Direction::Up));
        assert_eq!(moved(KeyCode::Down), Some(Direction::Down));
        assert_eq!(moved(KeyCode::Left), Some(Direction::Left));
        assert_eq!(moved(KeyCode::Right), Some(Direction::Right));
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(moved(KeyCode::Char('k')), Some(Direction::Up));
        assert_eq!(moved(KeyCode::Char('J')), Some(Direction::Down));
        assert_eq!(moved(KeyCode::Char('h')), Some(Direction::Left));
        assert_eq!(moved(KeyCode::Char('L')), Some(Direction::Right));

        assert_eq!(moved(KeyCode::Char('W')), Some(Direction::Up));
        assert_eq!(moved(KeyCode::Char('s')), Some(Direction::Down));
        assert_eq!(moved(KeyCode::Char('a')), Some(Direction::Left));
        assert_eq!(moved(KeyCode::Char('d')), Some(Direction::Right));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
