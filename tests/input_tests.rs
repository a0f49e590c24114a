use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::types::{Direction, GameAction};

#[test]
fn every_move_scheme_maps_to_the_same_direction() {
    let schemes = [
        (Direction::Up, [KeyCode::Up, KeyCode::Char('k'), KeyCode::Char('w')]),
        (Direction::Down, [KeyCode::Down, KeyCode::Char('j'), KeyCode::Char('s')]),
        (Direction::Left, [KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('a')]),
        (Direction::Right, [KeyCode::Right, KeyCode::Char('l'), KeyCode::Char('d')]),
    ];
    for (dir, codes) in schemes {
        for code in codes {
            assert_eq!(
                handle_key_event(KeyEvent::from(code)),
                Some(GameAction::Move(dir)),
                "{code:?}"
            );
        }
    }
}

#[test]
fn restart_and_quit_keys() {
    assert_eq!(
        handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
        Some(GameAction::Restart)
    );
    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
    assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
    assert!(should_quit(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));
    assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
}

#[test]
fn control_chords_are_not_moves() {
    assert_eq!(
        handle_key_event(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
        None
    );
    assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
}
