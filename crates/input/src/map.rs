//! Key mapping from terminal events to game inputs.

use crate::types::Symbol;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to a directional symbol.
pub fn symbol_for_key(key: KeyEvent) -> Option<Symbol> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') => {
            Some(Symbol::Up)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
            Some(Symbol::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
            Some(Symbol::Right)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') => {
            Some(Symbol::Down)
        }
        _ => None,
    }
}

/// Retry key, honored by the core only on the fail screen.
pub fn is_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}

/// In-game quit key, routed through the core (fail screen only).
pub fn is_quit_request(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
}

/// Check if key should quit the session from anywhere.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            symbol_for_key(KeyEvent::from(KeyCode::Up)),
            Some(Symbol::Up)
        );
        assert_eq!(
            symbol_for_key(KeyEvent::from(KeyCode::Left)),
            Some(Symbol::Left)
        );
        assert_eq!(
            symbol_for_key(KeyEvent::from(KeyCode::Right)),
            Some(Symbol::Right)
        );
        assert_eq!(
            symbol_for_key(KeyEvent::from(KeyCode::Down)),
            Some(Symbol::Down)
        );
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(
            symbol_for_key(KeyEvent::from(KeyCode::Char('w'))),
            Some(Symbol::Up)
        );
        assert_eq!(
            symbol_for_key(KeyEvent::from(KeyCode::Char('A'))),
            Some(Symbol::Left)
        );
        assert_eq!(
            symbol_for_key(KeyEvent::from(KeyCode::Char('l'))),
            Some(Symbol::Right)
        );
        assert_eq!(
            symbol_for_key(KeyEvent::from(KeyCode::Char('j'))),
            Some(Symbol::Down)
        );
        assert_eq!(symbol_for_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_restart_and_quit_request() {
        assert!(is_restart(KeyEvent::from(KeyCode::Char('r'))));
        assert!(is_restart(KeyEvent::from(KeyCode::Char('R'))));
        assert!(!is_restart(KeyEvent::from(KeyCode::Char('t'))));

        assert!(is_quit_request(KeyEvent::from(KeyCode::Esc)));
        assert!(!is_quit_request(KeyEvent::from(KeyCode::Char('q'))));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
