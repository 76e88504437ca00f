//! Key mapping from terminal events to game actions.
//!
//! What a key means depends on the screen: Space starts a game from the start
//! screen but rotates during play.

use crate::types::{GameAction, GameStatus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a game action for the current status.
///
/// The game-over screen owns its keys (initials entry), so nothing maps there
/// except pause, which the session ignores.
pub fn handle_key_event(key: KeyEvent, status: GameStatus) -> Option<GameAction> {
    if is_pause_key(key.code) && status != GameStatus::Start {
        return Some(GameAction::Pause);
    }

    match status {
        GameStatus::Start => match key.code {
            KeyCode::Char(' ') => Some(GameAction::Start),
            _ => None,
        },
        GameStatus::Playing => match key.code {
            // Movement
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                Some(GameAction::MoveRight)
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SoftDrop),

            // Rotation
            KeyCode::Up | KeyCode::Char(' ') | KeyCode::Char('w') | KeyCode::Char('W') => {
                Some(GameAction::Rotate)
            }

            KeyCode::Enter => Some(GameAction::HardDrop),
            _ => None,
        },
        GameStatus::Paused | GameStatus::GameOver => None,
    }
}

fn is_pause_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('p') | KeyCode::Char('P'))
}

/// Keys that drive the held soft drop
pub fn is_soft_drop_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S')
    )
}

/// Ctrl-C: always quits, even while typing initials
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || is_interrupt(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode, status: GameStatus) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code), status)
    }

    #[test]
    fn test_space_starts_from_start_screen() {
        assert_eq!(
            key(KeyCode::Char(' '), GameStatus::Start),
            Some(GameAction::Start)
        );
        assert_eq!(key(KeyCode::Left, GameStatus::Start), None);
        assert_eq!(key(KeyCode::Char('p'), GameStatus::Start), None);
    }

    #[test]
    fn test_movement_keys() {
        let s = GameStatus::Playing;
        assert_eq!(key(KeyCode::Left, s), Some(GameAction::MoveLeft));
        assert_eq!(key(KeyCode::Right, s), Some(GameAction::MoveRight));
        assert_eq!(key(KeyCode::Down, s), Some(GameAction::SoftDrop));
        assert_eq!(key(KeyCode::Char('A'), s), Some(GameAction::MoveLeft));
    }

    #[test]
    fn test_rotation_and_drop_keys() {
        let s = GameStatus::Playing;
        assert_eq!(key(KeyCode::Up, s), Some(GameAction::Rotate));
        assert_eq!(key(KeyCode::Char(' '), s), Some(GameAction::Rotate));
        assert_eq!(key(KeyCode::Enter, s), Some(GameAction::HardDrop));
    }

    #[test]
    fn test_pause_key_toggles_both_ways() {
        assert_eq!(
            key(KeyCode::Char('p'), GameStatus::Playing),
            Some(GameAction::Pause)
        );
        assert_eq!(
            key(KeyCode::Char('P'), GameStatus::Paused),
            Some(GameAction::Pause)
        );
        // Nothing but pause works while paused.
        assert_eq!(key(KeyCode::Left, GameStatus::Paused), None);
    }

    #[test]
    fn test_game_over_keys_are_left_to_the_screen() {
        assert_eq!(key(KeyCode::Enter, GameStatus::GameOver), None);
        assert_eq!(key(KeyCode::Char('a'), GameStatus::GameOver), None);
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
        assert!(!is_interrupt(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_soft_drop_keys() {
        assert!(is_soft_drop_key(KeyCode::Down));
        assert!(is_soft_drop_key(KeyCode::Char('s')));
        assert!(!is_soft_drop_key(KeyCode::Up));
    }
}
