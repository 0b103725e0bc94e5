//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Letter bindings are case-insensitive. Keys with no binding return `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    let action = match key.code {
        KeyCode::Left => GameAction::MoveLeft,
        KeyCode::Right => GameAction::MoveRight,
        KeyCode::Down => GameAction::SoftDrop,
        KeyCode::Up => GameAction::RotateCw,
        KeyCode::Enter => GameAction::Start,
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'h' | 'a' => GameAction::MoveLeft,
            'l' | 'd' => GameAction::MoveRight,
            'j' | 's' => GameAction::SoftDrop,
            'k' | 'w' => GameAction::RotateCw,
            'z' | 'y' => GameAction::RotateCcw,
            ' ' => GameAction::Start,
            _ => return None,
        },
        _ => return None,
    };
    Some(action)
}

/// Action for any non-quit key.
///
/// Unbound keys map to [`GameAction::Start`] so that any key leaves the splash
/// screen; once playing, the controller ignores `Start`.
pub fn key_action(key: KeyEvent) -> GameAction {
    handle_key_event(key).unwrap_or(GameAction::Start)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Presses and terminal auto-repeats count as discrete actions; releases do not.
pub fn is_press(key: &KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}
