//! Key mapping from terminal events to game events.

use crate::types::{GameEvent, Phase};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map any terminal event to a game event.
///
/// Only key presses count; repeats and releases are dropped so a held key
/// does not type the same letter twice.
pub fn map_event(event: Event, phase: Phase) -> Option<GameEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key, phase),
        Event::Resize(width, height) => Some(GameEvent::Resize(width, height)),
        _ => None,
    }
}

/// Map a key press to a game event.
///
/// `q` quits only on the game-over screen; while playing it is a letter.
pub fn map_key(key: KeyEvent, phase: Phase) -> Option<GameEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(GameEvent::Quit),
            KeyCode::Char('l') | KeyCode::Char('L') => Some(GameEvent::Redraw),
            _ => None,
        };
    }
    if key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::SUPER) {
        return None;
    }

    match key.code {
        KeyCode::Char('q') if phase == Phase::GameOver => Some(GameEvent::Quit),
        KeyCode::Char(' ') => Some(GameEvent::PauseToggle),
        KeyCode::Char(c) if c.is_ascii_lowercase() => Some(GameEvent::Letter(c)),
        KeyCode::Backspace => Some(GameEvent::Backspace),
        _ => None,
    }
}
