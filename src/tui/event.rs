use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Always quits, even with an overlay open
    ForceQuit,
    Escape,
    Submit,
    InputChar(char),
    /// Backspace or ←
    Back,
    CursorUp,
    CursorDown,
    ScrollPageUp,
    ScrollPageDown,
    Resize,
}

/// Map a key press to a `TuiEvent`. Releases and repeats are ignored.
pub fn map_key(key: KeyEvent) -> Option<TuiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Backspace | KeyCode::Left) => Some(TuiEvent::Back),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
        _ => None,
    }
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let event = match event::read()? {
        Event::Key(key_event) => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            map_key(key_event)
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    };
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(TuiEvent::ForceQuit));
        assert_eq!(map_key(press(KeyCode::Char('c'))), Some(TuiEvent::InputChar('c')));
    }

    #[test]
    fn test_back_keys() {
        assert_eq!(map_key(press(KeyCode::Backspace)), Some(TuiEvent::Back));
        assert_eq!(map_key(press(KeyCode::Left)), Some(TuiEvent::Back));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key(press(KeyCode::Enter)), Some(TuiEvent::Submit));
        assert_eq!(map_key(press(KeyCode::Up)), Some(TuiEvent::CursorUp));
        assert_eq!(map_key(press(KeyCode::PageDown)), Some(TuiEvent::ScrollPageDown));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(TuiEvent::Escape));
        assert_eq!(map_key(press(KeyCode::F(1))), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), None);
    }
}
