use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ForceQuit,
    ShowScore,

    // Board / dialog navigation (handled in the TUI first)
    Choose(usize),
    Left,
    Right,
    Submit,
    Escape,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`. Read errors are logged and
/// treated as "no event".
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => match event::read() {
            Ok(ev) => map_event(ev),
            Err(e) => {
                log::warn!("Failed to read terminal event: {}", e);
                None
            }
        },
        Ok(false) => None,
        Err(e) => {
            log::warn!("Failed to poll terminal events: {}", e);
            None
        }
    }
}

/// Translate a raw crossterm event into a `TuiEvent`.
pub fn map_event(ev: Event) -> Option<TuiEvent> {
    match ev {
        Event::Key(key_event) => {
            // Only presses; some terminals also report repeats/releases
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char(c @ '1'..='3')) => {
                    Some(TuiEvent::Choose(c as usize - '1' as usize))
                }
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('s')) => Some(TuiEvent::ShowScore),
                (_, KeyCode::Char('h')) | (_, KeyCode::Left) => Some(TuiEvent::Left),
                (_, KeyCode::Char('l')) | (_, KeyCode::Right) => Some(TuiEvent::Right),
                (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_number_keys_choose_flags() {
        assert_eq!(
            map_event(key(KeyCode::Char('1'), KeyModifiers::NONE)),
            Some(TuiEvent::Choose(0))
        );
        assert_eq!(
            map_event(key(KeyCode::Char('3'), KeyModifiers::NONE)),
            Some(TuiEvent::Choose(2))
        );
        assert_eq!(map_event(key(KeyCode::Char('4'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            map_event(key(KeyCode::Left, KeyModifiers::NONE)),
            Some(TuiEvent::Left)
        );
        assert_eq!(
            map_event(key(KeyCode::Char('l'), KeyModifiers::NONE)),
            Some(TuiEvent::Right)
        );
        assert_eq!(
            map_event(key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(TuiEvent::Submit)
        );
        assert_eq!(
            map_event(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(TuiEvent::Escape)
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('1'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(release), None);
    }

    #[test]
    fn test_left_click() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(click), Some(TuiEvent::MouseClick(12, 7)));
    }
}
