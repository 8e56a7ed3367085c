//! Keyboard input handling for the terminal frontend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::InputEvent;
use crate::keypad::char_to_event;

/// Actions a key press can trigger in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Deliver an input event to the session.
    Press(InputEvent),
    /// Quit the application.
    Quit,
    /// Ignored input.
    None,
}

/// Maps crossterm key events to actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Press(InputEvent::Clear),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char(c) => char_to_event(c).map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Enter => KeyAction::Press(InputEvent::Evaluate),
            KeyCode::Esc => KeyAction::Press(InputEvent::Clear),
            KeyCode::Backspace | KeyCode::Delete => KeyAction::Press(InputEvent::DeleteLast),
            _ => KeyAction::None,
        }
    }
}
