//! TUI application state: controller, keypad highlight, quit flag.

use crate::core::{InputEvent, Session};
use crate::display::{Controller, TextPanel};
use crate::keypad::Keypad;

/// Calculator application state for the terminal frontend.
#[derive(Debug)]
pub struct CalculatorApp {
    controller: Controller<TextPanel>,
    keypad: Keypad,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a fresh app; the display starts at `"0"`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            controller: Controller::default(),
            keypad: Keypad::new(),
            should_quit: false,
        }
    }

    /// Applies one input event and highlights the matching keypad button.
    pub fn press(&mut self, event: InputEvent) {
        self.keypad.highlight_event(event);
        self.controller.apply(event);
    }

    /// Current contents of the display surface.
    #[must_use]
    pub fn display(&self) -> &str {
        self.controller.sink().content()
    }

    /// True when the display shows the error state.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display() == "Error"
    }

    /// The underlying session.
    #[must_use]
    pub fn session(&self) -> &Session {
        self.controller.session()
    }

    /// The keypad with its highlight state.
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Whether the app should exit its event loop.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
