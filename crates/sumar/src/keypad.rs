//! Platform-neutral keypad: the button grid and its input mappings.
//!
//! Layout:
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ / ]
//! [ 4 ] [ 5 ] [ 6 ] [ * ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ 0 ] [ . ] [ = ] [ + ]
//! [ C ] [ ⌫ ]
//! ```
//!
//! Buttons carry the [`InputEvent`] they emit plus a pressed flag so
//! frontends can highlight the key that matches the last input.

use crate::core::{InputEvent, Operator};

/// A single keypad button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The character shown on the button face.
    pub label: char,
    /// Whether the button is currently highlighted.
    pub pressed: bool,
    /// The input event this button emits.
    pub event: InputEvent,
}

impl KeypadButton {
    /// Creates a digit button.
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self {
            label: char::from_digit(u32::from(d), 10).unwrap_or('?'),
            pressed: false,
            event: InputEvent::Digit(d),
        }
    }

    /// Creates an operator button.
    #[must_use]
    pub fn operator(op: Operator) -> Self {
        Self {
            label: op.symbol(),
            pressed: false,
            event: InputEvent::Operator(op),
        }
    }

    /// Creates the decimal point button.
    #[must_use]
    pub fn decimal() -> Self {
        Self {
            label: '.',
            pressed: false,
            event: InputEvent::Decimal,
        }
    }

    /// Creates the equals button.
    #[must_use]
    pub fn equals() -> Self {
        Self {
            label: '=',
            pressed: false,
            event: InputEvent::Evaluate,
        }
    }

    /// Creates the clear button.
    #[must_use]
    pub fn clear() -> Self {
        Self {
            label: 'C',
            pressed: false,
            event: InputEvent::Clear,
        }
    }

    /// Creates the delete-last button.
    #[must_use]
    pub fn delete_last() -> Self {
        Self {
            label: '⌫',
            pressed: false,
            event: InputEvent::DeleteLast,
        }
    }

    /// Sets the pressed state.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad grid in row-major order. The last row holds only the two
/// control buttons.
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad layout.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: 7 8 9 /
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator(Operator::Divide),
            // Row 1: 4 5 6 *
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator(Operator::Multiply),
            // Row 2: 1 2 3 -
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::operator(Operator::Subtract),
            // Row 3: 0 . = +
            KeypadButton::digit(0),
            KeypadButton::decimal(),
            KeypadButton::equals(),
            KeypadButton::operator(Operator::Add),
            // Row 4: C ⌫
            KeypadButton::clear(),
            KeypadButton::delete_last(),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Number of buttons on the keypad.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions as `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index.
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by grid position. Positions in the ragged last row
    /// past the control buttons are empty.
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button index by its face label.
    #[must_use]
    pub fn find_button_by_label(&self, label: char) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Finds a button index by the event it emits.
    #[must_use]
    pub fn find_button_by_event(&self, event: InputEvent) -> Option<usize> {
        self.buttons.iter().position(|b| b.event == event)
    }

    /// Marks a button as pressed by index.
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases every button.
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button that emits `event`, releasing all others.
    pub fn highlight_event(&mut self, event: InputEvent) {
        self.release_all();
        if let Some(idx) = self.find_button_by_event(event) {
            self.press_button(idx);
        }
    }

    /// Iterates over all buttons.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Iterates over buttons with their `(row, col)` positions.
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Maps a named key (browser/terminal convention) to an input event.
    #[must_use]
    pub fn key_to_event(key: &str) -> Option<InputEvent> {
        match key {
            "Enter" | "=" => Some(InputEvent::Evaluate),
            "Escape" | "c" | "C" => Some(InputEvent::Clear),
            "Backspace" | "Delete" => Some(InputEvent::DeleteLast),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => char_to_event(c),
                    _ => None,
                }
            }
        }
    }
}

/// Maps a single key character to an input event.
///
/// `=` evaluates, `c`/`C` clears, `<` deletes the last character;
/// digits, `.` and the four operator symbols map to themselves.
#[must_use]
pub fn char_to_event(c: char) -> Option<InputEvent> {
    match c {
        '0'..='9' => Some(InputEvent::Digit(c as u8 - b'0')),
        '.' => Some(InputEvent::Decimal),
        '=' => Some(InputEvent::Evaluate),
        'c' | 'C' => Some(InputEvent::Clear),
        '<' => Some(InputEvent::DeleteLast),
        _ => Operator::from_symbol(c).map(InputEvent::Operator),
    }
}

/// Parses a key script into an event sequence, skipping whitespace and
/// unmapped characters. `"5+3="` becomes digit, operator, digit, evaluate.
#[must_use]
pub fn script(keys: &str) -> Vec<InputEvent> {
    keys.chars().filter_map(char_to_event).collect()
}
