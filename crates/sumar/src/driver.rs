//! Unified session driver.
//!
//! One driver trait over every frontend, so behavioral suites are written
//! once and run against the headless controller and the TUI app alike.

use crate::core::InputEvent;
use crate::display::{Controller, TextPanel};
use crate::keypad;

/// Abstract driver over a calculator frontend.
pub trait SessionDriver {
    /// Delivers one input event.
    fn press(&mut self, event: InputEvent);

    /// Delivers a whole key script (see [`keypad::script`]).
    fn press_keys(&mut self, keys: &str) {
        for event in keypad::script(keys) {
            self.press(event);
        }
    }

    /// Current contents of the display surface.
    fn display(&self) -> String;

    /// The operand currently being typed.
    fn entry(&self) -> String;

    /// Resets the session.
    fn clear(&mut self) {
        self.press(InputEvent::Clear);
    }
}

/// Driver over a controller bound to an in-memory panel.
#[derive(Debug)]
pub struct HeadlessDriver {
    controller: Controller<TextPanel>,
}

impl Default for HeadlessDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDriver {
    /// Creates a headless driver with a fresh session and panel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            controller: Controller::default(),
        }
    }

    /// The underlying controller.
    #[must_use]
    pub fn controller(&self) -> &Controller<TextPanel> {
        &self.controller
    }
}

impl SessionDriver for HeadlessDriver {
    fn press(&mut self, event: InputEvent) {
        self.controller.apply(event);
    }

    fn display(&self) -> String {
        self.controller.sink().content().to_string()
    }

    fn entry(&self) -> String {
        self.controller.session().entry().to_string()
    }
}

/// TUI driver implementation.
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::SessionDriver;
    use crate::core::InputEvent;
    use crate::tui::CalculatorApp;

    /// Driver wrapping the TUI application state.
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a TUI driver with a fresh app.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// The underlying app.
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl SessionDriver for TuiDriver {
        fn press(&mut self, event: InputEvent) {
            self.app.press(event);
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn entry(&self) -> String {
            self.app.session().entry().to_string()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified behavioral suites =====
// These run against ANY SessionDriver implementation.

/// Digit-only entry displays the typed string verbatim, before and after
/// evaluation.
pub fn verify_digit_entry<D: SessionDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("007");
    assert_eq!(driver.display(), "007");
    driver.press_keys("=");
    assert_eq!(driver.display(), "007");
    driver.clear();
}

/// A second decimal point in the same operand is ignored.
pub fn verify_single_decimal_point<D: SessionDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("3.1.");
    assert_eq!(driver.display(), "3.1");
    assert_eq!(driver.entry(), "3.1");
    driver.clear();
}

/// One pending binary operation computes on evaluate.
pub fn verify_pending_operation<D: SessionDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("5+3=");
    assert_eq!(driver.display(), "8");
    driver.clear();
}

/// An operator press with a full expression pending folds it first; a
/// following evaluate with no second operand repeats the stored operand.
pub fn verify_operator_folding<D: SessionDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("5+3-");
    assert_eq!(driver.display(), "8");
    driver.press_keys("=");
    assert_eq!(driver.display(), "0");
    driver.clear();
}

/// Division by zero shows `Error` and fully resets the session.
pub fn verify_divide_by_zero_reset<D: SessionDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("6/0=");
    assert_eq!(driver.display(), "Error");
    driver.press_keys("7");
    assert_eq!(driver.display(), "7");
    assert_eq!(driver.entry(), "7");
    driver.clear();
}

/// Clear restores `"0"` and is idempotent.
pub fn verify_clear_idempotence<D: SessionDriver>(driver: &mut D) {
    driver.press_keys("9*9=");
    driver.clear();
    assert_eq!(driver.display(), "0");
    driver.clear();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.entry(), "");
}

/// Delete-last shortens the entry and is a no-op when empty.
pub fn verify_delete_last<D: SessionDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("<");
    assert_eq!(driver.display(), "0");
    driver.press_keys("12<");
    assert_eq!(driver.display(), "1");
    driver.clear();
}

/// Runs every suite in order.
pub fn run_full_specification<D: SessionDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_single_decimal_point(driver);
    verify_pending_operation(driver);
    verify_operator_folding(driver);
    verify_divide_by_zero_reset(driver);
    verify_clear_idempotence(driver);
    verify_delete_last(driver);
}
