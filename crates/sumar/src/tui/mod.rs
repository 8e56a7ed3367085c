//! Terminal frontend: the keypad calculator rendered with ratatui.

mod app;
mod input;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use ui::{render, CalculatorUI, KeypadWidget};
