//! Sumar — a keypad calculator session bound to pluggable display surfaces.
//!
//! The crate is a single interaction loop: digit and operator events feed a
//! string-typed session state machine, and every transition reports what a
//! display surface should show next. The pure core ([`core`]) knows nothing
//! about rendering; adapters ([`display`], [`tui`]) perform the writes.
//!
//! # Example
//!
//! ```rust
//! use sumar::prelude::*;
//!
//! let mut driver = HeadlessDriver::new();
//! driver.press_keys("5+3=");
//! assert_eq!(driver.display(), "8");
//!
//! driver.press_keys("c6/0=");
//! assert_eq!(driver.display(), "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod display;
pub mod driver;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::core::{
        CalcError, CalcResult, DisplayValue, InputEvent, Operator, Phase, Session,
    };
    pub use crate::display::{Controller, DisplaySink, TextPanel};
    pub use crate::driver::{HeadlessDriver, SessionDriver};
    pub use crate::keypad::{char_to_event, script, Keypad, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::CalculatorApp;
}
