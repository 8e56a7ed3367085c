//! Core calculator session logic.
//!
//! Everything in this module is pure state: transitions take input events
//! and report what the display should show next, without touching any
//! display surface themselves. The thin adapter that performs the actual
//! write lives in [`crate::display`].

mod operator;
pub mod session;

pub use operator::Operator;
pub use session::{Phase, Session};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for arithmetic operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// Failure conditions at evaluation time.
///
/// Neither variant ever propagates out of a [`Session`]: both collapse the
/// session into the `Error` display state (all fields reset, display shows
/// the literal `Error`). The typed error exists so the arithmetic seam is
/// testable on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Right operand of a division was numerically zero.
    #[error("division by zero")]
    DivideByZero,
    /// An operand failed to parse as a number. Not reachable through
    /// digit-only entry, but guarded all the same.
    #[error("operand is not a number: {0:?}")]
    InvalidOperand(String),
}

/// The complete input vocabulary of the calculator.
///
/// Serde-serializable so event tapes can be recorded and replayed as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A digit key, `0`-`9`.
    Digit(u8),
    /// The decimal point key.
    Decimal,
    /// One of the four binary operator keys.
    Operator(Operator),
    /// The "compute now" key (`=`).
    Evaluate,
    /// Full reset (`C`).
    Clear,
    /// Remove the last typed character.
    DeleteLast,
}

/// What the display surface should show after a transition.
///
/// A projection, never stored: the session derives it from the current
/// entry (`"0"` when empty) or reports [`DisplayValue::Error`] after a
/// failure condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    /// A numeric entry or result, verbatim.
    Text(String),
    /// The literal `Error` string shown after a failure.
    Error,
}

impl DisplayValue {
    /// Returns the text to write to the display surface.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Error => "Error",
        }
    }

    /// Returns true for the error projection.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl std::fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
