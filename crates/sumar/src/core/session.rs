//! The calculator input session: a four-state accumulator over three
//! string-typed fields.
//!
//! Operands are accumulated as character sequences, not numbers; that is
//! what lets leading zeros, in-progress decimals, and "no entry yet" all
//! be represented. Conversion to `f64` happens once, at evaluation time.
//!
//! Every transition returns an `Option<DisplayValue>`: `Some` means the
//! display surface must be overwritten with the projection, `None` means
//! the display keeps showing whatever it showed before (operator presses
//! intentionally leave the just-completed number on screen).

use super::{CalcError, DisplayValue, InputEvent, Operator};

/// Logical state of the session, derived from field emptiness.
///
/// Diagnostic only: transitions never branch on `Phase`, tests use it to
/// assert where a sequence of events landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// All fields empty; nothing entered since start, clear, or error.
    Idle,
    /// An operand is being typed, no operator selected.
    DigitEntry,
    /// An operator is selected and the right-hand operand is still empty.
    OperatorPending,
    /// An operator is selected and the right-hand operand is in progress.
    SecondOperand,
}

/// Calculator session state.
///
/// Construction leaves every field empty; the display projection of that
/// state is `"0"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Operand currently being typed (digits, at most one `.`).
    entry: String,
    /// Previously committed left-hand operand.
    stored: String,
    /// Operation selected but not yet applied.
    pending: Option<Operator>,
}

impl Session {
    /// Creates a session with all fields empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The operand currently being typed.
    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// The committed left-hand operand, empty if none.
    #[must_use]
    pub fn stored_operand(&self) -> &str {
        &self.stored
    }

    /// The operator awaiting its right-hand operand, if any.
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    /// Derives the logical phase from field emptiness.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.entry.is_empty(), self.pending.is_some()) {
            (true, true) => Phase::OperatorPending,
            (false, true) => Phase::SecondOperand,
            (false, false) => Phase::DigitEntry,
            (true, false) => Phase::Idle,
        }
    }

    /// Projects the current entry for display: the entry verbatim, or
    /// `"0"` when nothing has been typed.
    #[must_use]
    pub fn display_value(&self) -> DisplayValue {
        if self.entry.is_empty() {
            DisplayValue::Text("0".into())
        } else {
            DisplayValue::Text(self.entry.clone())
        }
    }

    /// Dispatches a single input event to the matching transition.
    pub fn press(&mut self, event: InputEvent) -> Option<DisplayValue> {
        match event {
            InputEvent::Digit(d) => self.push_digit(d),
            InputEvent::Decimal => self.push_decimal(),
            InputEvent::Operator(op) => self.press_operator(op),
            InputEvent::Evaluate => self.evaluate(),
            InputEvent::Clear => Some(self.clear()),
            InputEvent::DeleteLast => Some(self.delete_last()),
        }
    }

    /// Appends a digit to the current entry.
    ///
    /// Values above 9 are not representable on the keypad and are ignored.
    pub fn push_digit(&mut self, digit: u8) -> Option<DisplayValue> {
        let c = char::from_digit(u32::from(digit), 10)?;
        self.entry.push(c);
        Some(self.display_value())
    }

    /// Appends the decimal point to the current entry.
    ///
    /// A second `.` within the same operand is silently ignored, without a
    /// display refresh.
    pub fn push_decimal(&mut self) -> Option<DisplayValue> {
        if self.entry.contains('.') {
            return None;
        }
        self.entry.push('.');
        Some(self.display_value())
    }

    /// Selects a binary operator.
    ///
    /// With a full expression pending, the expression is folded first and
    /// its result becomes the new left-hand operand. A bare operator press
    /// while the right-hand operand is still empty substitutes the pending
    /// operator. With nothing entered yet, the press is a no-op.
    pub fn press_operator(&mut self, op: Operator) -> Option<DisplayValue> {
        if !self.stored.is_empty() && self.pending.is_some() && !self.entry.is_empty() {
            // Fold the pending expression; whatever lands in the entry
            // (result, or nothing after a failure) becomes the stored
            // operand. The inner refresh keeps the folded result on screen.
            let refresh = self.evaluate();
            self.stored = std::mem::take(&mut self.entry);
            self.pending = Some(op);
            refresh
        } else if !self.entry.is_empty() {
            self.stored = std::mem::take(&mut self.entry);
            self.pending = Some(op);
            None
        } else if !self.stored.is_empty() && self.pending.is_some() {
            // Operator key pressed twice in a row: replace the choice.
            self.pending = Some(op);
            None
        } else {
            None
        }
    }

    /// Applies the pending operator to the stored operand and the entry.
    ///
    /// A lone number is treated as its own result. With an operator
    /// pending and no right-hand operand, the stored operand repeats
    /// itself for this computation only. Failure (division by zero,
    /// unparseable operand) resets the whole session and shows `Error`.
    pub fn evaluate(&mut self) -> Option<DisplayValue> {
        if self.entry.is_empty() || self.stored.is_empty() {
            if !self.entry.is_empty() && self.stored.is_empty() && self.pending.is_none() {
                // A number with no operation computes to itself.
                self.stored = self.entry.clone();
                return Some(self.display_value());
            }
            if self.entry.is_empty() && !self.stored.is_empty() && self.pending.is_some() {
                // "5 * =": the operand repeats itself.
                self.entry = self.stored.clone();
            } else {
                return None;
            }
        }

        let Ok(lhs) = self.stored.parse::<f64>() else {
            let err = CalcError::InvalidOperand(self.stored.clone());
            return Some(self.fail(&err));
        };
        let Ok(rhs) = self.entry.parse::<f64>() else {
            let err = CalcError::InvalidOperand(self.entry.clone());
            return Some(self.fail(&err));
        };

        match self.pending {
            Some(op) => match op.apply(lhs, rhs) {
                Ok(result) => {
                    self.entry = result.to_string();
                    self.pending = None;
                    self.stored.clear();
                    Some(self.display_value())
                }
                Err(err) => Some(self.fail(&err)),
            },
            // Both operands present with nothing selected: show the entry
            // verbatim and leave state untouched.
            None => Some(DisplayValue::Text(self.entry.clone())),
        }
    }

    /// Resets every field unconditionally.
    pub fn clear(&mut self) -> DisplayValue {
        self.entry.clear();
        self.stored.clear();
        self.pending = None;
        self.display_value()
    }

    /// Removes the last character of the current entry, if any.
    pub fn delete_last(&mut self) -> DisplayValue {
        self.entry.pop();
        self.display_value()
    }

    /// Collapses the session into the error state: all fields reset, the
    /// display shows the literal `Error`.
    fn fail(&mut self, err: &CalcError) -> DisplayValue {
        tracing::warn!(%err, "expression aborted, session reset");
        self.entry.clear();
        self.stored.clear();
        self.pending = None;
        DisplayValue::Error
    }
}
