//! The four binary operators and their arithmetic.

use serde::{Deserialize, Serialize};

use super::{CalcError, CalcResult};

/// A binary operator selected from the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Subtract,
    /// Multiplication (`*`).
    Multiply,
    /// Division (`/`).
    Divide,
}

impl Operator {
    /// Returns the operator symbol for display and key mapping.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Maps a key character to an operator.
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator with IEEE double-precision semantics.
    ///
    /// Division guards the right operand against zero before dividing;
    /// every other result is returned as computed.
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== Symbol mapping tests =====

    #[test]
    fn test_symbol_all() {
        assert_eq!(Operator::Add.symbol(), '+');
        assert_eq!(Operator::Subtract.symbol(), '-');
        assert_eq!(Operator::Multiply.symbol(), '*');
        assert_eq!(Operator::Divide.symbol(), '/');
    }

    #[test]
    fn test_from_symbol_all() {
        assert_eq!(Operator::from_symbol('+'), Some(Operator::Add));
        assert_eq!(Operator::from_symbol('-'), Some(Operator::Subtract));
        assert_eq!(Operator::from_symbol('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol('^'), None);
        assert_eq!(Operator::from_symbol('x'), None);
    }

    #[test]
    fn test_display_matches_symbol() {
        assert_eq!(format!("{}", Operator::Multiply), "*");
    }

    // ===== Arithmetic tests =====

    #[test]
    fn test_apply_add() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Add.apply(-2.0, 5.0), Ok(3.0));
    }

    #[test]
    fn test_apply_subtract() {
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), Ok(2.0));
        assert_eq!(Operator::Subtract.apply(3.0, 5.0), Ok(-2.0));
    }

    #[test]
    fn test_apply_multiply() {
        assert_eq!(Operator::Multiply.apply(6.0, 7.0), Ok(42.0));
        assert_eq!(Operator::Multiply.apply(5.0, 0.0), Ok(0.0));
    }

    #[test]
    fn test_apply_divide() {
        assert_eq!(Operator::Divide.apply(6.0, 2.0), Ok(3.0));
        assert_eq!(Operator::Divide.apply(7.0, 2.0), Ok(3.5));
    }

    #[test]
    fn test_apply_divide_by_zero() {
        assert_eq!(
            Operator::Divide.apply(6.0, 0.0),
            Err(CalcError::DivideByZero)
        );
    }

    #[test]
    fn test_apply_divide_by_negative_zero() {
        // -0.0 == 0.0 under IEEE comparison, so this is the same failure.
        assert_eq!(
            Operator::Divide.apply(6.0, -0.0),
            Err(CalcError::DivideByZero)
        );
    }

    #[test]
    fn test_apply_divide_zero_lhs() {
        assert_eq!(Operator::Divide.apply(0.0, 5.0), Ok(0.0));
    }

    // ===== Property tests =====

    fn operator_strategy() -> impl Strategy<Value = Operator> {
        prop_oneof![
            Just(Operator::Add),
            Just(Operator::Subtract),
            Just(Operator::Multiply),
            Just(Operator::Divide),
        ]
    }

    proptest! {
        #[test]
        fn prop_symbol_roundtrip(op in operator_strategy()) {
            prop_assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }

        #[test]
        fn prop_add_commutative(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            let r1 = Operator::Add.apply(a, b).unwrap();
            let r2 = Operator::Add.apply(b, a).unwrap();
            prop_assert!((r1 - r2).abs() < 1e-10);
        }

        #[test]
        fn prop_divide_nonzero_never_errors(a in -1e10f64..1e10f64, b in 1e-3f64..1e10f64) {
            prop_assert!(Operator::Divide.apply(a, b).is_ok());
        }
    }
}
