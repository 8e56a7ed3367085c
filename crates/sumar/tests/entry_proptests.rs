//! Property-based tests for the entry accumulator and keypad.

use proptest::prelude::*;
use sumar::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

fn event_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        digit_strategy().prop_map(InputEvent::Digit),
        Just(InputEvent::Decimal),
        operator_strategy().prop_map(InputEvent::Operator),
        Just(InputEvent::Evaluate),
        Just(InputEvent::Clear),
        Just(InputEvent::DeleteLast),
    ]
}

fn run(events: &[InputEvent]) -> HeadlessDriver {
    let mut driver = HeadlessDriver::new();
    for event in events {
        driver.press(*event);
    }
    driver
}

// ===== Entry accumulation properties =====

proptest! {
    /// Digit-only entry is displayed verbatim, leading zeros included,
    /// before and after an evaluate.
    #[test]
    fn prop_digit_entry_verbatim(digits in prop::collection::vec(digit_strategy(), 1..12)) {
        let events: Vec<InputEvent> = digits.iter().copied().map(InputEvent::Digit).collect();
        let expected: String = digits.iter().map(u8::to_string).collect();

        let mut driver = run(&events);
        prop_assert_eq!(driver.display(), expected.clone());

        driver.press(InputEvent::Evaluate);
        prop_assert_eq!(driver.display(), expected);
    }

    /// The entry never holds more than one decimal point, whatever the
    /// event sequence.
    #[test]
    fn prop_at_most_one_decimal_point(events in prop::collection::vec(event_strategy(), 0..32)) {
        let driver = run(&events);
        let dots = driver.entry().matches('.').count();
        prop_assert!(dots <= 1, "entry {:?} has {} dots", driver.entry(), dots);
    }

    /// The display surface is never empty: it always shows an entry, a
    /// result, `"0"`, or `"Error"`.
    #[test]
    fn prop_display_never_empty(events in prop::collection::vec(event_strategy(), 0..32)) {
        let driver = run(&events);
        prop_assert!(!driver.display().is_empty());
    }

    /// Clear restores the initial state after any event sequence.
    #[test]
    fn prop_clear_restores_initial_state(events in prop::collection::vec(event_strategy(), 0..32)) {
        let mut driver = run(&events);
        driver.press(InputEvent::Clear);
        prop_assert_eq!(driver.display(), "0");
        prop_assert_eq!(driver.entry(), "");
        prop_assert_eq!(driver.controller().session().phase(), Phase::Idle);
    }

    /// Delete-last never panics and only ever shortens the entry.
    #[test]
    fn prop_delete_last_shortens(events in prop::collection::vec(event_strategy(), 0..32)) {
        let mut driver = run(&events);
        let before = driver.entry().len();
        driver.press(InputEvent::DeleteLast);
        prop_assert!(driver.entry().len() <= before);
    }

    /// A session driven twice by the same events lands in the same state.
    #[test]
    fn prop_deterministic_replay(events in prop::collection::vec(event_strategy(), 0..32)) {
        let a = run(&events);
        let b = run(&events);
        prop_assert_eq!(a.display(), b.display());
        prop_assert_eq!(a.controller().session(), b.controller().session());
    }
}

// ===== Keypad properties =====

proptest! {
    /// Every grid position inside the full rows holds a button.
    #[test]
    fn prop_full_rows_populated(row in 0usize..4usize, col in 0usize..4usize) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, col).is_some());
    }

    /// Positions outside the grid are empty.
    #[test]
    fn prop_out_of_bounds_empty(row in 5usize..64usize, col in 0usize..64usize) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, col).is_none());
    }

    /// Button labels are unique across the keypad.
    #[test]
    fn prop_labels_unique(_seed in any::<u32>()) {
        let keypad = Keypad::new();
        let mut labels = std::collections::HashSet::new();
        for btn in keypad.buttons() {
            prop_assert!(labels.insert(btn.label), "duplicate label {}", btn.label);
        }
    }

    /// Highlighting any event leaves at most one pressed button, and that
    /// button emits the highlighted event.
    #[test]
    fn prop_highlight_exclusive(event in event_strategy()) {
        let mut keypad = Keypad::new();
        keypad.highlight_event(event);
        let pressed: Vec<&KeypadButton> = keypad.buttons().filter(|b| b.pressed).collect();
        prop_assert!(pressed.len() <= 1);
        if let Some(btn) = pressed.first() {
            prop_assert_eq!(btn.event, event);
        }
    }

    /// Digit characters map to the digit events their buttons emit.
    #[test]
    fn prop_digit_char_mapping(d in digit_strategy()) {
        let c = char::from_digit(u32::from(d), 10).unwrap();
        prop_assert_eq!(char_to_event(c), Some(InputEvent::Digit(d)));
    }
}
