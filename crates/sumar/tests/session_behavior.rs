//! End-to-end behavioral tests over the unified driver.
//!
//! The shared suites in `sumar::driver` encode the observable contract of
//! the session; this file runs them on every frontend and pins down the
//! historical oddities individually.

use sumar::driver::{self, HeadlessDriver, SessionDriver};
use sumar::prelude::*;

// ===== Unified suites =====

#[test]
fn test_headless_full_specification() {
    let mut driver = HeadlessDriver::new();
    driver::run_full_specification(&mut driver);
}

#[cfg(feature = "tui")]
#[test]
fn test_tui_full_specification() {
    let mut driver = TuiDriver::new();
    driver::run_full_specification(&mut driver);
}

// ===== Individual walkthroughs =====

#[test]
fn test_addition_walkthrough() {
    let mut driver = HeadlessDriver::new();
    driver.press_keys("5+3=");
    assert_eq!(driver.display(), "8");
}

#[test]
fn test_operator_folding_walkthrough() {
    let mut driver = HeadlessDriver::new();
    // `-` folds 5+3 into 8; `=` with no second operand repeats it: 8-8.
    driver.press_keys("5+3-");
    assert_eq!(driver.display(), "8");
    driver.press_keys("=");
    assert_eq!(driver.display(), "0");
}

#[test]
fn test_divide_by_zero_starts_fresh() {
    let mut driver = HeadlessDriver::new();
    driver.press_keys("6/0=");
    assert_eq!(driver.display(), "Error");
    driver.press_keys("7");
    assert_eq!(driver.display(), "7");
    assert_eq!(driver.controller().session().stored_operand(), "");
    assert_eq!(driver.controller().session().pending_operator(), None);
}

#[test]
fn test_operator_substitution_walkthrough() {
    let mut driver = HeadlessDriver::new();
    // `+` then `*` with no second operand: the operator is replaced.
    driver.press_keys("5+*3=");
    assert_eq!(driver.display(), "15");
}

#[test]
fn test_lone_number_evaluate() {
    let mut driver = HeadlessDriver::new();
    driver.press_keys("41=");
    assert_eq!(driver.display(), "41");
    // The entry survives; a repeated `=` shows it verbatim.
    driver.press_keys("=");
    assert_eq!(driver.display(), "41");
}

#[test]
fn test_repeat_operand_division() {
    let mut driver = HeadlessDriver::new();
    // "9 / =": the stored operand stands in on both sides.
    driver.press_keys("9/=");
    assert_eq!(driver.display(), "1");
}

#[test]
fn test_decimal_arithmetic_surfaces_ieee_artifacts() {
    let mut driver = HeadlessDriver::new();
    driver.press_keys(".1+.2=");
    assert_eq!(driver.display(), "0.30000000000000004");
}

#[test]
fn test_delete_last_then_operate() {
    let mut driver = HeadlessDriver::new();
    driver.press_keys("12<+3=");
    assert_eq!(driver.display(), "4");
}

#[test]
fn test_display_write_sequence() {
    let mut driver = HeadlessDriver::new();
    driver.press_keys("1+2=");
    // Initial refresh, two digits, and the result; the operator press
    // writes nothing.
    assert_eq!(driver.controller().sink().writes(), ["0", "1", "2", "3"]);
}

// ===== Event tape replay =====

#[test]
fn test_json_event_tape_replay() {
    let tape = r#"[
        {"Digit": 7},
        {"Operator": "Multiply"},
        {"Digit": 6},
        "Evaluate"
    ]"#;
    let events: Vec<InputEvent> = serde_json::from_str(tape).expect("valid tape");

    let mut driver = HeadlessDriver::new();
    for event in events {
        driver.press(event);
    }
    assert_eq!(driver.display(), "42");
}

#[test]
fn test_event_tape_roundtrip_matches_script() {
    let events = script("8-2.5=");
    let json = serde_json::to_string(&events).expect("serializable");
    let replayed: Vec<InputEvent> = serde_json::from_str(&json).expect("deserializable");

    let mut direct = HeadlessDriver::new();
    let mut tape = HeadlessDriver::new();
    for event in &events {
        direct.press(*event);
    }
    for event in replayed {
        tape.press(event);
    }
    assert_eq!(direct.display(), "5.5");
    assert_eq!(direct.display(), tape.display());
}
