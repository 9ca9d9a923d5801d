//! Edge-triggered callback behaviour of `StringValidator`.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use rstest::rstest;
use textguard::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fired {
    Valid,
    Invalid,
}

type Log = Rc<RefCell<Vec<Fired>>>;

fn wired(validator: &mut StringValidator) -> Log {
    let log: Log = Rc::default();
    let valid = Rc::clone(&log);
    validator.set_on_valid(move |_: &StringValidator| valid.borrow_mut().push(Fired::Valid));
    let invalid = Rc::clone(&log);
    validator.set_on_invalid(move |_: &StringValidator| invalid.borrow_mut().push(Fired::Invalid));
    log
}

#[test]
fn length_scenario_three_to_five() {
    let mut validator = StringValidator::new(Some(3), Some(5), None).unwrap();
    let log = wired(&mut validator);
    // Assigning on_valid to a fresh (valid) validator announces the state.
    assert_eq!(*log.borrow(), vec![Fired::Valid]);
    log.borrow_mut().clear();

    validator.update("ab");
    assert!(!validator.is_length_valid());
    assert!(!validator.is_valid());
    assert_eq!(*log.borrow(), vec![Fired::Invalid]);

    validator.update("abcd");
    assert!(validator.is_length_valid());
    assert!(validator.is_valid());
    assert_eq!(*log.borrow(), vec![Fired::Invalid, Fired::Valid]);

    validator.update("abcde");
    assert!(validator.is_valid());
    assert_eq!(log.borrow().len(), 2, "no flip, no callback");

    validator.update("abcdef");
    assert!(!validator.is_length_valid());
    assert!(!validator.is_valid());
    assert_eq!(
        *log.borrow(),
        vec![Fired::Invalid, Fired::Valid, Fired::Invalid]
    );
}

#[test]
fn on_valid_fires_on_assignment_without_update() {
    let mut validator = StringValidator::default();
    let log = wired(&mut validator);
    assert_eq!(*log.borrow(), vec![Fired::Valid]);
}

#[test]
fn set_validation_defers_to_next_update() {
    let mut validator = StringValidator::default();
    let log = wired(&mut validator);
    log.borrow_mut().clear();

    validator.set_validation(Some(4), Some(4), Some("[a-z]+")).unwrap();
    assert!(validator.is_valid());
    assert!(log.borrow().is_empty());

    assert!(!validator.test("abc"));
    assert!(validator.is_valid(), "test does not touch state");

    validator.update("abc");
    assert_eq!(*log.borrow(), vec![Fired::Invalid]);
}

#[test]
fn shared_callback_can_tell_validators_apart() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let callback = {
        let seen = Rc::clone(&seen);
        move |v: &StringValidator| seen.borrow_mut().push(v.min_length())
    };

    let mut short = StringValidator::new(Some(1), None, None).unwrap();
    let mut long = StringValidator::new(Some(8), None, None).unwrap();
    short.set_on_invalid(callback.clone());
    long.set_on_invalid(callback);

    long.update("abc");
    short.update("");
    assert_eq!(*seen.borrow(), vec![Some(8), Some(1)]);
}

#[rstest]
#[case("123", true)]
#[case("12", false)]
#[case("1234", false)]
#[case("12a", false)]
fn three_digit_pattern(#[case] input: &str, #[case] expected: bool) {
    let mut validator = StringValidator::new(None, None, Some("^[0-9]{3}$")).unwrap();
    assert_eq!(validator.test_regex(input), expected);

    validator.update(input);
    assert_eq!(validator.is_regex_valid(), expected);
    assert!(validator.is_length_valid());
    assert_eq!(validator.is_valid(), expected);
}

#[test]
fn malformed_pattern_is_a_configuration_error() {
    assert!(matches!(
        StringValidator::new(None, None, Some("[0-9")),
        Err(ConfigError::InvalidPattern { .. })
    ));

    let mut validator = StringValidator::new(None, None, Some("[0-9]+")).unwrap();
    let err = validator.set_validation(None, None, Some("*")).unwrap_err();
    assert_eq!(err.pattern(), Some("*"));
    assert_eq!(validator.regex_pattern(), Some("[0-9]+"));
}

fn failing_callback(_: &StringValidator) {
    panic!("callback failed");
}

#[test]
#[should_panic(expected = "callback failed")]
fn panicking_callback_propagates_to_update() {
    let mut validator = StringValidator::new(Some(2), None, None).unwrap();
    validator.set_on_invalid(failing_callback);
    validator.update("a");
}

#[test]
fn rules_from_json_drive_the_validator() {
    let rules = ValidationRules::from_json(
        r#"{ "min_length": 2, "max_length": 3, "length_mode": "utf16" }"#,
    )
    .unwrap();
    let mut validator = StringValidator::from_rules(rules).unwrap();

    // One astral char is two UTF-16 units.
    validator.update("\u{1f600}");
    assert!(validator.is_valid());
    validator.update("\u{1f600}\u{1f600}");
    assert!(!validator.is_valid());
}
