use std::fs;

use rpnote::{
    config::{Config, parse_variable_setting},
    error::ParseError,
    get_result,
    keypad::Keypad,
    script::runner::run_script,
};

fn run(src: &str) -> (Option<f64>, String) {
    let mut keypad = Keypad::default();
    let result = run_script(src, &mut keypad).unwrap_or_else(|e| panic!("Script failed: {e}"));
    (result, keypad.description())
}

fn assert_result(src: &str, expected: Option<f64>, description: &str) {
    assert_eq!(run(src), (expected, description.to_string()), "script: {src}");
}

fn assert_failure(src: &str) -> ParseError {
    let mut keypad = Keypad::default();
    match run_script(src, &mut keypad) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_result("5 3 −", Some(2.0), "5−3");
    assert_result("5 3 -", Some(2.0), "5−3");
    assert_result("12 4 /", Some(3.0), "12÷4");
    assert_result("6 7 *", Some(42.0), "6×7");
    assert_result("1.5 2.25 +", Some(3.75), "1+2");
}

#[test]
fn unary_operators_and_constants() {
    assert_result("3 4 + √", Some(7.0_f64.sqrt()), "√(3+4)");
    assert_result("0 cos", Some(1.0), "cos(0)");
    assert_result("sin", None, "sin()");

    let (result, description) = run("π 2 ÷ sin");
    assert!((result.unwrap() - 1.0).abs() < 1e-12);
    assert_eq!(description, "sin(π÷2)");
}

#[test]
fn store_and_recall_variables() {
    assert_result("7 →M M +", Some(14.0), "M+(M)");
    assert_result("7 ->M", Some(7.0), "M");
    assert_result("foo", None, "");
    assert_result("3 foo", None, "3");
}

#[test]
fn unknown_operators_are_ignored() {
    assert_result("3 %", Some(3.0), "3");
    assert_result("3 % 4", Some(4.0), "3, 4");
}

#[test]
fn clear_starts_over() {
    assert_result("1 2 + clear 3", Some(3.0), "3");
    assert_result("1 2 clear", None, "");
}

#[test]
fn comments_and_lines() {
    assert_result("3 4 + # the sum\n2 ×", Some(14.0), "3+4×2");
}

#[test]
fn example_script() {
    let contents = fs::read_to_string("tests/example.rpn").expect("missing file");
    assert_result(&contents, Some(5.0), "r×(r)×(π), √(3×3+(4×4))");
}

#[test]
fn unexpected_token_reports_line() {
    assert_eq!(assert_failure("5 @"),
               ParseError::UnexpectedToken { token: "@".to_string(),
                                             line:  1, });
    assert_eq!(assert_failure("1\n2 $"),
               ParseError::UnexpectedToken { token: "$".to_string(),
                                             line:  2, });
}

#[test]
fn malformed_words_are_errors() {
    assert_eq!(assert_failure("3 →"), ParseError::MissingVariableName { line: 1 });
    assert_eq!(assert_failure("1e999"),
               ParseError::InvalidNumber { literal: "1e999".to_string(),
                                           line:    1, });
}

#[test]
fn keypad_collects_digits_until_enter() {
    let mut keypad = Keypad::default();
    keypad.key_in("1");
    keypad.key_in(".");
    keypad.key_in("5");
    assert!(keypad.is_typing());
    assert_eq!(keypad.display_text(), "1.5");
    assert!(keypad.engine().is_empty());

    assert_eq!(keypad.enter(), Some(1.5));
    assert!(!keypad.is_typing());
    assert_eq!(keypad.display_text(), "1.5");
}

#[test]
fn keypad_discards_malformed_entries() {
    let mut keypad = Keypad::default();
    keypad.key_in("1.2.3");
    assert_eq!(keypad.enter(), None);
    assert!(keypad.engine().is_empty());
    assert_eq!(keypad.display_text(), "");
}

#[test]
fn keypad_enter_repeats_the_display() {
    let mut keypad = Keypad::default();
    keypad.key_in("2");
    keypad.enter();
    keypad.enter();
    assert_eq!(keypad.operate("×"), Some(4.0));
    assert_eq!(keypad.description(), "2×2");
}

#[test]
fn keypad_store_uses_the_typed_value() {
    let mut keypad = Keypad::default();
    assert_eq!(keypad.store("M"), None);

    keypad.key_in("7");
    assert_eq!(keypad.store("M"), Some(7.0));
    assert_eq!(keypad.description(), "M");
    assert_eq!(keypad.engine().get_variable("M"), Some(7.0));

    keypad.clear();
    assert_eq!(keypad.display(), None);
    assert_eq!(keypad.recall("M"), Some(7.0));
}

#[test]
fn variable_presets() {
    assert_eq!(parse_variable_setting(" x = 2.5").unwrap(), ("x".to_string(), 2.5));
    assert_eq!(parse_variable_setting("x=abc").unwrap_err(),
               ParseError::InvalidAssignment { setting: "x=abc".to_string() });

    let config = Config { variables: vec![("M".to_string(), 4.0)],
                          ..Config::default() };
    let mut keypad = Keypad::new(config.engine());
    assert_eq!(run_script("M √", &mut keypad).unwrap(), Some(2.0));
}

#[test]
fn get_result_reports_errors() {
    assert!(get_result("3 4 +", &Config::default()).is_ok());
    assert!(get_result("", &Config { describe: true,
                                     ..Config::default() }).is_ok());
    assert!(get_result("3 →", &Config::default()).is_err());
}
