//! End-to-end sessions driven through parsed key tokens.

use zcalc::input::parse_tokens;
use zcalc::{Calculator, Config, Render};

fn run(calculator: &mut Calculator, line: &str) -> Render {
    for input in parse_tokens(line) {
        calculator.handle_input(&input);
    }
    calculator.render()
}

#[test]
fn test_simple_sum() {
    let mut calculator = Calculator::default();
    let render = run(&mut calculator, "2 + 3 Enter");
    assert_eq!(render.display, "5");
    assert_eq!(calculator.history().entries()[0].to_string(), "2 + 3 = 5");
}

#[test]
fn test_chained_evaluation() {
    let mut calculator = Calculator::default();
    let render = run(&mut calculator, "2+3x4=");
    assert_eq!(render.display, "20");
    assert_eq!(calculator.history().len(), 2);
}

#[test]
fn test_large_result_is_grouped() {
    let mut calculator = Calculator::default();
    let render = run(&mut calculator, "999999*1000=");
    assert_eq!(render.display, "999,999,000");
}

#[test]
fn test_floating_point_noise_is_rounded() {
    let mut calculator = Calculator::default();
    let render = run(&mut calculator, ".1+.2=");
    assert_eq!(render.display, "0.3");
    assert_eq!(
        calculator.history().entries()[0].to_string(),
        "0.1 + .2 = 0.3"
    );
}

#[test]
fn test_result_feeds_next_operation() {
    let mut calculator = Calculator::default();
    run(&mut calculator, "10/4=");
    let render = run(&mut calculator, "*2=");
    assert_eq!(render.display, "5");
    assert_eq!(
        calculator.history().entries()[1].to_string(),
        "2.5 × 2 = 5"
    );
}

#[test]
fn test_negative_start() {
    let mut calculator = Calculator::default();
    let render = run(&mut calculator, "-");
    assert_eq!(render.display, "-0");
    assert_eq!(render.previous_operation, "");
}

#[test]
fn test_sign_and_percent() {
    let mut calculator = Calculator::default();
    let render = run(&mut calculator, "50 %");
    assert_eq!(render.display, "0.5");
    let render = run(&mut calculator, "neg");
    assert_eq!(render.display, "-0.5");
}

#[test]
fn test_negative_power_base() {
    let mut calculator = Calculator::default();
    let render = run(&mut calculator, "2 neg ^ 2 =");
    assert_eq!(render.display, "Error");
    assert!(calculator.history().is_empty());

    let render = run(&mut calculator, "c 2 ^ 2 neg =");
    assert_eq!(render.display, "0.25");
}

#[test]
fn test_error_then_clear() {
    let mut calculator = Calculator::default();
    let render = run(&mut calculator, "7/0=");
    assert_eq!(render.display, "Error");

    let render = run(&mut calculator, "5 + % neg");
    assert_eq!(render.display, "Error");
    assert_eq!(render.previous_operation, "");

    let render = run(&mut calculator, "c 5");
    assert_eq!(render.display, "5");
}

#[test]
fn test_history_view_round_trip() {
    let config = Config {
        history_limit: 20,
        ..Config::default()
    };
    let mut calculator = Calculator::new(config);
    for _ in 0..25 {
        run(&mut calculator, "1+1=");
    }

    let render = run(&mut calculator, "history");
    let lines: Vec<&str> = render.history.as_deref().unwrap().lines().collect();
    assert_eq!(lines.len(), 20);
    assert_eq!(calculator.history().len(), 25);

    // Typing is ignored while the view is open; Escape closes it.
    let render = run(&mut calculator, "9 Escape");
    assert!(!render.history_open);
    assert_eq!(render.display, "2");

    let render = run(&mut calculator, "clear-history history");
    assert_eq!(render.history.as_deref(), Some("No history"));
}
