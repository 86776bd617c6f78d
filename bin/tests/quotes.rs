use interpreter::{Error, Interpreter, UndefinedVariables};
use pricing::Quote;

use pretty_assertions::assert_eq;

#[ctor::ctor]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn quote() -> Quote {
    Quote::new(145.00, 45.00)
}

fn total(adjustments: &str) -> Result<f64, Error> {
    quote().with_adjustments(adjustments).total_price()
}

#[test]
fn unadjusted() {
    assert_eq!(quote().total_price(), Ok(190.0));
}

#[test]
fn labor_plus_flat_fee() {
    assert_eq!(total("l + 20.00"), Ok(65.0));
}

#[test]
fn parts_minus_flat_discount() {
    assert_eq!(total("p - 10.00"), Ok(135.0));
    assert_eq!(total("l + p - 10.00"), Ok(180.0));
}

#[test]
fn percentage_off_parts() {
    assert_eq!(total("l + p - p * 0.1"), Ok(45.0 + 145.0 - 145.0 * 0.1));
    assert_eq!(total("l + p - p * 0.1"), Ok(175.5));
}

#[test]
fn percentage_off_labor_and_parts() {
    assert_eq!(total("l - l * 0.2 + p - p * 0.1"), Ok(45.0 - 45.0 * 0.2 + 145.0 - 145.0 * 0.1));
    assert_eq!(total("l - l * 0.2 + p - p * 0.1"), Ok(166.5));
}

#[test]
fn percentage_off_everything() {
    assert_eq!(total("l - l * 0.2 + p - p * 0.2"), Ok(45.0 - 9.0 + 145.0 - 29.0));
    assert_eq!(total("l - l * 0.2 + p - p * 0.2"), Ok(152.0));
}

#[test]
fn parts_times_labor() {
    assert_eq!(total("p * l"), Ok(6525.0));
}

#[test]
fn malformed_adjustments_are_reported() {
    assert_eq!(
        total("* p 2").unwrap_err().to_string(),
        "error (c. 1): Expected operand before '*'"
    );
    assert_eq!(
        total("l+p").unwrap_err().to_string(),
        "error (c. 1): Invalid token 'l+p'"
    );
    assert_eq!(total("p / 0"), Err(Error::DivisionByZero));
}

#[test]
fn unknown_variables() {
    let quote = quote().with_adjustments("l + p + tax");
    assert_eq!(quote.total_price(), Err(Error::UndefinedVariable("tax".to_string())));

    let lenient = Interpreter::new().with_undefined_variables(UndefinedVariables::Zero);
    assert_eq!(quote.total_price_with(&lenient), Ok(190.0));
}
