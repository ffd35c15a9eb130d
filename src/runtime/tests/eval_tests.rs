//! End-to-end evaluation tests, going from source text to a [`Value`].

use runtime::{evaluate, Error, Value};

fn eval(input: &str) -> Result<Value, Error> {
    let tree = syntax::parse(input).expect("input should parse");
    evaluate(&tree)
}

#[test]
fn precedence_orders_evaluation() {
    assert_eq!(eval("2 + 3 * 4"), Ok(Value::Int(14)));
    assert_eq!(eval("2 * 3 + 4"), Ok(Value::Int(10)));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(eval("(2 + 3) * 4"), Ok(Value::Int(20)));
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(eval("8 - 3 - 2"), Ok(Value::Int(3)));
}

#[test]
fn division_is_left_associative_and_float() {
    assert_eq!(eval("8 / 4 / 2"), Ok(Value::Float(1.0)));
}

#[test]
fn unary_minus() {
    assert_eq!(eval("-2 * 3"), Ok(Value::Int(-6)));
    assert_eq!(eval("--5"), Ok(Value::Int(5)));
    assert_eq!(eval("2 + -3"), Ok(Value::Int(-1)));
}

#[test]
fn floats_mix_with_integers() {
    assert_eq!(eval("2 + 3.5"), Ok(Value::Float(5.5)));
    assert_eq!(eval("0.1 + 0.2"), Ok(Value::Float(0.3)));
}

#[test]
fn division_by_zero_is_an_error() {
    assert!(matches!(eval("1 / 0"), Err(Error::DivisionByZero(_))));
}

#[test]
fn zero_divided_is_fine() {
    assert_eq!(eval("0 / 5"), Ok(Value::Float(0.0)));
}

#[test]
fn overflow_is_an_error() {
    assert!(matches!(
        eval("9223372036854775807 + 1"),
        Err(Error::Overflow(_))
    ));
    assert!(matches!(
        eval("9223372036854775807 * 2"),
        Err(Error::Overflow(_))
    ));
}

#[test]
fn same_tree_evaluates_the_same_twice() {
    let tree = syntax::parse("2 + 3 * 4").unwrap();
    assert_eq!(evaluate(&tree), evaluate(&tree));
}
