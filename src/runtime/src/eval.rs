//! Tree-walking evaluation.
//!
//! Evaluation is a single bottom-up fold over the [`Expression`]. Integer
//! arithmetic is checked and reports [`Error::Overflow`] rather than
//! wrapping. Division always produces a float, even between two integers
//! that divide evenly, so `8 / 4` is `2.0` and `8 / 4 / 2` is `1.0`.

use syntax::ast::{
    Binary, BinaryOp, Expression, Syntax, Unary, UnaryOp,
};

use crate::error::Error;
use crate::value::Value;

/// Evaluate an expression to a [`Value`].
///
/// The input tree is not consumed or modified, so the same tree can be
/// evaluated any number of times with the same result.
pub fn evaluate(expression: &Expression) -> Result<Value, Error> {
    match expression {
        Expression::Literal(l) => Ok(Value::from(l.value())),
        Expression::Unary(u) => unary(u),
        Expression::Binary(b) => binary(b),
    }
}

fn unary(u: &Unary) -> Result<Value, Error> {
    let operand = evaluate(u.operand())?;

    match u.operator() {
        UnaryOp::Neg => match operand {
            Value::Int(n) => n
                .checked_neg()
                .map(Value::Int)
                .ok_or_else(|| Error::Overflow(u.span())),
            Value::Float(n) => Ok(Value::Float(-n)),
        },
    }
}

fn binary(b: &Binary) -> Result<Value, Error> {
    let lhs = evaluate(b.left())?;
    let rhs = evaluate(b.right())?;

    match b.operator() {
        BinaryOp::Add => arithmetic(b, lhs, rhs, i64::checked_add, |l, r| {
            l + r
        }),
        BinaryOp::Sub => arithmetic(b, lhs, rhs, i64::checked_sub, |l, r| {
            l - r
        }),
        BinaryOp::Mul => arithmetic(b, lhs, rhs, i64::checked_mul, |l, r| {
            l * r
        }),
        BinaryOp::Div => divide(b, lhs, rhs),
    }
}

/// Apply a binary operator, keeping integers as integers. If either side is
/// already a float the other side is promoted and the float version is used
/// instead.
fn arithmetic(
    b: &Binary,
    lhs: Value,
    rhs: Value,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value, Error> {
    match (lhs, rhs) {
        (Value::Int(l), Value::Int(r)) => int_op(l, r)
            .map(Value::Int)
            .ok_or_else(|| Error::Overflow(b.span())),
        (l, r) => {
            let result = float_op(l.as_float(), r.as_float());
            if result.is_finite() {
                Ok(Value::Float(result))
            } else {
                Err(Error::Overflow(b.span()))
            }
        }
    }
}

/// Division is the odd one out. It always works over floats, and a zero
/// divisor is an error rather than an infinity.
fn divide(b: &Binary, lhs: Value, rhs: Value) -> Result<Value, Error> {
    if rhs.is_zero() {
        return Err(Error::DivisionByZero(b.right().span()));
    }

    let result = lhs.as_float() / rhs.as_float();

    if result.is_finite() {
        Ok(Value::Float(result))
    } else {
        Err(Error::Overflow(b.span()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(input: &str) -> Result<Value, Error> {
        let tree = syntax::parse(input).unwrap();
        evaluate(&tree)
    }

    #[test]
    fn literals() {
        assert_eq!(eval("42"), Ok(Value::Int(42)));
        assert_eq!(eval("2.5"), Ok(Value::Float(2.5)));
    }

    #[test]
    fn negation() {
        assert_eq!(eval("-5"), Ok(Value::Int(-5)));
        assert_eq!(eval("--5"), Ok(Value::Int(5)));
        assert_eq!(eval("-2.5"), Ok(Value::Float(-2.5)));
    }

    #[test]
    fn integer_arithmetic_stays_integer() {
        assert_eq!(eval("2 + 3 * 4"), Ok(Value::Int(14)));
        assert_eq!(eval("8 - 3 - 2"), Ok(Value::Int(3)));
    }

    #[test]
    fn mixed_arithmetic_promotes() {
        assert_eq!(eval("2 + 3.5"), Ok(Value::Float(5.5)));
        assert_eq!(eval("1.5 * 2"), Ok(Value::Float(3.0)));
    }

    #[test]
    fn division_is_always_float() {
        assert_eq!(eval("8 / 4"), Ok(Value::Float(2.0)));
        assert_eq!(eval("8 / 4 / 2"), Ok(Value::Float(1.0)));
        assert_eq!(eval("7 / 2"), Ok(Value::Float(3.5)));
    }

    #[test]
    fn division_by_zero() {
        assert!(matches!(eval("1 / 0"), Err(Error::DivisionByZero(_))));
        assert!(matches!(eval("1 / 0.0"), Err(Error::DivisionByZero(_))));
        assert!(matches!(eval("1 / (2 - 2)"), Err(Error::DivisionByZero(_))));
    }

    #[test]
    fn integer_overflow() {
        assert!(matches!(
            eval("9223372036854775807 + 1"),
            Err(Error::Overflow(_))
        ));
        assert!(matches!(
            eval("-9223372036854775807 - 2"),
            Err(Error::Overflow(_))
        ));
    }

    #[test]
    fn division_by_zero_span_is_the_divisor() {
        let err = eval("10 / (3 - 3)").unwrap_err();
        match err {
            Error::DivisionByZero(span) => {
                // Parentheses leave no node, so the span is `3 - 3`.
                assert_eq!(span.byte_range(), 6..11);
            }
            other => panic!("expected division by zero, got {:?}", other),
        }
    }
}
