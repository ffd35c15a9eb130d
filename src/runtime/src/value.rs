//! Runtime values.

use std::fmt;

use syntax::ast::Number;

/// The result of evaluating an expression.
///
/// Integer and float values stay distinct: arithmetic between two integers is
/// integral, and anything touching a float is a float. Division is the
/// exception, it always produces a [`Float`][Value::Float].
#[derive(Debug, Clone, Copy)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    /// Is this value exactly zero? Used to catch division by zero before it
    /// happens.
    pub(crate) fn is_zero(&self) -> bool {
        match self {
            Value::Int(n) => *n == 0,
            Value::Float(x) => *x == 0.0,
        }
    }

    /// The value as a float, for operations which promote.
    pub(crate) fn as_float(&self) -> f64 {
        match self {
            Value::Int(n) => *n as f64,
            Value::Float(x) => *x,
        }
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Value {
        match number {
            Number::Int(n) => Value::Int(n),
            Number::Float(x) => Value::Float(x),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => {
                (a - b).abs() < f64::EPSILON
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            // Keep floats recognizable as floats, so `4 / 2` shows as `2.0`.
            Value::Float(x) if x.fract() == 0.0 => write!(f, "{:.1}", x),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_and_float_are_distinct() {
        assert_ne!(Value::Int(2), Value::Float(2.0));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Value::Int(14)), "14");
        assert_eq!(format!("{}", Value::Float(2.0)), "2.0");
        assert_eq!(format!("{}", Value::Float(2.5)), "2.5");
        assert_eq!(format!("{}", Value::Int(-6)), "-6");
    }
}
