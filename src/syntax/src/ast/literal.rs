//! Syntax for literal values.

use std::fmt;

use diagnostic::Span;

use crate::{
    ast::{Parse, Syntax},
    lexer::TokenKind,
    parser::{Error, Parser},
};

/// The value of a numeric literal.
///
/// Integers and floats are distinct kinds of literal, as distinguished by the
/// grammar: digits alone are an [`Int`][Number::Int], digits with a
/// fractional part are a [`Float`][Number::Float]. They stay distinct all the
/// way through evaluation.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            // A float with nothing after the point still needs to render as
            // a float, or it would re-parse as an integer.
            Number::Float(x) if x.fract() == 0.0 => write!(f, "{:.1}", x),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

/// A literal value is something like `123` or `4.5` which produces a specific
/// value at runtime.
#[derive(Debug, Clone, Copy)]
pub struct Literal {
    value: Number,
    span: Span,
}

impl Literal {
    /// Create a new literal value.
    pub fn new(value: Number, span: Span) -> Literal {
        Literal { value, span }
    }

    /// The value this literal produces.
    pub fn value(&self) -> Number {
        self.value
    }
}

impl Syntax for Literal {
    const NAME: &'static str = "a number";

    fn span(&self) -> Span {
        self.span
    }
}

impl PartialEq for Literal {
    /// Structural equality, which deliberately ignores spans.
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Parse for Literal {
    /// The token's text is converted to a value here, at parse time, so that
    /// out-of-range literals fail with [`Error::NumberOutOfRange`] rather
    /// than wrapping or truncating later.
    fn parse_with(parser: &mut Parser) -> Result<Literal, Error> {
        if let Some(token) = parser.consume(TokenKind::Int) {
            let value = token
                .body()
                .parse::<i64>()
                .map_err(|_| Error::NumberOutOfRange(token.span()))?;
            return Ok(Literal::new(Number::Int(value), token.span()));
        }

        if let Some(token) = parser.consume(TokenKind::Float) {
            // `f64::from_str` accepts everything the lexer lets through, but
            // rounds values past the representable range to infinity.
            let value = token
                .body()
                .parse::<f64>()
                .map_err(|_| Error::NumberOutOfRange(token.span()))?;

            if !value.is_finite() {
                return Err(Error::NumberOutOfRange(token.span()));
            }

            return Ok(Literal::new(Number::Float(value), token.span()));
        }

        Err(Error::Unexpected {
            wanted: Literal::NAME,
            found: parser.peek(),
            span: parser.next_span(),
        })
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    #[test]
    fn parse_int() {
        let mut parser = Parser::new("42").unwrap();
        let literal = parser.parse::<Literal>().unwrap();
        assert_eq!(literal.value(), Number::Int(42));
        assert!(parser.is_empty());
    }

    #[test]
    fn parse_float() {
        let mut parser = Parser::new("42.5").unwrap();
        let literal = parser.parse::<Literal>().unwrap();
        assert_eq!(literal.value(), Number::Float(42.5));
    }

    #[test]
    fn parse_int_out_of_range() {
        // One past i64::MAX.
        let mut parser = Parser::new("9223372036854775808").unwrap();
        let result = parser.parse::<Literal>();
        assert!(matches!(result, Err(Error::NumberOutOfRange(_))));
    }

    #[test]
    fn parse_float_out_of_range() {
        let huge = format!("1{}.0", "0".repeat(400));
        let mut parser = Parser::new(&huge).unwrap();
        let result = parser.parse::<Literal>();
        assert!(matches!(result, Err(Error::NumberOutOfRange(_))));
    }

    #[test]
    fn render_floats_distinctly() {
        assert_eq!(format!("{}", Number::Float(6.0)), "6.0");
        assert_eq!(format!("{}", Number::Float(0.5)), "0.5");
        assert_eq!(format!("{}", Number::Int(6)), "6");
    }
}
