//! Evaluation errors
//!
//! These are runtime failures, not parse failures: `1 / 0` parses fine and
//! only fails here. Like everywhere else, an error is terminal for the call
//! and carries the span of the subexpression that caused it.

use std::{error, fmt};

use diagnostic::{Diagnostic, Span};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The right operand of a `/` evaluated to exactly zero. The span is the
    /// divisor's.
    DivisionByZero(Span),

    /// Arithmetic produced a value outside the representable range.
    Overflow(Span),
}

impl Error {
    /// The span an error report about this should point at.
    pub fn span(&self) -> Span {
        match self {
            Error::DivisionByZero(span) => *span,
            Error::Overflow(span) => *span,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DivisionByZero(_) => write!(f, "division by zero"),
            Error::Overflow(_) => write!(f, "arithmetic overflow"),
        }
    }
}

impl error::Error for Error {}

impl From<Error> for Diagnostic {
    fn from(e: Error) -> Diagnostic {
        let diagnostic =
            Diagnostic::new(format!("{}", e)).location(e.span().start());

        match e {
            Error::DivisionByZero(span) => {
                diagnostic.highlight(span, "this evaluates to zero")
            }
            Error::Overflow(span) => {
                diagnostic.highlight(span, "overflows here")
            }
        }
    }
}
