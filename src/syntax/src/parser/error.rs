//! Parse errors
//!
//! Every error is terminal for the call that produced it: parsing stops at
//! the first problem, there's no recovery and no partial tree. Each variant
//! carries the span a caller needs to point a caret at the offending input.

use std::{error, fmt};

use diagnostic::{Diagnostic, Span};

use crate::lexer::{self, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The input wasn't even lexically valid.
    Lexer(lexer::Error),

    /// The next token can't appear where it did. `wanted` describes what the
    /// grammar would have accepted there.
    Unexpected {
        wanted: &'static str,
        found: TokenKind,
        span: Span,
    },

    /// An `(` with no matching `)`. The first span is the parenthesis that
    /// was opened, the second is where the close was expected.
    UnmatchedParen { open: Span, found: Span },

    /// A complete expression was parsed, but input remained after it.
    TrailingInput(Span),

    /// A numeric literal too large for its representation.
    NumberOutOfRange(Span),

    /// The input nests more deeply than the parser is willing to recurse.
    DepthExceeded(Span),
}

impl Error {
    /// The span an error report about this should point at.
    pub fn span(&self) -> Span {
        match self {
            Error::Lexer(e) => Span::new(e.location(), e.location()),
            Error::Unexpected { span, .. } => *span,
            Error::UnmatchedParen { found, .. } => *found,
            Error::TrailingInput(span) => *span,
            Error::NumberOutOfRange(span) => *span,
            Error::DepthExceeded(span) => *span,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Lexer(e) => write!(f, "{}", e),

            Error::Unexpected { wanted, found, .. } => {
                write!(f, "expected {} but found {}", wanted, found)
            }

            Error::UnmatchedParen { .. } => {
                write!(f, "this parenthesis is never closed")
            }

            Error::TrailingInput(_) => {
                write!(f, "unexpected input after the expression")
            }

            Error::NumberOutOfRange(_) => {
                write!(f, "this number is too large to represent")
            }

            Error::DepthExceeded(_) => {
                write!(f, "this expression is nested too deeply")
            }
        }
    }
}

impl error::Error for Error {}

impl From<lexer::Error> for Error {
    fn from(e: lexer::Error) -> Error {
        Error::Lexer(e)
    }
}

impl From<Error> for Diagnostic {
    fn from(e: Error) -> Diagnostic {
        let diagnostic =
            Diagnostic::new(format!("{}", e)).location(e.span().start());

        match e {
            Error::Unexpected { wanted, span, .. } => {
                diagnostic.highlight(span, format!("expected {}", wanted))
            }

            Error::UnmatchedParen { open, found } => diagnostic
                .highlight(open, "opened here")
                .highlight(found, "expected a close parenthesis"),

            Error::TrailingInput(span) => {
                diagnostic.highlight(span, "this input is left over")
            }

            Error::NumberOutOfRange(span) => {
                diagnostic.highlight(span, "out of range")
            }

            Error::DepthExceeded(span) => {
                diagnostic.highlight(span, "nesting limit hit here")
            }

            Error::Lexer(lex) => diagnostic.highlight(
                Span::new(lex.location(), lex.location()),
                "here",
            ),
        }
    }
}
