//! Lexing - converting input into [`Token`]s.
//!
//! Before we can start the task of parsing, we need to sweep over the input
//! and break it apart into meaningful atoms called [`Token`]s.
//!
//! Lexing happens over `&str` as unicode validation should be done before
//! hand.

// You may be wondering why Lexer doesn't implement `Iterator`. The short
// answer is that an iterator of `Result<Token, Error>` has no good way to say
// "stop after the first error", and a `while` loop over `token()` reads
// better at the call sites we have.

mod combinator;
mod error;
mod rules;
mod token;

use diagnostic::{Caret, Span};

pub use crate::lexer::{
    error::Error,
    token::{Token, TokenKind},
};

/// A [`Lexer`] scans over a `&str` character by character and breaks it into
/// component meaningful parts ([`Token`]s).
///
/// # Example
///
/// ```
/// # use syntax::lexer::{Lexer, TokenKind};
/// let mut lexer = Lexer::new("1 + 2");
/// while let Ok(token) = lexer.token() {
///     if token.kind() == TokenKind::Eof {
///         break;
///     }
///     // do something with token
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'i> {
    /// The input being consumed, as utf8
    pub(crate) input: &'i str,

    /// The location of the caret in the input
    pub(crate) location: Caret,
}

impl<'i> Lexer<'i> {
    /// Create a new lexer over some input.
    ///
    /// Lexing holds no state outside the `Lexer` itself, so restarting is
    /// just calling this again over the same input.
    pub fn new(input: &'i str) -> Self {
        Lexer {
            input,
            location: Caret::default(),
        }
    }

    /// Has the lexer consumed all of the input?
    ///
    /// # Examples
    ///
    /// ```
    /// # use syntax::lexer::Lexer;
    /// let lexer = Lexer::new("");
    /// assert!(lexer.is_empty());
    /// let lexer = Lexer::new("non-empty");
    /// assert!(!lexer.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.location.offset() == self.input.len()
    }

    /// Produce the next token (or [`Error`]), advancing the lexer.
    ///
    /// Once the input is exhausted this produces a single empty
    /// [`Eof`][TokenKind::Eof] token at the end of the input.
    pub fn token(&mut self) -> Result<Token<'i>, Error> {
        self.whitespace();

        if self.is_empty() {
            return Ok(Token {
                kind: TokenKind::Eof,
                span: Span::new(self.location, self.location),
                body: "",
            });
        }

        let start = self.location;
        let kind = self.token_kind()?;

        let span = Span::new(start, self.location);
        let body = &self.input[span.byte_range()];

        Ok(Token { kind, span, body })
    }

    /// The input fed into the lexer that hasn't been broken into tokens yet.
    ///
    /// # Example
    ///
    /// ```
    /// # use syntax::lexer::Lexer;
    /// let mut lexer = Lexer::new("12 + 3");
    /// let twelve = lexer.token();
    /// assert_eq!(lexer.remaining_input(), " + 3");
    /// ```
    pub fn remaining_input(&self) -> &str {
        &self.input[self.location.offset()..]
    }
}
