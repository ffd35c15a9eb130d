//! The rules of the lexical grammar.
//!
//! The calculator's alphabet is small: digits, the four operator characters,
//! parentheses, and whitespace. Anything else fails with
//! [`Error::UnexpectedCharacter`] at its exact offset.

use crate::lexer::{Error, Lexer, TokenKind};

impl Lexer<'_> {
    /// This is the main entry point into the lexer internals. It dispatches
    /// to smaller handlers for more complicated token types.
    pub(crate) fn token_kind(&mut self) -> Result<TokenKind, Error> {
        let next = match self.peek() {
            Some(c) => c,
            None => unreachable!(
                "Lexer::token_kind should only be called with input left"
            ),
        };

        match next {
            '+' => {
                self.advance();
                Ok(TokenKind::Plus)
            }
            '-' => {
                self.advance();
                Ok(TokenKind::Minus)
            }
            '*' => {
                self.advance();
                Ok(TokenKind::Star)
            }
            '/' => {
                self.advance();
                Ok(TokenKind::Slash)
            }
            '(' => {
                self.advance();
                Ok(TokenKind::Open)
            }
            ')' => {
                self.advance();
                Ok(TokenKind::Close)
            }

            c if c.is_ascii_digit() => self.number(),

            c => Err(Error::UnexpectedCharacter(self.location, c)),
        }
    }

    /// Whitespace is any sequence of whitespace characters. It's discarded,
    /// which is why this doesn't return anything.
    ///
    /// ```text
    /// Whitespace := (Unicode's `White_Space`)*
    /// ```
    pub(crate) fn whitespace(&mut self) {
        self.consume_while(char::is_whitespace);
    }

    /// Numeric literals: a run of decimal digits, optionally with a single
    /// `.` and at least one following digit.
    ///
    /// ```text
    /// number := digits ('.' digits)?
    /// ```
    ///
    /// The value isn't interpreted at this stage; turning the text into a
    /// number (and catching out-of-range literals) is the parser's job. What
    /// _is_ caught here is a `.` with no digits after it, or a second `.`
    /// inside one number, both of which are [`Error::MalformedNumber`] rather
    /// than silently splitting into several tokens.
    fn number(&mut self) -> Result<TokenKind, Error> {
        let whole = self.consume_while(|c| c.is_ascii_digit());
        debug_assert!(
            !whole.is_empty(),
            "Lexer::number called without a leading digit"
        );

        if self.peek() != Some('.') {
            return Ok(TokenKind::Int);
        }

        let dot = self.location;
        self.char('.');

        if self.consume_while(|c| c.is_ascii_digit()).is_empty() {
            return Err(Error::MalformedNumber(dot));
        }

        // Things like `1.2.3` are a malformed number, not a `1.2` and
        // trailing garbage.
        if self.peek() == Some('.') {
            return Err(Error::MalformedNumber(self.location));
        }

        Ok(TokenKind::Float)
    }
}
