//! A parser.
//!
//! The [`Parser`] scans the whole input up front with a
//! [`Lexer`][crate::lexer::Lexer], then walks the tokens with a single token
//! of lookahead and no backtracking -- the grammar is LL(1) by construction.
//!
//! Anywhere the grammar is recursive goes through [`Parser::depth_track`], so
//! pathological input (say, ten thousand open parentheses) fails with
//! [`Error::DepthExceeded`] instead of blowing the stack.

mod error;

use diagnostic::Span;

pub use self::error::Error;

use crate::{
    ast::{Expression, Parse},
    lexer::{Lexer, Token, TokenKind},
};

/// Parse an input string into an [`Expression`].
///
/// This is the main entry point for the crate. The whole input must be one
/// expression; anything left over after it is [`Error::TrailingInput`].
///
/// Each call is independent, with no state held anywhere outside it.
///
/// # Example
///
/// ```
/// let expression = syntax::parse("2 + 3 * 4").unwrap();
/// assert_eq!(format!("{}", expression), "2 + 3 * 4");
/// ```
pub fn parse(input: &str) -> Result<Expression, Error> {
    let mut parser = Parser::new(input)?;
    let expression = parser.parse::<Expression>()?;

    if parser.is_empty() {
        Ok(expression)
    } else {
        Err(Error::TrailingInput(parser.next_span()))
    }
}

/// A parser over a token buffer.
#[derive(Debug)]
pub struct Parser<'a> {
    /// The tokens from our input. The last one is always
    /// [`Eof`][TokenKind::Eof].
    tokens: Vec<Token<'a>>,

    /// The cursor is the index into `tokens` which tracks where we've parsed
    /// to. It never moves past the final [`Eof`][TokenKind::Eof] token.
    cursor: usize,

    /// The grammar is recursive in a few places, we track our 'depth' into
    /// these recursive forms here to prevent stack overflows.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over some input.
    ///
    /// This will immediately return a lexical error if the input isn't
    /// lexically valid.
    ///
    /// # Example
    ///
    /// ```
    /// # use syntax::{ast, parser::Parser};
    /// let mut parser = Parser::new("0").unwrap();
    /// let literal = parser.parse::<ast::Literal>();
    /// assert!(literal.is_ok());
    ///
    /// // Here's an example of it bailing on lexical errors.
    /// let error = Parser::new("0x0");
    /// assert!(error.is_err());
    /// ```
    pub fn new(input: &'a str) -> Result<Parser<'a>, Error> {
        let tokens = {
            let mut buf = Vec::new();
            let mut lexer = Lexer::new(input);

            loop {
                let token = lexer.token()?;
                let done = token.kind() == TokenKind::Eof;
                buf.push(token);

                if done {
                    break;
                }
            }

            buf
        };

        Ok(Parser {
            tokens,
            cursor: 0,
            depth: 0,
        })
    }

    /// Parse the input into syntax.
    ///
    /// # Example
    ///
    /// ```
    /// # use syntax::{ast, parser::Parser};
    /// let mut parser = Parser::new("1 + 2").unwrap();
    /// let expression = parser.parse::<ast::Expression>();
    /// assert!(expression.is_ok());
    /// ```
    pub fn parse<T: Parse>(&mut self) -> Result<T, Error> {
        T::parse_with(self)
    }
}

// Depth tracking
impl<'a> Parser<'a> {
    /// Max expression complexity, in terms of grammar rule recursion.
    ///
    /// Recursion only happens through `factor` (chains of unary minus) and
    /// grouping parentheses, so this bounds both.
    const MAX_DEPTH: usize = 512;

    /// Run a parsing function one level deeper.
    ///
    /// This fails with [`Error::DepthExceeded`] instead of recursing once the
    /// depth limit is hit, and takes care of unwinding the count on every
    /// return path.
    pub(crate) fn depth_track<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'a>) -> Result<T, Error>,
    {
        if self.depth >= Parser::MAX_DEPTH {
            return Err(Error::DepthExceeded(self.next_span()));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;

        result
    }
}

// Parsing methods
impl<'a> Parser<'a> {
    /// Has the parser hit the end of the input?
    pub(crate) fn is_empty(&self) -> bool {
        self.peek() == TokenKind::Eof
    }

    /// Returns the [`TokenKind`] of the next token, without consuming it.
    ///
    /// This is total because the token buffer always ends with
    /// [`Eof`][TokenKind::Eof].
    pub(crate) fn peek(&self) -> TokenKind {
        self.tokens[self.cursor].kind()
    }

    /// The span of the next token. This is where errors about the next token
    /// should point.
    pub(crate) fn next_span(&self) -> Span {
        self.tokens[self.cursor].span()
    }

    /// Consume the next token, regardless of what it is.
    ///
    /// The final [`Eof`][TokenKind::Eof] token is never consumed, just
    /// returned over and over.
    pub(crate) fn advance(&mut self) -> Token<'a> {
        let token = self.tokens[self.cursor];
        if token.kind() != TokenKind::Eof {
            self.cursor += 1;
        }
        token
    }

    /// Advance past the next token, if it's the expected kind.
    ///
    /// This returns `None` if the next token isn't the expected kind.
    pub(crate) fn consume(&mut self, expected: TokenKind) -> Option<Token<'a>> {
        if self.peek() == expected {
            Some(self.advance())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    #[test]
    fn is_empty() {
        assert!(Parser::new("").unwrap().is_empty());
        assert!(Parser::new(" ").unwrap().is_empty());
        assert!(!Parser::new("1").unwrap().is_empty());
    }

    #[test]
    fn peek() {
        assert_eq!(Parser::new("").unwrap().peek(), TokenKind::Eof);
        assert_eq!(Parser::new("1").unwrap().peek(), TokenKind::Int);
    }

    #[test]
    fn advance() {
        let mut p = Parser::new("1").unwrap();

        assert!(!p.is_empty());
        assert_eq!(p.advance().kind(), TokenKind::Int);
        assert!(p.is_empty());
        assert_eq!(p.advance().kind(), TokenKind::Eof);
        assert!(p.is_empty());
    }

    #[test]
    fn consume() {
        let mut p = Parser::new("+ 1").unwrap();
        assert!(p.consume(TokenKind::Plus).is_some());
        let before = p.cursor;
        assert!(p.consume(TokenKind::Plus).is_none());
        assert_eq!(before, p.cursor);
    }

    #[test]
    fn trailing_input() {
        let result = parse("1 2");
        assert!(matches!(result, Err(Error::TrailingInput(_))));
    }

    #[test]
    fn depth_limit() {
        let deep = "(".repeat(Parser::MAX_DEPTH + 1);
        let result = parse(&deep);
        assert!(matches!(result, Err(Error::DepthExceeded(_))));
    }
}
