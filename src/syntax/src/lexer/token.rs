//! # Tokens
//!
//! Each token is an individual lexeme in our language -- the smallest unit of
//! meaning.
//!
//! Tokens provide both the semantic information in the form of their
//! [`TokenKind`], and the context they were found in.

use std::fmt;

use diagnostic::Span;

/// An individual lexeme in our language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    /// The semantically-relevant kind of thing this token is.
    pub(crate) kind: TokenKind,

    /// This is the `Span` of this token's body, not including any surrounding
    /// whitespace.
    pub(crate) span: Span,

    /// The body of the token as it was represented in the original input.
    pub(crate) body: &'a str,
}

impl<'a> Token<'a> {
    /// The kind of token this is.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The span of the body of this token, not including surrounding
    /// whitespace.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The way the token was represented in the source.
    pub fn body(&self) -> &'a str {
        self.body
    }
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.body)
    }
}

/// A [`Token`]'s kind is the semantically-relevant part of the token, removed
/// from the source context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An integer like `5`.
    Int,
    /// A number with a fractional part, like `12.34`.
    Float,

    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,

    /// `(`
    Open,
    /// `)`
    Close,

    /// The end of the input. Every token sequence ends with exactly one of
    /// these, and its body is empty.
    Eof,
}

impl TokenKind {
    /// The user-facing name of this kind of token.
    pub fn name(&self) -> &'static str {
        use TokenKind::*;
        match self {
            Int => "number",
            Float => "number",
            Plus => "plus sign (+)",
            Minus => "minus sign (-)",
            Star => "star (*)",
            Slash => "slash (/)",
            Open => "open parenthesis",
            Close => "close parenthesis",
            Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
