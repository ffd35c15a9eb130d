//! The abstract syntax tree.
//!
//! The tree is pure data: each composite node exclusively owns its children,
//! so the whole tree is either fully formed or was never returned. The only
//! behaviour here beyond construction is read-only traversal (matching on
//! [`Expression`]), the canonical [`Display`][std::fmt::Display] rendering,
//! and structural equality.

mod expression;
mod literal;
mod operator;

use diagnostic::Span;

use crate::parser::{Error, Parser};

pub use self::{
    expression::Expression,
    literal::{Literal, Number},
    operator::{Binary, BinaryOp, Unary, UnaryOp},
};

/// Every piece of syntax knows where in the input it came from.
pub trait Syntax {
    /// The name of this piece of syntax, as we'd want it to appear to users
    /// in messages like "expected {}".
    const NAME: &'static str;

    /// The [`Span`] of the input this syntax came from.
    fn span(&self) -> Span;
}

/// Implementing this trait tells a [`Parser`] how to parse a piece of syntax.
/// This is what lets the parser start at different places in the grammar,
/// which the tests lean on heavily.
pub trait Parse: Sized {
    /// This is the method used to compose pieces of syntax which implement
    /// [`Parse`] into a larger syntax tree.
    ///
    /// Unless we're done parsing, the parser will not be empty afterwards.
    fn parse_with(parser: &mut Parser) -> Result<Self, Error>;
}
