//! Expressions
//!
//! The grammar, lowest to highest precedence, with every binary operator
//! left-associative:
//!
//! ```text
//! expression := term (("+" | "-") term)*
//! term       := factor (("*" | "/") factor)*
//! factor     := "-" factor | primary
//! primary    := NUMBER | "(" expression ")"
//! ```
//!
//! The left-recursive rules are written as loops which fold up a left-leaning
//! tree, which is the standard elimination of left recursion for recursive
//! descent. Right recursion here would group `8 - 3 - 2` the wrong way.

use std::fmt;

use diagnostic::Span;

use crate::{
    ast::{Binary, BinaryOp, Literal, Parse, Syntax, Unary, UnaryOp},
    lexer::TokenKind,
    parser::{Error, Parser},
};

/// This type is a syntax tree enum, like those found in the [`syn`][syn]
/// crate: an `enum` to dispatch on the different kinds of expression, each of
/// which is its own struct.
///
/// Parentheses never show up in the tree. They only shape it, so `(1)` and
/// `1` parse to structurally equal trees.
///
/// [syn]: https://docs.rs/syn/1.0.84/syn/enum.Expr.html#syntax-tree-enums
#[derive(Debug, PartialEq)]
pub enum Expression {
    Literal(Literal),
    Unary(Unary),
    Binary(Binary),
}

impl Syntax for Expression {
    const NAME: &'static str = "an expression";

    fn span(&self) -> Span {
        match self {
            Expression::Literal(l) => l.span(),
            Expression::Unary(u) => u.span(),
            Expression::Binary(b) => b.span(),
        }
    }
}

impl Parse for Expression {
    fn parse_with(parser: &mut Parser) -> Result<Expression, Error> {
        Expression::additive(parser)
    }
}

impl Expression {
    /// The lowest precedence level, `+` and `-`.
    ///
    /// After parsing an initial term, each further operator folds what we
    /// have so far into the left child of a new [`Binary`] node, which is
    /// what makes these left-associative.
    fn additive(parser: &mut Parser) -> Result<Expression, Error> {
        let mut lhs = Expression::multiplicative(parser)?;

        while let Some(op) = BinaryOp::additive(parser.peek()) {
            let token = parser.advance();
            let rhs = Expression::multiplicative(parser)?;
            lhs = Expression::Binary(Binary::new(op, token.span(), lhs, rhs));
        }

        Ok(lhs)
    }

    /// The identical fold one precedence level up, for `*` and `/`.
    fn multiplicative(parser: &mut Parser) -> Result<Expression, Error> {
        let mut lhs = Expression::factor(parser)?;

        while let Some(op) = BinaryOp::multiplicative(parser.peek()) {
            let token = parser.advance();
            let rhs = Expression::factor(parser)?;
            lhs = Expression::Binary(Binary::new(op, token.span(), lhs, rhs));
        }

        Ok(lhs)
    }

    /// Unary minus binds tighter than any binary operator, and rebinds
    /// through itself, so `--5` is two nested [`Unary`] nodes.
    pub(crate) fn factor(parser: &mut Parser) -> Result<Expression, Error> {
        if let Some(token) = parser.consume(TokenKind::Minus) {
            parser.depth_track(|parser| {
                let operand = Expression::factor(parser)?;
                Ok(Expression::Unary(Unary::new(
                    UnaryOp::Neg,
                    token.span(),
                    operand,
                )))
            })
        } else {
            Expression::primary(parser)
        }
    }

    /// Primary expressions are the ones with no left or right recursion on
    /// expression: a number, or a parenthesized subexpression.
    pub(crate) fn primary(parser: &mut Parser) -> Result<Expression, Error> {
        match parser.peek() {
            TokenKind::Int | TokenKind::Float => {
                parser.parse::<Literal>().map(Expression::Literal)
            }

            TokenKind::Open => Expression::grouping(parser),

            found => Err(Error::Unexpected {
                wanted: Self::NAME,
                found,
                span: parser.next_span(),
            }),
        }
    }

    /// A full expression wrapped in parentheses. The parentheses themselves
    /// leave no node behind; the inner expression is returned as-is.
    fn grouping(parser: &mut Parser) -> Result<Expression, Error> {
        let open = match parser.consume(TokenKind::Open) {
            Some(token) => token,
            None => {
                return Err(Error::Unexpected {
                    wanted: "an open parenthesis",
                    found: parser.peek(),
                    span: parser.next_span(),
                })
            }
        };

        parser.depth_track(|parser| {
            let inner = Expression::parse_with(parser)?;

            match parser.consume(TokenKind::Close) {
                Some(_) => Ok(inner),
                None => Err(Error::UnmatchedParen {
                    open: open.span(),
                    found: parser.next_span(),
                }),
            }
        })
    }

    /// How tightly this expression's outermost operator binds, for use when
    /// rendering. Leaves bind tightest of all.
    fn precedence(&self) -> u8 {
        match self {
            Expression::Literal(_) => 4,
            Expression::Unary(_) => 3,
            Expression::Binary(b) => b.operator().precedence(),
        }
    }
}

/// The canonical rendering.
///
/// Parentheses are emitted exactly where the child binds less tightly than
/// its parent (or as tightly, on the right of a binary operator, where
/// left-associativity would otherwise regroup it), so re-parsing the
/// rendering reproduces a structurally equal tree.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Literal(l) => write!(f, "{}", l.value()),

            Expression::Unary(u) => {
                write!(f, "-")?;
                if u.operand().precedence() < self.precedence() {
                    write!(f, "({})", u.operand())
                } else {
                    write!(f, "{}", u.operand())
                }
            }

            Expression::Binary(b) => {
                let precedence = b.operator().precedence();

                if b.left().precedence() < precedence {
                    write!(f, "({})", b.left())?;
                } else {
                    write!(f, "{}", b.left())?;
                }

                write!(f, " {} ", b.operator().symbol())?;

                if b.right().precedence() <= precedence {
                    write!(f, "({})", b.right())
                } else {
                    write!(f, "{}", b.right())
                }
            }
        }
    }
}
