//! Operator syntax nodes.
//!
//! Notably, these do not implement [`Parse`][crate::ast::Parse]. [`Unary`]
//! and [`Binary`] are so intertwined with [`Expression`]'s precedence levels
//! that it doesn't really make sense to parse them outside of that context.

use diagnostic::Span;

use crate::ast::{Expression, Syntax};
use crate::lexer::TokenKind;

/// The operator of a [`Binary`] expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// The token kinds which mean this operator, at the additive precedence
    /// level.
    pub(crate) fn additive(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    /// As [`BinaryOp::additive`], one precedence level up.
    pub(crate) fn multiplicative(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    /// How tightly the operator binds. Multiplication and division bind
    /// tighter than addition and subtraction; all four are left-associative.
    pub(crate) fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
        }
    }

    /// The operator as it appears in source.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

/// The operator of a [`Unary`] expression. Minus is the only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
}

/// Unary prefix expressions, i.e. negation.
///
/// # Grammar
///
/// [`Unary`] := `-` [`Expression::factor`]
#[derive(Debug)]
pub struct Unary {
    op: UnaryOp,
    op_span: Span,
    operand: Box<Expression>,
}

impl Unary {
    pub fn new(op: UnaryOp, op_span: Span, operand: Expression) -> Unary {
        Unary {
            op,
            op_span,
            operand: Box::new(operand),
        }
    }

    /// The operator applied to the operand.
    pub fn operator(&self) -> UnaryOp {
        self.op
    }

    /// The span of the operator token.
    pub fn operator_span(&self) -> Span {
        self.op_span
    }

    /// The expression the operator is applied to.
    pub fn operand(&self) -> &Expression {
        self.operand.as_ref()
    }
}

impl Syntax for Unary {
    const NAME: &'static str = "a unary operator";

    fn span(&self) -> Span {
        self.op_span + self.operand.span()
    }
}

impl PartialEq for Unary {
    /// Structural equality, which deliberately ignores spans.
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.operand == other.operand
    }
}

/// Binary infix expressions.
///
/// # Grammar
///
/// [`Binary`] := [`Expression::additive`] | [`Expression::multiplicative`]
#[derive(Debug)]
pub struct Binary {
    op: BinaryOp,
    op_span: Span,
    operands: Box<(Expression, Expression)>,
}

impl Binary {
    pub fn new(
        op: BinaryOp,
        op_span: Span,
        lhs: Expression,
        rhs: Expression,
    ) -> Binary {
        Binary {
            op,
            op_span,
            operands: Box::new((lhs, rhs)),
        }
    }

    /// The operator between the operands.
    pub fn operator(&self) -> BinaryOp {
        self.op
    }

    /// The span of the operator token.
    pub fn operator_span(&self) -> Span {
        self.op_span
    }

    /// Get the left hand side of the binary expression.
    pub fn left(&self) -> &Expression {
        &self.operands.0
    }

    /// Get the right hand side of the binary expression.
    pub fn right(&self) -> &Expression {
        &self.operands.1
    }
}

impl Syntax for Binary {
    const NAME: &'static str = "a binary operator";

    fn span(&self) -> Span {
        self.left().span() + self.right().span()
    }
}

impl PartialEq for Binary {
    /// Structural equality, which deliberately ignores spans.
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.operands == other.operands
    }
}
