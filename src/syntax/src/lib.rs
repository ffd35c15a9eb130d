//! Syntax tools for the calculator language.
//!
//! The pipeline is the usual one: a [`Lexer`][lexer::Lexer] breaks input into
//! [`Token`][lexer::Token]s, and a [`Parser`][parser::Parser] consumes those
//! to build an [`Expression`][ast::Expression] tree. Everything is a pure
//! function of the input text, so [`parse`] can be called freely from
//! anywhere.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use crate::{
    ast::{Expression, Parse, Syntax},
    parser::{parse, Error, Parser},
};
