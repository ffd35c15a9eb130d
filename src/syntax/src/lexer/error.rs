//! Lexer errors

use std::{error, fmt};

use diagnostic::{Caret, Diagnostic};

/// Lexical errors with all the contextual information needed to present them
/// nicely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A character which no token can start with, at its exact offset.
    UnexpectedCharacter(Caret, char),

    /// A numeric literal that went wrong partway, like a second `.` or a `.`
    /// with no digits after it.
    MalformedNumber(Caret),
}

impl Error {
    /// Where in the input the error was noticed.
    pub fn location(&self) -> Caret {
        match self {
            Error::UnexpectedCharacter(location, _) => *location,
            Error::MalformedNumber(location) => *location,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnexpectedCharacter(_, c) => {
                write!(f, "no token can start with a '{}'", c)
            }
            Error::MalformedNumber(_) => {
                write!(f, "this number literal is malformed")
            }
        }
    }
}

impl error::Error for Error {}

impl From<Error> for Diagnostic {
    fn from(e: Error) -> Diagnostic {
        let location = e.location();
        Diagnostic::new(format!("{}", e)).location(location)
    }
}
