//! Errors surfaced by a full run.
//!
//! Each stage has its own error type; Error unifies them so `?` can carry any
//! of them out of `run`. All are terminal for the run that raised them.

use std::fmt;

use crate::function::RuntimeError;
use crate::parser::SyntaxError;
use crate::token::LexError;


#[derive(Debug, PartialEq)]
pub enum Error {
    Lex(LexError),
    Syntax(SyntaxError),
    Runtime(RuntimeError),
}

impl Error {
    pub fn is_lex(&self) -> bool {
        matches!(self, Error::Lex(_))
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax(_))
    }

    pub fn is_runtime(&self) -> bool {
        matches!(self, Error::Runtime(_))
    }
}


impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(err) => write!(f, "{}", err),
            Error::Syntax(err) => write!(f, "{}", err),
            Error::Runtime(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(err) => Some(err),
            Error::Syntax(err) => Some(err),
            Error::Runtime(err) => Some(err),
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Lex(err)
    }
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self {
        Error::Syntax(err)
    }
}

impl From<RuntimeError> for Error {
    fn from(err: RuntimeError) -> Self {
        Error::Runtime(err)
    }
}
