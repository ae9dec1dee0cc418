//! Representation of primitives.

use std::fmt;

pub mod builtin;
pub mod symbol;

pub use self::builtin::BuiltIn;
pub use self::symbol::Symbol;


pub type Number = i64;

/// Everything that is not a cons cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Number(Number),
    Boolean(bool),
    Symbol(Symbol),
    /// Head of a quoted form; never produced by the lexer directly.
    QuoteMarker,
    BuiltIn(BuiltIn),
}



impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Number(num) => write!(f, "{}", num),
            Primitive::Boolean(true) => write!(f, "#t"),
            Primitive::Boolean(false) => write!(f, "#f"),
            Primitive::Symbol(s) => write!(f, "{}", s),
            // Printed as the bare word, so the cell for ''a reads (quote . a).
            Primitive::QuoteMarker => write!(f, "quote"),
            Primitive::BuiltIn(b) => write!(f, "{}", b),
        }
    }
}

impl From<Number> for Primitive {
    fn from(num: Number) -> Self {
        Primitive::Number(num)
    }
}

impl From<bool> for Primitive {
    fn from(b: bool) -> Self {
        Primitive::Boolean(b)
    }
}

impl From<Symbol> for Primitive {
    fn from(symbol: Symbol) -> Self {
        Primitive::Symbol(symbol)
    }
}
