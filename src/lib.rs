//! Interpreter for a small Scheme-like language.
//!
//! Source text is lexed, parsed into a single S-exp, evaluated against a
//! table of builtins, and the result serialized back to text. There are no
//! user definitions or environments; every call head names a builtin.
//!
//! Note that this crate does *not* setup logging. Clients that want the
//! `log` output should install a logger first. See:
//!   https://github.com/rust-lang/log#in-executables.

#[macro_use]
pub mod function;

pub mod builtins;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod primitive;
pub mod sexp;
pub mod token;

pub use crate::error::Error;
pub use crate::interpreter::Interpreter;

pub mod prelude {
    pub use crate::builtins::{BuiltinTable, BUILTINS};
    pub use crate::error::Error;
    pub use crate::function::{Args, ExpectedCount, Ret, RuntimeError};
    pub use crate::interpreter::{unpack, Interpreter};
    pub use crate::parser::{parse_str, SyntaxError, SyntaxErrorReason};
    pub use crate::primitive::{BuiltIn, Number, Primitive, Symbol};
    pub use crate::sexp::{serialize, Cons, ConsList, HeapSexp, Sexp};
    pub use crate::token::{LexError, LexErrorKind};
    // Macros.
    pub use crate::err;
}


/// Evaluates `input` with the standard builtins and returns the serialized
/// result.
pub fn run<S: AsRef<str>>(input: S) -> Result<String, Error> {
    Interpreter::new().run(input)
}
