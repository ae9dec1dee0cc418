//! Basic blocks for procedural representation.

use std::borrow::Cow;
use std::fmt;

use self::ExpectedCount::*;
use self::RuntimeError::*;
use crate::primitive::Number;
use crate::sexp::{serialize, HeapSexp};


/// Creates a RuntimeError wrapped in Err.
#[macro_export]
macro_rules! err {
    ($($kind:tt)+) => {
        Err($crate::function::RuntimeError::$($kind)+)
    };
}


/// Argument forms as collected from a call's spine; absent entries are empty
/// lists.
pub type Args = Vec<Option<HeapSexp>>;
pub type Ret = Result<Option<HeapSexp>, RuntimeError>;

#[derive(Debug, PartialEq)]
pub enum RuntimeError {
    NothingToEvaluate,
    NonCallableHead(Option<HeapSexp>),
    InvalidArgument {
        given: Option<HeapSexp>,
        expected: Cow<'static, str>,
    },
    WrongArgumentCount {
        given: usize,
        expected: ExpectedCount,
    },
    IndexOutOfRange {
        index: Number,
    },
    DivisionByZero,
    Overflow,
}

#[derive(Debug, PartialEq)]
pub enum ExpectedCount {
    Exactly(usize),
    AtLeast(usize),
}


impl ExpectedCount {
    pub fn check(self, given: usize) -> Result<(), RuntimeError> {
        let ok = match self {
            Exactly(exactly) => given == exactly,
            AtLeast(minimum) => given >= minimum,
        };
        if ok {
            Ok(())
        } else {
            err!(WrongArgumentCount {
                given,
                expected: self,
            })
        }
    }
}


impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Runtime Error] ")?;
        match self {
            NothingToEvaluate => write!(f, "Nothing to evaluate"),
            NonCallableHead(head) => write!(
                f,
                "Cannot apply a non-symbol, non-quote head: {}",
                serialize(head.as_ref())
            ),
            InvalidArgument { given, expected } => write!(
                f,
                "Invalid argument: given {}, expected {}",
                serialize(given.as_ref()),
                expected
            ),
            WrongArgumentCount { given, expected } => write!(
                f,
                "Wrong argument count: given {}, expected {}",
                given, expected
            ),
            IndexOutOfRange { index } => write!(f, "Index out of range: {}", index),
            DivisionByZero => write!(f, "Division by zero"),
            Overflow => write!(f, "Integer overflow"),
        }
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exactly(exactly) => write!(f, "{}", exactly),
            AtLeast(minimum) => write!(f, "at least {}", minimum),
        }
    }
}

impl std::error::Error for RuntimeError {}
