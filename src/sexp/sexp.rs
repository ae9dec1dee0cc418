//! Module for representing S-exps.

use std::convert::TryFrom;
use std::fmt;
use std::rc::Rc;

use super::cons::Cons;
use crate::primitive::{Number, Primitive, Symbol};


/// Shared S-exp. Subtrees may be referenced from several trees at once, so
/// an S-exp is never mutated once it has been wrapped.
pub type HeapSexp = Rc<Sexp>;

#[derive(Clone, PartialEq)]
pub enum Sexp {
    Primitive(Primitive),
    Cons(Cons),
}

/// Walks the spine of a list.
///
/// Yields (element, from_cons). An element is absent when a cell's car is
/// absent. If from_cons is false, the element is the non-cons tail of a dotted
/// list (or a lone non-cons value) and is necessarily the last element.
pub struct SexpIter<'a> {
    cons: Option<&'a Cons>,
    tail: Option<&'a HeapSexp>,
}

impl Sexp {
    pub fn is_cons(&self) -> bool {
        matches!(self, Sexp::Cons(_))
    }

    pub fn quoted(sexp: Option<HeapSexp>) -> HeapSexp {
        Cons::new(Some(Primitive::QuoteMarker.into()), sexp).into()
    }

    /// Whether this is a cons cell headed by the quote marker.
    pub fn is_quoted(&self) -> bool {
        if let Sexp::Cons(cons) = self {
            matches!(
                cons.car().map(|s| s.as_ref()),
                Some(Sexp::Primitive(Primitive::QuoteMarker))
            )
        } else {
            false
        }
    }
}

impl<'a> SexpIter<'a> {
    pub fn from_list(list: Option<&'a HeapSexp>) -> Self {
        match list.map(|s| s.as_ref()) {
            Some(Sexp::Cons(cons)) => cons.iter(),
            _ => SexpIter {
                cons: None,
                tail: list,
            },
        }
    }
}

impl Cons {
    pub fn iter(&self) -> SexpIter {
        SexpIter {
            cons: Some(self),
            tail: None,
        }
    }
}

impl<'a> Iterator for SexpIter<'a> {
    type Item = (Option<&'a HeapSexp>, bool);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(cons) = self.cons {
            self.cons = None;
            match cons.cdr() {
                Some(next) => match next.as_ref() {
                    Sexp::Cons(next_cons) => self.cons = Some(next_cons),
                    _ => self.tail = Some(next),
                },
                None => {}
            }
            return Some((cons.car(), true));
        }

        self.tail.take().map(|tail| (Some(tail), false))
    }
}

impl<'a> IntoIterator for &'a Cons {
    type Item = (Option<&'a HeapSexp>, bool);
    type IntoIter = SexpIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


/// Text form of an evaluation result. Absent renders as the empty list.
pub fn serialize(sexp: Option<&HeapSexp>) -> String {
    match sexp {
        Some(sexp) => sexp.to_string(),
        None => "()".to_string(),
    }
}

impl fmt::Debug for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}

impl fmt::Display for Sexp {
    /// Note: this does not check for loops.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cons = match self {
            Sexp::Primitive(primitive) => return write!(f, "{}", primitive),
            Sexp::Cons(cons) => cons,
        };

        write!(f, "(")?;
        for (pos, (val, from_cons)) in cons.iter().enumerate() {
            if pos > 0 {
                if from_cons {
                    write!(f, " ")?;
                } else {
                    write!(f, " . ")?;
                }
            }
            match val {
                Some(val) => write!(f, "{}", val)?,
                None => write!(f, "()")?,
            }
        }
        write!(f, ")")
    }
}


impl<'a> TryFrom<&'a Sexp> for Number {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(Primitive::Number(num)) = value {
            Ok(*num)
        } else {
            Err(value)
        }
    }
}


// From<T> impls.
impl From<Primitive> for Sexp {
    fn from(primitive: Primitive) -> Self {
        Sexp::Primitive(primitive)
    }
}

impl From<Primitive> for HeapSexp {
    fn from(primitive: Primitive) -> Self {
        Rc::new(Sexp::Primitive(primitive))
    }
}

impl From<Cons> for Sexp {
    fn from(cons: Cons) -> Self {
        Sexp::Cons(cons)
    }
}

impl From<Cons> for HeapSexp {
    fn from(cons: Cons) -> Self {
        Rc::new(Sexp::Cons(cons))
    }
}

// Impl From<T> over Primitive payloads. HeapSexp impls only exist for local
// payload types.
macro_rules! sexp_from {
    ($from:ty, $($tail:tt)*) => {
        impl From<$from> for Sexp {
            fn from(elem: $from) -> Self {
                Sexp::Primitive(Primitive::from(elem))
            }
        }
        sexp_from!($($tail)*);
    };
    () => {};
}

macro_rules! heap_sexp_from {
    ($from:ty, $($tail:tt)*) => {
        impl From<$from> for HeapSexp {
            fn from(elem: $from) -> Self {
                Rc::new(Sexp::Primitive(Primitive::from(elem)))
            }
        }
        heap_sexp_from!($($tail)*);
    };
    () => {};
}

sexp_from!(Number, bool, Symbol,);
heap_sexp_from!(Symbol,);


#[cfg(test)]
#[path = "./sexp_test.rs"]
mod sexp_test;
