use std::convert::TryFrom;
use std::rc::Rc;

use super::sexp::{HeapSexp, Sexp};


/// Cons cell. Either slot may be absent; an absent cdr terminates a list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cons {
    car: Option<HeapSexp>,
    cdr: Option<HeapSexp>,
}

impl Cons {
    pub fn new(car: Option<HeapSexp>, cdr: Option<HeapSexp>) -> Cons {
        Cons { car, cdr }
    }

    pub fn car(&self) -> Option<&HeapSexp> {
        self.car.as_ref()
    }

    pub fn cdr(&self) -> Option<&HeapSexp> {
        self.cdr.as_ref()
    }

    /// Whether this cell is a bare dotted pair: neither slot holds a cons and
    /// the cdr is present.
    pub fn is_dotted_pair(&self) -> bool {
        !is_cons(self.car()) && !is_cons(self.cdr()) && self.cdr.is_some()
    }
}


impl Drop for Cons {
    // Unlinks uniquely-owned spines iteratively so that dropping a long list
    // does not recurse once per element.
    fn drop(&mut self) {
        let mut next = self.cdr.take();
        while let Some(sexp) = next {
            match Rc::try_unwrap(sexp) {
                Ok(Sexp::Cons(mut cons)) => next = cons.cdr.take(),
                _ => break,
            }
        }
    }
}


pub fn is_cons(sexp: Option<&HeapSexp>) -> bool {
    sexp.map_or(false, |s| s.is_cons())
}


impl<'a> TryFrom<&'a Sexp> for &'a Cons {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Cons(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<Option<&'a HeapSexp>> for &'a Cons {
    type Error = Option<&'a HeapSexp>;

    fn try_from(value: Option<&'a HeapSexp>) -> Result<Self, Self::Error> {
        match value {
            Some(sexp) => <&Cons>::try_from(sexp.as_ref()).map_err(|_| value),
            None => Err(None),
        }
    }
}
