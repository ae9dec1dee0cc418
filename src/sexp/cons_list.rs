//! Module for constructing lists front-to-back.
//!
//! Elements are staged until release, at which point the chain is linked from
//! the end. No cell is touched after it has been linked into the chain.

use std::rc::Rc;

use crate::sexp::{Cons, HeapSexp, Sexp};

#[derive(Debug, Default)]
pub struct ConsList {
    elems: Vec<Option<HeapSexp>>,
}

impl ConsList {
    pub fn new() -> ConsList {
        ConsList { elems: Vec::new() }
    }

    pub fn append(&mut self, val: Option<HeapSexp>) {
        self.elems.push(val);
    }

    /// Proper list; absent when nothing was appended.
    pub fn release(self) -> Option<HeapSexp> {
        self.release_with_tail(None)
    }

    /// List whose last cdr is `tail`. With no elements, this is just `tail`.
    pub fn release_with_tail(self, tail: Option<HeapSexp>) -> Option<HeapSexp> {
        self.elems.into_iter().rev().fold(tail, |cdr, car| {
            Some(Rc::new(Sexp::Cons(Cons::new(car, cdr))))
        })
    }
}

impl std::iter::FromIterator<Option<HeapSexp>> for ConsList {
    fn from_iter<I: IntoIterator<Item = Option<HeapSexp>>>(iter: I) -> Self {
        ConsList {
            elems: iter.into_iter().collect(),
        }
    }
}
