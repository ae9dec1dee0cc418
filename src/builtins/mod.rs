//! Creation of the builtin operation table.
//!
//! Every operation has the signature `fn(Args, &BuiltinTable) -> Ret`. Args
//! are the unevaluated forms from the call site; operations pass them through
//! `eval_arg` themselves, which is what lets `quote` see its operand raw.

use std::borrow::Cow;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::rc::Rc;

use lazy_static::lazy_static;
use log::debug;

use crate::function::{Ret, RuntimeError};
use crate::interpreter::eval_arg;
use crate::primitive::{BuiltIn, Number, Primitive};
use crate::sexp::{HeapSexp, Sexp};

mod list;
mod logic;
mod numeric;


macro_rules! builtins {
    [$($n:tt : $x:expr),* $(,)?] => {
        {
            let mut m = HashMap::new();
            $(
                m.insert($n, BuiltIn::new($n, $x));
            )*
            m
        }
    };
}

lazy_static! {
    /// Process-wide table; built on first use and never written afterwards.
    pub static ref BUILTINS: BuiltinTable = BuiltinTable::standard();
}


#[derive(Clone, Debug)]
pub struct BuiltinTable {
    ops: HashMap<&'static str, BuiltIn>,
}

impl BuiltinTable {
    pub fn new(ops: HashMap<&'static str, BuiltIn>) -> Self {
        Self { ops }
    }

    pub fn standard() -> Self {
        let ops = builtins![
            "+": numeric::add,
            "-": numeric::sub,
            "*": numeric::mul,
            "/": numeric::div,
            "max": numeric::max,
            "min": numeric::min,
            "abs": numeric::abs,
            "=": numeric::num_eq,
            ">": numeric::gt,
            "<": numeric::lt,
            ">=": numeric::ge,
            "<=": numeric::le,
            "and": logic::and,
            "or": logic::or,
            "not": logic::not,
            "boolean?": logic::is_boolean,
            "number?": logic::is_number,
            "quote": list::quote,
            "cons": list::cons,
            "car": list::car,
            "cdr": list::cdr,
            "list": list::list,
            "list-ref": list::list_ref,
            "list-tail": list::list_tail,
            "null?": list::is_null,
            "pair?": list::is_pair,
            "list?": list::is_list,
        ];
        debug!("Built standard builtin table with {} operations", ops.len());
        Self::new(ops)
    }

    /// Copy of this table lacking the named operations.
    pub fn without(&self, names: &[&str]) -> Self {
        let mut ops = self.ops.clone();
        for name in names {
            ops.remove(*name);
        }
        Self::new(ops)
    }

    pub fn lookup(&self, name: &str) -> Option<&BuiltIn> {
        self.ops.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ops.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}


// Helpers shared by the operation modules.

fn number(num: Number) -> Ret {
    Ok(Some(Rc::new(Sexp::from(num))))
}

fn boolean(b: bool) -> Ret {
    Ok(Some(Rc::new(Sexp::from(b))))
}

fn as_boolean(sexp: &Option<HeapSexp>) -> Option<bool> {
    match sexp.as_ref().map(|s| s.as_ref()) {
        Some(Sexp::Primitive(Primitive::Boolean(b))) => Some(*b),
        _ => None,
    }
}

fn is_false(sexp: &Option<HeapSexp>) -> bool {
    as_boolean(sexp) == Some(false)
}

/// Evaluates `arg`, which must produce a Number.
fn eval_number(arg: Option<&HeapSexp>, table: &BuiltinTable) -> Result<Number, RuntimeError> {
    let val = eval_arg(arg, table)?;
    if let Some(Ok(num)) = val.as_ref().map(|s| Number::try_from(s.as_ref())) {
        return Ok(num);
    }
    err!(InvalidArgument {
        given: val,
        expected: Cow::Borrowed("a Number"),
    })
}

fn eval_numbers(
    args: &[Option<HeapSexp>],
    table: &BuiltinTable,
) -> Result<Vec<Number>, RuntimeError> {
    args.iter()
        .map(|arg| eval_number(arg.as_ref(), table))
        .collect()
}
