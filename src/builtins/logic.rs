//! Boolean connectives and kind predicates.
//!
//! Only Boolean #f is falsy; every other value, including the empty list,
//! counts as true.

use super::{as_boolean, boolean, is_false, BuiltinTable};
use crate::function::{Args, ExpectedCount, Ret};
use crate::interpreter::eval_arg;
use crate::primitive::Primitive;
use crate::sexp::Sexp;


pub fn and(args: Args, table: &BuiltinTable) -> Ret {
    if args.is_empty() {
        return boolean(true);
    }

    let mut last = None;
    for arg in &args {
        let val = eval_arg(arg.as_ref(), table)?;
        if is_false(&val) {
            return boolean(false);
        }
        last = val;
    }
    Ok(last)
}

pub fn or(args: Args, table: &BuiltinTable) -> Ret {
    for arg in &args {
        let val = eval_arg(arg.as_ref(), table)?;
        match as_boolean(&val) {
            Some(false) => continue,
            Some(true) => return boolean(true),
            None => return Ok(val),
        }
    }
    boolean(false)
}

pub fn not(args: Args, table: &BuiltinTable) -> Ret {
    ExpectedCount::Exactly(1).check(args.len())?;
    let val = eval_arg(args[0].as_ref(), table)?;
    boolean(is_false(&val))
}

fn all_of_kind(args: Args, table: &BuiltinTable, kind: fn(&Primitive) -> bool) -> Ret {
    for arg in &args {
        let val = eval_arg(arg.as_ref(), table)?;
        match val.as_ref().map(|s| s.as_ref()) {
            Some(Sexp::Primitive(primitive)) if kind(primitive) => {}
            _ => return boolean(false),
        }
    }
    boolean(true)
}

pub fn is_boolean(args: Args, table: &BuiltinTable) -> Ret {
    all_of_kind(args, table, |p| matches!(p, Primitive::Boolean(_)))
}

pub fn is_number(args: Args, table: &BuiltinTable) -> Ret {
    all_of_kind(args, table, |p| matches!(p, Primitive::Number(_)))
}
