//! List construction, access, and structural predicates.

use std::borrow::Cow;
use std::convert::TryFrom;

use super::{boolean, eval_number, BuiltinTable};
use crate::function::{Args, ExpectedCount, Ret};
use crate::interpreter::eval_arg;
use crate::sexp::cons::is_cons;
use crate::sexp::{Cons, ConsList, HeapSexp};


/// Returns its operand unevaluated.
pub fn quote(args: Args, _table: &BuiltinTable) -> Ret {
    ExpectedCount::Exactly(1).check(args.len())?;
    Ok(args.into_iter().next().flatten())
}

pub fn cons(args: Args, table: &BuiltinTable) -> Ret {
    ExpectedCount::Exactly(2).check(args.len())?;
    let car = eval_arg(args[0].as_ref(), table)?;
    let cdr = eval_arg(args[1].as_ref(), table)?;
    Ok(Some(Cons::new(car, cdr).into()))
}

pub fn car(args: Args, table: &BuiltinTable) -> Ret {
    ExpectedCount::Exactly(1).check(args.len())?;
    let val = eval_arg(args[0].as_ref(), table)?;
    if let Ok(cons) = <&Cons>::try_from(val.as_ref()) {
        return Ok(cons.car().cloned());
    }
    not_a_pair(val)
}

pub fn cdr(args: Args, table: &BuiltinTable) -> Ret {
    ExpectedCount::Exactly(1).check(args.len())?;
    let val = eval_arg(args[0].as_ref(), table)?;
    if let Ok(cons) = <&Cons>::try_from(val.as_ref()) {
        return Ok(cons.cdr().cloned());
    }
    not_a_pair(val)
}

pub fn list(args: Args, table: &BuiltinTable) -> Ret {
    let elems = args
        .iter()
        .map(|arg| eval_arg(arg.as_ref(), table))
        .collect::<Result<ConsList, _>>()?;
    Ok(elems.release())
}

pub fn list_ref(args: Args, table: &BuiltinTable) -> Ret {
    ExpectedCount::Exactly(2).check(args.len())?;
    let list = eval_arg(args[0].as_ref(), table)?;
    let index = eval_number(args[1].as_ref(), table)?;

    let mut pos = 0;
    let mut current = list.as_ref();
    while let Ok(cons) = <&Cons>::try_from(current) {
        if pos == index {
            return Ok(cons.car().cloned());
        }
        pos += 1;
        current = cons.cdr();
    }
    err!(IndexOutOfRange { index })
}

pub fn list_tail(args: Args, table: &BuiltinTable) -> Ret {
    ExpectedCount::Exactly(2).check(args.len())?;
    let list = eval_arg(args[0].as_ref(), table)?;
    let index = eval_number(args[1].as_ref(), table)?;

    let mut pos = 0;
    let mut current = list.as_ref();
    while let Ok(cons) = <&Cons>::try_from(current) {
        if pos == index {
            return Ok(current.cloned());
        }
        pos += 1;
        current = cons.cdr();
    }
    // Walking off the end lands exactly on the tail, which may be absent.
    if pos == index {
        return Ok(current.cloned());
    }
    err!(IndexOutOfRange { index })
}

pub fn is_null(args: Args, table: &BuiltinTable) -> Ret {
    ExpectedCount::Exactly(1).check(args.len())?;
    let val = eval_arg(args[0].as_ref(), table)?;
    boolean(val.is_none())
}

/// True for a cell whose car is not a cons and whose cdr is either not a
/// cons or a one-element list: `(1 . 2)` and `(1 2)`, but not `(1 2 3)`.
pub fn is_pair(args: Args, table: &BuiltinTable) -> Ret {
    ExpectedCount::Exactly(1).check(args.len())?;
    let val = eval_arg(args[0].as_ref(), table)?;
    let cons = match <&Cons>::try_from(val.as_ref()) {
        Ok(cons) => cons,
        Err(_) => return boolean(false),
    };

    let short_tail = match <&Cons>::try_from(cons.cdr()) {
        Ok(next) => next.cdr().is_none(),
        Err(_) => true,
    };
    boolean(!is_cons(cons.car()) && short_tail)
}

/// True for the empty list and for any spine with no bare dotted pair along
/// it.
pub fn is_list(args: Args, table: &BuiltinTable) -> Ret {
    ExpectedCount::Exactly(1).check(args.len())?;
    let val = eval_arg(args[0].as_ref(), table)?;
    let mut cons = match <&Cons>::try_from(val.as_ref()) {
        Ok(cons) => cons,
        Err(other) => return boolean(other.is_none()),
    };

    loop {
        if cons.is_dotted_pair() {
            return boolean(false);
        }
        match <&Cons>::try_from(cons.cdr()) {
            Ok(next) => cons = next,
            Err(_) => return boolean(true),
        }
    }
}

fn not_a_pair(given: Option<HeapSexp>) -> Ret {
    err!(InvalidArgument {
        given,
        expected: Cow::Borrowed("a Pair"),
    })
}
