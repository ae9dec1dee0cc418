//! Arithmetic and comparison over Numbers.
//!
//! Argument forms that are calls are evaluated first; anything that does not
//! then turn out to be a Number is rejected before any folding happens.

use super::{boolean, eval_numbers, number, BuiltinTable};
use crate::function::{Args, ExpectedCount, Ret, RuntimeError};
use crate::primitive::Number;


type Step = fn(Number, Number) -> Result<Number, RuntimeError>;

fn checked(result: Option<Number>) -> Result<Number, RuntimeError> {
    result.ok_or(RuntimeError::Overflow)
}

/// Left fold over all arguments from `identity`.
fn fold(args: Args, table: &BuiltinTable, identity: Number, step: Step) -> Ret {
    let nums = eval_numbers(&args, table)?;
    number(nums.into_iter().try_fold(identity, step)?)
}

/// Left fold over args[1..] seeded with args[0].
fn fold_from_first(args: Args, table: &BuiltinTable, step: Step) -> Ret {
    ExpectedCount::AtLeast(1).check(args.len())?;
    let nums = eval_numbers(&args, table)?;
    number(nums[1..].iter().copied().try_fold(nums[0], step)?)
}

/// Whether every adjacent pair satisfies `rel`; vacuously true.
fn chain(args: Args, table: &BuiltinTable, rel: fn(&Number, &Number) -> bool) -> Ret {
    let nums = eval_numbers(&args, table)?;
    boolean(nums.windows(2).all(|w| rel(&w[0], &w[1])))
}


pub fn add(args: Args, table: &BuiltinTable) -> Ret {
    fold(args, table, 0, |a, b| checked(a.checked_add(b)))
}

pub fn mul(args: Args, table: &BuiltinTable) -> Ret {
    fold(args, table, 1, |a, b| checked(a.checked_mul(b)))
}

pub fn sub(args: Args, table: &BuiltinTable) -> Ret {
    fold_from_first(args, table, |a, b| checked(a.checked_sub(b)))
}

pub fn div(args: Args, table: &BuiltinTable) -> Ret {
    fold_from_first(args, table, |a, b| {
        if b == 0 {
            return err!(DivisionByZero);
        }
        checked(a.checked_div(b))
    })
}

pub fn max(args: Args, table: &BuiltinTable) -> Ret {
    fold_from_first(args, table, |a, b| Ok(a.max(b)))
}

pub fn min(args: Args, table: &BuiltinTable) -> Ret {
    fold_from_first(args, table, |a, b| Ok(a.min(b)))
}

pub fn abs(args: Args, table: &BuiltinTable) -> Ret {
    ExpectedCount::Exactly(1).check(args.len())?;
    let nums = eval_numbers(&args, table)?;
    number(checked(nums[0].checked_abs())?)
}

pub fn num_eq(args: Args, table: &BuiltinTable) -> Ret {
    chain(args, table, |a, b| a == b)
}

pub fn gt(args: Args, table: &BuiltinTable) -> Ret {
    chain(args, table, |a, b| a > b)
}

pub fn lt(args: Args, table: &BuiltinTable) -> Ret {
    chain(args, table, |a, b| a < b)
}

pub fn ge(args: Args, table: &BuiltinTable) -> Ret {
    chain(args, table, |a, b| a >= b)
}

pub fn le(args: Args, table: &BuiltinTable) -> Ret {
    chain(args, table, |a, b| a <= b)
}
