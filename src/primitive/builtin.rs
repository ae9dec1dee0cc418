//! Named operations from the builtin table.

use std::fmt;

use crate::builtins::BuiltinTable;
use crate::function::{Args, Ret};


/// Signature shared by every builtin. Args arrive unevaluated; the table is
/// handed back in so an operation can unpack its own argument forms.
pub type Operation = fn(Args, &BuiltinTable) -> Ret;

/// An operation together with the name it is registered under. Two builtins
/// are equal when their names are.
#[derive(Clone, Copy)]
pub struct BuiltIn {
    name: &'static str,
    op: Operation,
}

impl BuiltIn {
    pub fn new(name: &'static str, op: Operation) -> BuiltIn {
        BuiltIn { name, op }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(&self, args: Args, table: &BuiltinTable) -> Ret {
        (self.op)(args, table)
    }
}

impl PartialEq for BuiltIn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{}]", self.name)
    }
}

impl fmt::Debug for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
