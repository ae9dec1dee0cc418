//! Evaluation of parsed S-exps against a table of builtins.
//!
//! There are no environments: a form is either self-evaluating, a quoted
//! form, or a call whose head symbol names a builtin. Builtins receive their
//! argument forms unevaluated and unpack them as their contract requires.

use log::debug;

use crate::builtins::{BuiltinTable, BUILTINS};
use crate::error::Error;
use crate::function::{Args, Ret};
use crate::parser::parse_str;
use crate::primitive::Primitive;
use crate::sexp::{serialize, HeapSexp, Sexp, SexpIter};


/// Evaluates a single form.
///
/// A call whose head symbol is not in `table` is returned unchanged, as data.
pub fn unpack(form: Option<&HeapSexp>, table: &BuiltinTable) -> Ret {
    let sexp = match form {
        Some(sexp) => sexp,
        None => return err!(NothingToEvaluate),
    };
    let cons = match sexp.as_ref() {
        Sexp::Cons(cons) => cons,
        Sexp::Primitive(_) => return Ok(Some(sexp.clone())),
    };

    match cons.car().map(|s| s.as_ref()) {
        Some(Sexp::Primitive(Primitive::Symbol(symbol))) => match table.lookup(symbol.as_str()) {
            Some(builtin) => {
                let args = flatten_args(cons.cdr());
                debug!("Applying {} to {} argument(s)", builtin.name(), args.len());
                builtin.call(args, table)
            }
            None => {
                debug!("No builtin named \"{}\"; treating {} as data", symbol, sexp);
                Ok(Some(sexp.clone()))
            }
        },
        Some(Sexp::Primitive(Primitive::QuoteMarker)) => Ok(cons.cdr().cloned()),
        _ => err!(NonCallableHead(cons.car().cloned())),
    }
}

/// Collects the elements of a call's argument spine.
///
/// Absent elements are kept (as empty lists). A quote marker in an element
/// slot of the spine is skipped. A present non-cons tail becomes the final
/// argument, so `(f 1 . 2)` is called with two arguments.
pub fn flatten_args(tail: Option<&HeapSexp>) -> Args {
    let mut args = Args::new();
    for (val, from_cons) in SexpIter::from_list(tail) {
        if from_cons {
            if let Some(Sexp::Primitive(Primitive::QuoteMarker)) = val.map(|s| s.as_ref()) {
                continue;
            }
        }
        args.push(val.cloned());
    }
    args
}

/// Evaluates an argument form: cons cells are unpacked, atoms and absent
/// values pass through as they are.
pub fn eval_arg(arg: Option<&HeapSexp>, table: &BuiltinTable) -> Ret {
    match arg.map(|s| s.as_ref()) {
        Some(Sexp::Cons(_)) => unpack(arg, table),
        _ => Ok(arg.cloned()),
    }
}


/// Runs source text through lexing, parsing, evaluation, and serialization.
#[derive(Clone, Copy)]
pub struct Interpreter<'t> {
    table: &'t BuiltinTable,
}

impl Interpreter<'static> {
    /// Interpreter over the process-wide builtin table.
    pub fn new() -> Self {
        Self { table: &BUILTINS }
    }
}

impl Default for Interpreter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Interpreter<'t> {
    pub fn with_table(table: &'t BuiltinTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t BuiltinTable {
        self.table
    }

    pub fn eval<S: AsRef<str>>(&self, input: S) -> Result<Option<HeapSexp>, Error> {
        let form = parse_str(input)?;
        Ok(unpack(form.as_ref(), self.table)?)
    }

    pub fn run<S: AsRef<str>>(&self, input: S) -> Result<String, Error> {
        let result = serialize(self.eval(input.as_ref())?.as_ref());
        debug!("{} -> {}", input.as_ref(), result);
        Ok(result)
    }
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
