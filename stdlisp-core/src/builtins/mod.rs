// stdlisp-core - Built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Built-in functions for stdlisp and the name table the evaluator binds.

pub mod arithmetic;
pub mod comparison;
pub mod io;
pub mod lists;
pub mod logic;

use std::collections::HashMap;
use std::sync::LazyLock;

use stdlisp_data::LispVal;
use tracing::debug;

use crate::error::{Error, Result};

use arithmetic::{
    builtin_add, builtin_div, builtin_division, builtin_mod, builtin_mul, builtin_sub,
};
use comparison::{
    builtin_equal, builtin_eqv, builtin_greater_than, builtin_greater_than_eql,
    builtin_less_than, builtin_less_than_eql, builtin_num_equals,
};
use io::{builtin_display, builtin_format};
use lists::{
    builtin_append, builtin_car, builtin_cdr, builtin_cons, builtin_length, builtin_list,
    builtin_reverse,
};
use logic::{builtin_and, builtin_not, builtin_or};

pub use comparison::{compare_numbers, equal, eqv};
pub use io::display_to;

/// Calling convention shared by every builtin.
pub type NativeFn = fn(&[LispVal]) -> Result<LispVal>;

/// A builtin and the name it is bound to.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: NativeFn,
}

const fn builtin(name: &'static str, func: NativeFn) -> Builtin {
    Builtin { name, func }
}

/// Every builtin, in registration order.
pub static BUILTINS: &[Builtin] = &[
    // Arithmetic
    builtin("+", builtin_add),
    builtin("-", builtin_sub),
    builtin("*", builtin_mul),
    builtin("/", builtin_div),
    builtin("mod", builtin_mod),
    builtin("division", builtin_division),
    // Equality and ordering
    builtin("eqv?", builtin_eqv),
    builtin("equal?", builtin_equal),
    builtin("=", builtin_num_equals),
    builtin("<", builtin_less_than),
    builtin(">", builtin_greater_than),
    builtin("<=", builtin_less_than_eql),
    builtin(">=", builtin_greater_than_eql),
    // Lists
    builtin("car", builtin_car),
    builtin("cdr", builtin_cdr),
    builtin("cons", builtin_cons),
    builtin("list", builtin_list),
    builtin("append", builtin_append),
    builtin("reverse", builtin_reverse),
    builtin("length", builtin_length),
    // Logic
    builtin("and", builtin_and),
    builtin("or", builtin_or),
    builtin("not", builtin_not),
    // I/O
    builtin("format", builtin_format),
    builtin("display", builtin_display),
];

static BUILTIN_INDEX: LazyLock<HashMap<&'static str, NativeFn>> =
    LazyLock::new(|| BUILTINS.iter().map(|b| (b.name, b.func)).collect());

/// Find the builtin bound to `name`.
pub fn lookup(name: &str) -> Option<NativeFn> {
    let found = BUILTIN_INDEX.get(name).copied();
    if found.is_none() {
        debug!(name, "no builtin registered under this name");
    }
    found
}

/// Look up `name` and apply it to `args`.
///
/// ```
/// use stdlisp_core::{LispVal, call};
///
/// let sum = call("+", &[LispVal::integer(1), LispVal::integer(2)]).unwrap();
/// assert_eq!(sum, LispVal::integer(3));
/// ```
pub fn call(name: &str, args: &[LispVal]) -> Result<LispVal> {
    let func = lookup(name).ok_or_else(|| Error::UnknownBuiltin(name.to_string()))?;
    func(args)
}

/// Hand every builtin to `define`, typically an environment binder.
pub fn register_builtins(define: &mut impl FnMut(&'static str, NativeFn)) {
    for b in BUILTINS {
        define(b.name, b.func);
    }
}
