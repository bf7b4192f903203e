// stdlisp-core - Logic built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Logic operations: and, or, not
//!
//! Only `#f` is false. `()`, `0` and the empty string are all true.

use stdlisp_data::LispVal;

use crate::error::{Error, Result};

// ============================================================================
// Logic
// ============================================================================

/// (and & args) - first false value, else the last value; `#t` when empty
pub fn builtin_and(args: &[LispVal]) -> Result<LispVal> {
    let mut result = LispVal::bool(true);
    for arg in args {
        if !arg.is_truthy() {
            return Ok(arg.clone());
        }
        result = arg.clone();
    }
    Ok(result)
}

/// (or & args) - first true value, else the last value; `#f` when empty
pub fn builtin_or(args: &[LispVal]) -> Result<LispVal> {
    let mut result = LispVal::bool(false);
    for arg in args {
        if arg.is_truthy() {
            return Ok(arg.clone());
        }
        result = arg.clone();
    }
    Ok(result)
}

/// (not x) - logical negation
pub fn builtin_not(args: &[LispVal]) -> Result<LispVal> {
    if args.len() != 1 {
        return Err(Error::arity_named("not", 1, args.len()));
    }
    Ok(LispVal::bool(!args[0].is_truthy()))
}
