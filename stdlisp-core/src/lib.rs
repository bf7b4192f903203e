// stdlisp-core - Standard library core for stdlisp
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # stdlisp-core
//!
//! The builtins a stdlisp evaluator binds at startup: tower-aware arithmetic,
//! `eqv?`/`equal?` and numeric ordering, cons-cell list operations, logical
//! helpers and printing. Every builtin has the [`NativeFn`] signature and is
//! listed in [`BUILTINS`] under its Scheme name.

pub mod builtins;
pub mod error;
pub mod numeric;

pub use builtins::{
    BUILTINS, Builtin, NativeFn, call, compare_numbers, display_to, equal, eqv, lookup,
    register_builtins,
};
pub use error::{AritySpec, Error, ErrorKind, Result};
pub use numeric::{NumericKind, common_kind, convert, promote};

// Re-export data types for convenience
pub use stdlisp_data::{
    BigInt, Complex, LispVal, Rational, Symbol, get_print_length, set_print_length,
};
