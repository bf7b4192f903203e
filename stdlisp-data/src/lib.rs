// stdlisp-data - Value types for stdlisp
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # stdlisp-data
//!
//! Value types shared by the stdlisp standard library: the `LispVal` enum,
//! exact rationals, inexact complex numbers and interned symbols.

pub mod complex;
pub mod rational;
pub mod symbol;
pub mod value;

pub use complex::{Complex, format_real};
pub use num_bigint::BigInt;
pub use num_traits::ToPrimitive;
pub use rational::Rational;
pub use symbol::Symbol;
pub use value::{ListIter, LispVal, Pair, get_print_length, set_print_length};
