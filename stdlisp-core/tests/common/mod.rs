// stdlisp-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers and utilities for stdlisp integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`call`] - Apply a builtin by its registered name
//! - [`int`], [`rat`], [`real`], [`cplx`], [`sym`], [`string`] - Value builders
//! - [`list`], [`dotted`] - Proper and dotted list builders
//!
//! # Macros
//!
//! - [`assert_call!`] - Assert that a call produces an expected value
//! - [`assert_call_err!`] - Assert that a call fails with a given error kind
//! - [`assert_call_str!`] - Assert the printed form of a call's result

// Re-export common types for convenience
#[allow(unused_imports)]
pub use stdlisp_core::{Error, ErrorKind, LispVal};

/// Apply the builtin registered under `name` to `args`.
///
/// # Returns
///
/// Returns the result value, or the builtin's error.
#[allow(dead_code)]
pub fn call(name: &str, args: &[LispVal]) -> Result<LispVal, Error> {
    stdlisp_core::call(name, args)
}

/// Apply a builtin and render the error as its message string.
#[allow(dead_code)]
pub fn call_msg(name: &str, args: &[LispVal]) -> Result<LispVal, String> {
    call(name, args).map_err(|e| e.to_string())
}

#[allow(dead_code)]
pub fn int(n: i64) -> LispVal {
    LispVal::integer(n)
}

/// Reduced rational `n/d`.
///
/// # Panics
///
/// Panics if `d` is zero.
#[allow(dead_code)]
pub fn rat(n: i64, d: i64) -> LispVal {
    LispVal::rational(n, d).expect("non-zero denominator")
}

#[allow(dead_code)]
pub fn real(x: f64) -> LispVal {
    LispVal::real(x)
}

#[allow(dead_code)]
pub fn cplx(re: f64, im: f64) -> LispVal {
    LispVal::complex(re, im)
}

#[allow(dead_code)]
pub fn sym(name: &str) -> LispVal {
    LispVal::symbol(name)
}

#[allow(dead_code)]
pub fn string(s: &str) -> LispVal {
    LispVal::string(s)
}

/// Proper list of `items`.
#[allow(dead_code)]
pub fn list<const N: usize>(items: [LispVal; N]) -> LispVal {
    LispVal::list(items)
}

/// List of `items` whose last cell links to `tail`.
#[allow(dead_code)]
pub fn dotted<const N: usize>(items: [LispVal; N], tail: LispVal) -> LispVal {
    LispVal::list_with_tail(items, tail)
}

/// Assert that calling builtin `name` on `args` produces the expected value.
///
/// # Example
///
/// ```ignore
/// assert_call!("+", [int(1), int(2)], int(3));
/// ```
#[macro_export]
macro_rules! assert_call {
    ($name:expr, [$($arg:expr),* $(,)?], $expected:expr) => {{
        let args: Vec<$crate::common::LispVal> = vec![$($arg),*];
        let result = $crate::common::call($name, &args);
        assert!(
            result.is_ok(),
            "Failed to call '{}' on {:?}: {:?}",
            $name,
            args,
            result.as_ref().err()
        );
        assert_eq!(
            result.unwrap(),
            $expected,
            "Result of '{}' on {:?} did not match expected",
            $name,
            args
        );
    }};
}

/// Assert that calling builtin `name` on `args` fails with the given
/// [`ErrorKind`] variant.
///
/// # Example
///
/// ```ignore
/// assert_call_err!("car", [int(3)], TypeError);
/// ```
#[macro_export]
macro_rules! assert_call_err {
    ($name:expr, [$($arg:expr),* $(,)?], $kind:ident) => {{
        let args: Vec<$crate::common::LispVal> = vec![$($arg),*];
        let result = $crate::common::call($name, &args);
        match result {
            Err(e) => assert_eq!(
                e.kind(),
                $crate::common::ErrorKind::$kind,
                "Wrong error for '{}' on {:?}: {}",
                $name,
                args,
                e
            ),
            Ok(v) => panic!(
                "Expected {} for '{}' on {:?} but got {}",
                stringify!($kind),
                $name,
                args,
                v
            ),
        }
    }};
}

/// Assert the printed form of calling builtin `name` on `args`.
///
/// # Example
///
/// ```ignore
/// assert_call_str!("*", [int(-5), rat(7, 3)], "-35/3");
/// ```
#[macro_export]
macro_rules! assert_call_str {
    ($name:expr, [$($arg:expr),* $(,)?], $expected:expr) => {{
        let args: Vec<$crate::common::LispVal> = vec![$($arg),*];
        match $crate::common::call($name, &args) {
            Ok(v) => assert_eq!(
                v.to_string(),
                $expected,
                "Printed result of '{}' on {:?} did not match expected",
                $name,
                args
            ),
            Err(e) => panic!("Failed to call '{}' on {:?}: {}", $name, args, e),
        }
    }};
}
