// stdlisp-core - Arithmetic built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Arithmetic operations: +, -, *, /, mod, division
//!
//! ## Promotion
//!
//! The variadic operations fold from the first argument, promoting the running
//! total and the next argument to their common kind at every step. Integers are
//! arbitrary precision, so exact arithmetic never overflows.
//!
//! ## Division by Zero
//!
//! A zero divisor is an error only in the exact domain (Integer or Rational).
//! Once a step is Real or Complex the IEEE result stands: `(/ 1.0 0)` is
//! `+inf.0` and a complex zero divisor gives NaN components.

use num_integer::Integer as _;
use num_traits::{Signed, Zero};
use stdlisp_data::{BigInt, LispVal, Rational};
use tracing::trace;

use crate::error::{Error, Result};
use crate::numeric::{Promoted, promote_pair, require_number};

type BinaryOp = fn(&LispVal, &LispVal) -> Result<LispVal>;

// ============================================================================
// Helper functions for numeric arithmetic
// ============================================================================

/// Fold `op` over `args`, starting from the first argument.
///
/// Zero arguments give `identity`. A lone argument is type-checked and
/// returned unchanged.
fn fold_numeric(
    name: &'static str,
    args: &[LispVal],
    identity: LispVal,
    op: BinaryOp,
) -> Result<LispVal> {
    let Some((first, rest)) = args.split_first() else {
        return Ok(identity);
    };
    require_number(name, first)?;
    let mut acc = first.clone();
    for arg in rest {
        acc = op(&acc, arg)?;
    }
    Ok(acc)
}

fn add2(a: &LispVal, b: &LispVal) -> Result<LispVal> {
    Ok(match promote_pair("+", a, b)? {
        Promoted::Integer(x, y) => LispVal::Integer(x + y),
        Promoted::Rational(x, y) => LispVal::Rational(&x + &y),
        Promoted::Real(x, y) => LispVal::Real(x + y),
        Promoted::Complex(x, y) => LispVal::Complex(x + y),
    })
}

fn sub2(a: &LispVal, b: &LispVal) -> Result<LispVal> {
    Ok(match promote_pair("-", a, b)? {
        Promoted::Integer(x, y) => LispVal::Integer(x - y),
        Promoted::Rational(x, y) => LispVal::Rational(&x - &y),
        Promoted::Real(x, y) => LispVal::Real(x - y),
        Promoted::Complex(x, y) => LispVal::Complex(x - y),
    })
}

fn mul2(a: &LispVal, b: &LispVal) -> Result<LispVal> {
    Ok(match promote_pair("*", a, b)? {
        Promoted::Integer(x, y) => LispVal::Integer(x * y),
        Promoted::Rational(x, y) => LispVal::Rational(&x * &y),
        Promoted::Real(x, y) => LispVal::Real(x * y),
        Promoted::Complex(x, y) => LispVal::Complex(x * y),
    })
}

fn div2(a: &LispVal, b: &LispVal) -> Result<LispVal> {
    match promote_pair("/", a, b)? {
        Promoted::Integer(x, y) => {
            if y.is_zero() {
                trace!(dividend = %x, "exact division by zero");
                return Err(Error::DivisionByZero);
            }
            if (&x % &y).is_zero() {
                Ok(LispVal::Integer(x / y))
            } else {
                Rational::new(x, y)
                    .map(LispVal::Rational)
                    .ok_or(Error::DivisionByZero)
            }
        }
        Promoted::Rational(x, y) => match x.checked_div(&y) {
            Some(q) => Ok(LispVal::Rational(q)),
            None => {
                trace!(dividend = %x, "exact division by zero");
                Err(Error::DivisionByZero)
            }
        },
        Promoted::Real(x, y) => {
            let q = x / y;
            if !q.is_finite() {
                trace!(dividend = x, divisor = y, "inexact division gave a non-finite result");
            }
            Ok(LispVal::Real(q))
        }
        Promoted::Complex(x, y) => {
            let q = x / y;
            if !(q.re.is_finite() && q.im.is_finite()) {
                trace!(dividend = %x, divisor = %y, "inexact division gave a non-finite result");
            }
            Ok(LispVal::Complex(q))
        }
    }
}

/// Both arguments of `mod`/`division`, which must be exactly two integers.
fn integer_operands<'a>(name: &'static str, args: &'a [LispVal]) -> Result<(&'a BigInt, &'a BigInt)> {
    match args {
        [LispVal::Integer(a), LispVal::Integer(b)] => Ok((a, b)),
        [LispVal::Integer(_), other] | [other, _] => {
            Err(Error::type_error_in(name, "integer", other.type_name()))
        }
        _ => Err(Error::type_error_in(
            name,
            "exactly two integers",
            "wrong number of arguments",
        )),
    }
}

/// Euclidean quotient and remainder: `a = b*q + r` with `0 <= r < |b|`.
///
/// `b` must be non-zero.
fn euclid_div_rem(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let r = a.mod_floor(&b.abs());
    let q = (a - &r) / b;
    (q, r)
}

// ============================================================================
// Arithmetic
// ============================================================================

pub fn builtin_add(args: &[LispVal]) -> Result<LispVal> {
    fold_numeric("+", args, LispVal::integer(0), add2)
}

pub fn builtin_sub(args: &[LispVal]) -> Result<LispVal> {
    fold_numeric("-", args, LispVal::integer(0), sub2)
}

pub fn builtin_mul(args: &[LispVal]) -> Result<LispVal> {
    fold_numeric("*", args, LispVal::integer(1), mul2)
}

pub fn builtin_div(args: &[LispVal]) -> Result<LispVal> {
    fold_numeric("/", args, LispVal::integer(0), div2)
}

pub fn builtin_mod(args: &[LispVal]) -> Result<LispVal> {
    let (a, b) = integer_operands("mod", args)?;
    if b.is_zero() {
        trace!(dividend = %a, "mod by zero");
        return Err(Error::DivisionByZero);
    }
    Ok(LispVal::Integer(a.mod_floor(&b.abs())))
}

/// `(division a b)` returns the list `(q r)`.
pub fn builtin_division(args: &[LispVal]) -> Result<LispVal> {
    let (a, b) = integer_operands("division", args)?;
    if b.is_zero() {
        trace!(dividend = %a, "division by zero");
        return Err(Error::DivisionByZero);
    }
    let (q, r) = euclid_div_rem(a, b);
    Ok(LispVal::list([LispVal::Integer(q), LispVal::Integer(r)]))
}

// ============================================================================
// Tests
// ============================================================================
