// stdlisp-core - Comparison built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Comparison operations: eqv?, equal?, =, <, >, <=, >=

use std::cmp::Ordering;

use stdlisp_data::LispVal;

use crate::error::{Error, Result};
use crate::numeric::{NumericKind, promote_pair, require_number};

// ============================================================================
// Equivalence
// ============================================================================

/// `eqv?` on two values.
///
/// Numbers are promoted to their common kind and compared exactly, so
/// `1`, `1/1`, `1.0` and `1.0+0.0i` are all equivalent. Strings and pairs are
/// equivalent only when they are the same allocation.
pub fn eqv(a: &LispVal, b: &LispVal) -> bool {
    if a.is_number() && b.is_number() {
        return promote_pair("eqv?", a, b).is_ok_and(|p| p.values_equal());
    }
    match (a, b) {
        (LispVal::Nil, LispVal::Nil) => true,
        (LispVal::Bool(x), LispVal::Bool(y)) => x == y,
        (LispVal::Symbol(x), LispVal::Symbol(y)) => x == y,
        (LispVal::Str(_), LispVal::Str(_)) | (LispVal::Pair(_), LispVal::Pair(_)) => a.ptr_eq(b),
        _ => false,
    }
}

/// `equal?`: structural equality over pairs and strings, `eqv?` elsewhere.
pub fn equal(a: &LispVal, b: &LispVal) -> bool {
    let (mut a, mut b) = (a, b);
    loop {
        match (a, b) {
            (LispVal::Pair(x), LispVal::Pair(y)) => {
                if std::rc::Rc::ptr_eq(x, y) {
                    return true;
                }
                if !equal(x.first(), y.first()) {
                    return false;
                }
                a = x.rest();
                b = y.rest();
            }
            (LispVal::Str(x), LispVal::Str(y)) => return x == y,
            _ => return eqv(a, b),
        }
    }
}

pub fn builtin_eqv(args: &[LispVal]) -> Result<LispVal> {
    if args.len() != 2 {
        return Err(Error::arity_named("eqv?", 2, args.len()));
    }
    Ok(LispVal::bool(eqv(&args[0], &args[1])))
}

pub fn builtin_equal(args: &[LispVal]) -> Result<LispVal> {
    if args.len() != 2 {
        return Err(Error::arity_named("equal?", 2, args.len()));
    }
    Ok(LispVal::bool(equal(&args[0], &args[1])))
}

// ============================================================================
// Numeric comparison
// ============================================================================

/// Order two real numbers after promotion.
///
/// Returns `None` when either side is NaN. Complex operands have no order
/// and are rejected.
pub fn compare_numbers(a: &LispVal, b: &LispVal) -> Result<Option<Ordering>> {
    compare_in("compare", a, b)
}

fn compare_in(name: &'static str, a: &LispVal, b: &LispVal) -> Result<Option<Ordering>> {
    use crate::numeric::Promoted;

    match promote_pair(name, a, b)? {
        Promoted::Integer(x, y) => Ok(Some(x.cmp(&y))),
        Promoted::Rational(x, y) => Ok(Some(x.cmp(&y))),
        Promoted::Real(x, y) => Ok(x.partial_cmp(&y)),
        Promoted::Complex(..) => Err(Error::type_error_in(name, "real number", "complex")),
    }
}

fn require_real(name: &'static str, val: &LispVal) -> Result<()> {
    match require_number(name, val)? {
        NumericKind::Complex => Err(Error::type_error_in(name, "real number", "complex")),
        _ => Ok(()),
    }
}

/// Chained ordering: `(< a b c)` holds when `a < b` and `b < c`.
///
/// Every operand is checked, even after a link in the chain has failed.
fn ordering_chain(
    name: &'static str,
    args: &[LispVal],
    holds: fn(Ordering) -> bool,
) -> Result<LispVal> {
    for arg in args {
        require_real(name, arg)?;
    }
    for pair in args.windows(2) {
        match compare_in(name, &pair[0], &pair[1])? {
            Some(ord) if holds(ord) => {}
            _ => return Ok(LispVal::bool(false)),
        }
    }
    Ok(LispVal::bool(true))
}

/// `=` on numbers of any kind, complex included.
pub fn builtin_num_equals(args: &[LispVal]) -> Result<LispVal> {
    for arg in args {
        require_number("=", arg)?;
    }
    for pair in args.windows(2) {
        if !promote_pair("=", &pair[0], &pair[1])?.values_equal() {
            return Ok(LispVal::bool(false));
        }
    }
    Ok(LispVal::bool(true))
}

pub fn builtin_less_than(args: &[LispVal]) -> Result<LispVal> {
    ordering_chain("<", args, Ordering::is_lt)
}

pub fn builtin_greater_than(args: &[LispVal]) -> Result<LispVal> {
    ordering_chain(">", args, Ordering::is_gt)
}

pub fn builtin_less_than_eql(args: &[LispVal]) -> Result<LispVal> {
    ordering_chain("<=", args, Ordering::is_le)
}

pub fn builtin_greater_than_eql(args: &[LispVal]) -> Result<LispVal> {
    ordering_chain(">=", args, Ordering::is_ge)
}

// ============================================================================
// Tests
// ============================================================================
