// stdlisp-data - Value types for stdlisp
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for stdlisp.
//!
//! `LispVal` is the closed set of values the standard library operates on:
//! four numeric kinds, cons cells and the empty list, and a few opaque atoms
//! that only pass through equality, truthiness and printing.
//!
//! Values are immutable. Cons cells sit behind `Rc`, so cloning a list is a
//! reference-count bump and sub-structure handed out by `cdr`, `append` or
//! `reverse` stays alive for as long as any holder keeps it.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use num_bigint::BigInt;

use crate::complex::{Complex, format_real};
use crate::rational::Rational;
use crate::symbol::Symbol;

// Thread-local print settings (can be configured by the embedding printer)
thread_local! {
    /// Maximum number of list elements to print.
    /// None means unlimited, Some(n) means print at most n elements.
    /// Default: None (unlimited)
    static PRINT_LENGTH: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Get the current print-length setting.
pub fn get_print_length() -> Option<usize> {
    PRINT_LENGTH.with(|pl| pl.get())
}

/// Set the print-length setting. Returns the previous value.
pub fn set_print_length(len: Option<usize>) -> Option<usize> {
    PRINT_LENGTH.with(|pl| pl.replace(len))
}

/// A stdlisp value.
#[derive(Clone)]
pub enum LispVal {
    /// The empty list, also the terminator of every proper list
    Nil,
    /// `#t` or `#f`
    Bool(bool),
    /// Exact integer of unbounded size
    Integer(BigInt),
    /// Exact rational, always in lowest terms
    Rational(Rational),
    /// Inexact real
    Real(f64),
    /// Inexact complex, never demoted to a real
    Complex(Complex),
    /// Interned identifier
    Symbol(Symbol),
    /// Immutable string
    Str(Rc<str>),
    /// Cons cell, shared by every list that links to it
    Pair(Rc<Pair>),
}

/// A cons cell.
pub struct Pair {
    first: LispVal,
    rest: LispVal,
}

impl Pair {
    pub fn first(&self) -> &LispVal {
        &self.first
    }

    pub fn rest(&self) -> &LispVal {
        &self.rest
    }
}

impl Drop for Pair {
    fn drop(&mut self) {
        // Unlink the spine one cell at a time so that releasing a long list
        // does not recurse once per element.
        let mut rest = std::mem::replace(&mut self.rest, LispVal::Nil);
        while let LispVal::Pair(cell) = rest {
            match Rc::try_unwrap(cell) {
                Ok(mut pair) => rest = std::mem::replace(&mut pair.rest, LispVal::Nil),
                // Still shared: another holder keeps the remaining spine alive
                Err(_) => break,
            }
        }
    }
}

impl LispVal {
    /// Create the empty list
    pub fn nil() -> Self {
        LispVal::Nil
    }

    /// Create a boolean value
    pub fn bool(b: bool) -> Self {
        LispVal::Bool(b)
    }

    /// Create an exact integer
    pub fn integer(n: impl Into<BigInt>) -> Self {
        LispVal::Integer(n.into())
    }

    /// Create a rational in lowest terms. Returns `None` for a zero denominator.
    ///
    /// The result is always a `Rational`, even when the denominator reduces
    /// to 1.
    pub fn rational(num: impl Into<BigInt>, den: impl Into<BigInt>) -> Option<Self> {
        Rational::new(num, den).map(LispVal::Rational)
    }

    /// Create an inexact real
    pub fn real(n: f64) -> Self {
        LispVal::Real(n)
    }

    /// Create an inexact complex number
    pub fn complex(re: f64, im: f64) -> Self {
        LispVal::Complex(Complex::new(re, im))
    }

    /// Create (or look up) a symbol
    pub fn symbol(name: &str) -> Self {
        LispVal::Symbol(Symbol::new(name))
    }

    /// Create a string value
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        LispVal::Str(s.into())
    }

    /// Create a fresh cons cell
    pub fn cons(first: LispVal, rest: LispVal) -> Self {
        LispVal::Pair(Rc::new(Pair { first, rest }))
    }

    /// Create a proper list from elements
    pub fn list(elements: impl IntoIterator<Item = LispVal>) -> Self {
        Self::list_with_tail(elements, LispVal::Nil)
    }

    /// Create a list whose last cell links to `tail` instead of `Nil`.
    ///
    /// With a non-list tail the result is a dotted list.
    pub fn list_with_tail(elements: impl IntoIterator<Item = LispVal>, tail: LispVal) -> Self {
        let elements: Vec<LispVal> = elements.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(tail, |rest, first| LispVal::cons(first, rest))
    }

    /// Check if this value is the empty list
    pub fn is_nil(&self) -> bool {
        matches!(self, LispVal::Nil)
    }

    /// Check if this value is a cons cell
    pub fn is_pair(&self) -> bool {
        matches!(self, LispVal::Pair(_))
    }

    /// Check if this value is truthy. Only `#f` is false.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, LispVal::Bool(false))
    }

    /// Check if this value belongs to the numeric tower
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            LispVal::Integer(_) | LispVal::Rational(_) | LispVal::Real(_) | LispVal::Complex(_)
        )
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            LispVal::Nil => "nil",
            LispVal::Bool(_) => "bool",
            LispVal::Integer(_) => "integer",
            LispVal::Rational(_) => "rational",
            LispVal::Real(_) => "real",
            LispVal::Complex(_) => "complex",
            LispVal::Symbol(_) => "symbol",
            LispVal::Str(_) => "string",
            LispVal::Pair(_) => "pair",
        }
    }

    /// First field of a cons cell
    pub fn car(&self) -> Option<&LispVal> {
        match self {
            LispVal::Pair(p) => Some(&p.first),
            _ => None,
        }
    }

    /// Rest field of a cons cell
    pub fn cdr(&self) -> Option<&LispVal> {
        match self {
            LispVal::Pair(p) => Some(&p.rest),
            _ => None,
        }
    }

    /// Iterate over the elements of a cons chain.
    ///
    /// Iteration stops at the first value that is not a cons cell; see
    /// [`ListIter::remainder`].
    pub fn iter(&self) -> ListIter<'_> {
        ListIter { cursor: self }
    }

    /// Number of elements when this is a proper list, `None` otherwise.
    pub fn list_length(&self) -> Option<usize> {
        let mut iter = self.iter();
        let count = iter.by_ref().count();
        iter.remainder().is_nil().then_some(count)
    }

    /// True for `Nil` and for cons chains that end in `Nil`.
    pub fn is_proper_list(&self) -> bool {
        self.list_length().is_some()
    }

    /// Check whether both values are the same heap allocation.
    ///
    /// Only cons cells and strings live behind a pointer; every other kind
    /// returns `false`.
    pub fn ptr_eq(&self, other: &LispVal) -> bool {
        match (self, other) {
            (LispVal::Pair(a), LispVal::Pair(b)) => Rc::ptr_eq(a, b),
            (LispVal::Str(a), LispVal::Str(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Equality for everything except cons cells.
    fn atom_eq(&self, other: &LispVal) -> bool {
        match (self, other) {
            (LispVal::Nil, LispVal::Nil) => true,
            (LispVal::Bool(a), LispVal::Bool(b)) => a == b,
            (LispVal::Integer(a), LispVal::Integer(b)) => a == b,
            (LispVal::Rational(a), LispVal::Rational(b)) => a == b,
            (LispVal::Real(a), LispVal::Real(b)) => a.to_bits() == b.to_bits(),
            (LispVal::Complex(a), LispVal::Complex(b)) => a.bits_eq(b),
            (LispVal::Symbol(a), LispVal::Symbol(b)) => a == b,
            (LispVal::Str(a), LispVal::Str(b)) => a == b,
            _ => false,
        }
    }
}

/// Borrowing iterator over the elements of a cons chain.
pub struct ListIter<'a> {
    cursor: &'a LispVal,
}

impl<'a> ListIter<'a> {
    /// The value the chain ends in: `Nil` for a proper list, the dotted tail
    /// for an improper one, or the whole value if it was never a cons cell.
    /// Only meaningful once the iterator is exhausted.
    pub fn remainder(&self) -> &'a LispVal {
        self.cursor
    }
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a LispVal;

    fn next(&mut self) -> Option<Self::Item> {
        match self.cursor {
            LispVal::Pair(p) => {
                self.cursor = &p.rest;
                Some(&p.first)
            }
            _ => None,
        }
    }
}

impl FromIterator<LispVal> for LispVal {
    fn from_iter<I: IntoIterator<Item = LispVal>>(iter: I) -> Self {
        LispVal::list(iter)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for LispVal {
    fn from(b: bool) -> Self {
        LispVal::Bool(b)
    }
}

impl From<i64> for LispVal {
    fn from(n: i64) -> Self {
        LispVal::Integer(BigInt::from(n))
    }
}

impl From<i32> for LispVal {
    fn from(n: i32) -> Self {
        LispVal::Integer(BigInt::from(n))
    }
}

impl From<BigInt> for LispVal {
    fn from(n: BigInt) -> Self {
        LispVal::Integer(n)
    }
}

impl From<Rational> for LispVal {
    fn from(r: Rational) -> Self {
        LispVal::Rational(r)
    }
}

impl From<f64> for LispVal {
    fn from(n: f64) -> Self {
        LispVal::Real(n)
    }
}

impl From<Complex> for LispVal {
    fn from(z: Complex) -> Self {
        LispVal::Complex(z)
    }
}

impl From<Symbol> for LispVal {
    fn from(sym: Symbol) -> Self {
        LispVal::Symbol(sym)
    }
}

// ============================================================================
// Display implementation
// ============================================================================

impl fmt::Display for LispVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LispVal::Nil => write!(f, "()"),
            LispVal::Bool(true) => write!(f, "#t"),
            LispVal::Bool(false) => write!(f, "#f"),
            LispVal::Integer(n) => write!(f, "{}", n),
            LispVal::Rational(r) => write!(f, "{}", r),
            LispVal::Real(n) => write!(f, "{}", format_real(*n)),
            LispVal::Complex(z) => write!(f, "{}", z),
            LispVal::Symbol(sym) => write!(f, "{}", sym),
            LispVal::Str(s) => write!(f, "\"{}\"", escape_string(s)),
            LispVal::Pair(_) => fmt_list(self, f),
        }
    }
}

impl fmt::Debug for LispVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

fn fmt_list(list: &LispVal, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let limit = get_print_length();
    write!(f, "(")?;
    let mut iter = list.iter();
    for (i, item) in iter.by_ref().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        if limit.is_some_and(|max| i >= max) {
            return write!(f, "...)");
        }
        write!(f, "{}", item)?;
    }
    match iter.remainder() {
        LispVal::Nil => write!(f, ")"),
        tail => write!(f, " . {})", tail),
    }
}

fn escape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            _ => result.push(c),
        }
    }
    result
}

// ============================================================================
// Structural equality
// ============================================================================

impl PartialEq for LispVal {
    /// Strict structural equality: same kind and same value.
    ///
    /// Reals compare by bit pattern and cons chains element by element. Use
    /// the `eqv?` builtin for equality across numeric kinds.
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (LispVal::Pair(x), LispVal::Pair(y)) => {
                    if Rc::ptr_eq(x, y) {
                        return true;
                    }
                    if x.first != y.first {
                        return false;
                    }
                    a = &x.rest;
                    b = &y.rest;
                }
                _ => return a.atom_eq(b),
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
