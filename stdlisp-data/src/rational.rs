// stdlisp-data - Exact rational numbers
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Exact rational numbers over arbitrary-precision integers.
//!
//! A [`Rational`] is always kept in lowest terms with a positive denominator,
//! so two equal rationals have identical fields. Every constructor and every
//! arithmetic result goes through the same reduction step.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Reduced fraction `numer/denom` with `denom > 0`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Create a rational in lowest terms. Returns `None` for a zero denominator.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Option<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return None;
        }
        Some(Self::reduced(numer.into(), denom))
    }

    /// Exact embedding of an integer (denominator 1).
    pub fn from_integer(n: BigInt) -> Self {
        Rational {
            numer: n,
            denom: BigInt::one(),
        }
    }

    /// Caller guarantees `denom != 0`.
    fn reduced(numer: BigInt, denom: BigInt) -> Self {
        // gcd is non-negative and gcd(0, d) = |d|, so zero becomes 0/1
        let g = numer.gcd(&denom);
        let (numer, denom) = (numer / &g, denom / &g);
        if denom.is_negative() {
            Rational {
                numer: -numer,
                denom: -denom,
            }
        } else {
            Rational { numer, denom }
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// True when the denominator is 1.
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Divide, or `None` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Rational) -> Option<Rational> {
        if rhs.is_zero() {
            return None;
        }
        Some(Self::reduced(
            &self.numer * &rhs.denom,
            &self.denom * &rhs.numer,
        ))
    }

    /// Nearest `f64` to this rational.
    ///
    /// Small operands are converted and divided directly. When either side is
    /// too wide for an `f64`, the quotient is taken in integer arithmetic with
    /// 64 significant bits and rescaled, so `huge/huge` stays finite.
    pub fn to_f64(&self) -> f64 {
        const DIRECT_BITS: u64 = 1000;

        if self.numer.bits() <= DIRECT_BITS && self.denom.bits() <= DIRECT_BITS {
            if let (Some(n), Some(d)) = (self.numer.to_f64(), self.denom.to_f64()) {
                return n / d;
            }
        }

        let shift = self.numer.bits() as i64 - self.denom.bits() as i64 - 64;
        let quotient = if shift >= 0 {
            &self.numer / (&self.denom << shift as usize)
        } else {
            (&self.numer << shift.unsigned_abs() as usize) / &self.denom
        };
        let mantissa = quotient.to_f64().unwrap_or(0.0);
        // Scale in two steps so an intermediate power of two cannot underflow
        // or overflow when the final value is still representable.
        let shift = shift.clamp(-4000, 4000) as i32;
        let half = shift / 2;
        mantissa * 2f64.powi(half) * 2f64.powi(shift - half)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        // a/b + c/d = (ad + cb) / bd
        Rational::reduced(
            &self.numer * &rhs.denom + &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        Rational::reduced(
            &self.numer * &rhs.denom - &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational::reduced(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying preserves order
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numer, self.denom)
    }
}

// ============================================================================
// Tests
// ============================================================================
