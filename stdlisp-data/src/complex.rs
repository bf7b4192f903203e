// stdlisp-data - Inexact complex numbers
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Inexact complex numbers in Cartesian form.
//!
//! Both components are always present. A complex value whose imaginary part
//! is zero is still complex; nothing in this crate demotes it to a real.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// `re + im·i` with `f64` components. Equality is IEEE per component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// Complex number with a zero imaginary part.
    #[inline]
    pub const fn from_real(re: f64) -> Self {
        Complex { re, im: 0.0 }
    }

    /// Squared magnitude `re² + im²`.
    #[inline]
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    #[inline]
    pub fn conj(&self) -> Self {
        Complex::new(self.re, -self.im)
    }

    /// Bitwise component equality: `NaN` matches `NaN`, `0.0` differs from `-0.0`.
    pub fn bits_eq(&self, other: &Complex) -> bool {
        self.re.to_bits() == other.re.to_bits() && self.im.to_bits() == other.im.to_bits()
    }
}

impl Add for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    /// `(a+bi)(c+di) = (ac−bd) + (ad+bc)i`
    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Div for Complex {
    type Output = Complex;

    /// Smith's algorithm: scale by the larger divisor component so
    /// `c²+d²` is never formed and finite operands stay finite.
    ///
    /// No zero check: a zero divisor gives NaN components.
    #[inline]
    fn div(self, rhs: Complex) -> Complex {
        let (a, b, c, d) = (self.re, self.im, rhs.re, rhs.im);
        if c.abs() >= d.abs() {
            let r = d / c;
            let den = c + d * r;
            Complex::new((a + b * r) / den, (b - a * r) / den)
        } else {
            let r = c / d;
            let den = c * r + d;
            Complex::new((a * r + b) / den, (b * r - a) / den)
        }
    }
}

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::from_real(re)
    }
}

/// Render a real in the stable printer format.
///
/// Integral finite values keep a `.0` suffix so they never read back as
/// exact integers; non-finite values use the `+inf.0` / `-inf.0` / `+nan.0`
/// spellings.
pub fn format_real(n: f64) -> String {
    if n.is_nan() {
        "+nan.0".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "+inf.0".to_string()
        } else {
            "-inf.0".to_string()
        }
    } else if n.fract() == 0.0 {
        // Display never uses exponent notation for f64, so this is plain digits
        format!("{}.0", n)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im.is_sign_negative() && !self.im.is_nan() {
            '-'
        } else {
            '+'
        };
        let magnitude = self.im.abs();
        let im = if magnitude.is_nan() {
            "nan.0".to_string()
        } else if magnitude.is_infinite() {
            "inf.0".to_string()
        } else {
            format_real(magnitude)
        };
        write!(f, "{}{}{}i", format_real(self.re), sign, im)
    }
}

// ============================================================================
// Tests
// ============================================================================
