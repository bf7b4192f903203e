// stdlisp-core - Numeric tower and promotion
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The numeric tower: Integer < Rational < Real < Complex.
//!
//! Every binary numeric operation first promotes both operands to the
//! least kind that can hold them both, then works inside that kind.
//! Promotion only ever widens:
//!
//! - Integer → Rational is exact (denominator 1)
//! - Integer/Rational → Real is the nearest `f64`
//! - anything → Complex keeps its value as the real part with a zero
//!   imaginary part (a complex operand keeps its own)
//!
//! A non-numeric operand aborts promotion with a type error.

use num_traits::Signed;
use stdlisp_data::{BigInt, Complex, LispVal, Rational, ToPrimitive};

use crate::error::{Error, Result};

/// Rank of a value in the numeric tower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericKind {
    Integer,
    Rational,
    Real,
    Complex,
}

impl NumericKind {
    /// Kind of a numeric value, `None` for everything else.
    pub fn of(val: &LispVal) -> Option<Self> {
        match val {
            LispVal::Integer(_) => Some(NumericKind::Integer),
            LispVal::Rational(_) => Some(NumericKind::Rational),
            LispVal::Real(_) => Some(NumericKind::Real),
            LispVal::Complex(_) => Some(NumericKind::Complex),
            _ => None,
        }
    }

    /// Least kind that holds both `self` and `other`.
    pub fn join(self, other: NumericKind) -> NumericKind {
        self.max(other)
    }

    /// Integer and Rational are exact; Real and Complex are not.
    pub fn is_exact(self) -> bool {
        matches!(self, NumericKind::Integer | NumericKind::Rational)
    }

    pub fn name(self) -> &'static str {
        match self {
            NumericKind::Integer => "integer",
            NumericKind::Rational => "rational",
            NumericKind::Real => "real",
            NumericKind::Complex => "complex",
        }
    }

    /// Additive identity of this kind.
    pub fn zero(self) -> LispVal {
        match self {
            NumericKind::Integer => LispVal::integer(0),
            NumericKind::Rational => LispVal::Rational(Rational::from_integer(BigInt::from(0))),
            NumericKind::Real => LispVal::real(0.0),
            NumericKind::Complex => LispVal::complex(0.0, 0.0),
        }
    }
}

/// Check that `val` is a number, reporting `context` otherwise.
pub(crate) fn require_number(context: &str, val: &LispVal) -> Result<NumericKind> {
    NumericKind::of(val).ok_or_else(|| Error::type_error_in(context, "number", val.type_name()))
}

/// Common kind of all `args`. An empty slice has the Integer kind.
pub fn common_kind(args: &[LispVal]) -> Result<NumericKind> {
    args.iter().try_fold(NumericKind::Integer, |kind, arg| {
        Ok(kind.join(require_number("promote", arg)?))
    })
}

/// Nearest `f64` to an integer of any size.
pub(crate) fn integer_to_f64(n: &BigInt) -> f64 {
    n.to_f64().unwrap_or(if n.is_negative() {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    })
}

/// An owned numeric operand.
enum Num {
    Integer(BigInt),
    Rational(Rational),
    Real(f64),
    Complex(Complex),
}

impl Num {
    fn from_val(context: &str, val: &LispVal) -> Result<Num> {
        match val {
            LispVal::Integer(n) => Ok(Num::Integer(n.clone())),
            LispVal::Rational(r) => Ok(Num::Rational(r.clone())),
            LispVal::Real(x) => Ok(Num::Real(*x)),
            LispVal::Complex(z) => Ok(Num::Complex(*z)),
            other => Err(Error::type_error_in(context, "number", other.type_name())),
        }
    }

    fn to_complex(&self) -> Complex {
        match self {
            Num::Integer(n) => Complex::from_real(integer_to_f64(n)),
            Num::Rational(r) => Complex::from_real(r.to_f64()),
            Num::Real(x) => Complex::from_real(*x),
            Num::Complex(z) => *z,
        }
    }
}

/// Two operands widened to one common kind.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Promoted {
    Integer(BigInt, BigInt),
    Rational(Rational, Rational),
    Real(f64, f64),
    Complex(Complex, Complex),
}

impl Promoted {
    pub(crate) fn into_values(self) -> (LispVal, LispVal) {
        match self {
            Promoted::Integer(a, b) => (LispVal::Integer(a), LispVal::Integer(b)),
            Promoted::Rational(a, b) => (LispVal::Rational(a), LispVal::Rational(b)),
            Promoted::Real(a, b) => (LispVal::Real(a), LispVal::Real(b)),
            Promoted::Complex(a, b) => (LispVal::Complex(a), LispVal::Complex(b)),
        }
    }

    /// Exact equality of the promoted operands. Reals and complex
    /// components use IEEE equality, with no tolerance.
    pub(crate) fn values_equal(&self) -> bool {
        match self {
            Promoted::Integer(a, b) => a == b,
            Promoted::Rational(a, b) => a == b,
            Promoted::Real(a, b) => a == b,
            Promoted::Complex(a, b) => a == b,
        }
    }
}

/// Widen `a` and `b` to their common kind.
pub(crate) fn promote_pair(context: &str, a: &LispVal, b: &LispVal) -> Result<Promoted> {
    let a = Num::from_val(context, a)?;
    let b = Num::from_val(context, b)?;
    Ok(match (a, b) {
        (Num::Integer(x), Num::Integer(y)) => Promoted::Integer(x, y),
        (Num::Integer(x), Num::Rational(y)) => Promoted::Rational(Rational::from_integer(x), y),
        (Num::Rational(x), Num::Integer(y)) => Promoted::Rational(x, Rational::from_integer(y)),
        (Num::Rational(x), Num::Rational(y)) => Promoted::Rational(x, y),
        (Num::Complex(x), y) => Promoted::Complex(x, y.to_complex()),
        (x, Num::Complex(y)) => Promoted::Complex(x.to_complex(), y),
        (Num::Real(x), Num::Real(y)) => Promoted::Real(x, y),
        (Num::Real(x), Num::Integer(y)) => Promoted::Real(x, integer_to_f64(&y)),
        (Num::Real(x), Num::Rational(y)) => Promoted::Real(x, y.to_f64()),
        (Num::Integer(x), Num::Real(y)) => Promoted::Real(integer_to_f64(&x), y),
        (Num::Rational(x), Num::Real(y)) => Promoted::Real(x.to_f64(), y),
    })
}

/// Convert both operands to their least common numeric kind.
///
/// ```
/// use stdlisp_core::{LispVal, promote};
///
/// let (a, b) = promote(&LispVal::integer(1), &LispVal::real(2.5)).unwrap();
/// assert_eq!(a, LispVal::real(1.0));
/// assert_eq!(b, LispVal::real(2.5));
/// ```
pub fn promote(a: &LispVal, b: &LispVal) -> Result<(LispVal, LispVal)> {
    Ok(promote_pair("promote", a, b)?.into_values())
}

/// Widen `val` to `kind`. Narrowing is refused with a type error.
pub fn convert(val: &LispVal, kind: NumericKind) -> Result<LispVal> {
    let own = require_number("convert", val)?;
    if kind < own {
        return Err(Error::type_error_in("convert", kind.name(), val.type_name()));
    }
    let (converted, _) = promote_pair("convert", val, &kind.zero())?.into_values();
    Ok(converted)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(n: i64, d: i64) -> LispVal {
        LispVal::rational(n, d).unwrap()
    }

    #[test]
    fn test_kind_order() {
        assert!(NumericKind::Integer < NumericKind::Rational);
        assert!(NumericKind::Rational < NumericKind::Real);
        assert!(NumericKind::Real < NumericKind::Complex);
        assert!(NumericKind::Rational.is_exact());
        assert!(!NumericKind::Real.is_exact());
    }

    #[test]
    fn test_kind_of() {
        assert_eq!(NumericKind::of(&LispVal::integer(3)), Some(NumericKind::Integer));
        assert_eq!(NumericKind::of(&rat(1, 2)), Some(NumericKind::Rational));
        assert_eq!(NumericKind::of(&LispVal::real(0.5)), Some(NumericKind::Real));
        assert_eq!(
            NumericKind::of(&LispVal::complex(0.0, 1.0)),
            Some(NumericKind::Complex)
        );
        assert_eq!(NumericKind::of(&LispVal::symbol("x")), None);
        assert_eq!(NumericKind::of(&LispVal::Nil), None);
    }

    #[test]
    fn test_join() {
        use NumericKind::*;
        assert_eq!(Integer.join(Integer), Integer);
        assert_eq!(Integer.join(Rational), Rational);
        assert_eq!(Real.join(Rational), Real);
        assert_eq!(Integer.join(Complex), Complex);
    }

    #[test]
    fn test_promote_integer_to_rational_is_exact() {
        let (a, b) = promote(&LispVal::integer(2), &rat(1, 3)).unwrap();
        assert_eq!(a, LispVal::Rational(Rational::from_integer(BigInt::from(2))));
        assert_eq!(b, rat(1, 3));
    }

    #[test]
    fn test_promote_rational_to_real() {
        let (a, b) = promote(&rat(7, 4), &LispVal::real(1.0)).unwrap();
        assert_eq!(a, LispVal::real(1.75));
        assert_eq!(b, LispVal::real(1.0));
    }

    #[test]
    fn test_promote_to_complex_keeps_imaginary() {
        let (a, b) = promote(&LispVal::real(2.5), &LispVal::complex(1.0, -3.0)).unwrap();
        assert_eq!(a, LispVal::complex(2.5, 0.0));
        assert_eq!(b, LispVal::complex(1.0, -3.0));

        let (a, b) = promote(&LispVal::complex(0.0, 1.0), &LispVal::integer(4)).unwrap();
        assert_eq!(a, LispVal::complex(0.0, 1.0));
        assert_eq!(b, LispVal::complex(4.0, 0.0));
    }

    #[test]
    fn test_promote_same_kind_is_identity() {
        let (a, b) = promote(&LispVal::integer(5), &LispVal::integer(-5)).unwrap();
        assert_eq!(a, LispVal::integer(5));
        assert_eq!(b, LispVal::integer(-5));
    }

    #[test]
    fn test_promote_rejects_non_numbers() {
        let err = promote(&LispVal::integer(1), &LispVal::symbol("x")).unwrap_err();
        assert_eq!(err, Error::type_error_in("promote", "number", "symbol"));
        assert!(promote(&LispVal::Nil, &LispVal::integer(1)).is_err());
    }

    #[test]
    fn test_common_kind() {
        assert_eq!(common_kind(&[]).unwrap(), NumericKind::Integer);
        let args = [LispVal::integer(1), rat(1, 2), LispVal::real(3.0)];
        assert_eq!(common_kind(&args).unwrap(), NumericKind::Real);
        assert!(common_kind(&[LispVal::integer(1), LispVal::bool(true)]).is_err());
    }

    #[test]
    fn test_convert_widens_only() {
        assert_eq!(
            convert(&LispVal::integer(3), NumericKind::Complex).unwrap(),
            LispVal::complex(3.0, 0.0)
        );
        assert_eq!(
            convert(&rat(1, 4), NumericKind::Real).unwrap(),
            LispVal::real(0.25)
        );
        assert_eq!(
            convert(&LispVal::real(0.5), NumericKind::Real).unwrap(),
            LispVal::real(0.5)
        );
        assert!(convert(&LispVal::real(1.0), NumericKind::Integer).is_err());
    }

    #[test]
    fn test_huge_integer_to_real() {
        let huge = BigInt::from(10).pow(400);
        assert_eq!(integer_to_f64(&huge), f64::INFINITY);
        assert_eq!(integer_to_f64(&-huge), f64::NEG_INFINITY);
    }
}
