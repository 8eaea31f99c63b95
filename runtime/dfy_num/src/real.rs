//! Exact rational numbers with a canonical decimal rendering.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// An arbitrary-precision fraction, always kept in lowest terms with a
/// positive denominator.
///
/// `Display` renders the shortest exact fixed-point decimal when the
/// denominator divides a power of ten, and a fraction literal otherwise:
///
/// ```text
/// Real::new(1, 4)   => 0.25
/// Real::new(-1, 8)  => -0.125
/// Real::new(3, 1)   => 3.0
/// Real::new(1, 3)   => (1.0 / 3.0)
/// ```
///
/// Every rendering parses back to the same value with [`FromStr`].
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Real(BigRational);

impl Real {
    /// Build `numer / denom` in lowest terms.
    ///
    /// A zero denominator is a precondition violation.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Self {
        Real(BigRational::new(numer.into(), denom.into()))
    }

    pub fn from_integer(n: impl Into<BigInt>) -> Self {
        Real(BigRational::from_integer(n.into()))
    }

    pub fn zero() -> Self {
        Real(BigRational::zero())
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Largest integer not greater than this value.
    pub fn floor(&self) -> BigInt {
        self.0.floor().to_integer()
    }

    pub fn as_ratio(&self) -> &BigRational {
        &self.0
    }
}

impl Default for Real {
    fn default() -> Self {
        Real::zero()
    }
}

impl From<BigInt> for Real {
    fn from(n: BigInt) -> Self {
        Real::from_integer(n)
    }
}

impl From<i64> for Real {
    fn from(n: i64) -> Self {
        Real::from_integer(n)
    }
}

impl From<BigRational> for Real {
    fn from(r: BigRational) -> Self {
        Real(r)
    }
}

// Decimal rendering

/// Divide every factor `f` out of `x`, returning what remains and how many
/// factors were removed.
fn isolate_factor(f: u32, mut x: BigInt) -> (BigInt, u32) {
    let f = BigInt::from(f);
    let mut count = 0;
    while x > BigInt::one() && x.is_multiple_of(&f) {
        x /= &f;
        count += 1;
    }
    (x, count)
}

/// When `denom` divides a power of ten, return the multiplier that turns it
/// into exactly that power, together with the exponent (the number of
/// fractional digits).
fn power_of_ten_compensation(denom: &BigInt) -> Option<(BigInt, u32)> {
    let (rem, tens) = isolate_factor(10, denom.clone());
    let (major, minor) = if rem.is_multiple_of(&BigInt::from(5)) {
        (5, 2)
    } else if rem.is_multiple_of(&BigInt::from(2)) || rem.is_one() {
        (2, 5)
    } else {
        return None;
    };
    let (rem, extra) = isolate_factor(major, rem);
    if !rem.is_one() {
        return None;
    }
    Some((BigInt::from(minor).pow(extra), tens + extra))
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (numer, denom) = (self.0.numer(), self.0.denom());
        if denom.is_one() {
            return write!(f, "{numer}.0");
        }
        let Some((compensation, shift)) = power_of_ten_compensation(denom) else {
            return write!(f, "({numer}.0 / {denom}.0)");
        };
        let sign = if numer.is_negative() { "-" } else { "" };
        let digits = (numer.abs() * compensation).to_string();
        let shift = shift as usize;
        if shift < digits.len() {
            let (whole, fraction) = digits.split_at(digits.len() - shift);
            write!(f, "{sign}{whole}.{fraction}")
        } else {
            let pad = "0".repeat(shift - digits.len());
            write!(f, "{sign}0.{pad}{digits}")
        }
    }
}

impl fmt::Debug for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Real({}/{})", self.0.numer(), self.0.denom())
    }
}

// Parsing

/// Error returned when a string is not a real literal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseRealError {
    #[error("empty real literal")]
    Empty,
    #[error("invalid real literal `{0}`")]
    Invalid(String),
    #[error("zero denominator in real literal `{0}`")]
    ZeroDenominator(String),
}

/// Parse `[-]digits[.digits]` exactly.
fn parse_decimal(text: &str) -> Option<BigRational> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (whole, fraction) = body.split_once('.').unwrap_or((body, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = format!("{whole}{fraction}");
    let mut numer = BigInt::from_str(&digits).ok()?;
    if negative {
        numer = -numer;
    }
    let exponent = u32::try_from(fraction.len()).ok()?;
    let denom = BigInt::from(10).pow(exponent);
    Some(BigRational::new(numer, denom))
}

impl FromStr for Real {
    type Err = ParseRealError;

    /// Accepts decimal literals (`-12.5`, `3`), fractions (`3/4`) and the
    /// parenthesized form produced by `Display` (`(1.0 / 3.0)`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ParseRealError::Empty);
        }
        let inner = text
            .strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .unwrap_or(text);
        let invalid = || ParseRealError::Invalid(s.to_string());
        match inner.split_once('/') {
            None => parse_decimal(inner).map(Real).ok_or_else(invalid),
            Some((n, d)) => {
                let numer = parse_decimal(n.trim()).ok_or_else(invalid)?;
                let denom = parse_decimal(d.trim()).ok_or_else(invalid)?;
                if denom.is_zero() {
                    return Err(ParseRealError::ZeroDenominator(s.to_string()));
                }
                Ok(Real(numer / denom))
            }
        }
    }
}

// Arithmetic

macro_rules! forward_binop {
    ($($trait:ident $method:ident),* $(,)?) => {$(
        impl $trait for Real {
            type Output = Real;

            #[inline]
            fn $method(self, rhs: Real) -> Real {
                Real($trait::$method(self.0, rhs.0))
            }
        }

        impl<'a> $trait<&'a Real> for &'a Real {
            type Output = Real;

            #[inline]
            fn $method(self, rhs: &'a Real) -> Real {
                Real($trait::$method(&self.0, &rhs.0))
            }
        }
    )*};
}

forward_binop!(Add add, Sub sub, Mul mul, Div div);

impl Neg for Real {
    type Output = Real;

    fn neg(self) -> Real {
        Real(-self.0)
    }
}

impl Neg for &Real {
    type Output = Real;

    fn neg(self) -> Real {
        Real(-&self.0)
    }
}
