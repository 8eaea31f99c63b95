//! Euclidean division and modulus.
//!
//! For every `a` and nonzero `b`:
//!
//! ```text
//! a == b * euclidian_division(a, b) + euclidian_modulus(a, b)
//! 0 <= euclidian_modulus(a, b) < |b|
//! ```
//!
//! Unlike truncating `/` and `%`, the modulus is never negative, so
//! `euclidian_division(-7, 2) == -4` and `euclidian_modulus(-7, 2) == 1`.
//!
//! A zero divisor is a precondition violation established by the compiler
//! front end and is not checked again here.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Euclidean quotient of two arbitrary-precision integers.
pub fn euclidian_division(a: &BigInt, b: &BigInt) -> BigInt {
    // Truncating division agrees with floor division when both operands
    // are non-negative, so each branch reduces to that case.
    if a.is_negative() {
        let flipped = -a - BigInt::one();
        if b.is_negative() {
            flipped / -b + BigInt::one()
        } else {
            -(flipped / b) - BigInt::one()
        }
    } else if b.is_negative() {
        -(a / -b)
    } else {
        a / b
    }
}

/// Euclidean remainder of two arbitrary-precision integers.
pub fn euclidian_modulus(a: &BigInt, b: &BigInt) -> BigInt {
    let modulus = b.abs();
    if !a.is_negative() {
        return a % &modulus;
    }
    let c = -a % &modulus;
    if c.is_zero() {
        c
    } else {
        modulus - c
    }
}

/// Euclidean division for fixed-width machine integers.
///
/// Overflow (`MIN / -1`) is a precondition violation like a zero divisor.
pub trait Euclidean: Sized {
    fn euclidian_division(self, rhs: Self) -> Self;
    fn euclidian_modulus(self, rhs: Self) -> Self;
}

macro_rules! impl_euclidean {
    ($($t:ty),* $(,)?) => {$(
        impl Euclidean for $t {
            #[inline]
            fn euclidian_division(self, rhs: Self) -> Self {
                self.div_euclid(rhs)
            }

            #[inline]
            fn euclidian_modulus(self, rhs: Self) -> Self {
                self.rem_euclid(rhs)
            }
        }
    )*};
}

impl_euclidean!(i8, i16, i32, i64, i128, isize);

impl Euclidean for BigInt {
    fn euclidian_division(self, rhs: Self) -> Self {
        euclidian_division(&self, &rhs)
    }

    fn euclidian_modulus(self, rhs: Self) -> Self {
        euclidian_modulus(&self, &rhs)
    }
}
