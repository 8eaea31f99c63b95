//! Ordinal predicates.
//!
//! An ordinal is represented by a non-negative [`BigInt`]. Every ordinal a
//! running program can construct is finite, so zero is the only limit
//! ordinal and every other value is a successor.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Runtime representation of an ordinal.
pub type Ordinal = BigInt;

/// Zero is the unique limit ordinal.
pub fn is_limit(ord: &Ordinal) -> bool {
    ord.is_zero()
}

/// Any positive ordinal is a successor.
pub fn is_succ(ord: &Ordinal) -> bool {
    ord.is_positive()
}

/// Distance from the nearest limit ordinal below, which is always zero.
pub fn offset(ord: &Ordinal) -> BigInt {
    ord.clone()
}

/// Every ordinal is a natural number at run time.
pub fn is_nat(_ord: &Ordinal) -> bool {
    true
}
