//! Lazy value domains for quantifiers and iteration.
//!
//! Every generator here is an ordinary [`Iterator`]. The unbounded ones
//! never end, so callers either short-circuit (as [`quantifier`] does) or
//! take a prefix.
//!
//! [`quantifier`]: crate::quantifier

use std::iter;

use dfy_num::BigInt;
use num_traits::{One, Signed, Zero};

use crate::options::RuntimeOptions;

/// Every character value, in code-point order.
///
/// Spans the 16-bit code units unless `options.unicode_chars` is set, in
/// which case it spans every Unicode scalar value. Surrogate code points
/// are not characters and are skipped in both modes.
pub fn all_chars(options: &RuntimeOptions) -> impl Iterator<Item = char> {
    let max = if options.unicode_chars {
        u32::from(char::MAX)
    } else {
        0xFFFF
    };
    (0..=max).filter_map(char::from_u32)
}

/// `false`, then `true`.
pub fn all_booleans() -> impl Iterator<Item = bool> {
    [false, true].into_iter()
}

/// A single value, once.
pub fn single_value<T>(value: T) -> iter::Once<T> {
    iter::once(value)
}

/// Iterator returned by [`integer_range`] and [`all_integers`].
#[derive(Clone, Debug)]
pub struct IntegerRange {
    state: RangeState,
}

#[derive(Clone, Debug)]
enum RangeState {
    /// `next, next + 1, ...` stopping before `end` when there is one.
    Up { next: BigInt, end: Option<BigInt> },
    /// `next, next - 1, ...` forever.
    Down { next: BigInt },
    /// `0, 1, -1, 2, -2, ...`
    Alternating { next: BigInt },
}

/// Integers between `lo` (inclusive) and `hi` (exclusive).
///
/// - `(Some(lo), Some(hi))`: `lo, lo + 1, ..., hi - 1`
/// - `(Some(lo), None)`: `lo, lo + 1, ...` without end
/// - `(None, Some(hi))`: `hi - 1, hi - 2, ...` without end
/// - `(None, None)`: every integer, as [`all_integers`]
pub fn integer_range(lo: Option<BigInt>, hi: Option<BigInt>) -> IntegerRange {
    let state = match (lo, hi) {
        (Some(next), end) => RangeState::Up { next, end },
        (None, Some(hi)) => RangeState::Down {
            next: hi - BigInt::one(),
        },
        (None, None) => RangeState::Alternating {
            next: BigInt::zero(),
        },
    };
    IntegerRange { state }
}

/// Every integer, smallest magnitude first: `0, 1, -1, 2, -2, ...`
pub fn all_integers() -> IntegerRange {
    integer_range(None, None)
}

impl Iterator for IntegerRange {
    type Item = BigInt;

    fn next(&mut self) -> Option<BigInt> {
        match &mut self.state {
            RangeState::Up { next, end } => {
                if end.as_ref().is_some_and(|end| *next >= *end) {
                    return None;
                }
                let current = next.clone();
                *next += 1;
                Some(current)
            }
            RangeState::Down { next } => {
                let current = next.clone();
                *next -= 1;
                Some(current)
            }
            RangeState::Alternating { next } => {
                let current = next.clone();
                *next = if next.is_positive() {
                    -&*next
                } else {
                    BigInt::one() - &*next
                };
                Some(current)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            RangeState::Up {
                next,
                end: Some(end),
            } => {
                let remaining = if next < end {
                    usize::try_from(end - next).ok()
                } else {
                    Some(0)
                };
                (remaining.unwrap_or(usize::MAX), remaining)
            }
            _ => (usize::MAX, None),
        }
    }
}

/// `2 * start, 4 * start, 8 * start, ...` without end. `start` itself is
/// never produced.
///
/// Single pass: it cannot be rewound or cloned.
#[derive(Debug)]
pub struct Doubler {
    current: BigInt,
}

impl Doubler {
    pub fn new(start: impl Into<BigInt>) -> Self {
        Doubler {
            current: start.into(),
        }
    }
}

impl Iterator for Doubler {
    type Item = BigInt;

    fn next(&mut self) -> Option<BigInt> {
        self.current *= 2;
        Some(self.current.clone())
    }
}

#[cfg(test)]
mod tests;
