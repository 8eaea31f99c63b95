//! Numeric core of the dfy runtime.
//!
//! - [`Real`]: exact arbitrary-precision rationals whose `Display` is the
//!   canonical decimal form (`1/4` renders as `0.25`, `1/3` as `(1.0 / 3.0)`).
//! - [`euclid`]: division and modulus whose remainder is never negative.
//! - [`ordinal`]: predicates over ordinals, which are natural numbers at run time.
//! - [`chars`] and [`bitvector`]: code-point arithmetic and bit rotation.
//!
//! Integers are `num_bigint::BigInt`, re-exported here so generated code
//! depends on one crate for its numbers.

pub mod bitvector;
pub mod chars;
pub mod euclid;
pub mod ordinal;
mod real;

pub use euclid::{euclidian_division, euclidian_modulus, Euclidean};
pub use num_bigint::BigInt;
pub use real::{ParseRealError, Real};
