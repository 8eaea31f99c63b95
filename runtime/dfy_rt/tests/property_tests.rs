//! Property tests for the quantifier and the integer generators.

use dfy_rt::{all_integers, integer_range, quantifier, BigInt};
use proptest::prelude::*;

proptest! {
    #[test]
    fn quantifier_matches_all_and_any(values in prop::collection::vec(any::<i16>(), 0..20), pivot in any::<i16>()) {
        let below = |v: &i16| *v < pivot;
        prop_assert_eq!(quantifier(values.iter(), true, below), values.iter().all(below));
        prop_assert_eq!(quantifier(values.iter(), false, below), values.iter().any(below));
    }

    #[test]
    fn bounded_range_length(lo in -500i64..500, len in 0i64..200) {
        let hi = lo + len;
        let range = integer_range(Some(BigInt::from(lo)), Some(BigInt::from(hi)));
        let items: Vec<BigInt> = range.collect();
        prop_assert_eq!(Some(items.len()), usize::try_from(len).ok());
        prop_assert!(items.windows(2).all(|w| &w[1] - &w[0] == BigInt::from(1)));
    }

    #[test]
    fn all_integers_reaches_every_small_integer(n in -300i64..300) {
        let target = BigInt::from(n);
        let position = all_integers().position(|i| i == target);
        let expected = if n > 0 { 2 * n - 1 } else { -2 * n };
        prop_assert_eq!(position, usize::try_from(expected).ok());
    }
}
