//! Property tests for the numeric laws the runtime guarantees.

#![allow(clippy::unwrap_used, reason = "tests can panic")]

use dfy_num::{euclidian_division, euclidian_modulus, BigInt, Real};
use num_traits::Signed;
use proptest::prelude::*;

fn nonzero() -> impl Strategy<Value = i64> {
    prop_oneof![-1_000_000i64..0, 1i64..1_000_000]
}

proptest! {
    #[test]
    fn euclidean_law_holds(a in any::<i64>(), b in nonzero()) {
        let (a, b) = (BigInt::from(a), BigInt::from(b));
        let q = euclidian_division(&a, &b);
        let r = euclidian_modulus(&a, &b);
        prop_assert_eq!(&b * &q + &r, a);
        prop_assert!(!r.is_negative());
        prop_assert!(r < b.abs());
    }

    #[test]
    fn rendering_parses_back_exactly(n in any::<i64>(), d in nonzero()) {
        let r = Real::new(n, d);
        let rendered = r.to_string();
        prop_assert_eq!(rendered.parse::<Real>().unwrap(), r);
    }

    #[test]
    fn power_of_two_and_five_denominators_render_without_fraction(
        n in -10_000i64..10_000,
        twos in 0u32..12,
        fives in 0u32..12,
    ) {
        let d = 2i64.pow(twos) * 5i64.pow(fives);
        let rendered = Real::new(n, d).to_string();
        prop_assert!(!rendered.contains('/'), "{} rendered as {}", n, rendered);
    }
}
