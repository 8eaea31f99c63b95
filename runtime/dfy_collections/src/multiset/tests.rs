use super::*;
use pretty_assertions::assert_eq;

fn bag(items: &[&'static str]) -> MultiSet<&'static str> {
    items.iter().copied().collect()
}

fn n(v: u32) -> BigUint {
    BigUint::from(v)
}

#[test]
fn counts_occurrences() {
    let b = bag(&["a", "b", "a", "a"]);
    assert_eq!(b.multiplicity(&"a"), n(3));
    assert_eq!(b.multiplicity(&"b"), n(1));
    assert_eq!(b.multiplicity(&"z"), n(0));
    assert_eq!(b.cardinality(), n(4));
}

#[test]
fn union_sums_multiplicities() {
    let a = bag(&["x", "x", "y"]);
    let b = bag(&["x", "z"]);
    let u = &a | &b;
    for key in ["x", "y", "z", "w"] {
        assert_eq!(u.multiplicity(&key), a.multiplicity(&key) + b.multiplicity(&key));
    }
    assert_eq!(u.cardinality(), a.cardinality() + b.cardinality());
}

#[test]
fn intersection_takes_minimum() {
    let a = bag(&["x", "x", "x", "y"]);
    let b = bag(&["x", "x", "z"]);
    let i = &a & &b;
    assert_eq!(i, bag(&["x", "x"]));
    assert!(!i.contains(&"y"));
}

#[test]
fn difference_clamps_at_zero() {
    let a = bag(&["x", "x", "y"]);
    let b = bag(&["x", "y", "y", "y"]);
    let d = &a - &b;
    assert_eq!(d, bag(&["x"]));
    assert_eq!(d.multiplicity(&"y"), n(0));
    assert!(!d.contains(&"y"));
}

#[test]
fn zero_multiplicity_is_absent() {
    let a = bag(&["x", "y"]);
    let cleared = a.update("y", n(0));
    assert!(!cleared.contains(&"y"));
    assert_eq!(cleared, bag(&["x"]));
    assert_eq!(cleared.unique_elements().len(), 1);
    assert!(cleared.is_disjoint_from(&bag(&["y"])));
    // original untouched
    assert_eq!(a.multiplicity(&"y"), n(1));
}

#[test]
fn update_sets_multiplicity() {
    let a = bag(&["x"]).update("x", n(5)).update("q", n(2));
    assert_eq!(a.multiplicity(&"x"), n(5));
    assert_eq!(a.cardinality(), n(7));
}

#[test]
fn subset_relations() {
    let small = bag(&["a", "b"]);
    let large = bag(&["a", "a", "b"]);
    assert!(small.is_subset_of(&large));
    assert!(small.is_proper_subset_of(&large));
    assert!(!large.is_subset_of(&small));
    assert!(large.is_subset_of(&large));
    assert!(!large.is_proper_subset_of(&large));
    assert!(MultiSet::empty().is_subset_of(&small));
}

#[test]
fn disjointness_uses_positive_members() {
    assert!(bag(&["a"]).is_disjoint_from(&bag(&["b"])));
    assert!(!bag(&["a", "b"]).is_disjoint_from(&bag(&["b"])));
}

#[test]
fn from_set_has_unit_multiplicities() {
    let s: Set<&str> = ["p", "q"].into_iter().collect();
    let b = MultiSet::from_set(&s);
    assert_eq!(b.cardinality(), n(2));
    assert_eq!(b.unique_elements(), s);
}

#[test]
fn elements_repeat_by_multiplicity() {
    let b = bag(&["k", "k", "k"]);
    let all: Vec<_> = b.elements().copied().collect();
    assert_eq!(all, vec!["k", "k", "k"]);
    assert_eq!(b.to_string(), "multiset{k, k, k}");
    assert_eq!(MultiSet::<i32>::empty().to_string(), "multiset{}");
}

#[test]
fn equal_contents_hash_equal() {
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(b: &MultiSet<&'static str>) -> u64 {
        let mut h = DefaultHasher::new();
        b.hash(&mut h);
        h.finish()
    }

    let a = bag(&["a", "b", "a"]);
    let b = bag(&["b", "a", "a"]);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, bag(&["a", "b"]));
}

#[test]
fn iter_yields_each_element_once_with_its_count() {
    let huge = BigUint::from(u64::MAX) * 4u32;
    let b = bag(&["a", "b", "b"]).update("c", huge.clone());
    let mut entries: Vec<_> = b.iter().map(|(item, n)| (*item, n.clone())).collect();
    entries.sort();
    assert_eq!(entries, vec![("a", n(1)), ("b", n(2)), ("c", huge)]);
}
