use super::*;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn set(items: &[i32]) -> Set<i32> {
    items.iter().copied().collect()
}

#[test]
fn duplicates_collapse() {
    let s = set(&[1, 2, 2, 3, 3, 3]);
    assert_eq!(s.len(), 3);
    assert_eq!(s, set(&[3, 2, 1]));
}

#[test]
fn union_intersection_difference() {
    let a = set(&[1, 2, 3]);
    let b = set(&[3, 4]);
    assert_eq!(&a | &b, set(&[1, 2, 3, 4]));
    assert_eq!(&a & &b, set(&[3]));
    assert_eq!(&a - &b, set(&[1, 2]));
    assert_eq!(&b - &a, set(&[4]));
    // operands are unchanged
    assert_eq!(a, set(&[1, 2, 3]));
    assert_eq!(b, set(&[3, 4]));
}

#[test]
fn subset_relations() {
    let a = set(&[1, 2]);
    let b = set(&[1, 2, 3]);
    assert!(a.is_subset_of(&b));
    assert!(a.is_proper_subset_of(&b));
    assert!(b.is_subset_of(&b));
    assert!(!b.is_proper_subset_of(&b));
    assert!(!b.is_subset_of(&a));
    assert!(Set::empty().is_subset_of(&a));
}

#[test]
fn disjointness() {
    assert!(set(&[1, 2]).is_disjoint_from(&set(&[3, 4])));
    assert!(!set(&[1, 2]).is_disjoint_from(&set(&[2, 5])));
    assert!(Set::<i32>::empty().is_disjoint_from(&Set::empty()));
}

#[test]
fn with_adds_without_mutating() {
    let a = set(&[1]);
    let b = a.with(2);
    assert_eq!(a.len(), 1);
    assert_eq!(b, set(&[1, 2]));
}

#[test]
fn powerset_has_two_to_the_n_distinct_subsets() {
    for n in 0..=6 {
        let items: Vec<i32> = (0..n).collect();
        let s = set(&items);
        let subsets: Vec<Set<i32>> = s.all_subsets().collect();
        assert_eq!(subsets.len(), 1 << n);
        let distinct: HashSet<Set<i32>> = subsets.iter().cloned().collect();
        assert_eq!(distinct.len(), subsets.len());
        assert_eq!(subsets.iter().filter(|x| x.is_empty()).count(), 1);
        assert_eq!(subsets.iter().filter(|x| **x == s).count(), 1);
        assert!(subsets.iter().all(|x| x.is_subset_of(&s)));
    }
}

#[test]
fn hash_is_order_independent() {
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(s: &Set<i32>) -> u64 {
        let mut h = DefaultHasher::new();
        s.hash(&mut h);
        h.finish()
    }

    let forward: Set<i32> = (0..100).collect();
    let backward: Set<i32> = (0..100).rev().collect();
    assert_eq!(forward, backward);
    assert_eq!(hash_of(&forward), hash_of(&backward));
}

#[test]
fn sets_of_sets() {
    let inner_a = set(&[1]);
    let inner_b = set(&[1]);
    let outer: Set<Set<i32>> = [inner_a, inner_b, set(&[])].into_iter().collect();
    assert_eq!(outer.len(), 2);
}

#[test]
fn renders_with_braces() {
    assert_eq!(set(&[]).to_string(), "{}");
    assert_eq!(set(&[7]).to_string(), "{7}");
    let two = set(&[1, 2]).to_string();
    assert!(two == "{1, 2}" || two == "{2, 1}", "{two}");
}
