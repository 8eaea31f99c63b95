//! Immutable multisets.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, Sub};

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::hash::{unordered_hash, ImMap};
use crate::set::Set;

/// An immutable bag: each element maps to a non-negative multiplicity.
///
/// Only elements with a positive multiplicity are stored, so an element
/// set to zero is indistinguishable from one never added. Cardinality is
/// the sum of all multiplicities.
#[derive(Clone)]
pub struct MultiSet<T: Clone + Hash + Eq> {
    counts: ImMap<T, BigUint>,
}

impl<T: Clone + Hash + Eq> MultiSet<T> {
    pub fn empty() -> Self {
        MultiSet {
            counts: ImMap::default(),
        }
    }

    /// Count every occurrence in `items`.
    pub fn from_elements(items: impl IntoIterator<Item = T>) -> Self {
        let mut counts = ImMap::default();
        for item in items {
            *counts.entry(item).or_insert_with(BigUint::zero) += 1u32;
        }
        MultiSet { counts }
    }

    /// Each element of `set` with multiplicity one.
    pub fn from_set(set: &Set<T>) -> Self {
        MultiSet {
            counts: set.iter().map(|item| (item.clone(), BigUint::one())).collect(),
        }
    }

    pub fn multiplicity(&self, value: &T) -> BigUint {
        self.counts.get(value).cloned().unwrap_or_default()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.counts.contains_key(value)
    }

    /// Copy with the multiplicity of `value` set to `count`.
    #[must_use]
    pub fn update(&self, value: T, count: BigUint) -> Self {
        let counts = if count.is_zero() {
            self.counts.without(&value)
        } else {
            self.counts.update(value, count)
        };
        MultiSet { counts }
    }

    /// Sum of all multiplicities.
    pub fn cardinality(&self) -> BigUint {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Multiplicities add.
    #[must_use]
    pub fn union(&self, other: &MultiSet<T>) -> Self {
        let mut counts = self.counts.clone();
        for (item, n) in other.counts.iter() {
            *counts.entry(item.clone()).or_insert_with(BigUint::zero) += n;
        }
        MultiSet { counts }
    }

    /// The smaller multiplicity of each element.
    #[must_use]
    pub fn intersection(&self, other: &MultiSet<T>) -> Self {
        let counts = self
            .counts
            .iter()
            .filter_map(|(item, n)| {
                let m = other.counts.get(item)?;
                Some((item.clone(), n.min(m).clone()))
            })
            .collect();
        MultiSet { counts }
    }

    /// Multiplicities subtract, stopping at zero.
    #[must_use]
    pub fn difference(&self, other: &MultiSet<T>) -> Self {
        let counts = self
            .counts
            .iter()
            .filter_map(|(item, n)| match other.counts.get(item) {
                Some(m) if m >= n => None,
                Some(m) => Some((item.clone(), n - m)),
                None => Some((item.clone(), n.clone())),
            })
            .collect();
        MultiSet { counts }
    }

    /// No element has a positive multiplicity in both.
    pub fn is_disjoint_from(&self, other: &MultiSet<T>) -> bool {
        !self.counts.keys().any(|item| other.counts.contains_key(item))
    }

    /// Every multiplicity in `self` is at most the one in `other`.
    pub fn is_subset_of(&self, other: &MultiSet<T>) -> bool {
        self.counts
            .iter()
            .all(|(item, n)| other.counts.get(item).is_some_and(|m| n <= m))
    }

    pub fn is_proper_subset_of(&self, other: &MultiSet<T>) -> bool {
        self.is_subset_of(other) && self.cardinality() < other.cardinality()
    }

    /// Elements with a positive multiplicity.
    pub fn unique_elements(&self) -> Set<T> {
        self.counts.keys().cloned().collect()
    }

    /// Each distinct element with its multiplicity.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &BigUint)> {
        self.counts.iter().map(|(item, n)| (item, n))
    }

    /// Each element repeated as many times as its multiplicity.
    pub fn elements(&self) -> Elements<'_, T> {
        Elements {
            entries: self.counts.iter(),
            current: None,
        }
    }
}

/// Iterator returned by [`MultiSet::elements`].
pub struct Elements<'a, T: Clone + Hash + Eq> {
    entries: im::hashmap::Iter<'a, T, BigUint>,
    current: Option<(&'a T, BigUint)>,
}

impl<'a, T: Clone + Hash + Eq> Iterator for Elements<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some((item, remaining)) = &mut self.current {
                if !remaining.is_zero() {
                    *remaining -= 1u32;
                    return Some(*item);
                }
            }
            let (item, n) = self.entries.next()?;
            self.current = Some((item, n.clone()));
        }
    }
}

impl<T: Clone + Hash + Eq> Default for MultiSet<T> {
    fn default() -> Self {
        MultiSet::empty()
    }
}

impl<T: Clone + Hash + Eq> FromIterator<T> for MultiSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        MultiSet::from_elements(iter)
    }
}

impl<T: Clone + Hash + Eq> PartialEq for MultiSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<T: Clone + Hash + Eq> Eq for MultiSet<T> {}

impl<T: Clone + Hash + Eq> Hash for MultiSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.counts.len().hash(state);
        unordered_hash(self.counts.iter()).hash(state);
    }
}

impl<T: Clone + Hash + Eq> BitOr for &MultiSet<T> {
    type Output = MultiSet<T>;

    fn bitor(self, rhs: &MultiSet<T>) -> MultiSet<T> {
        self.union(rhs)
    }
}

impl<T: Clone + Hash + Eq> BitAnd for &MultiSet<T> {
    type Output = MultiSet<T>;

    fn bitand(self, rhs: &MultiSet<T>) -> MultiSet<T> {
        self.intersection(rhs)
    }
}

impl<T: Clone + Hash + Eq> Sub for &MultiSet<T> {
    type Output = MultiSet<T>;

    fn sub(self, rhs: &MultiSet<T>) -> MultiSet<T> {
        self.difference(rhs)
    }
}

impl<T: Clone + Hash + Eq + fmt::Debug> fmt::Debug for MultiSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.counts.iter().map(|(item, n)| (item, n)))
            .finish()
    }
}

impl<T: Clone + Hash + Eq + fmt::Display> fmt::Display for MultiSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "multiset{{")?;
        for (i, item) in self.elements().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests;
