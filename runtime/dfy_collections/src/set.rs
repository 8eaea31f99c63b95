//! Immutable sets.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, Sub};

use crate::hash::{unordered_hash, ImSet};

/// An immutable set of unique elements.
#[derive(Clone)]
pub struct Set<T: Clone + Hash + Eq> {
    items: ImSet<T>,
}

impl<T: Clone + Hash + Eq> Set<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Set {
            items: items.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Set {
            items: ImSet::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    pub fn iter(&self) -> im::hashset::Iter<'_, T> {
        self.items.iter()
    }

    /// Copy with `value` added.
    #[must_use]
    pub fn with(&self, value: T) -> Self {
        Set {
            items: self.items.update(value),
        }
    }

    #[must_use]
    pub fn union(&self, other: &Set<T>) -> Self {
        let (mut larger, smaller) = if self.len() >= other.len() {
            (self.items.clone(), &other.items)
        } else {
            (other.items.clone(), &self.items)
        };
        for item in smaller {
            larger.insert(item.clone());
        }
        Set { items: larger }
    }

    #[must_use]
    pub fn intersection(&self, other: &Set<T>) -> Self {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        smaller
            .iter()
            .filter(|item| larger.contains(item))
            .cloned()
            .collect()
    }

    /// Elements of `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Set<T>) -> Self {
        self.iter()
            .filter(|item| !other.contains(item))
            .cloned()
            .collect()
    }

    pub fn is_disjoint_from(&self, other: &Set<T>) -> bool {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        !smaller.iter().any(|item| larger.contains(item))
    }

    pub fn is_subset_of(&self, other: &Set<T>) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }

    pub fn is_proper_subset_of(&self, other: &Set<T>) -> bool {
        self.len() < other.len() && self.is_subset_of(other)
    }

    /// Every subset of this set, each exactly once: `2^n` sets for `n`
    /// elements, starting with the empty set and ending with the full set.
    pub fn all_subsets(&self) -> AllSubsets<T> {
        AllSubsets {
            elements: self.iter().cloned().collect(),
            chosen: Some(vec![false; self.len()]),
        }
    }
}

/// Iterator over the powerset of a [`Set`].
///
/// The current subset is a binary counter over the element list; the
/// iterator ends once the counter wraps back to all-unchosen.
pub struct AllSubsets<T: Clone + Hash + Eq> {
    elements: Vec<T>,
    chosen: Option<Vec<bool>>,
}

impl<T: Clone + Hash + Eq> Iterator for AllSubsets<T> {
    type Item = Set<T>;

    fn next(&mut self) -> Option<Set<T>> {
        let chosen = self.chosen.as_mut()?;
        let subset = self
            .elements
            .iter()
            .zip(chosen.iter())
            .filter(|(_, picked)| **picked)
            .map(|(element, _)| element.clone())
            .collect();

        let mut carry = true;
        for bit in chosen.iter_mut() {
            if !carry {
                break;
            }
            carry = *bit;
            *bit = !*bit;
        }
        if carry {
            self.chosen = None;
        }
        Some(subset)
    }
}

impl<T: Clone + Hash + Eq> Default for Set<T> {
    fn default() -> Self {
        Set::empty()
    }
}

impl<T: Clone + Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Set::new(iter)
    }
}

impl<'a, T: Clone + Hash + Eq> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = im::hashset::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Clone + Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset_of(other)
    }
}

impl<T: Clone + Hash + Eq> Eq for Set<T> {}

impl<T: Clone + Hash + Eq> Hash for Set<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        unordered_hash(self.iter()).hash(state);
    }
}

impl<T: Clone + Hash + Eq> BitOr for &Set<T> {
    type Output = Set<T>;

    fn bitor(self, rhs: &Set<T>) -> Set<T> {
        self.union(rhs)
    }
}

impl<T: Clone + Hash + Eq> BitAnd for &Set<T> {
    type Output = Set<T>;

    fn bitand(self, rhs: &Set<T>) -> Set<T> {
        self.intersection(rhs)
    }
}

impl<T: Clone + Hash + Eq> Sub for &Set<T> {
    type Output = Set<T>;

    fn sub(self, rhs: &Set<T>) -> Set<T> {
        self.difference(rhs)
    }
}

impl<T: Clone + Hash + Eq + fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Clone + Hash + Eq + fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.iter().enumerate() {
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
