//! Immutable sequences.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Index};

use crate::set::Set;

/// An immutable ordered sequence.
///
/// The text tag only selects the rendering: a text sequence displays as its
/// elements written back to back (`abc`), any other sequence as a bracketed
/// list (`[a, b, c]`). Equality and hashing ignore the tag.
///
/// Sequences are ordered by the prefix relation: `a <= b` when `a` is a
/// prefix of `b`, `a < b` when it is a proper prefix. Sequences where
/// neither is a prefix of the other are unordered.
#[derive(Clone, Debug)]
pub struct Seq<T: Clone> {
    items: im::Vector<T>,
    is_text: bool,
}

impl<T: Clone> Seq<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Seq {
            items: items.into_iter().collect(),
            is_text: false,
        }
    }

    /// A text-tagged sequence.
    pub fn text(items: impl IntoIterator<Item = T>) -> Self {
        Seq {
            items: items.into_iter().collect(),
            is_text: true,
        }
    }

    pub fn empty() -> Self {
        Seq {
            items: im::Vector::new(),
            is_text: false,
        }
    }

    /// The same elements with the text tag set to `is_text`.
    #[must_use]
    pub fn with_text(&self, is_text: bool) -> Self {
        Seq {
            items: self.items.clone(),
            is_text,
        }
    }

    pub fn is_text(&self) -> bool {
        self.is_text
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> im::vector::Iter<'_, T> {
        self.items.iter()
    }

    /// Copy with the element at `index` replaced. `index` must be in bounds.
    #[must_use]
    pub fn update(&self, index: usize, value: T) -> Self {
        Seq {
            items: self.items.update(index, value),
            is_text: self.is_text,
        }
    }

    /// `self + other`; the result is text only if both operands are.
    #[must_use]
    pub fn concat(&self, other: &Seq<T>) -> Self {
        let mut items = self.items.clone();
        items.append(other.items.clone());
        Seq {
            items,
            is_text: self.is_text && other.is_text,
        }
    }

    /// Elements `lo..hi`, keeping the text tag. Bounds past the end are
    /// clamped to the length.
    #[must_use]
    pub fn slice(&self, lo: usize, hi: usize) -> Self {
        let hi = hi.min(self.len());
        let lo = lo.min(hi);
        Seq {
            items: self.items.skip(lo).take(hi - lo),
            is_text: self.is_text,
        }
    }

    /// The first `n` elements.
    #[must_use]
    pub fn take(&self, n: usize) -> Self {
        self.slice(0, n)
    }

    /// Everything after the first `n` elements.
    #[must_use]
    pub fn drop(&self, n: usize) -> Self {
        self.slice(n, self.len())
    }
}

impl<T: Clone + PartialEq> Seq<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.items.iter().any(|item| item == value)
    }

    pub fn is_prefix_of(&self, other: &Seq<T>) -> bool {
        self.len() <= other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }

    pub fn is_proper_prefix_of(&self, other: &Seq<T>) -> bool {
        self.len() < other.len() && self.is_prefix_of(other)
    }
}

impl<T: Clone + Hash + Eq> Seq<T> {
    /// The set of distinct elements.
    pub fn unique_elements(&self) -> Set<T> {
        self.iter().cloned().collect()
    }
}

impl From<&str> for Seq<char> {
    fn from(s: &str) -> Self {
        Seq::text(s.chars())
    }
}

impl From<String> for Seq<char> {
    fn from(s: String) -> Self {
        Seq::from(s.as_str())
    }
}

impl<T: Clone> Default for Seq<T> {
    fn default() -> Self {
        Seq::empty()
    }
}

impl<T: Clone> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Seq::new(iter)
    }
}

impl<'a, T: Clone> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Clone> Index<usize> for Seq<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T: Clone> Add for Seq<T> {
    type Output = Seq<T>;

    fn add(self, rhs: Seq<T>) -> Seq<T> {
        self.concat(&rhs)
    }
}

impl<T: Clone> Add for &Seq<T> {
    type Output = Seq<T>;

    fn add(self, rhs: &Seq<T>) -> Seq<T> {
        self.concat(rhs)
    }
}

impl<T: Clone + PartialEq> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Clone + Eq> Eq for Seq<T> {}

impl<T: Clone + Hash> Hash for Seq<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.len().hash(state);
        for item in &self.items {
            item.hash(state);
        }
    }
}

impl<T: Clone + PartialEq> PartialOrd for Seq<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.len().cmp(&other.len()) {
            Ordering::Equal => (self == other).then_some(Ordering::Equal),
            Ordering::Less => self.is_prefix_of(other).then_some(Ordering::Less),
            Ordering::Greater => other.is_prefix_of(self).then_some(Ordering::Greater),
        }
    }
}

impl<T: Clone + fmt::Display> fmt::Display for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_text {
            for item in &self.items {
                write!(f, "{item}")?;
            }
            return Ok(());
        }
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
