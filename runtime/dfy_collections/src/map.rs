//! Immutable maps.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitOr, Index, Sub};

use crate::hash::{unordered_hash, ImMap};
use crate::set::Set;

/// An immutable map with unique keys.
///
/// There are no mutators: [`update`](Map::update), [`subtract`](Map::subtract)
/// and [`merge`](Map::merge) each return a new map.
#[derive(Clone)]
pub struct Map<K: Clone + Hash + Eq, V: Clone> {
    entries: ImMap<K, V>,
}

impl<K: Clone + Hash + Eq, V: Clone> Map<K, V> {
    pub fn new(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Map {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Map {
            entries: ImMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Copy with `key` bound to `value`.
    #[must_use]
    pub fn update(&self, key: K, value: V) -> Self {
        Map {
            entries: self.entries.update(key, value),
        }
    }

    /// Copy without any of the keys in `keys`.
    #[must_use]
    pub fn subtract(&self, keys: &Set<K>) -> Self {
        let mut entries = self.entries.clone();
        for key in keys {
            entries.remove(key);
        }
        Map { entries }
    }

    /// Every binding of both maps; on a shared key the binding in `other`
    /// wins.
    #[must_use]
    pub fn merge(&self, other: &Map<K, V>) -> Self {
        let mut entries = self.entries.clone();
        for (k, v) in other.iter() {
            entries.insert(k.clone(), v.clone());
        }
        Map { entries }
    }

    pub fn keys(&self) -> Set<K> {
        self.entries.keys().cloned().collect()
    }
}

impl<K: Clone + Hash + Eq, V: Clone + Hash + Eq> Map<K, V> {
    pub fn values(&self) -> Set<V> {
        self.entries.values().cloned().collect()
    }

    pub fn items(&self) -> Set<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<K: Clone + Hash + Eq, V: Clone> Default for Map<K, V> {
    fn default() -> Self {
        Map::empty()
    }
}

impl<K: Clone + Hash + Eq, V: Clone> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Map::new(iter)
    }
}

impl<K: Clone + Hash + Eq, V: Clone> Index<&K> for Map<K, V> {
    type Output = V;

    /// Panics when `key` is absent; generated code only indexes keys it
    /// has proven present.
    fn index(&self, key: &K) -> &V {
        &self.entries[key]
    }
}

impl<K: Clone + Hash + Eq, V: Clone + PartialEq> PartialEq for Map<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Clone + Hash + Eq, V: Clone + Eq> Eq for Map<K, V> {}

impl<K: Clone + Hash + Eq, V: Clone + Hash> Hash for Map<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        unordered_hash(self.iter()).hash(state);
    }
}

impl<K: Clone + Hash + Eq, V: Clone> Sub<&Set<K>> for &Map<K, V> {
    type Output = Map<K, V>;

    fn sub(self, keys: &Set<K>) -> Map<K, V> {
        self.subtract(keys)
    }
}

impl<K: Clone + Hash + Eq, V: Clone> BitOr for &Map<K, V> {
    type Output = Map<K, V>;

    fn bitor(self, rhs: &Map<K, V>) -> Map<K, V> {
        self.merge(rhs)
    }
}

impl<K, V> fmt::Debug for Map<K, V>
where
    K: Clone + Hash + Eq + fmt::Debug,
    V: Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> fmt::Display for Map<K, V>
where
    K: Clone + Hash + Eq + fmt::Display,
    V: Clone + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "map[")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{k} := {v}")?;
        }
        write!(f, "]")
    }
}
