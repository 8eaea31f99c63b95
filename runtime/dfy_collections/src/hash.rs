//! Hashing helpers shared by the unordered collections.

use std::hash::{Hash, Hasher};

use rustc_hash::{FxBuildHasher, FxHasher};

/// Persistent hash set with a deterministic hasher.
pub(crate) type ImSet<T> = im::HashSet<T, FxBuildHasher>;

/// Persistent hash map with a deterministic hasher.
pub(crate) type ImMap<K, V> = im::HashMap<K, V, FxBuildHasher>;

/// Combine per-item hashes with a commutative operation so the result does
/// not depend on iteration order.
pub(crate) fn unordered_hash<T: Hash>(items: impl Iterator<Item = T>) -> u64 {
    items
        .map(|item| {
            let mut hasher = FxHasher::default();
            item.hash(&mut hasher);
            hasher.finish()
        })
        .fold(0u64, u64::wrapping_add)
}
