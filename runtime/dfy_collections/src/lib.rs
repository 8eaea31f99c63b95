//! Persistent collection values.
//!
//! Four immutable containers backed by `im`'s structurally shared trees:
//!
//! - [`Seq`]: ordered elements with a text tag selecting how it renders
//! - [`Set`]: unique elements, with powerset enumeration
//! - [`MultiSet`]: element to non-negative multiplicity
//! - [`Map`]: unique keys to values
//!
//! No value is ever changed after construction. Every "update" returns a
//! new value sharing structure with the old one, so values can be aliased
//! freely and sent across threads without locking.
//!
//! Equality and hashing are defined over contents only. Set, multiset and
//! map hashes are independent of iteration order.

mod hash;
mod map;
mod multiset;
mod seq;
mod set;

pub use map::Map;
pub use multiset::{Elements, MultiSet};
pub use seq::Seq;
pub use set::{AllSubsets, Set};
