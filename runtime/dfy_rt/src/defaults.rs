//! Default values for declarations without an initializer.
//!
//! The free functions give the default of each primitive type; compound
//! types compose them, either by hand with [`tuple`] or through a
//! [`TypeDescriptor`].

use dfy_collections::{Map, MultiSet, Seq, Set};
use dfy_num::{BigInt, Real};

use crate::options::RuntimeOptions;
use crate::value::Value;

pub fn bool() -> Value {
    Value::Bool(false)
}

/// The configured default character (`'D'` unless overridden).
pub fn char(options: &RuntimeOptions) -> Value {
    Value::Char(options.default_char)
}

pub fn int() -> Value {
    Value::Int(BigInt::default())
}

pub fn real() -> Value {
    Value::Real(Real::zero())
}

/// Default of every reference type.
pub fn pointer() -> Value {
    Value::Null
}

/// A tuple of the given component defaults.
pub fn tuple(fields: impl IntoIterator<Item = Value>) -> Value {
    Value::Tuple(fields.into_iter().collect())
}

/// The shape of a type, as far as its default value is concerned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeDescriptor {
    Bool,
    Char,
    /// Integers, naturals and ordinals.
    Int,
    Real,
    /// Classes, arrays and other reference types.
    Reference,
    Tuple(Vec<TypeDescriptor>),
    Seq,
    /// Strings: sequences of characters, rendered as text.
    String,
    Set,
    MultiSet,
    Map,
}

impl TypeDescriptor {
    /// The default value of this type, built recursively for tuples.
    pub fn default_value(&self, options: &RuntimeOptions) -> Value {
        match self {
            TypeDescriptor::Bool => bool(),
            TypeDescriptor::Char => char(options),
            TypeDescriptor::Int => int(),
            TypeDescriptor::Real => real(),
            TypeDescriptor::Reference => pointer(),
            TypeDescriptor::Tuple(fields) => {
                tuple(fields.iter().map(|field| field.default_value(options)))
            }
            TypeDescriptor::Seq => Value::Seq(Seq::empty()),
            TypeDescriptor::String => Value::Seq(Seq::text([])),
            TypeDescriptor::Set => Value::Set(Set::empty()),
            TypeDescriptor::MultiSet => Value::MultiSet(MultiSet::empty()),
            TypeDescriptor::Map => Value::Map(Map::empty()),
        }
    }
}
