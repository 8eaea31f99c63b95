//! Dynamic values of generated programs.
//!
//! # Sharing
//!
//! Collections, tuples and numbers are immutable, so cloning a `Value` only
//! bumps reference counts. Arrays, functions and objects are references:
//! clones alias the same target, and equality and hashing use that
//! identity. [`Value::deep_copy`] is the one operation that breaks aliasing,
//! used to give every array cell its own copy of the initial value.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use dfy_collections::{Map, MultiSet, Seq, Set};
use dfy_num::{BigInt, Real};
use dfy_stack::with_stack_headroom;

use crate::array::{Array, CopyMemo};

/// An instance of a class declared by the program.
///
/// Objects compare by identity. [`render`](DafnyObject::render) is the
/// custom rendering hook used by [`string_of`](crate::string_of).
pub trait DafnyObject: Send + Sync {
    /// Name of the declaring class.
    fn type_name(&self) -> &str;

    /// Custom textual form, if the class defines one.
    fn render(&self) -> Option<String> {
        None
    }
}

/// Signature of a native function value.
pub type NativeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A first-class function.
///
/// Captures are frozen when the closure is built; calling never mutates
/// the function itself.
#[derive(Clone)]
pub struct FunctionValue {
    arity: usize,
    func: Arc<NativeFn>,
}

impl FunctionValue {
    pub fn new(arity: usize, func: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Self {
        FunctionValue {
            arity,
            func: Arc::new(func),
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }

    /// Whether both handles refer to the same closure.
    pub fn ptr_eq(&self, other: &FunctionValue) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.func), Arc::as_ptr(&other.func))
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionValue(arity={})", self.arity)
    }
}

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    /// The null reference.
    Null,
    Bool(bool),
    Char(char),
    /// Unbounded integer; also carries ordinals and natural numbers.
    Int(BigInt),
    Real(Real),
    Tuple(Arc<[Value]>),
    Seq(Seq<Value>),
    Set(Set<Value>),
    MultiSet(MultiSet<Value>),
    Map(Map<Value, Value>),
    Array(Array),
    Function(FunctionValue),
    Object(Arc<dyn DafnyObject>),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn int(n: impl Into<BigInt>) -> Self {
        Value::Int(n.into())
    }

    #[inline]
    pub fn real(r: Real) -> Self {
        Value::Real(r)
    }

    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(items.into())
    }

    /// The empty tuple.
    pub fn unit() -> Self {
        Value::tuple(Vec::new())
    }

    pub fn seq(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Seq(Seq::new(items))
    }

    /// A text sequence of the characters of `s`.
    pub fn text(s: &str) -> Self {
        Value::Seq(Seq::text(s.chars().map(Value::Char)))
    }

    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Set(Set::new(items))
    }

    pub fn multiset(items: impl IntoIterator<Item = Value>) -> Self {
        Value::MultiSet(MultiSet::from_elements(items))
    }

    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Value::Map(Map::new(entries))
    }

    pub fn function(
        arity: usize,
        func: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        Value::Function(FunctionValue::new(arity, func))
    }

    pub fn object(object: impl DafnyObject + 'static) -> Self {
        Value::Object(Arc::new(object))
    }
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            Value::Int(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&Seq<Value>> {
        match self {
            Value::Seq(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Name of the value's kind, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::Int(_) => "int",
            Value::Real(_) => "real",
            Value::Tuple(_) => "tuple",
            Value::Seq(_) => "seq",
            Value::Set(_) => "set",
            Value::MultiSet(_) => "multiset",
            Value::Map(_) => "map",
            Value::Array(_) => "array",
            Value::Function(_) => "function",
            Value::Object(_) => "object",
        }
    }

    /// Whether an array is reachable from the value.
    ///
    /// Does not look inside arrays, functions or objects.
    pub fn holds_array(&self) -> bool {
        with_stack_headroom(|| match self {
            Value::Array(_) => true,
            Value::Tuple(items) => items.iter().any(Value::holds_array),
            Value::Seq(s) => s.iter().any(Value::holds_array),
            Value::Set(s) => s.iter().any(Value::holds_array),
            Value::MultiSet(m) => m.iter().any(|(item, _)| item.holds_array()),
            Value::Map(m) => m.iter().any(|(k, v)| k.holds_array() || v.holds_array()),
            _ => false,
        })
    }

    /// A copy sharing no mutable state with `self`.
    ///
    /// Arrays reachable from the value are duplicated, cell by cell;
    /// functions and objects are kept as the same references. An array
    /// reached twice is copied once, so aliasing and cycles among arrays
    /// carry over to the copy. Values holding no array are just cloned.
    #[must_use]
    pub fn deep_copy(&self) -> Value {
        if self.holds_array() {
            self.deep_copy_in(&mut CopyMemo::default())
        } else {
            self.clone()
        }
    }

    pub(crate) fn deep_copy_in(&self, memo: &mut CopyMemo) -> Value {
        with_stack_headroom(|| match self {
            Value::Array(a) => Value::Array(a.deep_copy_in(memo)),
            _ if !self.holds_array() => self.clone(),
            Value::Tuple(items) => {
                Value::Tuple(items.iter().map(|v| v.deep_copy_in(memo)).collect())
            }
            Value::Seq(s) => Value::Seq(
                Seq::new(s.iter().map(|v| v.deep_copy_in(memo))).with_text(s.is_text()),
            ),
            Value::Set(s) => Value::Set(s.iter().map(|v| v.deep_copy_in(memo)).collect()),
            // Copies of distinct keys stay distinct, so counts carry over as is
            Value::MultiSet(m) => Value::MultiSet(m.iter().fold(
                MultiSet::empty(),
                |copy, (item, n)| copy.update(item.deep_copy_in(memo), n.clone()),
            )),
            Value::Map(m) => Value::Map(
                m.iter()
                    .map(|(k, v)| (k.deep_copy_in(memo), v.deep_copy_in(memo)))
                    .collect(),
            ),
            other => other.clone(),
        })
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Int(n)
    }
}

impl From<Real> for Value {
    fn from(r: Real) -> Self {
        Value::Real(r)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

// Trait Implementations

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Real(a), Value::Real(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            (Value::MultiSet(a), Value::MultiSet(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            // References compare by identity
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Char(c) => c.hash(state),
            Value::Int(n) => n.hash(state),
            Value::Real(r) => r.hash(state),
            Value::Tuple(items) => items.hash(state),
            Value::Seq(s) => s.hash(state),
            Value::Set(s) => s.hash(state),
            Value::MultiSet(m) => m.hash(state),
            Value::Map(m) => m.hash(state),
            Value::Array(a) => std::ptr::hash(a.as_ptr(), state),
            Value::Function(func) => std::ptr::hash(Arc::as_ptr(&func.func).cast::<()>(), state),
            Value::Object(obj) => std::ptr::hash(Arc::as_ptr(obj).cast::<()>(), state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Char(c) => write!(f, "Char({c:?})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Real(r) => write!(f, "Real({r})"),
            Value::Tuple(items) => write!(f, "Tuple({:?})", &**items),
            Value::Seq(s) => write!(f, "Seq({s:?})"),
            Value::Set(s) => write!(f, "Set({s:?})"),
            Value::MultiSet(m) => write!(f, "MultiSet({m:?})"),
            Value::Map(m) => write!(f, "Map({m:?})"),
            Value::Array(a) => write!(f, "Array({a:?})"),
            Value::Function(func) => write!(f, "Function({func:?})"),
            Value::Object(obj) => write!(f, "Object({})", obj.type_name()),
        }
    }
}
