//! Stack guard for recursive walks over runtime values.
//!
//! Values produced by generated code can nest arbitrarily deep: a sequence
//! of sequences of tuples, an array whose cells hold arrays, a map whose
//! values are sets. Rendering, deep-copying and hashing such values recurse
//! once per nesting level. Wrapping each level in [`with_stack_headroom`]
//! grows the stack on demand instead of overflowing it.
//!
//! On WASM targets the guard is a passthrough.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn depth(v: &Value) -> usize {
///     with_stack_headroom(|| match v {
///         Value::Seq(s) => 1 + s.iter().map(depth).max().unwrap_or(0),
///         _ => 0,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn with_stack_headroom<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn with_stack_headroom<R>(f: impl FnOnce() -> R) -> R {
    f()
}
