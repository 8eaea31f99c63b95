//! Code-point arithmetic on characters.
//!
//! Both operations return `None` when the result is not a Unicode scalar
//! value (out of range or inside the surrogate block).

/// `a + b` on code points.
pub fn plus_char(a: char, b: char) -> Option<char> {
    u32::from(a)
        .checked_add(u32::from(b))
        .and_then(char::from_u32)
}

/// `a - b` on code points.
pub fn minus_char(a: char, b: char) -> Option<char> {
    u32::from(a)
        .checked_sub(u32::from(b))
        .and_then(char::from_u32)
}
