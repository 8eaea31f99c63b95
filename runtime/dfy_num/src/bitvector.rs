//! Rotation of fixed-width bitvectors stored in a `u64`.
//!
//! Only the low `width` bits take part; higher bits of the input are
//! ignored and are zero in the output. `width` must be at most 64.

fn low_mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Rotate the low `width` bits of `x` left by `n`.
pub fn lrot(x: u64, n: u32, width: u32) -> u64 {
    debug_assert!(width <= 64, "bitvector width {width} exceeds 64");
    if width == 0 {
        return 0;
    }
    let mask = low_mask(width);
    let x = x & mask;
    let n = n % width;
    if n == 0 {
        return x;
    }
    ((x << n) | (x >> (width - n))) & mask
}

/// Rotate the low `width` bits of `x` right by `n`.
pub fn rrot(x: u64, n: u32, width: u32) -> u64 {
    if width == 0 {
        return 0;
    }
    let n = n % width;
    if n == 0 {
        return x & low_mask(width);
    }
    lrot(x, width - n, width)
}
