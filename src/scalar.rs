//! Single byte stored in the low 8 bits of a `u32` (`[00.00.00.B0]`).
//!
//! Operands named `x`/`y` are bytes (`0..=255`). Multipliers named `a` are
//! `0..=255` for the `_255` family and `0..=256` for the `_256` family.

use crate::clamp;

/// Half of a byte, the rounding bias for division by 255/256.
pub const BYTE_1X1_HALF: u32 = 0x0000_0080;
/// Full byte mask.
pub const BYTE_1X1_MASK: u32 = 0x0000_00FF;
/// Full byte mask plus one.
pub const BYTE_1X1_MASK_PLUS_ONE: u32 = 0x0000_0100;

#[inline(always)]
fn debug_assert_byte(x: u32) {
    debug_assert!(x <= BYTE_1X1_MASK, "scalar lane out of range: {x:#x}");
}

/// `x + y`, not saturated.
#[inline(always)]
pub fn add(x: u32, y: u32) -> u32 {
    x + y
}

/// `min(x + y, 255)`.
#[inline(always)]
pub fn add_saturating(x: u32, y: u32) -> u32 {
    debug_assert_byte(x);
    debug_assert_byte(y);
    clamp::saturate_1x1(x + y)
}

/// `x - y`, not saturated. Wraps on underflow.
#[inline(always)]
pub fn sub(x: u32, y: u32) -> u32 {
    x.wrapping_sub(y)
}

/// `max(x - y, 0)`.
#[inline(always)]
pub fn sub_saturating(x: u32, y: u32) -> u32 {
    debug_assert_byte(x);
    debug_assert_byte(y);
    clamp::clamp_underflow_1x1(x.wrapping_sub(y))
}

/// `round(i / 255)` for `i` in `0..=65025`.
#[inline(always)]
pub fn div255(i: u32) -> u32 {
    debug_assert!(i <= 255 * 255, "div255 input out of range: {i}");
    let t = i + BYTE_1X1_HALF;
    (t + (t >> 8)) >> 8
}

/// `floor(i / 255)` for `i` in `0..=65534`, as `((i << 8) + (i + 256)) >> 16`.
#[inline(always)]
pub fn div255_trunc(i: u32) -> u32 {
    debug_assert!(i < 0xFFFF, "div255_trunc input out of range: {i}");
    ((i << 8) + (i + 256)) >> 16
}

/// `i / 256`, truncating.
#[inline(always)]
pub fn div256(i: u32) -> u32 {
    i >> 8
}

/// `round(x * a / 255)`.
///
/// Multiply, add a half, add the biased product shifted down by a byte,
/// shift. Exact for every pair of bytes; the half has to go in before the
/// self-shift or a handful of products (152 * 229, ...) round down.
#[inline(always)]
pub fn mul_div_255(x: u32, a: u32) -> u32 {
    debug_assert_byte(x);
    debug_assert_byte(a);
    div255(x * a)
}

/// `(x * a) >> 8`, `a` in `0..=256`.
#[inline(always)]
pub fn mul_div_256(x: u32, a: u32) -> u32 {
    debug_assert_byte(x);
    debug_assert!(a <= 256, "mul_div_256 multiplier out of range: {a}");
    (x * a) >> 8
}

/// `round((x * a + y * (255 - a)) / 255)`.
#[inline(always)]
pub fn lerp_255(x: u32, y: u32, a: u32) -> u32 {
    debug_assert_byte(x);
    debug_assert_byte(y);
    debug_assert_byte(a);
    div255(x * a + y * (a ^ BYTE_1X1_MASK))
}

/// `(x * a + y * (256 - a)) >> 8`, `a` in `0..=256`.
#[inline(always)]
pub fn lerp_256(x: u32, y: u32, a: u32) -> u32 {
    debug_assert_byte(x);
    debug_assert_byte(y);
    debug_assert!(a <= 256, "lerp_256 weight out of range: {a}");
    (x * a + y * (256 - a)) >> 8
}

/// `255 - x`.
#[inline(always)]
pub fn negate_255(x: u32) -> u32 {
    debug_assert_byte(x);
    x ^ BYTE_1X1_MASK
}

/// `256 - x`, `x` in `0..=256`.
#[inline(always)]
pub fn negate_256(x: u32) -> u32 {
    debug_assert!(x <= 256, "negate_256 input out of range: {x}");
    256 - x
}

/// Broadcast the byte into all four bytes of the word.
#[inline(always)]
pub fn extend(x: u32) -> u32 {
    debug_assert_byte(x);
    x * 0x0101_0101
}
