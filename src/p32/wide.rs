//! Pixel operations on a single `u64` holding four lanes.

use crate::B64x4;

/// `round(x_c * a / 255)` for every channel.
#[inline]
pub fn mul_div_255_u(x: u32, a: u32) -> u32 {
    B64x4::unpack_0213(x).mul_div_255_u(a).pack_0213()
}

/// Color channels scaled by `a / 255`, alpha set to 0.
#[inline]
pub fn mul_div_255_u_clear_alpha(x: u32, a: u32) -> u32 {
    B64x4::unpack_021x(x).mul_div_255_u(a).pack_0213()
}

/// Color channels scaled by `a / 255`, alpha set to 255.
#[inline]
pub fn mul_div_255_u_fill_alpha(x: u32, a: u32) -> u32 {
    B64x4::unpack_021x(x).mul_div_255_u(a).fill_alpha().pack_0213()
}

/// `x + y` on the whole word. No channel may overflow.
#[inline]
pub fn add(x: u32, y: u32) -> u32 {
    x.wrapping_add(y)
}

/// `min(x_c + y_c, 255)`.
#[inline]
pub fn add_saturating(x: u32, y: u32) -> u32 {
    B64x4::unpack_0213(x)
        .add_saturating(B64x4::unpack_0213(y))
        .pack_0213()
}

/// `max(x_c - y_c, 0)`.
#[inline]
pub fn sub_saturating(x: u32, y: u32) -> u32 {
    B64x4::unpack_0213(x)
        .sub_saturating(B64x4::unpack_0213(y))
        .pack_0213()
}

/// `min(x_c * a / 255 + y_c, 255)`.
#[inline]
pub fn mul_div_255_u_add_saturating(x: u32, a: u32, y: u32) -> u32 {
    B64x4::unpack_0213(x)
        .mul_div_255_u(a)
        .add_saturating(B64x4::unpack_0213(y))
        .pack_0213()
}

/// `round((x_c * a + y_c * b) / 255)`.
///
/// Each channel's weighted sum must stay within `255 * 255`, which any
/// `a + b <= 255` guarantees.
#[inline]
pub fn mul_div_255_u_2x_add(x: u32, a: u32, y: u32, b: u32) -> u32 {
    B64x4::unpack_0213(x)
        .mul_div_255_u_2x_add(a, B64x4::unpack_0213(y), b)
        .pack_0213()
}

/// `(x_c * a + y_c * b) >> 8`, `a + b <= 256`.
#[inline]
pub fn mul_div_256_u_2x_add(x: u32, a: u32, y: u32, b: u32) -> u32 {
    B64x4::unpack_0213(x)
        .mul_div_256_u_2x_add(a, B64x4::unpack_0213(y), b)
        .pack_0213()
}

/// Lerp from `y` (at `a = 0`) to `x` (at `a = 255`).
#[inline]
pub fn lerp_255(x: u32, y: u32, a: u32) -> u32 {
    mul_div_255_u_2x_add(x, a, y, a ^ 0xFF)
}

/// Lerp from `y` (at `a = 0`) to `x` (at `a = 256`).
#[inline]
pub fn lerp_256(x: u32, y: u32, a: u32) -> u32 {
    mul_div_256_u_2x_add(x, a, y, 256 - a)
}

/// Scale color by the pixel's own alpha; alpha is kept.
#[inline]
pub fn premultiply(p: u32) -> u32 {
    let v = B64x4::unpack_0213(p);
    let a = v.alpha();
    v.mul_div_255_u(a).with_alpha(a).pack_0213()
}
