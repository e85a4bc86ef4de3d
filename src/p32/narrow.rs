//! Pixel operations on two `u32` halves, for targets without cheap 64-bit
//! multiplies.

use crate::B32x2Pair;

#[inline]
pub fn mul_div_255_u(x: u32, a: u32) -> u32 {
    B32x2Pair::unpack_0213(x).mul_div_255_u_pack_0213(a)
}

/// Color channels scaled by `a / 255`, alpha set to 0.
#[inline]
pub fn mul_div_255_u_clear_alpha(x: u32, a: u32) -> u32 {
    B32x2Pair::unpack_021x(x).mul_div_255_u_pack_0213(a)
}

/// Color channels scaled by `a / 255`, alpha set to 255.
#[inline]
pub fn mul_div_255_u_fill_alpha(x: u32, a: u32) -> u32 {
    B32x2Pair::unpack_021x(x).mul_div_255_u_pack_0213(a) | 0xFF00_0000
}

#[inline]
pub fn add(x: u32, y: u32) -> u32 {
    x.wrapping_add(y)
}

#[inline]
pub fn add_saturating(x: u32, y: u32) -> u32 {
    B32x2Pair::unpack_0213(x)
        .add_saturating(B32x2Pair::unpack_0213(y))
        .pack_0213()
}

#[inline]
pub fn sub_saturating(x: u32, y: u32) -> u32 {
    B32x2Pair::unpack_0213(x)
        .sub_saturating(B32x2Pair::unpack_0213(y))
        .pack_0213()
}

#[inline]
pub fn mul_div_255_u_add_saturating(x: u32, a: u32, y: u32) -> u32 {
    B32x2Pair::unpack_0213(x)
        .mul_div_255_u_add_saturating(a, B32x2Pair::unpack_0213(y))
        .pack_0213()
}

#[inline]
pub fn mul_div_255_u_2x_add(x: u32, a: u32, y: u32, b: u32) -> u32 {
    B32x2Pair::unpack_0213(x).interpolate_255_pack_0213([a, a], B32x2Pair::unpack_0213(y), [b, b])
}

#[inline]
pub fn mul_div_256_u_2x_add(x: u32, a: u32, y: u32, b: u32) -> u32 {
    B32x2Pair::unpack_0213(x).interpolate_256_pack_0213([a, a], B32x2Pair::unpack_0213(y), [b, b])
}

#[inline]
pub fn lerp_255(x: u32, y: u32, a: u32) -> u32 {
    mul_div_255_u_2x_add(x, a, y, a ^ 0xFF)
}

#[inline]
pub fn lerp_256(x: u32, y: u32, a: u32) -> u32 {
    mul_div_256_u_2x_add(x, a, y, 256 - a)
}

#[inline]
pub fn premultiply(p: u32) -> u32 {
    B32x2Pair::unpack_0213(p).premultiply_a().pack_0213()
}
