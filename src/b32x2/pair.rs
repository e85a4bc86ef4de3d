use bytemuck::{Pod, Zeroable};

use super::{B32x2, BYTE_1X2_MASK, debug_assert_2x_sum, div255_1x2, div255_1x2_odd};
use crate::scalar;

/// Two [`B32x2`] values processed together: a whole 4-channel pixel.
///
/// After [`unpack_0213`](Self::unpack_0213), `.0` holds channels 0 and 2
/// and `.1` holds channels 1 and 3 (alpha in `.1`'s B1). Every method
/// applies the matching single-pair operation to both halves; the pair
/// exists so a pixel is one value at the call site, not two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct B32x2Pair(pub B32x2, pub B32x2);

impl B32x2Pair {
    pub const ZERO: Self = Self(B32x2::ZERO, B32x2::ZERO);

    // -- pack / unpack ------------------------------------------------------

    /// Split a pixel into even bytes (`.0`) and odd bytes (`.1`).
    #[inline(always)]
    pub fn unpack_0213(p: u32) -> Self {
        Self(B32x2::unpack_02(p), B32x2::unpack_13(p))
    }

    /// Like [`unpack_0213`](Self::unpack_0213) but drops channel 3, leaving
    /// `.1` as a lone channel 1.
    #[inline(always)]
    pub fn unpack_021x(p: u32) -> Self {
        Self(B32x2(p & BYTE_1X2_MASK), B32x2((p >> 8) & 0xFF))
    }

    /// Interleave back into a pixel. Lanes must be bytes.
    #[inline(always)]
    pub fn pack_0213(self) -> u32 {
        debug_assert!(
            (self.0.0 | self.1.0) & !BYTE_1X2_MASK == 0,
            "pack_0213 with dirty headroom: {:#010x} {:#010x}",
            self.0.0,
            self.1.0
        );
        self.0.0 | (self.1.0 << 8)
    }

    // -- expand -------------------------------------------------------------

    /// `src.B0` in all four lanes.
    #[inline(always)]
    pub fn expand_b0(src: B32x2) -> Self {
        let v = src.expand_b0();
        Self(v, v)
    }

    /// `src.B1` in all four lanes.
    #[inline(always)]
    pub fn expand_b1(src: B32x2) -> Self {
        let v = src.expand_b1();
        Self(v, v)
    }

    // -- saturate / add / sub -----------------------------------------------

    #[inline(always)]
    pub fn saturate(self) -> Self {
        Self(self.0.saturate(), self.1.saturate())
    }

    #[inline(always)]
    pub fn add(self, b: Self) -> Self {
        Self(self.0.add(b.0), self.1.add(b.1))
    }

    #[inline(always)]
    pub fn add_u(self, u: u32) -> Self {
        Self(self.0.add_u(u), self.1.add_u(u))
    }

    #[inline(always)]
    pub fn add_saturating(self, b: Self) -> Self {
        Self(self.0.add_saturating(b.0), self.1.add_saturating(b.1))
    }

    #[inline(always)]
    pub fn add_saturating_u(self, u: u32) -> Self {
        Self(self.0.add_saturating_u(u), self.1.add_saturating_u(u))
    }

    #[inline(always)]
    pub fn sub(self, b: Self) -> Self {
        Self(self.0.sub(b.0), self.1.sub(b.1))
    }

    #[inline(always)]
    pub fn sub_u(self, u: u32) -> Self {
        Self(self.0.sub_u(u), self.1.sub_u(u))
    }

    #[inline(always)]
    pub fn sub_saturating(self, b: Self) -> Self {
        Self(self.0.sub_saturating(b.0), self.1.sub_saturating(b.1))
    }

    #[inline(always)]
    pub fn sub_saturating_u(self, u: u32) -> Self {
        Self(self.0.sub_saturating_u(u), self.1.sub_saturating_u(u))
    }

    /// `a + b - c` for both halves, each written to its own slot.
    #[inline(always)]
    pub fn add_sub(self, b: Self, c: Self) -> Self {
        Self(self.0.add_sub(b.0, c.0), self.1.add_sub(b.1, c.1))
    }

    #[inline(always)]
    pub fn add_sub_saturating(self, b: Self, c: Self) -> Self {
        Self(
            self.0.add_sub_saturating(b.0, c.0),
            self.1.add_sub_saturating(b.1, c.1),
        )
    }

    // -- mul ----------------------------------------------------------------

    #[inline(always)]
    pub fn mul_u(self, u: u32) -> Self {
        Self(self.0.mul_u(u), self.1.mul_u(u))
    }

    #[inline(always)]
    pub fn mul_div_255_u(self, u: u32) -> Self {
        Self(self.0.mul_div_255_u(u), self.1.mul_div_255_u(u))
    }

    /// `.0` scaled by `u[0]`, `.1` scaled by `u[1]`.
    #[inline(always)]
    pub fn mul_div_255_u2(self, u: [u32; 2]) -> Self {
        Self(self.0.mul_div_255_u(u[0]), self.1.mul_div_255_u(u[1]))
    }

    #[inline(always)]
    pub fn mul_div_255(self, b: Self) -> Self {
        Self(self.0.mul_div_255(b.0), self.1.mul_div_255(b.1))
    }

    #[inline(always)]
    pub fn mul_div_256_u(self, u: u32) -> Self {
        Self(self.0.mul_div_256_u(u), self.1.mul_div_256_u(u))
    }

    #[inline(always)]
    pub fn mul_div_256_u2(self, u: [u32; 2]) -> Self {
        Self(self.0.mul_div_256_u(u[0]), self.1.mul_div_256_u(u[1]))
    }

    /// `round(a * u / 255)` for all four channels, packed straight into a
    /// pixel: the odd half is rounded in place instead of shifted down and
    /// back up.
    #[inline(always)]
    pub fn mul_div_255_u_pack_0213(self, u: u32) -> u32 {
        self.mul_div_255_u2_pack_0213([u, u])
    }

    #[inline(always)]
    pub fn mul_div_255_u2_pack_0213(self, u: [u32; 2]) -> u32 {
        debug_assert!(u[0] <= 0xFF && u[1] <= 0xFF, "multiplier out of range: {u:?}");
        div255_1x2(self.0.0 * u[0]) | div255_1x2_odd(self.1.0 * u[1])
    }

    #[inline(always)]
    pub fn mul_div_255_u_add_saturating(self, u: u32, c: Self) -> Self {
        Self(
            self.0.mul_div_255_u_add_saturating(u, c.0),
            self.1.mul_div_255_u_add_saturating(u, c.1),
        )
    }

    #[inline(always)]
    pub fn mul_div_255_u2_add_saturating(self, u: [u32; 2], c: Self) -> Self {
        Self(
            self.0.mul_div_255_u_add_saturating(u[0], c.0),
            self.1.mul_div_255_u_add_saturating(u[1], c.1),
        )
    }

    #[inline(always)]
    pub fn mul_div_255_add(self, b: Self, c: Self) -> Self {
        Self(self.0.mul_div_255_add(b.0, c.0), self.1.mul_div_255_add(b.1, c.1))
    }

    #[inline(always)]
    pub fn mul_div_255_add_saturating(self, b: Self, c: Self) -> Self {
        Self(
            self.0.mul_div_255_add_saturating(b.0, c.0),
            self.1.mul_div_255_add_saturating(b.1, c.1),
        )
    }

    #[inline(always)]
    pub fn mul_div_255_u2_2x_add_saturating(self, b: [u32; 2], c: Self, d: [u32; 2]) -> Self {
        Self(
            self.0.mul_div_255_u_2x_add_saturating(b[0], c.0, d[0]),
            self.1.mul_div_255_u_2x_add_saturating(b[1], c.1, d[1]),
        )
    }

    // -- min / max ----------------------------------------------------------

    #[inline(always)]
    pub fn min_u(self, u: u32) -> Self {
        Self(self.0.min_u(u), self.1.min_u(u))
    }

    #[inline(always)]
    pub fn min(self, b: Self) -> Self {
        Self(self.0.min(b.0), self.1.min(b.1))
    }

    #[inline(always)]
    pub fn max_u(self, u: u32) -> Self {
        Self(self.0.max_u(u), self.1.max_u(u))
    }

    #[inline(always)]
    pub fn max(self, b: Self) -> Self {
        Self(self.0.max(b.0), self.1.max(b.1))
    }

    // -- shift / negate -----------------------------------------------------

    #[inline(always)]
    pub fn shift_left(self, u: u32) -> Self {
        Self(self.0.shift_left(u), self.1.shift_left(u))
    }

    #[inline(always)]
    pub fn shift_right(self, u: u32) -> Self {
        Self(self.0.shift_right(u), self.1.shift_right(u))
    }

    #[inline(always)]
    pub fn shift_left_1(self) -> Self {
        Self(self.0.shift_left_1(), self.1.shift_left_1())
    }

    #[inline(always)]
    pub fn shift_left_1_b0(self) -> Self {
        Self(self.0.shift_left_1_b0(), self.1.shift_left_1_b0())
    }

    #[inline(always)]
    pub fn shift_left_1_b1(self) -> Self {
        Self(self.0.shift_left_1_b1(), self.1.shift_left_1_b1())
    }

    #[inline(always)]
    pub fn negate(self) -> Self {
        Self(self.0.negate(), self.1.negate())
    }

    #[inline(always)]
    pub fn negate_b0(self) -> Self {
        Self(self.0.negate_b0(), self.1.negate_b0())
    }

    #[inline(always)]
    pub fn negate_b1(self) -> Self {
        Self(self.0.negate_b1(), self.1.negate_b1())
    }

    // -- premultiply --------------------------------------------------------

    /// Scale channels 0, 1 and 2 by `u / 255` and store `u` as alpha.
    #[inline(always)]
    pub fn premultiply_u(self, u: u32) -> Self {
        let color = self.0.mul_div_255_u(u);
        let odd = scalar::mul_div_255(self.1.b0(), u) | (u << 16);
        Self(color, B32x2(odd))
    }

    /// Premultiply by the pixel's own alpha (channel 3, `.1`'s B1).
    #[inline(always)]
    pub fn premultiply_a(self) -> Self {
        self.premultiply_u(self.1.b1())
    }

    // -- interpolate --------------------------------------------------------

    /// `round((a * b + c * d) / 255)` per half, one rounding per sum.
    ///
    /// With `d = 255 - b` this is a lerp from `c` to `a`.
    #[inline(always)]
    pub fn interpolate_255(self, b: [u32; 2], c: Self, d: [u32; 2]) -> Self {
        Self(
            self.0.mul_div_255_u_2x_add(b[0], c.0, d[0]),
            self.1.mul_div_255_u_2x_add(b[1], c.1, d[1]),
        )
    }

    /// `(a * b + c * d) >> 8` per half.
    #[inline(always)]
    pub fn interpolate_256(self, b: [u32; 2], c: Self, d: [u32; 2]) -> Self {
        Self(
            self.0.mul_div_256_u_2x_add(b[0], c.0, d[0]),
            self.1.mul_div_256_u_2x_add(b[1], c.1, d[1]),
        )
    }

    /// [`interpolate_255`](Self::interpolate_255) followed by
    /// [`pack_0213`](Self::pack_0213), without the separate repack.
    #[inline(always)]
    pub fn interpolate_255_pack_0213(self, b: [u32; 2], c: Self, d: [u32; 2]) -> u32 {
        debug_assert_2x_sum(self.0, b[0], c.0, d[0], 255 * 255);
        debug_assert_2x_sum(self.1, b[1], c.1, d[1], 255 * 255);
        let t0 = self.0.0 * b[0] + c.0.0 * d[0];
        let t1 = self.1.0 * b[1] + c.1.0 * d[1];
        div255_1x2(t0) | div255_1x2_odd(t1)
    }

    /// [`interpolate_256`](Self::interpolate_256) followed by
    /// [`pack_0213`](Self::pack_0213), without the separate repack.
    #[inline(always)]
    pub fn interpolate_256_pack_0213(self, b: [u32; 2], c: Self, d: [u32; 2]) -> u32 {
        debug_assert_2x_sum(self.0, b[0], c.0, d[0], 0xFFFF);
        debug_assert_2x_sum(self.1, b[1], c.1, d[1], 0xFFFF);
        let t0 = self.0.0 * b[0] + c.0.0 * d[0];
        let t1 = self.1.0 * b[1] + c.1.0 * d[1];
        ((t0 >> 8) & BYTE_1X2_MASK) | (t1 & !BYTE_1X2_MASK)
    }
}

impl From<u32> for B32x2Pair {
    /// Same as [`B32x2Pair::unpack_0213`].
    #[inline(always)]
    fn from(p: u32) -> Self {
        Self::unpack_0213(p)
    }
}

impl From<B32x2Pair> for u32 {
    /// Same as [`B32x2Pair::pack_0213`].
    #[inline(always)]
    fn from(v: B32x2Pair) -> u32 {
        v.pack_0213()
    }
}
