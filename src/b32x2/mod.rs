// ---------------------------------------------------------------------------
// Two byte lanes in a u32: [00.B1.00.B0].
//
// B0 lives in bits 0..8, B1 in bits 16..24. The zero byte above each lane is
// headroom: a sum of two bytes carries into it, a product of two bytes fills
// it, and neither reaches the other lane.
// ---------------------------------------------------------------------------

use bytemuck::{Pod, Zeroable};

use crate::clamp;

mod pair;
pub use pair::B32x2Pair;


/// Packed two half-byte values, the rounding bias per lane.
pub const BYTE_1X2_HALF: u32 = 0x0080_0080;
/// Packed two full-byte masks.
pub const BYTE_1X2_MASK: u32 = 0x00FF_00FF;
/// Packed two full-byte masks plus one.
pub const BYTE_1X2_MASK_PLUS_ONE: u32 = 0x0100_0100;

const B0_MASK: u32 = 0x0000_00FF;
const B1_MASK: u32 = 0x00FF_0000;

#[inline(always)]
fn debug_assert_lanes(v: u32) {
    debug_assert!(
        v & !BYTE_1X2_MASK == 0,
        "b32x2 headroom not clear: {v:#010x}"
    );
}

/// Checks `a * b + c * d <= max` on both lanes of two byte-lane words.
#[inline(always)]
pub(crate) fn debug_assert_2x_sum(a: B32x2, b: u32, c: B32x2, d: u32, max: u32) {
    debug_assert!(b <= 256 && d <= 256, "weight out of range: {b}, {d}");
    debug_assert!(
        a.b0() * b + c.b0() * d <= max && a.b1() * b + c.b1() * d <= max,
        "weighted lane sum exceeds {max}: a={:#010x} b={b} c={:#010x} d={d}",
        a.0,
        c.0
    );
}

/// Rounded division by 255 of two 16-bit lane products (each `<= 65025`),
/// result in the even byte positions.
#[inline(always)]
pub(crate) fn div255_1x2(t: u32) -> u32 {
    let t = t + BYTE_1X2_HALF;
    ((t + ((t >> 8) & BYTE_1X2_MASK)) >> 8) & BYTE_1X2_MASK
}

/// Same as [`div255_1x2`] but leaves the result in the odd byte positions,
/// ready to be OR-ed into a packed pixel.
#[inline(always)]
pub(crate) fn div255_1x2_odd(t: u32) -> u32 {
    let t = t + BYTE_1X2_HALF;
    (t + ((t >> 8) & BYTE_1X2_MASK)) & !BYTE_1X2_MASK
}

/// Two bytes packed as `[00.B1.00.B0]` in a `u32`.
///
/// Methods are lane-parallel versions of the [`scalar`](crate::scalar)
/// operations. Unless stated otherwise every lane must be a byte on entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct B32x2(pub u32);

impl B32x2 {
    /// Both lanes zero.
    pub const ZERO: Self = Self(0);

    /// Build from two lane values (`0..=255`).
    #[inline(always)]
    pub fn from_lanes(b0: u32, b1: u32) -> Self {
        debug_assert!(b0 <= 0xFF && b1 <= 0xFF, "lane out of range: {b0}, {b1}");
        Self(b0 | (b1 << 16))
    }

    /// Build from two bytes.
    #[inline(always)]
    pub fn new(b0: u8, b1: u8) -> Self {
        Self(u32::from(b0) | (u32::from(b1) << 16))
    }

    /// Bytes 0 and 2 of a packed pixel.
    #[inline(always)]
    pub fn unpack_02(p: u32) -> Self {
        Self(p & BYTE_1X2_MASK)
    }

    /// Bytes 1 and 3 of a packed pixel.
    #[inline(always)]
    pub fn unpack_13(p: u32) -> Self {
        Self((p >> 8) & BYTE_1X2_MASK)
    }

    // -- get / set / zero / fill ------------------------------------------

    #[inline(always)]
    pub fn b0(self) -> u32 {
        self.0 & B0_MASK
    }

    #[inline(always)]
    pub fn b1(self) -> u32 {
        (self.0 >> 16) & B0_MASK
    }

    #[inline(always)]
    pub fn set_b0(self, u: u32) -> Self {
        debug_assert!(u <= 0xFF, "lane out of range: {u}");
        Self((self.0 & B1_MASK) | u)
    }

    #[inline(always)]
    pub fn set_b1(self, u: u32) -> Self {
        debug_assert!(u <= 0xFF, "lane out of range: {u}");
        Self((self.0 & B0_MASK) | (u << 16))
    }

    #[inline(always)]
    pub fn zero_b0(self) -> Self {
        Self(self.0 & B1_MASK)
    }

    #[inline(always)]
    pub fn zero_b1(self) -> Self {
        Self(self.0 & B0_MASK)
    }

    #[inline(always)]
    pub fn fill_b0(self) -> Self {
        Self(self.0 | B0_MASK)
    }

    #[inline(always)]
    pub fn fill_b1(self) -> Self {
        Self(self.0 | B1_MASK)
    }

    // -- extend / expand ----------------------------------------------------

    /// `[B0, B0]`. B1 must already be zero.
    #[inline(always)]
    pub fn extend_b0(self) -> Self {
        debug_assert!(self.0 & !B0_MASK == 0, "extend_b0 needs B1 == 0: {:#010x}", self.0);
        Self(self.0 * 0x0001_0001)
    }

    /// `[B0, B0]`, whatever B1 holds.
    #[inline(always)]
    pub fn expand_b0(self) -> Self {
        Self((self.0 << 16) | (self.0 & B0_MASK))
    }

    /// `[B1, B1]`, whatever B0 holds.
    #[inline(always)]
    pub fn expand_b1(self) -> Self {
        Self((self.0 >> 16) | (self.0 & B1_MASK))
    }

    // -- saturate -----------------------------------------------------------

    /// `min(lane, 255)` per lane; each lane may be up to 511.
    #[inline(always)]
    pub fn saturate(self) -> Self {
        Self(clamp::saturate_1x2(self.0))
    }

    // -- add / sub ----------------------------------------------------------

    /// `a + b`, not saturated. Lanes may carry into their headroom byte.
    #[inline(always)]
    pub fn add(self, b: Self) -> Self {
        Self(self.0 + b.0)
    }

    /// `a + u` on both lanes, not saturated.
    #[inline(always)]
    pub fn add_u(self, u: u32) -> Self {
        self.add(Self(u).extend_b0())
    }

    /// `min(a + b, 255)`.
    #[inline(always)]
    pub fn add_saturating(self, b: Self) -> Self {
        debug_assert_lanes(self.0);
        debug_assert_lanes(b.0);
        self.add(b).saturate()
    }

    /// `min(a + u, 255)` on both lanes.
    #[inline(always)]
    pub fn add_saturating_u(self, u: u32) -> Self {
        self.add_saturating(Self(u).extend_b0())
    }

    /// `a - b`, not saturated. A lane that underflows borrows from its
    /// neighbour; the caller must not let that happen.
    #[inline(always)]
    pub fn sub(self, b: Self) -> Self {
        Self(self.0.wrapping_sub(b.0))
    }

    /// `a - u` on both lanes, not saturated.
    #[inline(always)]
    pub fn sub_u(self, u: u32) -> Self {
        self.sub(Self(u).extend_b0())
    }

    /// `max(a - b, 0)`, computed as `255 - min(255 - a + b, 255)`.
    #[inline(always)]
    pub fn sub_saturating(self, b: Self) -> Self {
        debug_assert_lanes(self.0);
        debug_assert_lanes(b.0);
        Self(clamp::sub_saturating_1x2(self.0, b.0))
    }

    /// `max(a - u, 0)` on both lanes.
    #[inline(always)]
    pub fn sub_saturating_u(self, u: u32) -> Self {
        self.sub_saturating(Self(u).extend_b0())
    }

    /// `a + b - c`, nothing saturated.
    #[inline(always)]
    pub fn add_sub(self, b: Self, c: Self) -> Self {
        Self((self.0 + b.0).wrapping_sub(c.0))
    }

    /// `clamp(a + b - c, 0, 255)` per lane.
    ///
    /// Each 9-bit half of `a + b` is widened into its own word before `c` is
    /// taken off, so a borrow fills that word's top half instead of eating
    /// the other lane. The top half then masks its own lane to zero.
    #[inline(always)]
    pub fn add_sub_saturating(self, b: Self, c: Self) -> Self {
        debug_assert_lanes(self.0);
        debug_assert_lanes(b.0);
        debug_assert_lanes(c.0);
        let sum = self.0 + b.0;
        let mut lo = sum & 0x0000_01FF;
        let mut hi = (sum & 0x01FF_0000) >> 16;
        lo = lo.wrapping_sub(c.0 & 0x0000_FFFF);
        hi = hi.wrapping_sub(c.0 >> 16);
        lo &= (!lo & 0xFFFF_0000) >> 16;
        hi &= (!hi & 0xFFFF_0000) >> 16;
        Self(lo | (hi << 16)).saturate()
    }

    // -- mul ----------------------------------------------------------------

    /// `a * u` per lane; each product fills its 16-bit slot.
    #[inline(always)]
    pub fn mul_u(self, u: u32) -> Self {
        debug_assert_lanes(self.0);
        debug_assert!(u <= 256, "multiplier out of range: {u}");
        Self(self.0 * u)
    }

    /// `round(a * u / 255)` per lane.
    #[inline(always)]
    pub fn mul_div_255_u(self, u: u32) -> Self {
        debug_assert_lanes(self.0);
        debug_assert!(u <= 0xFF, "multiplier out of range: {u}");
        Self(div255_1x2(self.0 * u))
    }

    /// `round(a * b / 255)` with a separate multiplier per lane.
    #[inline(always)]
    pub fn mul_div_255(self, b: Self) -> Self {
        debug_assert_lanes(self.0);
        debug_assert_lanes(b.0);
        let t = ((self.0 & B0_MASK) * (b.0 & B0_MASK)) | ((self.0 & B1_MASK) * (b.0 >> 16));
        Self(div255_1x2(t))
    }

    /// `(a * u) >> 8` per lane, `u` in `0..=256`.
    #[inline(always)]
    pub fn mul_div_256_u(self, u: u32) -> Self {
        debug_assert_lanes(self.0);
        debug_assert!(u <= 256, "multiplier out of range: {u}");
        Self(((self.0 * u) >> 8) & BYTE_1X2_MASK)
    }

    /// `min(a * u / 255 + c, 255)`; `src * alpha + dst` in one call.
    #[inline(always)]
    pub fn mul_div_255_u_add_saturating(self, u: u32, c: Self) -> Self {
        self.mul_div_255_u(u).add_saturating(c)
    }

    /// `a * b / 255 + c`, not saturated.
    #[inline(always)]
    pub fn mul_div_255_add(self, b: Self, c: Self) -> Self {
        self.mul_div_255(b).add(c)
    }

    /// `min(a * b / 255 + c, 255)`.
    #[inline(always)]
    pub fn mul_div_255_add_saturating(self, b: Self, c: Self) -> Self {
        self.mul_div_255(b).add_saturating(c)
    }

    /// `round((a * b + c * d) / 255)`, one rounding for the whole sum.
    ///
    /// Both weighted products must sum to at most 65025 per lane, which holds
    /// whenever `b + d <= 255`.
    #[inline(always)]
    pub fn mul_div_255_u_2x_add(self, b: u32, c: Self, d: u32) -> Self {
        debug_assert_lanes(self.0);
        debug_assert_lanes(c.0);
        debug_assert!(b <= 0xFF && d <= 0xFF, "multiplier out of range: {b}, {d}");
        debug_assert_2x_sum(self, b, c, d, 255 * 255);
        Self(div255_1x2(self.0 * b + c.0 * d))
    }

    /// `min(a * b / 255 + c * d / 255, 255)`, each product rounded on its own.
    #[inline(always)]
    pub fn mul_div_255_u_2x_add_saturating(self, b: u32, c: Self, d: u32) -> Self {
        self.mul_div_255_u(b).add_saturating(c.mul_div_255_u(d))
    }

    /// `(a * b + c * d) >> 8`, `b + d <= 256`.
    #[inline(always)]
    pub fn mul_div_256_u_2x_add(self, b: u32, c: Self, d: u32) -> Self {
        debug_assert_lanes(self.0);
        debug_assert_lanes(c.0);
        debug_assert!(b + d <= 256, "weights out of range: {b}, {d}");
        Self(((self.0 * b + c.0 * d) >> 8) & BYTE_1X2_MASK)
    }

    // -- min / max ----------------------------------------------------------

    #[inline(always)]
    pub fn min_u(self, u: u32) -> Self {
        self.min(Self(u).extend_b0())
    }

    #[inline(always)]
    pub fn min(self, b: Self) -> Self {
        debug_assert_lanes(self.0);
        debug_assert_lanes(b.0);
        Self(clamp::min_1x2(self.0, b.0))
    }

    #[inline(always)]
    pub fn max_u(self, u: u32) -> Self {
        self.max(Self(u).extend_b0())
    }

    #[inline(always)]
    pub fn max(self, b: Self) -> Self {
        debug_assert_lanes(self.0);
        debug_assert_lanes(b.0);
        Self(clamp::max_1x2(self.0, b.0))
    }

    // -- shift --------------------------------------------------------------

    /// Whole-word left shift; the caller keeps lanes inside their slots.
    #[inline(always)]
    pub fn shift_left(self, u: u32) -> Self {
        Self(self.0 << u)
    }

    /// Whole-word right shift. Bits of B1 shifted below bit 16 land in
    /// B0's headroom.
    #[inline(always)]
    pub fn shift_right(self, u: u32) -> Self {
        Self(self.0 >> u)
    }

    /// Both lanes doubled.
    #[inline(always)]
    pub fn shift_left_1(self) -> Self {
        Self(self.0 + self.0)
    }

    /// B0 doubled, B1 untouched.
    #[inline(always)]
    pub fn shift_left_1_b0(self) -> Self {
        Self(self.0 + (self.0 & B0_MASK))
    }

    /// B1 doubled, B0 untouched.
    #[inline(always)]
    pub fn shift_left_1_b1(self) -> Self {
        Self(self.0 + (self.0 & B1_MASK))
    }

    // -- negate -------------------------------------------------------------

    /// `255 - lane` for both lanes.
    #[inline(always)]
    pub fn negate(self) -> Self {
        Self(self.0 ^ BYTE_1X2_MASK)
    }

    #[inline(always)]
    pub fn negate_b0(self) -> Self {
        Self(self.0 ^ B0_MASK)
    }

    #[inline(always)]
    pub fn negate_b1(self) -> Self {
        Self(self.0 ^ B1_MASK)
    }

    /// Both lanes as scalars, `[B0, B1]`.
    #[inline(always)]
    pub fn lanes(self) -> [u32; 2] {
        [self.b0(), self.b1()]
    }
}

impl From<B32x2> for u32 {
    #[inline(always)]
    fn from(v: B32x2) -> u32 {
        v.0
    }
}
