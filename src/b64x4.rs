// ---------------------------------------------------------------------------
// Four byte lanes in a u64: [00.B3.00.B2.00.B1.00.B0].
//
// A pixel unpacks into lane order ch0, ch2, ch1, ch3 with a single
// `x | x << 24`, so B3 is alpha. On 64-bit targets this is the cheapest way
// to touch every channel of a pixel at once.
// ---------------------------------------------------------------------------

use bytemuck::{Pod, Zeroable};

use crate::clamp;

/// Packed half-bytes for the three color lanes.
pub const BYTE_1X3_HALF: u64 = 0x0000_0080_0080_0080;
/// Packed byte masks for the three color lanes.
pub const BYTE_1X3_MASK: u64 = 0x0000_00FF_00FF_00FF;
/// Packed byte masks plus one for the three color lanes.
pub const BYTE_1X3_MASK_PLUS_ONE: u64 = 0x0000_0100_0100_0100;

/// Packed half-bytes for all four lanes.
pub const BYTE_1X4_HALF: u64 = 0x0080_0080_0080_0080;
/// Packed byte masks for all four lanes.
pub const BYTE_1X4_MASK: u64 = 0x00FF_00FF_00FF_00FF;
/// Packed byte masks plus one for all four lanes.
pub const BYTE_1X4_MASK_PLUS_ONE: u64 = 0x0100_0100_0100_0100;

const ALPHA_MASK: u64 = 0x00FF_0000_0000_0000;

#[inline(always)]
fn debug_assert_lanes(v: u64) {
    debug_assert!(v & !BYTE_1X4_MASK == 0, "b64x4 headroom not clear: {v:#018x}");
}

/// Four bytes packed as `[00.B3.00.B2.00.B1.00.B0]` in a `u64`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct B64x4(pub u64);

impl B64x4 {
    pub const ZERO: Self = Self(0);

    /// Spread a pixel over four lanes as ch0, ch2, ch1, ch3.
    #[inline(always)]
    pub fn unpack_0213(p: u32) -> Self {
        let x = u64::from(p);
        Self((x | (x << 24)) & BYTE_1X4_MASK)
    }

    /// Like [`unpack_0213`](Self::unpack_0213) with the alpha lane zeroed.
    #[inline(always)]
    pub fn unpack_021x(p: u32) -> Self {
        let x = u64::from(p);
        Self((x | (x << 24)) & BYTE_1X3_MASK)
    }

    /// Fold the four lanes back into a pixel.
    #[inline(always)]
    pub fn pack_0213(self) -> u32 {
        debug_assert_lanes(self.0);
        (self.0 | (self.0 >> 24)) as u32
    }

    /// Lanes in storage order `[B0, B1, B2, B3]`, i.e. channels 0, 2, 1, 3.
    #[inline(always)]
    pub fn lanes(self) -> [u32; 4] {
        let v = self.0;
        [
            (v & 0xFF) as u32,
            ((v >> 16) & 0xFF) as u32,
            ((v >> 32) & 0xFF) as u32,
            ((v >> 48) & 0xFF) as u32,
        ]
    }

    /// Lane B3, the alpha channel after an unpack.
    #[inline(always)]
    pub fn alpha(self) -> u32 {
        (self.0 >> 48) as u32 & 0xFF
    }

    /// Alpha lane forced to 255.
    #[inline(always)]
    pub fn fill_alpha(self) -> Self {
        Self(self.0 | ALPHA_MASK)
    }

    /// Alpha lane forced to 0.
    #[inline(always)]
    pub fn clear_alpha(self) -> Self {
        Self(self.0 & BYTE_1X3_MASK)
    }

    /// Alpha lane replaced by `u`.
    #[inline(always)]
    pub fn with_alpha(self, u: u32) -> Self {
        debug_assert!(u <= 0xFF, "alpha out of range: {u}");
        Self((self.0 & BYTE_1X3_MASK) | (u64::from(u) << 48))
    }

    /// `min(lane, 255)`; each lane may be up to 511.
    #[inline(always)]
    pub fn saturate(self) -> Self {
        Self(clamp::saturate_1x4(self.0))
    }

    /// `a + b`, not saturated.
    #[inline(always)]
    pub fn add(self, b: Self) -> Self {
        Self(self.0 + b.0)
    }

    /// `min(a + b, 255)`.
    #[inline(always)]
    pub fn add_saturating(self, b: Self) -> Self {
        debug_assert_lanes(self.0);
        debug_assert_lanes(b.0);
        self.add(b).saturate()
    }

    /// `max(a - b, 0)` as `255 - min(255 - a + b, 255)`.
    #[inline(always)]
    pub fn sub_saturating(self, b: Self) -> Self {
        debug_assert_lanes(self.0);
        debug_assert_lanes(b.0);
        Self(clamp::saturate_1x4((self.0 ^ BYTE_1X4_MASK) + b.0) ^ BYTE_1X4_MASK)
    }

    /// `round(a * u / 255)` per lane.
    #[inline(always)]
    pub fn mul_div_255_u(self, u: u32) -> Self {
        debug_assert_lanes(self.0);
        debug_assert!(u <= 0xFF, "multiplier out of range: {u}");
        Self(div255_1x4(self.0 * u64::from(u)))
    }

    /// `(a * u) >> 8` per lane, `u` in `0..=256`.
    #[inline(always)]
    pub fn mul_div_256_u(self, u: u32) -> Self {
        debug_assert_lanes(self.0);
        debug_assert!(u <= 256, "multiplier out of range: {u}");
        Self(((self.0 * u64::from(u)) >> 8) & BYTE_1X4_MASK)
    }

    /// `round((a * b + c * d) / 255)` per lane, `b + d <= 255`.
    #[inline(always)]
    pub fn mul_div_255_u_2x_add(self, b: u32, c: Self, d: u32) -> Self {
        debug_assert_lanes(self.0);
        debug_assert_lanes(c.0);
        debug_assert!(b <= 0xFF && d <= 0xFF, "multiplier out of range: {b}, {d}");
        debug_assert!(
            self.lanes()
                .into_iter()
                .zip(c.lanes())
                .all(|(x, y)| x * b + y * d <= 255 * 255),
            "weighted lane sum exceeds 65025: a={:#018x} b={b} c={:#018x} d={d}",
            self.0,
            c.0
        );
        Self(div255_1x4(self.0 * u64::from(b) + c.0 * u64::from(d)))
    }

    /// `(a * b + c * d) >> 8` per lane, `b + d <= 256`.
    #[inline(always)]
    pub fn mul_div_256_u_2x_add(self, b: u32, c: Self, d: u32) -> Self {
        debug_assert_lanes(self.0);
        debug_assert_lanes(c.0);
        debug_assert!(b + d <= 256, "weights out of range: {b}, {d}");
        Self(((self.0 * u64::from(b) + c.0 * u64::from(d)) >> 8) & BYTE_1X4_MASK)
    }
}

/// Rounded division by 255 of four 16-bit lane products.
#[inline(always)]
fn div255_1x4(t: u64) -> u64 {
    let t = t + BYTE_1X4_HALF;
    ((t + ((t >> 8) & BYTE_1X4_MASK)) >> 8) & BYTE_1X4_MASK
}

impl From<B64x4> for u64 {
    #[inline(always)]
    fn from(v: B64x4) -> u64 {
        v.0
    }
}
