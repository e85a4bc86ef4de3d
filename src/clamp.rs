// ---------------------------------------------------------------------------
// Lane clamping.
//
// Two interchangeable forms: `branchless` uses the carry/borrow byte as a
// mask source, `conditional` uses per-lane selects. The `conditional` cargo
// feature picks which one the rest of the crate calls; both are always
// compiled and tested against each other.
// ---------------------------------------------------------------------------

#[cfg(not(feature = "conditional"))]
pub use branchless::*;
#[cfg(feature = "conditional")]
pub use conditional::*;

/// Closed-form clamps. No data-dependent branches.
pub mod branchless {
    /// `min(x, 255)` for `x <= 511`.
    ///
    /// A carry into bit 8 turns `0x100 - carry` into `0xFF`, which the OR
    /// spreads over the whole lane. Without a carry the OR only touches bit
    /// 8, which the final mask drops.
    #[inline(always)]
    pub fn saturate_1x1(x: u32) -> u32 {
        debug_assert!(x <= 0x1FF, "saturate_1x1 input out of range: {x:#x}");
        (x | (0x0100 - ((x >> 8) & 0xFF))) & 0xFF
    }

    /// `min(lane, 255)` for both lanes of `[00.B1.00.B0]`, each lane `<= 511`.
    #[inline(always)]
    pub fn saturate_1x2(x: u32) -> u32 {
        debug_assert!(x & !0x01FF_01FF == 0, "saturate_1x2 input out of range: {x:#010x}");
        (x | (0x0100_0100 - ((x >> 8) & 0x00FF_00FF))) & 0x00FF_00FF
    }

    /// `min(lane, 255)` for the four lanes of a `u64`, each lane `<= 511`.
    #[inline(always)]
    pub fn saturate_1x4(x: u64) -> u64 {
        debug_assert!(
            x & !0x01FF_01FF_01FF_01FF == 0,
            "saturate_1x4 input out of range: {x:#018x}"
        );
        (x | (0x0100_0100_0100_0100 - ((x >> 8) & 0x00FF_00FF_00FF_00FF))) & 0x00FF_00FF_00FF_00FF
    }

    /// `max(d, 0)` where `d` is a wrapped `x - y` of two bytes.
    ///
    /// Underflow leaves `0xFF` in the top byte, so `(d >> 24) ^ 0xFF` is zero
    /// exactly when the subtraction borrowed.
    #[inline(always)]
    pub fn clamp_underflow_1x1(d: u32) -> u32 {
        d & ((d >> 24) ^ 0xFF)
    }

    /// `max(a - b, 0)` per lane of two `[00.B1.00.B0]` words.
    #[inline(always)]
    pub fn sub_saturating_1x2(a: u32, b: u32) -> u32 {
        saturate_1x2((a ^ 0x00FF_00FF) + b) ^ 0x00FF_00FF
    }

    /// Per-lane minimum: `a - max(a - b, 0)`.
    #[inline(always)]
    pub fn min_1x2(a: u32, b: u32) -> u32 {
        a - sub_saturating_1x2(a, b)
    }

    /// Per-lane maximum: `b + max(a - b, 0)`.
    #[inline(always)]
    pub fn max_1x2(a: u32, b: u32) -> u32 {
        b + sub_saturating_1x2(a, b)
    }
}

/// Select-based clamps. Same contracts as [`branchless`].
pub mod conditional {
    #[inline(always)]
    pub fn saturate_1x1(x: u32) -> u32 {
        debug_assert!(x <= 0x1FF, "saturate_1x1 input out of range: {x:#x}");
        x.min(0xFF)
    }

    #[inline(always)]
    pub fn saturate_1x2(x: u32) -> u32 {
        debug_assert!(x & !0x01FF_01FF == 0, "saturate_1x2 input out of range: {x:#010x}");
        let lo = (x & 0x1FF).min(0xFF);
        let hi = ((x >> 16) & 0x1FF).min(0xFF);
        lo | (hi << 16)
    }

    #[inline(always)]
    pub fn saturate_1x4(x: u64) -> u64 {
        debug_assert!(
            x & !0x01FF_01FF_01FF_01FF == 0,
            "saturate_1x4 input out of range: {x:#018x}"
        );
        let mut out = 0;
        for shift in [0, 16, 32, 48] {
            out |= ((x >> shift) & 0x1FF).min(0xFF) << shift;
        }
        out
    }

    #[inline(always)]
    pub fn clamp_underflow_1x1(d: u32) -> u32 {
        if (d as i32) < 0 { 0 } else { d }
    }

    #[inline(always)]
    pub fn sub_saturating_1x2(a: u32, b: u32) -> u32 {
        let lo = (a & 0xFF).saturating_sub(b & 0xFF);
        let hi = ((a >> 16) & 0xFF).saturating_sub((b >> 16) & 0xFF);
        lo | (hi << 16)
    }

    #[inline(always)]
    pub fn min_1x2(a: u32, b: u32) -> u32 {
        (a & 0xFF).min(b & 0xFF) | (a & 0x00FF_0000).min(b & 0x00FF_0000)
    }

    #[inline(always)]
    pub fn max_1x2(a: u32, b: u32) -> u32 {
        (a & 0xFF).max(b & 0xFF) | (a & 0x00FF_0000).max(b & 0x00FF_0000)
    }
}

#[cfg(test)]
mod tests {
    use super::{branchless as bl, conditional as cd};

    #[test]
    fn saturate_1x1_forms_agree() {
        for x in 0..=0x1FFu32 {
            assert_eq!(bl::saturate_1x1(x), cd::saturate_1x1(x), "x={x}");
            assert_eq!(bl::saturate_1x1(x), x.min(255), "x={x}");
        }
    }

    #[test]
    fn saturate_1x2_forms_agree() {
        for lo in 0..=0x1FFu32 {
            for hi in (0..=0x1FFu32).step_by(3) {
                let x = lo | (hi << 16);
                let expected = lo.min(255) | (hi.min(255) << 16);
                assert_eq!(bl::saturate_1x2(x), expected, "lo={lo} hi={hi}");
                assert_eq!(cd::saturate_1x2(x), expected, "lo={lo} hi={hi}");
            }
        }
    }

    #[test]
    fn saturate_1x4_forms_agree() {
        for a in (0..=0x1FFu64).step_by(7) {
            for b in (0..=0x1FFu64).step_by(11) {
                let x = a | (b << 16) | ((0x1FF - a) << 32) | ((0x1FF - b) << 48);
                assert_eq!(bl::saturate_1x4(x), cd::saturate_1x4(x), "x={x:#x}");
            }
        }
    }

    #[test]
    fn underflow_forms_agree() {
        for x in 0..=255u32 {
            for y in 0..=255u32 {
                let d = x.wrapping_sub(y);
                let expected = x.saturating_sub(y);
                assert_eq!(bl::clamp_underflow_1x1(d), expected, "x={x} y={y}");
                assert_eq!(cd::clamp_underflow_1x1(d), expected, "x={x} y={y}");
            }
        }
    }

    #[test]
    fn min_max_sub_forms_agree() {
        for a0 in 0..=255u32 {
            for b0 in 0..=255u32 {
                let a1 = 255 - a0;
                let b1 = (b0 * 7) & 0xFF;
                let a = a0 | (a1 << 16);
                let b = b0 | (b1 << 16);
                let min = a0.min(b0) | (a1.min(b1) << 16);
                let max = a0.max(b0) | (a1.max(b1) << 16);
                let sub = a0.saturating_sub(b0) | (a1.saturating_sub(b1) << 16);
                assert_eq!(bl::min_1x2(a, b), min);
                assert_eq!(cd::min_1x2(a, b), min);
                assert_eq!(bl::max_1x2(a, b), max);
                assert_eq!(cd::max_1x2(a, b), max);
                assert_eq!(bl::sub_saturating_1x2(a, b), sub);
                assert_eq!(cd::sub_saturating_1x2(a, b), sub);
            }
        }
    }
}
