use super::{narrow, wide};
use crate::scalar;

fn pixels() -> impl Iterator<Item = u32> {
    [0, 0xFFFF_FFFF, 0x80FF_0000, 0xFF00_FF00, 0x00FF_00FF, 0x0102_0304]
        .into_iter()
        .chain((0..1024u32).map(|i| i.wrapping_mul(0x9E37_79B9) ^ (i << 3)))
}

/// Apply `f` to each channel pair and repack.
fn per_channel(x: u32, y: u32, f: impl Fn(u32, u32) -> u32) -> u32 {
    let xs = x.to_le_bytes();
    let ys = y.to_le_bytes();
    u32::from_le_bytes(core::array::from_fn(|i| f(u32::from(xs[i]), u32::from(ys[i])) as u8))
}

const WEIGHTS: &[u32] = &[0, 1, 2, 64, 100, 127, 128, 200, 254, 255];

#[test]
fn wide_and_narrow_agree() {
    for x in pixels().step_by(3) {
        for y in pixels().step_by(41) {
            assert_eq!(wide::add_saturating(x, y), narrow::add_saturating(x, y));
            assert_eq!(wide::sub_saturating(x, y), narrow::sub_saturating(x, y));
            assert_eq!(wide::add(x & 0x7F7F_7F7F, y & 0x7F7F_7F7F), narrow::add(x & 0x7F7F_7F7F, y & 0x7F7F_7F7F));
            for &a in WEIGHTS {
                assert_eq!(wide::mul_div_255_u(x, a), narrow::mul_div_255_u(x, a));
                assert_eq!(wide::mul_div_255_u_clear_alpha(x, a), narrow::mul_div_255_u_clear_alpha(x, a));
                assert_eq!(wide::mul_div_255_u_fill_alpha(x, a), narrow::mul_div_255_u_fill_alpha(x, a));
                assert_eq!(
                    wide::mul_div_255_u_add_saturating(x, a, y),
                    narrow::mul_div_255_u_add_saturating(x, a, y)
                );
                assert_eq!(
                    wide::mul_div_255_u_2x_add(x, a, y, 255 - a),
                    narrow::mul_div_255_u_2x_add(x, a, y, 255 - a)
                );
                assert_eq!(
                    wide::mul_div_256_u_2x_add(x, a + 1, y, 255 - a),
                    narrow::mul_div_256_u_2x_add(x, a + 1, y, 255 - a)
                );
                assert_eq!(wide::lerp_255(x, y, a), narrow::lerp_255(x, y, a));
                assert_eq!(wide::lerp_256(x, y, a + 1), narrow::lerp_256(x, y, a + 1));
            }
        }
        assert_eq!(wide::premultiply(x), narrow::premultiply(x));
    }
}

#[test]
fn source_over_with_coverage() {
    assert_eq!(super::mul_div_255_u_add_saturating(0x80FF_0000, 128, 0), 0x4080_0000);
    assert_eq!(wide::mul_div_255_u_add_saturating(0x80FF_0000, 128, 0), 0x4080_0000);
    assert_eq!(narrow::mul_div_255_u_add_saturating(0x80FF_0000, 128, 0), 0x4080_0000);
}

#[test]
fn fused_blend_rounds_once() {
    let r = super::mul_div_255_u_2x_add(0xC8C8_C8C8, 100, 0x3232_3232, 200);
    assert_eq!(r, 0x7676_7676);
}

#[test]
fn mul_div_255_matches_scalar() {
    for x in pixels() {
        for &a in WEIGHTS {
            let expected = per_channel(x, 0, |c, _| scalar::mul_div_255(c, a));
            assert_eq!(super::mul_div_255_u(x, a), expected, "x={x:#010x} a={a}");
            assert_eq!(super::mul_div_255_u_clear_alpha(x, a), expected & 0x00FF_FFFF);
            assert_eq!(super::mul_div_255_u_fill_alpha(x, a), expected | 0xFF00_0000);
        }
    }
}

#[test]
fn saturating_ops_match_scalar() {
    for x in pixels().step_by(5) {
        for y in pixels().step_by(53) {
            assert_eq!(super::add_saturating(x, y), per_channel(x, y, scalar::add_saturating));
            assert_eq!(super::sub_saturating(x, y), per_channel(x, y, scalar::sub_saturating));
            let a = y >> 24;
            let expected = per_channel(x, y, |c, d| scalar::add_saturating(scalar::mul_div_255(c, a), d));
            assert_eq!(super::mul_div_255_u_add_saturating(x, a, y), expected);
        }
    }
}

#[test]
fn add_is_plain_word_add() {
    assert_eq!(super::add(0x0102_0304, 0x1010_1010), 0x1112_1314);
}

#[test]
fn lerp_matches_scalar() {
    for x in pixels().step_by(11) {
        for y in pixels().step_by(67) {
            for &a in WEIGHTS {
                let expected = per_channel(x, y, |c, d| scalar::lerp_255(c, d, a));
                assert_eq!(super::lerp_255(x, y, a), expected);
                let expected = per_channel(x, y, |c, d| scalar::lerp_256(c, d, a + 1));
                assert_eq!(super::lerp_256(x, y, a + 1), expected);
            }
            assert_eq!(super::lerp_255(x, y, 0), y);
            assert_eq!(super::lerp_255(x, y, 255), x);
            assert_eq!(super::lerp_256(x, y, 0), y);
            assert_eq!(super::lerp_256(x, y, 256), x);
        }
    }
}

#[test]
fn premultiply_keeps_alpha() {
    for p in pixels() {
        let a = p >> 24;
        let r = super::premultiply(p);
        assert_eq!(r >> 24, a);
        let expected = per_channel(p, 0, |c, _| scalar::mul_div_255(c, a)) & 0x00FF_FFFF;
        assert_eq!(r & 0x00FF_FFFF, expected, "p={p:#010x}");
        assert_eq!(super::premultiply(p | 0xFF00_0000), p | 0xFF00_0000);
        assert_eq!(super::premultiply(p & 0x00FF_FFFF), 0);
    }
}
