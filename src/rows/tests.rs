extern crate alloc;
use super::*;
use crate::scalar;
use alloc::{vec, vec::Vec};

// --- Helpers to generate test data ---

fn make_4bpp(n_pixels: usize) -> Vec<u8> {
    (0..n_pixels * 4).map(|i| ((i * 37) % 251) as u8).collect()
}

// --- Reference (per-byte) implementations for comparison ---

fn ref_premultiply(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    for px in out.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        for c in &mut px[..3] {
            *c = scalar::mul_div_255(u32::from(*c), a) as u8;
        }
    }
    out
}

fn ref_scale(data: &[u8], coverage: u8) -> Vec<u8> {
    data.iter()
        .map(|&c| scalar::mul_div_255(u32::from(c), u32::from(coverage)) as u8)
        .collect()
}

fn ref_lerp(dst: &[u8], src: &[u8], alpha: u8) -> Vec<u8> {
    dst.iter()
        .zip(src)
        .map(|(&d, &s)| scalar::lerp_255(u32::from(s), u32::from(d), u32::from(alpha)) as u8)
        .collect()
}

// -----------------------------------------------------------------------
// Contiguous
// -----------------------------------------------------------------------

#[test]
fn test_premultiply_inplace() {
    for n in [1, 2, 3, 7, 16, 33, 100] {
        let data = make_4bpp(n);
        let mut buf = data.clone();
        premultiply_inplace(&mut buf).unwrap();
        assert_eq!(buf, ref_premultiply(&data), "n={n}");
    }
}

#[test]
fn test_premultiply_copy() {
    let src = make_4bpp(50);
    let mut dst = vec![0xAAu8; 50 * 4 + 8];
    premultiply(&src, &mut dst).unwrap();
    assert_eq!(&dst[..200], &ref_premultiply(&src)[..]);
    // Bytes past the source length are not written.
    assert_eq!(&dst[200..], &[0xAA; 8]);
}

#[test]
fn test_premultiply_extremes() {
    let mut buf = vec![
        10, 20, 30, 255, // opaque: unchanged
        10, 20, 30, 0, // transparent: color cleared
        255, 255, 255, 128, // half alpha
    ];
    premultiply_inplace(&mut buf).unwrap();
    assert_eq!(buf, [10, 20, 30, 255, 0, 0, 0, 0, 128, 128, 128, 128]);
}

#[test]
fn test_scale_inplace() {
    let data = make_4bpp(64);
    for coverage in [0u8, 1, 64, 128, 200, 255] {
        let mut buf = data.clone();
        scale_inplace(&mut buf, coverage).unwrap();
        assert_eq!(buf, ref_scale(&data, coverage), "coverage={coverage}");
    }
    let mut buf = data.clone();
    scale_inplace(&mut buf, 255).unwrap();
    assert_eq!(buf, data);

    // Alpha scales with the color bytes.
    let mut buf = [200, 100, 50, 255];
    scale_inplace(&mut buf, 128).unwrap();
    assert_eq!(buf, [100, 50, 25, 128]);
}

#[test]
fn test_add_saturating_inplace() {
    let src = make_4bpp(40);
    let mut dst: Vec<u8> = make_4bpp(40).iter().rev().copied().collect();
    let expected: Vec<u8> = dst.iter().zip(&src).map(|(&d, &s)| d.saturating_add(s)).collect();
    add_saturating_inplace(&mut dst, &src).unwrap();
    assert_eq!(dst, expected);
}

#[test]
fn test_lerp_inplace() {
    let src = make_4bpp(40);
    let base: Vec<u8> = src.iter().map(|&c| c ^ 0x5A).collect();
    for alpha in [0u8, 1, 100, 128, 254, 255] {
        let mut dst = base.clone();
        lerp_inplace(&mut dst, &src, alpha).unwrap();
        assert_eq!(dst, ref_lerp(&base, &src, alpha), "alpha={alpha}");
    }
    let mut dst = base.clone();
    lerp_inplace(&mut dst, &src, 0).unwrap();
    assert_eq!(dst, base);
    lerp_inplace(&mut dst, &src, 255).unwrap();
    assert_eq!(dst, src);
}

// -----------------------------------------------------------------------
// Strided
// -----------------------------------------------------------------------

#[test]
fn test_premultiply_strided_skips_padding() {
    let (w, h, stride) = (5, 4, 5 * 4 + 12);
    let mut buf: Vec<u8> = (0..stride * h).map(|i| ((i * 13) % 256) as u8).collect();
    let orig = buf.clone();
    premultiply_inplace_strided(&mut buf, w, h, stride).unwrap();
    for y in 0..h {
        let row = y * stride;
        assert_eq!(
            &buf[row..row + w * 4],
            &ref_premultiply(&orig[row..row + w * 4])[..],
            "row {y}"
        );
        assert_eq!(&buf[row + w * 4..row + stride], &orig[row + w * 4..row + stride], "padding {y}");
    }
}

#[test]
fn test_premultiply_strided_copy() {
    let (w, h) = (3, 3);
    let (src_stride, dst_stride) = (16, 20);
    let src: Vec<u8> = (0..src_stride * h).map(|i| (255 - i % 256) as u8).collect();
    let mut dst = vec![0x11u8; dst_stride * h];
    premultiply_strided(&src, &mut dst, w, h, src_stride, dst_stride).unwrap();
    for y in 0..h {
        let s = y * src_stride;
        let d = y * dst_stride;
        assert_eq!(&dst[d..d + w * 4], &ref_premultiply(&src[s..s + w * 4])[..]);
        assert!(dst[d + w * 4..d + dst_stride].iter().all(|&b| b == 0x11));
    }
}

#[test]
fn test_scale_strided() {
    let (w, h, stride) = (2, 3, 12);
    let mut buf = vec![200u8; stride * h];
    scale_inplace_strided(&mut buf, w, h, stride, 128).unwrap();
    for y in 0..h {
        let row = y * stride;
        assert!(buf[row..row + 8].iter().all(|&b| b == 100));
        assert!(buf[row + 8..row + stride].iter().all(|&b| b == 200));
    }
}

#[test]
fn test_strided_last_row_without_padding() {
    // The final row only needs `width * 4` bytes, not a full stride.
    let mut buf = vec![255u8; 16 + 8];
    assert_eq!(premultiply_inplace_strided(&mut buf, 2, 2, 16), Ok(()));
}

// -----------------------------------------------------------------------
// Size validation
// -----------------------------------------------------------------------

#[test]
fn test_size_errors() {
    // Not pixel-aligned
    assert_eq!(premultiply_inplace(&mut [0; 5]), Err(SizeError::NotPixelAligned));
    assert_eq!(premultiply_inplace(&mut [0; 0]), Err(SizeError::NotPixelAligned));
    assert_eq!(scale_inplace(&mut [0; 7], 3), Err(SizeError::NotPixelAligned));
    assert_eq!(premultiply(&[0; 6], &mut [0; 8]), Err(SizeError::NotPixelAligned));
    assert_eq!(
        add_saturating_inplace(&mut [0; 8], &[0; 0]),
        Err(SizeError::NotPixelAligned)
    );

    // Pixel count mismatch (src aligned, dst too small)
    assert_eq!(premultiply(&[0; 8], &mut [0; 4]), Err(SizeError::PixelCountMismatch));
    assert_eq!(
        add_saturating_inplace(&mut [0; 4], &[0; 8]),
        Err(SizeError::PixelCountMismatch)
    );
    assert_eq!(
        lerp_inplace(&mut [0; 4], &[0; 8], 9),
        Err(SizeError::PixelCountMismatch)
    );
}

#[test]
fn test_strided_size_errors() {
    // stride < width * bpp
    assert_eq!(
        premultiply_inplace_strided(&mut [0; 32], 2, 2, 4),
        Err(SizeError::InvalidStride)
    );
    // buffer too small
    assert_eq!(
        premultiply_inplace_strided(&mut [0; 10], 2, 2, 8),
        Err(SizeError::InvalidStride)
    );
    // zero width
    assert_eq!(
        premultiply_inplace_strided(&mut [0; 8], 0, 1, 8),
        Err(SizeError::InvalidStride)
    );
    // zero height
    assert_eq!(
        scale_inplace_strided(&mut [0; 8], 2, 0, 8, 1),
        Err(SizeError::InvalidStride)
    );
    // overflowing geometry
    assert_eq!(
        premultiply_inplace_strided(&mut [0; 8], usize::MAX, 2, 8),
        Err(SizeError::InvalidStride)
    );
    assert_eq!(
        premultiply_strided(&[0; 16], &mut [0; 15], 2, 2, 8, 8),
        Err(SizeError::InvalidStride)
    );
}
