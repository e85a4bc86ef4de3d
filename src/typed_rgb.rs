//! Compositing on [`rgb`] crate pixel slices via bytemuck.
//!
//! `Rgba<u8>` and `Bgra<u8>` both keep alpha last, so the same packed
//! kernels serve both orders: a pixel is read as a little-endian `u32`
//! with alpha in byte 3.
//!
//! ```rust
//! use rgb::Rgba;
//! use bytelane::typed_rgb;
//!
//! let mut pixels = vec![Rgba::new(255u8, 128, 0, 128); 16];
//! typed_rgb::premultiply_rgba(&mut pixels);
//! assert_eq!(pixels[0], Rgba::new(128, 64, 0, 128));
//! ```

use crate::{SizeError, rows};
use rgb::{Bgra, Rgba};

// ---------------------------------------------------------------------------
// Single pixels
// ---------------------------------------------------------------------------

/// `Rgba<u8>` as a packed word, `r` in byte 0 and `a` in byte 3.
#[inline]
pub fn pack_rgba(px: Rgba<u8>) -> u32 {
    u32::from_le_bytes([px.r, px.g, px.b, px.a])
}

/// Inverse of [`pack_rgba`].
#[inline]
pub fn unpack_rgba(v: u32) -> Rgba<u8> {
    let [r, g, b, a] = v.to_le_bytes();
    Rgba::new(r, g, b, a)
}

// ---------------------------------------------------------------------------
// In-place on typed slices
// ---------------------------------------------------------------------------

/// Premultiply every pixel of a `&mut [Rgba<u8>]` by its alpha.
pub fn premultiply_rgba(pixels: &mut [Rgba<u8>]) {
    rows::premultiply_row(bytemuck::cast_slice_mut(pixels));
}

/// Premultiply every pixel of a `&mut [Bgra<u8>]` by its alpha.
pub fn premultiply_bgra(pixels: &mut [Bgra<u8>]) {
    rows::premultiply_row(bytemuck::cast_slice_mut(pixels));
}

/// Scale every channel (alpha included) of a `&mut [Rgba<u8>]` by
/// `coverage / 255`.
pub fn scale_rgba(pixels: &mut [Rgba<u8>], coverage: u8) {
    rows::scale_row(bytemuck::cast_slice_mut(pixels), coverage);
}

/// Scale every channel (alpha included) of a `&mut [Bgra<u8>]` by
/// `coverage / 255`.
pub fn scale_bgra(pixels: &mut [Bgra<u8>], coverage: u8) {
    rows::scale_row(bytemuck::cast_slice_mut(pixels), coverage);
}

// ---------------------------------------------------------------------------
// Two-buffer operations
// ---------------------------------------------------------------------------

/// Copy `&[Rgba<u8>]` into `&mut [Rgba<u8>]`, premultiplying on the way.
pub fn premultiply_rgba_buf(src: &[Rgba<u8>], dst: &mut [Rgba<u8>]) -> Result<(), SizeError> {
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
    rows::premultiply(src_bytes, dst_bytes)
}

/// `dst = lerp(dst, src, alpha / 255)` per channel.
pub fn lerp_rgba_buf(dst: &mut [Rgba<u8>], src: &[Rgba<u8>], alpha: u8) -> Result<(), SizeError> {
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
    rows::lerp_inplace(dst_bytes, src_bytes, alpha)
}

/// `dst = min(dst + src, 255)` per channel; the "plus" operator on
/// premultiplied pixels.
pub fn add_saturating_rgba_buf(dst: &mut [Rgba<u8>], src: &[Rgba<u8>]) -> Result<(), SizeError> {
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
    rows::add_saturating_inplace(dst_bytes, src_bytes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
