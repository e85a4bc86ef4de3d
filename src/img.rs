//! Whole-image compositing on [`imgref`] types.
//!
//! Strided images are walked row by row; padding between rows is never
//! read or written.
//!
//! ```rust
//! use rgb::Rgba;
//! use imgref::{ImgRefMut, ImgVec};
//! use bytelane::img;
//!
//! let src = ImgVec::new(vec![Rgba::new(255u8, 0, 0, 255); 4], 2, 2);
//! let mut dst_buf = vec![Rgba::new(0u8, 0, 255, 255); 4];
//! let dst = ImgRefMut::new(&mut dst_buf, 2, 2);
//! img::lerp_rgba(dst, src.as_ref(), 51).unwrap();
//! assert_eq!(dst_buf[0], Rgba::new(51, 0, 204, 255));
//! ```

use alloc::vec;

use imgref::{ImgRef, ImgRefMut, ImgVec};
use rgb::{Bgra, Rgba};

use crate::{SizeError, rows};

fn check_dims(sw: usize, sh: usize, dw: usize, dh: usize) -> Result<(), SizeError> {
    if sw != dw || sh != dh {
        Err(SizeError::PixelCountMismatch)
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In place
// ---------------------------------------------------------------------------

/// Premultiply every pixel of an RGBA image by its alpha.
pub fn premultiply_rgba(mut img: ImgRefMut<'_, Rgba<u8>>) {
    for row in img.rows_mut() {
        rows::premultiply_row(bytemuck::cast_slice_mut(row));
    }
}

/// Premultiply every pixel of a BGRA image by its alpha.
pub fn premultiply_bgra(mut img: ImgRefMut<'_, Bgra<u8>>) {
    for row in img.rows_mut() {
        rows::premultiply_row(bytemuck::cast_slice_mut(row));
    }
}

/// Scale every channel of an RGBA image by `coverage / 255`.
pub fn scale_rgba(mut img: ImgRefMut<'_, Rgba<u8>>, coverage: u8) {
    for row in img.rows_mut() {
        rows::scale_row(bytemuck::cast_slice_mut(row), coverage);
    }
}

// ---------------------------------------------------------------------------
// Two images
// ---------------------------------------------------------------------------

/// Premultiplied copy of `img` in a new, tightly packed buffer.
pub fn premultiplied(img: ImgRef<'_, Rgba<u8>>) -> ImgVec<Rgba<u8>> {
    let w = img.width();
    let h = img.height();
    let mut dst = ImgVec::new(vec![Rgba::default(); w * h], w, h);
    for (src_row, dst_row) in img.rows().zip(dst.rows_mut()) {
        let s: &[u8] = bytemuck::cast_slice(src_row);
        let d: &mut [u8] = bytemuck::cast_slice_mut(dst_row);
        rows::copy_premultiply_row(s, d);
    }
    dst
}

/// `dst = lerp(dst, src, alpha / 255)` per channel. Both images must have
/// the same width and height; strides may differ.
pub fn lerp_rgba(
    mut dst: ImgRefMut<'_, Rgba<u8>>,
    src: ImgRef<'_, Rgba<u8>>,
    alpha: u8,
) -> Result<(), SizeError> {
    check_dims(src.width(), src.height(), dst.width(), dst.height())?;
    for (src_row, dst_row) in src.rows().zip(dst.rows_mut()) {
        let s: &[u8] = bytemuck::cast_slice(src_row);
        let d: &mut [u8] = bytemuck::cast_slice_mut(dst_row);
        rows::lerp_row(d, s, alpha);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
