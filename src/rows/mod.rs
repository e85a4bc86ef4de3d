// ---------------------------------------------------------------------------
// Row-level compositing over byte buffers of 4-byte pixels.
//
// Pixels are read as little-endian words, so byte 3 is alpha for any
// alpha-last order (RGBA, BGRA).
// Every public function validates the buffer geometry first, then runs an
// unchecked row kernel built from the `p32` operations.
// ---------------------------------------------------------------------------

use crate::{SizeError, p32};

#[cfg(test)]
mod tests;

const BPP: usize = 4;

// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_inplace(len: usize) -> Result<(), SizeError> {
    if len == 0 || !len.is_multiple_of(BPP) {
        Err(SizeError::NotPixelAligned)
    } else {
        Ok(())
    }
}

#[inline]
fn check_copy(src_len: usize, dst_len: usize) -> Result<(), SizeError> {
    check_inplace(src_len)?;
    if dst_len < src_len {
        return Err(SizeError::PixelCountMismatch);
    }
    Ok(())
}

#[inline]
fn check_strided(len: usize, width: usize, height: usize, stride: usize) -> Result<(), SizeError> {
    if width == 0 || height == 0 {
        return Err(SizeError::InvalidStride);
    }
    let row_bytes = width.checked_mul(BPP).ok_or(SizeError::InvalidStride)?;
    if row_bytes > stride {
        return Err(SizeError::InvalidStride);
    }
    let total = (height - 1)
        .checked_mul(stride)
        .ok_or(SizeError::InvalidStride)?
        .checked_add(row_bytes)
        .ok_or(SizeError::InvalidStride)?;
    if len < total {
        return Err(SizeError::InvalidStride);
    }
    Ok(())
}

// ===========================================================================
// Row kernels (no validation)
// ===========================================================================

#[inline(always)]
fn load(px: &[u8]) -> u32 {
    u32::from_le_bytes([px[0], px[1], px[2], px[3]])
}

#[inline(always)]
fn store(px: &mut [u8], v: u32) {
    px.copy_from_slice(&v.to_le_bytes());
}

pub(crate) fn premultiply_row(row: &mut [u8]) {
    for px in row.chunks_exact_mut(BPP) {
        // Opaque pixels are already premultiplied.
        if px[3] != 0xFF {
            let v = load(px);
            store(px, p32::premultiply(v));
        }
    }
}

pub(crate) fn copy_premultiply_row(src: &[u8], dst: &mut [u8]) {
    for (s, d) in src.chunks_exact(BPP).zip(dst.chunks_exact_mut(BPP)) {
        store(d, p32::premultiply(load(s)));
    }
}

pub(crate) fn scale_row(row: &mut [u8], coverage: u8) {
    let a = u32::from(coverage);
    for px in row.chunks_exact_mut(BPP) {
        let v = load(px);
        store(px, p32::mul_div_255_u(v, a));
    }
}

pub(crate) fn add_saturating_row(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.chunks_exact_mut(BPP).zip(src.chunks_exact(BPP)) {
        let v = p32::add_saturating(load(d), load(s));
        store(d, v);
    }
}

pub(crate) fn lerp_row(dst: &mut [u8], src: &[u8], alpha: u8) {
    let a = u32::from(alpha);
    for (d, s) in dst.chunks_exact_mut(BPP).zip(src.chunks_exact(BPP)) {
        let v = p32::lerp_255(load(s), load(d), a);
        store(d, v);
    }
}

// ===========================================================================
// Public API: contiguous
// ===========================================================================

/// Multiply the color bytes of every pixel by its alpha (byte 3), in place.
///
/// Alpha itself is kept. Works for any alpha-last layout (RGBA, BGRA).
pub fn premultiply_inplace(buf: &mut [u8]) -> Result<(), SizeError> {
    check_inplace(buf.len())?;
    premultiply_row(buf);
    Ok(())
}

/// Copy 4bpp pixels into `dst`, premultiplying on the way.
///
/// `dst` may be longer than `src`; bytes past `src.len()` are untouched.
pub fn premultiply(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    check_copy(src.len(), dst.len())?;
    copy_premultiply_row(src, dst);
    Ok(())
}

/// Scale all four bytes of every pixel by `coverage / 255`, rounded.
///
/// Alpha is scaled along with the color bytes.
pub fn scale_inplace(buf: &mut [u8], coverage: u8) -> Result<(), SizeError> {
    check_inplace(buf.len())?;
    scale_row(buf, coverage);
    Ok(())
}

/// `dst = min(dst + src, 255)` per byte.
pub fn add_saturating_inplace(dst: &mut [u8], src: &[u8]) -> Result<(), SizeError> {
    check_copy(src.len(), dst.len())?;
    add_saturating_row(dst, src);
    Ok(())
}

/// `dst = (src * alpha + dst * (255 - alpha)) / 255` per byte, rounded.
///
/// `alpha = 255` copies `src`, `alpha = 0` leaves `dst` as it was.
pub fn lerp_inplace(dst: &mut [u8], src: &[u8], alpha: u8) -> Result<(), SizeError> {
    check_copy(src.len(), dst.len())?;
    lerp_row(dst, src, alpha);
    Ok(())
}

// ===========================================================================
// Public API: strided
// ===========================================================================

/// Premultiply a strided 4bpp image in place.
///
/// `stride` is the distance in bytes between the start of consecutive rows
/// and must be at least `width * 4`. Padding bytes are never touched. The
/// buffer must hold at least `(height - 1) * stride + width * 4` bytes.
pub fn premultiply_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    check_strided(buf.len(), width, height, stride)?;
    let row_bytes = width * BPP;
    for y in 0..height {
        let start = y * stride;
        premultiply_row(&mut buf[start..start + row_bytes]);
    }
    Ok(())
}

/// Copy a strided 4bpp image, premultiplying on the way.
pub fn premultiply_strided(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
) -> Result<(), SizeError> {
    check_strided(src.len(), width, height, src_stride)?;
    check_strided(dst.len(), width, height, dst_stride)?;
    let row_bytes = width * BPP;
    for y in 0..height {
        let s = y * src_stride;
        let d = y * dst_stride;
        copy_premultiply_row(&src[s..s + row_bytes], &mut dst[d..d + row_bytes]);
    }
    Ok(())
}

/// Scale a strided 4bpp image by `coverage / 255` in place.
pub fn scale_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    coverage: u8,
) -> Result<(), SizeError> {
    check_strided(buf.len(), width, height, stride)?;
    let row_bytes = width * BPP;
    for y in 0..height {
        let start = y * stride;
        scale_row(&mut buf[start..start + row_bytes], coverage);
    }
    Ok(())
}
