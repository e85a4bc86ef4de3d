//! # bytelane
//!
//! *Byte lanes in a word.*
//!
//! Packed fixed-point arithmetic for 8-bit-per-channel pixel compositing,
//! done in plain integer registers. Several byte lanes share one `u32` or
//! `u64`, each lane followed by a zero headroom byte that absorbs carries
//! and 16-bit products without spilling into the neighbour. Saturation,
//! rounding and clamping are closed-form bit tricks, not branches.
//!
//! ## Layouts
//!
//! | Type | Word | Layout |
//! |---|---|---|
//! | scalar (`b1x1`) | `u32` | `[00.00.00.B0]` |
//! | [`B32x2`] | `u32` | `[00.B1.00.B0]` |
//! | [`B32x2Pair`] | 2 × `u32` | channels 0,2 and channels 1,3 |
//! | [`B64x4`] | `u64` | `[00.B3.00.B2.00.B1.00.B0]` |
//! | pixel ([`p32`]) | `u32` | four packed channels, byte 3 is alpha |
//!
//! A pixel is split into even bytes (channels 0 and 2) and odd bytes
//! (channels 1 and 3) rather than adjacent pairs: each half is a single
//! mask/shift away, and packing back is one shift and one OR.
//!
//! ```rust
//! use bytelane::{B32x2Pair, p32};
//!
//! // Source-over with coverage: src * 128 / 255 + dst, saturated.
//! assert_eq!(p32::mul_div_255_u_add_saturating(0x80FF_0000, 128, 0), 0x4080_0000);
//!
//! // Same thing through the unpacked form.
//! let src = B32x2Pair::unpack_0213(0x80FF_0000);
//! let dst = B32x2Pair::unpack_0213(0);
//! let out = src.mul_div_255_u_add_saturating(128, dst).pack_0213();
//! assert_eq!(out, 0x4080_0000);
//! ```
//!
//! ## Preconditions
//!
//! Arithmetic never validates its inputs: lanes must hold values in the
//! documented range (usually `0..=255`). Debug builds check lane ranges with
//! `debug_assert!`; release builds silently produce a wrong color.
//!
//! ## Feature flags
//!
//! - **`conditional`**: clamp with conditional selects instead of bit masks.
//!   Results are identical; pick whichever the target compiles better.
//! - **`rgb`**: typed helpers over [`rgb`] crate pixels (`Rgba<u8>`,
//!   `Bgra<u8>`) via bytemuck.
//! - **`imgref`**: whole-image helpers over [`imgref`] types. Implies `rgb`.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod clamp;
pub mod scalar;

mod b32x2;
mod b64x4;

pub use b32x2::{B32x2, B32x2Pair, BYTE_1X2_HALF, BYTE_1X2_MASK, BYTE_1X2_MASK_PLUS_ONE};
pub use b64x4::{
    B64x4, BYTE_1X3_HALF, BYTE_1X3_MASK, BYTE_1X3_MASK_PLUS_ONE, BYTE_1X4_HALF, BYTE_1X4_MASK,
    BYTE_1X4_MASK_PLUS_ONE,
};

pub mod p32;
pub mod rows;

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod img;

/// Buffer size or geometry rejected by a row helper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeError {
    /// Buffer is empty or its length is not a multiple of 4 bytes.
    NotPixelAligned,
    /// Source and destination hold a different number of pixels.
    PixelCountMismatch,
    /// Width/height/stride do not describe an image inside the buffer.
    InvalidStride,
}

impl core::fmt::Display for SizeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SizeError::NotPixelAligned => f.write_str("buffer is empty or not a multiple of 4 bytes"),
            SizeError::PixelCountMismatch => f.write_str("source and destination pixel counts differ"),
            SizeError::InvalidStride => f.write_str("width, height and stride do not fit the buffer"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SizeError {}
