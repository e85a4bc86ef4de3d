//! Whole-pixel operations: a packed `u32` in, a packed `u32` out.
//!
//! Each function unpacks, does its arithmetic and packs again. That round
//! trip costs a few instructions per call; inner loops that chain several
//! operations should stay in [`B64x4`](crate::B64x4) or
//! [`B32x2Pair`](crate::B32x2Pair) instead.
//!
//! Two implementations produce bit-identical results:
//!
//! - [`wide`] spreads the pixel over one `u64` (four lanes, one multiply).
//! - [`narrow`] splits it into two `u32` halves (two lanes each).
//!
//! The functions at this level forward to `wide` on 64-bit targets and to
//! `narrow` everywhere else. Alpha is byte 3 (`p >> 24`).

pub mod narrow;
pub mod wide;

#[cfg(test)]
mod tests;

#[cfg(target_pointer_width = "64")]
pub use wide::*;

#[cfg(not(target_pointer_width = "64"))]
pub use narrow::*;
