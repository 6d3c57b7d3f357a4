//! Const-fn CRC lookup table generation.
//!
//! One generator covers every width the engine supports. Entry `i` of a table
//! is the partial remainder of byte `i` shifted through eight rounds of
//! polynomial division ("augmented zero bits" construction):
//!
//! ```text
//! r = reflect_in ? reflect8(i) : i
//! r <<= width - 8                     // left-align in the register
//! repeat 8:
//!   r = top bit set ? (r << 1) ^ poly : r << 1
//! r = reflect_in ? reflect(r, width) : r
//! entry = r & mask(width)
//! ```
//!
//! Tables are immutable once built and are `Send + Sync`, so any number of
//! engines can read one table concurrently.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::{
  error::ParamsError,
  params::{CrcParams, MAX_WIDTH, MIN_WIDTH},
  reflect::reflect,
};

/// 256 partial remainders for one [`CrcParams`] configuration.
///
/// Entries live in the low `width` bits of each `u32`.
#[derive(Clone, PartialEq, Eq)]
#[repr(align(64))]
pub struct CrcTable {
  entries: [u32; 256],
}

impl CrcTable {
  /// Build the table for `params`.
  ///
  /// Only `width`, `polynomial`, and `reflect_in` are read. Use
  /// [`try_generate`](Self::try_generate) for parameters that have not been
  /// validated.
  ///
  /// # Panics
  ///
  /// Panics (or fails const evaluation) if `width` is outside `8..=32`.
  #[must_use]
  pub const fn generate(params: &CrcParams) -> Self {
    assert!(
      params.width >= MIN_WIDTH && params.width <= MAX_WIDTH,
      "CRC table width must be in 8..=32"
    );
    let mut entries = [0u32; 256];
    let mut i = 0usize;
    while i < 256 {
      entries[i] = table_entry(params, i as u8);
      i += 1;
    }
    Self { entries }
  }

  /// Validate `params`, then build their table.
  ///
  /// # Errors
  ///
  /// Returns a [`ParamsError`] if `params` fail [`CrcParams::validate`].
  pub const fn try_generate(params: &CrcParams) -> Result<Self, ParamsError> {
    if let Err(err) = params.validate() {
      return Err(err);
    }
    Ok(Self::generate(params))
  }

  /// Entry for byte value `index`.
  #[inline]
  #[must_use]
  pub const fn get(&self, index: u8) -> u32 {
    self.entries[index as usize]
  }

  /// All 256 entries.
  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &[u32; 256] {
    &self.entries
  }
}

impl core::fmt::Debug for CrcTable {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("CrcTable")
      .field("entries[1]", &format_args!("{:#x}", self.entries[1]))
      .field("entries[128]", &format_args!("{:#x}", self.entries[128]))
      .finish_non_exhaustive()
  }
}

/// Compute a single table entry for byte value `index`.
///
/// `params.width` must already be within `8..=32`. The working register is a
/// `u64` so that shifting a 32-bit remainder left never loses the bit that
/// decides the next XOR.
#[must_use]
pub(crate) const fn table_entry(params: &CrcParams, index: u8) -> u32 {
  let width = params.width as u32;
  let top = 1u64 << (width - 1);
  let poly = params.polynomial as u64;

  let seed = if params.reflect_in { index.reverse_bits() } else { index };
  let mut r = (seed as u64) << (width - 8);

  let mut bit = 0;
  while bit < 8 {
    r = if r & top != 0 { (r << 1) ^ poly } else { r << 1 };
    bit += 1;
  }

  if params.reflect_in {
    r = reflect(r, width);
  }
  (r as u32) & params.mask()
}
