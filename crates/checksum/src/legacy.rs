//! Named call shapes for existing consumers.
//!
//! Each function here is one fixed configuration of the parameterized
//! engine. They are computed by the dedicated routines (static reversed
//! table, bit loops) rather than by [`Crc`](crate::Crc), and
//! [`LegacyAlgorithm::params`] names the engine configuration each one must
//! agree with.

use crate::{
  bitwise,
  crc16::reversed,
  error::{Crc32Error, ParamsError},
  params::CrcParams,
};

/// Reversed-table CRC-16-CCITT, no final XOR.
#[inline]
#[must_use]
pub fn compute_crc16_raw(buffer: &[u8]) -> u16 {
  reversed::raw(buffer)
}

/// Reversed-table CRC-16-CCITT with final XOR 0xFFFF.
///
/// Always equals `compute_crc16_raw(buffer) ^ 0xFFFF`.
#[inline]
#[must_use]
pub fn compute_crc16_final(buffer: &[u8]) -> u16 {
  reversed::with_final_xor(buffer)
}

/// Forward (non-reflected) CRC-16, polynomial 0x1021, seed 0xFFFF.
#[inline]
#[must_use]
pub fn compute_crc16_forward(buffer: &[u8]) -> u16 {
  bitwise::crc16::forward(buffer)
}

/// General-purpose CRC-32 over a whole buffer with a caller-chosen
/// polynomial (normal form, e.g. `0x04C11DB7`).
///
/// # Errors
///
/// Returns [`Crc32Error::MissingInput`] if `buffer` is `None`.
///
/// # Example
///
/// ```
/// use fwcrc::legacy::compute_crc32;
///
/// assert_eq!(compute_crc32(0x04C1_1DB7, Some(&b"123456789"[..])), Ok(0xCBF4_3926));
/// assert!(compute_crc32(0x04C1_1DB7, None).is_err());
/// ```
pub fn compute_crc32(polynomial: u32, buffer: Option<&[u8]>) -> Result<u32, Crc32Error> {
  let buffer = buffer.ok_or(Crc32Error::MissingInput)?;
  Ok(bitwise::crc32::compute(polynomial, buffer))
}

/// Parameterized CRC through the table-driven engine.
///
/// # Errors
///
/// Returns a [`ParamsError`] for parameters the engine cannot run.
#[inline]
pub fn parameterized_crc(params: &CrcParams, buffer: &[u8]) -> Result<u32, ParamsError> {
  crate::engine::parameterized_crc(params, buffer)
}

/// The fixed configurations exposed above.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LegacyAlgorithm {
  /// [`compute_crc16_raw`]
  Crc16Raw,
  /// [`compute_crc16_final`]
  Crc16Final,
  /// [`compute_crc16_forward`]
  Crc16Forward,
  /// [`compute_crc32`] with the standard polynomial
  Crc32,
}

impl LegacyAlgorithm {
  /// Every configuration, in declaration order.
  pub const ALL: [Self; 4] = [Self::Crc16Raw, Self::Crc16Final, Self::Crc16Forward, Self::Crc32];

  /// Engine parameters that reproduce this configuration.
  #[must_use]
  pub const fn params(self) -> CrcParams {
    match self {
      Self::Crc16Raw => CrcParams::CRC16_MCRF4XX,
      Self::Crc16Final => CrcParams::CRC16_X25,
      Self::Crc16Forward => CrcParams::CRC16_CCITT_FALSE,
      Self::Crc32 => CrcParams::CRC32_ISO_HDLC,
    }
  }

  /// Short identifier, e.g. for command-line selection.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Crc16Raw => "crc16-raw",
      Self::Crc16Final => "crc16-final",
      Self::Crc16Forward => "crc16-forward",
      Self::Crc32 => "crc32",
    }
  }

  /// Compute with the dedicated routine, widened to `u32`.
  #[must_use]
  pub fn compute(self, buffer: &[u8]) -> u32 {
    match self {
      Self::Crc16Raw => u32::from(compute_crc16_raw(buffer)),
      Self::Crc16Final => u32::from(compute_crc16_final(buffer)),
      Self::Crc16Forward => u32::from(compute_crc16_forward(buffer)),
      Self::Crc32 => bitwise::crc32::compute(bitwise::crc32::POLYNOMIAL, buffer),
    }
  }
}

impl core::str::FromStr for LegacyAlgorithm {
  type Err = UnknownAlgorithm;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|a| a.name().eq_ignore_ascii_case(s))
      .ok_or(UnknownAlgorithm)
  }
}

/// A name did not match any [`LegacyAlgorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownAlgorithm;

impl core::fmt::Display for UnknownAlgorithm {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str("unknown algorithm (expected crc16-raw, crc16-final, crc16-forward, or crc32)")
  }
}

impl core::error::Error for UnknownAlgorithm {}
