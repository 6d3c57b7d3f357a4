//! Table-less CRC-32 computed with a left-shifting register.
//!
//! The firmware CRC-32 is specified as an MSB-first bit loop over a
//! normal-form polynomial, yet it must produce the reflected CRC-32
//! (ISO-HDLC) values. The loop therefore reflects each input byte on the way
//! in and reflects the register on the way out:
//!
//! ```text
//! crc = 0xFFFFFFFF
//! for each byte:
//!   crc ^= reflect8(byte) << 24
//!   repeat 8:
//!     mask = 0 - (crc >> 31)
//!     crc = (crc << 1) ^ (poly & mask)
//! crc = !reflect32(crc)
//! ```
//!
//! With `poly = 0x04C11DB7` this is bit-for-bit CRC-32/ISO-HDLC; other
//! polynomials give the matching reflected algorithm (e.g. 0x1EDC6F41 gives
//! CRC-32/ISCSI).

/// Standard CRC-32 polynomial (normal form).
pub const POLYNOMIAL: u32 = 0x04C1_1DB7;

/// Register seed.
pub const INIT: u32 = 0xFFFF_FFFF;

/// Compute the CRC-32 of `data` for polynomial `poly`.
///
/// # Example
///
/// ```
/// use fwcrc::bitwise::crc32::{POLYNOMIAL, compute};
///
/// assert_eq!(compute(POLYNOMIAL, b"123456789"), 0xCBF4_3926);
/// ```
#[inline]
#[must_use]
pub fn compute(poly: u32, data: &[u8]) -> u32 {
  finalize(update(INIT, poly, data))
}

/// Mix `data` into register state `crc`.
#[inline]
#[must_use]
pub fn update(mut crc: u32, poly: u32, data: &[u8]) -> u32 {
  for &byte in data {
    crc = update_byte(crc, poly, byte);
  }
  crc
}

/// Mix one byte into the register.
///
/// This is a `const fn` to allow compile-time CRC computation.
#[inline]
#[must_use]
pub const fn update_byte(mut crc: u32, poly: u32, byte: u8) -> u32 {
  crc ^= (byte.reverse_bits() as u32) << 24;
  let mut bit = 0;
  while bit < 8 {
    let mask = 0u32.wrapping_sub(crc >> 31);
    crc = (crc << 1) ^ (poly & mask);
    bit += 1;
  }
  crc
}

/// Turn a register into the published CRC value: reflect, then invert.
#[inline]
#[must_use]
pub const fn finalize(crc: u32) -> u32 {
  !crc.reverse_bits()
}
