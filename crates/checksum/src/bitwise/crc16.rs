//! Forward (MSB-first) CRC-16 without lookup tables.
//!
//! Seed 0xFFFF, polynomial 0x1021, no reflection and no final XOR. This is
//! the CRC used for 16-bit protocol checksums, catalogued as
//! CRC-16/CCITT-FALSE.

use crate::constants::crc16_ccitt::{INIT, POLYNOMIAL};

/// Compute the forward CRC-16 of `data` from the standard 0xFFFF seed.
///
/// # Example
///
/// ```
/// use fwcrc::bitwise::crc16::forward;
///
/// assert_eq!(forward(b"123456789"), 0x29B1);
/// ```
#[inline]
#[must_use]
pub fn forward(data: &[u8]) -> u16 {
  update(INIT, data)
}

/// Continue a forward CRC-16 from register state `crc`.
#[inline]
#[must_use]
pub fn update(mut crc: u16, data: &[u8]) -> u16 {
  for &byte in data {
    crc = update_byte(crc, byte);
  }
  crc
}

/// Mix one byte into the register.
///
/// This is a `const fn` to allow compile-time CRC computation.
#[inline]
#[must_use]
pub const fn update_byte(mut crc: u16, byte: u8) -> u16 {
  crc ^= (byte as u16) << 8;
  let mut bit = 0;
  while bit < 8 {
    let mask = 0u16.wrapping_sub(crc >> 15);
    crc = (crc << 1) ^ (POLYNOMIAL & mask);
    bit += 1;
  }
  crc
}
