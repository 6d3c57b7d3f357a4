//! Reversed-table CRC-16-CCITT.
//!
//! Byte-at-a-time LSB-first update over
//! [`REVERSED_TABLE`](crate::constants::crc16_ccitt::REVERSED_TABLE):
//!
//! ```text
//! crc = (crc >> 8) ^ TABLE[(crc ^ byte) & 0xFF]
//! ```

use crate::constants::crc16_ccitt::{REVERSED_TABLE, XOR_OUT};
pub use crate::constants::crc16_ccitt::INIT;

/// Continue a reversed-table CRC-16 from register state `crc`.
#[inline]
#[must_use]
pub fn update(mut crc: u16, data: &[u8]) -> u16 {
  for &byte in data {
    let index = usize::from((crc as u8) ^ byte);
    // `index` is a u8 value, always within the 256-entry table.
    #[allow(clippy::indexing_slicing)]
    let entry = REVERSED_TABLE[index];
    crc = (crc >> 8) ^ entry;
  }
  crc
}

/// CRC of `data` with no final XOR (CRC-16/MCRF4XX).
#[inline]
#[must_use]
pub fn raw(data: &[u8]) -> u16 {
  update(INIT, data)
}

/// CRC of `data` with the final XOR of 0xFFFF applied (CRC-16/X-25).
#[inline]
#[must_use]
pub fn with_final_xor(data: &[u8]) -> u16 {
  raw(data) ^ XOR_OUT
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_check_values() {
    assert_eq!(raw(b"123456789"), 0x6F91);
    assert_eq!(with_final_xor(b"123456789"), 0x906E);
  }

  #[test]
  fn test_empty() {
    assert_eq!(raw(b""), 0xFFFF);
    assert_eq!(with_final_xor(b""), 0x0000);
  }

  #[test]
  fn test_matches_bitwise_reflected() {
    fn bitwise(data: &[u8]) -> u16 {
      let mut crc = 0xFFFFu16;
      for &b in data {
        crc ^= u16::from(b);
        for _ in 0..8 {
          let mask = 0u16.wrapping_sub(crc & 1);
          crc = (crc >> 1) ^ (0x8408 & mask);
        }
      }
      crc
    }

    let data: Vec<u8> = (0..=255u8).chain(0..=255u8).rev().collect();
    for len in [0, 1, 2, 3, 17, 255, 256, 512] {
      assert_eq!(raw(&data[..len]), bitwise(&data[..len]), "len {len}");
    }
  }
}
