//! CRC-32/ISO-HDLC as a fixed `Checksum` type.
//!
//! Computed with the left-shifting bit loop in [`bitwise::crc32`]; the
//! register is kept in its unreflected form between updates.

use crate::bitwise::{self, crc32::POLYNOMIAL};

fn update(crc: u32, data: &[u8]) -> u32 {
  bitwise::crc32::update(crc, POLYNOMIAL, data)
}

/// Inverse of [`bitwise::crc32::finalize`].
const fn resume(crc: u32) -> u32 {
  (!crc).reverse_bits()
}

define_crc_type! {
  /// CRC-32/ISO-HDLC (Ethernet, zip, PNG, firmware images).
  ///
  /// ```
  /// use fwcrc::Crc32IsoHdlc;
  ///
  /// assert_eq!(Crc32IsoHdlc::checksum(b"123456789"), 0xCBF4_3926);
  /// ```
  pub struct Crc32IsoHdlc: u32 {
    name: "CRC-32/ISO-HDLC",
    width: 32,
    check: 0xCBF4_3926,
    init: bitwise::crc32::INIT,
    update: update,
    finalize: bitwise::crc32::finalize,
    resume: resume,
  }
}

#[cfg(test)]
mod tests {
  use traits::Checksum;

  use super::*;

  #[test]
  fn test_self_check() {
    assert!(Crc32IsoHdlc::self_check());
  }

  #[test]
  fn test_resume_roundtrips() {
    for split in 0..=9 {
      let (a, b) = b"123456789".split_at(split);
      let mut h = Crc32IsoHdlc::resume(Crc32IsoHdlc::checksum(a));
      h.update(b);
      assert_eq!(h.finalize(), 0xCBF4_3926, "split {split}");
    }
  }

  #[test]
  fn test_resume_of_initial_is_new() {
    assert_eq!(Crc32IsoHdlc::resume(0).finalize(), Crc32IsoHdlc::new().finalize());
  }
}
