//! CRC algorithm parameters.
//!
//! This module defines the parameters for CRC algorithms following the
//! conventions from the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/),
//! plus the named configurations the rest of the crate is built from.

use crate::error::ParamsError;

/// Smallest width the table-driven engine supports.
pub const MIN_WIDTH: u8 = 8;
/// Largest width the table-driven engine supports.
pub const MAX_WIDTH: u8 = 32;

/// CRC algorithm parameters.
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC (the "order")
/// - `polynomial`: The generator polynomial (without the implicit high bit)
/// - `initial`: Initial value for the CRC register
/// - `reflect_in`: If true, reflect each input byte before processing
/// - `reflect_out`: If true, reflect the final CRC before XOR
/// - `xor_out`: Value to XOR with the final CRC
///
/// `polynomial`, `initial`, and `xor_out` are written in normal (unreflected)
/// form and must fit in `width` bits; [`CrcParams::validate`] checks this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  /// Width in bits (8..=32 for the table-driven engine).
  pub width: u8,
  /// Generator polynomial (without implicit high bit).
  pub polynomial: u32,
  /// Initial value for the CRC register.
  pub initial: u32,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect final CRC before XOR.
  pub reflect_out: bool,
  /// XOR value applied to final CRC.
  pub xor_out: u32,
}

impl CrcParams {
  /// CRC-16/CCITT-FALSE: forward (MSB-first) CCITT with an all-ones seed.
  ///
  /// This is what the bit-by-bit forward CRC-16 routine computes.
  pub const CRC16_CCITT_FALSE: Self = Self {
    width: 16,
    polynomial: 0x1021,
    initial: 0xFFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
  };

  /// CRC-16/MCRF4XX: reflected CCITT, all-ones seed, no final XOR.
  ///
  /// The "raw" reversed-table CCITT variant; also used for the embedded
  /// checksum at the start of validated files.
  pub const CRC16_MCRF4XX: Self = Self {
    width: 16,
    polynomial: 0x1021,
    initial: 0xFFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
  };

  /// CRC-16/X-25 (a.k.a. IBM-SDLC): reflected CCITT with final XOR 0xFFFF.
  pub const CRC16_X25: Self = Self {
    width: 16,
    polynomial: 0x1021,
    initial: 0xFFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF,
  };

  /// CRC-16/KERMIT: reflected CCITT with a zero seed.
  pub const CRC16_KERMIT: Self = Self {
    width: 16,
    polynomial: 0x1021,
    initial: 0x0000,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
  };

  /// CRC-16/XMODEM: forward CCITT with a zero seed.
  pub const CRC16_XMODEM: Self = Self {
    width: 16,
    polynomial: 0x1021,
    initial: 0x0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
  };

  /// CRC-16/ARC - legacy ARC/LHA archives
  pub const CRC16_ARC: Self = Self {
    width: 16,
    polynomial: 0x8005,
    initial: 0x0000,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
  };

  /// CRC-16/MODBUS
  pub const CRC16_MODBUS: Self = Self {
    width: 16,
    polynomial: 0x8005,
    initial: 0xFFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
  };

  /// CRC-8/SMBUS
  pub const CRC8_SMBUS: Self = Self {
    width: 8,
    polynomial: 0x07,
    initial: 0x00,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x00,
  };

  /// CRC-8/MAXIM-DOW - 1-Wire, iButton
  pub const CRC8_MAXIM_DOW: Self = Self {
    width: 8,
    polynomial: 0x31,
    initial: 0x00,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x00,
  };

  /// CRC-12/UMTS. Input is processed MSB-first but the result is reflected,
  /// so it exercises the mixed reflection path of the engine.
  pub const CRC12_UMTS: Self = Self {
    width: 12,
    polynomial: 0x80F,
    initial: 0x000,
    reflect_in: false,
    reflect_out: true,
    xor_out: 0x000,
  };

  /// CRC-24/OPENPGP (RFC 4880)
  pub const CRC24_OPENPGP: Self = Self {
    width: 24,
    polynomial: 0x86_4CFB,
    initial: 0xB7_04CE,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x00_0000,
  };

  /// CRC-32/ISO-HDLC - Ethernet, gzip, PNG, zip, and the firmware image CRC.
  pub const CRC32_ISO_HDLC: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32/BZIP2: the unreflected sibling of CRC-32/ISO-HDLC.
  pub const CRC32_BZIP2: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32/MPEG-2
  pub const CRC32_MPEG2: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000_0000,
  };

  /// CRC-32/ISCSI (Castagnoli) - iSCSI, SCTP, ext4, Btrfs
  pub const CRC32_ISCSI: Self = Self {
    width: 32,
    polynomial: 0x1EDC_6F41,
    initial: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
  };

  /// Mask covering the low `width` bits.
  ///
  /// Widths above 32 saturate to `u32::MAX`; widths of zero give `0`.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u32 {
    match self.width {
      0 => 0,
      w if w >= 32 => u32::MAX,
      w => (1u32 << w) - 1,
    }
  }

  /// Highest bit of the register (`1 << (width - 1)`).
  #[inline]
  #[must_use]
  pub const fn top_bit(&self) -> u32 {
    match self.width {
      0 => 0,
      w if w >= 32 => 1 << 31,
      w => 1u32 << (w - 1),
    }
  }

  /// Returns the reflected polynomial (bit-reversed over `width` bits).
  #[inline]
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u32 {
    crate::reflect::reflect_register(self.polynomial, self.width)
  }

  /// Check that these parameters can drive the table-driven engine.
  ///
  /// # Errors
  ///
  /// - [`ParamsError::UnsupportedWidth`] if `width` is outside `8..=32`
  /// - [`ParamsError::PolynomialTooWide`], [`ParamsError::InitialTooWide`],
  ///   [`ParamsError::XorOutTooWide`] if a value has bits above `width`
  pub const fn validate(&self) -> Result<(), ParamsError> {
    if self.width < MIN_WIDTH || self.width > MAX_WIDTH {
      return Err(ParamsError::UnsupportedWidth(self.width));
    }
    let mask = self.mask();
    if self.polynomial & !mask != 0 {
      return Err(ParamsError::PolynomialTooWide);
    }
    if self.initial & !mask != 0 {
      return Err(ParamsError::InitialTooWide);
    }
    if self.xor_out & !mask != 0 {
      return Err(ParamsError::XorOutTooWide);
    }
    Ok(())
  }
}

/// A catalogue entry: parameters plus the published check value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Algorithm {
  /// Catalogue name (e.g. `"CRC-16/X-25"`).
  pub name: &'static str,
  /// Parameters of the algorithm.
  pub params: CrcParams,
  /// CRC of the ASCII bytes `"123456789"`.
  pub check: u32,
}

/// Named algorithms with their check values.
pub const CATALOGUE: &[Algorithm] = &[
  Algorithm { name: "CRC-8/SMBUS", params: CrcParams::CRC8_SMBUS, check: 0xF4 },
  Algorithm { name: "CRC-8/MAXIM-DOW", params: CrcParams::CRC8_MAXIM_DOW, check: 0xA1 },
  Algorithm { name: "CRC-12/UMTS", params: CrcParams::CRC12_UMTS, check: 0xDAF },
  Algorithm { name: "CRC-16/CCITT-FALSE", params: CrcParams::CRC16_CCITT_FALSE, check: 0x29B1 },
  Algorithm { name: "CRC-16/MCRF4XX", params: CrcParams::CRC16_MCRF4XX, check: 0x6F91 },
  Algorithm { name: "CRC-16/X-25", params: CrcParams::CRC16_X25, check: 0x906E },
  Algorithm { name: "CRC-16/KERMIT", params: CrcParams::CRC16_KERMIT, check: 0x2189 },
  Algorithm { name: "CRC-16/XMODEM", params: CrcParams::CRC16_XMODEM, check: 0x31C3 },
  Algorithm { name: "CRC-16/ARC", params: CrcParams::CRC16_ARC, check: 0xBB3D },
  Algorithm { name: "CRC-16/MODBUS", params: CrcParams::CRC16_MODBUS, check: 0x4B37 },
  Algorithm { name: "CRC-24/OPENPGP", params: CrcParams::CRC24_OPENPGP, check: 0x21_CF02 },
  Algorithm { name: "CRC-32/ISO-HDLC", params: CrcParams::CRC32_ISO_HDLC, check: 0xCBF4_3926 },
  Algorithm { name: "CRC-32/BZIP2", params: CrcParams::CRC32_BZIP2, check: 0xFC89_1918 },
  Algorithm { name: "CRC-32/MPEG-2", params: CrcParams::CRC32_MPEG2, check: 0x0376_E6E7 },
  Algorithm { name: "CRC-32/ISCSI", params: CrcParams::CRC32_ISCSI, check: 0xE306_9283 },
];

/// Look up a catalogue entry by name, ignoring ASCII case.
#[must_use]
pub fn find(name: &str) -> Option<&'static Algorithm> {
  CATALOGUE.iter().find(|a| a.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_crc32_polynomial_reflected() {
    assert_eq!(CrcParams::CRC32_ISO_HDLC.polynomial_reflected(), 0xEDB8_8320);
    assert_eq!(CrcParams::CRC32_ISCSI.polynomial_reflected(), 0x82F6_3B78);
  }

  #[test]
  fn test_crc16_polynomial_reflected() {
    assert_eq!(CrcParams::CRC16_MCRF4XX.polynomial_reflected(), 0x8408);
  }

  #[test]
  fn test_mask_and_top_bit() {
    assert_eq!(CrcParams::CRC8_SMBUS.mask(), 0xFF);
    assert_eq!(CrcParams::CRC12_UMTS.mask(), 0xFFF);
    assert_eq!(CrcParams::CRC32_ISO_HDLC.mask(), u32::MAX);
    assert_eq!(CrcParams::CRC12_UMTS.top_bit(), 0x800);
    assert_eq!(CrcParams::CRC32_ISO_HDLC.top_bit(), 0x8000_0000);
  }

  #[test]
  fn test_catalogue_validates() {
    for algo in CATALOGUE {
      assert_eq!(algo.params.validate(), Ok(()), "{}", algo.name);
    }
  }

  #[test]
  fn test_validate_rejects_width() {
    let mut p = CrcParams::CRC16_X25;
    p.width = 7;
    assert_eq!(p.validate(), Err(ParamsError::UnsupportedWidth(7)));
    p.width = 33;
    assert_eq!(p.validate(), Err(ParamsError::UnsupportedWidth(33)));
    p.width = 0;
    assert_eq!(p.validate(), Err(ParamsError::UnsupportedWidth(0)));
  }

  #[test]
  fn test_validate_rejects_wide_values() {
    let base = CrcParams::CRC16_CCITT_FALSE;
    let p = CrcParams { polynomial: 0x1_1021, ..base };
    assert_eq!(p.validate(), Err(ParamsError::PolynomialTooWide));
    let p = CrcParams { initial: 0x1_FFFF, ..base };
    assert_eq!(p.validate(), Err(ParamsError::InitialTooWide));
    let p = CrcParams { xor_out: 0x1_0000, ..base };
    assert_eq!(p.validate(), Err(ParamsError::XorOutTooWide));
  }

  #[test]
  fn test_find_is_case_insensitive() {
    let algo = find("crc-16/x-25").expect("X-25 is catalogued");
    assert_eq!(algo.params, CrcParams::CRC16_X25);
    assert!(find("CRC-64/XZ").is_none());
  }
}
