//! Firmware image CRC-32.

use std::{fs, path::Path};

use crate::{bitwise::crc32, error::FirmwareError};

/// Header geometry of a firmware image.
///
/// The header is never covered by the CRC. Its version byte must match
/// [`version`](Self::version) before the payload is trusted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FirmwareLayout {
  /// Bytes skipped before the checksummed payload.
  pub header_len: usize,
  /// Offset of the version byte within the header.
  pub version_offset: usize,
  /// Required version byte value.
  pub version: u8,
  /// CRC-32 polynomial in normal form.
  pub polynomial: u32,
}

impl FirmwareLayout {
  /// Version 1 layout: 19-byte header, version byte at offset 2.
  pub const V1: Self = Self {
    header_len: 19,
    version_offset: 2,
    version: 0x01,
    polynomial: crc32::POLYNOMIAL,
  };
}

impl Default for FirmwareLayout {
  #[inline]
  fn default() -> Self {
    Self::V1
  }
}

/// A firmware image split into header and payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FirmwareImage<'a> {
  header: &'a [u8],
  payload: &'a [u8],
  version: u8,
  polynomial: u32,
}

impl<'a> FirmwareImage<'a> {
  /// Split `bytes` according to `layout`, checking the version byte.
  ///
  /// # Errors
  ///
  /// - [`FirmwareError::TooShort`] if `bytes` cannot hold the header
  /// - [`FirmwareError::UnsupportedVersion`] if the version byte is wrong
  pub fn parse(bytes: &'a [u8], layout: &FirmwareLayout) -> Result<Self, FirmwareError> {
    let too_short = || FirmwareError::TooShort {
      len: bytes.len(),
      header_len: layout.header_len,
    };
    let version = *bytes.get(layout.version_offset).ok_or_else(too_short)?;
    if version != layout.version {
      return Err(FirmwareError::UnsupportedVersion {
        found: version,
        expected: layout.version,
      });
    }
    let (header, payload) = bytes.split_at_checked(layout.header_len).ok_or_else(too_short)?;
    Ok(Self {
      header,
      payload,
      version,
      polynomial: layout.polynomial,
    })
  }

  /// Header bytes, version byte included.
  #[inline]
  #[must_use]
  pub const fn header(&self) -> &'a [u8] {
    self.header
  }

  /// Bytes covered by the CRC.
  #[inline]
  #[must_use]
  pub const fn payload(&self) -> &'a [u8] {
    self.payload
  }

  /// Header version byte.
  #[inline]
  #[must_use]
  pub const fn version(&self) -> u8 {
    self.version
  }

  /// CRC-32 of the payload.
  #[inline]
  #[must_use]
  pub fn crc32(&self) -> u32 {
    crc32::compute(self.polynomial, self.payload)
  }
}

/// CRC-32 of an in-memory firmware image.
///
/// # Errors
///
/// See [`FirmwareImage::parse`].
pub fn firmware_crc32(bytes: &[u8], layout: &FirmwareLayout) -> Result<u32, FirmwareError> {
  FirmwareImage::parse(bytes, layout).map(|image| image.crc32())
}

/// CRC-32 of a version 1 firmware image on disk.
///
/// # Errors
///
/// - [`FirmwareError::NotFound`] if `path` does not exist
/// - [`FirmwareError::Io`] for any other read failure
/// - the errors of [`FirmwareImage::parse`]
pub fn compute_firmware_crc32(path: impl AsRef<Path>) -> Result<u32, FirmwareError> {
  compute_firmware_crc32_with(path, &FirmwareLayout::V1)
}

/// [`compute_firmware_crc32`] with a caller-supplied layout.
///
/// # Errors
///
/// As [`compute_firmware_crc32`].
pub fn compute_firmware_crc32_with(path: impl AsRef<Path>, layout: &FirmwareLayout) -> Result<u32, FirmwareError> {
  let path = path.as_ref();
  let bytes = fs::read(path).map_err(|source| FirmwareError::from_io(path.to_path_buf(), source))?;
  match firmware_crc32(&bytes, layout) {
    Ok(crc) => {
      log::debug!(
        "{}: firmware CRC-32 {crc:#010x} over {} payload bytes",
        path.display(),
        bytes.len().saturating_sub(layout.header_len)
      );
      Ok(crc)
    }
    Err(err) => {
      log::warn!("{}: {err}", path.display());
      Err(err)
    }
  }
}

#[cfg(test)]
mod tests {
  use std::vec::Vec;

  use super::*;

  fn image(version: u8, payload: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0xA5; 19];
    bytes[2] = version;
    bytes.extend_from_slice(payload);
    bytes
  }

  #[test]
  fn test_payload_check_value() {
    let bytes = image(0x01, b"123456789");
    assert_eq!(firmware_crc32(&bytes, &FirmwareLayout::V1).ok(), Some(0xCBF4_3926));
  }

  #[test]
  fn test_header_is_not_covered() {
    let mut a = image(0x01, b"payload");
    let b = image(0x01, b"payload");
    a[0] = 0x00;
    a[18] = 0xFF;
    assert_eq!(
      firmware_crc32(&a, &FirmwareLayout::V1).ok(),
      firmware_crc32(&b, &FirmwareLayout::V1).ok()
    );
    assert!(firmware_crc32(&a, &FirmwareLayout::V1).is_ok());
  }

  #[test]
  fn test_header_only_image() {
    let bytes = image(0x01, b"");
    assert_eq!(firmware_crc32(&bytes, &FirmwareLayout::V1).ok(), Some(0));
  }

  #[test]
  fn test_wrong_version() {
    let bytes = image(0x02, b"123456789");
    assert!(matches!(
      firmware_crc32(&bytes, &FirmwareLayout::V1),
      Err(FirmwareError::UnsupportedVersion {
        found: 0x02,
        expected: 0x01
      })
    ));
  }

  #[test]
  fn test_truncated_header() {
    assert!(matches!(
      firmware_crc32(&[0x00, 0x00], &FirmwareLayout::V1),
      Err(FirmwareError::TooShort { len: 2, header_len: 19 })
    ));
    assert!(matches!(
      firmware_crc32(&[0x00, 0x00, 0x01, 0x00], &FirmwareLayout::V1),
      Err(FirmwareError::TooShort { len: 4, header_len: 19 })
    ));
  }

  #[test]
  fn test_image_accessors() {
    let bytes = image(0x01, b"abc");
    let parsed = FirmwareImage::parse(&bytes, &FirmwareLayout::default()).unwrap();
    assert_eq!(parsed.header().len(), 19);
    assert_eq!(parsed.payload(), b"abc");
    assert_eq!(parsed.version(), 0x01);
  }

  #[test]
  fn test_custom_layout() {
    let layout = FirmwareLayout {
      header_len: 4,
      version_offset: 0,
      version: 0x07,
      polynomial: 0x1EDC_6F41,
    };
    let mut bytes = vec![0x07, 0, 0, 0];
    bytes.extend_from_slice(b"123456789");
    assert_eq!(firmware_crc32(&bytes, &layout).ok(), Some(0xE306_9283));
  }
}
