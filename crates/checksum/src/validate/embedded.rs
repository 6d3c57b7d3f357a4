//! Two-byte big-endian embedded CRC-16.

use std::{
  fs::{self, File},
  io::{self, Read},
  path::Path,
  vec::Vec,
};

use crate::{
  crc16::reversed,
  error::{Crc16Error, ValidateError},
};

/// Size of the embedded checksum prefix.
pub const EMBEDDED_CRC_LEN: usize = 2;

/// Split `buffer` into its embedded checksum and the bytes it covers.
///
/// Returns `None` if `buffer` is shorter than [`EMBEDDED_CRC_LEN`].
#[must_use]
pub fn split_embedded(buffer: &[u8]) -> Option<(u16, &[u8])> {
  let (crc, payload) = buffer.split_first_chunk::<EMBEDDED_CRC_LEN>()?;
  Some((u16::from_be_bytes(*crc), payload))
}

/// Check the embedded CRC-16 of an in-memory buffer.
///
/// # Errors
///
/// - [`Crc16Error::TooShort`] if there is no room for the checksum
/// - [`Crc16Error::Mismatch`] if the checksum disagrees with the payload
pub fn verify_embedded_crc16(buffer: &[u8]) -> Result<(), Crc16Error> {
  let (expected, payload) = split_embedded(buffer).ok_or(Crc16Error::TooShort(buffer.len()))?;
  let computed = reversed::raw(payload);
  if computed == expected {
    Ok(())
  } else {
    Err(Crc16Error::Mismatch { expected, computed })
  }
}

/// Prefix `payload` with its big-endian CRC-16, producing a buffer that
/// [`verify_embedded_crc16`] accepts.
#[must_use]
pub fn embed_crc16(payload: &[u8]) -> Vec<u8> {
  let mut out = Vec::with_capacity(payload.len() + EMBEDDED_CRC_LEN);
  out.extend_from_slice(&reversed::raw(payload).to_be_bytes());
  out.extend_from_slice(payload);
  out
}

/// Write `payload` to `path` with its embedded CRC-16 prefix.
///
/// # Errors
///
/// Propagates any I/O error from creating or writing the file.
pub fn write_with_crc16(path: impl AsRef<Path>, payload: &[u8]) -> io::Result<()> {
  fs::write(path, embed_crc16(payload))
}

/// Validate the embedded CRC-16 of the first `expected_size` bytes of a file.
///
/// Reads at most `expected_size` bytes; a shorter file is checked as-is.
/// Returns `Ok(true)` on a match and `Ok(false)` on a mismatch.
///
/// # Errors
///
/// - [`ValidateError::Io`] if the file cannot be opened or read
/// - [`ValidateError::TooShort`] if fewer than two bytes were read
pub fn validate_file_crc16(path: impl AsRef<Path>, expected_size: usize) -> Result<bool, ValidateError> {
  let path = path.as_ref();
  let io_err = |source| ValidateError::Io {
    path: path.to_path_buf(),
    source,
  };

  let file = File::open(path).map_err(io_err)?;
  let limit = u64::try_from(expected_size).unwrap_or(u64::MAX);
  let mut buffer = Vec::new();
  file.take(limit).read_to_end(&mut buffer).map_err(io_err)?;

  match verify_embedded_crc16(&buffer) {
    Ok(()) => {
      log::debug!("{}: embedded CRC-16 matches over {} bytes", path.display(), buffer.len());
      Ok(true)
    }
    Err(Crc16Error::Mismatch { expected, computed }) => {
      log::warn!(
        "{}: embedded CRC-16 {expected:#06x} does not match computed {computed:#06x}",
        path.display()
      );
      Ok(false)
    }
    Err(Crc16Error::TooShort(len)) => Err(ValidateError::TooShort {
      path: path.to_path_buf(),
      len,
    }),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_split_embedded() {
    assert_eq!(split_embedded(&[0x12, 0x34, 0xAA]), Some((0x1234, &[0xAA][..])));
    assert_eq!(split_embedded(&[0x12, 0x34]), Some((0x1234, &[][..])));
    assert_eq!(split_embedded(&[0x12]), None);
  }

  #[test]
  fn test_embed_then_verify() {
    for payload in [&b""[..], b"x", b"123456789", &[0u8; 1024]] {
      let framed = embed_crc16(payload);
      assert_eq!(framed.len(), payload.len() + 2);
      assert_eq!(verify_embedded_crc16(&framed), Ok(()));
    }
  }

  #[test]
  fn test_check_value_layout() {
    let framed = embed_crc16(b"123456789");
    assert_eq!(&framed[..2], &[0x6F, 0x91]);
  }

  #[test]
  fn test_detects_corruption() {
    let mut framed = embed_crc16(b"123456789");
    framed[5] ^= 0x01;
    assert!(matches!(
      verify_embedded_crc16(&framed),
      Err(Crc16Error::Mismatch { expected: 0x6F91, .. })
    ));
  }

  #[test]
  fn test_too_short() {
    assert_eq!(verify_embedded_crc16(&[0x01]), Err(Crc16Error::TooShort(1)));
    assert_eq!(verify_embedded_crc16(&[]), Err(Crc16Error::TooShort(0)));
  }
}
