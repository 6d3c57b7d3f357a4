//! Error types.
//!
//! [`ParamsError`] and [`Crc32Error`] are available without `std`. The
//! file-facing errors ([`ValidateError`], [`Crc16Error`], [`FirmwareError`])
//! need `std` and derive their messages with `thiserror`.

use core::fmt;

/// CRC parameters cannot drive the table-driven engine.
///
/// This is a configuration error raised when an engine is constructed, never
/// while a checksum is being computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParamsError {
  /// Width outside `8..=32`.
  UnsupportedWidth(u8),
  /// Polynomial has bits set above the width.
  PolynomialTooWide,
  /// Initial value has bits set above the width.
  InitialTooWide,
  /// Final XOR value has bits set above the width.
  XorOutTooWide,
  /// A supplied lookup table was not generated from these parameters.
  TableMismatch,
}

impl fmt::Display for ParamsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedWidth(w) => write!(f, "unsupported CRC width {w} (expected 8..=32)"),
      Self::PolynomialTooWide => f.write_str("polynomial does not fit in the CRC width"),
      Self::InitialTooWide => f.write_str("initial value does not fit in the CRC width"),
      Self::XorOutTooWide => f.write_str("final XOR value does not fit in the CRC width"),
      Self::TableMismatch => f.write_str("lookup table does not match the CRC parameters"),
    }
  }
}

impl core::error::Error for ParamsError {}

/// The general-purpose CRC-32 routine was handed no buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Crc32Error {
  /// No input buffer was supplied.
  MissingInput,
}

impl fmt::Display for Crc32Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::MissingInput => f.write_str("no input buffer"),
    }
  }
}

impl core::error::Error for Crc32Error {}

#[cfg(feature = "std")]
pub use self::file::{Crc16Error, FirmwareError, ValidateError};

#[cfg(feature = "std")]
mod file {
  use std::{io, path::PathBuf};

  /// Failure of [`validate_file_crc16`](crate::validate::validate_file_crc16).
  ///
  /// A checksum mismatch is not an error; it is reported as `Ok(false)`.
  #[derive(Debug, thiserror::Error)]
  pub enum ValidateError {
    /// The file could not be opened or read.
    #[error("failed to read {}", path.display())]
    Io {
      path: PathBuf,
      #[source]
      source: io::Error,
    },
    /// Fewer than two bytes were available, so there is no embedded checksum.
    #[error("{} holds {len} bytes, too short for an embedded CRC-16", path.display())]
    TooShort { path: PathBuf, len: usize },
  }

  /// Failure of an in-memory embedded CRC-16 check.
  #[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
  pub enum Crc16Error {
    /// Fewer than two bytes.
    #[error("buffer holds {0} bytes, too short for an embedded CRC-16")]
    TooShort(usize),
    /// The embedded checksum disagrees with the payload.
    #[error("embedded CRC-16 {expected:#06x} does not match computed {computed:#06x}")]
    Mismatch { expected: u16, computed: u16 },
  }

  /// Failure of the firmware CRC-32 computation.
  #[derive(Debug, thiserror::Error)]
  pub enum FirmwareError {
    /// The image file does not exist.
    #[error("firmware image {} not found", .0.display())]
    NotFound(PathBuf),
    /// The image file exists but could not be read.
    #[error("failed to read firmware image {}", path.display())]
    Io {
      path: PathBuf,
      #[source]
      source: io::Error,
    },
    /// The image is shorter than its header.
    #[error("firmware image holds {len} bytes, shorter than its {header_len}-byte header")]
    TooShort { len: usize, header_len: usize },
    /// The header version byte is not one this layout understands.
    #[error("unsupported firmware header version {found:#04x} (expected {expected:#04x})")]
    UnsupportedVersion { found: u8, expected: u8 },
  }

  impl FirmwareError {
    /// Build the error for a failed open/read of `path`, mapping
    /// [`io::ErrorKind::NotFound`] to [`FirmwareError::NotFound`].
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
      if source.kind() == io::ErrorKind::NotFound {
        Self::NotFound(path)
      } else {
        Self::Io { path, source }
      }
    }
  }
}
