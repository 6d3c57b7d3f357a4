//! CRC checksums for firmware and file integrity.
//!
//! This crate provides a parameterized table-driven CRC engine, the fixed
//! CRC-16 and CRC-32 configurations used by existing consumers, and
//! validators for files that carry their own checksum.
//!
//! # Algorithms
//!
//! | Type | Polynomial | Output | Check | Use Cases |
//! |------|------------|--------|-------|-----------|
//! | [`Crc16Mcrf4xx`] | 0x1021 (reflected) | `u16` | 0x6F91 | Embedded file checksum |
//! | [`Crc16X25`] | 0x1021 (reflected) | `u16` | 0x906E | HDLC, X.25 |
//! | [`Crc16CcittFalse`] | 0x1021 | `u16` | 0x29B1 | 16-bit protocol checksums |
//! | [`Crc32IsoHdlc`] | 0x04C11DB7 | `u32` | 0xCBF43926 | Firmware images, zip, PNG |
//! | [`Crc`] | any, width 8..=32 | `u32` | see [`CATALOGUE`] | Everything else |
//!
//! # Example
//!
//! ```rust
//! use fwcrc::{Crc, Crc16X25, CrcParams};
//!
//! // Fixed configuration
//! assert_eq!(Crc16X25::checksum(b"123456789"), 0x906E);
//!
//! // Streaming
//! let mut hasher = Crc16X25::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), 0x906E);
//!
//! // Parameterized engine
//! let modbus = Crc::new(CrcParams::CRC16_MODBUS)?;
//! assert_eq!(modbus.checksum(b"123456789"), 0x4B37);
//! # Ok::<(), fwcrc::ParamsError>(())
//! ```
//!
//! # no_std Support
//!
//! Everything except [`validate`] is `no_std`. Runtime engines
//! ([`Crc::new`]) need `alloc`; the named engines in [`engine`] and
//! [`parameterized_crc`] do not.
//!
//! ```toml
//! [dependencies]
//! fwcrc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

pub mod bitwise;
pub mod constants;
pub mod crc16;
mod crc32;
pub mod engine;
pub mod error;
pub mod legacy;
pub mod params;
pub mod reflect;
pub mod selftest;
pub mod table;
#[cfg(feature = "std")]
pub mod validate;

pub use crc16::{Crc16CcittFalse, Crc16Mcrf4xx, Crc16X25};
pub use crc32::Crc32IsoHdlc;
pub use engine::{Crc, Digest, parameterized_crc};
#[cfg(feature = "std")]
pub use error::{Crc16Error, FirmwareError, ValidateError};
pub use error::{Crc32Error, ParamsError};
pub use params::{Algorithm, CATALOGUE, CrcParams};
pub use selftest::{SelfTestFailure, self_test};
pub use table::CrcTable;
// Re-export traits for convenience
pub use traits::Checksum;
