//! File and firmware image integrity checks.
//!
//! Two formats are understood:
//!
//! - **Embedded CRC-16**: the first two bytes of a file are the big-endian
//!   CRC-16/MCRF4XX (reversed-table CCITT, no final XOR) of everything after
//!   them. See [`validate_file_crc16`] and [`embed_crc16`].
//! - **Firmware image**: a fixed header whose version byte selects the
//!   layout, followed by a payload covered by CRC-32/ISO-HDLC. See
//!   [`compute_firmware_crc32`] and [`FirmwareLayout`].
//!
//! All reads are blocking and load the whole file (or the requested prefix)
//! into memory before computing anything.

mod embedded;
mod firmware;

pub use embedded::{
  EMBEDDED_CRC_LEN, embed_crc16, split_embedded, validate_file_crc16, verify_embedded_crc16, write_with_crc16,
};
pub use firmware::{FirmwareImage, FirmwareLayout, compute_firmware_crc32, compute_firmware_crc32_with, firmware_crc32};
