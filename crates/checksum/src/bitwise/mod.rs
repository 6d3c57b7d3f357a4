//! Table-less CRC routines.
//!
//! These compute their CRCs one bit at a time with no lookup table. They
//! exist for formats that were specified against a bit loop (16-bit protocol
//! checksums, the firmware CRC-32) and serve as independent references for
//! the table-driven [`Crc`](crate::Crc) engine:
//!
//! | Routine | Equivalent engine parameters |
//! |---------|------------------------------|
//! | [`crc16::forward`] | [`CrcParams::CRC16_CCITT_FALSE`](crate::CrcParams::CRC16_CCITT_FALSE) |
//! | [`crc32::compute`] with 0x04C11DB7 | [`CrcParams::CRC32_ISO_HDLC`](crate::CrcParams::CRC32_ISO_HDLC) |
//!
//! # Algorithm
//!
//! Both loops use branchless polynomial reduction on the register's top bit:
//!
//! ```text
//! for each bit:
//!   mask = 0 - (crc >> (width - 1))   // all zeros or all ones
//!   crc = (crc << 1) ^ (POLYNOMIAL & mask)
//! ```

pub mod crc16;
pub mod crc32;
