//! CRC-16 variants built on the CCITT polynomial (0x1021).
//!
//! Three variants share the polynomial and the 0xFFFF seed but differ in bit
//! order and final XOR:
//!
//! | Type | Bit order | Final XOR | Check | Computed by |
//! |------|-----------|-----------|-------|-------------|
//! | [`Crc16Mcrf4xx`] | reflected | 0x0000 | 0x6F91 | static reversed table |
//! | [`Crc16X25`] | reflected | 0xFFFF | 0x906E | static reversed table |
//! | [`Crc16CcittFalse`] | forward | 0x0000 | 0x29B1 | bit loop |
//!
//! The reflected pair is what the embedded file checksum uses (raw variant);
//! the forward variant is the 16-bit protocol checksum.
//!
//! # Example
//!
//! ```
//! use fwcrc::{Crc16CcittFalse, Crc16Mcrf4xx, Crc16X25};
//!
//! assert_eq!(Crc16Mcrf4xx::checksum(b"123456789"), 0x6F91);
//! assert_eq!(Crc16X25::checksum(b"123456789"), 0x906E);
//! assert_eq!(Crc16CcittFalse::checksum(b"123456789"), 0x29B1);
//! ```

pub mod reversed;

use crate::{bitwise, constants::crc16_ccitt::XOR_OUT};

/// The register is the output for variants without a final XOR.
const fn identity(crc: u16) -> u16 {
  crc
}

const fn invert(crc: u16) -> u16 {
  crc ^ XOR_OUT
}

define_crc_type! {
  /// CRC-16/MCRF4XX: reflected CCITT through the static reversed table, no final XOR.
  pub struct Crc16Mcrf4xx: u16 {
    name: "CRC-16/MCRF4XX",
    width: 16,
    check: 0x6F91,
    init: reversed::INIT,
    update: reversed::update,
    finalize: identity,
    resume: identity,
  }
}

define_crc_type! {
  /// CRC-16/X-25: reflected CCITT through the static reversed table, final XOR 0xFFFF.
  pub struct Crc16X25: u16 {
    name: "CRC-16/X-25",
    width: 16,
    check: 0x906E,
    init: reversed::INIT,
    update: reversed::update,
    finalize: invert,
    resume: invert,
  }
}

define_crc_type! {
  /// CRC-16/CCITT-FALSE: forward CCITT computed bit by bit.
  pub struct Crc16CcittFalse: u16 {
    name: "CRC-16/CCITT-FALSE",
    width: 16,
    check: 0x29B1,
    init: 0xFFFF,
    update: bitwise::crc16::update,
    finalize: identity,
    resume: identity,
  }
}
