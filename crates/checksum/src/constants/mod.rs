//! Precomputed constants for CRC algorithms.
//!
//! Tables here are written out as literals; everything else in the crate
//! generates its tables with [`CrcTable::generate`](crate::table::CrcTable::generate).

pub mod crc16_ccitt;
