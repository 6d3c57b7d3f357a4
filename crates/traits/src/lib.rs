//! Core checksum traits for fwcrc.
//!
//! This crate provides the trait every fixed CRC configuration conforms to.
//! It is `no_std` compatible and has zero dependencies.
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | Fixed-configuration checksums | CRC-16/X-25, CRC-32/ISO-HDLC |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod checksum;

pub use checksum::Checksum;
