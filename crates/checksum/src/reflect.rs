//! Bit reflection.
//!
//! "Reflected" means bit-reversed. Table generation and the parameterized
//! engine reflect input seeds, table entries, and final registers over the
//! CRC width; all of them go through [`reflect`].

/// Reverse the low `n` bits of `value`.
///
/// Bit 0 becomes bit `n - 1` and so on. Bits at and above position `n` are
/// ignored and are zero in the result. Total for `0 <= n <= 64`; `n == 0`
/// yields zero, and `n > 64` is clamped to 64.
///
/// ```
/// use fwcrc::reflect::reflect;
///
/// assert_eq!(reflect(0b1011, 4), 0b1101);
/// assert_eq!(reflect(0x04C1_1DB7, 32), 0xEDB8_8320);
/// ```
#[inline]
#[must_use]
pub const fn reflect(value: u64, n: u32) -> u64 {
  if n == 0 {
    return 0;
  }
  let n = if n > 64 { 64 } else { n };
  value.reverse_bits() >> (64 - n)
}

/// Reverse all 8 bits of a byte.
#[inline]
#[must_use]
pub const fn reflect_u8(value: u8) -> u8 {
  value.reverse_bits()
}

/// Reverse all 16 bits of a `u16`.
#[inline]
#[must_use]
pub const fn reflect_u16(value: u16) -> u16 {
  value.reverse_bits()
}

/// Reverse all 32 bits of a `u32`.
#[inline]
#[must_use]
pub const fn reflect_u32(value: u32) -> u32 {
  value.reverse_bits()
}

/// Reverse the low `width` bits of a CRC register.
///
/// Helper for registers held in a `u32`; `width` is at most 32.
#[inline]
#[must_use]
pub(crate) const fn reflect_register(value: u32, width: u8) -> u32 {
  reflect(value as u64, width as u32) as u32
}
