//! Streaming checksum trait.
//!
//! Every fixed CRC configuration in `fwcrc` implements [`Checksum`], which
//! gives callers one-shot, streaming, and verification entry points with the
//! same shape regardless of width or reflection policy.

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm with a fixed configuration.
///
/// # Usage
///
/// ```rust,ignore
/// use fwcrc::{Checksum, Crc16X25};
///
/// // One-shot
/// let crc = Crc16X25::checksum(b"123456789");
///
/// // Streaming
/// let mut hasher = Crc16X25::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent
/// - `reset()` must restore the hasher to its initial state
/// - `CHECK` must equal `checksum(b"123456789")`
pub trait Checksum: Clone + Default {
  /// Catalogue name of the algorithm (e.g. `"CRC-16/X-25"`).
  const NAME: &'static str;

  /// Width of the checksum in bits.
  const WIDTH: u8;

  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default;

  /// Checksum of the ASCII bytes `"123456789"`.
  const CHECK: Self::Output;

  /// Create a new hasher with the default initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a hasher that continues from a previously finalized value.
  ///
  /// `with_initial(checksum(a))` followed by `update(b)` yields `checksum(a || b)`.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Feed more bytes into the running checksum.
  fn update(&mut self, data: &[u8]);

  /// Feed several non-contiguous buffers, in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything fed so far.
  ///
  /// Does not consume the hasher.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the checksum of `data` in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Returns `true` if `data` checksums to `expected`.
  #[inline]
  #[must_use]
  fn verify(data: &[u8], expected: Self::Output) -> bool {
    Self::checksum(data) == expected
  }

  /// Recompute the catalogue check value and compare it to [`Self::CHECK`].
  #[inline]
  #[must_use]
  fn self_check() -> bool {
    Self::checksum(b"123456789") == Self::CHECK
  }
}
