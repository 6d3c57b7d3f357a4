//! Internal macros for fixed CRC type generation.
//!
//! Every fixed configuration (CRC-16/MCRF4XX, CRC-16/X-25, ...) is a small
//! register wrapper with identical `Checksum` plumbing; only the register
//! type, the update routine, and the output transform differ.

/// Generate a fixed-configuration CRC type with its `Checksum` implementation.
///
/// This macro creates:
/// - The struct definition with a `state` register
/// - `new()`, `resume()`, `update()`, `finalize()`, `reset()` inherent methods
/// - `Default` and `Checksum` implementations
///
/// # Arguments
///
/// - `name`: catalogue name reported by `Checksum::NAME`
/// - `width`: CRC width in bits
/// - `check`: CRC of `"123456789"`
/// - `init`: register seed
/// - `update`: `fn(state, &[u8]) -> state`
/// - `finalize`: `const fn(state) -> output`
/// - `resume`: `const fn(output) -> state`, the inverse of `finalize`
macro_rules! define_crc_type {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident: $out:ty {
      name: $algo:expr,
      width: $width:expr,
      check: $check:expr,
      init: $init:expr,
      update: $update:path,
      finalize: $finalize:path,
      resume: $resume:path,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Debug)]
    $vis struct $name {
      state: $out,
    }

    impl $name {
      /// Create a hasher in its initial state.
      #[inline]
      #[must_use]
      pub const fn new() -> Self {
        Self { state: $init }
      }

      /// Create a hasher that continues from a previously finalized CRC.
      #[inline]
      #[must_use]
      pub const fn resume(crc: $out) -> Self {
        Self { state: $resume(crc) }
      }

      /// Compute the CRC of `data` in one shot.
      #[inline]
      #[must_use]
      pub fn checksum(data: &[u8]) -> $out {
        $finalize($update($init, data))
      }

      /// Feed more bytes.
      #[inline]
      pub fn update(&mut self, data: &[u8]) {
        self.state = $update(self.state, data);
      }

      /// CRC of everything fed so far.
      #[inline]
      #[must_use]
      pub const fn finalize(&self) -> $out {
        $finalize(self.state)
      }

      /// Return to the initial state.
      #[inline]
      pub fn reset(&mut self) {
        self.state = $init;
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        Self::new()
      }
    }

    impl $crate::Checksum for $name {
      const NAME: &'static str = $algo;
      const WIDTH: u8 = $width;
      type Output = $out;
      const CHECK: $out = $check;

      #[inline]
      fn new() -> Self {
        $name::new()
      }

      #[inline]
      fn with_initial(initial: $out) -> Self {
        $name::resume(initial)
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        $name::update(self, data);
      }

      #[inline]
      fn finalize(&self) -> $out {
        $name::finalize(self)
      }

      #[inline]
      fn reset(&mut self) {
        $name::reset(self);
      }
    }
  };
}
