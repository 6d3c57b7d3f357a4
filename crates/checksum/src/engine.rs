//! Parameterized table-driven CRC engine.
//!
//! [`Crc`] pairs a validated [`CrcParams`] with its [`CrcTable`] and computes
//! checksums with the classic byte-at-a-time algorithm:
//!
//! ```text
//! reg = reflect_in ? reflect(initial, width) : initial
//! for byte in data:
//!   reflect_in:  reg = (reg >> 8) ^ T[(reg ^ byte) & 0xFF]
//!   otherwise:   reg = (reg << 8) ^ T[((reg >> (width - 8)) ^ byte) & 0xFF]
//! if reflect_out != reflect_in: reg = reflect(reg, width)
//! return (reg ^ xor_out) & mask(width)
//! ```
//!
//! Tables are never regenerated for a configuration that already has one:
//! the named engines below point at compile-time tables, and cloning a
//! runtime engine shares its table through an `Arc`.

#[cfg(feature = "alloc")]
use alloc::sync::Arc;

use crate::{error::ParamsError, params::CrcParams, reflect::reflect_register, table::CrcTable};

/// How an engine holds its table.
#[derive(Clone, Debug)]
enum TableRef {
  Static(&'static CrcTable),
  #[cfg(feature = "alloc")]
  Shared(Arc<CrcTable>),
}

impl TableRef {
  #[inline]
  fn get(&self) -> &CrcTable {
    match self {
      Self::Static(table) => table,
      #[cfg(feature = "alloc")]
      Self::Shared(table) => table,
    }
  }
}

/// A CRC algorithm ready to compute checksums.
///
/// # Example
///
/// ```
/// use fwcrc::{Crc, CrcParams};
///
/// let crc = Crc::new(CrcParams::CRC16_X25)?;
/// assert_eq!(crc.checksum(b"123456789"), 0x906E);
///
/// let mut digest = crc.digest();
/// digest.update(b"1234");
/// digest.update(b"56789");
/// assert_eq!(digest.finalize(), 0x906E);
/// # Ok::<(), fwcrc::ParamsError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Crc {
  params: CrcParams,
  table: TableRef,
}

impl Crc {
  /// Validate `params` and generate their table.
  ///
  /// # Errors
  ///
  /// Returns a [`ParamsError`] if `params` fail [`CrcParams::validate`].
  #[cfg(feature = "alloc")]
  pub fn new(params: CrcParams) -> Result<Self, ParamsError> {
    params.validate()?;
    log::trace!(
      "generating CRC table: width={} poly={:#x} reflect_in={}",
      params.width,
      params.polynomial,
      params.reflect_in
    );
    Ok(Self {
      params,
      table: TableRef::Shared(Arc::new(CrcTable::generate(&params))),
    })
  }

  /// Build an engine for `params` around an existing shared table.
  ///
  /// # Errors
  ///
  /// Returns a [`ParamsError`] if `params` fail validation, or
  /// [`ParamsError::TableMismatch`] if `table` was generated from different
  /// parameters.
  #[cfg(feature = "alloc")]
  pub fn with_table(params: CrcParams, table: Arc<CrcTable>) -> Result<Self, ParamsError> {
    params.validate()?;
    check_table(&params, &table)?;
    Ok(Self {
      params,
      table: TableRef::Shared(table),
    })
  }

  /// Build an engine around a `'static` table without allocating.
  ///
  /// # Errors
  ///
  /// Same as [`Crc::with_table`].
  pub fn from_static(params: CrcParams, table: &'static CrcTable) -> Result<Self, ParamsError> {
    params.validate()?;
    check_table(&params, table)?;
    Ok(Self {
      params,
      table: TableRef::Static(table),
    })
  }

  /// Compile-time constructor for the named engines in this module.
  const fn from_static_unchecked(params: CrcParams, table: &'static CrcTable) -> Self {
    Self {
      params,
      table: TableRef::Static(table),
    }
  }

  /// Look up a catalogue algorithm by name and build its engine.
  ///
  /// Returns `None` for names not in [`CATALOGUE`](crate::params::CATALOGUE).
  #[cfg(feature = "alloc")]
  #[must_use]
  pub fn from_catalogue(name: &str) -> Option<Self> {
    let algo = crate::params::find(name)?;
    Self::new(algo.params).ok()
  }

  /// The parameters this engine computes.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  /// The lookup table in use.
  #[inline]
  #[must_use]
  pub fn table(&self) -> &CrcTable {
    self.table.get()
  }

  /// Share the table with another engine, if it is heap-allocated.
  #[cfg(feature = "alloc")]
  #[must_use]
  pub fn shared_table(&self) -> Option<Arc<CrcTable>> {
    match &self.table {
      TableRef::Static(_) => None,
      TableRef::Shared(table) => Some(Arc::clone(table)),
    }
  }

  /// Compute the CRC of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u32 {
    let reg = update(&self.params, self.table(), init(&self.params), data);
    finalize(&self.params, reg)
  }

  /// CRC of the ASCII bytes `"123456789"`.
  #[must_use]
  pub fn check(&self) -> u32 {
    self.checksum(b"123456789")
  }

  /// Start a streaming computation.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> Digest<'_> {
    Digest {
      crc: self,
      reg: init(&self.params),
    }
  }
}

/// Streaming computation over one [`Crc`] engine.
///
/// The register lives only as long as the digest.
#[derive(Clone, Debug)]
pub struct Digest<'a> {
  crc: &'a Crc,
  reg: u32,
}

impl Digest<'_> {
  /// Feed more bytes.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.reg = update(&self.crc.params, self.crc.table(), self.reg, data);
  }

  /// CRC of everything fed so far. Does not consume the digest.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> u32 {
    finalize(&self.crc.params, self.reg)
  }

  /// Forget everything fed so far.
  #[inline]
  pub fn reset(&mut self) {
    self.reg = init(&self.crc.params);
  }
}

/// Compute a CRC for arbitrary parameters without keeping an engine.
///
/// The table is generated on the stack for this one call.
///
/// # Errors
///
/// Returns a [`ParamsError`] if `params` fail [`CrcParams::validate`].
pub fn parameterized_crc(params: &CrcParams, data: &[u8]) -> Result<u32, ParamsError> {
  params.validate()?;
  let table = CrcTable::generate(params);
  let reg = update(params, &table, init(params), data);
  Ok(finalize(params, reg))
}

/// Seed the register.
#[inline]
const fn init(params: &CrcParams) -> u32 {
  if params.reflect_in {
    reflect_register(params.initial, params.width)
  } else {
    params.initial
  }
}

/// Mix `data` into `reg`.
#[inline]
fn update(params: &CrcParams, table: &CrcTable, mut reg: u32, data: &[u8]) -> u32 {
  if params.reflect_in {
    for &byte in data {
      reg = (reg >> 8) ^ table.get((reg as u8) ^ byte);
    }
  } else {
    let shift = params.width - 8;
    let mask = params.mask();
    for &byte in data {
      reg = ((reg << 8) ^ table.get(((reg >> shift) as u8) ^ byte)) & mask;
    }
  }
  reg
}

/// Apply output reflection, final XOR, and the width mask.
#[inline]
const fn finalize(params: &CrcParams, mut reg: u32) -> u32 {
  if params.reflect_out != params.reflect_in {
    reg = reflect_register(reg, params.width);
  }
  (reg ^ params.xor_out) & params.mask()
}

fn check_table(params: &CrcParams, table: &CrcTable) -> Result<(), ParamsError> {
  let matches = table
    .entries()
    .iter()
    .zip(0..=u8::MAX)
    .all(|(&entry, i)| entry == crate::table::table_entry(params, i));
  if matches { Ok(()) } else { Err(ParamsError::TableMismatch) }
}

static CRC16_CCITT_FALSE_TABLE: CrcTable = CrcTable::generate(&CrcParams::CRC16_CCITT_FALSE);
static CRC16_MCRF4XX_TABLE: CrcTable = CrcTable::generate(&CrcParams::CRC16_MCRF4XX);
static CRC32_ISO_HDLC_TABLE: CrcTable = CrcTable::generate(&CrcParams::CRC32_ISO_HDLC);

/// CRC-16/CCITT-FALSE engine (forward CCITT, seed 0xFFFF).
pub static CRC16_CCITT_FALSE: Crc = Crc::from_static_unchecked(CrcParams::CRC16_CCITT_FALSE, &CRC16_CCITT_FALSE_TABLE);

/// CRC-16/MCRF4XX engine (reflected CCITT, seed 0xFFFF, no final XOR).
pub static CRC16_MCRF4XX: Crc = Crc::from_static_unchecked(CrcParams::CRC16_MCRF4XX, &CRC16_MCRF4XX_TABLE);

/// CRC-16/X-25 engine. Shares the MCRF4XX table; only the final XOR differs.
pub static CRC16_X25: Crc = Crc::from_static_unchecked(CrcParams::CRC16_X25, &CRC16_MCRF4XX_TABLE);

/// CRC-32/ISO-HDLC engine.
pub static CRC32_ISO_HDLC: Crc = Crc::from_static_unchecked(CrcParams::CRC32_ISO_HDLC, &CRC32_ISO_HDLC_TABLE);
