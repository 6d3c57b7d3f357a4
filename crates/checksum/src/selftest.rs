//! Known-answer self test.
//!
//! Runs every catalogue algorithm, every fixed-configuration type, and every
//! legacy routine over the check input and compares against the published
//! check value. Intended for start-up checks on targets where a miscompiled
//! table would otherwise go unnoticed.

use traits::Checksum;

use crate::{
  Crc16CcittFalse, Crc16Mcrf4xx, Crc16X25, Crc32IsoHdlc,
  engine::{self, CRC16_CCITT_FALSE, CRC16_MCRF4XX, CRC16_X25, CRC32_ISO_HDLC, Crc},
  legacy::LegacyAlgorithm,
  params::CATALOGUE,
};

/// The standard check input.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// A known-answer test that produced the wrong value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelfTestFailure {
  /// Name of the failing algorithm or routine.
  pub name: &'static str,
  /// Published check value.
  pub expected: u32,
  /// Value actually computed.
  pub computed: u32,
}

impl core::fmt::Display for SelfTestFailure {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(
      f,
      "self test failed for {}: expected {:#x}, computed {:#x}",
      self.name, self.expected, self.computed
    )
  }
}

impl core::error::Error for SelfTestFailure {}

fn expect(name: &'static str, expected: u32, computed: u32) -> Result<(), SelfTestFailure> {
  if expected == computed {
    Ok(())
  } else {
    log::error!("{name}: expected {expected:#x}, computed {computed:#x}");
    Err(SelfTestFailure {
      name,
      expected,
      computed,
    })
  }
}

fn expect_type<C>() -> Result<(), SelfTestFailure>
where
  C: Checksum,
  C::Output: Into<u32>,
{
  expect(C::NAME, C::CHECK.into(), C::checksum(CHECK_INPUT).into())
}

fn expect_engine(engine: &Crc, expected: u32) -> Result<(), SelfTestFailure> {
  let name = CATALOGUE
    .iter()
    .find(|a| a.params == *engine.params())
    .map_or("static engine", |a| a.name);
  expect(name, expected, engine.check())
}

/// Run all known-answer tests, stopping at the first failure.
///
/// # Errors
///
/// Returns the first [`SelfTestFailure`] encountered.
pub fn self_test() -> Result<(), SelfTestFailure> {
  for algo in CATALOGUE {
    let computed = engine::parameterized_crc(&algo.params, CHECK_INPUT).unwrap_or(!algo.check);
    expect(algo.name, algo.check, computed)?;
  }

  expect_engine(&CRC16_CCITT_FALSE, 0x29B1)?;
  expect_engine(&CRC16_MCRF4XX, 0x6F91)?;
  expect_engine(&CRC16_X25, 0x906E)?;
  expect_engine(&CRC32_ISO_HDLC, 0xCBF4_3926)?;

  expect_type::<Crc16Mcrf4xx>()?;
  expect_type::<Crc16X25>()?;
  expect_type::<Crc16CcittFalse>()?;
  expect_type::<Crc32IsoHdlc>()?;

  for algo in LegacyAlgorithm::ALL {
    let expected = engine::parameterized_crc(&algo.params(), CHECK_INPUT).unwrap_or(!algo.compute(CHECK_INPUT));
    expect(algo.name(), expected, algo.compute(CHECK_INPUT))?;
  }

  log::debug!("self test passed ({} catalogue algorithms)", CATALOGUE.len());
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_self_test_passes() {
    assert_eq!(self_test(), Ok(()));
  }

  #[test]
  fn test_failure_display() {
    let failure = SelfTestFailure {
      name: "CRC-16/X-25",
      expected: 0x906E,
      computed: 0x6F91,
    };
    assert_eq!(
      std::format!("{failure}"),
      "self test failed for CRC-16/X-25: expected 0x906e, computed 0x6f91"
    );
  }

  #[test]
  fn test_expect_reports_values() {
    assert_eq!(
      expect("x", 1, 2),
      Err(SelfTestFailure {
        name: "x",
        expected: 1,
        computed: 2
      })
    );
  }
}
