//! Property-based tests for the CRC routines.
//!
//! These check relationships that must hold for every input: the legacy
//! routines agree with the engine, streaming equals one-shot, and framed
//! buffers verify.

use fwcrc::{
  Checksum, Crc, Crc16CcittFalse, Crc16Mcrf4xx, Crc16X25, Crc32IsoHdlc, CrcParams, engine, legacy,
  reflect::{reflect, reflect_u8, reflect_u16, reflect_u32},
  validate::{embed_crc16, verify_embedded_crc16},
};
use proptest::prelude::*;

/// Generate arbitrary byte vectors up to 8KB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..8192)
}

/// Generate engine parameters the engine accepts.
fn arb_params() -> impl Strategy<Value = CrcParams> {
  (8u8..=32, any::<u32>(), any::<u32>(), any::<bool>(), any::<bool>(), any::<u32>()).prop_map(
    |(width, poly, init, reflect_in, reflect_out, xor_out)| {
      let mask = if width == 32 { u32::MAX } else { (1u32 << width) - 1 };
      CrcParams {
        width,
        // Odd polynomials only, as every real CRC has the x^0 term.
        polynomial: (poly | 1) & mask,
        initial: init & mask,
        reflect_in,
        reflect_out,
        xor_out: xor_out & mask,
      }
    },
  )
}

fn prop_incremental_equals_oneshot<C: Checksum>(data: &[u8], split: usize) -> bool {
  let split = split.min(data.len());
  let (a, b) = data.split_at(split);
  let mut h = C::new();
  h.update(a);
  h.update(b);
  h.finalize() == C::checksum(data)
}

fn prop_resume<C: Checksum>(data: &[u8], split: usize) -> bool {
  let split = split.min(data.len());
  let (a, b) = data.split_at(split);
  let mut h = C::with_initial(C::checksum(a));
  h.update(b);
  h.finalize() == C::checksum(data)
}

proptest! {
  #[test]
  fn crc16_raw_matches_engine(data in arb_data()) {
    prop_assert_eq!(u32::from(legacy::compute_crc16_raw(&data)), engine::CRC16_MCRF4XX.checksum(&data));
  }

  #[test]
  fn crc16_final_is_raw_inverted(data in arb_data()) {
    prop_assert_eq!(legacy::compute_crc16_final(&data), legacy::compute_crc16_raw(&data) ^ 0xFFFF);
  }

  #[test]
  fn crc16_forward_matches_engine(data in arb_data()) {
    prop_assert_eq!(u32::from(legacy::compute_crc16_forward(&data)), engine::CRC16_CCITT_FALSE.checksum(&data));
  }

  #[test]
  fn crc32_matches_engine(data in arb_data()) {
    prop_assert_eq!(
      legacy::compute_crc32(0x04C1_1DB7, Some(data.as_slice())),
      Ok(engine::CRC32_ISO_HDLC.checksum(&data))
    );
  }

  #[test]
  fn incremental_equals_oneshot(data in arb_data(), split in any::<usize>()) {
    prop_assert!(prop_incremental_equals_oneshot::<Crc16Mcrf4xx>(&data, split));
    prop_assert!(prop_incremental_equals_oneshot::<Crc16X25>(&data, split));
    prop_assert!(prop_incremental_equals_oneshot::<Crc16CcittFalse>(&data, split));
    prop_assert!(prop_incremental_equals_oneshot::<Crc32IsoHdlc>(&data, split));
  }

  #[test]
  fn resume_from_finalized(data in arb_data(), split in any::<usize>()) {
    prop_assert!(prop_resume::<Crc16Mcrf4xx>(&data, split));
    prop_assert!(prop_resume::<Crc16X25>(&data, split));
    prop_assert!(prop_resume::<Crc16CcittFalse>(&data, split));
    prop_assert!(prop_resume::<Crc32IsoHdlc>(&data, split));
  }

  #[test]
  fn digest_split_equals_oneshot(params in arb_params(), data in arb_data(), split in any::<usize>()) {
    let crc = Crc::new(params).unwrap();
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);
    let mut digest = crc.digest();
    digest.update(a);
    digest.update(b);
    prop_assert_eq!(digest.finalize(), crc.checksum(&data));
  }

  #[test]
  fn engine_output_fits_width(params in arb_params(), data in arb_data()) {
    let crc = Crc::new(params).unwrap();
    prop_assert_eq!(crc.checksum(&data) & !params.mask(), 0);
  }

  #[test]
  fn engine_matches_stack_table(params in arb_params(), data in arb_data()) {
    let crc = Crc::new(params).unwrap();
    prop_assert_eq!(Ok(crc.checksum(&data)), fwcrc::parameterized_crc(&params, &data));
  }

  #[test]
  fn embedded_crc16_verifies(data in arb_data()) {
    let framed = embed_crc16(&data);
    prop_assert_eq!(verify_embedded_crc16(&framed), Ok(()));
  }

  #[test]
  fn embedded_crc16_detects_single_bit_flip(data in arb_data(), pos in any::<usize>(), bit in 0u8..8) {
    let mut framed = embed_crc16(&data);
    let pos = pos % framed.len();
    framed[pos] ^= 1 << bit;
    prop_assert!(verify_embedded_crc16(&framed).is_err());
  }

  #[test]
  fn reflect_is_involution(x in any::<u64>(), n in 1u32..=64) {
    let masked = if n == 64 { x } else { x & ((1u64 << n) - 1) };
    prop_assert_eq!(reflect(reflect(masked, n), n), masked);
  }

  #[test]
  fn reflect_fixed_widths_agree(x in any::<u32>()) {
    prop_assert_eq!(u64::from(reflect_u32(x)), reflect(u64::from(x), 32));
    prop_assert_eq!(u64::from(reflect_u16(x as u16)), reflect(u64::from(x as u16), 16));
    prop_assert_eq!(u64::from(reflect_u8(x as u8)), reflect(u64::from(x as u8), 8));
  }
}
