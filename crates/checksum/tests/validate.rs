use std::fs;

use fwcrc::{
  FirmwareError, ValidateError,
  validate::{
    FirmwareLayout, compute_firmware_crc32, compute_firmware_crc32_with, embed_crc16, validate_file_crc16,
    write_with_crc16,
  },
};
use tempfile::TempDir;

fn init_logging() {
  let _ = env_logger::builder().is_test(true).try_init();
}

fn firmware(version: u8, payload: &[u8]) -> Vec<u8> {
  let mut bytes = vec![0u8; 19];
  bytes[2] = version;
  bytes.extend_from_slice(payload);
  bytes
}

#[test]
fn validate_round_trip() {
  init_logging();
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("blob.bin");
  write_with_crc16(&path, b"123456789").unwrap();

  assert_eq!(fs::read(&path).unwrap()[..2], [0x6F, 0x91]);
  assert!(validate_file_crc16(&path, 11).unwrap());
}

#[test]
fn validate_is_idempotent() {
  init_logging();
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("blob.bin");
  write_with_crc16(&path, &[0xAB; 500]).unwrap();

  let first = validate_file_crc16(&path, 502).unwrap();
  let second = validate_file_crc16(&path, 502).unwrap();
  assert!(first);
  assert_eq!(first, second);
}

#[test]
fn validate_reports_mismatch_as_false() {
  init_logging();
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("blob.bin");
  let mut framed = embed_crc16(b"firmware payload");
  framed[4] ^= 0x80;
  fs::write(&path, &framed).unwrap();

  assert!(!validate_file_crc16(&path, framed.len()).unwrap());
}

#[test]
fn validate_reads_only_expected_size() {
  init_logging();
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("padded.bin");
  let mut framed = embed_crc16(b"payload");
  let len = framed.len();
  framed.extend_from_slice(&[0xFF; 64]);
  fs::write(&path, &framed).unwrap();

  assert!(validate_file_crc16(&path, len).unwrap());
  assert!(!validate_file_crc16(&path, framed.len()).unwrap());
}

#[test]
fn validate_short_file_is_checked_as_is() {
  init_logging();
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("short.bin");
  write_with_crc16(&path, b"abc").unwrap();

  assert!(validate_file_crc16(&path, 4096).unwrap());
}

#[test]
fn validate_missing_file() {
  init_logging();
  let dir = TempDir::new().unwrap();
  let err = validate_file_crc16(dir.path().join("missing.bin"), 16).unwrap_err();
  assert!(matches!(err, ValidateError::Io { .. }));
}

#[test]
fn validate_too_short_for_checksum() {
  init_logging();
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("one.bin");
  fs::write(&path, [0x42]).unwrap();

  assert!(matches!(validate_file_crc16(&path, 16), Err(ValidateError::TooShort { len: 1, .. })));
  assert!(matches!(validate_file_crc16(&path, 0), Err(ValidateError::TooShort { len: 0, .. })));
}

#[test]
fn firmware_skips_exactly_the_header() {
  init_logging();
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("fw.bin");
  fs::write(&path, firmware(0x01, b"123456789")).unwrap();

  assert_eq!(compute_firmware_crc32(&path).unwrap(), 0xCBF4_3926);
}

#[test]
fn firmware_header_bytes_do_not_matter() {
  init_logging();
  let dir = TempDir::new().unwrap();
  let a = dir.path().join("a.bin");
  let b = dir.path().join("b.bin");
  let mut bytes = firmware(0x01, b"payload");
  fs::write(&a, &bytes).unwrap();
  bytes[0] = 0xEE;
  bytes[18] = 0x77;
  fs::write(&b, &bytes).unwrap();

  assert_eq!(compute_firmware_crc32(&a).unwrap(), compute_firmware_crc32(&b).unwrap());
}

#[test]
fn firmware_unsupported_version() {
  init_logging();
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("fw.bin");
  fs::write(&path, firmware(0x02, b"123456789")).unwrap();

  assert!(matches!(
    compute_firmware_crc32(&path),
    Err(FirmwareError::UnsupportedVersion { found: 0x02, expected: 0x01 })
  ));
}

#[test]
fn firmware_not_found() {
  init_logging();
  let dir = TempDir::new().unwrap();
  assert!(matches!(
    compute_firmware_crc32(dir.path().join("nope.bin")),
    Err(FirmwareError::NotFound(_))
  ));
}

#[test]
fn firmware_truncated() {
  init_logging();
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("fw.bin");
  fs::write(&path, [0x00, 0x00, 0x01, 0x00, 0x00]).unwrap();

  assert!(matches!(
    compute_firmware_crc32(&path),
    Err(FirmwareError::TooShort { len: 5, header_len: 19 })
  ));
}

#[test]
fn firmware_custom_layout() {
  init_logging();
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("fw.bin");
  let mut bytes = vec![0x02, 0xFF, 0xFF, 0xFF];
  bytes.extend_from_slice(b"123456789");
  fs::write(&path, &bytes).unwrap();

  let layout = FirmwareLayout {
    header_len: 4,
    version_offset: 0,
    version: 0x02,
    ..FirmwareLayout::default()
  };
  assert_eq!(compute_firmware_crc32_with(&path, &layout).unwrap(), 0xCBF4_3926);
}
