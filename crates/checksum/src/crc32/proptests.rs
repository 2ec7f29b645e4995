extern crate std;

use crc_fast::CrcAlgorithm;
use proptest::prelude::*;

use super::*;
use crate::{reference::crc32_bitwise, tables::CRC32_REFLECTED_POLYNOMIAL};

fn preset(params: Crc32Params, data: &[u8]) -> u32 {
  let mut h = Crc32::with_params(params).unwrap();
  h.update(data);
  h.value()
}

proptest! {
  #[test]
  fn slicing_engines_match_bytewise(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let bytewise = Crc32Bytewise::compute(&data);
    prop_assert_eq!(Crc32Slice8::compute(&data), bytewise);
    prop_assert_eq!(Crc32Slice16::compute(&data), bytewise);
    prop_assert_eq!(Crc32::compute(&data), bytewise);
  }

  #[test]
  fn bytewise_matches_bitwise_reference(data in proptest::collection::vec(any::<u8>(), 0..=1024), seed in any::<u32>()) {
    let expected = !crc32_bitwise(CRC32_REFLECTED_POLYNOMIAL, seed, &data);
    prop_assert_eq!(Crc32Bytewise::compute_with_seed(seed, &data), expected);
    prop_assert_eq!(Crc32Slice16::compute_with_seed(seed, &data), expected);
  }

  #[test]
  fn resume_matches_oneshot(data in proptest::collection::vec(any::<u8>(), 0..=2048), split in any::<usize>()) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let mut resumed = Crc32Slice8::resume(Crc32Slice8::compute(a));
    resumed.update(b);
    prop_assert_eq!(resumed.value(), Crc32Slice8::compute(&data));
  }

  // ─────────────────────────────────────────────────────────────────────────────
  // Cross-validation against crc-fast-rust
  // ─────────────────────────────────────────────────────────────────────────────

  #[test]
  fn iso_hdlc_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, &data) as u32;
    prop_assert_eq!(preset(Crc32Params::ISO_HDLC, &data), reference);
    prop_assert_eq!(Crc32Slice16::compute(&data), reference);
  }

  #[test]
  fn mpeg2_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32Mpeg2, &data) as u32;
    prop_assert_eq!(preset(Crc32Params::MPEG_2, &data), reference);
  }

  #[test]
  fn bzip2_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32Bzip2, &data) as u32;
    prop_assert_eq!(preset(Crc32Params::BZIP2, &data), reference);
  }

  #[test]
  fn jamcrc_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32Jamcrc, &data) as u32;
    prop_assert_eq!(preset(Crc32Params::JAMCRC, &data), reference);
  }

  #[test]
  fn castagnoli_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32Iscsi, &data) as u32;
    prop_assert_eq!(preset(Crc32Params::CASTAGNOLI, &data), reference);
  }

  #[test]
  fn streaming_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096), chunk in 1usize..=257) {
    let mut ours = Crc32Slice16::new();
    let mut reference = crc_fast::Digest::new(CrcAlgorithm::Crc32IsoHdlc);

    for part in data.chunks(chunk) {
      ours.update(part);
      reference.update(part);
    }

    prop_assert_eq!(ours.value(), reference.finalize() as u32);
  }

  #[test]
  fn normal_streaming_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096), chunk in 1usize..=257) {
    let mut ours = Crc32::with_params(Crc32Params::BZIP2).unwrap();
    let mut reference = crc_fast::Digest::new(CrcAlgorithm::Crc32Bzip2);

    for part in data.chunks(chunk) {
      ours.update(part);
      reference.update(part);
    }

    prop_assert_eq!(ours.value(), reference.finalize() as u32);
  }
}
