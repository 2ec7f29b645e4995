extern crate std;

use crc_fast::CrcAlgorithm;
use proptest::prelude::*;

use super::*;
use crate::reference::crc64_bitwise;

proptest! {
  #[test]
  fn crc64_matches_bitwise_reference(data in proptest::collection::vec(any::<u8>(), 0..=2048), seed in any::<u64>()) {
    prop_assert_eq!(Crc64::compute_iso_with_seed(seed, &data), crc64_bitwise(CRC64_ISO_POLYNOMIAL, seed, &data));
  }

  #[test]
  fn crc64_chaining_passes_value_through(data in proptest::collection::vec(any::<u8>(), 0..=2048), split in any::<usize>()) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);
    let chained = Crc64::compute_iso_with_seed(Crc64::compute_iso(a), b);
    prop_assert_eq!(chained, Crc64::compute_iso(&data));
  }

  // ─────────────────────────────────────────────────────────────────────────────
  // Cross-validation against crc-fast-rust
  // ─────────────────────────────────────────────────────────────────────────────

  // GO-ISO shares the polynomial but seeds and finalizes with all ones.
  #[test]
  fn crc64_matches_crc_fast_go_iso(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let reference = crc_fast::checksum(CrcAlgorithm::Crc64GoIso, &data);
    prop_assert_eq!(!Crc64::compute_iso_with_seed(!0, &data), reference);
  }

  #[test]
  fn crc64_streaming_matches_crc_fast_go_iso(data in proptest::collection::vec(any::<u8>(), 0..=4096), chunk in 1usize..=257) {
    let mut ours = Crc64::iso_with_seed(!0);
    let mut reference = crc_fast::Digest::new(CrcAlgorithm::Crc64GoIso);

    for part in data.chunks(chunk) {
      ours.update(part);
      reference.update(part);
    }

    prop_assert_eq!(!ours.value(), reference.finalize());
  }
}
