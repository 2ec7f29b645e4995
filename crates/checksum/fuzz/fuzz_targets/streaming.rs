//! Fuzz target for the streaming API.
//!
//! Tests that arbitrary sequences of update calls produce correct results.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Checksum, Crc32, Crc32Bytewise, Crc32Slice8, Crc32Slice16, Crc64, Elf32};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  check_streaming::<Crc32>("crc32", data, &input.chunk_sizes);
  check_streaming::<Crc32Bytewise>("crc32/bytewise", data, &input.chunk_sizes);
  check_streaming::<Crc32Slice8>("crc32/slice8", data, &input.chunk_sizes);
  check_streaming::<Crc32Slice16>("crc32/slice16", data, &input.chunk_sizes);
  check_streaming::<Crc64>("crc64", data, &input.chunk_sizes);
  check_streaming::<Elf32>("elf32", data, &input.chunk_sizes);
});

fn check_streaming<C: Checksum + Default>(name: &str, data: &[u8], chunk_sizes: &[usize]) {
  let expected = C::checksum(data);

  let mut hasher = C::default();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = offset.saturating_add(chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;

    // Finalizing mid-stream must not disturb the accumulator.
    let _ = hasher.finalize();
  }

  assert_eq!(hasher.value(), expected, "{name} streaming mismatch");
}
