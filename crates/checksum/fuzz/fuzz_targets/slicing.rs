//! Differential fuzz target: slice-by-8/16 against the single-table kernel
//! and the bit-at-a-time reference, for arbitrary polynomials and seeds.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Crc32Bytewise, Crc32Slice8, Crc32Slice16, Crc64, reference};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  polynomial: u32,
  seed: u32,
  polynomial64: u64,
  seed64: u64,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let Input { polynomial, seed, polynomial64, seed64, data } = input;

  let expected = !reference::crc32_bitwise(polynomial, seed, &data);
  assert_eq!(Crc32Bytewise::compute_with(polynomial, seed, &data), expected, "bytewise");
  assert_eq!(Crc32Slice8::compute_with(polynomial, seed, &data), expected, "slice8");
  assert_eq!(Crc32Slice16::compute_with(polynomial, seed, &data), expected, "slice16");

  assert_eq!(
    Crc64::compute(polynomial64, seed64, &data),
    reference::crc64_bitwise(polynomial64, seed64, &data),
    "crc64"
  );
});
