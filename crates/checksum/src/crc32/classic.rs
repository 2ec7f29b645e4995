//! Classic reflected CRC-32 engines.
//!
//! All three engines take a reflected polynomial (default 0xEDB88320), seed
//! the accumulator directly, and finalize with a bit complement. They differ
//! only in how many bytes each table step consumes, and produce identical
//! results for identical parameters and input.

use super::portable;
use crate::{
  registry::{Slice8Tables, Slice16Tables},
  tables::Crc32Table,
};

define_reflected_crc32! {
  /// CRC-32 with a single 256-entry table, one byte per step.
  ///
  /// # Example
  ///
  /// ```
  /// use checksum::Crc32Bytewise;
  ///
  /// assert_eq!(Crc32Bytewise::compute(b"123456789"), 0xCBF4_3926);
  /// ```
  pub struct Crc32Bytewise {
    tables: Crc32Table,
    lookup: crc32_reflected,
    kernel: portable::bytewise_reflected,
  }
}

define_reflected_crc32! {
  /// CRC-32 using slice-by-8: eight tables, eight bytes per step.
  ///
  /// # Example
  ///
  /// ```
  /// use checksum::{Checksum, Crc32Slice8};
  ///
  /// let mut h = Crc32Slice8::new();
  /// h.update(b"The quick brown fox ");
  /// h.update(b"jumps over the lazy dog.");
  /// assert_eq!(h.value(), 0x5190_25E9);
  /// ```
  pub struct Crc32Slice8 {
    tables: Slice8Tables,
    lookup: crc32_slice8,
    kernel: portable::slice8,
  }
}

define_reflected_crc32! {
  /// CRC-32 using slice-by-16: sixteen tables, sixteen bytes per step.
  ///
  /// Tables take 16 KiB; the tail of each update runs bytewise.
  ///
  /// # Example
  ///
  /// ```
  /// use checksum::Crc32Slice16;
  ///
  /// assert_eq!(Crc32Slice16::compute(b"The quick brown fox jumps over the lazy dog."), 0x5190_25E9);
  /// ```
  pub struct Crc32Slice16 {
    tables: Slice16Tables,
    lookup: crc32_slice16,
    kernel: portable::slice16,
  }
}

#[cfg(test)]
mod tests {
  use traits::Checksum;

  use super::*;
  use crate::TableRegistry;

  const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog.";
  const LIFE: &[u8] = b"Life moves pretty fast. If you don't stop and look around once in a while, you could miss it.";

  #[test]
  fn fox_vector_all_engines() {
    assert_eq!(Crc32Bytewise::compute(FOX), 0x5190_25E9);
    assert_eq!(Crc32Slice8::compute(FOX), 0x5190_25E9);
    assert_eq!(Crc32Slice16::compute(FOX), 0x5190_25E9);
  }

  #[test]
  fn life_vector_all_engines() {
    assert_eq!(Crc32Bytewise::compute(LIFE), 0x6EE3_AD88);
    assert_eq!(Crc32Slice8::compute(LIFE), 0x6EE3_AD88);
    assert_eq!(Crc32Slice16::compute(LIFE), 0x6EE3_AD88);
  }

  #[test]
  fn finalize_is_big_endian_complement() {
    let mut h = Crc32Slice16::new();
    h.update(FOX);
    assert_eq!(h.finalize(), [0x51, 0x90, 0x25, 0xE9]);
    assert_eq!(h.finalize(), h.finalize());
  }

  #[test]
  fn fresh_hasher_finalizes_to_zero() {
    // !0xFFFFFFFF
    assert_eq!(Crc32Slice8::new().value(), 0);
    assert_eq!(Crc32Bytewise::compute(&[]), 0);
  }

  #[test]
  fn compute_overloads_agree() {
    assert_eq!(Crc32Slice8::compute(FOX), Crc32Slice8::compute_with_seed(Crc32Slice8::DEFAULT_SEED, FOX));
    assert_eq!(
      Crc32Slice8::compute(FOX),
      Crc32Slice8::compute_with(Crc32Slice8::DEFAULT_POLYNOMIAL, Crc32Slice8::DEFAULT_SEED, FOX)
    );
  }

  #[test]
  fn chained_compute_needs_complemented_seed() {
    let (a, b) = FOX.split_at(10);
    let first = Crc32Slice16::compute(a);
    assert_eq!(Crc32Slice16::compute_with_seed(!first, b), 0x5190_25E9);
  }

  #[test]
  fn resume_continues_and_resets_to_resume_point() {
    let (a, b) = FOX.split_at(21);
    let mut h = Crc32Bytewise::resume(Crc32Bytewise::compute(a));
    h.update(b);
    assert_eq!(h.value(), 0x5190_25E9);

    h.reset();
    assert_eq!(h.value(), Crc32Bytewise::compute(a));
  }

  #[test]
  fn custom_polynomial_engines_agree() {
    // CRC-32C, reflected
    let poly = 0x82F6_3B78;
    let registry = TableRegistry::new();
    let mut a = Crc32Bytewise::with_polynomial_in(poly, !0, &registry);
    let mut b = Crc32Slice8::with_polynomial_in(poly, !0, &registry);
    let mut c = Crc32Slice16::with_polynomial_in(poly, !0, &registry);
    a.update(b"123456789");
    b.update(b"123456789");
    c.update(b"123456789");
    assert_eq!(a.value(), 0xE306_9283);
    assert_eq!(b.value(), 0xE306_9283);
    assert_eq!(c.value(), 0xE306_9283);
    assert_eq!(b.polynomial(), poly);
  }

  #[test]
  fn debug_shows_parameters() {
    let dbg = format!("{:?}", Crc32Slice8::new());
    assert_eq!(dbg, "Crc32Slice8 { polynomial: 0xedb88320, seed: 0xffffffff, hash: 0xffffffff }");
  }
}
