//! Const-fn CRC lookup table generation.
//!
//! Two CRC-32 constructions are provided, matching the two engine families:
//!
//! | Builder | Polynomial form | Used by |
//! |---------|-----------------|---------|
//! | [`crc32_table`] | normal (e.g. 0x04C11DB7) | [`Crc32`](crate::Crc32) |
//! | [`crc32_reflected_table`] | reflected (e.g. 0xEDB88320) | bytewise, slice-by-8/16 |
//!
//! For the default polynomial both constructions yield the same table; this is
//! asserted at compile time below so the two engine families cannot drift.
//!
//! # Slice-by-K Layout
//!
//! | Width | Bytewise | Slice-by-8 | Slice-by-16 |
//! |-------|----------|------------|-------------|
//! | 32-bit | 256×u32 | 8×256×u32 | 16×256×u32 |
//! | 64-bit | 256×u64 | - | - |
//!
//! Row `k` of a slice table holds the CRC contribution of a byte followed by
//! `k` zero bytes, so K bytes can be folded in one step.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256, 0..K).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::reflect::reflect;

/// A single-byte CRC-32 lookup table.
pub type Crc32Table = [u32; 256];

/// A single-byte CRC-64 lookup table.
pub type Crc64Table = [u64; 256];

// ─────────────────────────────────────────────────────────────────────────────
// Polynomial Constants
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32 (ISO-HDLC) polynomial in normal form.
/// Used by zip, gzip, PNG, Ethernet, MPEG-2, BZIP2.
pub const CRC32_POLYNOMIAL: u32 = 0x04C1_1DB7;

/// CRC-32 (ISO-HDLC) polynomial in reflected form.
pub const CRC32_REFLECTED_POLYNOMIAL: u32 = 0xEDB8_8320;

/// CRC-32C (Castagnoli) polynomial in normal form.
pub const CRC32C_POLYNOMIAL: u32 = 0x1EDC_6F41;

/// CRC-64 ISO 3309 polynomial (x^64 + x^4 + x^3 + x + 1) in reflected form.
pub const CRC64_ISO_POLYNOMIAL: u64 = 0xD800_0000_0000_0000;

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32 Table Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a CRC-32 table from a normal-form polynomial.
///
/// Each index is placed in the top byte of the register (reflected first when
/// `reflect_in`), shifted left through 8 rounds of polynomial division, and
/// reflected back when `reflect_in`. The reflected table drives the
/// right-shifting update loop; the plain table drives the left-shifting one.
#[must_use]
pub const fn crc32_table(polynomial: u32, reflect_in: bool) -> Crc32Table {
  let mut table = [0u32; 256];
  let mut i = 0u32;
  while i < 256 {
    let mut entry = if reflect_in { reflect(i, 8) } else { i };
    entry <<= 24;

    let mut round = 0;
    while round < 8 {
      let top = entry & 0x8000_0000;
      entry <<= 1;
      if top != 0 {
        entry ^= polynomial;
      }
      round += 1;
    }

    if reflect_in {
      entry = reflect(entry, 32);
    }
    table[i as usize] = entry;
    i += 1;
  }
  table
}

/// Generate a single reflected CRC-32 table entry.
///
/// Uses bit-by-bit computation with the reflected polynomial.
#[must_use]
pub const fn crc32_reflected_entry(polynomial: u32, index: u8) -> u32 {
  let mut crc = index as u32;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ polynomial;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate a CRC-32 table from a reflected polynomial.
#[must_use]
pub const fn crc32_reflected_table(polynomial: u32) -> Crc32Table {
  let mut table = [0u32; 256];
  let mut i = 0u16;
  while i < 256 {
    table[i as usize] = crc32_reflected_entry(polynomial, i as u8);
    i += 1;
  }
  table
}

/// Generate `K` CRC-32 lookup tables for slice-by-K computation.
///
/// Row 0 is [`crc32_reflected_table`]; every further row is derived from the
/// previous one: `t[k][i] = (t[k-1][i] >> 8) ^ t[0][t[k-1][i] & 0xFF]`.
///
/// # Arguments
///
/// * `polynomial` - The reflected polynomial
#[must_use]
pub const fn crc32_slice_tables<const K: usize>(polynomial: u32) -> [[u32; 256]; K] {
  let mut tables = [[0u32; 256]; K];
  tables[0] = crc32_reflected_table(polynomial);

  let mut k = 1usize;
  while k < K {
    let mut i = 0usize;
    while i < 256 {
      let prev = tables[k - 1][i];
      tables[k][i] = (prev >> 8) ^ tables[0][(prev & 0xFF) as usize];
      i += 1;
    }
    k += 1;
  }

  tables
}

/// Compare two CRC-32 tables entry by entry.
#[must_use]
pub const fn tables_equal(a: &Crc32Table, b: &Crc32Table) -> bool {
  let mut i = 0;
  while i < 256 {
    if a[i] != b[i] {
      return false;
    }
    i += 1;
  }
  true
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-64 Table Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a single CRC-64 lookup table entry.
///
/// Uses bit-by-bit computation with the reflected polynomial.
#[must_use]
pub const fn crc64_table_entry(polynomial: u64, index: u8) -> u64 {
  let mut crc = index as u64;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ polynomial;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate a CRC-64 table from a reflected polynomial.
#[must_use]
pub const fn crc64_table(polynomial: u64) -> Crc64Table {
  let mut table = [0u64; 256];
  let mut i = 0u16;
  while i < 256 {
    table[i as usize] = crc64_table_entry(polynomial, i as u8);
    i += 1;
  }
  table
}

// The generalized engine (normal polynomial, reflected input) and the classic
// engines (reflected polynomial) must agree for the default polynomial.
const _: () = assert!(tables_equal(
  &crc32_table(CRC32_POLYNOMIAL, true),
  &crc32_reflected_table(CRC32_REFLECTED_POLYNOMIAL),
));

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reflected_table_known_entries() {
    let t = crc32_reflected_table(CRC32_REFLECTED_POLYNOMIAL);
    assert_eq!(t[0], 0);
    assert_eq!(t[1], 0x7707_3096);
    assert_eq!(t[128], 0xEDB8_8320);
    assert_eq!(t[255], 0x2D02_EF8D);
  }

  #[test]
  fn normal_table_known_entries() {
    let t = crc32_table(CRC32_POLYNOMIAL, false);
    assert_eq!(t[0], 0);
    assert_eq!(t[1], CRC32_POLYNOMIAL);
    assert_eq!(t[255], 0xB1F7_40B4);
  }

  #[test]
  fn both_constructions_agree_on_default_polynomial() {
    assert_eq!(crc32_table(CRC32_POLYNOMIAL, true), crc32_reflected_table(CRC32_REFLECTED_POLYNOMIAL));
  }

  #[test]
  fn both_constructions_agree_on_castagnoli() {
    let reflected = reflect(CRC32C_POLYNOMIAL, 32);
    assert_eq!(crc32_table(CRC32C_POLYNOMIAL, true), crc32_reflected_table(reflected));
  }

  #[test]
  fn reflected_and_normal_tables_differ() {
    assert!(!tables_equal(&crc32_table(CRC32_POLYNOMIAL, true), &crc32_table(CRC32_POLYNOMIAL, false)));
  }

  #[test]
  fn slice_tables_consistency() {
    let tables = crc32_slice_tables::<16>(CRC32_REFLECTED_POLYNOMIAL);

    assert_eq!(tables[0], crc32_reflected_table(CRC32_REFLECTED_POLYNOMIAL));

    for k in 1..16 {
      for i in 0..256 {
        let prev = tables[k - 1][i];
        let expected = (prev >> 8) ^ tables[0][(prev & 0xFF) as usize];
        assert_eq!(tables[k][i], expected);
      }
    }
  }

  #[test]
  fn slice8_is_prefix_of_slice16() {
    let tables8 = crc32_slice_tables::<8>(CRC32_REFLECTED_POLYNOMIAL);
    let tables16 = crc32_slice_tables::<16>(CRC32_REFLECTED_POLYNOMIAL);

    for k in 0..8 {
      assert_eq!(tables8[k], tables16[k]);
    }
  }

  #[test]
  fn crc64_iso_table_known_entries() {
    let t = crc64_table(CRC64_ISO_POLYNOMIAL);
    assert_eq!(t[0], 0);
    assert_eq!(t[128], CRC64_ISO_POLYNOMIAL);
    assert_ne!(t[1], 0);
  }
}
