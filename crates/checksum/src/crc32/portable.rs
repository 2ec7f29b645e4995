//! Portable table-driven CRC-32 kernels.
//!
//! Every kernel takes the raw accumulator and returns the updated raw
//! accumulator; seeding and output transforms belong to the engines.
//!
//! # Algorithm Overview
//!
//! Slice-by-K reads K bytes per iteration as little-endian words, folds the
//! running CRC into the first word, and combines K table lookups (one per byte
//! position, rows counting down from K-1) with XOR. Any 0..K-1 tail bytes go
//! through the bytewise loop on row 0. The recurrence is identical to the
//! bytewise form, so all three kernels agree bit-for-bit.
//!
//! | Kernel | Bytes/iter | Tables |
//! |--------|------------|--------|
//! | bytewise (reflected) | 1 | 256×u32 |
//! | bytewise (normal) | 1 | 256×u32 |
//! | slice-by-8 | 8 | 8×256×u32 |
//! | slice-by-16 | 16 | 16×256×u32 |

// SAFETY: All array indexing in this module uses bounded indices:
// - as_chunks guarantees chunk sizes
// - Table indices are `& 0xFF` masked or a `>> 24` top byte (0..255)
#![allow(clippy::indexing_slicing)]

use crate::{
  registry::{Slice8Tables, Slice16Tables},
  tables::Crc32Table,
};

/// Update a reflected (LSB-first) CRC-32 one byte at a time.
#[inline]
pub fn bytewise_reflected(mut crc: u32, data: &[u8], table: &Crc32Table) -> u32 {
  for &b in data {
    let index = ((crc ^ u32::from(b)) & 0xFF) as usize;
    crc = (crc >> 8) ^ table[index];
  }
  crc
}

/// Update a non-reflected (MSB-first) CRC-32 one byte at a time.
#[inline]
pub fn bytewise_normal(mut crc: u32, data: &[u8], table: &Crc32Table) -> u32 {
  for &b in data {
    let index = (u32::from(b) ^ (crc >> 24)) as usize;
    crc = (crc << 8) ^ table[index];
  }
  crc
}

/// Update a reflected CRC-32 eight bytes at a time.
#[inline]
pub fn slice8(mut crc: u32, data: &[u8], tables: &Slice8Tables) -> u32 {
  let (chunks, tail) = data.as_chunks::<8>();

  for chunk in chunks {
    let one = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) ^ crc;
    let two = u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);

    crc = tables[0][(two >> 24) as usize]
      ^ tables[1][((two >> 16) & 0xFF) as usize]
      ^ tables[2][((two >> 8) & 0xFF) as usize]
      ^ tables[3][(two & 0xFF) as usize]
      ^ tables[4][(one >> 24) as usize]
      ^ tables[5][((one >> 16) & 0xFF) as usize]
      ^ tables[6][((one >> 8) & 0xFF) as usize]
      ^ tables[7][(one & 0xFF) as usize];
  }

  bytewise_reflected(crc, tail, &tables[0])
}

/// Update a reflected CRC-32 sixteen bytes at a time.
#[inline]
pub fn slice16(mut crc: u32, data: &[u8], tables: &Slice16Tables) -> u32 {
  let (chunks, tail) = data.as_chunks::<16>();

  for chunk in chunks {
    let one = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) ^ crc;
    let two = u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);
    let three = u32::from_le_bytes([chunk[8], chunk[9], chunk[10], chunk[11]]);
    let four = u32::from_le_bytes([chunk[12], chunk[13], chunk[14], chunk[15]]);

    crc = tables[0][(four >> 24) as usize]
      ^ tables[1][((four >> 16) & 0xFF) as usize]
      ^ tables[2][((four >> 8) & 0xFF) as usize]
      ^ tables[3][(four & 0xFF) as usize]
      ^ tables[4][(three >> 24) as usize]
      ^ tables[5][((three >> 16) & 0xFF) as usize]
      ^ tables[6][((three >> 8) & 0xFF) as usize]
      ^ tables[7][(three & 0xFF) as usize]
      ^ tables[8][(two >> 24) as usize]
      ^ tables[9][((two >> 16) & 0xFF) as usize]
      ^ tables[10][((two >> 8) & 0xFF) as usize]
      ^ tables[11][(two & 0xFF) as usize]
      ^ tables[12][(one >> 24) as usize]
      ^ tables[13][((one >> 16) & 0xFF) as usize]
      ^ tables[14][((one >> 8) & 0xFF) as usize]
      ^ tables[15][(one & 0xFF) as usize];
  }

  bytewise_reflected(crc, tail, &tables[0])
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    reference::{crc32_bitwise, crc32_bitwise_msb},
    tables::{CRC32_POLYNOMIAL, CRC32_REFLECTED_POLYNOMIAL, crc32_slice_tables, crc32_table},
  };

  fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut out = vec![0u8; len];
    let mut x = seed | 1;
    for b in &mut out {
      x ^= x << 13;
      x ^= x >> 7;
      x ^= x << 17;
      *b = (x as u8).wrapping_add((x >> 8) as u8);
    }
    out
  }

  #[test]
  fn empty_input_leaves_state_untouched() {
    let t8 = crc32_slice_tables::<8>(CRC32_REFLECTED_POLYNOMIAL);
    let t16 = crc32_slice_tables::<16>(CRC32_REFLECTED_POLYNOMIAL);

    assert_eq!(bytewise_reflected(0xDEAD_BEEF, &[], &t8[0]), 0xDEAD_BEEF);
    assert_eq!(slice8(0xDEAD_BEEF, &[], &t8), 0xDEAD_BEEF);
    assert_eq!(slice16(0xDEAD_BEEF, &[], &t16), 0xDEAD_BEEF);
  }

  #[test]
  fn kernels_match_bitwise_reference_across_lengths() {
    let t8 = crc32_slice_tables::<8>(CRC32_REFLECTED_POLYNOMIAL);
    let t16 = crc32_slice_tables::<16>(CRC32_REFLECTED_POLYNOMIAL);

    for len in [0usize, 1, 7, 8, 9, 15, 16, 17, 31, 32, 33, 63, 64, 65, 255, 1024] {
      let data = gen_bytes(len, len as u64);
      let expected = crc32_bitwise(CRC32_REFLECTED_POLYNOMIAL, !0, &data);

      assert_eq!(bytewise_reflected(!0, &data, &t8[0]), expected, "bytewise len={len}");
      assert_eq!(slice8(!0, &data, &t8), expected, "slice8 len={len}");
      assert_eq!(slice16(!0, &data, &t16), expected, "slice16 len={len}");
    }
  }

  #[test]
  fn normal_bytewise_matches_msb_reference() {
    let table = crc32_table(CRC32_POLYNOMIAL, false);
    for len in [0usize, 1, 3, 9, 100] {
      let data = gen_bytes(len, 0x5eed ^ len as u64);
      assert_eq!(bytewise_normal(!0, &data, &table), crc32_bitwise_msb(CRC32_POLYNOMIAL, !0, &data), "len={len}");
    }
  }

  #[test]
  fn slice16_incremental() {
    let tables = crc32_slice_tables::<16>(CRC32_REFLECTED_POLYNOMIAL);
    let data = b"hello world, this is a longer test string";
    let full = slice16(!0, data, &tables);

    for split in [1, 7, 8, 9, 15, 16, 17, 20] {
      let crc1 = slice16(!0, &data[..split], &tables);
      let crc2 = slice16(crc1, &data[split..], &tables);
      assert_eq!(crc2, full, "Incremental failed at split {split}");
    }
  }
}
