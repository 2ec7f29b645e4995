//! Portable table-driven CRC-64 kernel.

// SAFETY: Table indices are `& 0xFF` masked (0..255).
#![allow(clippy::indexing_slicing)]

use crate::tables::Crc64Table;

/// Update a reflected CRC-64 one byte at a time.
#[inline]
pub fn bytewise(mut crc: u64, data: &[u8], table: &Crc64Table) -> u64 {
  for &b in data {
    let index = ((crc ^ u64::from(b)) & 0xFF) as usize;
    crc = (crc >> 8) ^ table[index];
  }
  crc
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    reference::crc64_bitwise,
    tables::{CRC64_ISO_POLYNOMIAL, crc64_table},
  };

  #[test]
  fn matches_bitwise_reference() {
    let table = crc64_table(CRC64_ISO_POLYNOMIAL);
    let data: Vec<u8> = (0u8..=255).cycle().take(1000).collect();
    for len in [0usize, 1, 8, 9, 255, 1000] {
      let slice = &data[..len];
      assert_eq!(bytewise(0, slice, &table), crc64_bitwise(CRC64_ISO_POLYNOMIAL, 0, slice), "len={len}");
      assert_eq!(bytewise(!0, slice, &table), crc64_bitwise(CRC64_ISO_POLYNOMIAL, !0, slice), "len={len}");
    }
  }
}
