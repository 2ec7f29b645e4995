//! CRC-64 implementation.
//!
//! # Properties (ISO 3309)
//!
//! - **Polynomial**: 0xD800000000000000 (reflected form of 0x1B)
//! - **Seed**: 0
//! - **Final XOR**: none
//! - **Reflect input/output**: Yes
//!
//! The accumulator is finalized as-is: there is no output complement, so a
//! finalized value can be passed straight back as the next seed.

mod portable;
#[cfg(test)]
mod proptests;

use core::fmt;
use std::sync::Arc;

use traits::Checksum;

use crate::{
  TableRegistry,
  tables::{CRC64_ISO_POLYNOMIAL, Crc64Table},
};

/// Table-driven reflected CRC-64.
///
/// # Example
///
/// ```
/// use checksum::{Checksum, Crc64};
///
/// let mut h = Crc64::iso();
/// h.update(b"123456789");
/// assert_eq!(h.value(), 0x46A5_A938_8A5B_EFFE);
///
/// // No output transform, so chaining passes the previous value through.
/// let first = Crc64::compute_iso(b"12345");
/// assert_eq!(Crc64::compute_iso_with_seed(first, b"6789"), 0x46A5_A938_8A5B_EFFE);
/// ```
#[derive(Clone)]
pub struct Crc64 {
  polynomial: u64,
  seed: u64,
  table: Arc<Crc64Table>,
  hash: u64,
}

impl Crc64 {
  /// ISO 3309 polynomial, reflected form.
  pub const ISO_3309_POLYNOMIAL: u64 = CRC64_ISO_POLYNOMIAL;
  /// Initial accumulator value.
  pub const DEFAULT_SEED: u64 = 0;

  /// Create a hasher for a reflected `polynomial` with the default seed.
  #[inline]
  #[must_use]
  pub fn new(polynomial: u64) -> Self {
    Self::with_seed(polynomial, Self::DEFAULT_SEED)
  }

  /// Create a hasher for a reflected `polynomial` starting from `seed`.
  #[must_use]
  pub fn with_seed(polynomial: u64, seed: u64) -> Self {
    Self::with_seed_in(polynomial, seed, TableRegistry::global())
  }

  /// Like [`with_seed`](Self::with_seed), borrowing the table from `registry`.
  #[must_use]
  pub fn with_seed_in(polynomial: u64, seed: u64, registry: &TableRegistry) -> Self {
    Self { polynomial, seed, table: registry.crc64(polynomial), hash: seed }
  }

  /// ISO 3309 hasher.
  #[inline]
  #[must_use]
  pub fn iso() -> Self {
    Self::new(Self::ISO_3309_POLYNOMIAL)
  }

  /// ISO 3309 hasher starting from `seed`.
  #[inline]
  #[must_use]
  pub fn iso_with_seed(seed: u64) -> Self {
    Self::with_seed(Self::ISO_3309_POLYNOMIAL, seed)
  }

  /// The reflected polynomial this hasher was built for.
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u64 {
    self.polynomial
  }

  /// The current checksum as an integer.
  #[inline]
  #[must_use]
  pub const fn as_u64(&self) -> u64 {
    self.hash
  }

  /// Checksum `data` with a reflected `polynomial`, starting from `seed`.
  #[must_use]
  pub fn compute(polynomial: u64, seed: u64, data: &[u8]) -> u64 {
    let table = TableRegistry::global().crc64(polynomial);
    portable::bytewise(seed, data, &table)
  }

  /// ISO 3309 checksum of `data`.
  #[inline]
  #[must_use]
  pub fn compute_iso(data: &[u8]) -> u64 {
    Self::compute_iso_with_seed(Self::DEFAULT_SEED, data)
  }

  /// ISO 3309 checksum of `data`, starting from `seed`.
  #[inline]
  #[must_use]
  pub fn compute_iso_with_seed(seed: u64, data: &[u8]) -> u64 {
    Self::compute(Self::ISO_3309_POLYNOMIAL, seed, data)
  }
}

impl Default for Crc64 {
  #[inline]
  fn default() -> Self {
    Self::iso()
  }
}

impl fmt::Debug for Crc64 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc64")
      .field("polynomial", &format_args!("{:#018x}", self.polynomial))
      .field("seed", &format_args!("{:#018x}", self.seed))
      .field("hash", &format_args!("{:#018x}", self.hash))
      .finish()
  }
}

impl Checksum for Crc64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Digest = [u8; 8];

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.hash = portable::bytewise(self.hash, data, &self.table);
  }

  #[inline]
  fn value(&self) -> u64 {
    self.hash
  }

  #[inline]
  fn finalize(&self) -> [u8; 8] {
    self.hash.to_be_bytes()
  }

  #[inline]
  fn reset(&mut self) {
    self.hash = self.seed;
  }
}
