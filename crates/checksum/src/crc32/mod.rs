//! CRC-32 implementations.
//!
//! This module provides:
//! - [`Crc32`] - parameterized CRC-32 (polynomial, seed, xor-out, reflection)
//! - [`Crc32Bytewise`], [`Crc32Slice8`], [`Crc32Slice16`] - classic reflected CRC-32
//!
//! # Parameter Model
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | `polynomial` | Generator polynomial, normal form (0x04C11DB7) |
//! | `seed` | Initial accumulator value |
//! | `xor_out` | XORed into the accumulator at finalization |
//! | `reflect_in` | Process bytes LSB-first (right-shifting register) |
//! | `reflect_out` | Output reflection; applied only when it differs from `reflect_in` |
//!
//! With the default parameters [`Crc32`] agrees with the classic engines.

mod classic;
mod portable;
#[cfg(test)]
mod proptests;

use core::fmt;
use std::sync::Arc;

pub use classic::{Crc32Bytewise, Crc32Slice8, Crc32Slice16};
use traits::{Checksum, ChecksumError};

use crate::{
  TableRegistry,
  reflect::reflect,
  tables::{CRC32_POLYNOMIAL, CRC32C_POLYNOMIAL, Crc32Table},
};

// ─────────────────────────────────────────────────────────────────────────────
// Parameters
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters of a CRC-32 variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Crc32Params {
  /// Generator polynomial in normal form.
  pub polynomial: u32,
  /// Initial accumulator value.
  pub seed: u32,
  /// Final XOR value.
  pub xor_out: u32,
  /// Reflect input bytes.
  pub reflect_in: bool,
  /// Reflect output.
  pub reflect_out: bool,
}

impl Crc32Params {
  /// CRC-32/ISO-HDLC: zip, gzip, PNG, Ethernet.
  pub const ISO_HDLC: Self = Self::new(CRC32_POLYNOMIAL, 0xFFFF_FFFF);

  /// CRC-32/MPEG-2.
  pub const MPEG_2: Self = Self::ISO_HDLC.with_xor_out(0).with_reflection(false, false);

  /// CRC-32/JAMCRC: ISO-HDLC without the final complement.
  pub const JAMCRC: Self = Self::ISO_HDLC.with_xor_out(0);

  /// CRC-32/BZIP2: MPEG-2 with the final complement.
  pub const BZIP2: Self = Self::ISO_HDLC.with_reflection(false, false);

  /// CRC-32C (Castagnoli): iSCSI, SCTP, ext4.
  pub const CASTAGNOLI: Self = Self::new(CRC32C_POLYNOMIAL, 0xFFFF_FFFF);

  /// Reflected parameters with a final complement, for a normal-form `polynomial`.
  #[inline]
  #[must_use]
  pub const fn new(polynomial: u32, seed: u32) -> Self {
    Self { polynomial, seed, xor_out: 0xFFFF_FFFF, reflect_in: true, reflect_out: true }
  }

  #[inline]
  #[must_use]
  pub const fn with_xor_out(mut self, xor_out: u32) -> Self {
    self.xor_out = xor_out;
    self
  }

  #[inline]
  #[must_use]
  pub const fn with_reflection(mut self, reflect_in: bool, reflect_out: bool) -> Self {
    self.reflect_in = reflect_in;
    self.reflect_out = reflect_out;
    self
  }
}

impl Default for Crc32Params {
  #[inline]
  fn default() -> Self {
    Self::ISO_HDLC
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Parameterized CRC-32
// ─────────────────────────────────────────────────────────────────────────────

/// Parameterized CRC-32.
///
/// # Properties (defaults)
///
/// - **Polynomial**: 0x04C11DB7 (normal), 0xEDB88320 (reflected)
/// - **Seed**: 0xFFFFFFFF
/// - **Final XOR**: 0xFFFFFFFF
/// - **Reflect input/output**: Yes
///
/// # Example
///
/// ```
/// use checksum::{Checksum, Crc32, Crc32Params};
///
/// let mut mpeg2 = Crc32::with_params(Crc32Params::MPEG_2)?;
/// mpeg2.update(b"123456789");
/// assert_eq!(mpeg2.value(), 0x0376_E6E7);
///
/// assert_eq!(Crc32::compute(b"123456789"), 0xCBF4_3926);
/// # Ok::<(), checksum::ChecksumError>(())
/// ```
#[derive(Clone)]
pub struct Crc32 {
  params: Crc32Params,
  table: Arc<Crc32Table>,
  hash: u32,
}

impl Crc32 {
  /// Default normal-form polynomial.
  pub const DEFAULT_POLYNOMIAL: u32 = CRC32_POLYNOMIAL;
  /// Default seed.
  pub const DEFAULT_SEED: u32 = 0xFFFF_FFFF;

  /// Create a hasher for `params`.
  ///
  /// # Errors
  ///
  /// The signature reserves [`ChecksumError::UnsupportedPlatform`]; digests are
  /// encoded with explicit big-endian conversion so it is never returned.
  pub fn with_params(params: Crc32Params) -> Result<Self, ChecksumError> {
    Self::with_params_in(params, TableRegistry::global())
  }

  /// Like [`with_params`](Self::with_params), borrowing the table from `registry`.
  ///
  /// # Errors
  ///
  /// See [`with_params`](Self::with_params).
  pub fn with_params_in(params: Crc32Params, registry: &TableRegistry) -> Result<Self, ChecksumError> {
    Ok(Self::build(params, registry))
  }

  /// Create a reflected hasher with a final complement for a normal-form `polynomial`.
  ///
  /// # Errors
  ///
  /// See [`with_params`](Self::with_params).
  pub fn with_polynomial(polynomial: u32, seed: u32) -> Result<Self, ChecksumError> {
    Self::with_params(Crc32Params::new(polynomial, seed))
  }

  fn build(params: Crc32Params, registry: &TableRegistry) -> Self {
    let table = registry.crc32(params.polynomial, params.reflect_in);
    Self { params, table, hash: params.seed }
  }

  /// Parameters this hasher was built with.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> Crc32Params {
    self.params
  }

  /// The finalized checksum as an integer.
  ///
  /// Applies `xor_out`, then reflects the 32-bit result when input and output
  /// reflection differ.
  #[inline]
  #[must_use]
  pub const fn as_u32(&self) -> u32 {
    let result = self.hash ^ self.params.xor_out;
    if self.params.reflect_in != self.params.reflect_out { reflect(result, 32) } else { result }
  }

  /// Checksum `data` with the default polynomial and seed.
  #[inline]
  #[must_use]
  pub fn compute(data: &[u8]) -> u32 {
    Self::compute_with_seed(Self::DEFAULT_SEED, data)
  }

  /// Checksum `data` with the default polynomial, starting from `seed`.
  #[inline]
  #[must_use]
  pub fn compute_with_seed(seed: u32, data: &[u8]) -> u32 {
    Self::compute_with(Self::DEFAULT_POLYNOMIAL, seed, data)
  }

  /// Checksum `data` with a normal-form `polynomial`, starting from `seed`.
  ///
  /// Always reflected and always complemented, regardless of any preset. To
  /// chain calls, pass `!previous` as the next seed.
  #[must_use]
  pub fn compute_with(polynomial: u32, seed: u32, data: &[u8]) -> u32 {
    let table = TableRegistry::global().crc32(polynomial, true);
    !portable::bytewise_reflected(seed, data, &table)
  }
}

impl Default for Crc32 {
  #[inline]
  fn default() -> Self {
    Self::build(Crc32Params::ISO_HDLC, TableRegistry::global())
  }
}

impl fmt::Debug for Crc32 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc32").field("params", &self.params).field("hash", &format_args!("{:#010x}", self.hash)).finish()
  }
}

impl Checksum for Crc32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Digest = [u8; 4];

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.hash = if self.params.reflect_in {
      portable::bytewise_reflected(self.hash, data, &self.table)
    } else {
      portable::bytewise_normal(self.hash, data, &self.table)
    };
  }

  #[inline]
  fn value(&self) -> u32 {
    self.as_u32()
  }

  #[inline]
  fn finalize(&self) -> [u8; 4] {
    self.as_u32().to_be_bytes()
  }

  #[inline]
  fn reset(&mut self) {
    self.hash = self.params.seed;
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
