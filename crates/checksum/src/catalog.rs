//! Algorithm catalog and runtime-selected engines.
//!
//! [`Algorithm`] names every preset this crate ships; [`Engine`] wraps the
//! matching concrete hasher behind one type so callers can pick an algorithm
//! by name at runtime.
//!
//! # Examples
//!
//! ```
//! use checksum::{Algorithm, Engine};
//!
//! let algorithm: Algorithm = "crc-32/bzip2".parse()?;
//! let mut engine = Engine::new(algorithm)?;
//! engine.update(b"123456789");
//! assert_eq!(engine.value(), algorithm.check());
//! assert_eq!(engine.value().to_string(), "fc891918");
//! # Ok::<(), checksum::ChecksumError>(())
//! ```

use core::{fmt, str::FromStr};

use tracing::trace;
use traits::{Checksum, ChecksumError};

use crate::{
  Crc32, Crc32Bytewise, Crc32Params, Crc32Slice8, Crc32Slice16, Crc64, Elf32, TableRegistry,
  config::{self, ChecksumConfig, Crc32Force},
};

// ─────────────────────────────────────────────────────────────────────────────
// Algorithm
// ─────────────────────────────────────────────────────────────────────────────

/// Checksum algorithms available through [`Engine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Algorithm {
  /// CRC-32/ISO-HDLC; kernel chosen by [`Crc32Force`].
  Crc32,
  /// CRC-32/MPEG-2.
  Crc32Mpeg2,
  /// CRC-32/JAMCRC.
  Crc32Jamcrc,
  /// CRC-32/BZIP2.
  Crc32Bzip2,
  /// CRC-32C (Castagnoli).
  Crc32c,
  /// CRC-32/ISO-HDLC, single-table kernel.
  Crc32Bytewise,
  /// CRC-32/ISO-HDLC, slice-by-8 kernel.
  Crc32Slice8,
  /// CRC-32/ISO-HDLC, slice-by-16 kernel.
  Crc32Slice16,
  /// CRC-64, ISO 3309 polynomial, zero seed, no output transform.
  Crc64Iso,
  /// ELF-32 symbol hash.
  Elf32,
}

impl Algorithm {
  /// Every algorithm, in declaration order.
  pub const ALL: [Self; 10] = [
    Self::Crc32,
    Self::Crc32Mpeg2,
    Self::Crc32Jamcrc,
    Self::Crc32Bzip2,
    Self::Crc32c,
    Self::Crc32Bytewise,
    Self::Crc32Slice8,
    Self::Crc32Slice16,
    Self::Crc64Iso,
    Self::Elf32,
  ];

  /// Canonical lowercase name.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Crc32 => "crc32",
      Self::Crc32Mpeg2 => "crc32/mpeg-2",
      Self::Crc32Jamcrc => "crc32/jamcrc",
      Self::Crc32Bzip2 => "crc32/bzip2",
      Self::Crc32c => "crc32c",
      Self::Crc32Bytewise => "crc32/bytewise",
      Self::Crc32Slice8 => "crc32/slice8",
      Self::Crc32Slice16 => "crc32/slice16",
      Self::Crc64Iso => "crc64/iso",
      Self::Elf32 => "elf32",
    }
  }

  /// Digest size in bytes.
  #[must_use]
  pub const fn output_size(self) -> usize {
    match self {
      Self::Crc64Iso => 8,
      _ => 4,
    }
  }

  /// Digest size in bits.
  #[must_use]
  pub const fn hash_size_bits(self) -> u32 {
    (self.output_size() * 8) as u32
  }

  /// Checksum of the ASCII string `"123456789"`.
  #[must_use]
  pub const fn check(self) -> HashValue {
    match self {
      Self::Crc32 | Self::Crc32Bytewise | Self::Crc32Slice8 | Self::Crc32Slice16 => HashValue::U32(0xCBF4_3926),
      Self::Crc32Mpeg2 => HashValue::U32(0x0376_E6E7),
      Self::Crc32Jamcrc => HashValue::U32(0x340B_C6D9),
      Self::Crc32Bzip2 => HashValue::U32(0xFC89_1918),
      Self::Crc32c => HashValue::U32(0xE306_9283),
      Self::Crc64Iso => HashValue::U64(0x46A5_A938_8A5B_EFFE),
      Self::Elf32 => HashValue::U32(0x0678_AEE9),
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Algorithm {
  type Err = ChecksumError;

  /// Parse a canonical name or a common alias, ignoring ASCII case.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let name = s.trim().to_ascii_lowercase();
    let algorithm = match name.as_str() {
      "crc32" | "crc-32" | "crc32/iso-hdlc" | "crc-32/iso-hdlc" | "crc32/ieee" => Self::Crc32,
      "crc32/mpeg-2" | "crc-32/mpeg-2" | "crc32/mpeg2" | "mpeg-2" | "mpeg2" => Self::Crc32Mpeg2,
      "crc32/jamcrc" | "crc-32/jamcrc" | "jamcrc" => Self::Crc32Jamcrc,
      "crc32/bzip2" | "crc-32/bzip2" | "bzip2" => Self::Crc32Bzip2,
      "crc32c" | "crc-32c" | "crc32/iscsi" | "crc-32/iscsi" | "castagnoli" => Self::Crc32c,
      "crc32/bytewise" => Self::Crc32Bytewise,
      "crc32/slice8" | "crc32/slice-by-8" => Self::Crc32Slice8,
      "crc32/slice16" | "crc32/slice-by-16" => Self::Crc32Slice16,
      "crc64/iso" | "crc-64/iso" | "crc64" | "crc-64" | "crc64/iso-3309" => Self::Crc64Iso,
      "elf32" | "elf-32" | "elf" => Self::Elf32,
      _ => return Err(ChecksumError::UnknownAlgorithm),
    };
    Ok(algorithm)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// HashValue
// ─────────────────────────────────────────────────────────────────────────────

/// A finalized checksum of either width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashValue {
  U32(u32),
  U64(u64),
}

impl HashValue {
  /// Big-endian digest bytes (4 or 8).
  #[must_use]
  pub fn to_be_bytes(self) -> Vec<u8> {
    match self {
      Self::U32(v) => v.to_be_bytes().to_vec(),
      Self::U64(v) => v.to_be_bytes().to_vec(),
    }
  }

  /// The value widened to 64 bits.
  #[inline]
  #[must_use]
  pub const fn as_u64(self) -> u64 {
    match self {
      Self::U32(v) => v as u64,
      Self::U64(v) => v,
    }
  }
}

impl From<u32> for HashValue {
  #[inline]
  fn from(value: u32) -> Self {
    Self::U32(value)
  }
}

impl From<u64> for HashValue {
  #[inline]
  fn from(value: u64) -> Self {
    Self::U64(value)
  }
}

/// Zero-padded lowercase hex at the digest width.
impl fmt::Display for HashValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::U32(v) => write!(f, "{v:08x}"),
      Self::U64(v) => write!(f, "{v:016x}"),
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Engine
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
enum Inner {
  Generic(Crc32),
  Bytewise(Crc32Bytewise),
  Slice8(Crc32Slice8),
  Slice16(Crc32Slice16),
  Crc64(Crc64),
  Elf32(Elf32),
}

/// A hasher for any [`Algorithm`], selected at runtime.
#[derive(Clone, Debug)]
pub struct Engine {
  algorithm: Algorithm,
  inner: Inner,
}

impl Engine {
  /// Create an engine using the process configuration ([`config::get`]).
  ///
  /// # Errors
  ///
  /// Propagates construction errors from the underlying engine.
  pub fn new(algorithm: Algorithm) -> Result<Self, ChecksumError> {
    Self::with_config(algorithm, &config::get())
  }

  /// Create an engine with an explicit configuration, ignoring the environment.
  ///
  /// # Errors
  ///
  /// Propagates construction errors from the underlying engine.
  pub fn with_config(algorithm: Algorithm, config: &ChecksumConfig) -> Result<Self, ChecksumError> {
    Self::with_config_in(algorithm, config, TableRegistry::global())
  }

  /// Like [`with_config`](Self::with_config), borrowing tables from `registry`.
  ///
  /// # Errors
  ///
  /// Propagates construction errors from the underlying engine.
  pub fn with_config_in(
    algorithm: Algorithm,
    config: &ChecksumConfig,
    registry: &TableRegistry,
  ) -> Result<Self, ChecksumError> {
    let classic = Crc32Bytewise::DEFAULT_POLYNOMIAL;
    let seed = Crc32Bytewise::DEFAULT_SEED;

    let inner = match algorithm {
      Algorithm::Crc32 => match config.crc32_force {
        Crc32Force::Auto | Crc32Force::Slice16 => Inner::Slice16(Crc32Slice16::with_polynomial_in(classic, seed, registry)),
        Crc32Force::Slice8 => Inner::Slice8(Crc32Slice8::with_polynomial_in(classic, seed, registry)),
        Crc32Force::Bytewise => Inner::Bytewise(Crc32Bytewise::with_polynomial_in(classic, seed, registry)),
        Crc32Force::Generic => Inner::Generic(Crc32::with_params_in(Crc32Params::ISO_HDLC, registry)?),
      },
      Algorithm::Crc32Mpeg2 => Inner::Generic(Crc32::with_params_in(Crc32Params::MPEG_2, registry)?),
      Algorithm::Crc32Jamcrc => Inner::Generic(Crc32::with_params_in(Crc32Params::JAMCRC, registry)?),
      Algorithm::Crc32Bzip2 => Inner::Generic(Crc32::with_params_in(Crc32Params::BZIP2, registry)?),
      Algorithm::Crc32c => Inner::Generic(Crc32::with_params_in(Crc32Params::CASTAGNOLI, registry)?),
      Algorithm::Crc32Bytewise => Inner::Bytewise(Crc32Bytewise::with_polynomial_in(classic, seed, registry)),
      Algorithm::Crc32Slice8 => Inner::Slice8(Crc32Slice8::with_polynomial_in(classic, seed, registry)),
      Algorithm::Crc32Slice16 => Inner::Slice16(Crc32Slice16::with_polynomial_in(classic, seed, registry)),
      Algorithm::Crc64Iso => {
        Inner::Crc64(Crc64::with_seed_in(Crc64::ISO_3309_POLYNOMIAL, Crc64::DEFAULT_SEED, registry))
      }
      Algorithm::Elf32 => Inner::Elf32(Elf32::new()),
    };

    let engine = Self { algorithm, inner };
    trace!(algorithm = algorithm.as_str(), kernel = engine.kernel_name(), "engine created");
    Ok(engine)
  }

  /// The algorithm this engine computes.
  #[inline]
  #[must_use]
  pub const fn algorithm(&self) -> Algorithm {
    self.algorithm
  }

  /// Name of the kernel doing the work.
  #[must_use]
  pub const fn kernel_name(&self) -> &'static str {
    match self.inner {
      Inner::Generic(_) => "crc32/generic",
      Inner::Bytewise(_) => "crc32/bytewise",
      Inner::Slice8(_) => "crc32/slice8",
      Inner::Slice16(_) => "crc32/slice16",
      Inner::Crc64(_) => "crc64/bytewise",
      Inner::Elf32(_) => "elf32",
    }
  }

  /// Digest size in bytes.
  #[inline]
  #[must_use]
  pub const fn output_size(&self) -> usize {
    self.algorithm.output_size()
  }

  /// Feed `data` into the engine.
  pub fn update(&mut self, data: &[u8]) {
    match &mut self.inner {
      Inner::Generic(h) => h.update(data),
      Inner::Bytewise(h) => h.update(data),
      Inner::Slice8(h) => h.update(data),
      Inner::Slice16(h) => h.update(data),
      Inner::Crc64(h) => h.update(data),
      Inner::Elf32(h) => h.update(data),
    }
  }

  /// The finalized checksum; the engine keeps accumulating afterwards.
  #[must_use]
  pub fn value(&self) -> HashValue {
    match &self.inner {
      Inner::Generic(h) => HashValue::U32(h.value()),
      Inner::Bytewise(h) => HashValue::U32(h.value()),
      Inner::Slice8(h) => HashValue::U32(h.value()),
      Inner::Slice16(h) => HashValue::U32(h.value()),
      Inner::Crc64(h) => HashValue::U64(h.value()),
      Inner::Elf32(h) => HashValue::U32(h.value()),
    }
  }

  /// Big-endian digest bytes.
  #[must_use]
  pub fn finalize(&self) -> Vec<u8> {
    self.value().to_be_bytes()
  }

  /// Return to the freshly constructed state.
  pub fn reset(&mut self) {
    match &mut self.inner {
      Inner::Generic(h) => h.reset(),
      Inner::Bytewise(h) => h.reset(),
      Inner::Slice8(h) => h.reset(),
      Inner::Slice16(h) => h.reset(),
      Inner::Crc64(h) => h.reset(),
      Inner::Elf32(h) => h.reset(),
    }
  }
}
