//! Error types for checksum engines.
//!
//! None of the engines fail on input data: every byte value and every buffer
//! length is valid. Errors only arise at construction or lookup time.

use core::fmt;

/// Checksum construction or lookup failure.
///
/// # Examples
///
/// ```
/// use traits::ChecksumError;
///
/// let err = ChecksumError::UnknownAlgorithm;
/// assert_eq!(err.to_string(), "unknown checksum algorithm");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ChecksumError {
  /// The target cannot produce the big-endian digest encoding.
  ///
  /// Digests are encoded with explicit byte-order conversion, so no shipped
  /// constructor returns this. It stays part of the constructor contract.
  UnsupportedPlatform,
  /// An algorithm name did not match any known engine or preset.
  UnknownAlgorithm,
}

impl ChecksumError {
  /// Short, stable identifier for the error kind.
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::UnsupportedPlatform => "unsupported-platform",
      Self::UnknownAlgorithm => "unknown-algorithm",
    }
  }
}

impl fmt::Display for ChecksumError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedPlatform => f.write_str("byte order not supported on this platform"),
      Self::UnknownAlgorithm => f.write_str("unknown checksum algorithm"),
    }
  }
}

impl core::error::Error for ChecksumError {}
