//! Non-cryptographic checksum trait.
//!
//! - **Streaming**: Incremental updates; many `update` calls equal one call on the concatenation
//! - **Non-destructive**: Finalization reads the accumulator without consuming it
//! - **Two shapes**: Integer value for comparisons, big-endian digest bytes for storage

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// Provides the incremental hashing contract shared by every engine.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, Crc32};
///
/// // One-shot (default parameters)
/// let crc = Crc32::checksum(b"hello world");
///
/// // Streaming
/// let mut hasher = Crc32::default();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.value(), crc);
/// assert_eq!(hasher.finalize(), crc.to_be_bytes());
/// ```
///
/// # Implementor Requirements
///
/// - `value()` and `finalize()` must not mutate the accumulator and must be idempotent
/// - `finalize()` must be the big-endian encoding of `value()`
/// - `reset()` must restore the hasher to the state it was constructed in
/// - updating after `finalize()` continues from the accumulated state
pub trait Checksum: Clone {
  /// Output size in bytes.
  ///
  /// - CRC-32, ELF-32: 4
  /// - CRC-64: 8
  const OUTPUT_SIZE: usize;

  /// The checksum as an integer.
  type Output: Copy + Eq + Debug + Default;

  /// The checksum as big-endian bytes.
  type Digest: Copy + Eq + Debug + AsRef<[u8]>;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  /// Empty slices are a no-op.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the finalized checksum as an integer.
  ///
  /// This applies the algorithm's output transform to a copy of the
  /// accumulator; further updates remain possible.
  #[must_use]
  fn value(&self) -> Self::Output;

  /// Return the finalized checksum as big-endian bytes.
  #[must_use]
  fn finalize(&self) -> Self::Digest;

  /// Reset the hasher to its initial state.
  ///
  /// After calling this, the hasher behaves as if newly constructed.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot using default parameters.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output
  where
    Self: Default,
  {
    let mut h = Self::default();
    h.update(data);
    h.value()
  }

  /// Compute the checksum of multiple buffers in one shot using default parameters.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output
  where
    Self: Default,
  {
    let mut h = Self::default();
    h.update_vectored(bufs);
    h.value()
  }

  /// Compute the big-endian digest of data in one shot using default parameters.
  #[inline]
  #[must_use]
  fn digest(data: &[u8]) -> Self::Digest
  where
    Self: Default,
  {
    let mut h = Self::default();
    h.update(data);
    h.finalize()
  }
}
