//! ELF-32 hash.
//!
//! The symbol hash from the System V ABI: a 4-bit rolling shift with the top
//! nibble folded back in. No table, no output transform. Not a CRC; kept here
//! because it shares the streaming interface.

use traits::Checksum;

/// ELF-32 rolling hash.
///
/// # Example
///
/// ```
/// use checksum::{Checksum, Elf32};
///
/// let mut h = Elf32::new();
/// h.update(b"123456789");
/// assert_eq!(h.value(), 0x0678_AEE9);
/// assert_eq!(Elf32::compute(b""), 0);
/// ```
#[derive(Clone, Copy, Default)]
pub struct Elf32 {
  seed: u32,
  hash: u32,
}

impl Elf32 {
  /// Create a hasher starting from zero.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self::with_seed(0)
  }

  /// Create a hasher starting from `seed`.
  #[inline]
  #[must_use]
  pub const fn with_seed(seed: u32) -> Self {
    Self { seed, hash: seed }
  }

  /// The current hash as an integer.
  #[inline]
  #[must_use]
  pub const fn as_u32(&self) -> u32 {
    self.hash
  }

  /// Hash `data` from zero.
  #[inline]
  #[must_use]
  pub const fn compute(data: &[u8]) -> u32 {
    Self::compute_with_seed(0, data)
  }

  /// Hash `data` starting from `seed`.
  #[inline]
  #[must_use]
  pub const fn compute_with_seed(seed: u32, data: &[u8]) -> u32 {
    step(seed, data)
  }

  /// Hash `data` starting from `seed`.
  ///
  /// `_polynomial` is accepted for signature parity with the CRC engines and
  /// has no effect.
  // TODO: remove `_polynomial` once no caller relies on the shared (polynomial, seed, data) shape.
  #[inline]
  #[must_use]
  pub const fn compute_with(_polynomial: u32, seed: u32, data: &[u8]) -> u32 {
    step(seed, data)
  }
}

#[inline]
const fn step(mut hash: u32, mut data: &[u8]) -> u32 {
  while let [byte, rest @ ..] = data {
    hash = (hash << 4).wrapping_add(*byte as u32);
    let work = hash & 0xF000_0000;
    hash ^= work >> 24;
    hash &= !work;
    data = rest;
  }
  hash
}

impl core::fmt::Debug for Elf32 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Elf32")
      .field("seed", &format_args!("{:#010x}", self.seed))
      .field("hash", &format_args!("{:#010x}", self.hash))
      .finish()
  }
}

impl Checksum for Elf32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Digest = [u8; 4];

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.hash = step(self.hash, data);
  }

  #[inline]
  fn value(&self) -> u32 {
    self.hash
  }

  #[inline]
  fn finalize(&self) -> [u8; 4] {
    self.hash.to_be_bytes()
  }

  #[inline]
  fn reset(&mut self) {
    self.hash = self.seed;
  }
}
