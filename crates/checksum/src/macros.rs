//! Internal macros for reflected CRC-32 engine generation.
//!
//! The bytewise, slice-by-8, and slice-by-16 engines share identical state,
//! seeding, and finalization; only the table shape and kernel differ.

/// Generate a reflected CRC-32 engine type with all trait implementations.
///
/// This macro creates:
/// - The struct definition (`polynomial`, `seed`, shared `tables`, accumulator `hash`)
/// - Constructors (`new`, `with_polynomial`, `with_polynomial_in`, `resume`)
/// - One-shot `compute`, `compute_with_seed`, `compute_with`
/// - `Checksum` trait implementation (finalize = `!hash`, big-endian)
///
/// # Arguments
///
/// - `$name`: The type name (e.g., `Crc32Slice8`)
/// - `$tables`: The table type held by the engine
/// - `$lookup`: The [`TableRegistry`](crate::TableRegistry) method that supplies the tables
/// - `$kernel`: The update kernel `fn(u32, &[u8], &$tables) -> u32`
macro_rules! define_reflected_crc32 {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      tables: $tables:ty,
      lookup: $lookup:ident,
      kernel: $kernel:path,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone)]
    $vis struct $name {
      polynomial: u32,
      seed: u32,
      tables: ::std::sync::Arc<$tables>,
      hash: u32,
    }

    impl $name {
      /// Reflected CRC-32 (ISO-HDLC) polynomial.
      pub const DEFAULT_POLYNOMIAL: u32 = $crate::tables::CRC32_REFLECTED_POLYNOMIAL;
      /// Initial accumulator value.
      pub const DEFAULT_SEED: u32 = 0xFFFF_FFFF;

      /// Create a hasher with the default polynomial and seed.
      #[inline]
      #[must_use]
      pub fn new() -> Self {
        Self::with_polynomial(Self::DEFAULT_POLYNOMIAL, Self::DEFAULT_SEED)
      }

      /// Create a hasher for a reflected `polynomial` starting from `seed`.
      #[must_use]
      pub fn with_polynomial(polynomial: u32, seed: u32) -> Self {
        Self::with_polynomial_in(polynomial, seed, $crate::TableRegistry::global())
      }

      /// Like [`with_polynomial`](Self::with_polynomial), borrowing tables from `registry`.
      #[must_use]
      pub fn with_polynomial_in(polynomial: u32, seed: u32, registry: &$crate::TableRegistry) -> Self {
        Self { polynomial, seed, tables: registry.$lookup(polynomial), hash: seed }
      }

      /// Create a hasher that continues from a previously finalized `crc`.
      ///
      /// A finalized value is the complement of the accumulator, so the seed
      /// is `!crc`. [`reset`](traits::Checksum::reset) returns to this point.
      #[inline]
      #[must_use]
      pub fn resume(crc: u32) -> Self {
        Self::with_polynomial(Self::DEFAULT_POLYNOMIAL, !crc)
      }

      /// The reflected polynomial this hasher was built for.
      #[inline]
      #[must_use]
      pub const fn polynomial(&self) -> u32 {
        self.polynomial
      }

      /// The finalized checksum as an integer.
      #[inline]
      #[must_use]
      pub const fn as_u32(&self) -> u32 {
        !self.hash
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

      /// Checksum `data` with a reflected `polynomial`, starting from `seed`.
      ///
      /// To chain calls, pass `!previous` as the next seed.
      #[must_use]
      pub fn compute_with(polynomial: u32, seed: u32, data: &[u8]) -> u32 {
        let tables = $crate::TableRegistry::global().$lookup(polynomial);
        !$kernel(seed, data, &tables)
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        Self::new()
      }
    }

    impl ::core::fmt::Debug for $name {
      fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.debug_struct(stringify!($name))
          .field("polynomial", &format_args!("{:#010x}", self.polynomial))
          .field("seed", &format_args!("{:#010x}", self.seed))
          .field("hash", &format_args!("{:#010x}", self.hash))
          .finish()
      }
    }

    impl traits::Checksum for $name {
      const OUTPUT_SIZE: usize = 4;
      type Output = u32;
      type Digest = [u8; 4];

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.hash = $kernel(self.hash, data, &self.tables);
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
        self.hash = self.seed;
      }
    }
  };
}
