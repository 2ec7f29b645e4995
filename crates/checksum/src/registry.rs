//! Shared, lazily built lookup tables.
//!
//! Every engine borrows its table from a [`TableRegistry`] as an `Arc`, so
//! tables are immutable and can be read from any thread. Engines constructed
//! through the plain constructors use [`TableRegistry::global`]; the `*_in`
//! constructors accept an explicit registry, which is how tests observe and
//! isolate table construction.
//!
//! # Caching Strategy
//!
//! Only the well-known polynomials are retained:
//!
//! | Family | Cached key |
//! |--------|------------|
//! | Generalized CRC-32 | (0x04C11DB7, reflected input) |
//! | Reflected CRC-32, slice-by-8, slice-by-16 | 0xEDB88320 |
//! | CRC-64 | 0xD800000000000000 (ISO 3309) |
//!
//! Any other polynomial is built fresh for each request and dropped with the
//! last engine using it, which keeps memory bounded when callers feed
//! arbitrary polynomials. A cached table is built at most once per registry:
//! the cache lock is held for the duration of the build.

use std::{
  collections::HashMap,
  fmt,
  hash::Hash,
  sync::{
    Arc, Mutex, OnceLock, PoisonError,
    atomic::{AtomicUsize, Ordering},
  },
};

use tracing::{debug, trace};

use crate::tables::{
  CRC32_POLYNOMIAL, CRC32_REFLECTED_POLYNOMIAL, CRC64_ISO_POLYNOMIAL, Crc32Table, Crc64Table, crc32_reflected_table,
  crc32_slice_tables, crc32_table, crc64_table,
};

/// Slice-by-8 CRC-32 tables.
pub type Slice8Tables = [[u32; 256]; 8];

/// Slice-by-16 CRC-32 tables.
pub type Slice16Tables = [[u32; 256]; 16];

/// Table family, reported in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
  /// Generalized CRC-32 table (normal polynomial, optional input reflection).
  Crc32,
  /// Classic reflected CRC-32 table.
  Crc32Reflected,
  /// Slice-by-8 CRC-32 tables.
  Crc32Slice8,
  /// Slice-by-16 CRC-32 tables.
  Crc32Slice16,
  /// Reflected CRC-64 table.
  Crc64,
}

impl TableKind {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Crc32 => "crc32",
      Self::Crc32Reflected => "crc32/reflected",
      Self::Crc32Slice8 => "crc32/slice8",
      Self::Crc32Slice16 => "crc32/slice16",
      Self::Crc64 => "crc64",
    }
  }
}

/// One table family's cache.
struct TableCache<K, T> {
  kind: TableKind,
  entries: Mutex<HashMap<K, Arc<T>>>,
}

impl<K: Copy + Eq + Hash, T> TableCache<K, T> {
  fn new(kind: TableKind) -> Self {
    Self { kind, entries: Mutex::new(HashMap::new()) }
  }

  fn len(&self) -> usize {
    self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
  }

  fn get_or_build(&self, key: K, build: impl FnOnce() -> T) -> Arc<T> {
    // Tables are plain data; a panic while another thread held the lock
    // cannot leave a half-written entry behind.
    let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(table) = entries.get(&key) {
      trace!(kind = self.kind.as_str(), "table cache hit");
      return Arc::clone(table);
    }
    let table = Arc::new(build());
    entries.insert(key, Arc::clone(&table));
    table
  }
}

/// Registry of CRC lookup tables.
///
/// # Example
///
/// ```
/// use checksum::{Checksum, Crc32Slice16, TableRegistry};
///
/// let registry = TableRegistry::new();
/// let a = Crc32Slice16::with_polynomial_in(Crc32Slice16::DEFAULT_POLYNOMIAL, !0, &registry);
/// let b = Crc32Slice16::with_polynomial_in(Crc32Slice16::DEFAULT_POLYNOMIAL, !0, &registry);
/// assert_eq!(registry.builds(), 1);
/// assert_eq!(a.value(), b.value());
/// ```
pub struct TableRegistry {
  crc32: TableCache<(u32, bool), Crc32Table>,
  crc32_reflected: TableCache<u32, Crc32Table>,
  slice8: TableCache<u32, Slice8Tables>,
  slice16: TableCache<u32, Slice16Tables>,
  crc64: TableCache<u64, Crc64Table>,
  builds: AtomicUsize,
}

impl TableRegistry {
  /// Create an empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self {
      crc32: TableCache::new(TableKind::Crc32),
      crc32_reflected: TableCache::new(TableKind::Crc32Reflected),
      slice8: TableCache::new(TableKind::Crc32Slice8),
      slice16: TableCache::new(TableKind::Crc32Slice16),
      crc64: TableCache::new(TableKind::Crc64),
      builds: AtomicUsize::new(0),
    }
  }

  /// The process-wide registry used by the plain engine constructors.
  #[must_use]
  pub fn global() -> &'static Self {
    static GLOBAL: OnceLock<TableRegistry> = OnceLock::new();
    GLOBAL.get_or_init(Self::new)
  }

  /// Generalized CRC-32 table for a normal-form `polynomial`.
  #[must_use]
  pub fn crc32(&self, polynomial: u32, reflect_in: bool) -> Arc<Crc32Table> {
    let cacheable = polynomial == CRC32_POLYNOMIAL && reflect_in;
    self.lookup(&self.crc32, (polynomial, reflect_in), u64::from(polynomial), cacheable, || {
      crc32_table(polynomial, reflect_in)
    })
  }

  /// Classic CRC-32 table for a reflected `polynomial`.
  #[must_use]
  pub fn crc32_reflected(&self, polynomial: u32) -> Arc<Crc32Table> {
    let cacheable = polynomial == CRC32_REFLECTED_POLYNOMIAL;
    self.lookup(&self.crc32_reflected, polynomial, u64::from(polynomial), cacheable, || {
      crc32_reflected_table(polynomial)
    })
  }

  /// Slice-by-8 tables for a reflected `polynomial`.
  #[must_use]
  pub fn crc32_slice8(&self, polynomial: u32) -> Arc<Slice8Tables> {
    let cacheable = polynomial == CRC32_REFLECTED_POLYNOMIAL;
    self.lookup(&self.slice8, polynomial, u64::from(polynomial), cacheable, || crc32_slice_tables::<8>(polynomial))
  }

  /// Slice-by-16 tables for a reflected `polynomial`.
  #[must_use]
  pub fn crc32_slice16(&self, polynomial: u32) -> Arc<Slice16Tables> {
    let cacheable = polynomial == CRC32_REFLECTED_POLYNOMIAL;
    self.lookup(&self.slice16, polynomial, u64::from(polynomial), cacheable, || crc32_slice_tables::<16>(polynomial))
  }

  /// CRC-64 table for a reflected `polynomial`.
  #[must_use]
  pub fn crc64(&self, polynomial: u64) -> Arc<Crc64Table> {
    let cacheable = polynomial == CRC64_ISO_POLYNOMIAL;
    self.lookup(&self.crc64, polynomial, polynomial, cacheable, || crc64_table(polynomial))
  }

  /// Number of tables this registry has constructed, cached or not.
  #[must_use]
  pub fn builds(&self) -> usize {
    self.builds.load(Ordering::Relaxed)
  }

  /// Number of tables currently retained.
  #[must_use]
  pub fn cached(&self) -> usize {
    self.crc32.len() + self.crc32_reflected.len() + self.slice8.len() + self.slice16.len() + self.crc64.len()
  }

  fn lookup<K: Copy + Eq + Hash, T>(
    &self,
    cache: &TableCache<K, T>,
    key: K,
    polynomial: u64,
    cacheable: bool,
    build: impl FnOnce() -> T,
  ) -> Arc<T> {
    if !cacheable {
      self.record_build(cache.kind, polynomial, false);
      return Arc::new(build());
    }
    cache.get_or_build(key, || {
      self.record_build(cache.kind, polynomial, true);
      build()
    })
  }

  fn record_build(&self, kind: TableKind, polynomial: u64, cached: bool) {
    self.builds.fetch_add(1, Ordering::Relaxed);
    debug!(kind = kind.as_str(), polynomial = format_args!("{polynomial:#x}"), cached, "building table");
  }
}

impl Default for TableRegistry {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for TableRegistry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TableRegistry").field("builds", &self.builds()).field("cached", &self.cached()).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_tables_are_built_once() {
    let registry = TableRegistry::new();

    let a = registry.crc32_reflected(CRC32_REFLECTED_POLYNOMIAL);
    let b = registry.crc32_reflected(CRC32_REFLECTED_POLYNOMIAL);

    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(registry.builds(), 1);
    assert_eq!(registry.cached(), 1);
  }

  #[test]
  fn custom_polynomials_are_not_retained() {
    let registry = TableRegistry::new();

    let a = registry.crc32_slice8(0x82F6_3B78);
    let b = registry.crc32_slice8(0x82F6_3B78);

    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(a, b);
    assert_eq!(registry.builds(), 2);
    assert_eq!(registry.cached(), 0);
  }

  #[test]
  fn reflection_mode_is_part_of_the_key() {
    let registry = TableRegistry::new();

    let reflected = registry.crc32(CRC32_POLYNOMIAL, true);
    let normal = registry.crc32(CRC32_POLYNOMIAL, false);
    let reflected_again = registry.crc32(CRC32_POLYNOMIAL, true);

    assert_ne!(reflected, normal);
    assert!(Arc::ptr_eq(&reflected, &reflected_again));
    assert_eq!(registry.builds(), 2);
    assert_eq!(registry.cached(), 1);
  }

  #[test]
  fn families_are_cached_independently() {
    let registry = TableRegistry::new();

    let _ = registry.crc32(CRC32_POLYNOMIAL, true);
    let _ = registry.crc32_reflected(CRC32_REFLECTED_POLYNOMIAL);
    let _ = registry.crc32_slice8(CRC32_REFLECTED_POLYNOMIAL);
    let _ = registry.crc32_slice16(CRC32_REFLECTED_POLYNOMIAL);
    let _ = registry.crc64(CRC64_ISO_POLYNOMIAL);

    assert_eq!(registry.builds(), 5);
    assert_eq!(registry.cached(), 5);
  }

  #[test]
  fn global_is_a_singleton() {
    assert!(core::ptr::eq(TableRegistry::global(), TableRegistry::global()));
  }

  #[test]
  fn debug_reports_counters() {
    let registry = TableRegistry::new();
    let _ = registry.crc64(CRC64_ISO_POLYNOMIAL);
    assert_eq!(format!("{registry:?}"), "TableRegistry { builds: 1, cached: 1 }");
  }
}
