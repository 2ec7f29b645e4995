//! Runtime configuration (kernel overrides).
//!
//! The environment is read once per process:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `SUMKIT_CRC32_FORCE` | `auto`, `generic`, `bytewise`, `slice8`, `slice16` |
//!
//! The override only affects engines created through the catalog
//! ([`Engine::new`](crate::Engine::new)); concrete engine types always run
//! their own kernel.

use std::sync::OnceLock;

use tracing::warn;

/// Environment variable selecting the CRC-32 kernel.
pub const CRC32_FORCE_ENV: &str = "SUMKIT_CRC32_FORCE";

/// Forced kernel selection for [`Algorithm::Crc32`](crate::Algorithm::Crc32).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Crc32Force {
  /// Use the default selector (slice-by-16).
  #[default]
  Auto,
  /// Force the parameterized engine.
  Generic,
  /// Force the single-table reflected engine.
  Bytewise,
  /// Force slice-by-8.
  Slice8,
  /// Force slice-by-16.
  Slice16,
}

impl Crc32Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Generic => "generic",
      Self::Bytewise => "bytewise",
      Self::Slice8 => "slice8",
      Self::Slice16 => "slice16",
    }
  }

  /// Parse an override value, ignoring case and surrounding whitespace.
  ///
  /// Returns `None` for empty or unrecognized input.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }

    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("generic") || value.eq_ignore_ascii_case("params") {
      return Some(Self::Generic);
    }
    if value.eq_ignore_ascii_case("bytewise") || value.eq_ignore_ascii_case("table") {
      return Some(Self::Bytewise);
    }
    if value.eq_ignore_ascii_case("slice8") || value.eq_ignore_ascii_case("slice-by-8") {
      return Some(Self::Slice8);
    }
    if value.eq_ignore_ascii_case("slice16") || value.eq_ignore_ascii_case("slice-by-16") {
      return Some(Self::Slice16);
    }

    None
  }
}

/// Effective configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ChecksumConfig {
  /// Kernel behind [`Algorithm::Crc32`](crate::Algorithm::Crc32).
  pub crc32_force: Crc32Force,
}

impl ChecksumConfig {
  /// Configuration with a forced CRC-32 kernel.
  #[inline]
  #[must_use]
  pub const fn with_crc32_force(crc32_force: Crc32Force) -> Self {
    Self { crc32_force }
  }
}

fn read_env() -> ChecksumConfig {
  let Ok(raw) = std::env::var(CRC32_FORCE_ENV) else {
    return ChecksumConfig::default();
  };
  let crc32_force = Crc32Force::parse(&raw).unwrap_or_else(|| {
    if !raw.trim().is_empty() {
      warn!(variable = CRC32_FORCE_ENV, value = %raw, "unrecognized kernel override, using auto");
    }
    Crc32Force::Auto
  });
  ChecksumConfig { crc32_force }
}

/// Get the process-wide configuration (environment read on first call).
#[inline]
#[must_use]
pub fn get() -> ChecksumConfig {
  static CONFIG: OnceLock<ChecksumConfig> = OnceLock::new();
  *CONFIG.get_or_init(read_env)
}
