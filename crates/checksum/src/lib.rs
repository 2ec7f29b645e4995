//! Table-driven CRC checksums and the ELF-32 hash.
//!
//! This crate provides streaming and one-shot implementations of the classic
//! non-cryptographic checksums. None of them resist adversarial input; use
//! them for error detection only.
//!
//! # Supported Algorithms
//!
//! | Type | Polynomial | Output | Notes |
//! |------|------------|--------|-------|
//! | [`Crc32`] | 0x04C11DB7 (configurable) | `u32` | Seed, xor-out and reflection via [`Crc32Params`] |
//! | [`Crc32Bytewise`] | 0xEDB88320 (reflected) | `u32` | One table, one byte per step |
//! | [`Crc32Slice8`] | 0xEDB88320 (reflected) | `u32` | Eight tables, eight bytes per step |
//! | [`Crc32Slice16`] | 0xEDB88320 (reflected) | `u32` | Sixteen tables, sixteen bytes per step |
//! | [`Crc64`] | 0xD800000000000000 (ISO 3309) | `u64` | Zero seed, no output transform |
//! | [`Elf32`] | n/a | `u32` | System V symbol hash |
//!
//! Every type implements [`Checksum`]. [`Engine`] selects one at runtime from
//! an [`Algorithm`] name.
//!
//! # Tables
//!
//! Lookup tables are built lazily and shared through a [`TableRegistry`].
//! Tables for the standard polynomials are built once per process; custom
//! polynomials get a private table.
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum, Crc32, Crc32Slice16, Crc64, Elf32};
//!
//! // One-shot computation
//! let data = b"123456789";
//! let crc = Crc32Slice16::compute(data);
//! assert_eq!(crc, 0xCBF4_3926);
//!
//! // Streaming computation
//! let mut hasher = Crc32::default();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.value(), crc);
//! assert_eq!(hasher.finalize(), crc.to_be_bytes());
//!
//! assert_eq!(Crc64::compute_iso(data), 0x46A5_A938_8A5B_EFFE);
//! assert_eq!(Elf32::compute(data), 0x0678_AEE9);
//! ```
//!
//! # Configuration
//!
//! `SUMKIT_CRC32_FORCE` picks the kernel behind [`Algorithm::Crc32`]; see
//! [`config`].
//!
//! # Logging
//!
//! Table construction is reported through [`tracing`] at `debug` level, cache
//! hits and engine creation at `trace`. No subscriber is installed.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

mod catalog;
pub mod config;
mod crc32;
mod crc64;
mod elf32;
pub mod reference;
mod reflect;
mod registry;
pub mod tables;

pub use catalog::{Algorithm, Engine, HashValue};
pub use config::{ChecksumConfig, Crc32Force};
pub use crc32::{Crc32, Crc32Bytewise, Crc32Params, Crc32Slice8, Crc32Slice16};
pub use crc64::Crc64;
pub use elf32::Elf32;
pub use reflect::reflect;
pub use registry::{Slice8Tables, Slice16Tables, TableKind, TableRegistry};
// Re-export traits for convenience
pub use traits::{Checksum, ChecksumError};
