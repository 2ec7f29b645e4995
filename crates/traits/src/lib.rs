//! Core traits for the sumkit checksum engines.
//!
//! This crate provides the capability interface every engine conforms to. It is
//! `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | Non-cryptographic incremental checksums | CRC-32, CRC-64, ELF-32 |
//!
//! # Error Types
//!
//! - [`ChecksumError`] - Construction and lookup failures
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;

pub use checksum::Checksum;
pub use error::ChecksumError;
