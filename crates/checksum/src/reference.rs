//! Bitwise reference implementations.
//!
//! These process one bit at a time with no lookup tables and are the source of
//! truth every table-driven engine is verified against. They are intentionally
//! slow; use them as test oracles, not for throughput.
//!
//! # CRC Model
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | `poly`    | Generator polynomial (reflected for LSB-first, normal for MSB-first) |
//! | `init`    | Initial register value |
//! | `xorout`  | Final XOR value (applied by the caller) |
//!
//! All functions return the raw register; the caller applies any final XOR.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::tables::{CRC32_POLYNOMIAL, CRC32_REFLECTED_POLYNOMIAL, CRC32C_POLYNOMIAL, CRC64_ISO_POLYNOMIAL};

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32
// ─────────────────────────────────────────────────────────────────────────────

/// Bitwise CRC-32 computation (reflected, LSB-first).
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (e.g., 0xEDB88320)
/// * `init` - Initial register value
/// * `data` - Input bytes
#[must_use]
pub const fn crc32_bitwise(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Bitwise CRC-32 computation (non-reflected, MSB-first).
///
/// # Arguments
///
/// * `poly` - Normal polynomial (e.g., 0x04C11DB7)
/// * `init` - Initial register value
/// * `data` - Input bytes
#[must_use]
pub const fn crc32_bitwise_msb(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= (data[i] as u32) << 24;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 0x8000_0000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-64
// ─────────────────────────────────────────────────────────────────────────────

/// Bitwise CRC-64 computation (reflected, LSB-first).
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (e.g., 0xD800000000000000 for ISO 3309)
/// * `init` - Initial register value
/// * `data` - Input bytes
#[must_use]
pub const fn crc64_bitwise(poly: u64, init: u64, data: &[u8]) -> u64 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u64;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

/// Standard test input for CRC check values.
const CHECK_INPUT: &[u8] = b"123456789";

// CRC-32/ISO-HDLC: init=0xFFFFFFFF, xorout=0xFFFFFFFF
const _: () = assert!(crc32_bitwise(CRC32_REFLECTED_POLYNOMIAL, !0, CHECK_INPUT) ^ !0 == 0xCBF4_3926);

// CRC-32/MPEG-2: init=0xFFFFFFFF, xorout=0
const _: () = assert!(crc32_bitwise_msb(CRC32_POLYNOMIAL, !0, CHECK_INPUT) == 0x0376_E6E7);

// CRC-32/BZIP2: init=0xFFFFFFFF, xorout=0xFFFFFFFF
const _: () = assert!(crc32_bitwise_msb(CRC32_POLYNOMIAL, !0, CHECK_INPUT) ^ !0 == 0xFC89_1918);

// CRC-32C: init=0xFFFFFFFF, xorout=0xFFFFFFFF
const _: () = assert!(crc32_bitwise(CRC32C_POLYNOMIAL.reverse_bits(), !0, CHECK_INPUT) ^ !0 == 0xE306_9283);

// CRC-64/ISO 3309 as the engine defines it: init=0, no xorout
const _: () = assert!(crc64_bitwise(CRC64_ISO_POLYNOMIAL, 0, CHECK_INPUT) == 0x46A5_A938_8A5B_EFFE);
