//! Bit reflection.
//!
//! A reflected CRC processes each byte least-significant bit first. Tables and
//! results produced in one convention are moved to the other by reversing the
//! order of the low `bit_count` bits.

/// Reverse the order of the lowest `bit_count` bits of `value`.
///
/// Bits above `bit_count` are cleared. `bit_count` values above 32 are treated
/// as 32, and a `bit_count` of 0 yields 0.
///
/// # Example
///
/// ```
/// use checksum::reflect;
///
/// assert_eq!(reflect(0b0000_0001, 8), 0b1000_0000);
/// assert_eq!(reflect(0x04C1_1DB7, 32), 0xEDB8_8320);
/// assert_eq!(reflect(0xFFFF_FF01, 8), 0x80);
/// ```
#[inline]
#[must_use]
pub const fn reflect(value: u32, bit_count: u32) -> u32 {
  if bit_count == 0 {
    return 0;
  }
  let width = if bit_count > 32 { 32 } else { bit_count };
  value.reverse_bits() >> (32 - width)
}
