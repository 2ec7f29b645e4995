//! Basic checksum usage: one-shot, streaming, and runtime-selected engines.
//!
//! Run with: `cargo run --example basic -p sumkit-checksum`
//! Table builds are logged with `RUST_LOG=checksum=debug`.

use checksum::{Algorithm, Checksum, Crc32, Crc32Params, Crc32Slice16, Crc64, Elf32, Engine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

  println!("=== Checksum Basic Examples ===\n");

  one_shot_examples();
  streaming_examples()?;
  resume_example();
  catalog_example()?;
  Ok(())
}

/// One-shot computation over an in-memory buffer.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let data = b"123456789";

  let crc32 = Crc32Slice16::compute(data);
  println!("CRC-32 (ISO-HDLC): 0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  let crc64 = Crc64::compute_iso(data);
  println!("CRC-64 (ISO):      0x{crc64:016X}");
  assert_eq!(crc64, 0x46A5_A938_8A5B_EFFE);

  let elf = Elf32::compute(data);
  println!("ELF-32:            0x{elf:08X}");
  assert_eq!(elf, 0x0678_AEE9);

  println!();
}

/// Streaming: feed data as it arrives, read the value at any point.
fn streaming_examples() -> Result<(), checksum::ChecksumError> {
  println!("--- Streaming Computation ---\n");

  let chunks: [&[u8]; 3] = [b"The quick brown fox ", b"jumps over ", b"the lazy dog."];

  for (name, params) in [
    ("ISO-HDLC", Crc32Params::ISO_HDLC),
    ("MPEG-2", Crc32Params::MPEG_2),
    ("JAMCRC", Crc32Params::JAMCRC),
    ("BZIP2", Crc32Params::BZIP2),
  ] {
    let mut hasher = Crc32::with_params(params)?;
    hasher.update_vectored(&chunks);
    println!("CRC-32/{name:<9} 0x{:08X}  digest {:02x?}", hasher.value(), hasher.finalize());
  }

  println!();
  Ok(())
}

/// Resume from a stored checksum without the original prefix.
fn resume_example() {
  println!("--- Resume ---\n");

  let stored = Crc32Slice16::compute(b"The quick brown fox ");
  let mut hasher = Crc32Slice16::resume(stored);
  hasher.update(b"jumps over the lazy dog.");
  println!("resumed from 0x{stored:08X}: 0x{:08X}", hasher.value());
  assert_eq!(hasher.value(), 0x5190_25E9);

  println!();
}

/// Pick algorithms by name at runtime.
fn catalog_example() -> Result<(), checksum::ChecksumError> {
  println!("--- Catalog ---\n");

  for name in ["crc32", "crc-32/bzip2", "castagnoli", "crc64/iso", "elf"] {
    let algorithm: Algorithm = name.parse()?;
    let mut engine = Engine::new(algorithm)?;
    engine.update(b"123456789");
    let value = engine.value().to_string();
    println!("{:<14} {value:<16} {} ({} bits)", algorithm.as_str(), engine.kernel_name(), algorithm.hash_size_bits());
    assert_eq!(engine.value(), algorithm.check());
  }

  Ok(())
}
