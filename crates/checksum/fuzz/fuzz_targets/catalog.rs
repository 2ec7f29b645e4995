//! Fuzz target for algorithm name parsing and catalog engines.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Algorithm, ChecksumConfig, Crc32Force, Engine};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  name: String,
  force: String,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let force = Crc32Force::parse(&input.force).unwrap_or_default();
  let config = ChecksumConfig::with_crc32_force(force);

  if let Ok(algorithm) = input.name.parse::<Algorithm>() {
    assert_eq!(algorithm.as_str().parse::<Algorithm>(), Ok(algorithm));

    let mut engine = Engine::with_config(algorithm, &config).unwrap();
    engine.update(&input.data);
    let value = engine.value();
    assert_eq!(engine.finalize().len(), algorithm.output_size());

    engine.reset();
    engine.update(&input.data);
    assert_eq!(engine.value(), value);
  }
});
