//! CRC-32 kernel benchmarks.
//!
//! Run: `cargo bench -p sumkit-checksum --bench crc32`
//!
//! Compares the single-table, slice-by-8, and slice-by-16 kernels, plus the
//! parameterized engine in both reflection modes.

use checksum::{Checksum, Crc32, Crc32Bytewise, Crc32Params, Crc32Slice8, Crc32Slice16, reference};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Standard benchmark sizes.
const SIZES: [usize; 7] = [16, 64, 256, 1024, 4096, 65536, 1048576];

/// Smaller sizes for the bit-at-a-time reference.
const BITWISE_SIZES: [usize; 4] = [16, 64, 256, 1024];

fn bench_kernels(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc32/kernels");

  for size in SIZES {
    let data = vec![0xABu8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("bytewise", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(Crc32Bytewise::compute(data)));
    });
    group.bench_with_input(BenchmarkId::new("slice8", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(Crc32Slice8::compute(data)));
    });
    group.bench_with_input(BenchmarkId::new("slice16", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(Crc32Slice16::compute(data)));
    });
  }

  group.finish();
}

fn bench_generalized(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc32/generalized");

  for size in SIZES {
    let data = vec![0xABu8; size];
    group.throughput(Throughput::Bytes(size as u64));

    for (name, params) in [("iso-hdlc", Crc32Params::ISO_HDLC), ("bzip2", Crc32Params::BZIP2)] {
      let mut hasher = Crc32::with_params(params).unwrap();
      group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
        b.iter(|| {
          hasher.reset();
          hasher.update(data);
          core::hint::black_box(hasher.value())
        });
      });
    }
  }

  group.finish();
}

/// Bit-at-a-time baseline; shows what the tables buy.
fn bench_bitwise(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc32/bitwise");

  for size in BITWISE_SIZES {
    let data = vec![0xABu8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| {
        let crc = reference::crc32_bitwise(Crc32Bytewise::DEFAULT_POLYNOMIAL, 0xFFFF_FFFF, data);
        core::hint::black_box(crc ^ 0xFFFF_FFFF)
      });
    });
  }

  group.finish();
}

criterion_group!(benches, bench_kernels, bench_generalized, bench_bitwise);
criterion_main!(benches);
