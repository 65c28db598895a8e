//! Benchmarks for carrier generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use anamod::dsp::CarrierGenerator;

use crate::BLOCK_SIZES;

pub fn bench_carrier(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/carrier");
    let generator = CarrierGenerator::new(44_100.0, 10_000.0);

    for &size in BLOCK_SIZES {
        group.bench_with_input(BenchmarkId::new("generate", size), &size, |b, &size| {
            b.iter(|| generator.generate(black_box(size)).unwrap())
        });
    }

    group.finish();
}
