//! Benchmarks for the single-pole low-pass smoother.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use anamod::dsp::filter::SinglePoleLowPass;

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();

        group.bench_with_input(BenchmarkId::new("lowpass", size), &size, |b, _| {
            b.iter(|| {
                let mut filter = SinglePoleLowPass::from_bandwidth(1_000.0, 44_100.0);
                filter.process(black_box(&input))
            })
        });
    }

    group.finish();
}
