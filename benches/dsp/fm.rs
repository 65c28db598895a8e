//! Benchmarks for the FM chain.
//!
//! Demodulation is the heavy stage: two whole-signal FFTs behind the
//! analytic-signal construction.

use std::f64::consts::TAU;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use anamod::dsp::{FmDemodulator, FmModulator};

use crate::BLOCK_SIZES;

fn tone(freq: f64, sample_rate: f64, len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| (TAU * freq * i as f64 / sample_rate).sin() as f32)
        .collect()
}

pub fn bench_fm(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/fm");
    let modulator = FmModulator::new(44_100.0, 10_000.0, 2_500.0);
    let demodulator = FmDemodulator::new(44_100.0, 10_000.0, 2_500.0);

    for &size in BLOCK_SIZES {
        let baseband = tone(220.0, 44_100.0, size);
        let modulated = modulator.modulate(&baseband).unwrap();

        group.bench_with_input(BenchmarkId::new("modulate", size), &size, |b, _| {
            b.iter(|| modulator.modulate(black_box(&baseband)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("demodulate", size), &size, |b, _| {
            b.iter(|| demodulator.demodulate(black_box(&modulated)).unwrap())
        });
    }

    group.finish();
}
