//! Benchmarks for the AM chain.

use std::f64::consts::TAU;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use anamod::dsp::{AmDemodulator, AmModulator, CarrierGenerator};

use crate::BLOCK_SIZES;

fn tone(freq: f64, sample_rate: f64, len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| (TAU * freq * i as f64 / sample_rate).sin() as f32)
        .collect()
}

pub fn bench_am(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/am");
    let modulator = AmModulator::new(0.8);
    let demodulator = AmDemodulator::new(44_100.0, 10_000.0);

    for &size in BLOCK_SIZES {
        let baseband = tone(220.0, 44_100.0, size);
        let carrier = CarrierGenerator::new(44_100.0, 10_000.0)
            .generate(size)
            .unwrap();
        let modulated = modulator.modulate(&baseband, &carrier).unwrap();

        group.bench_with_input(BenchmarkId::new("modulate", size), &size, |b, _| {
            b.iter(|| {
                modulator
                    .modulate(black_box(&baseband), black_box(&carrier))
                    .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("demodulate", size), &size, |b, _| {
            b.iter(|| demodulator.demodulate(black_box(&modulated)).unwrap())
        });
    }

    group.finish();
}
