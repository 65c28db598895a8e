//! Benchmarks for the modulation pipeline stages.
//!
//! Run with: cargo bench
//!
//! The pipeline is a one-shot batch transform, so throughput over large
//! blocks is what matters. Sizes below span a short preview window up to
//! a few seconds of audio.
//!
//! Benchmark groups:
//!   - dsp/*  Individual stages (carrier, filter, AM, FM)

use criterion::{criterion_group, criterion_main};

mod dsp;

/// Signal lengths used across all stage benchmarks.
pub const BLOCK_SIZES: &[usize] = &[1_024, 8_192, 65_536];

criterion_group!(
    benches,
    dsp::bench_carrier,
    dsp::bench_filter,
    dsp::bench_am,
    dsp::bench_fm,
);
criterion_main!(benches);
