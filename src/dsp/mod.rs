//! Numeric core of the modulation pipeline.
//!
//! Every stage here is a pure batch transform: it consumes fully
//! materialized sample sequences and returns a newly allocated output.
//! Nothing blocks, nothing streams, and no state crosses a stage boundary,
//! so the AM and FM chains can run on separate threads over one shared
//! baseband slice.

/// AM modulator and envelope-detector demodulator.
pub mod am;
/// FFT-based real-to-analytic signal conversion.
pub mod analytic;
/// Sinusoidal carrier generation.
pub mod carrier;
/// Single-pole low-pass smoothing filter.
pub mod filter;
/// FM modulator and phase-discriminator demodulator.
pub mod fm;
/// Amplitude utilities: peak, normalization, DC removal, correlation.
pub mod level;

pub use am::{AmDemodulator, AmModulator};
pub use carrier::CarrierGenerator;
pub use fm::{FmDemodulator, FmModulator};
