//! Carrier generation.
//!
//! A carrier is a derived signal: it exists only to be multiplied into or
//! phase-shifted by a baseband signal, and is regenerated per run by
//! whichever modulator needs it.

use std::f64::consts::TAU;

use crate::error::{ModError, ModResult};

/// Generates a cosine carrier at a fixed frequency and sample rate.
///
/// Sample `i` of the output is `a·cos(2π·fc·i/fs)`. The phase expression is
/// evaluated in f64 so long signals do not accumulate rounding drift, then
/// narrowed to the f32 sample format.
#[derive(Debug, Clone, Copy)]
pub struct CarrierGenerator {
    sample_rate: f32,
    frequency: f32,
    amplitude: f32,
}

impl CarrierGenerator {
    pub fn new(sample_rate: f32, frequency: f32) -> Self {
        Self {
            sample_rate,
            frequency,
            amplitude: 1.0,
        }
    }

    /// Set the carrier amplitude (default 1.0).
    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Generate `len` carrier samples.
    ///
    /// Pure function of the generator parameters; fails on a zero-length
    /// request or non-positive rate/frequency.
    pub fn generate(&self, len: usize) -> ModResult<Vec<f32>> {
        if len == 0 {
            return Err(ModError::invalid("sample_count", 0.0, "> 0"));
        }
        if !(self.sample_rate > 0.0) {
            return Err(ModError::invalid(
                "sample_rate",
                self.sample_rate as f64,
                "> 0",
            ));
        }
        if !(self.frequency > 0.0) {
            return Err(ModError::invalid(
                "carrier_frequency",
                self.frequency as f64,
                "> 0",
            ));
        }

        let fs = self.sample_rate as f64;
        let fc = self.frequency as f64;
        let a = self.amplitude as f64;
        Ok((0..len)
            .map(|i| (a * (TAU * fc * i as f64 / fs).cos()) as f32)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_cosine_formula() {
        let gen = CarrierGenerator::new(8_000.0, 1_000.0);
        let carrier = gen.generate(16).unwrap();

        for (i, &sample) in carrier.iter().enumerate() {
            let expected = (TAU * 1_000.0 * i as f64 / 8_000.0).cos() as f32;
            assert!(
                (sample - expected).abs() < 1e-6,
                "sample {i}: expected {expected}, got {sample}"
            );
        }
    }

    #[test]
    fn output_has_requested_length_and_bounded_amplitude() {
        let gen = CarrierGenerator::new(44_100.0, 5_000.0).with_amplitude(0.5);
        let carrier = gen.generate(1024).unwrap();

        assert_eq!(carrier.len(), 1024);
        assert!(carrier.iter().all(|s| s.abs() <= 0.5 + 1e-6));
    }

    #[test]
    fn zero_length_is_rejected() {
        let gen = CarrierGenerator::new(44_100.0, 5_000.0);
        assert!(matches!(
            gen.generate(0),
            Err(ModError::InvalidParameter { name: "sample_count", .. })
        ));
    }

    #[test]
    fn non_positive_rates_are_rejected() {
        assert!(CarrierGenerator::new(0.0, 1_000.0).generate(8).is_err());
        assert!(CarrierGenerator::new(-44_100.0, 1_000.0).generate(8).is_err());
        assert!(CarrierGenerator::new(44_100.0, 0.0).generate(8).is_err());
        assert!(CarrierGenerator::new(44_100.0, -5.0).generate(8).is_err());
    }
}
