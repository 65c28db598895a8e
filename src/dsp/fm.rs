//! Frequency modulation and phase-discriminator demodulation.
//!
//! Modulation: `y[i] = cos(2π·fc·i/fs + 2π·kf·Σ_{j≤i} x[j]/fs)`
//!
//! The carrier phase advances by the running sum (Riemann integral) of the
//! baseband scaled by the deviation constant kf. The sampling-theorem
//! precondition `fc + kf·max|x| < fs/2` is the caller's to satisfy;
//! violating it aliases the output silently, so the modulator only logs a
//! warning when the configured deviation cannot fit under Nyquist.

use tracing::warn;

use crate::dsp::analytic::analytic_signal;
use crate::dsp::level;
use crate::error::{ModError, ModResult};

/// FM modulator: integrates the baseband into the carrier phase.
#[derive(Debug, Clone, Copy)]
pub struct FmModulator {
    sample_rate: f32,
    carrier_freq: f32,
    deviation: f32,
}

impl FmModulator {
    /// `deviation` is kf in Hz per unit baseband amplitude.
    pub fn new(sample_rate: f32, carrier_freq: f32, deviation: f32) -> Self {
        Self {
            sample_rate,
            carrier_freq,
            deviation,
        }
    }

    pub fn deviation(&self) -> f32 {
        self.deviation
    }

    /// Modulate a normalized baseband onto the carrier.
    pub fn modulate(&self, baseband: &[f32]) -> ModResult<Vec<f32>> {
        use std::f64::consts::TAU;

        if baseband.is_empty() {
            return Err(ModError::invalid("sample_count", 0.0, "> 0"));
        }
        if !(self.sample_rate > 0.0) {
            return Err(ModError::invalid(
                "sample_rate",
                self.sample_rate as f64,
                "> 0",
            ));
        }
        if !(self.carrier_freq > 0.0) {
            return Err(ModError::invalid(
                "carrier_frequency",
                self.carrier_freq as f64,
                "> 0",
            ));
        }
        if self.carrier_freq + self.deviation.abs() >= self.sample_rate / 2.0 {
            warn!(
                carrier_freq = self.carrier_freq,
                deviation = self.deviation,
                sample_rate = self.sample_rate,
                "peak instantaneous frequency reaches Nyquist, output will alias"
            );
        }

        let fs = self.sample_rate as f64;
        let fc = self.carrier_freq as f64;
        let kf = self.deviation as f64;

        // f64 running sum: the phase integral grows without bound over long
        // signals and f32 would drift audibly.
        let mut integral = 0.0f64;
        Ok(baseband
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                integral += x as f64;
                let phase = TAU * fc * i as f64 / fs + TAU * kf * integral / fs;
                phase.cos() as f32
            })
            .collect())
    }
}

/// FM discriminator: instantaneous frequency via the analytic signal.
///
/// The phase difference of consecutive analytic samples is taken through
/// `arg(a[i]·conj(a[i-1]))`, which folds each step into (-π, π] (the
/// unwrapping), then converted to Hz, shifted down by the carrier, and
/// scaled by 1/kf. Sample 0 has no predecessor; it duplicates sample 1 so
/// the output keeps the input length without a spurious origin spike.
#[derive(Debug, Clone, Copy)]
pub struct FmDemodulator {
    sample_rate: f32,
    carrier_freq: f32,
    deviation: f32,
}

impl FmDemodulator {
    pub fn new(sample_rate: f32, carrier_freq: f32, deviation: f32) -> Self {
        Self {
            sample_rate,
            carrier_freq,
            deviation,
        }
    }

    /// Recover a peak-normalized baseband estimate from an FM waveform.
    pub fn demodulate(&self, modulated: &[f32]) -> ModResult<Vec<f32>> {
        use std::f64::consts::TAU;

        if !(self.sample_rate > 0.0) {
            return Err(ModError::invalid(
                "sample_rate",
                self.sample_rate as f64,
                "> 0",
            ));
        }
        if !(self.carrier_freq > 0.0) {
            return Err(ModError::invalid(
                "carrier_frequency",
                self.carrier_freq as f64,
                "> 0",
            ));
        }
        if self.deviation == 0.0 {
            return Err(ModError::invalid("deviation", 0.0, "!= 0"));
        }

        if modulated.len() < 2 {
            return Ok(vec![0.0; modulated.len()]);
        }

        let fs = self.sample_rate as f64;
        let fc = self.carrier_freq as f64;
        let kf = self.deviation as f64;

        let analytic = analytic_signal(modulated);
        let mut estimate = Vec::with_capacity(modulated.len());
        estimate.push(0.0f32); // placeholder, overwritten by the edge policy
        for pair in analytic.windows(2) {
            let phase_step = (pair[1] * pair[0].conj()).arg();
            let inst_freq = phase_step * fs / TAU;
            estimate.push(((inst_freq - fc) / kf) as f32);
        }
        estimate[0] = estimate[1];

        Ok(level::normalize_peak(estimate))
    }
}
