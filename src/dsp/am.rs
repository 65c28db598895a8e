//! Amplitude modulation and envelope-detection demodulation.
//!
//! Modulation: `y[i] = (1 + m·x[i])·c[i]`
//!
//! The `1 + m·x` factor keeps the envelope non-negative for `|x| ≤ 1` and
//! `m ≤ 1`, which is what makes envelope detection work on the other side.
//! Overmodulation (m > 1) folds the envelope through zero; the modulator
//! accepts it as a degraded-fidelity condition and logs a warning rather
//! than rejecting the run.

use tracing::warn;

use crate::dsp::filter::SinglePoleLowPass;
use crate::dsp::level;
use crate::error::{ModError, ModResult};

/// AM modulator with configurable depth.
#[derive(Debug, Clone, Copy)]
pub struct AmModulator {
    modulation_index: f32,
}

impl Default for AmModulator {
    fn default() -> Self {
        Self::new(0.8)
    }
}

impl AmModulator {
    pub fn new(modulation_index: f32) -> Self {
        Self { modulation_index }
    }

    pub fn modulation_index(&self) -> f32 {
        self.modulation_index
    }

    /// Multiply the baseband onto a carrier of equal length.
    pub fn modulate(&self, baseband: &[f32], carrier: &[f32]) -> ModResult<Vec<f32>> {
        let m = self.modulation_index;
        if !(m > 0.0) || !m.is_finite() {
            return Err(ModError::invalid("modulation_index", m as f64, "> 0"));
        }
        if baseband.len() != carrier.len() {
            return Err(ModError::LengthMismatch {
                baseband: baseband.len(),
                carrier: carrier.len(),
            });
        }
        if m > 1.0 {
            warn!(
                modulation_index = m,
                "overmodulation: envelope will fold through zero, recovery will distort"
            );
        }

        Ok(baseband
            .iter()
            .zip(carrier)
            .map(|(&x, &c)| (1.0 + m * x) * c)
            .collect())
    }
}

/// AM envelope detector.
///
/// Recovery is approximate by construction: rectification leaves carrier
/// ripple, the low-pass smears baseband edges, and the final rescale only
/// restores the peak, not the exact amplitude history. The cutoff must sit
/// below the carrier (hard error otherwise) and above the baseband's
/// bandwidth (caller's tuning choice, not checked).
#[derive(Debug, Clone, Copy)]
pub struct AmDemodulator {
    sample_rate: f32,
    carrier_freq: f32,
    cutoff_hz: f32,
}

impl AmDemodulator {
    /// Detector with the cutoff defaulted to a decade below the carrier.
    pub fn new(sample_rate: f32, carrier_freq: f32) -> Self {
        Self {
            sample_rate,
            carrier_freq,
            cutoff_hz: carrier_freq / 10.0,
        }
    }

    /// Override the ripple-filter cutoff.
    pub fn with_cutoff(mut self, cutoff_hz: f32) -> Self {
        self.cutoff_hz = cutoff_hz;
        self
    }

    pub fn cutoff_hz(&self) -> f32 {
        self.cutoff_hz
    }

    /// Recover a baseband estimate from an AM waveform.
    ///
    /// Rectify, low-pass below the carrier, remove the `+1` DC pedestal,
    /// and rescale so a non-silent result peaks at exactly 1.0.
    pub fn demodulate(&self, modulated: &[f32]) -> ModResult<Vec<f32>> {
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
        if !(self.cutoff_hz > 0.0) {
            return Err(ModError::invalid("cutoff_hz", self.cutoff_hz as f64, "> 0"));
        }
        if self.cutoff_hz >= self.carrier_freq {
            return Err(ModError::invalid(
                "cutoff_hz",
                self.cutoff_hz as f64,
                "< carrier frequency",
            ));
        }

        let rectified: Vec<f32> = modulated.iter().map(|&y| y.abs()).collect();
        let mut envelope =
            SinglePoleLowPass::from_bandwidth(self.cutoff_hz, self.sample_rate).process(&rectified);
        level::remove_mean(&mut envelope);
        Ok(level::normalize_peak(envelope))
    }
}
