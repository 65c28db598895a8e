//! Single-pole IIR low-pass filter (exponential moving average).
//!
//! `y[n] = α·x[n] + (1-α)·y[n-1]`
//!
//! The smoothing stage of the envelope detector. The cutoff is a plain
//! parameter, not a designed tap set, so it tracks whatever carrier
//! frequency a run is configured with.

use std::f32::consts::TAU;

/// First-order low-pass smoother.
///
/// State initializes to the first input sample, so a DC input passes
/// through without a charge-up ramp.
#[derive(Debug, Clone)]
pub struct SinglePoleLowPass {
    alpha: f32,
    state: f32,
    primed: bool,
}

impl SinglePoleLowPass {
    /// Create with an explicit smoothing factor.
    ///
    /// α = 1.0 passes the input through; α → 0 smooths ever harder.
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(1e-6, 1.0),
            state: 0.0,
            primed: false,
        }
    }

    /// Create from a -3dB cutoff frequency.
    ///
    /// `α = 1 - exp(-2π·f3db/fs)`
    pub fn from_bandwidth(cutoff_hz: f32, sample_rate: f32) -> Self {
        Self::new(1.0 - (-TAU * cutoff_hz / sample_rate).exp())
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    #[inline]
    pub fn process_sample(&mut self, x: f32) -> f32 {
        if !self.primed {
            self.state = x;
            self.primed = true;
        } else {
            self.state = self.alpha * x + (1.0 - self.alpha) * self.state;
        }
        self.state
    }

    /// Filter a block of samples into a new buffer.
    pub fn process(&mut self, input: &[f32]) -> Vec<f32> {
        input.iter().map(|&x| self.process_sample(x)).collect()
    }

    pub fn reset(&mut self) {
        self.state = 0.0;
        self.primed = false;
    }
}
