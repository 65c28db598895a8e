//! Error taxonomy for the modulation pipeline.
//!
//! Parameter validation fails fast at the boundary of each stage and aborts
//! that branch only. Degraded-fidelity conditions (overmodulation,
//! near-Nyquist deviation) are deliberately *not* errors: the stages log a
//! warning and keep going, so the distorted result can still be compared.

/// Result type for modulation/demodulation stages.
pub type ModResult<T> = Result<T, ModError>;

/// Errors raised by modulators, demodulators, and the carrier generator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModError {
    #[error("invalid parameter `{name}` = {value}: must satisfy {constraint}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },

    #[error("carrier/baseband length mismatch: baseband {baseband}, carrier {carrier}")]
    LengthMismatch { baseband: usize, carrier: usize },
}

impl ModError {
    pub(crate) fn invalid(name: &'static str, value: f64, constraint: &'static str) -> Self {
        ModError::InvalidParameter {
            name,
            value,
            constraint,
        }
    }
}
