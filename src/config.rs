//! Pipeline configuration.
//!
//! Every tunable the original analysis hardcoded (sample rate, carrier
//! frequencies, modulation depth, deviation, filter cutoff) is a plain
//! data field here, loadable from a JSON file and overridable from the CLI.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Parameters for the AM branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmParams {
    /// Carrier frequency in Hz.
    pub carrier_hz: f32,
    /// Modulation index m. Values above 1.0 overmodulate (accepted, degraded).
    pub modulation_index: f32,
    /// Envelope-detector low-pass cutoff in Hz. Defaults to carrier_hz / 10
    /// when unset, so the cutoff tracks the carrier choice.
    pub cutoff_hz: Option<f32>,
}

impl Default for AmParams {
    fn default() -> Self {
        Self {
            carrier_hz: 10_000.0,
            modulation_index: 0.8,
            cutoff_hz: None,
        }
    }
}

impl AmParams {
    /// Effective detector cutoff: explicit value or carrier_hz / 10.
    pub fn effective_cutoff(&self) -> f32 {
        self.cutoff_hz.unwrap_or(self.carrier_hz / 10.0)
    }
}

/// Parameters for the FM branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FmParams {
    /// Carrier frequency in Hz.
    pub carrier_hz: f32,
    /// Frequency-deviation constant kf, in Hz per unit baseband amplitude.
    pub deviation_hz: f32,
}

impl Default for FmParams {
    fn default() -> Self {
        Self {
            carrier_hz: 10_000.0,
            deviation_hz: 2_500.0,
        }
    }
}

/// Full pipeline configuration.
///
/// The sample rate is propagated from the decode stage, never re-derived;
/// both branches and their carriers share it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Shared sample rate in Hz.
    pub sample_rate: f32,
    #[serde(default)]
    pub am: AmParams,
    #[serde(default)]
    pub fm: FmParams,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100.0,
            am: AmParams::default(),
            fm: FmParams::default(),
        }
    }
}

impl PipelineConfig {
    /// Load a configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
