//! One-shot execution of both modulation chains.
//!
//! The AM and FM branches are pure functions over the shared read-only
//! baseband, so they run on scoped threads with no coordination. Each
//! branch carries its own `ModResult`: a misconfigured AM detector does
//! not cost the run its FM signals, and vice versa.

use std::thread;

use tracing::{info, info_span, warn};

use crate::config::PipelineConfig;
use crate::dsp::level;
use crate::dsp::{AmDemodulator, AmModulator, CarrierGenerator, FmDemodulator, FmModulator};
use crate::error::ModResult;

/// Modulated waveform plus the baseband estimate recovered from it.
#[derive(Debug, Clone)]
pub struct BranchSignals {
    pub modulated: Vec<f32>,
    pub demodulated: Vec<f32>,
}

/// Outcome of a pipeline run: the original signal and one result per branch.
#[derive(Debug)]
pub struct PipelineRun {
    pub original: Vec<f32>,
    pub am: ModResult<BranchSignals>,
    pub fm: ModResult<BranchSignals>,
}

impl PipelineRun {
    pub fn any_succeeded(&self) -> bool {
        self.am.is_ok() || self.fm.is_ok()
    }

    pub fn all_succeeded(&self) -> bool {
        self.am.is_ok() && self.fm.is_ok()
    }
}

/// Run both chains over `baseband` and collect the five signals.
pub fn run(config: &PipelineConfig, baseband: Vec<f32>) -> PipelineRun {
    let (am, fm) = thread::scope(|s| {
        let am = s.spawn(|| am_branch(config, &baseband));
        let fm = s.spawn(|| fm_branch(config, &baseband));
        (am.join(), fm.join())
    });

    PipelineRun {
        original: baseband,
        am: am.expect("AM branch panicked"),
        fm: fm.expect("FM branch panicked"),
    }
}

fn am_branch(config: &PipelineConfig, baseband: &[f32]) -> ModResult<BranchSignals> {
    let span = info_span!(
        "am",
        carrier_hz = config.am.carrier_hz,
        modulation_index = config.am.modulation_index
    );
    let _guard = span.entered();

    let carrier =
        CarrierGenerator::new(config.sample_rate, config.am.carrier_hz).generate(baseband.len())?;
    let modulated = AmModulator::new(config.am.modulation_index).modulate(baseband, &carrier)?;
    let demodulated = AmDemodulator::new(config.sample_rate, config.am.carrier_hz)
        .with_cutoff(config.am.effective_cutoff())
        .demodulate(&modulated)?;

    report_fidelity("am", baseband, &demodulated);
    Ok(BranchSignals {
        modulated,
        demodulated,
    })
}

fn fm_branch(config: &PipelineConfig, baseband: &[f32]) -> ModResult<BranchSignals> {
    let span = info_span!(
        "fm",
        carrier_hz = config.fm.carrier_hz,
        deviation_hz = config.fm.deviation_hz
    );
    let _guard = span.entered();

    let modulated = FmModulator::new(
        config.sample_rate,
        config.fm.carrier_hz,
        config.fm.deviation_hz,
    )
    .modulate(baseband)?;
    let demodulated = FmDemodulator::new(
        config.sample_rate,
        config.fm.carrier_hz,
        config.fm.deviation_hz,
    )
    .demodulate(&modulated)?;

    report_fidelity("fm", baseband, &demodulated);
    Ok(BranchSignals {
        modulated,
        demodulated,
    })
}

fn report_fidelity(branch: &str, original: &[f32], recovered: &[f32]) {
    let score = level::correlation(original, recovered);
    if score < 0.5 {
        warn!(branch, correlation = score, "recovered signal barely resembles the original");
    } else {
        info!(branch, correlation = score, "branch complete");
    }
}
