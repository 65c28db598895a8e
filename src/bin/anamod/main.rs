//! anamod - AM/FM modulation analysis over a recorded voice signal.
//!
//! Reads a decoded baseband (headerless little-endian f32, normalized
//! mono), runs the AM and FM chains, writes the five comparison signals
//! as raw files, and optionally previews them in the terminal.

mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use anamod::config::PipelineConfig;
use anamod::io::{raw, RawFileSink, SignalSink};
use anamod::pipeline;

#[derive(Debug, Parser)]
#[command(name = "anamod", about = "AM/FM analog-modulation simulation over recorded audio")]
struct Args {
    /// Input baseband: raw little-endian f32 samples, normalized mono
    input: PathBuf,

    /// Directory receiving the five output signal files
    #[arg(short, long, default_value = "signals")]
    output: PathBuf,

    /// JSON configuration file with pipeline parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sample rate of the input in Hz
    #[arg(long)]
    sample_rate: Option<f32>,

    /// AM carrier frequency in Hz
    #[arg(long)]
    am_carrier: Option<f32>,

    /// AM modulation index (values above 1.0 overmodulate)
    #[arg(long)]
    am_index: Option<f32>,

    /// AM envelope-detector cutoff in Hz (default: carrier / 10)
    #[arg(long)]
    am_cutoff: Option<f32>,

    /// FM carrier frequency in Hz
    #[arg(long)]
    fm_carrier: Option<f32>,

    /// FM frequency-deviation constant in Hz per unit amplitude
    #[arg(long)]
    fm_deviation: Option<f32>,

    /// Show a terminal preview of the five signals after the run
    #[arg(long)]
    preview: bool,
}

impl Args {
    fn build_config(&self) -> EyreResult<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_path(path)
                .wrap_err_with(|| format!("failed to load config {}", path.display()))?,
            None => PipelineConfig::default(),
        };

        if let Some(rate) = self.sample_rate {
            config.sample_rate = rate;
        }
        if let Some(fc) = self.am_carrier {
            config.am.carrier_hz = fc;
        }
        if let Some(m) = self.am_index {
            config.am.modulation_index = m;
        }
        if let Some(cutoff) = self.am_cutoff {
            config.am.cutoff_hz = Some(cutoff);
        }
        if let Some(fc) = self.fm_carrier {
            config.fm.carrier_hz = fc;
        }
        if let Some(kf) = self.fm_deviation {
            config.fm.deviation_hz = kf;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(report) => {
            eprintln!("Error: {report:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> EyreResult<ExitCode> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.build_config()?;

    let baseband = raw::read_samples(&args.input)
        .wrap_err_with(|| format!("failed to read input {}", args.input.display()))?;
    info!(
        samples = baseband.len(),
        sample_rate = config.sample_rate,
        "loaded baseband"
    );

    let run = pipeline::run(&config, baseband);
    if let Err(e) = &run.am {
        error!("AM branch failed: {e}");
    }
    if let Err(e) = &run.fm {
        error!("FM branch failed: {e}");
    }
    if !run.any_succeeded() {
        return Err(eyre!("both modulation branches failed"));
    }

    RawFileSink::new(&args.output)
        .consume(&run)
        .wrap_err_with(|| format!("failed to write signals to {}", args.output.display()))?;
    info!(dir = %args.output.display(), "signals written");

    if args.preview {
        ui::preview(&run)?;
    }

    // Nonzero when a branch was lost, so scripts notice partial output.
    Ok(if run.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
