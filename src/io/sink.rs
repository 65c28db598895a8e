//! Destinations for a finished signal set.
//!
//! The display side of the pipeline is a collaborator, not a component:
//! the numeric core only promises to deliver named sample sequences.
//! `SignalSink` is that seam, and `RawFileSink` is the production
//! implementation: five conventionally named files a plotting tool can
//! pick up.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::pipeline::PipelineRun;

/// File names the plotting collaborator expects, one per signal.
pub const ORIGINAL_FILE: &str = "audio_samples.raw";
pub const AM_MODULATED_FILE: &str = "modulated_am.raw";
pub const AM_DEMODULATED_FILE: &str = "demodulated_am.raw";
pub const FM_MODULATED_FILE: &str = "modulated_fm.raw";
pub const FM_DEMODULATED_FILE: &str = "demodulated_fm.raw";

/// Consumes the signals of a finished run.
pub trait SignalSink {
    fn consume(&mut self, run: &PipelineRun) -> io::Result<()>;
}

/// Writes each available signal as a raw f32 file in one directory.
///
/// A failed branch simply has no files; the original and the surviving
/// branch are still persisted.
#[derive(Debug, Clone)]
pub struct RawFileSink {
    dir: PathBuf,
}

impl RawFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }
}

impl SignalSink for RawFileSink {
    fn consume(&mut self, run: &PipelineRun) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        super::raw::write_samples(self.dir.join(ORIGINAL_FILE), &run.original)?;

        if let Ok(am) = &run.am {
            super::raw::write_samples(self.dir.join(AM_MODULATED_FILE), &am.modulated)?;
            super::raw::write_samples(self.dir.join(AM_DEMODULATED_FILE), &am.demodulated)?;
        }
        if let Ok(fm) = &run.fm {
            super::raw::write_samples(self.dir.join(FM_MODULATED_FILE), &fm.modulated)?;
            super::raw::write_samples(self.dir.join(FM_DEMODULATED_FILE), &fm.demodulated)?;
        }
        Ok(())
    }
}
