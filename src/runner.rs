// src/runner.rs
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::export;
use crate::feed;
use crate::params::Params;
use crate::sample::PitchSample;
use crate::validate::{self, ValidationSummary};

/// Optional progress sink for the frontend (CLI prints lines; tests
/// pass None or NullProgress).
pub trait Progress {
    /// Called at the start with the number of input files.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one input file has been read and extracted.
    fn file_done(&mut self, _path: &Path, _pitches: usize, _plays: usize) {}
}

/// A no-op progress sink you can pass when you don't care.
pub struct NullProgress;
impl Progress for NullProgress {}

/// What a run produced.
pub struct RunSummary {
    pub files_read: usize,
    pub samples: Vec<PitchSample>,
    pub summary: ValidationSummary,
    pub files_written: Vec<PathBuf>,
}

/// Top-level runner: read each document, extract its pitches, validate
/// the combined batch, optionally export the classified rows.
///
/// A file that cannot be read or decoded is logged and skipped; only a
/// failed export is fatal.
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(params.inputs.len());
    }

    let mut samples: Vec<PitchSample> = Vec::new();
    let mut files_read = 0usize;

    for path in &params.inputs {
        let doc = match fs::read_to_string(path) {
            Ok(doc) => doc,
            Err(e) => {
                log::warn!("skipping {}: {e}", path.display());
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("  Skipping {}: {e}", path.display()));
                }
                continue;
            }
        };

        match feed::extract_samples(&doc) {
            Ok(ex) => {
                files_read += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.file_done(path, ex.samples.len(), ex.plays_seen);
                }
                samples.extend(ex.samples);
            }
            Err(e) => {
                log::warn!("skipping {}: {e}", path.display());
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("  Skipping {}: not a game document ({e})", path.display()));
                }
            }
        }
    }

    log::info!("{} pitches across {} file(s)", samples.len(), files_read);
    let summary = validate::validate(&samples);

    let mut files_written = Vec::new();
    if params.export {
        let path = params.export_path();
        files_written.push(export::write_export(
            &path,
            &samples,
            params.include_headers,
            params.format,
        )?);
    }

    Ok(RunSummary { files_read, samples, summary, files_written })
}
