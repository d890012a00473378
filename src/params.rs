// src/params.rs
use std::path::PathBuf;

use crate::config::consts::{DEFAULT_EXPORT_STEM, DEFAULT_OUT_DIR};
use crate::export::Delim;

#[derive(Clone, Debug)]
pub struct Params {
    pub inputs: Vec<PathBuf>,    // saved game-detail JSON documents
    pub out: Option<PathBuf>,    // export target (file or directory)
    pub format: Delim,           // export format
    pub include_headers: bool,   // header row in the export
    pub export: bool,            // write per-pitch rows
    pub json: bool,              // JSON report instead of text
    pub verbose: bool,           // debug-level logging
}

impl Params {
    pub fn new() -> Self {
        Self {
            inputs: Vec::new(),
            out: None,
            format: Delim::Csv,
            include_headers: true,
            export: false,
            json: false,
            verbose: false,
        }
    }

    /// Resolve the export path: explicit -o, a directory hint, or the
    /// default under out/.
    pub fn export_path(&self) -> PathBuf {
        let default_name = format!("{}.{}", DEFAULT_EXPORT_STEM, self.format.ext());
        match &self.out {
            Some(p) if p.is_dir() => p.join(default_name),
            Some(p) => p.clone(),
            None => PathBuf::from(DEFAULT_OUT_DIR).join(default_name),
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
