// src/export.rs
//
// Per-pitch CSV/TSV export of a classified batch. Write-only: the
// crate never reads these files back.

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::sample::PitchSample;

pub const EXPORT_HEADERS: [&str; 8] =
    ["X", "Y", "Velocity", "Pitch type", "Result", "Bats", "Zone", "Description"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
        }
    }

    pub fn ext(self) -> &'static str {
        match self {
            Delim::Csv => "csv",
            Delim::Tsv => "tsv",
        }
    }
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// One export row per sample; blanks for missing coordinates.
pub fn export_row(s: &PitchSample) -> Vec<String> {
    let num = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
    vec![
        num(s.x),
        num(s.y),
        s.velocity.to_string(),
        s.pitch_type.clone(),
        s.result.label().to_string(),
        s.bats.label().to_string(),
        s.zone().to_string(),
        s.description.clone(),
    ]
}

/// Build the full export string for a batch.
pub fn to_export_string(samples: &[PitchSample], include_headers: bool, delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let sep = delim.sep();

    if include_headers {
        let headers: Vec<String> = EXPORT_HEADERS.iter().map(|h| h.to_string()).collect();
        let _ = write_row(&mut buf, &headers, sep);
    }
    for s in samples {
        let _ = write_row(&mut buf, &export_row(s), sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/// Write the batch to `path`, creating parent directories as needed.
/// Returns the path written.
pub fn write_export(
    path: &Path,
    samples: &[PitchSample],
    include_headers: bool,
    delim: Delim,
) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, to_export_string(samples, include_headers, delim))?;
    log::info!("wrote {} rows to {}", samples.len(), path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{CalledResult, Handedness};

    fn sample() -> PitchSample {
        PitchSample {
            x: Some(110.0),
            y: Some(170.0),
            velocity: 94.2,
            pitch_type: "Four-Seam Fastball".into(),
            result: CalledResult::StrikeLooking,
            bats: Handedness::Right,
            description: "Pitch 1 : Strike 1 Looking".into(),
        }
    }

    #[test]
    fn row_shape_matches_headers() {
        assert_eq!(export_row(&sample()).len(), EXPORT_HEADERS.len());
    }

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        let row = vec!["plain".to_string(), "with,comma".to_string(), "with\"quote".to_string()];
        write_row(&mut buf, &row, ',').unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "plain,\"with,comma\",\"with\"\"quote\"\n"
        );
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let mut buf = Vec::new();
        let row = vec!["a,b".to_string(), "c".to_string()];
        write_row(&mut buf, &row, Delim::Tsv.sep()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,b\tc\n");
    }

    #[test]
    fn export_string_headers_and_blank_coords() {
        let mut s = sample();
        s.x = None;
        s.y = None;
        let text = to_export_string(&[s], true, Delim::Csv);
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "X,Y,Velocity,Pitch type,Result,Bats,Zone,Description"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with(",,94.2,"));
        assert!(row.contains("Unknown"));
    }
}
