// src/cli.rs
use std::{env, error::Error, path::Path, path::PathBuf};

use crate::export::Delim;
use crate::params::Params;
use crate::report;
use crate::runner::{self, Progress};

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_cli()?;
    crate::logger::init(params.verbose);

    let mut progress = CliProgress;
    let run = runner::run(&params, Some(&mut progress))?;

    // Progress goes to stderr above; stdout carries only the report so
    // --json stays pipeable.
    if params.json {
        println!("{}", report::render_json(&run.summary)?);
    } else {
        print!("{}", report::render_text(&run.summary, &run.samples));
    }

    for path in &run.files_written {
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

/// Prints progress lines to stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Analyzing {} file(s)...", total);
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn file_done(&mut self, path: &Path, pitches: usize, plays: usize) {
        eprintln!("  {}: {} pitches in {} plays", path.display(), pitches, plays);
    }
}

fn parse_cli() -> Result<Params, Box<dyn Error>> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--no-headers" => params.include_headers = false,
            "--export" => params.export = true,
            "--json" => params.json = true,
            "-v" | "--verbose" => params.verbose = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if other.starts_with('-') => return Err(format!("Unknown arg: {}", other).into()),
            _ => params.inputs.push(PathBuf::from(a)),
        }
    }

    if params.inputs.is_empty() {
        return Err("No input files. See --help.".into());
    }
    Ok(params)
}
