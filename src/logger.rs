// src/logger.rs
//
// File logger behind the `log` facade: elapsed-time stamped lines
// appended to .store/debug.log. User-facing status goes through the
// Progress sink, not here.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: FileLogger = FileLogger;

struct FileLogger;

impl Log for FileLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true // max_level does the filtering
    }

    fn log(&self, record: &Record) {
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        let line = format!("[{elapsed}][{}] {}\n", record.level(), record.args());

        if let Ok(_guard) = LOG_LOCK.lock() {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(LOG_FILE) {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

/// Install the logger. Safe to call more than once; later calls only
/// adjust the level.
pub fn init(verbose: bool) {
    let _ = fs::create_dir_all(STORE_DIR);
    start();
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(if verbose { LevelFilter::Debug } else { LevelFilter::Info });
}

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_formatting() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(61_001), "00:01:01.001");
        assert_eq!(fmt_elapsed(3_600_000 + 125), "01:00:00.125");
    }
}
