// src/config/consts.rs

// Zone bands, in the feed's pixel space (catcher's view, observed
// range roughly 0-255 per axis). Empirically chosen against called
// pitches, not derived from plate geometry. Lower x = right side of
// the plate, higher y = lower pitch.
pub const PLATE_X_MIN: f64 = 60.0;
pub const PLATE_X_MAX: f64 = 120.0;
pub const WAY_X_LOW: f64 = 40.0; // beyond these, "way" off the plate
pub const WAY_X_HIGH: f64 = 140.0;
pub const ZONE_Y_HIGH: f64 = 140.0; // above the zone (smaller y = higher pitch)
pub const ZONE_Y_LOW: f64 = 180.0; // below the zone

// Local log sink
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_EXPORT_STEM: &str = "pitches";

// Report
pub const LOCATION_SAMPLES: usize = 3; // example pitches kept per zone
pub const REFINE_TRIM: f64 = 0.10; // middle 80% of called strikes
