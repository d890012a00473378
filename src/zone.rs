// src/zone.rs
//
// Coordinate-to-zone classifier. Pure threshold comparisons over the
// band constants in config::consts; no I/O, no state.
//
// Orientation (catcher's view): lower x = right side of the plate,
// higher x = left side, higher y = lower pitch. Handedness picks which
// side reads as "inside": a left-handed batter stands so the right
// side of the plate is inside; unknown handedness falls back to the
// right-handed reading.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::config::consts::{
    PLATE_X_MAX, PLATE_X_MIN, WAY_X_HIGH, WAY_X_LOW, ZONE_Y_HIGH, ZONE_Y_LOW,
};
use crate::sample::Handedness;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Height {
    High,
    Middle,
    Low,
}

impl Height {
    fn of(y: f64) -> Self {
        if y > ZONE_Y_LOW {
            Height::Low
        } else if y < ZONE_Y_HIGH {
            Height::High
        } else {
            Height::Middle
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Height::High => "High",
            Height::Middle => "Middle",
            Height::Low => "Low",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    WayInside,
    Inside,
    Outside,
    WayOutside,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::WayInside => "Way Inside",
            Side::Inside => "Inside",
            Side::Outside => "Outside",
            Side::WayOutside => "Way Outside",
        }
    }
}

/// Coarse location bucket for one pitch. `Zone` is over the plate,
/// `Off` is off it; `Unknown` means the feed had no usable coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ZoneLabel {
    Zone(Height),
    Off(Height, Side),
    Unknown,
}

impl ZoneLabel {
    /// True only for the center bucket: over the plate at middle
    /// height. The High/Low zone buckets sit on the vertical edges and
    /// are not expected to be called strikes.
    pub fn expects_strike(self) -> bool {
        matches!(self, ZoneLabel::Zone(Height::Middle))
    }

    pub fn is_known(self) -> bool {
        !matches!(self, ZoneLabel::Unknown)
    }
}

impl fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneLabel::Zone(Height::High) => f.write_str("High Strike Zone"),
            ZoneLabel::Zone(Height::Middle) => f.write_str("Strike Zone Center"),
            ZoneLabel::Zone(Height::Low) => f.write_str("Low Strike Zone"),
            ZoneLabel::Off(h, s) => write!(f, "{} {}", h.label(), s.label()),
            ZoneLabel::Unknown => f.write_str("Unknown"),
        }
    }
}

// Serialized as the display string so summaries keyed by label come
// out as plain JSON object keys.
impl Serialize for ZoneLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Classify a pitch coordinate. Missing x or y yields Unknown; the
/// function never fails.
pub fn classify(x: Option<f64>, y: Option<f64>, bats: Handedness) -> ZoneLabel {
    let (Some(x), Some(y)) = (x, y) else {
        return ZoneLabel::Unknown;
    };

    let height = Height::of(y);
    if (PLATE_X_MIN..=PLATE_X_MAX).contains(&x) {
        return ZoneLabel::Zone(height);
    }

    let right_side = x < PLATE_X_MIN;
    let way = x < WAY_X_LOW || x > WAY_X_HIGH;
    let inside = match bats {
        Handedness::Left => right_side,
        Handedness::Right | Handedness::Unknown => !right_side,
    };
    let side = match (inside, way) {
        (true, true) => Side::WayInside,
        (true, false) => Side::Inside,
        (false, false) => Side::Outside,
        (false, true) => Side::WayOutside,
    };
    ZoneLabel::Off(height, side)
}
