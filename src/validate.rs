// src/validate.rs
//
// Batch validator: aggregate classified pitches against the umpire's
// actual calls. Single pass, pure, commutative — input order never
// changes the summary.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::consts::REFINE_TRIM;
use crate::sample::{CalledResult, PitchSample};
use crate::zone::ZoneLabel;

/// Per-zone call counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ZoneTally {
    pub strikes: u32,
    pub balls: u32,
    pub fouls: u32,
    pub other: u32,
}

impl ZoneTally {
    fn record(&mut self, result: CalledResult) {
        match result {
            CalledResult::StrikeLooking => self.strikes += 1,
            CalledResult::Ball => self.balls += 1,
            CalledResult::Foul => self.fouls += 1,
            CalledResult::InPlay | CalledResult::Other => self.other += 1,
        }
    }

    /// Pitches the umpire ruled on in this zone.
    pub fn called(&self) -> u32 {
        self.strikes + self.balls
    }

    /// Called-strike fraction, None when nothing was called here.
    pub fn strike_rate(&self) -> Option<f64> {
        match self.called() {
            0 => None,
            n => Some(f64::from(self.strikes) / f64::from(n)),
        }
    }
}

/// Observed min/max of one coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CoordRange {
    pub min: f64,
    pub max: f64,
}

impl CoordRange {
    fn fold(range: Option<CoordRange>, v: f64) -> Option<CoordRange> {
        Some(match range {
            None => CoordRange { min: v, max: v },
            Some(r) => CoordRange { min: r.min.min(v), max: r.max.max(v) },
        })
    }
}

/// A refined zone box suggested by the data itself.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ZoneBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Aggregate result over one batch. Report-only; built once, never
/// updated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationSummary {
    /// Samples handed in.
    pub total: usize,
    /// Samples with a usable coordinate.
    pub located: usize,
    /// Samples without one (classified Unknown, excluded below).
    pub skipped: usize,
    pub zones: BTreeMap<ZoneLabel, ZoneTally>,
    pub x_range: Option<CoordRange>,
    pub y_range: Option<CoordRange>,
    /// Of called pitches labeled Strike Zone Center, the fraction the
    /// umpire called strikes.
    pub in_zone_strike_rate: Option<f64>,
    /// Of called pitches labeled anything else, the fraction called
    /// balls.
    pub out_zone_ball_rate: Option<f64>,
    /// Both of the above over all called pitches with a known label.
    pub agreement: Option<f64>,
    pub suggested_bounds: Option<ZoneBounds>,
}

/// Validate one batch. Empty input (or input with no usable samples)
/// produces all-zero counts and None rates — reported as N/A, never a
/// division by zero.
pub fn validate(samples: &[PitchSample]) -> ValidationSummary {
    let mut zones: BTreeMap<ZoneLabel, ZoneTally> = BTreeMap::new();
    let mut located = 0usize;
    let mut skipped = 0usize;
    let mut x_range = None;
    let mut y_range = None;

    let mut in_called = 0u32;
    let mut in_strikes = 0u32;
    let mut out_called = 0u32;
    let mut out_balls = 0u32;

    for s in samples {
        let zone = s.zone();
        if !zone.is_known() {
            skipped += 1;
            continue;
        }
        located += 1;
        zones.entry(zone).or_default().record(s.result);

        if let Some((x, y)) = s.coordinate() {
            x_range = CoordRange::fold(x_range, x);
            y_range = CoordRange::fold(y_range, y);
        }

        if s.result.is_called() {
            if zone.expects_strike() {
                in_called += 1;
                if s.result == CalledResult::StrikeLooking {
                    in_strikes += 1;
                }
            } else {
                out_called += 1;
                if s.result == CalledResult::Ball {
                    out_balls += 1;
                }
            }
        }
    }

    let rate = |hits: u32, n: u32| (n > 0).then(|| f64::from(hits) / f64::from(n));

    ValidationSummary {
        total: samples.len(),
        located,
        skipped,
        zones,
        x_range,
        y_range,
        in_zone_strike_rate: rate(in_strikes, in_called),
        out_zone_ball_rate: rate(out_balls, out_called),
        agreement: rate(in_strikes + out_balls, in_called + out_called),
        suggested_bounds: suggest_zone_bounds(samples),
    }
}

/// Refined zone box from the middle 80% of called-strike coordinates,
/// the same trim the exploratory analysis settled on. None without at
/// least one located called strike.
pub fn suggest_zone_bounds(samples: &[PitchSample]) -> Option<ZoneBounds> {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for s in samples {
        if s.result == CalledResult::StrikeLooking {
            if let Some((x, y)) = s.coordinate() {
                xs.push(x);
                ys.push(y);
            }
        }
    }
    if xs.is_empty() {
        return None;
    }

    xs.sort_by(f64::total_cmp);
    ys.sort_by(f64::total_cmp);

    let (x_min, x_max) = trimmed(&xs);
    let (y_min, y_max) = trimmed(&ys);
    Some(ZoneBounds { x_min, x_max, y_min, y_max })
}

fn trimmed(sorted: &[f64]) -> (f64, f64) {
    let n = sorted.len();
    let lo = (n as f64 * REFINE_TRIM) as usize;
    let hi = (n as f64 * (1.0 - REFINE_TRIM)) as usize;
    let last = sorted[n - 1];
    (sorted[lo.min(n - 1)], sorted.get(hi).copied().unwrap_or(last))
}
