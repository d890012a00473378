// src/report.rs
//
// Render a ValidationSummary for human eyes (console text) or for
// machines (pretty JSON). No I/O here; callers decide where it goes.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::Write as _;

use crate::config::consts::LOCATION_SAMPLES;
use crate::sample::PitchSample;
use crate::validate::ValidationSummary;
use crate::zone::ZoneLabel;

/// The whole console report: totals, ranges, per-zone table, agreement
/// rates, a few example pitches per zone, and the suggested refined
/// box. Rates with an empty denominator print as N/A.
pub fn render_text(summary: &ValidationSummary, samples: &[PitchSample]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Strike Zone Validation ===");
    let _ = writeln!(
        out,
        "Pitches: {} ({} located, {} without coordinates)",
        summary.total, summary.located, summary.skipped
    );
    if let (Some(xr), Some(yr)) = (summary.x_range, summary.y_range) {
        let _ = writeln!(out, "X: {} to {}", xr.min, xr.max);
        let _ = writeln!(out, "Y: {} to {}", yr.min, yr.max);
    }

    if !summary.zones.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{:<22} | Strikes | Balls | Fouls | Other | Strike%",
            "Zone"
        );
        let _ = writeln!(out, "{}", "-".repeat(70));
        for (label, tally) in &summary.zones {
            let _ = writeln!(
                out,
                "{:<22} | {:>7} | {:>5} | {:>5} | {:>5} | {:>7}",
                label.to_string(),
                tally.strikes,
                tally.balls,
                tally.fouls,
                tally.other,
                pct(tally.strike_rate()),
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "In-zone strike rate:   {}", pct(summary.in_zone_strike_rate));
    let _ = writeln!(out, "Out-of-zone ball rate: {}", pct(summary.out_zone_ball_rate));
    let _ = writeln!(out, "Overall agreement:     {}", pct(summary.agreement));

    if let Some(b) = summary.suggested_bounds {
        let _ = writeln!(out);
        let _ = writeln!(out, "Suggested zone (middle 80% of called strikes):");
        let _ = writeln!(out, "  X {} to {}, Y {} to {}", b.x_min, b.x_max, b.y_min, b.y_max);
    }

    let by_zone = samples_by_zone(samples);
    if !by_zone.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "=== Sample pitches by zone ===");
        for (label, picks) in &by_zone {
            let _ = writeln!(out, "{label}:");
            for (i, s) in picks.iter().enumerate() {
                let kind = if s.pitch_type.is_empty() { "Unknown" } else { &s.pitch_type };
                let _ = writeln!(out, "  {}. {} ({} mph) - {}", i + 1, kind, s.velocity, s.result);
                if let Some((x, y)) = s.coordinate() {
                    let _ = writeln!(out, "     at ({x}, {y})");
                }
            }
        }
    }

    out
}

/// The summary as pretty JSON, zones keyed by their display label.
pub fn render_json(summary: &ValidationSummary) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// First few samples seen per zone, report order. Unknown-located
/// samples are already accounted for in the skipped count.
fn samples_by_zone(samples: &[PitchSample]) -> BTreeMap<ZoneLabel, Vec<&PitchSample>> {
    let mut by_zone: BTreeMap<ZoneLabel, Vec<&PitchSample>> = BTreeMap::new();
    for s in samples {
        let zone = s.zone();
        if !zone.is_known() {
            continue;
        }
        let picks = by_zone.entry(zone).or_default();
        if picks.len() < LOCATION_SAMPLES {
            picks.push(s);
        }
    }
    by_zone
}

fn pct(rate: Option<f64>) -> String {
    match rate {
        Some(r) => format!("{:.1}%", r * 100.0),
        None => "N/A".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{CalledResult, Handedness};
    use crate::validate::validate;

    fn pitch(x: f64, y: f64, result: CalledResult) -> PitchSample {
        PitchSample {
            x: Some(x),
            y: Some(y),
            velocity: 92.5,
            pitch_type: "Slider".into(),
            result,
            bats: Handedness::Right,
            description: String::new(),
        }
    }

    #[test]
    fn empty_batch_renders_na() {
        let text = render_text(&validate(&[]), &[]);
        assert!(text.contains("Pitches: 0 (0 located, 0 without coordinates)"));
        assert!(text.contains("In-zone strike rate:   N/A"));
        assert!(text.contains("Overall agreement:     N/A"));
        assert!(!text.contains("Suggested zone"));
    }

    #[test]
    fn table_and_samples_sections() {
        let batch = vec![
            pitch(110.0, 170.0, CalledResult::StrikeLooking),
            pitch(20.0, 170.0, CalledResult::Ball),
        ];
        let text = render_text(&validate(&batch), &batch);
        assert!(text.contains("Strike Zone Center"));
        assert!(text.contains("Middle Way Outside"));
        assert!(text.contains("In-zone strike rate:   100.0%"));
        assert!(text.contains("Slider (92.5 mph) - Ball"));
        assert!(text.contains("at (20, 170)"));
    }

    #[test]
    fn sample_section_caps_per_zone() {
        let batch: Vec<PitchSample> =
            (0..10).map(|_| pitch(90.0, 160.0, CalledResult::Ball)).collect();
        let by_zone = samples_by_zone(&batch);
        assert_eq!(by_zone.values().next().unwrap().len(), LOCATION_SAMPLES);
    }
}
