// src/feed/plays.rs

use std::error::Error;

use serde::Deserialize;

use crate::sample::{CalledResult, Handedness, PitchSample};

/// What one document yielded. `plays_seen` counts every play record in
/// the document, pitches or not, so callers can log the ratio.
#[derive(Debug, Default)]
pub struct Extraction {
    pub samples: Vec<PitchSample>,
    pub plays_seen: usize,
}

/// Decode a whole game-detail document and pull out its pitches.
pub fn extract_samples(doc: &str) -> Result<Extraction, Box<dyn Error>> {
    let feed: GameFeed = serde_json::from_str(doc)?;

    let mut out = Extraction::default();
    for play in feed.plays() {
        out.plays_seen += 1;
        if let Some(sample) = sample_from_play(play) {
            out.samples.push(sample);
        }
    }
    log::debug!("extracted {} pitches from {} plays", out.samples.len(), out.plays_seen);
    Ok(out)
}

/* ---------------- feed mirrors ---------------- */

#[derive(Deserialize)]
struct GameFeed {
    #[serde(default)]
    plays: Vec<RawPlay>,
    #[serde(default)]
    drives: Vec<RawDrive>,
}

impl GameFeed {
    fn plays(&self) -> impl Iterator<Item = &RawPlay> + '_ {
        self.plays
            .iter()
            .chain(self.drives.iter().flat_map(|d| d.plays.iter()))
    }
}

#[derive(Deserialize)]
struct RawDrive {
    #[serde(default)]
    plays: Vec<RawPlay>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlay {
    #[serde(default)]
    pitch_coordinate: Option<RawCoordinate>,
    #[serde(default)]
    coordinate: Option<RawCoordinate>,
    #[serde(default)]
    pitch_velocity: Option<RawVelocity>,
    #[serde(default)]
    pitch_type: Option<RawLabel>,
    #[serde(default, rename = "type")]
    play_type: Option<RawPlayType>,
    #[serde(default)]
    summary_type: Option<String>,
    #[serde(default)]
    bats: Option<RawBats>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct RawCoordinate {
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
}

/// Velocity shows up both as a bare number and as `{"value": ...}`.
/// Anything else (seen: bare strings in very old documents) is treated
/// as absent, which drops the play as a non-pitch.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawVelocity {
    Plain(f64),
    Object {
        #[serde(default)]
        value: Option<f64>,
    },
    Junk(serde_json::Value),
}

impl RawVelocity {
    fn value(&self) -> Option<f64> {
        match self {
            RawVelocity::Plain(v) => Some(*v),
            RawVelocity::Object { value } => *value,
            RawVelocity::Junk(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct RawLabel {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct RawPlayType {
    #[serde(default, rename = "type")]
    slug: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct RawBats {
    #[serde(default)]
    abbreviation: Option<String>,
}

/* ---------------- lifting ---------------- */

/// None = not a pitch (no velocity). Everything else is tolerated:
/// either coordinate spelling, either velocity spelling, absent type
/// and batter info.
fn sample_from_play(play: &RawPlay) -> Option<PitchSample> {
    let velocity = play.pitch_velocity.as_ref().and_then(RawVelocity::value)?;

    let coord = play.pitch_coordinate.as_ref().or(play.coordinate.as_ref());
    let (x, y) = coord.map_or((None, None), |c| (c.x, c.y));

    let bats = play
        .bats
        .as_ref()
        .and_then(|b| b.abbreviation.as_deref())
        .map_or(Handedness::Unknown, Handedness::from_feed);

    Some(PitchSample {
        x,
        y,
        velocity,
        pitch_type: play
            .pitch_type
            .as_ref()
            .and_then(|t| t.text.clone())
            .unwrap_or_default(),
        result: called_result(play),
        bats,
        description: play.text.clone().unwrap_or_default(),
    })
}

/// Result precedence: the type slug, then the type text, then the bare
/// summary marker some older documents carry.
fn called_result(play: &RawPlay) -> CalledResult {
    if let Some(t) = &play.play_type {
        if let Some(r) = t.slug.as_deref().and_then(CalledResult::from_slug) {
            return r;
        }
        if let Some(r) = t.text.as_deref().and_then(CalledResult::from_text) {
            return r;
        }
    }
    if let Some(summary) = &play.summary_type {
        let summary = summary.to_ascii_lowercase();
        let text = play.text.as_deref().unwrap_or("").to_ascii_lowercase();
        if summary.contains("ball") {
            return CalledResult::Ball;
        }
        if summary.contains("foul") {
            return CalledResult::Foul;
        }
        if summary.contains("strike") && text.contains("looking") {
            return CalledResult::StrikeLooking;
        }
    }
    CalledResult::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_plays_container() {
        let doc = r#"{
            "plays": [
                {"type": {"type": "start-inning", "text": "Start Inning"}},
                {
                    "pitchCoordinate": {"x": 110, "y": 170},
                    "pitchVelocity": 94.2,
                    "pitchType": {"text": "Four-Seam Fastball"},
                    "type": {"type": "strike-looking", "text": "Strike Looking"},
                    "bats": {"abbreviation": "R"},
                    "text": "Pitch 1 : Strike 1 Looking"
                }
            ]
        }"#;
        let ex = extract_samples(doc).unwrap();
        assert_eq!(ex.plays_seen, 2);
        assert_eq!(ex.samples.len(), 1);

        let s = &ex.samples[0];
        assert_eq!(s.coordinate(), Some((110.0, 170.0)));
        assert_eq!(s.velocity, 94.2);
        assert_eq!(s.pitch_type, "Four-Seam Fastball");
        assert_eq!(s.result, CalledResult::StrikeLooking);
        assert_eq!(s.bats, Handedness::Right);
    }

    #[test]
    fn drives_container_and_velocity_object() {
        let doc = r#"{
            "drives": [
                {"plays": [
                    {
                        "coordinate": {"x": 60, "y": 200},
                        "pitchVelocity": {"value": 88.0},
                        "type": {"text": "Ball"},
                        "bats": {"abbreviation": "L"}
                    }
                ]},
                {"plays": [
                    {"text": "Mound visit"}
                ]}
            ]
        }"#;
        let ex = extract_samples(doc).unwrap();
        assert_eq!(ex.plays_seen, 2);
        assert_eq!(ex.samples.len(), 1);
        assert_eq!(ex.samples[0].result, CalledResult::Ball);
        assert_eq!(ex.samples[0].bats, Handedness::Left);
        assert_eq!(ex.samples[0].velocity, 88.0);
    }

    #[test]
    fn pitch_without_coordinate_is_kept() {
        let doc = r#"{
            "plays": [
                {"pitchVelocity": 91.0, "type": {"type": "ball", "text": "Ball"}}
            ]
        }"#;
        let ex = extract_samples(doc).unwrap();
        assert_eq!(ex.samples.len(), 1);
        assert_eq!(ex.samples[0].coordinate(), None);
    }

    #[test]
    fn summary_marker_fallback() {
        let doc = r#"{
            "plays": [
                {
                    "pitchVelocity": 85.5,
                    "summaryType": "strike",
                    "text": "Pitch 2 : Strike 2 Looking"
                },
                {
                    "pitchVelocity": 86.0,
                    "summaryType": "ball"
                }
            ]
        }"#;
        let ex = extract_samples(doc).unwrap();
        assert_eq!(ex.samples[0].result, CalledResult::StrikeLooking);
        assert_eq!(ex.samples[1].result, CalledResult::Ball);
    }

    #[test]
    fn unrecognized_results_are_other() {
        let doc = r#"{
            "plays": [
                {"pitchVelocity": 95.0, "type": {"type": "strike-swinging", "text": "Strike Swinging"}},
                {"pitchVelocity": 90.0}
            ]
        }"#;
        let ex = extract_samples(doc).unwrap();
        assert_eq!(ex.samples[0].result, CalledResult::Other);
        assert_eq!(ex.samples[1].result, CalledResult::Other);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(extract_samples("not json").is_err());
    }

    #[test]
    fn empty_document_yields_nothing() {
        let ex = extract_samples("{}").unwrap();
        assert_eq!(ex.plays_seen, 0);
        assert!(ex.samples.is_empty());
    }
}
