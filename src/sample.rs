// src/sample.rs
//
// Typed per-pitch records. One PitchSample is built per feed play that
// carries a velocity (that is what distinguishes a pitch from inning
// markers, at-bat starts and other play records). Samples are immutable
// after construction and discarded after aggregation.

use std::fmt;

use crate::zone::{self, ZoneLabel};

/// Umpire/outcome call attached to one pitch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CalledResult {
    StrikeLooking,
    Ball,
    Foul,
    InPlay,
    Other,
}

impl CalledResult {
    /// Parse the feed's play-type slug, e.g. `strike-looking`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "strike-looking" => Some(Self::StrikeLooking),
            "ball" => Some(Self::Ball),
            "foul" => Some(Self::Foul),
            "in-play" => Some(Self::InPlay),
            "strike-swinging" | "hit-by-pitch" => Some(Self::Other),
            _ => None,
        }
    }

    /// Parse the feed's display text, e.g. `Strike Looking`.
    pub fn from_text(text: &str) -> Option<Self> {
        let t = text.trim();
        if t.eq_ignore_ascii_case("strike looking") {
            Some(Self::StrikeLooking)
        } else if t.eq_ignore_ascii_case("ball") {
            Some(Self::Ball)
        } else if t.eq_ignore_ascii_case("foul") || t.eq_ignore_ascii_case("foul ball") {
            Some(Self::Foul)
        } else if t.eq_ignore_ascii_case("in play") {
            Some(Self::InPlay)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::StrikeLooking => "Strike Looking",
            Self::Ball => "Ball",
            Self::Foul => "Foul",
            Self::InPlay => "In Play",
            Self::Other => "Other",
        }
    }

    /// True for pitches the umpire actually ruled on (ball/strike).
    /// Fouls and balls in play say nothing about location.
    pub fn is_called(self) -> bool {
        matches!(self, Self::StrikeLooking | Self::Ball)
    }
}

impl fmt::Display for CalledResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Batter handedness for the pitch. Only mirrors the inside/outside
/// reading of the side bands; thresholds never move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Handedness {
    Left,
    Right,
    #[default]
    Unknown,
}

impl Handedness {
    /// Accepts the feed's `bats.abbreviation` values ("L"/"R") as well
    /// as spelled-out forms. Switch ("S") and anything else map to
    /// Unknown.
    pub fn from_feed(s: &str) -> Self {
        let t = s.trim();
        if t.eq_ignore_ascii_case("l") || t.eq_ignore_ascii_case("left") {
            Self::Left
        } else if t.eq_ignore_ascii_case("r") || t.eq_ignore_ascii_case("right") {
            Self::Right
        } else {
            Self::Unknown
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Unknown => "Unknown",
        }
    }
}

/// One parsed pitch. Coordinates stay optional: the feed omits them for
/// a fair share of pitches, and the classifier maps those to Unknown
/// rather than dropping the record here.
#[derive(Clone, Debug, PartialEq)]
pub struct PitchSample {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub velocity: f64,
    pub pitch_type: String,
    pub result: CalledResult,
    pub bats: Handedness,
    pub description: String,
}

impl PitchSample {
    pub fn coordinate(&self) -> Option<(f64, f64)> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }

    /// Classify this pitch's location.
    pub fn zone(&self) -> ZoneLabel {
        zone::classify(self.x, self.y, self.bats)
    }
}
