// src/feed/mod.rs
//! # Feed decoding
//!
//! This module hosts the **typed boundary against the upstream feed**:
//! it knows where pitch data lives inside a game-detail JSON document
//! and how to lift it into `PitchSample`s.
//!
//! ## What lives here
//! - serde mirrors of the play records, every field optional, unknown
//!   fields ignored.
//! - Container handling: plays appear at the top level (`plays`) or
//!   nested under drives (`drives[].plays`), and older documents spell
//!   the coordinate and velocity fields differently.
//! - The pitch filter: a play with no velocity is not a pitch.
//!
//! ## What does **not** live here
//! - Fetching. Documents arrive as strings; where they came from is the
//!   caller's business.
//! - Classification and aggregation (`zone`, `validate`).
//!
//! Malformed or partial records are skipped, never fatal; a pitch with
//! no coordinate is kept and classifies as Unknown downstream.

mod plays;

pub use plays::{Extraction, extract_samples};
