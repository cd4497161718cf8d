//! Tempo bands.

use serde::Serialize;

/// A named BPM range. Sampled tempos are drawn uniformly from the inclusive
/// `[min_bpm, max_bpm]` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TempoBand {
    /// Band tag referenced by genre profiles.
    pub tag: &'static str,
    /// Minimum BPM, inclusive.
    pub min_bpm: u16,
    /// Maximum BPM, inclusive.
    pub max_bpm: u16,
    /// Human-readable description.
    pub description: &'static str,
}

/// The fixed tempo-band catalog.
pub static TEMPO_BANDS: [TempoBand; 4] = [
    TempoBand {
        tag: "ballad",
        min_bpm: 60,
        max_bpm: 80,
        description: "ballad",
    },
    TempoBand {
        tag: "mid-tempo",
        min_bpm: 90,
        max_bpm: 120,
        description: "mid-tempo",
    },
    TempoBand {
        tag: "upbeat",
        min_bpm: 130,
        max_bpm: 160,
        description: "upbeat",
    },
    TempoBand {
        tag: "fast",
        min_bpm: 170,
        max_bpm: 200,
        description: "fast",
    },
];

/// Look up a tempo band by tag.
pub fn tempo_band(tag: &str) -> Option<&'static TempoBand> {
    TEMPO_BANDS.iter().find(|band| band.tag == tag)
}
