//! Keys and diatonic scales.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A major key with a known 7-chord diatonic scale.
///
/// Index 0 of the scale is the tonic; scale-degree indices used elsewhere in
/// the workspace are always in `0..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    C,
    G,
    D,
    A,
    E,
    F,
}

impl Key {
    /// All supported keys, in catalog order.
    pub const ALL: [Key; 6] = [Key::C, Key::G, Key::D, Key::A, Key::E, Key::F];

    /// The diatonic major scale for this key, tonic first.
    pub fn scale(&self) -> [&'static str; 7] {
        match self {
            Key::C => ["C", "Dm", "Em", "F", "G", "Am", "Bdim"],
            Key::G => ["G", "Am", "Bm", "C", "D", "Em", "F#dim"],
            Key::D => ["D", "Em", "F#m", "G", "A", "Bm", "C#dim"],
            Key::A => ["A", "Bm", "C#m", "D", "E", "F#m", "G#dim"],
            Key::E => ["E", "F#m", "G#m", "A", "B", "C#m", "D#dim"],
            Key::F => ["F", "Gm", "Am", "Bb", "C", "Dm", "Edim"],
        }
    }

    /// The relative minor of this key.
    pub fn relative_minor(&self) -> &'static str {
        match self {
            Key::C => "Am",
            Key::G => "Em",
            Key::D => "Bm",
            Key::A => "F#m",
            Key::E => "C#m",
            Key::F => "Dm",
        }
    }

    /// The key name as written in chord charts.
    pub fn name(&self) -> &'static str {
        match self {
            Key::C => "C",
            Key::G => "G",
            Key::D => "D",
            Key::A => "A",
            Key::E => "E",
            Key::F => "F",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unsupported key name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported key '{0}' (expected one of C, G, D, A, E, F)")]
pub struct ParseKeyError(pub String);

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Key::C),
            "G" => Ok(Key::G),
            "D" => Ok(Key::D),
            "A" => Ok(Key::A),
            "E" => Ok(Key::E),
            "F" => Ok(Key::F),
            other => Err(ParseKeyError(other.to_string())),
        }
    }
}
