//! Markov training corpus and transposition tables.
//!
//! The corpus is the theory-corrected snapshot: no dominant-function
//! openings, and the supertonic appears as `Dm` (ii) rather than a raw `D`.
//! All progressions are written in C major; generated walks are transposed
//! afterwards via the substitution tables below.

use crate::key::Key;

/// The key the corpus is written in.
pub const NATIVE_KEY: Key = Key::C;

/// Fixed training corpus of four-chord progressions in C major.
pub const TRAINING_CORPUS: [[&str; 4]; 15] = [
    ["C", "Am", "F", "G"],
    ["Am", "F", "C", "G"],
    ["C", "F", "Am", "G"],
    ["Am", "F", "G", "C"],
    ["F", "C", "G", "Am"],
    ["Em", "Am", "Dm", "G"],
    ["C", "G", "Am", "F"],
    ["Am", "Dm", "G", "C"],
    ["F", "G", "Em", "Am"],
    ["C", "Am", "Dm", "G"],
    ["Dm", "G", "C", "Am"],
    ["Am", "Em", "C", "G"],
    ["Am", "F", "G", "Em"],
    ["C", "Em", "F", "G"],
    ["F", "Am", "G", "C"],
];

/// Tonic- and subdominant-function chords eligible as walk openings.
/// Dominant-function chords are excluded to avoid awkward starts.
pub const START_CANDIDATES: [&str; 5] = ["C", "Am", "F", "Dm", "Em"];

/// Chord substitution table for transposing a C-major walk into `key`.
///
/// Each table covers exactly the chords that can appear in the corpus; a
/// chord absent from the table is passed through unchanged. Keys without
/// their own table transpose as C, i.e. identity.
pub fn transposition_map(key: Key) -> &'static [(&'static str, &'static str)] {
    match key {
        Key::G => &[
            ("C", "G"),
            ("Dm", "Am"),
            ("Em", "Bm"),
            ("F", "C"),
            ("G", "D"),
            ("Am", "Em"),
            ("Bdim", "F#dim"),
        ],
        Key::D => &[
            ("C", "D"),
            ("Dm", "Em"),
            ("Em", "F#m"),
            ("F", "G"),
            ("G", "A"),
            ("Am", "Bm"),
            ("Bdim", "C#dim"),
        ],
        Key::F => &[
            ("C", "F"),
            ("Dm", "Gm"),
            ("Em", "Am"),
            ("F", "Bb"),
            ("G", "C"),
            ("Am", "Dm"),
            ("Bdim", "Edim"),
        ],
        Key::C | Key::A | Key::E => &[
            ("C", "C"),
            ("Dm", "Dm"),
            ("Em", "Em"),
            ("F", "F"),
            ("G", "G"),
            ("Am", "Am"),
            ("Bdim", "Bdim"),
        ],
    }
}
