//! Progression-pattern catalog.
//!
//! Each pattern is a sequence of zero-based scale-degree indices plus the
//! metadata the generators use for weighting, structure suggestions, and
//! analysis.

use serde::{Deserialize, Serialize};

/// Difficulty level of a progression pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Beginner,
    Intermediate,
    Advanced,
}

impl Complexity {
    /// Label used in the analysis block.
    pub fn name(&self) -> &'static str {
        match self {
            Complexity::Beginner => "beginner",
            Complexity::Intermediate => "intermediate",
            Complexity::Advanced => "advanced",
        }
    }
}

/// A progression pattern drawn from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressionPattern {
    /// Display name.
    pub name: &'static str,
    /// Scale-degree indices, each in `0..=6`.
    pub degrees: &'static [usize],
    /// Roman-numeral description.
    pub description: &'static str,
    /// Difficulty level.
    pub complexity: Complexity,
    /// Mood tag.
    pub mood: &'static str,
}

/// The fixed progression-pattern catalog.
pub static PROGRESSION_PATTERNS: [ProgressionPattern; 8] = [
    ProgressionPattern {
        name: "Pop Classic",
        degrees: &[0, 5, 3, 4],
        description: "I-vi-IV-V",
        complexity: Complexity::Beginner,
        mood: "bright",
    },
    ProgressionPattern {
        name: "Canon",
        degrees: &[0, 4, 5, 3, 0, 3, 4, 4],
        description: "I-V-vi-IV-I-IV-V-V",
        complexity: Complexity::Intermediate,
        mood: "classic",
    },
    ProgressionPattern {
        name: "Komuro",
        degrees: &[5, 3, 4, 0],
        description: "vi-IV-V-I",
        complexity: Complexity::Beginner,
        mood: "emotional",
    },
    ProgressionPattern {
        name: "Jazz Turnaround",
        degrees: &[0, 5, 1, 4],
        description: "I-vi-ii-V",
        complexity: Complexity::Intermediate,
        mood: "sophisticated",
    },
    ProgressionPattern {
        name: "Blues",
        degrees: &[0, 0, 3, 0, 4, 3, 0, 4],
        description: "12-bar blues",
        complexity: Complexity::Intermediate,
        mood: "bluesy",
    },
    ProgressionPattern {
        name: "Diatonic Ascent",
        degrees: &[0, 1, 2, 3],
        description: "I-ii-iii-IV",
        complexity: Complexity::Beginner,
        mood: "ascending",
    },
    ProgressionPattern {
        name: "Diatonic Descent",
        degrees: &[4, 3, 2, 1],
        description: "V-IV-iii-ii",
        complexity: Complexity::Intermediate,
        mood: "descending",
    },
    ProgressionPattern {
        name: "Dominant Chain",
        degrees: &[0, 6, 3, 4],
        description: "I-vii\u{b0}-IV-V",
        complexity: Complexity::Advanced,
        mood: "dramatic",
    },
];
