//! Song-structure templates.

use serde::{Deserialize, Serialize};

use crate::pattern::Complexity;

/// A song-structure size template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureKind {
    Simple,
    Standard,
    Complex,
}

impl StructureKind {
    /// The section sequence for this template.
    pub fn sections(&self) -> &'static [&'static str] {
        match self {
            StructureKind::Simple => &["verse", "chorus"],
            StructureKind::Standard => {
                &["intro", "verse", "chorus", "verse", "chorus", "outro"]
            }
            StructureKind::Complex => &[
                "intro",
                "verse",
                "prechorus",
                "chorus",
                "verse",
                "prechorus",
                "chorus",
                "bridge",
                "chorus",
                "outro",
            ],
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            StructureKind::Simple => "simple two-section form",
            StructureKind::Standard => "standard pop arrangement",
            StructureKind::Complex => "multi-section arrangement",
        }
    }

    /// The deterministic pattern-complexity to structure-size mapping.
    pub fn for_complexity(complexity: Complexity) -> StructureKind {
        match complexity {
            Complexity::Beginner => StructureKind::Simple,
            Complexity::Intermediate => StructureKind::Standard,
            Complexity::Advanced => StructureKind::Complex,
        }
    }
}
