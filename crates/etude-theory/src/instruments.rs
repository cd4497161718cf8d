//! Instrument categories, genre ensemble rules, and mood pools.

use serde::Serialize;

/// An instrument category: a set of role-tagged instrument pools.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InstrumentCategory {
    /// Category name referenced by ensemble rules.
    pub name: &'static str,
    /// Role tag paired with the instruments that can fill it.
    pub roles: &'static [(&'static str, &'static [&'static str])],
}

impl InstrumentCategory {
    /// The instrument pool for a role, if this category covers it.
    pub fn pool(&self, role: &str) -> Option<&'static [&'static str]> {
        self.roles
            .iter()
            .find(|(name, _)| *name == role)
            .map(|(_, pool)| *pool)
    }
}

/// The fixed instrument-category catalog.
pub static CATEGORIES: [InstrumentCategory; 4] = [
    InstrumentCategory {
        name: "acoustic",
        roles: &[
            (
                "lead",
                &["acoustic guitar", "piano", "violin", "flute", "harmonica"],
            ),
            ("rhythm", &["acoustic guitar", "ukulele", "banjo"]),
            ("bass", &["upright bass", "acoustic bass"]),
            ("percussion", &["cajon", "bongos", "tambourine", "shaker"]),
        ],
    },
    InstrumentCategory {
        name: "electric",
        roles: &[
            (
                "lead",
                &["electric guitar", "synth lead", "electric violin", "electric piano"],
            ),
            ("rhythm", &["electric guitar", "electric piano", "synth pad"]),
            ("bass", &["electric bass", "synth bass"]),
            ("percussion", &["drum kit", "electronic drums"]),
        ],
    },
    InstrumentCategory {
        name: "orchestral",
        roles: &[
            ("strings", &["violin", "viola", "cello", "double bass"]),
            ("woodwind", &["flute", "oboe", "clarinet", "bassoon"]),
            ("brass", &["trumpet", "horn", "trombone", "tuba"]),
            ("percussion", &["timpani", "glockenspiel", "woodblock"]),
        ],
    },
    InstrumentCategory {
        name: "world",
        roles: &[
            ("string", &["sitar", "kalimba", "oud", "balalaika"]),
            ("wind", &["shakuhachi", "didgeridoo", "bagpipes"]),
            ("percussion", &["tabla", "djembe", "marimba", "gamelan"]),
        ],
    },
];

/// Look up an instrument category by name.
pub fn category(name: &str) -> Option<&'static InstrumentCategory> {
    CATEGORIES.iter().find(|cat| cat.name == name)
}

/// Genre-conditioned ensemble requirements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnsembleRule {
    /// Genre name used for lookups.
    pub genre: &'static str,
    /// Roles that must each be filled exactly once, in order.
    pub required_roles: &'static [&'static str],
    /// Eligible category names.
    pub categories: &'static [&'static str],
    /// Upper bound on the assembled ensemble before size bounding.
    pub max_instruments: usize,
}

/// The fixed genre ensemble rules.
pub static ENSEMBLE_RULES: [EnsembleRule; 4] = [
    EnsembleRule {
        genre: "pop",
        required_roles: &["lead", "rhythm", "bass"],
        categories: &["acoustic", "electric"],
        max_instruments: 4,
    },
    EnsembleRule {
        genre: "jazz",
        required_roles: &["lead", "rhythm", "bass", "percussion"],
        categories: &["acoustic", "electric"],
        max_instruments: 5,
    },
    EnsembleRule {
        genre: "orchestral",
        required_roles: &["strings", "woodwind"],
        categories: &["orchestral"],
        max_instruments: 6,
    },
    EnsembleRule {
        genre: "world",
        required_roles: &["string", "percussion"],
        categories: &["world", "acoustic"],
        max_instruments: 3,
    },
];

/// Look up an ensemble rule by genre name.
pub fn ensemble_rule(genre: &str) -> Option<&'static EnsembleRule> {
    ENSEMBLE_RULES.iter().find(|rule| rule.genre == genre)
}

/// The rule unknown genres fall back to ("pop").
pub fn fallback_rule() -> &'static EnsembleRule {
    &ENSEMBLE_RULES[0]
}

/// The fixed mood catalog.
pub const MOODS: [&str; 5] = ["bright", "dark", "energetic", "calm", "mysterious"];

/// The augmentation pool for a mood, if recognized.
pub fn mood_pool(mood: &str) -> Option<&'static [&'static str]> {
    match mood {
        "bright" => Some(&["ukulele", "marimba", "trumpet"]),
        "dark" => Some(&["cello", "oboe", "synth pad"]),
        "energetic" => Some(&["electric guitar", "drum kit", "electric bass"]),
        "calm" => Some(&["piano", "flute", "harp"]),
        "mysterious" => Some(&["synth pad", "kalimba", "electric violin"]),
        _ => None,
    }
}
