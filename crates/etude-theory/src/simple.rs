//! Flat catalogs backing the "simple" generation mode.
//!
//! Each entry is pre-written and selected with a single uniform pick; the
//! two catalogs are sampled independently with no cross-conditioning.

/// Twenty-five curated chord progressions, mostly in C major / A minor.
pub const CHORD_PROGRESSIONS: [&str; 25] = [
    "C - Am - F - G",
    "Am - F - C - G",
    "C - F - Am - G",
    "Am - F - G - C",
    "F - C - G - Am",
    "Em - Am - Dm - G",
    "C - G - Am - F",
    "Am - Dm - G - C",
    "F - G - Em - Am",
    "C - Am - Dm - G",
    "Dm - G - C - Am",
    "Am - Em - C - G",
    "Am - F - G - Em",
    "C - Em - F - G",
    "F - Am - G - C",
    "Dm - Am - F - G",
    "C - F - G - C",
    "Am - Dm - F - G",
    "C - Em - Am - F",
    "F - G - C - F",
    "Em - C - G - Am",
    "Am - F - G - C",
    "C - Dm - Em - F",
    "F - Dm - Em - Am",
    "Am - C - F - Dm",
];

/// Twenty-five curated instrument combinations.
pub const INSTRUMENT_COMBOS: [&str; 25] = [
    "piano + guitar",
    "acoustic guitar + vocals",
    "electric guitar + bass + drums",
    "synthesizer + pad",
    "violin + piano",
    "ukulele + cajon",
    "flute + harp",
    "saxophone + piano",
    "cello + guitar",
    "drums + bass + synth",
    "organ + vocals",
    "accordion + banjo",
    "trumpet + piano",
    "guitar + strings",
    "electric piano + bass",
    "marimba + flute",
    "harmonica + guitar",
    "oboe + piano",
    "banjo + fiddle",
    "synth bass + pad",
    "clarinet + strings",
    "jazz guitar + brush drums",
    "timpani + orchestra",
    "electric violin + synth",
    "kalimba + ambient pad",
];
