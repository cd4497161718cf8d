//! Etude Theory Tables
//!
//! Static, immutable music-theory and instrumentation reference data for the
//! Etude prompt generators. Everything in this crate is process-wide constant
//! data: keys and diatonic scales, the progression-pattern catalog, tempo
//! bands, chord-extension vocabularies, song-structure templates, genre
//! profiles, functional-harmony rules, the Markov training corpus, and the
//! instrument tables used by the ensemble selector.
//!
//! Nothing here is mutated at runtime, so all tables are safely shareable
//! across concurrent generation calls.
//!
//! # Modules
//!
//! - [`key`]: Keys and 7-chord diatonic scales
//! - [`pattern`]: Progression-pattern catalog and complexity levels
//! - [`tempo`]: Tempo bands with BPM ranges
//! - [`extensions`]: Chord-extension vocabularies
//! - [`structure`]: Song-structure templates
//! - [`genre`]: Genre profiles (pattern weights, tempos, extensions)
//! - [`harmony`]: Functional-harmony state tables and cadences
//! - [`corpus`]: Markov training corpus and transposition tables
//! - [`instruments`]: Instrument categories, ensemble rules, mood pools
//! - [`simple`]: Flat catalogs backing the "simple" generation mode

pub mod corpus;
pub mod extensions;
pub mod genre;
pub mod harmony;
pub mod instruments;
pub mod key;
pub mod pattern;
pub mod simple;
pub mod structure;
pub mod tempo;

// Re-export commonly used types at the crate root
pub use extensions::ExtensionSet;
pub use genre::{genre_profile, GenreProfile, GENRE_PROFILES};
pub use harmony::{Cadence, HarmonicFunction};
pub use key::{Key, ParseKeyError};
pub use pattern::{Complexity, ProgressionPattern, PROGRESSION_PATTERNS};
pub use structure::StructureKind;
pub use tempo::{tempo_band, TempoBand, TEMPO_BANDS};
