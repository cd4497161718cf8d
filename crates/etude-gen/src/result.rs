//! Result records produced by the generators.
//!
//! Results are produced fresh per call, owned solely by the caller, and
//! never persisted. Side blocks that only one algorithm family fills are
//! `Option`s skipped during serialization.

use serde::{Deserialize, Serialize};

use etude_theory::key::Key;
use etude_theory::harmony::{Cadence, HarmonicFunction};
use etude_theory::pattern::{Complexity, ProgressionPattern};
use etude_theory::structure::StructureKind;

/// The algorithm family that produced a chord progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Weighted,
    Markov,
    Functional,
}

/// A sampled tempo: a concrete BPM inside a named band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tempo {
    /// Sampled BPM, drawn uniformly from the band's inclusive range.
    pub bpm: u16,
    /// Tempo-band tag.
    pub band: &'static str,
    /// Band description.
    pub description: &'static str,
}

/// A song-structure suggestion derived from pattern complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StructureSuggestion {
    /// Structure-size template.
    pub kind: StructureKind,
    /// Suggested section sequence.
    pub sections: &'static [&'static str],
    /// Template description.
    pub description: &'static str,
}

/// Musical-quality analysis attached by the weighted pattern generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressionAnalysis {
    /// Pattern difficulty.
    pub complexity: Complexity,
    /// Pattern mood tag.
    pub mood: &'static str,
    /// Harmonic-rhythm label derived from BPM.
    pub harmonic_rhythm: &'static str,
    /// How well the pattern fits the requested genre.
    pub genre_fit: &'static str,
    /// Educational-value label derived from complexity.
    pub educational_value: &'static str,
}

/// Harmonic analysis attached by the functional-harmony generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarmonyAnalysis {
    /// Number of chords in the progression.
    pub chord_count: usize,
    /// Function path, e.g. "tonic -> dominant -> tonic".
    pub function_flow: String,
    /// Whether the sequence ends on a tonic function.
    pub has_proper_cadence: bool,
    /// Count of distinct functions used.
    pub unique_functions: usize,
    /// Number of function transitions.
    pub total_transitions: usize,
    /// Distinct functions divided by sequence length.
    pub complexity: f64,
}

/// A generated chord progression with metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    /// The progression, in order.
    pub chords: Vec<String>,
    /// Pre-extension form of the progression (weighted generator only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_chords: Option<Vec<String>>,
    /// The key the progression is in.
    pub key: Key,
    /// Which algorithm family produced the result.
    pub algorithm: Algorithm,
    /// Resolved genre (weighted generator only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// The selected catalog pattern (weighted generator only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<&'static ProgressionPattern>,
    /// Sampled tempo (weighted generator only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo: Option<Tempo>,
    /// Structure suggestion (weighted generator only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure: Option<StructureSuggestion>,
    /// Quality analysis (weighted generator only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ProgressionAnalysis>,
    /// Applied cadence (functional generator only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cadence: Option<Cadence>,
    /// Harmonic-function path (functional generator only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functions: Option<Vec<HarmonicFunction>>,
    /// Harmonic analysis (functional generator only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harmony_analysis: Option<HarmonyAnalysis>,
    /// Key the walk was generated in before transposition (Markov only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_key: Option<Key>,
    /// Product of transition probabilities along the walk (Markov only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    /// Human-readable description.
    pub description: String,
}

impl GenerationResult {
    /// A result with every optional block empty.
    pub(crate) fn base(
        chords: Vec<String>,
        key: Key,
        algorithm: Algorithm,
        description: String,
    ) -> Self {
        GenerationResult {
            chords,
            basic_chords: None,
            key,
            algorithm,
            genre: None,
            pattern: None,
            tempo: None,
            structure: None,
            analysis: None,
            cadence: None,
            functions: None,
            harmony_analysis: None,
            original_key: None,
            probability: None,
            description,
        }
    }

    /// The progression formatted as a chord chart line.
    pub fn chord_line(&self) -> String {
        self.chords.join(" - ")
    }
}

/// A selected instrument ensemble.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnsembleResult {
    /// Selected instruments, in role order.
    pub instruments: Vec<String>,
    /// Resolved genre.
    pub genre: String,
    /// Resolved mood.
    pub mood: String,
    /// Requested ensemble size bound.
    pub size: usize,
    /// Human-readable description.
    pub description: String,
}

impl EnsembleResult {
    /// The ensemble formatted as a single line.
    pub fn instrument_line(&self) -> String {
        self.instruments.join(" + ")
    }
}
