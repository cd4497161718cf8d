//! Practice-challenge facade.
//!
//! Bundles one chord prompt and one instrument prompt into a single
//! challenge. The facade owns seed handling: the chord generator and the
//! ensemble selector each get an independent stream derived from the base
//! seed, so changing one half's configuration never perturbs the other's
//! draws.

use serde::{Deserialize, Serialize};

use etude_theory::harmony::Cadence;
use etude_theory::key::Key;
use etude_theory::simple::{CHORD_PROGRESSIONS, INSTRUMENT_COMBOS};

use crate::ensemble::{select_ensemble, EnsembleConfig};
use crate::error::GenerateError;
use crate::functional::{generate_functional, FunctionalConfig};
use crate::markov::{generate_markov, MarkovConfig};
use crate::progression::{generate_progression, ProgressionConfig};
use crate::result::{EnsembleResult, GenerationResult};
use crate::rng::{create_rng, derive_component_seed};
use crate::weighted::pick;

/// The challenge generation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Uniform picks from the flat prompt catalogs; no metadata.
    Simple,
    /// Weighted pattern selection with tempo, structure, and analysis.
    Advanced,
    /// Markov-chain walk over the training corpus.
    Markov,
    /// Functional-harmony state machine with a cadence.
    Functional,
}

impl Mode {
    /// Resolve a mode tag, falling back to [`Mode::Simple`] for anything
    /// unrecognized.
    pub fn from_tag(tag: &str) -> Mode {
        match tag {
            "advanced" => Mode::Advanced,
            "markov" => Mode::Markov,
            "functional" => Mode::Functional,
            _ => Mode::Simple,
        }
    }

    /// The mode's tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Mode::Simple => "simple",
            Mode::Advanced => "advanced",
            Mode::Markov => "markov",
            Mode::Functional => "functional",
        }
    }
}

/// Optional overrides shared across all modes.
///
/// Fields irrelevant to the selected mode are ignored (a cadence in Markov
/// mode, a start chord in advanced mode).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChallengeConfig {
    /// Target key for the chord half.
    pub key: Option<Key>,
    /// Genre for pattern weighting and the ensemble rule.
    pub genre: Option<String>,
    /// Progression length in chords.
    pub length: Option<usize>,
    /// Whether the weighted generator decorates interior chords;
    /// defaults to true.
    pub include_extensions: Option<bool>,
    /// Opening chord for the Markov walk.
    pub start_chord: Option<String>,
    /// Cadence for the functional generator.
    pub cadence: Option<Cadence>,
    /// Mood for the ensemble selector.
    pub mood: Option<String>,
    /// Ensemble size bound.
    pub ensemble_size: Option<usize>,
}

/// Metadata attached to a challenge; empty in simple mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChallengeMetadata {
    /// The mode that produced the challenge.
    pub mode: Mode,
    /// Full chord-generation record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chord_info: Option<GenerationResult>,
    /// Full ensemble-selection record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ensemble_info: Option<EnsembleResult>,
}

/// A complete practice challenge: what to play, and on what.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Challenge {
    /// Chord prompt, formatted as a chart line ("C - Am - F - G").
    pub chord: String,
    /// Instrument prompt, formatted as a single line ("piano + cajon").
    pub instruments: String,
    /// Generation metadata.
    pub metadata: ChallengeMetadata,
}

/// Generate a practice challenge.
///
/// The chord half consumes a stream derived from `seed` with the "chords"
/// key, the ensemble half one derived with the "ensemble" key.
pub fn generate_challenge(
    mode: Mode,
    config: &ChallengeConfig,
    seed: u32,
) -> Result<Challenge, GenerateError> {
    let mut chord_rng = create_rng(derive_component_seed(seed, "chords"));
    let mut ensemble_rng = create_rng(derive_component_seed(seed, "ensemble"));

    if mode == Mode::Simple {
        let chord = pick(&mut chord_rng, &CHORD_PROGRESSIONS)
            .copied()
            .unwrap_or(CHORD_PROGRESSIONS[0]);
        let instruments = pick(&mut ensemble_rng, &INSTRUMENT_COMBOS)
            .copied()
            .unwrap_or(INSTRUMENT_COMBOS[0]);
        return Ok(Challenge {
            chord: chord.to_string(),
            instruments: instruments.to_string(),
            metadata: ChallengeMetadata {
                mode,
                chord_info: None,
                ensemble_info: None,
            },
        });
    }

    let chord_info = match mode {
        Mode::Advanced => {
            let progression_config = ProgressionConfig {
                key: config.key,
                genre: config.genre.clone(),
                length: config.length.unwrap_or(4),
                include_extensions: config.include_extensions.unwrap_or(true),
            };
            generate_progression(&progression_config, &mut chord_rng)?
        }
        Mode::Markov => {
            let markov_config = MarkovConfig {
                start_chord: config.start_chord.clone(),
                length: config.length.unwrap_or(4),
                key: config.key.unwrap_or(Key::C),
            };
            generate_markov(&markov_config, &mut chord_rng)?
        }
        Mode::Functional => {
            let functional_config = FunctionalConfig {
                key: config.key,
                length: config.length.unwrap_or(4),
                cadence: config.cadence,
            };
            generate_functional(&functional_config, &mut chord_rng)?
        }
        Mode::Simple => unreachable!(),
    };

    let ensemble_config = EnsembleConfig {
        genre: Some(ensemble_genre(mode, config, &chord_info)),
        mood: config.mood.clone(),
        size: config.ensemble_size,
    };
    let ensemble_info = select_ensemble(&ensemble_config, &mut ensemble_rng)?;

    Ok(Challenge {
        chord: chord_info.chord_line(),
        instruments: ensemble_info.instrument_line(),
        metadata: ChallengeMetadata {
            mode,
            chord_info: Some(chord_info),
            ensemble_info: Some(ensemble_info),
        },
    })
}

/// The genre handed to the ensemble selector.
///
/// An explicit override wins; otherwise the advanced mode reuses the genre
/// the chord half resolved, and the corpus-bound modes use a fixed genre
/// matching their idiom.
fn ensemble_genre(mode: Mode, config: &ChallengeConfig, chord_info: &GenerationResult) -> String {
    if let Some(genre) = &config.genre {
        return genre.clone();
    }
    match mode {
        Mode::Advanced => chord_info
            .genre
            .clone()
            .unwrap_or_else(|| "pop".to_string()),
        Mode::Markov => "pop".to_string(),
        Mode::Functional => "classical".to_string(),
        Mode::Simple => "pop".to_string(),
    }
}
