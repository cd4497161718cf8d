//! Markov-chain chord generator.
//!
//! Builds a first-order transition model from the fixed training corpus,
//! samples a new progression by random walk with de-duplication and
//! theory-grounded fallbacks, then transposes the result into the target
//! key. The model is a pure function of the constant corpus and is rebuilt
//! on every call; there is no cached or persisted state.

use std::collections::BTreeMap;

use rand_pcg::Pcg32;

use etude_theory::corpus::{transposition_map, NATIVE_KEY, START_CANDIDATES, TRAINING_CORPUS};
use etude_theory::key::Key;

use crate::error::GenerateError;
use crate::result::{Algorithm, GenerationResult};
use crate::weighted::{pick, sample_weighted};

/// Minimum probability substituted for transitions absent from the model,
/// so reported path probabilities stay positive and comparable.
const MIN_TRANSITION_PROBABILITY: f64 = 0.01;

/// First-order chord transition model.
///
/// Rows are kept in sorted chord order so sampling is deterministic for a
/// given seed.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionModel {
    rows: BTreeMap<&'static str, Vec<(&'static str, f64)>>,
}

impl TransitionModel {
    /// Count adjacent pairs across the training corpus and normalize each
    /// source chord's outgoing counts into a probability distribution.
    pub fn from_corpus() -> Self {
        let mut counts: BTreeMap<&'static str, BTreeMap<&'static str, u32>> = BTreeMap::new();
        for progression in &TRAINING_CORPUS {
            for pair in progression.windows(2) {
                *counts
                    .entry(pair[0])
                    .or_default()
                    .entry(pair[1])
                    .or_default() += 1;
            }
        }

        let rows = counts
            .into_iter()
            .map(|(chord, outgoing)| {
                let total: u32 = outgoing.values().sum();
                let distribution = outgoing
                    .into_iter()
                    .map(|(next, count)| (next, count as f64 / total as f64))
                    .collect();
                (chord, distribution)
            })
            .collect();

        TransitionModel { rows }
    }

    /// The outgoing distribution for a chord, if it appears in the corpus.
    pub fn row(&self, chord: &str) -> Option<&[(&'static str, f64)]> {
        self.rows.get(chord).map(Vec::as_slice)
    }

    /// Every source chord in the model, in sorted order.
    pub fn chords(&self) -> Vec<&'static str> {
        self.rows.keys().copied().collect()
    }

    /// The probability of one transition, if present.
    pub fn probability(&self, from: &str, to: &str) -> Option<f64> {
        self.row(from)?
            .iter()
            .find(|(next, _)| *next == to)
            .map(|(_, p)| *p)
    }
}

/// Configuration for the Markov chain generator.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkovConfig {
    /// Opening chord; sampled from the tonal/subdominant start candidates
    /// when `None`.
    pub start_chord: Option<String>,
    /// Number of chords to generate.
    pub length: usize,
    /// Target key the walk is transposed into.
    pub key: Key,
}

impl Default for MarkovConfig {
    fn default() -> Self {
        MarkovConfig {
            start_chord: None,
            length: 4,
            key: Key::C,
        }
    }
}

/// Generate a chord progression by Markov-chain random walk.
pub fn generate_markov(
    config: &MarkovConfig,
    rng: &mut Pcg32,
) -> Result<GenerationResult, GenerateError> {
    if config.length == 0 {
        return Err(GenerateError::InvalidParameter(
            "length must be at least 1".to_string(),
        ));
    }

    let model = TransitionModel::from_corpus();

    let mut current = match &config.start_chord {
        Some(chord) => chord.clone(),
        None => pick(rng, &START_CANDIDATES)
            .copied()
            .unwrap_or("C")
            .to_string(),
    };

    let mut progression = vec![current.clone()];
    for _ in 1..config.length {
        let next = next_chord(&model, &current, &progression, rng);
        progression.push(next.clone());
        current = next;
    }

    let probability = path_probability(&model, &progression);
    let chords = transpose(&progression, config.key);

    let description = format!("Markov chain walk (key of {})", config.key);
    let mut result = GenerationResult::base(chords, config.key, Algorithm::Markov, description);
    result.original_key = Some(NATIVE_KEY);
    result.probability = Some(probability);
    Ok(result)
}

/// Sample the next chord of the walk.
///
/// While the progression so far is short (length <= 4), candidates already
/// used are filtered out to reduce immediate repetition; if the filter
/// empties the row, the unrestricted distribution is used. Chords with no
/// outgoing distribution fall back to an unused start candidate, then to
/// the whole model vocabulary.
fn next_chord(
    model: &TransitionModel,
    current: &str,
    progression: &[String],
    rng: &mut Pcg32,
) -> String {
    if let Some(row) = model.row(current) {
        let avoid_duplicates = progression.len() <= 4;
        let filtered: Vec<(&'static str, f64)> = if avoid_duplicates {
            row.iter()
                .filter(|(chord, _)| !progression.iter().any(|used| used == chord))
                .copied()
                .collect()
        } else {
            row.to_vec()
        };

        let pool = if filtered.is_empty() { row } else { &filtered };
        return sample_distribution(pool, rng).to_string();
    }

    // Chord absent from the corpus: fall back to theory-appropriate chords
    // not yet used, then to the full model vocabulary.
    let unused: Vec<&'static str> = START_CANDIDATES
        .iter()
        .filter(|&&chord| chord != current && !progression.iter().any(|used| used == chord))
        .copied()
        .collect();
    if let Some(&chord) = pick(rng, &unused) {
        return chord.to_string();
    }

    let vocabulary = model.chords();
    pick(rng, &vocabulary).copied().unwrap_or("C").to_string()
}

/// Sample from a (possibly filtered) distribution, renormalizing first.
fn sample_distribution(pairs: &[(&'static str, f64)], rng: &mut Pcg32) -> &'static str {
    let total: f64 = pairs.iter().map(|(_, p)| p).sum();
    let weights: Vec<f64> = pairs.iter().map(|(_, p)| p / total).collect();
    match sample_weighted(rng, &weights) {
        Some(index) => pairs[index].0,
        None => pairs[0].0,
    }
}

/// Product of the transition probabilities along the walk, with a fixed
/// floor for transitions absent from the model.
fn path_probability(model: &TransitionModel, progression: &[String]) -> f64 {
    progression
        .windows(2)
        .map(|pair| {
            model
                .probability(&pair[0], &pair[1])
                .unwrap_or(MIN_TRANSITION_PROBABILITY)
        })
        .product()
}

/// Map a C-major progression into the target key chord-by-chord.
///
/// Chords absent from the substitution table pass through unchanged.
fn transpose(progression: &[String], key: Key) -> Vec<String> {
    let map = transposition_map(key);
    progression
        .iter()
        .map(|chord| {
            map.iter()
                .find(|(from, _)| from == chord)
                .map(|(_, to)| to.to_string())
                .unwrap_or_else(|| chord.clone())
        })
        .collect()
}
