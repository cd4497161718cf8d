//! Weighted pattern generator.
//!
//! Selects a progression pattern with genre-conditioned weights,
//! instantiates it in a target key, optionally layers chord extensions, and
//! attaches a tempo, a structure suggestion, and a quality analysis.

use rand::Rng;
use rand_pcg::Pcg32;

use etude_theory::extensions::ExtensionSet;
use etude_theory::genre::{genre_profile, GENRE_PROFILES};
use etude_theory::key::Key;
use etude_theory::pattern::{Complexity, ProgressionPattern, PROGRESSION_PATTERNS};
use etude_theory::structure::StructureKind;
use etude_theory::tempo::{tempo_band, TEMPO_BANDS};

use crate::error::GenerateError;
use crate::result::{
    Algorithm, GenerationResult, ProgressionAnalysis, StructureSuggestion, Tempo,
};
use crate::weighted::{pick, sample_weighted};

/// Configuration for the weighted pattern generator.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionConfig {
    /// Target key; a uniform random key when `None`.
    pub key: Option<Key>,
    /// Genre name; a uniform random catalog genre when `None`. Unknown
    /// genres fall back to a uniform pick over the whole pattern catalog.
    pub genre: Option<String>,
    /// Number of chords to emit. Patterns longer than this are truncated,
    /// shorter patterns are emitted whole (never padded).
    pub length: usize,
    /// Whether to layer chord extensions onto interior chords.
    pub include_extensions: bool,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        ProgressionConfig {
            key: None,
            genre: None,
            length: 4,
            include_extensions: true,
        }
    }
}

/// Generate a chord progression from the pattern catalog.
pub fn generate_progression(
    config: &ProgressionConfig,
    rng: &mut Pcg32,
) -> Result<GenerationResult, GenerateError> {
    if config.length == 0 {
        return Err(GenerateError::InvalidParameter(
            "length must be at least 1".to_string(),
        ));
    }

    let key = config
        .key
        .unwrap_or_else(|| Key::ALL[rng.gen_range(0..Key::ALL.len())]);
    let genre = config.genre.clone().unwrap_or_else(|| {
        GENRE_PROFILES[rng.gen_range(0..GENRE_PROFILES.len())]
            .name
            .to_string()
    });

    let pattern_index = select_pattern(&genre, rng);
    let pattern = &PROGRESSION_PATTERNS[pattern_index];

    let basic_chords = convert_pattern_to_chords(pattern, key, config.length);
    let chords = if config.include_extensions {
        apply_extensions(&basic_chords, &genre, rng)
    } else {
        basic_chords.clone()
    };

    let tempo = generate_tempo(&genre, rng);
    let structure = suggest_structure(pattern.complexity);
    let analysis = analyze(pattern_index, &tempo, &genre);

    let description = format!(
        "{genre} style: {} ({} {}BPM)",
        pattern.description, tempo.description, tempo.bpm
    );

    let mut result = GenerationResult::base(chords, key, Algorithm::Weighted, description);
    result.basic_chords = Some(basic_chords);
    result.genre = Some(genre);
    result.pattern = Some(pattern);
    result.tempo = Some(tempo);
    result.structure = Some(structure);
    result.analysis = Some(analysis);
    Ok(result)
}

/// Pick a catalog pattern index using the genre's weight vector.
///
/// Unknown genres fall back to a uniform pick over the whole catalog; a
/// weight walk that falls off the end lands on the genre's first candidate.
fn select_pattern(genre: &str, rng: &mut Pcg32) -> usize {
    let Some(profile) = genre_profile(genre) else {
        return rng.gen_range(0..PROGRESSION_PATTERNS.len());
    };

    match sample_weighted(rng, profile.weights) {
        Some(index) => profile.patterns[index],
        None => profile.patterns[0],
    }
}

/// Map the first `length` pattern degrees through the key's scale.
fn convert_pattern_to_chords(
    pattern: &ProgressionPattern,
    key: Key,
    length: usize,
) -> Vec<String> {
    let scale = key.scale();
    pattern
        .degrees
        .iter()
        .take(length)
        .map(|&degree| scale[degree].to_string())
        .collect()
}

/// Layer chord extensions onto interior chords.
///
/// The first and last chords always keep their basic form so the tonal
/// frame stays stable; each interior chord independently has a 30% chance
/// of one extension suffix from the genre's vocabulary.
fn apply_extensions(chords: &[String], genre: &str, rng: &mut Pcg32) -> Vec<String> {
    let extensions = genre_profile(genre)
        .map(|profile| profile.extensions)
        .unwrap_or(ExtensionSet::Basic)
        .tokens();

    if extensions.is_empty() {
        return chords.to_vec();
    }

    chords
        .iter()
        .enumerate()
        .map(|(index, chord)| {
            if index == 0 || index == chords.len() - 1 {
                return chord.clone();
            }
            if rng.gen::<f64>() < 0.3 {
                if let Some(extension) = pick(rng, extensions) {
                    return format!("{chord}{extension}");
                }
            }
            chord.clone()
        })
        .collect()
}

/// Sample a tempo from the genre's allowed bands.
fn generate_tempo(genre: &str, rng: &mut Pcg32) -> Tempo {
    let tags: &[&str] = genre_profile(genre)
        .map(|profile| profile.tempos)
        .unwrap_or(&["mid-tempo"]);
    let tag = tags[rng.gen_range(0..tags.len())];
    let band = tempo_band(tag).unwrap_or(&TEMPO_BANDS[1]);

    Tempo {
        bpm: rng.gen_range(band.min_bpm..=band.max_bpm),
        band: band.tag,
        description: band.description,
    }
}

/// Map pattern complexity to a structure-size template.
fn suggest_structure(complexity: Complexity) -> StructureSuggestion {
    let kind = StructureKind::for_complexity(complexity);
    StructureSuggestion {
        kind,
        sections: kind.sections(),
        description: kind.description(),
    }
}

/// Build the quality-analysis block.
fn analyze(pattern_index: usize, tempo: &Tempo, genre: &str) -> ProgressionAnalysis {
    let pattern = &PROGRESSION_PATTERNS[pattern_index];
    ProgressionAnalysis {
        complexity: pattern.complexity,
        mood: pattern.mood,
        harmonic_rhythm: harmonic_rhythm(tempo.bpm),
        genre_fit: genre_fit(pattern_index, genre),
        educational_value: educational_value(pattern.complexity),
    }
}

/// Harmonic-rhythm label from fixed BPM thresholds.
fn harmonic_rhythm(bpm: u16) -> &'static str {
    if bpm < 80 {
        "slow"
    } else if bpm < 120 {
        "moderate"
    } else if bpm < 160 {
        "fast"
    } else {
        "very_fast"
    }
}

/// Genre-fit label from the pattern's weight within the genre's candidates.
fn genre_fit(pattern_index: usize, genre: &str) -> &'static str {
    let Some(profile) = genre_profile(genre) else {
        return "unknown";
    };
    let Some(candidate) = profile
        .patterns
        .iter()
        .position(|&index| index == pattern_index)
    else {
        return "poor";
    };

    let weight = profile.weights[candidate];
    if weight > 0.3 {
        "excellent"
    } else if weight > 0.1 {
        "good"
    } else {
        "fair"
    }
}

/// Educational-value label from pattern complexity.
fn educational_value(complexity: Complexity) -> &'static str {
    match complexity {
        Complexity::Beginner => "high",
        Complexity::Intermediate => "medium",
        Complexity::Advanced => "low",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_length_is_rejected() {
        let mut rng = create_rng(42);
        let config = ProgressionConfig {
            length: 0,
            ..ProgressionConfig::default()
        };
        assert!(generate_progression(&config, &mut rng).is_err());
    }

    #[test]
    fn test_length_is_min_of_request_and_pattern() {
        for key in Key::ALL {
            for requested in 1..=10 {
                for (index, pattern) in PROGRESSION_PATTERNS.iter().enumerate() {
                    let chords = convert_pattern_to_chords(pattern, key, requested);
                    assert_eq!(
                        chords.len(),
                        requested.min(pattern.degrees.len()),
                        "pattern {index}, length {requested}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_chords_are_members_of_the_scale() {
        for key in Key::ALL {
            let scale = key.scale();
            for pattern in &PROGRESSION_PATTERNS {
                for chord in convert_pattern_to_chords(pattern, key, 8) {
                    assert!(scale.contains(&chord.as_str()), "{chord} not in {key}");
                }
            }
        }
    }

    #[test]
    fn test_extensions_never_touch_first_or_last() {
        let chords: Vec<String> = ["C", "Dm", "Em", "F", "G"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        for seed in 0..200 {
            let mut rng = create_rng(seed);
            let extended = apply_extensions(&chords, "jazz", &mut rng);
            assert_eq!(extended.len(), chords.len());
            assert_eq!(extended[0], chords[0], "seed {seed}");
            assert_eq!(extended[4], chords[4], "seed {seed}");
        }
    }

    #[test]
    fn test_basic_extension_set_is_identity() {
        let chords: Vec<String> = ["C", "Am", "F", "G"].iter().map(|c| c.to_string()).collect();
        let mut rng = create_rng(42);
        // pop uses the empty basic vocabulary
        assert_eq!(apply_extensions(&chords, "pop", &mut rng), chords);
        // unknown genres fall back to basic
        assert_eq!(apply_extensions(&chords, "shoegaze", &mut rng), chords);
    }

    #[test]
    fn test_select_pattern_stays_in_genre_candidates() {
        let jazz = genre_profile("jazz").unwrap();
        for seed in 0..200 {
            let mut rng = create_rng(seed);
            let index = select_pattern("jazz", &mut rng);
            assert!(jazz.patterns.contains(&index), "seed {seed}: {index}");
        }
    }

    #[test]
    fn test_unknown_genre_selects_from_whole_catalog() {
        for seed in 0..50 {
            let mut rng = create_rng(seed);
            let index = select_pattern("shoegaze", &mut rng);
            assert!(index < PROGRESSION_PATTERNS.len());
        }
    }

    #[test]
    fn test_tempo_stays_inside_genre_bands() {
        let rock = genre_profile("rock").unwrap();
        for seed in 0..100 {
            let mut rng = create_rng(seed);
            let tempo = generate_tempo("rock", &mut rng);
            assert!(rock.tempos.contains(&tempo.band), "seed {seed}");
            let band = tempo_band(tempo.band).unwrap();
            assert!((band.min_bpm..=band.max_bpm).contains(&tempo.bpm));
        }
    }

    #[test]
    fn test_harmonic_rhythm_thresholds() {
        assert_eq!(harmonic_rhythm(79), "slow");
        assert_eq!(harmonic_rhythm(80), "moderate");
        assert_eq!(harmonic_rhythm(119), "moderate");
        assert_eq!(harmonic_rhythm(120), "fast");
        assert_eq!(harmonic_rhythm(159), "fast");
        assert_eq!(harmonic_rhythm(160), "very_fast");
    }

    #[test]
    fn test_genre_fit_buckets() {
        // pop candidates: [0 @ 0.4, 1 @ 0.3, 2 @ 0.3]
        assert_eq!(genre_fit(0, "pop"), "excellent");
        assert_eq!(genre_fit(1, "pop"), "good");
        assert_eq!(genre_fit(7, "pop"), "poor");
        assert_eq!(genre_fit(0, "shoegaze"), "unknown");
    }

    #[test]
    fn test_generate_fills_all_blocks() {
        let mut rng = create_rng(42);
        let result = generate_progression(&ProgressionConfig::default(), &mut rng).unwrap();
        assert!(result.genre.is_some());
        assert!(result.pattern.is_some());
        assert!(result.tempo.is_some());
        assert!(result.structure.is_some());
        assert!(result.analysis.is_some());
        assert!(result.basic_chords.is_some());
        assert_eq!(result.algorithm, Algorithm::Weighted);
    }

    #[test]
    fn test_determinism_per_seed() {
        let config = ProgressionConfig::default();
        let a = generate_progression(&config, &mut create_rng(7)).unwrap();
        let b = generate_progression(&config, &mut create_rng(7)).unwrap();
        assert_eq!(a, b);
    }
}
