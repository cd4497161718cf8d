//! Cross-module distribution and contract tests.
//!
//! Unit tests inside each module pin individual behaviors; these tests
//! exercise the generators end to end over many seeds and check the
//! statistical and structural contracts that hold across modules.

use std::collections::BTreeMap;

use etude_gen::{
    create_rng, generate_challenge, generate_functional, generate_markov, generate_progression,
    ChallengeConfig, FunctionalConfig, MarkovConfig, Mode, ProgressionConfig, TransitionModel,
};
use etude_theory::harmony::{Cadence, HarmonicFunction};
use etude_theory::key::Key;
use etude_theory::pattern::PROGRESSION_PATTERNS;

const TRIALS: u32 = 2000;

/// Pattern-name frequencies over many seeds for one genre.
fn pattern_frequencies(genre: &str) -> BTreeMap<&'static str, u32> {
    let config = ProgressionConfig {
        genre: Some(genre.to_string()),
        key: Some(Key::C),
        ..ProgressionConfig::default()
    };
    let mut counts: BTreeMap<&'static str, u32> = BTreeMap::new();
    for seed in 0..TRIALS {
        let mut rng = create_rng(seed);
        let result = generate_progression(&config, &mut rng).unwrap();
        *counts.entry(result.pattern.unwrap().name).or_default() += 1;
    }
    counts
}

#[test]
fn pop_pattern_weights_converge() {
    let counts = pattern_frequencies("pop");
    let share = |name: &str| counts.get(name).copied().unwrap_or(0) as f64 / TRIALS as f64;

    // pop weights: Pop Classic 0.4, Canon 0.3, Komuro 0.3
    assert!((share("Pop Classic") - 0.4).abs() < 0.05, "{counts:?}");
    assert!((share("Canon") - 0.3).abs() < 0.05, "{counts:?}");
    assert!((share("Komuro") - 0.3).abs() < 0.05, "{counts:?}");
    assert_eq!(counts.len(), 3, "{counts:?}");
}

#[test]
fn jazz_restricts_to_its_candidates() {
    let counts = pattern_frequencies("jazz");
    assert_eq!(counts.len(), 2, "{counts:?}");
    assert!(counts.contains_key("Jazz Turnaround"));
    assert!(counts.contains_key("Blues"));
}

#[test]
fn unknown_genre_converges_to_uniform_over_the_catalog() {
    let counts = pattern_frequencies("shoegaze");
    assert_eq!(counts.len(), PROGRESSION_PATTERNS.len(), "{counts:?}");

    let expected = 1.0 / PROGRESSION_PATTERNS.len() as f64;
    for (name, count) in &counts {
        let share = *count as f64 / TRIALS as f64;
        assert!((share - expected).abs() < 0.03, "{name}: {share} ({counts:?})");
    }
}

#[test]
fn weighted_chords_stay_in_the_requested_scale() {
    let config = ProgressionConfig {
        genre: Some("jazz".to_string()),
        key: Some(Key::C),
        include_extensions: false,
        ..ProgressionConfig::default()
    };
    let scale = Key::C.scale();
    for seed in 0..200 {
        let mut rng = create_rng(seed);
        let result = generate_progression(&config, &mut rng).unwrap();
        for chord in &result.chords {
            assert!(scale.contains(&chord.as_str()), "seed {seed}: {chord}");
        }
    }
}

#[test]
fn extensions_preserve_the_tonal_frame() {
    let config = ProgressionConfig {
        genre: Some("jazz".to_string()),
        key: Some(Key::G),
        ..ProgressionConfig::default()
    };
    for seed in 0..200 {
        let mut rng = create_rng(seed);
        let result = generate_progression(&config, &mut rng).unwrap();
        let basic = result.basic_chords.unwrap();
        assert_eq!(result.chords[0], basic[0], "seed {seed}");
        assert_eq!(
            result.chords.last(),
            basic.last(),
            "seed {seed}"
        );
        // Interior chords only ever gain a suffix.
        for (extended, plain) in result.chords.iter().zip(&basic) {
            assert!(extended.starts_with(plain.as_str()), "seed {seed}: {extended} vs {plain}");
        }
    }
}

#[test]
fn markov_walks_stay_in_the_corpus_vocabulary() {
    let model = TransitionModel::from_corpus();
    let mut vocabulary = model.chords();
    // Row targets that never appear as sources still belong to the corpus.
    for chord in model.chords() {
        for &(next, _) in model.row(chord).unwrap() {
            vocabulary.push(next);
        }
    }

    let config = MarkovConfig {
        key: Key::C,
        ..MarkovConfig::default()
    };
    for seed in 0..200 {
        let mut rng = create_rng(seed);
        let result = generate_markov(&config, &mut rng).unwrap();
        for chord in &result.chords {
            assert!(vocabulary.contains(&chord.as_str()), "seed {seed}: {chord}");
        }
    }
}

#[test]
fn markov_transposition_lands_in_the_target_scale() {
    let config = MarkovConfig {
        key: Key::G,
        ..MarkovConfig::default()
    };
    let scale = Key::G.scale();
    for seed in 0..200 {
        let mut rng = create_rng(seed);
        let result = generate_markov(&config, &mut rng).unwrap();
        for chord in &result.chords {
            assert!(scale.contains(&chord.as_str()), "seed {seed}: {chord}");
        }
    }
}

#[test]
fn plagal_cadence_closes_every_functional_run() {
    let config = FunctionalConfig {
        length: 4,
        cadence: Some(Cadence::Plagal),
        ..FunctionalConfig::default()
    };
    for seed in 0..200 {
        let mut rng = create_rng(seed);
        let result = generate_functional(&config, &mut rng).unwrap();
        let functions = result.functions.unwrap();
        assert_eq!(
            &functions[2..],
            &[HarmonicFunction::Subdominant, HarmonicFunction::Tonic],
            "seed {seed}"
        );
    }
}

#[test]
fn functional_flow_report_matches_the_function_path() {
    for seed in 0..100 {
        let mut rng = create_rng(seed);
        let result = generate_functional(&FunctionalConfig::default(), &mut rng).unwrap();
        let functions = result.functions.unwrap();
        let expected = functions
            .iter()
            .map(|f| f.name())
            .collect::<Vec<_>>()
            .join(" -> ");
        assert_eq!(result.harmony_analysis.unwrap().function_flow, expected);
    }
}

#[test]
fn challenges_are_reproducible_across_modes() {
    let config = ChallengeConfig {
        genre: Some("jazz".to_string()),
        key: Some(Key::D),
        length: Some(4),
        ..ChallengeConfig::default()
    };
    for mode in [Mode::Simple, Mode::Advanced, Mode::Markov, Mode::Functional] {
        for seed in [0, 1, 42, 9999, u32::MAX] {
            let a = generate_challenge(mode, &config, seed).unwrap();
            let b = generate_challenge(mode, &config, seed).unwrap();
            assert_eq!(a, b, "{mode:?} seed {seed}");
        }
    }
}

#[test]
fn challenge_prompt_lines_are_well_formed() {
    for seed in 0..100 {
        let challenge =
            generate_challenge(Mode::Advanced, &ChallengeConfig::default(), seed).unwrap();
        assert!(challenge.chord.contains(" - "), "seed {seed}: {}", challenge.chord);
        assert!(!challenge.instruments.is_empty(), "seed {seed}");
    }
}
