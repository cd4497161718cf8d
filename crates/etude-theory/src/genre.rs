//! Genre profiles for the weighted pattern generator.

use serde::Serialize;

use crate::extensions::ExtensionSet;

/// Genre-conditioned generation weights.
///
/// `patterns` holds indices into
/// [`PROGRESSION_PATTERNS`](crate::pattern::PROGRESSION_PATTERNS); `weights`
/// is the parallel weight vector used for cumulative-sum sampling. The
/// weights are data, not validated to sum to exactly 1.0 at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenreProfile {
    /// Genre name used for lookups.
    pub name: &'static str,
    /// Candidate pattern indices into the progression catalog.
    pub patterns: &'static [usize],
    /// Selection weights, parallel to `patterns`.
    pub weights: &'static [f64],
    /// Allowed tempo-band tags.
    pub tempos: &'static [&'static str],
    /// Chord-extension vocabulary for this genre.
    pub extensions: ExtensionSet,
}

/// The fixed genre catalog.
pub static GENRE_PROFILES: [GenreProfile; 4] = [
    GenreProfile {
        name: "pop",
        patterns: &[0, 1, 2],
        weights: &[0.4, 0.3, 0.3],
        tempos: &["mid-tempo", "upbeat"],
        extensions: ExtensionSet::Basic,
    },
    GenreProfile {
        name: "jazz",
        patterns: &[3, 4],
        weights: &[0.6, 0.4],
        tempos: &["ballad", "mid-tempo"],
        extensions: ExtensionSet::Jazz,
    },
    GenreProfile {
        name: "rock",
        patterns: &[0, 2, 6],
        weights: &[0.5, 0.3, 0.2],
        tempos: &["upbeat", "fast"],
        extensions: ExtensionSet::Basic,
    },
    GenreProfile {
        name: "classical",
        patterns: &[5, 6, 7],
        weights: &[0.4, 0.3, 0.3],
        tempos: &["ballad", "mid-tempo"],
        extensions: ExtensionSet::Seventh,
    },
];

/// Look up a genre profile by name. Unknown genres return `None` so callers
/// can apply their documented fallbacks.
pub fn genre_profile(name: &str) -> Option<&'static GenreProfile> {
    GENRE_PROFILES.iter().find(|profile| profile.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PROGRESSION_PATTERNS;
    use crate::tempo::tempo_band;

    #[test]
    fn test_weight_vectors_match_candidates() {
        for profile in &GENRE_PROFILES {
            assert_eq!(
                profile.patterns.len(),
                profile.weights.len(),
                "{}",
                profile.name
            );
        }
    }

    #[test]
    fn test_weights_sum_within_one() {
        for profile in &GENRE_PROFILES {
            let sum: f64 = profile.weights.iter().sum();
            assert!(sum <= 1.0 + 1e-9, "{} weights sum to {sum}", profile.name);
            assert!(sum > 0.0, "{}", profile.name);
        }
    }

    #[test]
    fn test_pattern_indices_in_catalog() {
        for profile in &GENRE_PROFILES {
            for &idx in profile.patterns {
                assert!(idx < PROGRESSION_PATTERNS.len(), "{}", profile.name);
            }
        }
    }

    #[test]
    fn test_tempo_tags_resolve() {
        for profile in &GENRE_PROFILES {
            for tag in profile.tempos {
                assert!(tempo_band(tag).is_some(), "{}: {tag}", profile.name);
            }
        }
    }

    #[test]
    fn test_unknown_genre() {
        assert!(genre_profile("shoegaze").is_none());
    }
}
