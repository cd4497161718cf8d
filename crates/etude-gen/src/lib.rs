//! Etude Generation Engine
//!
//! Turns the static theory tables in `etude-theory` into concrete,
//! musically-plausible practice prompts: a chord progression plus a
//! compatible instrument ensemble. Three chord-generation strategies are
//! provided (weighted pattern selection, Markov-chain sampling, and a
//! functional-harmony state machine) together with a mood/genre-aware
//! ensemble selector and a single facade that bundles both halves.
//!
//! # Determinism
//!
//! All randomness flows through an explicitly injected PCG32 generator.
//! Given the same seed and configuration, output is identical. The facade
//! derives independent seed streams for the chord generator and the ensemble
//! selector via BLAKE3, so neither half's draws perturb the other.
//!
//! # Fallbacks over failures
//!
//! Every in-contract lookup has a documented fallback (unknown genres fall
//! back to the pop rule or the full pattern catalog, unknown moods are
//! no-ops, chords absent from a transition table pass through unchanged).
//! Only out-of-contract parameters (a zero length) are rejected, with
//! [`GenerateError::InvalidParameter`].
//!
//! # Example
//!
//! ```
//! use etude_gen::challenge::{generate_challenge, ChallengeConfig, Mode};
//!
//! let challenge = generate_challenge(Mode::Advanced, &ChallengeConfig::default(), 42)?;
//! println!("{} on {}", challenge.chord, challenge.instruments);
//! # Ok::<(), etude_gen::GenerateError>(())
//! ```

pub mod challenge;
pub mod ensemble;
pub mod error;
pub mod functional;
pub mod markov;
pub mod progression;
pub mod result;
pub mod rng;
pub mod weighted;

// Re-export main types
pub use challenge::{generate_challenge, Challenge, ChallengeConfig, ChallengeMetadata, Mode};
pub use ensemble::{select_ensemble, EnsembleConfig};
pub use error::GenerateError;
pub use functional::{generate_functional, FunctionalConfig};
pub use markov::{generate_markov, MarkovConfig, TransitionModel};
pub use progression::{generate_progression, ProgressionConfig};
pub use result::{
    Algorithm, EnsembleResult, GenerationResult, HarmonyAnalysis, ProgressionAnalysis,
    StructureSuggestion, Tempo,
};
pub use rng::{create_rng, derive_component_seed};

/// Crate version for identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
