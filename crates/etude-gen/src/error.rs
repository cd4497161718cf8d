//! Error type for prompt generation.

use thiserror::Error;

/// Error type for generation entry points.
///
/// Unknown genres, moods, and chords are handled with documented fallbacks
/// rather than errors; only out-of-contract parameter values are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Parameter value outside the generation contract.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
