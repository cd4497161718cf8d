//! Chord-extension vocabularies.

use serde::{Deserialize, Serialize};

/// A chord-extension vocabulary referenced by genre profiles.
///
/// Extension tokens are appended verbatim as chord-symbol suffixes
/// (e.g. `Dm` + `7` = `Dm7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionSet {
    /// No extensions: chords stay in basic triad form.
    Basic,
    /// Seventh chords.
    Seventh,
    /// Suspensions and added tones.
    Extended,
    /// Jazz extensions (ninths and above).
    Jazz,
}

impl ExtensionSet {
    /// The extension tokens in this vocabulary. Empty for [`ExtensionSet::Basic`].
    pub fn tokens(&self) -> &'static [&'static str] {
        match self {
            ExtensionSet::Basic => &[],
            ExtensionSet::Seventh => &["7", "maj7", "m7"],
            ExtensionSet::Extended => &["add9", "sus4", "sus2"],
            ExtensionSet::Jazz => &["9", "11", "13", "maj9", "m9"],
        }
    }
}
