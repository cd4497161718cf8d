//! Functional-harmony state tables and cadences.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A chord's structural role in functional harmony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmonicFunction {
    /// Stable; home base.
    Tonic,
    /// Unstable; prepares the dominant.
    Subdominant,
    /// Tense; demands resolution to the tonic.
    Dominant,
}

impl HarmonicFunction {
    /// All functions, in table order.
    pub const ALL: [HarmonicFunction; 3] = [
        HarmonicFunction::Tonic,
        HarmonicFunction::Subdominant,
        HarmonicFunction::Dominant,
    ];

    /// The scale degrees realizing this function.
    pub fn degrees(&self) -> &'static [usize] {
        match self {
            // I, iii, vi
            HarmonicFunction::Tonic => &[0, 2, 5],
            // ii, IV
            HarmonicFunction::Subdominant => &[1, 3],
            // V, vii°
            HarmonicFunction::Dominant => &[4, 6],
        }
    }

    /// The transition distribution out of this function.
    pub fn transitions(&self) -> &'static [(HarmonicFunction, f64)] {
        match self {
            HarmonicFunction::Tonic => &[
                (HarmonicFunction::Subdominant, 0.4),
                (HarmonicFunction::Dominant, 0.4),
                (HarmonicFunction::Tonic, 0.2),
            ],
            HarmonicFunction::Subdominant => &[
                (HarmonicFunction::Dominant, 0.7),
                (HarmonicFunction::Tonic, 0.3),
            ],
            HarmonicFunction::Dominant => &[(HarmonicFunction::Tonic, 1.0)],
        }
    }

    /// Lower-case label used in function-flow reporting.
    pub fn name(&self) -> &'static str {
        match self {
            HarmonicFunction::Tonic => "tonic",
            HarmonicFunction::Subdominant => "subdominant",
            HarmonicFunction::Dominant => "dominant",
        }
    }
}

impl fmt::Display for HarmonicFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cadence: the harmonic-function pair closing a progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    /// V-I.
    Authentic,
    /// IV-I.
    Plagal,
    /// V resolving into the tonic-function set (which includes vi).
    Deceptive,
}

impl Cadence {
    /// Sampling weights used when no cadence is requested.
    pub const DEFAULT_WEIGHTS: [(Cadence, f64); 3] = [
        (Cadence::Authentic, 0.6),
        (Cadence::Plagal, 0.25),
        (Cadence::Deceptive, 0.15),
    ];

    /// The function pair forced onto the final two positions.
    ///
    /// Deceptive forces the same pair as authentic: the tonic-function degree
    /// set includes the submediant, so the deceptive intent survives as a
    /// possible vi resolution.
    pub fn closing_functions(&self) -> [HarmonicFunction; 2] {
        match self {
            Cadence::Authentic | Cadence::Deceptive => {
                [HarmonicFunction::Dominant, HarmonicFunction::Tonic]
            }
            Cadence::Plagal => [HarmonicFunction::Subdominant, HarmonicFunction::Tonic],
        }
    }

    /// Lower-case label.
    pub fn name(&self) -> &'static str {
        match self {
            Cadence::Authentic => "authentic",
            Cadence::Plagal => "plagal",
            Cadence::Deceptive => "deceptive",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unsupported cadence name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported cadence '{0}' (expected authentic, plagal, or deceptive)")]
pub struct ParseCadenceError(pub String);

impl FromStr for Cadence {
    type Err = ParseCadenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "authentic" => Ok(Cadence::Authentic),
            "plagal" => Ok(Cadence::Plagal),
            "deceptive" => Ok(Cadence::Deceptive),
            other => Err(ParseCadenceError(other.to_string())),
        }
    }
}
