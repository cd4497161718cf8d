//! Genre-conditioned instrument ensemble selector.
//!
//! Builds an ensemble in three phases: fill every required role of the
//! genre's rule, optionally add one mood-flavored instrument, then bound
//! the result to the requested size. Unknown genres fall back to the pop
//! rule rather than failing.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_pcg::Pcg32;

use etude_theory::instruments::{
    category, ensemble_rule, fallback_rule, mood_pool, EnsembleRule, ENSEMBLE_RULES, MOODS,
};

use crate::error::GenerateError;
use crate::result::EnsembleResult;
use crate::weighted::pick;

/// Configuration for the ensemble selector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnsembleConfig {
    /// Genre whose rule drives the selection; uniform over the rule catalog
    /// when `None`. Unknown genres fall back to pop.
    pub genre: Option<String>,
    /// Mood flavoring the ensemble; uniform over the mood catalog when
    /// `None`. Unrecognized moods disable the flavoring step.
    pub mood: Option<String>,
    /// Upper bound on the final ensemble; 2..=4 sampled when `None`.
    pub size: Option<usize>,
}

/// Select an instrument ensemble.
pub fn select_ensemble(
    config: &EnsembleConfig,
    rng: &mut Pcg32,
) -> Result<EnsembleResult, GenerateError> {
    if config.size == Some(0) {
        return Err(GenerateError::InvalidParameter(
            "ensemble size must be at least 1".to_string(),
        ));
    }

    let genre = match &config.genre {
        Some(genre) => genre.clone(),
        None => pick(rng, &ENSEMBLE_RULES)
            .map(|rule| rule.genre)
            .unwrap_or("pop")
            .to_string(),
    };
    let mood = match &config.mood {
        Some(mood) => mood.clone(),
        None => pick(rng, &MOODS).copied().unwrap_or("bright").to_string(),
    };
    let size = match config.size {
        Some(size) => size,
        None => rng.gen_range(2..=4),
    };

    let rule = ensemble_rule(&genre).unwrap_or_else(fallback_rule);

    let mut instruments = base_instrumentation(rule, rng);
    adjust_for_mood(&mut instruments, &mood, rng);
    bound_size(&mut instruments, size, rng);

    let description = format!("{genre} ({mood}): {} instruments", instruments.len());
    Ok(EnsembleResult {
        instruments,
        genre,
        mood,
        size,
        description,
    })
}

/// Fill every required role of the rule, in rule order.
///
/// Category candidates are restricted to those that actually cover the role,
/// so no role is silently skipped. Each pick is uniform over the chosen
/// category's full pool; the same instrument may fill more than one role
/// (e.g. "acoustic guitar" on both lead and rhythm).
fn base_instrumentation(rule: &EnsembleRule, rng: &mut Pcg32) -> Vec<String> {
    let mut instruments: Vec<String> = Vec::with_capacity(rule.required_roles.len());

    for role in rule.required_roles {
        let pools: Vec<&'static [&'static str]> = rule
            .categories
            .iter()
            .filter_map(|name| category(name))
            .filter_map(|cat| cat.pool(role))
            .filter(|pool| !pool.is_empty())
            .collect();

        let Some(&pool) = pick(rng, &pools) else {
            continue;
        };
        instruments.push(pool[rng.gen_range(0..pool.len())].to_string());
    }

    instruments
}

/// Optionally append one instrument from the mood's augmentation pool.
///
/// Skipped when the mood is unrecognized or the coin flip (p = 0.5) says no;
/// a successful flip always appends one uniform pick from the full pool.
fn adjust_for_mood(instruments: &mut Vec<String>, mood: &str, rng: &mut Pcg32) {
    let Some(pool) = mood_pool(mood) else {
        return;
    };
    if rng.gen::<f64>() >= 0.5 {
        return;
    }
    if let Some(&name) = pick(rng, pool) {
        instruments.push(name.to_string());
    }
}

/// Bound the ensemble to the requested size.
///
/// Oversized ensembles are shuffled before truncation so the dropped
/// instruments are not biased toward the later roles.
fn bound_size(instruments: &mut Vec<String>, size: usize, rng: &mut Pcg32) {
    if instruments.len() > size {
        instruments.shuffle(rng);
        instruments.truncate(size);
    }
}
