//! Shared sampling primitives.
//!
//! All three chord generators and the cadence/ensemble defaults use the same
//! cumulative-sum walk, so it lives here once rather than inlined per
//! generator.

use rand::Rng;
use rand_pcg::Pcg32;

/// Samples an index from a weight vector with a cumulative-sum walk.
///
/// Draws r in [0, 1) and returns the first index whose running weight sum is
/// >= r. Weight vectors are data and may not sum to exactly 1.0; when the
/// walk falls off the end (rounding drift, or weights summing below 1.0)
/// this returns `None` and the caller applies its documented fallback,
/// typically index 0.
pub fn sample_weighted(rng: &mut Pcg32, weights: &[f64]) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }

    let r = rng.gen::<f64>();
    let mut cumulative = 0.0;
    for (index, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if r <= cumulative {
            return Some(index);
        }
    }

    None
}

/// Uniformly picks one element of a non-empty slice.
pub fn pick<'a, T>(rng: &mut Pcg32, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.gen_range(0..items.len())])
    }
}
