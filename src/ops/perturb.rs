//! Multi-bit perturbation for escaping local optima.

use rand::seq::index::sample;
use rand::Rng;

use crate::model::{Instance, Solution};

/// Flips `strength` distinct random bits of `current`.
///
/// The strength is clamped to the item count, so oversized strengths on
/// small instances shake every bit instead of failing. If the flipped
/// solution exceeds the capacity it is discarded and `current` is returned
/// unchanged, with no repair and no retry; the caller simply perturbs
/// again on its next iteration.
pub fn perturb<R: Rng>(
    current: &Solution,
    instance: &Instance,
    strength: usize,
    rng: &mut R,
) -> Solution {
    let count = instance.item_count();
    let k = strength.min(count);
    if k == 0 {
        return current.clone();
    }

    let mut perturbed = current.clone();
    for index in sample(rng, count, k) {
        perturbed.flip(index);
    }

    if instance.is_feasible(&perturbed) {
        perturbed
    } else {
        current.clone()
    }
}
