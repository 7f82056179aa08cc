//! Single-bit-flip neighbor generation with bounded retry.

use rand::Rng;

use crate::model::{Instance, Solution};

/// Produces a feasible neighbor differing from `current` in at most one bit.
///
/// Flips a uniformly random bit and keeps the result if it still fits the
/// capacity; otherwise reverts and picks a new random index, up to
/// `item_count` attempts. When the retry budget runs out (weight-tight
/// instances), the current solution is returned unchanged: a no-op move
/// indistinguishable from proposing `current` itself.
pub fn random_neighbor<R: Rng>(current: &Solution, instance: &Instance, rng: &mut R) -> Solution {
    let count = instance.item_count();
    if count == 0 {
        return current.clone();
    }

    let mut neighbor = current.clone();
    for _ in 0..count {
        let index = rng.random_range(0..count);
        neighbor.flip(index);
        if instance.is_feasible(&neighbor) {
            return neighbor;
        }
        neighbor.flip(index);
    }
    current.clone()
}
