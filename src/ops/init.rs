//! Randomized greedy construction of an initial solution.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Instance, Solution};

/// Builds a random feasible starting solution.
///
/// Visits the items in a random order and selects each one whose weight
/// still fits within the remaining capacity. Feasible by construction;
/// yields the all-zero solution when no item fits (zero capacity, or an
/// empty item list).
pub fn initial_solution<R: Rng>(instance: &Instance, rng: &mut R) -> Solution {
    let mut solution = Solution::empty(instance.item_count());
    let mut weight = 0u64;

    let mut order: Vec<usize> = (0..instance.item_count()).collect();
    order.shuffle(rng);

    for index in order {
        let item = &instance.items()[index];
        if weight + item.weight <= instance.capacity() {
            solution.select(index);
            weight += item.weight;
        }
    }
    solution
}
