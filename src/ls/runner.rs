//! Hill-climbing execution loop.

use rand::Rng;

use super::config::LsConfig;
use crate::model::{Instance, Solution};
use crate::ops;

/// Result of a local search run.
#[derive(Debug, Clone)]
pub struct LsResult {
    /// Best solution observed.
    pub best: Solution,
    /// Profit of the best solution.
    pub best_profit: u64,
    /// Number of neighbors that improved on the incumbent.
    pub improving_moves: usize,
}

/// Hill-climbing local search runner.
pub struct LocalSearch;

impl LocalSearch {
    /// Climbs from `start` for the configured iteration budget.
    ///
    /// Each iteration draws one neighbor of the incumbent best (not of the
    /// most recent candidate) and adopts it only on strict profit
    /// improvement. Returns the starting solution unchanged if no
    /// improving neighbor is ever drawn.
    pub fn run<R: Rng>(
        start: &Solution,
        instance: &Instance,
        config: &LsConfig,
        rng: &mut R,
    ) -> LsResult {
        let mut best = start.clone();
        let mut best_profit = instance.evaluate(&best).profit;
        let mut improving_moves = 0usize;

        for _ in 0..config.max_iterations {
            let neighbor = ops::random_neighbor(&best, instance, rng);
            let neighbor_profit = instance.evaluate(&neighbor).profit;
            if neighbor_profit > best_profit {
                best = neighbor;
                best_profit = neighbor_profit;
                improving_moves += 1;
            }
        }

        LsResult {
            best,
            best_profit,
            improving_moves,
        }
    }
}
