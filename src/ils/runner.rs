//! ILS execution loop.

use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use super::config::IlsConfig;
use crate::ls::LocalSearch;
use crate::model::{Instance, Solution};
use crate::ops;

/// Result of an Iterated Local Search run.
#[derive(Debug, Clone)]
pub struct IlsResult {
    /// Best solution found.
    pub best: Solution,

    /// Profit of the best solution.
    pub best_profit: u64,

    /// Number of perturb → local-search cycles executed.
    pub iterations: usize,

    /// Cycle at which the best solution was found (0 = the initial
    /// descent before any perturbation).
    pub best_iteration: usize,

    /// Best profit after each cycle, starting with the initial descent's
    /// profit. Non-decreasing.
    pub profit_history: Vec<u64>,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

/// Executes the Iterated Local Search engine.
pub struct IlsRunner;

impl IlsRunner {
    /// Runs ILS with an RNG seeded from the configuration.
    pub fn run(instance: &Instance, config: &IlsConfig) -> IlsResult {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Runs ILS with a caller-supplied RNG.
    pub fn run_with_rng<R: Rng>(
        instance: &Instance,
        config: &IlsConfig,
        rng: &mut R,
    ) -> IlsResult {
        let start = Instant::now();
        info!(
            instance = instance.name(),
            items = instance.item_count(),
            max_iterations = config.max_iterations,
            perturbation_strength = config.perturbation_strength,
            "starting iterated local search"
        );

        // Initial descent: construct a random feasible solution and climb
        // to the first incumbent.
        let initial = ops::initial_solution(instance, rng);
        let descent = LocalSearch::run(&initial, instance, &config.local_search, rng);
        let mut best = descent.best;
        let mut best_profit = descent.best_profit;
        let mut best_iteration = 0usize;

        let mut profit_history = Vec::with_capacity(config.max_iterations + 1);
        profit_history.push(best_profit);

        for iteration in 1..=config.max_iterations {
            let perturbed = ops::perturb(&best, instance, config.perturbation_strength, rng);
            let candidate = LocalSearch::run(&perturbed, instance, &config.local_search, rng);

            // Strictly-better-only acceptance: a worse or equal candidate
            // is discarded and the next cycle shakes the same incumbent.
            if candidate.best_profit > best_profit {
                best = candidate.best;
                best_profit = candidate.best_profit;
                best_iteration = iteration;
                info!(iteration, profit = best_profit, "new best solution");
            }
            profit_history.push(best_profit);
        }

        let elapsed = start.elapsed();
        info!(
            profit = best_profit,
            elapsed_seconds = elapsed.as_secs_f64(),
            "iterated local search finished"
        );

        IlsResult {
            best,
            best_profit,
            iterations: config.max_iterations,
            best_iteration,
            profit_history,
            elapsed,
        }
    }
}
