//! SA execution loop.

use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use super::config::SaConfig;
use crate::model::{Instance, Solution};
use crate::ops;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best solution found.
    pub best: Solution,

    /// Profit of the best solution.
    pub best_profit: u64,

    /// Total number of neighbor evaluations.
    pub iterations: usize,

    /// Number of cooling steps (temperature updates) performed.
    pub temperature_steps: usize,

    /// Temperature when the engine stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Best profit after each cooling step, starting with the initial
    /// solution's profit. Non-decreasing.
    pub profit_history: Vec<u64>,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

/// Executes the Simulated Annealing engine.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with an RNG seeded from the configuration.
    pub fn run(instance: &Instance, config: &SaConfig) -> SaResult {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Runs SA with a caller-supplied RNG.
    pub fn run_with_rng<R: Rng>(instance: &Instance, config: &SaConfig, rng: &mut R) -> SaResult {
        config.validate().expect("invalid SaConfig");

        let start = Instant::now();
        info!(
            instance = instance.name(),
            items = instance.item_count(),
            initial_temperature = config.initial_temperature,
            cooling_rate = config.cooling_rate,
            "starting simulated annealing"
        );

        // The trajectory ("current") may drift to worse solutions through
        // accepted uphill moves; the best-seen pair only ever improves and
        // is what the engine returns.
        let mut current = ops::initial_solution(instance, rng);
        let mut current_profit = instance.evaluate(&current).profit;
        let mut best = current.clone();
        let mut best_profit = current_profit;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut temperature_steps = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut profit_history = Vec::new();
        profit_history.push(best_profit);

        while temperature > config.final_temperature {
            for _ in 0..config.iterations_per_temperature {
                let neighbor = ops::random_neighbor(&current, instance, rng);
                let neighbor_profit = instance.evaluate(&neighbor).profit;
                let delta = neighbor_profit as i64 - current_profit as i64;

                // Metropolis acceptance criterion
                let accept = if delta > 0 {
                    improving_moves += 1;
                    true
                } else {
                    let probability = (delta as f64 / temperature).exp();
                    rng.random_range(0.0..1.0) < probability
                };

                if accept {
                    current = neighbor;
                    current_profit = neighbor_profit;
                    accepted_moves += 1;

                    if current_profit > best_profit {
                        best = current.clone();
                        best_profit = current_profit;
                        debug!(profit = best_profit, temperature, "new best solution");
                    }
                }

                iterations += 1;
            }

            temperature *= config.cooling_rate;
            temperature_steps += 1;
            profit_history.push(best_profit);
        }

        let elapsed = start.elapsed();
        info!(
            profit = best_profit,
            temperature_steps,
            elapsed_seconds = elapsed.as_secs_f64(),
            "simulated annealing finished"
        );

        SaResult {
            best,
            best_profit,
            iterations,
            temperature_steps,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            profit_history,
            elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    fn three_item_instance() -> Instance {
        Instance::new(
            "scenario-a",
            10,
            vec![
                Item {
                    profit: 10,
                    weight: 5,
                },
                Item {
                    profit: 6,
                    weight: 4,
                },
                Item {
                    profit: 9,
                    weight: 6,
                },
            ],
        )
    }

    /// Fast-cooling config so tests stay quick.
    fn quick_config() -> SaConfig {
        SaConfig::default()
            .with_initial_temperature(100.0)
            .with_final_temperature(1.0)
            .with_cooling_rate(0.9)
            .with_iterations_per_temperature(50)
            .with_seed(42)
    }

    #[test]
    fn test_sa_finds_optimum_on_small_instance() {
        let instance = three_item_instance();
        let result = SaRunner::run(&instance, &SaConfig::default().with_seed(42));

        // Optimal profit is 16 (items 0 and 1, weight 9). With the default
        // budget of ~138k trials on three items, SA cannot miss it.
        assert_eq!(result.best_profit, 16);
        assert!(instance.is_feasible(&result.best));
    }

    #[test]
    fn test_sa_result_is_feasible_and_sized() {
        let instance = three_item_instance();
        let result = SaRunner::run(&instance, &quick_config());

        assert_eq!(result.best.len(), instance.item_count());
        assert!(instance.is_feasible(&result.best));
        assert!(result.best_profit <= 16);
    }

    #[test]
    fn test_sa_cooling_step_count_is_deterministic() {
        // The number of cooling steps depends only on the schedule:
        // ceil(ln(final / initial) / ln(rate)).
        let instance = three_item_instance();
        let config = SaConfig::default()
            .with_iterations_per_temperature(1)
            .with_seed(7);
        let result = SaRunner::run(&instance, &config);

        let expected = ((config.final_temperature / config.initial_temperature).ln()
            / config.cooling_rate.ln())
        .ceil() as usize;
        assert_eq!(result.temperature_steps, expected);
        assert!(result.final_temperature <= config.final_temperature);
    }

    #[test]
    fn test_sa_profit_history_non_decreasing() {
        let instance = three_item_instance();
        let result = SaRunner::run(&instance, &quick_config());

        for window in result.profit_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best profit history should be non-decreasing: {} < {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_sa_zero_item_instance() {
        let instance = Instance::new("empty", 10, vec![]);
        let result = SaRunner::run(&instance, &quick_config());

        assert_eq!(result.best_profit, 0);
        assert_eq!(result.best.selected_count(), 0);
    }

    #[test]
    fn test_sa_zero_capacity_instance() {
        let instance = Instance::new(
            "no-room",
            0,
            vec![
                Item {
                    profit: 10,
                    weight: 5,
                },
                Item { profit: 6, weight: 4 },
            ],
        );
        let result = SaRunner::run(&instance, &quick_config());

        assert_eq!(result.best_profit, 0);
        assert_eq!(result.best.selected_count(), 0);
    }

    #[test]
    fn test_sa_counts_are_consistent() {
        let instance = three_item_instance();
        let config = quick_config();
        let result = SaRunner::run(&instance, &config);

        assert_eq!(
            result.iterations,
            result.temperature_steps * config.iterations_per_temperature
        );
        assert!(result.accepted_moves >= result.improving_moves);
        assert!(result.accepted_moves <= result.iterations);
    }

    #[test]
    fn test_sa_seeded_runs_are_reproducible() {
        let instance = three_item_instance();
        let config = quick_config();
        let a = SaRunner::run(&instance, &config);
        let b = SaRunner::run(&instance, &config);

        assert_eq!(a.best, b.best);
        assert_eq!(a.best_profit, b.best_profit);
        assert_eq!(a.accepted_moves, b.accepted_moves);
    }

    #[test]
    #[should_panic(expected = "invalid SaConfig")]
    fn test_sa_rejects_invalid_config() {
        let instance = three_item_instance();
        let config = SaConfig::default().with_cooling_rate(2.0);
        SaRunner::run(&instance, &config);
    }
}
