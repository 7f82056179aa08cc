//! ILS configuration.

use crate::ls::LsConfig;

/// Configuration for the Iterated Local Search engine.
///
/// # Examples
///
/// ```
/// use kp_metaheur::ils::IlsConfig;
/// use kp_metaheur::ls::LsConfig;
///
/// let config = IlsConfig::default()
///     .with_max_iterations(500)
///     .with_perturbation_strength(5)
///     .with_local_search(LsConfig::default().with_max_iterations(200))
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 500);
/// ```
#[derive(Debug, Clone)]
pub struct IlsConfig {
    /// Number of perturb → local-search cycles.
    pub max_iterations: usize,

    /// Number of bits flipped by each perturbation. Clamped to the item
    /// count on small instances.
    pub perturbation_strength: usize,

    /// Budget of the hill climb applied after each perturbation.
    pub local_search: LsConfig,

    /// Random seed for reproducibility. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for IlsConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            perturbation_strength: 3,
            local_search: LsConfig::default(),
            seed: None,
        }
    }
}

impl IlsConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_perturbation_strength(mut self, k: usize) -> Self {
        self.perturbation_strength = k;
        self
    }

    pub fn with_local_search(mut self, config: LsConfig) -> Self {
        self.local_search = config;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IlsConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.perturbation_strength, 3);
        assert_eq!(config.local_search.max_iterations, 100);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder() {
        let config = IlsConfig::default()
            .with_max_iterations(10)
            .with_perturbation_strength(2)
            .with_local_search(LsConfig::default().with_max_iterations(5))
            .with_seed(123);
        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.perturbation_strength, 2);
        assert_eq!(config.local_search.max_iterations, 5);
        assert_eq!(config.seed, Some(123));
    }
}
