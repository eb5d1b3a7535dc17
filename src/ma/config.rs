//! Memetic algorithm configuration.

use crate::local_search::DEFAULT_MAX_ITERATIONS;

/// Configuration for the memetic driver.
///
/// # Defaults
///
/// ```
/// use linord::ma::MaConfig;
///
/// let config = MaConfig::default();
/// assert_eq!(config.population_size, 25);
/// assert_eq!(config.offspring_count, 11);
/// assert_eq!(config.diversify_after, 30);
/// assert_eq!(config.stop_after, 150);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use linord::ma::MaConfig;
///
/// let config = MaConfig::default()
///     .with_population_size(50)
///     .with_stop_after(300)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct MaConfig {
    /// Number of individuals kept in the population between generations.
    ///
    /// Must be at least 2, since crossover draws two distinct parents.
    pub population_size: usize,

    /// Number of offspring generated per generation.
    ///
    /// The population temporarily grows to `population_size +
    /// offspring_count` before survivor selection trims it back.
    pub offspring_count: usize,

    /// Length of the stagnation-detection window, in generations.
    ///
    /// Every `diversify_after` generations the mean population score over
    /// the window is inspected; if it has not moved at all, the population
    /// is partially restarted. Progress is reported on the same cadence.
    pub diversify_after: usize,

    /// Number of consecutive generations without a new best score before
    /// the run stops.
    pub stop_after: usize,

    /// Cap on local-search steps per individual.
    pub max_search_iterations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for MaConfig {
    fn default() -> Self {
        Self {
            population_size: 25,
            offspring_count: 11,
            diversify_after: 30,
            stop_after: 150,
            max_search_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl MaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of offspring per generation.
    pub fn with_offspring_count(mut self, n: usize) -> Self {
        self.offspring_count = n;
        self
    }

    /// Sets the diversification window length.
    pub fn with_diversify_after(mut self, generations: usize) -> Self {
        self.diversify_after = generations;
        self
    }

    /// Sets the stagnation stopping limit.
    pub fn with_stop_after(mut self, generations: usize) -> Self {
        self.stop_after = generations;
        self
    }

    /// Sets the cap on local-search steps per individual.
    pub fn with_max_search_iterations(mut self, n: usize) -> Self {
        self.max_search_iterations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.offspring_count < 1 {
            return Err("offspring_count must be at least 1".into());
        }
        if self.diversify_after < 1 {
            return Err("diversify_after must be at least 1".into());
        }
        if self.stop_after < 1 {
            return Err("stop_after must be at least 1".into());
        }
        if self.max_search_iterations < 1 {
            return Err("max_search_iterations must be at least 1".into());
        }
        Ok(())
    }
}
