//! Genetic solver configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Parameters of a genetic run, fixed at solver construction.
///
/// Deserializes with missing fields taken from [`Default`], so a partial
/// JSON or TOML document is a valid configuration source.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::GeneticConfig;
///
/// let config = GeneticConfig::default()
///     .with_population_size(200)
///     .with_generations(1000)
///     .with_mutation_rate(0.02);
/// assert!(config.validate().is_ok());
///
/// assert!(GeneticConfig::default().with_mutation_rate(1.5).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    /// Routes per generation. At least 2.
    pub population_size: usize,
    /// Per-position swap probability, in `[0, 1]`.
    pub mutation_rate: f64,
    /// Number of generations; the run never stops early.
    pub generations: usize,
    /// Log progress every this many generations; 0 disables.
    pub log_interval: usize,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.01,
            generations: 500,
            log_interval: 100,
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the per-position mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the progress log interval (0 disables progress logging).
    pub fn with_log_interval(mut self, interval: usize) -> Self {
        self.log_interval = interval;
        self
    }

    /// Checks every parameter range.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::invalid_config(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        if !self.mutation_rate.is_finite() || !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::invalid_config(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.generations == 0 {
            return Err(Error::invalid_config("generations must be positive"));
        }
        Ok(())
    }
}
