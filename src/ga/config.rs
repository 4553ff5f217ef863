//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! The knapsack instance itself (catalog and capacity) lives in
//! [`KnapsackProblem`](super::KnapsackProblem).

use crate::error::{KnapsackError, Result};

/// How the generational loop builds its offspring from two parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Recombination {
    /// First `len / 2` genes from parent A, the rest from parent B.
    #[default]
    Midpoint,

    /// Random cut point via
    /// [`single_point_crossover`](super::operators::single_point_crossover);
    /// the first child is kept.
    SinglePoint,
}

/// Configuration for the knapsack GA.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 100);
/// assert!((config.mutation_rate - 0.05).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::ga::{GaConfig, Recombination};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_generations(500)
///     .with_recombination(Recombination::SinglePoint)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of genomes in the population. Constant for the whole run.
    pub population_size: usize,

    /// Number of generations to run. There is no early termination.
    pub generations: usize,

    /// Per-gene flip probability used by mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Offspring construction strategy.
    pub recombination: Recombination,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 100,
            mutation_rate: 0.05,
            recombination: Recombination::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the recombination strategy.
    pub fn with_recombination(mut self, recombination: Recombination) -> Self {
        self.recombination = recombination;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`KnapsackError::InvalidConfig`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(KnapsackError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.generations == 0 {
            return Err(KnapsackError::InvalidConfig(
                "generations must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(KnapsackError::InvalidConfig(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
