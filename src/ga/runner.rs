//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates a steady-state run:
//! initialization → (selection → recombination → mutation → replace worst)
//! repeated for a fixed number of generations.

use super::config::{GaConfig, Recombination};
use super::fitness::KnapsackProblem;
use super::genome::Genome;
use super::operators::{bit_flip_mutation, midpoint_combine, single_point_crossover};
use super::population::Population;
use super::selection::select_parents;
use crate::catalog::Item;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A genome together with its score and raw totals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// The selected genome.
    pub genome: Genome,

    /// Fitness under the run's capacity (0 when overweight).
    pub fitness: f64,

    /// Sum of packed weights, regardless of capacity.
    pub total_weight: f64,

    /// Sum of packed values, regardless of capacity.
    pub total_value: u64,
}

impl Solution {
    /// Scores `genome` against `problem`.
    pub fn evaluate(problem: &KnapsackProblem, genome: Genome) -> Self {
        let fitness = problem.evaluate(&genome);
        let (total_weight, total_value) = problem.totals(&genome);
        Self {
            genome,
            fitness,
            total_weight,
            total_value,
        }
    }

    /// Items packed by this solution, in catalog order.
    pub fn items<'a>(
        &'a self,
        problem: &'a KnapsackProblem,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        problem.selected_items(&self.genome)
    }

    /// Returns `true` if the packed weight fits within `capacity`.
    pub fn is_feasible(&self, capacity: f64) -> bool {
        self.total_weight <= capacity
    }
}

/// What happened in one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    /// 1-based generation number.
    pub generation: usize,

    /// Population slot overwritten by this generation's offspring.
    pub replaced_index: usize,

    /// Best genome in the population after replacement.
    pub best: Solution,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best genome of the final population.
    pub best: Solution,

    /// Total number of generations executed.
    pub generations: usize,

    /// Seed the run was started from. Passing it back through
    /// [`GaConfig::with_seed`] replays the run.
    pub seed: u64,

    /// One report per generation, in order.
    pub history: Vec<GenerationReport>,

    /// Population at the end of the run.
    pub final_population: Population,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use knapsack_ga::catalog::{Catalog, Item};
/// use knapsack_ga::ga::{GaConfig, GaRunner, KnapsackProblem};
///
/// let catalog = Catalog::new(vec![
///     Item::new("A", 2.0, 3),
///     Item::new("B", 3.0, 4),
///     Item::new("C", 4.0, 5),
/// ]);
/// let problem = KnapsackProblem::new(catalog, 5.0).unwrap();
/// let config = GaConfig::default().with_seed(42);
///
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert!(result.best.total_weight <= 5.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Errors
    /// Returns [`KnapsackError::InvalidConfig`](crate::error::KnapsackError::InvalidConfig)
    /// if the configuration does not validate. Nothing fails once the loop
    /// has started.
    pub fn run(problem: &KnapsackProblem, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_observer(problem, config, |_| {})
    }

    /// Runs the GA, handing each generation's report to `observer` as soon as
    /// it is produced.
    pub fn run_with_observer<F>(
        problem: &KnapsackProblem,
        config: &GaConfig,
        mut observer: F,
    ) -> Result<GaResult>
    where
        F: FnMut(&GenerationReport),
    {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        log::info!(
            "starting GA: {} items, capacity {}, population {}, generations {}, seed {}",
            problem.genome_len(),
            problem.capacity(),
            config.population_size,
            config.generations,
            seed
        );

        // 1. Initialize population
        let mut population =
            Population::random(config.population_size, problem.genome_len(), &mut rng);

        let mut history = Vec::with_capacity(config.generations);

        // 2. Evolutionary loop
        for gen in 0..config.generations {
            // Selection
            let (parent_a, parent_b) = select_parents(population.genomes(), problem, &mut rng);

            // Recombination
            let mut offspring = match config.recombination {
                Recombination::Midpoint => midpoint_combine(&parent_a, &parent_b),
                Recombination::SinglePoint => {
                    single_point_crossover(&parent_a, &parent_b, &mut rng).0
                }
            };

            // Mutation
            bit_flip_mutation(&mut offspring, config.mutation_rate, &mut rng);

            // Steady-state replacement
            let worst = population.worst_index(problem);
            population.replace(worst, offspring);

            let best = population.best_index(problem);
            let report = GenerationReport {
                generation: gen + 1,
                replaced_index: worst,
                best: Solution::evaluate(problem, population.get(best).clone()),
            };

            log::debug!(
                "generation {}: replaced slot {}, best value {} at weight {}",
                report.generation,
                report.replaced_index,
                report.best.total_value,
                report.best.total_weight
            );

            observer(&report);
            history.push(report);
        }

        // 3. Final best
        let best_idx = population.best_index(problem);
        let best = Solution::evaluate(problem, population.get(best_idx).clone());

        log::info!(
            "GA finished after {} generations: value {}, weight {}",
            config.generations,
            best.total_value,
            best.total_weight
        );

        Ok(GaResult {
            best,
            generations: config.generations,
            seed,
            history,
            final_population: population,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
