//! Genetic algorithm for the 0/1 knapsack problem.
//!
//! Given an ordered catalog of items (name, weight, value) and a capacity,
//! searches for a high-value subset whose total weight fits:
//!
//! - **Catalog**: Item records and the whitespace text format they load from.
//! - **GA**: Binary genomes, fitness with a hard capacity cliff, two-candidate
//!   tournament selection, single-point and midpoint crossover, bit-flip
//!   mutation, and a steady-state replace-worst loop.
//! - **Report**: Plain-text progress lines and the final best-solution block.
//!
//! # Example
//!
//! ```
//! use knapsack_ga::catalog::Catalog;
//! use knapsack_ga::ga::{GaConfig, GaRunner, KnapsackProblem};
//!
//! let catalog = Catalog::parse("A 2 3  B 3 4  C 4 5");
//! let problem = KnapsackProblem::new(catalog, 5.0)?;
//! let result = GaRunner::run(&problem, &GaConfig::default().with_seed(7))?;
//! assert!(result.best.total_weight <= 5.0);
//! # Ok::<(), knapsack_ga::KnapsackError>(())
//! ```
//!
//! Runs are single-threaded. All randomness comes from one seedable
//! generator owned by [`ga::GaRunner`], so a fixed seed reproduces a run.

pub mod catalog;
pub mod error;
pub mod ga;
pub mod report;

pub use error::{KnapsackError, Result};
