//! Genetic Algorithm for the 0/1 knapsack problem.
//!
//! A steady-state GA over fixed-length binary genomes. Each generation
//! selects two parents by a two-candidate tournament, combines them into one
//! offspring, mutates it, and overwrites the least fit genome in the
//! population with it.
//!
//! # Key Types
//!
//! - [`KnapsackProblem`]: Item catalog plus capacity, and the fitness function
//! - [`Genome`]: One gene per item
//! - [`GaConfig`]: Algorithm parameters (population size, generations, rate)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final best solution and per-generation history
//!
//! # Submodules
//!
//! - [`operators`]: Single-point and midpoint crossover, bit-flip mutation
//! - [`selection`]: Two-candidate tournament
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms" (steady-state GA)

mod config;
mod fitness;
mod genome;
pub mod operators;
mod population;
mod runner;
pub mod selection;

pub use config::{GaConfig, Recombination};
pub use fitness::{fitness, totals, KnapsackProblem};
pub use genome::Genome;
pub use population::Population;
pub use runner::{GaResult, GaRunner, GenerationReport, Solution};
