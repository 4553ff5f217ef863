//! Fitness evaluation.
//!
//! Fitness is the packed value when the packed weight fits within capacity
//! and exactly `0.0` otherwise. There is no partial credit and no penalty
//! scaling. Fitness is never cached on a genome; every scan recomputes it.

use super::genome::Genome;
use crate::catalog::{Catalog, Item};
use crate::error::{KnapsackError, Result};

/// Scores `genome` against `catalog` and `capacity`.
///
/// Higher is better (maximization).
///
/// # Panics
/// Panics if the genome length differs from the catalog length.
pub fn fitness(genome: &Genome, catalog: &Catalog, capacity: f64) -> f64 {
    let (weight, value) = totals(genome, catalog);
    if weight > capacity {
        0.0
    } else {
        value as f64
    }
}

/// Raw packed weight and value, ignoring capacity.
///
/// Item values are `u32`, so the `u64` sum cannot overflow for any catalog
/// that fits in memory.
///
/// # Panics
/// Panics if the genome length differs from the catalog length.
pub fn totals(genome: &Genome, catalog: &Catalog) -> (f64, u64) {
    assert_eq!(
        genome.len(),
        catalog.len(),
        "genome length must equal catalog length"
    );

    let mut weight = 0.0;
    let mut value = 0u64;
    for item in genome.selected().map(|i| &catalog.items()[i]) {
        weight += item.weight;
        value += u64::from(item.value);
    }
    (weight, value)
}

/// A knapsack instance: the item catalog and a fixed capacity.
///
/// Construction checks the instance once so the engine can treat both as
/// trusted for the rest of the run.
#[derive(Debug, Clone)]
pub struct KnapsackProblem {
    catalog: Catalog,
    capacity: f64,
}

impl KnapsackProblem {
    /// Creates a problem instance.
    ///
    /// # Errors
    /// - [`KnapsackError::EmptyCatalog`] if the catalog has no items
    /// - [`KnapsackError::InvalidCapacity`] unless capacity is finite and > 0
    pub fn new(catalog: Catalog, capacity: f64) -> Result<Self> {
        if catalog.is_empty() {
            return Err(KnapsackError::EmptyCatalog);
        }
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(KnapsackError::InvalidCapacity(capacity));
        }
        Ok(Self { catalog, capacity })
    }

    /// The item catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The knapsack capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Genome length for this instance.
    pub fn genome_len(&self) -> usize {
        self.catalog.len()
    }

    /// Fitness of `genome` under this instance.
    pub fn evaluate(&self, genome: &Genome) -> f64 {
        fitness(genome, &self.catalog, self.capacity)
    }

    /// Raw packed weight and value of `genome`.
    pub fn totals(&self, genome: &Genome) -> (f64, u64) {
        totals(genome, &self.catalog)
    }

    /// Items packed by `genome`, in catalog order.
    pub fn selected_items<'a>(
        &'a self,
        genome: &'a Genome,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        genome.selected().map(move |i| &self.catalog.items()[i])
    }
}
