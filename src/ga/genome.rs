//! Binary genome.
//!
//! A [`Genome`] holds one gene per catalog item. Gene `i` set means item `i`
//! is packed. The storage is private so the rest of the engine only sees
//! index-based get/set/flip.

use rand::Rng;

/// Fixed-length binary genome.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome {
    genes: Vec<bool>,
}

impl Genome {
    /// Creates a genome from explicit genes.
    pub fn new(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// Genome of `len` cleared genes (the empty selection).
    pub fn zeros(len: usize) -> Self {
        Self {
            genes: vec![false; len],
        }
    }

    /// Genome with every gene drawn independently and uniformly.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            genes: (0..len).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the genome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Gene at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn get(&self, index: usize) -> bool {
        self.genes[index]
    }

    /// Sets the gene at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn set(&mut self, index: usize, value: bool) {
        self.genes[index] = value;
    }

    /// Flips the gene at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn flip(&mut self, index: usize) {
        self.genes[index] = !self.genes[index];
    }

    /// Iterates over the genes in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.genes.iter().copied()
    }

    /// Indices of the set genes.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &g)| g.then_some(i))
    }

    /// Number of set genes.
    pub fn count_ones(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    /// Number of positions where `self` and `other` differ.
    pub fn hamming_distance(&self, other: &Self) -> usize {
        self.genes
            .iter()
            .zip(other.genes.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl From<Vec<bool>> for Genome {
    fn from(genes: Vec<bool>) -> Self {
        Self::new(genes)
    }
}

impl FromIterator<bool> for Genome {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            genes: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Genome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for g in &self.genes {
            f.write_str(if *g { "1" } else { "0" })?;
        }
        Ok(())
    }
}
