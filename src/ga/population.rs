//! Fixed-size population with best/worst scans.

use super::fitness::KnapsackProblem;
use super::genome::Genome;
use rand::Rng;

/// A fixed-size collection of genomes.
///
/// The size never changes after construction: the only mutation is
/// [`replace`](Population::replace), which overwrites one slot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    genomes: Vec<Genome>,
}

impl Population {
    /// Builds `size` genomes of `genome_len` independent uniform random genes.
    pub fn random<R: Rng>(size: usize, genome_len: usize, rng: &mut R) -> Self {
        Self {
            genomes: (0..size).map(|_| Genome::random(genome_len, rng)).collect(),
        }
    }

    /// Wraps existing genomes.
    pub fn from_genomes(genomes: Vec<Genome>) -> Self {
        Self { genomes }
    }

    /// Number of genomes.
    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    /// Returns `true` if the population holds no genomes.
    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    /// All genomes in slot order.
    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    /// Genome in slot `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn get(&self, index: usize) -> &Genome {
        &self.genomes[index]
    }

    /// Overwrites slot `index` with `genome`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn replace(&mut self, index: usize, genome: Genome) {
        self.genomes[index] = genome;
    }

    /// Index of the fittest genome. Only a strictly greater fitness moves the
    /// index, so the first of several equal bests wins.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn best_index(&self, problem: &KnapsackProblem) -> usize {
        self.scan(problem, |candidate, current| candidate > current)
    }

    /// Index of the least fit genome. Only a strictly lower fitness moves the
    /// index, so the first of several equal worsts wins.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn worst_index(&self, problem: &KnapsackProblem) -> usize {
        self.scan(problem, |candidate, current| candidate < current)
    }

    fn scan(&self, problem: &KnapsackProblem, better: impl Fn(f64, f64) -> bool) -> usize {
        assert!(!self.genomes.is_empty(), "cannot scan an empty population");

        let mut chosen = 0;
        let mut chosen_fitness = problem.evaluate(&self.genomes[0]);
        for (i, genome) in self.genomes.iter().enumerate().skip(1) {
            let f = problem.evaluate(genome);
            if better(f, chosen_fitness) {
                chosen = i;
                chosen_fitness = f;
            }
        }
        chosen
    }
}
