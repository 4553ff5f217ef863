//! Recombination and mutation operators for binary genomes.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: random cut point, two complementary children
//! - [`single_point_crossover_at`]: same, with an explicit cut point
//! - [`midpoint_combine`]: one child cut at `len / 2`
//!
//! # Mutation
//!
//! - [`bit_flip_mutation`]: independent per-gene flip with a fixed rate
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::genome::Genome;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover at cut point `k`.
///
/// `child1` takes genes `[0, k)` from `parent1` and `[k, len)` from `parent2`;
/// `child2` takes the complementary assignment. `k == 0` swaps the parents
/// entirely and `k == len` copies them unchanged.
///
/// # Panics
/// Panics if parents have different lengths or `k > len`.
pub fn single_point_crossover_at(
    parent1: &Genome,
    parent2: &Genome,
    k: usize,
) -> (Genome, Genome) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(k <= n, "crossover point {k} out of range for length {n}");

    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();
    for i in k..n {
        child1.set(i, parent2.get(i));
        child2.set(i, parent1.get(i));
    }

    (child1, child2)
}

/// Single-point crossover with a uniformly random cut point in `[0, len)`.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn single_point_crossover<R: Rng>(
    parent1: &Genome,
    parent2: &Genome,
    rng: &mut R,
) -> (Genome, Genome) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    assert!(!parent1.is_empty(), "parents must not be empty");

    let k = rng.random_range(0..parent1.len());
    single_point_crossover_at(parent1, parent2, k)
}

/// Fixed-midpoint combination: first `len / 2` genes from `parent1`, the rest
/// from `parent2`.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn midpoint_combine(parent1: &Genome, parent2: &Genome) -> Genome {
    single_point_crossover_at(parent1, parent2, parent1.len() / 2).0
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Bit-flip mutation: each gene flips independently with probability `rate`.
///
/// A uniform draw in `[0, 1)` is taken for every gene, so `rate == 0.0` never
/// flips and `rate == 1.0` flips every gene.
///
/// # Complexity
/// O(n)
pub fn bit_flip_mutation<R: Rng>(genome: &mut Genome, rate: f64, rng: &mut R) {
    for i in 0..genome.len() {
        if rng.random::<f64>() < rate {
            genome.flip(i);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn genome(bits: &str) -> Genome {
        bits.chars().map(|c| c == '1').collect()
    }

    // ---- Crossover ----

    #[test]
    fn test_crossover_at_cut() {
        let p1 = genome("111111");
        let p2 = genome("000000");
        let (c1, c2) = single_point_crossover_at(&p1, &p2, 2);
        assert_eq!(c1.to_string(), "110000");
        assert_eq!(c2.to_string(), "001111");
    }

    #[test]
    fn test_crossover_at_zero_swaps() {
        let p1 = genome("1010");
        let p2 = genome("0110");
        let (c1, c2) = single_point_crossover_at(&p1, &p2, 0);
        assert_eq!(c1, p2);
        assert_eq!(c2, p1);
    }

    #[test]
    fn test_crossover_at_len_copies() {
        let p1 = genome("1010");
        let p2 = genome("0110");
        let (c1, c2) = single_point_crossover_at(&p1, &p2, 4);
        assert_eq!(c1, p1);
        assert_eq!(c2, p2);
    }

    #[test]
    fn test_random_crossover_children_are_complementary() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = genome("1111100000");
        let p2 = genome("0101010101");

        for _ in 0..100 {
            let (c1, c2) = single_point_crossover(&p1, &p2, &mut rng);
            assert_eq!(c1.len(), 10);
            assert_eq!(c2.len(), 10);
            for i in 0..10 {
                let from_p1 = c1.get(i) == p1.get(i) && c2.get(i) == p2.get(i);
                let from_p2 = c1.get(i) == p2.get(i) && c2.get(i) == p1.get(i);
                assert!(from_p1 || from_p2, "position {i} not inherited");
            }
        }
    }

    #[test]
    fn test_random_crossover_never_copies_both_unchanged() {
        // k is drawn from [0, len), so child1 always takes at least the last
        // gene from parent2.
        let mut rng = StdRng::seed_from_u64(9);
        let p1 = genome("1111");
        let p2 = genome("0000");
        for _ in 0..200 {
            let (c1, _) = single_point_crossover(&p1, &p2, &mut rng);
            assert!(!c1.get(3));
        }
    }

    #[test]
    fn test_single_gene_crossover_swaps() {
        let mut rng = StdRng::seed_from_u64(1);
        let (c1, c2) = single_point_crossover(&genome("1"), &genome("0"), &mut rng);
        assert_eq!(c1.to_string(), "0");
        assert_eq!(c2.to_string(), "1");
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch() {
        single_point_crossover_at(&genome("10"), &genome("101"), 1);
    }

    #[test]
    #[should_panic(expected = "parents must not be empty")]
    fn test_crossover_empty_parents() {
        let mut rng = StdRng::seed_from_u64(1);
        single_point_crossover(&Genome::zeros(0), &Genome::zeros(0), &mut rng);
    }

    #[test]
    fn test_midpoint_combine_even() {
        let child = midpoint_combine(&genome("1111"), &genome("0000"));
        assert_eq!(child.to_string(), "1100");
    }

    #[test]
    fn test_midpoint_combine_odd() {
        // 5 / 2 == 2 genes from the first parent.
        let child = midpoint_combine(&genome("11111"), &genome("00000"));
        assert_eq!(child.to_string(), "11000");
    }

    #[test]
    fn test_midpoint_combine_single_gene() {
        let child = midpoint_combine(&genome("1"), &genome("0"));
        assert_eq!(child.to_string(), "0");
    }

    // ---- Mutation ----

    #[test]
    fn test_mutation_rate_zero_is_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        let original = genome("1011001110");
        let mut g = original.clone();
        for _ in 0..100 {
            bit_flip_mutation(&mut g, 0.0, &mut rng);
        }
        assert_eq!(g, original);
    }

    #[test]
    fn test_mutation_rate_one_flips_all() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut g = genome("1011001110");
        bit_flip_mutation(&mut g, 1.0, &mut rng);
        assert_eq!(g.to_string(), "0100110001");
    }

    #[test]
    fn test_mutation_expected_flip_count() {
        let mut rng = StdRng::seed_from_u64(5);
        let len = 10_000;
        let mut g = Genome::zeros(len);
        bit_flip_mutation(&mut g, 0.05, &mut rng);
        let flipped = g.count_ones();
        // Expectation 500, standard deviation ~22.
        assert!(
            (400..=600).contains(&flipped),
            "expected ~500 flips at rate 0.05, got {flipped}"
        );
    }

    #[test]
    fn test_mutation_preserves_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut g = Genome::zeros(17);
        bit_flip_mutation(&mut g, 0.5, &mut rng);
        assert_eq!(g.len(), 17);
    }
}
