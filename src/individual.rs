//! # Individual
//!
//! One candidate tour. An `Individual` owns its permutation (the chromosome) and the
//! rank encoding of that permutation, and keeps the two in lockstep: every operator
//! that edits one representation regenerates the other before returning.
//!
//! Crossover and the first mutation pass work on the encoding, where any value of
//! `encoded[i]` within `[0, i]` is legal, so offspring never need repairing. The
//! second mutation pass swaps tour positions directly and re-encodes.
//!
//! ## Example
//!
//! ```rust
//! use genalg_tsp::codec::{is_permutation, Decoder};
//! use genalg_tsp::individual::Individual;
//! use genalg_tsp::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let mut decoder = Decoder::new();
//!
//! let mut a = Individual::random(8, &mut decoder, &mut rng);
//! let mut b = Individual::random(8, &mut decoder, &mut rng);
//! a.crossover(&mut b, &mut decoder, &mut rng);
//! a.mutate(0.05, 0.005, &mut decoder, &mut rng);
//!
//! assert!(is_permutation(a.chromosome()));
//! assert!(is_permutation(b.chromosome()));
//! ```

use crate::codec::{encode, Decoder};
use crate::graph::Graph;
use crate::rng::RandomNumberGenerator;

/// Lower bound on the number of crossover cut points.
const MIN_CROSSOVER_CUTS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    chromosome: Vec<usize>,
    encoded: Vec<usize>,
    score: f64,
}

impl Individual {
    /// Creates an individual over `n` vertices with every `encoded[i]` drawn uniformly
    /// from `[0, i]`, which yields a uniformly random tour.
    pub fn random(n: usize, decoder: &mut Decoder, rng: &mut RandomNumberGenerator) -> Self {
        let encoded = (0..n).map(|i| rng.below(i + 1)).collect();
        Self::from_encoded(encoded, decoder)
    }

    /// Creates an individual from a permutation of `{0..n-1}`.
    pub fn from_chromosome(chromosome: Vec<usize>) -> Self {
        let encoded = encode(&chromosome);
        Self {
            chromosome,
            encoded,
            score: 0.0,
        }
    }

    /// Creates an individual from a rank encoding with `encoded[i]` in `[0, i]`.
    pub fn from_encoded(encoded: Vec<usize>, decoder: &mut Decoder) -> Self {
        let chromosome = decoder.decode(&encoded);
        Self {
            chromosome,
            encoded,
            score: 0.0,
        }
    }

    /// The tour, as the order in which vertices are visited.
    pub fn chromosome(&self) -> &[usize] {
        &self.chromosome
    }

    pub fn encoded(&self) -> &[usize] {
        &self.encoded
    }

    pub fn len(&self) -> usize {
        self.chromosome.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosome.is_empty()
    }

    /// The score cached by the last [`update_score`](Self::update_score).
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Reciprocal of the closed tour length, so larger is better.
    ///
    /// Undefined for tours whose total length is zero, e.g. fewer than two vertices.
    pub fn fitness(&self, graph: &Graph) -> f64 {
        1.0 / graph.tour_length(&self.chromosome)
    }

    /// Caches [`fitness`](Self::fitness) for sorting.
    pub fn update_score(&mut self, graph: &Graph) {
        self.score = self.fitness(graph);
    }

    /// Applies the two mutation passes in order.
    ///
    /// 1. Each `encoded[i]` is redrawn uniformly from `[0, i]` with probability
    ///    `intensity_a`, followed by a single re-decode.
    /// 2. Each tour position `i` is swapped with a uniformly random position with
    ///    probability `intensity_b`, followed by a single re-encode.
    pub fn mutate(
        &mut self,
        intensity_a: f64,
        intensity_b: f64,
        decoder: &mut Decoder,
        rng: &mut RandomNumberGenerator,
    ) {
        for i in 0..self.encoded.len() {
            if rng.uniform() < intensity_a {
                self.encoded[i] = rng.below(i + 1);
            }
        }
        self.redecode(decoder);

        let n = self.chromosome.len();
        for i in 0..n {
            if rng.uniform() < intensity_b {
                let j = rng.below(n);
                self.chromosome.swap(i, j);
            }
        }
        self.reencode();
    }

    /// Multi-point crossover on the rank encodings of `self` and `other`.
    ///
    /// Draws `max(uniform [0, len), 3)` cut points (capped at `len`), sorts them and
    /// sweeps the positions with a toggle that starts on a random side and flips at
    /// every cut. Wherever the toggle is on, the two encoded values at that position
    /// are exchanged. Both individuals are re-decoded afterwards.
    pub fn crossover(
        &mut self,
        other: &mut Individual,
        decoder: &mut Decoder,
        rng: &mut RandomNumberGenerator,
    ) {
        debug_assert_eq!(self.len(), other.len());
        let len = self.encoded.len();
        if len == 0 {
            return;
        }

        let count = rng.below(len).max(MIN_CROSSOVER_CUTS).min(len);
        let mut cuts: Vec<usize> = (0..count).map(|_| rng.below(len)).collect();
        cuts.sort_unstable();

        let mut swapping = rng.coin();
        let mut next_cut = 0;
        for i in 0..len {
            while next_cut < cuts.len() && cuts[next_cut] == i {
                swapping = !swapping;
                next_cut += 1;
            }
            if swapping {
                std::mem::swap(&mut self.encoded[i], &mut other.encoded[i]);
            }
        }

        self.redecode(decoder);
        other.redecode(decoder);
    }

    fn redecode(&mut self, decoder: &mut Decoder) {
        decoder.decode_into(&self.encoded, &mut self.chromosome);
    }

    fn reencode(&mut self) {
        self.encoded = encode(&self.chromosome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::is_permutation;

    fn ring(n: usize) -> Graph {
        let positions = (0..n)
            .map(|i| {
                let angle = i as f64 / n as f64 * std::f64::consts::TAU;
                [angle.cos(), angle.sin()]
            })
            .collect();
        Graph::from_positions(positions)
    }

    fn assert_consistent(individual: &Individual) {
        assert!(is_permutation(individual.chromosome()));
        assert_eq!(individual.encoded(), encode(individual.chromosome()).as_slice());
        assert!(individual
            .encoded()
            .iter()
            .enumerate()
            .all(|(i, &e)| e <= i));
    }

    #[test]
    fn test_random_individual_is_consistent() {
        let mut rng = RandomNumberGenerator::from_seed(21);
        let mut decoder = Decoder::new();
        for n in 1..30 {
            let individual = Individual::random(n, &mut decoder, &mut rng);
            assert_eq!(individual.len(), n);
            assert_consistent(&individual);
        }
    }

    #[test]
    fn test_fitness_is_reciprocal_tour_length() {
        let graph = Graph::from_positions(vec![[0.0, 0.0], [4.0, 0.0], [4.0, 3.0]]);
        let mut individual = Individual::from_chromosome(vec![2, 0, 1]);
        assert_eq!(individual.score(), 0.0);

        individual.update_score(&graph);
        assert!((individual.score() - 1.0 / 12.0).abs() < 1e-12);
        assert_eq!(individual.score(), individual.fitness(&graph));
    }

    #[test]
    fn test_shorter_tour_scores_higher() {
        let graph = ring(6);
        let around = Individual::from_chromosome(vec![0, 1, 2, 3, 4, 5]);
        let zigzag = Individual::from_chromosome(vec![0, 3, 1, 4, 2, 5]);
        assert!(around.fitness(&graph) > zigzag.fitness(&graph));
    }

    #[test]
    fn test_clone_does_not_share_storage() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let mut decoder = Decoder::new();
        let original = Individual::random(12, &mut decoder, &mut rng);
        let mut copy = original.clone();

        copy.mutate(1.0, 1.0, &mut decoder, &mut rng);
        assert_consistent(&original);
        assert_consistent(&copy);
        assert_eq!(original.encoded(), encode(original.chromosome()).as_slice());
    }

    #[test]
    fn test_mutation_preserves_validity() {
        let mut rng = RandomNumberGenerator::from_seed(99);
        let mut decoder = Decoder::new();
        for n in 1..25 {
            let mut individual = Individual::random(n, &mut decoder, &mut rng);
            for _ in 0..20 {
                individual.mutate(0.3, 0.3, &mut decoder, &mut rng);
                assert_consistent(&individual);
            }
        }
    }

    #[test]
    fn test_zero_intensity_mutation_is_identity() {
        let mut rng = RandomNumberGenerator::from_seed(8);
        let mut decoder = Decoder::new();
        let mut individual = Individual::random(15, &mut decoder, &mut rng);
        let before = individual.clone();

        individual.mutate(0.0, 0.0, &mut decoder, &mut rng);
        assert_eq!(individual.chromosome(), before.chromosome());
    }

    #[test]
    fn test_full_intensity_mutation_changes_something() {
        let mut rng = RandomNumberGenerator::from_seed(13);
        let mut decoder = Decoder::new();
        let mut individual = Individual::from_chromosome((0..40).collect());
        individual.mutate(1.0, 0.0, &mut decoder, &mut rng);
        assert_ne!(individual.chromosome(), (0..40).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn test_crossover_preserves_validity() {
        let mut rng = RandomNumberGenerator::from_seed(2024);
        let mut decoder = Decoder::new();
        for n in 1..25 {
            for _ in 0..20 {
                let mut a = Individual::random(n, &mut decoder, &mut rng);
                let mut b = Individual::random(n, &mut decoder, &mut rng);
                a.crossover(&mut b, &mut decoder, &mut rng);
                assert_consistent(&a);
                assert_consistent(&b);
            }
        }
    }

    #[test]
    fn test_crossover_only_exchanges_positions() {
        let mut rng = RandomNumberGenerator::from_seed(77);
        let mut decoder = Decoder::new();
        let mut a = Individual::random(30, &mut decoder, &mut rng);
        let mut b = Individual::random(30, &mut decoder, &mut rng);
        let (ea, eb) = (a.encoded().to_vec(), b.encoded().to_vec());

        a.crossover(&mut b, &mut decoder, &mut rng);

        for i in 0..30 {
            let pair = (a.encoded()[i], b.encoded()[i]);
            assert!(pair == (ea[i], eb[i]) || pair == (eb[i], ea[i]));
        }
    }

    #[test]
    fn test_crossover_on_tiny_tours() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let mut decoder = Decoder::new();
        for n in 1..=3 {
            let mut a = Individual::random(n, &mut decoder, &mut rng);
            let mut b = Individual::random(n, &mut decoder, &mut rng);
            a.crossover(&mut b, &mut decoder, &mut rng);
            assert_consistent(&a);
            assert_consistent(&b);
        }
    }
}
