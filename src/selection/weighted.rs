use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Draws indices with probability proportional to a weight per index.
///
/// The weights are folded into a prefix-sum table once; each draw picks a uniform
/// value in `[0, total)` and binary-searches the table for the first entry strictly
/// greater than it. Zero-weight entries are therefore never drawn, and a value that
/// lands exactly on a boundary belongs to the next index.
///
/// # Examples
///
/// ```
/// use genalg_tsp::rng::RandomNumberGenerator;
/// use genalg_tsp::selection::WeightedSampler;
///
/// let sampler = WeightedSampler::new([0.0, 1.0, 0.0]);
/// let mut rng = RandomNumberGenerator::from_seed(3);
/// assert_eq!(sampler.draw(&mut rng), 1);
/// ```
#[derive(Debug, Clone)]
pub struct WeightedSampler {
    prefix: Vec<f64>,
}

impl WeightedSampler {
    /// Builds a sampler from non-negative weights with a positive sum.
    pub fn new<I>(weights: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let prefix = weights
            .into_iter()
            .scan(0.0, |acc, w| {
                *acc += w;
                Some(*acc)
            })
            .collect();
        Self { prefix }
    }

    /// Fitness-proportional weights: each individual weighs its cached score.
    pub fn by_score(population: &[Individual]) -> Self {
        Self::new(population.iter().map(Individual::score))
    }

    /// Linear-rank weights over a population sorted worst to best: the individual at
    /// position `i` weighs `i + 1`.
    pub fn by_rank(len: usize) -> Self {
        Self::new((1..=len).map(|rank| rank as f64))
    }

    pub fn len(&self) -> usize {
        self.prefix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.prefix.last().copied().unwrap_or(0.0)
    }

    /// Returns the index owning the point `value` of `[0, total)`.
    pub fn locate(&self, value: f64) -> usize {
        let index = self.prefix.partition_point(|&sum| sum <= value);
        index.min(self.prefix.len().saturating_sub(1))
    }

    /// Draws one index. The sampler must not be empty.
    pub fn draw(&self, rng: &mut RandomNumberGenerator) -> usize {
        self.locate(rng.uniform() * self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_sums() {
        let sampler = WeightedSampler::new([0.5, 0.25, 0.25]);
        assert_eq!(sampler.len(), 3);
        assert!((sampler.total() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_locate_boundaries() {
        let sampler = WeightedSampler::new([1.0, 2.0, 3.0]);
        assert_eq!(sampler.locate(0.0), 0);
        assert_eq!(sampler.locate(0.999), 0);
        assert_eq!(sampler.locate(1.0), 1);
        assert_eq!(sampler.locate(2.999), 1);
        assert_eq!(sampler.locate(3.0), 2);
        assert_eq!(sampler.locate(5.999), 2);
    }

    #[test]
    fn test_locate_clamps_rounding_overflow() {
        let sampler = WeightedSampler::new([1.0, 1.0]);
        assert_eq!(sampler.locate(2.0), 1);
    }

    #[test]
    fn test_zero_weight_never_drawn() {
        let sampler = WeightedSampler::new([0.0, 2.0, 0.0, 1.0, 0.0]);
        let mut rng = RandomNumberGenerator::from_seed(17);
        for _ in 0..1000 {
            let index = sampler.draw(&mut rng);
            assert!(index == 1 || index == 3);
        }
    }

    #[test]
    fn test_rank_weights() {
        let sampler = WeightedSampler::by_rank(4);
        assert_eq!(sampler.total(), 10.0);
        assert_eq!(sampler.locate(0.5), 0);
        assert_eq!(sampler.locate(1.0), 1);
        assert_eq!(sampler.locate(6.0), 3);
    }

    #[test]
    fn test_draw_frequencies_follow_weights() {
        let sampler = WeightedSampler::by_rank(3);
        let mut rng = RandomNumberGenerator::from_seed(42);
        let mut counts = [0usize; 3];
        for _ in 0..60_000 {
            counts[sampler.draw(&mut rng)] += 1;
        }
        // Expected 10k / 20k / 30k.
        assert!((8_500..11_500).contains(&counts[0]));
        assert!((18_500..21_500).contains(&counts[1]));
        assert!((28_500..31_500).contains(&counts[2]));
    }

    #[test]
    fn test_by_score_uses_cached_scores() {
        use crate::graph::Graph;

        let graph = Graph::from_positions(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        let mut population = vec![
            Individual::from_chromosome(vec![0, 2, 1, 3]),
            Individual::from_chromosome(vec![0, 1, 2, 3]),
        ];
        for individual in &mut population {
            individual.update_score(&graph);
        }

        let sampler = WeightedSampler::by_score(&population);
        let expected = population[0].score() + population[1].score();
        assert!((sampler.total() - expected).abs() < 1e-12);
    }
}
