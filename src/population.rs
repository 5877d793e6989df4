//! # Population
//!
//! A fixed-size collection of [`Individual`]s. Each generation it is scored, sorted
//! from worst to best (ascending score, so the best tour is last) and reproduced
//! into the next generation of the same size.

use rayon::prelude::*;
use tracing::warn;

use crate::codec::Decoder;
use crate::evolution::options::EvolutionOptions;
use crate::graph::Graph;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::WeightedSampler;

/// Largest vertex count whose factorial still bounds the population size.
const FACTORIAL_BOUND_LIMIT: usize = 15;

/// `min(cap, n!)`: there is no point in holding more individuals than distinct
/// tours. Beyond 15 vertices `n!` exceeds any realistic cap.
pub fn population_size(vertices: usize, cap: usize) -> usize {
    if vertices > FACTORIAL_BOUND_LIMIT {
        return cap;
    }
    let mut bound: usize = 1;
    for k in 2..=vertices {
        bound = bound.saturating_mul(k);
        if bound >= cap {
            return cap;
        }
    }
    bound.min(cap)
}

#[derive(Debug, Clone, Default)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// `size` independent uniformly random tours over `vertices` vertices.
    pub fn random(
        size: usize,
        vertices: usize,
        decoder: &mut Decoder,
        rng: &mut RandomNumberGenerator,
    ) -> Self {
        let individuals = (0..size)
            .map(|_| Individual::random(vertices, decoder, rng))
            .collect();
        Self { individuals }
    }

    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Refreshes every cached score. Scoring touches no randomness, so running it on
    /// the rayon pool for large populations gives identical results.
    pub fn score(&mut self, graph: &Graph, parallel_threshold: usize) {
        if self.individuals.len() >= parallel_threshold {
            self.individuals
                .par_iter_mut()
                .for_each(|individual| individual.update_score(graph));
        } else {
            self.individuals
                .iter_mut()
                .for_each(|individual| individual.update_score(graph));
        }
    }

    /// Sorts by cached score, ascending. Stable, so equal scores keep their order.
    pub fn sort(&mut self) {
        self.individuals
            .sort_by(|a, b| a.score().total_cmp(&b.score()));
    }

    /// The last individual, which is the best one right after [`sort`](Self::sort).
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.last()
    }

    /// Builds the next generation from this scored and sorted one.
    ///
    /// The result is laid out as: the elites (best first, moved over untouched), then
    /// the fitness-proportional offspring, then the rank-proportional offspring. It is
    /// truncated or padded with fresh random individuals to the current size.
    pub fn reproduce(
        mut self,
        options: &EvolutionOptions,
        decoder: &mut Decoder,
        rng: &mut RandomNumberGenerator,
    ) -> Population {
        let size = self.individuals.len();
        let Some(vertices) = self.individuals.first().map(Individual::len) else {
            return self;
        };

        let by_score = WeightedSampler::by_score(&self.individuals);
        let mut offspring = self.resample(
            &by_score,
            options.score_weighted_draws(size),
            options,
            decoder,
            rng,
        );

        let by_rank = WeightedSampler::by_rank(size);
        offspring.extend(self.resample(
            &by_rank,
            options.rank_weighted_draws(size),
            options,
            decoder,
            rng,
        ));

        let elites = options.elite_count(size);
        let mut next: Vec<Individual> = Vec::with_capacity(size.max(elites + offspring.len()));
        next.extend(self.individuals.drain(size - elites..).rev());
        next.extend(offspring);

        if next.len() > size {
            next.truncate(size);
        } else if next.len() < size {
            let missing = size - next.len();
            if missing * 2 > size {
                warn!(
                    missing,
                    size, "reproduction produced less than half the population, padding"
                );
            }
            next.extend((0..missing).map(|_| Individual::random(vertices, decoder, rng)));
        }

        Population { individuals: next }
    }

    /// One resampling pool: `draws` clones picked through `sampler`, an odd last draw
    /// dropped, consecutive pairs crossed over, then every clone mutated.
    fn resample(
        &self,
        sampler: &WeightedSampler,
        draws: usize,
        options: &EvolutionOptions,
        decoder: &mut Decoder,
        rng: &mut RandomNumberGenerator,
    ) -> Vec<Individual> {
        let mut pool: Vec<Individual> = (0..draws)
            .map(|_| self.individuals[sampler.draw(rng)].clone())
            .collect();

        if pool.len() % 2 != 0 {
            pool.pop();
        }

        for pair in pool.chunks_exact_mut(2) {
            let (first, second) = pair.split_at_mut(1);
            first[0].crossover(&mut second[0], decoder, rng);
        }

        for individual in &mut pool {
            individual.mutate(
                options.get_mutation_intensity_a(),
                options.get_mutation_intensity_b(),
                decoder,
                rng,
            );
        }

        pool
    }

    /// Recomputes fitness from scratch and returns the fittest individual, the first
    /// one encountered on ties.
    pub fn fittest(&self, graph: &Graph) -> Option<(&Individual, f64)> {
        let mut best: Option<(&Individual, f64)> = None;
        for individual in &self.individuals {
            let fitness = individual.fitness(graph);
            match best {
                Some((_, best_fitness)) if fitness <= best_fitness => {}
                _ => best = Some((individual, fitness)),
            }
        }
        best
    }
}
