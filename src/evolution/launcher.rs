use tracing::{debug, info, info_span};

use super::{
    options::{EvolutionOptions, LogLevel},
    snapshot::{GenerationSnapshot, ProgressSender},
};
use crate::{
    codec::Decoder,
    error::{GeneticError, OptionExt, Result},
    graph::Graph,
    population::{population_size, Population},
    rng::RandomNumberGenerator,
    strategy::TourStrategy,
};

/// Runs the generational search for a fixed number of generations.
///
/// Every generation the population is scored and sorted; whenever its best tour is
/// strictly shorter than every tour reported before, a snapshot is sent. After the
/// last generation the fittest individual is reported with `terminate` set.
///
/// # Example
///
/// ```rust
/// use std::thread;
/// use genalg_tsp::evolution::{progress_channel, EvolutionLauncher, EvolutionOptions, LogLevel};
/// use genalg_tsp::graph::Graph;
/// use genalg_tsp::rng::RandomNumberGenerator;
///
/// let graph = Graph::from_positions(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
/// let options = EvolutionOptions::builder()
///     .num_generations(20)
///     .log_level(LogLevel::None)
///     .build();
///
/// let (sender, receiver) = progress_channel();
/// let consumer = thread::spawn(move || receiver.collect_history());
///
/// let launcher = EvolutionLauncher::new(options);
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let result = launcher.evolve(&graph, &sender, &mut rng).unwrap();
///
/// let history = consumer.join().unwrap();
/// assert!((result.total_distance - 4.0).abs() < 1e-9);
/// assert_eq!(history.terminal(), Some(&result));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EvolutionLauncher {
    options: EvolutionOptions,
}

impl EvolutionLauncher {
    pub fn new(options: EvolutionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    /// Evolves tours over `graph`, streaming improvements through `progress`.
    ///
    /// Returns the terminal snapshot, which is also the last value sent.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options do not validate
    /// - The graph has fewer than two vertices
    /// - The progress receiver is dropped before the run completes
    pub fn evolve(
        &self,
        graph: &Graph,
        progress: &ProgressSender,
        rng: &mut RandomNumberGenerator,
    ) -> Result<GenerationSnapshot> {
        self.options.validate()?;

        let vertices = graph.len();
        if vertices < 2 {
            return Err(GeneticError::InvalidGraph(format!(
                "a tour needs at least 2 vertices, got {}",
                vertices
            )));
        }

        let size = population_size(vertices, self.options.get_population_cap());
        let span = info_span!("evolve", vertices, population = size);
        let _guard = span.enter();

        let log_level = self.options.get_log_level();
        let num_generations = self.options.get_num_generations();
        let parallel_threshold = self.options.get_parallel_threshold();

        let mut decoder = Decoder::new();
        let mut population = Population::random(size, vertices, &mut decoder, rng);
        let mut best_distance = f64::INFINITY;

        for generation_id in 1..=num_generations {
            population.score(graph, parallel_threshold);
            population.sort();

            let best = population
                .best()
                .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
            let distance = 1.0 / best.score();

            if distance < best_distance {
                best_distance = distance;
                if log_level != LogLevel::None {
                    info!(generation_id, distance, "new best tour");
                }
                progress.send(GenerationSnapshot::new(
                    generation_id,
                    distance,
                    best.chromosome().to_vec(),
                    false,
                ))?;
            }

            if log_level == LogLevel::Verbose {
                debug!(
                    generation_id,
                    generation_best = distance,
                    best_distance,
                    population = population.len(),
                    "generation scored"
                );
            }

            population = population.reproduce(&self.options, &mut decoder, rng);
        }

        let (fittest, fitness) = population
            .fittest(graph)
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let result = GenerationSnapshot::new(
            num_generations,
            1.0 / fitness,
            fittest.chromosome().to_vec(),
            true,
        );

        if log_level != LogLevel::None {
            info!(
                generations = num_generations,
                distance = result.total_distance,
                "evolution finished"
            );
        }

        progress.send(result.clone())?;
        Ok(result)
    }
}

impl TourStrategy for EvolutionLauncher {
    fn solve(
        &self,
        graph: &Graph,
        progress: &ProgressSender,
        rng: &mut RandomNumberGenerator,
    ) -> Result<GenerationSnapshot> {
        self.evolve(graph, progress, rng)
    }
}
