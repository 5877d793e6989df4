//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration options for the
//! evolutionary tour search: generation count, population bound, the share of each
//! reproduction mechanism, mutation intensities, and logging.
//!
//! ## Example
//!
//! ```rust
//! use genalg_tsp::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Shorter run with the default reproduction mix
//! let options = EvolutionOptions::builder()
//!     .num_generations(200)
//!     .log_level(LogLevel::None)
//!     .build();
//! assert!(options.validate().is_ok());
//!
//! // The stock configuration: 6000 generations, at most 2500 individuals
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_num_generations(), 6000);
//! ```
//!
//! ## Reproduction mix
//!
//! Each generation is rebuilt from three sources:
//!
//! - `elitism`: the share of the population carried over unchanged, best first.
//! - `score_weighted`: the share of draws made in proportion to fitness.
//! - `rank_weighted`: the share of draws made in proportion to rank.
//!
//! The shares need not add up to one; the population is truncated or padded with
//! random individuals afterwards.

use crate::error::{GeneticError, Result};

pub const DEFAULT_NUM_GENERATIONS: usize = 6000;
pub const DEFAULT_POPULATION_CAP: usize = 2500;
pub const DEFAULT_ELITISM: f64 = 0.3;
pub const DEFAULT_SCORE_WEIGHTED: f64 = 0.6;
pub const DEFAULT_RANK_WEIGHTED: f64 = 0.1;
pub const DEFAULT_MUTATION_INTENSITY_A: f64 = 0.05;
pub const DEFAULT_MUTATION_INTENSITY_B: f64 = 0.005;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// How much the solver reports through `tracing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogLevel {
    /// Every generation, plus everything `Minimal` reports.
    Verbose,
    /// Improvements of the best tour and the final result.
    Minimal,
    None,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionOptions {
    num_generations: usize,
    population_cap: usize,
    elitism: f64,
    score_weighted: f64,
    rank_weighted: f64,
    mutation_intensity_a: f64,
    mutation_intensity_b: f64,
    /// Population size from which scoring is spread over the rayon pool
    parallel_threshold: usize,
    log_level: LogLevel,
}

impl EvolutionOptions {
    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_population_cap(&self) -> usize {
        self.population_cap
    }

    pub fn get_elitism(&self) -> f64 {
        self.elitism
    }

    pub fn get_score_weighted(&self) -> f64 {
        self.score_weighted
    }

    pub fn get_rank_weighted(&self) -> f64 {
        self.rank_weighted
    }

    pub fn get_mutation_intensity_a(&self) -> f64 {
        self.mutation_intensity_a
    }

    pub fn get_mutation_intensity_b(&self) -> f64 {
        self.mutation_intensity_b
    }

    /// Returns the population size from which scoring runs in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub fn set_population_cap(&mut self, population_cap: usize) {
        self.population_cap = population_cap;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Number of individuals carried over unchanged from a population of `size`.
    ///
    /// `floor(size * elitism)`, but at least one whenever elitism is enabled so the
    /// best tour can never be lost between generations.
    pub fn elite_count(&self, size: usize) -> usize {
        if self.elitism <= 0.0 || size == 0 {
            return 0;
        }
        ((size as f64 * self.elitism).floor() as usize).clamp(1, size)
    }

    /// Number of fitness-proportional draws for a population of `size`.
    pub fn score_weighted_draws(&self, size: usize) -> usize {
        (size as f64 * self.score_weighted).ceil() as usize
    }

    /// Number of rank-proportional draws for a population of `size`.
    pub fn rank_weighted_draws(&self, size: usize) -> usize {
        (size as f64 * self.rank_weighted).ceil() as usize
    }

    /// Checks that every option lies in its valid range.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] naming the first offending option.
    pub fn validate(&self) -> Result<()> {
        if self.num_generations == 0 {
            return Err(GeneticError::Configuration(
                "Number of generations cannot be zero".to_string(),
            ));
        }

        if self.population_cap == 0 {
            return Err(GeneticError::Configuration(
                "Population cap cannot be zero".to_string(),
            ));
        }

        let fractions = [
            ("elitism", self.elitism),
            ("score_weighted", self.score_weighted),
            ("rank_weighted", self.rank_weighted),
            ("mutation_intensity_a", self.mutation_intensity_a),
            ("mutation_intensity_b", self.mutation_intensity_b),
        ];
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(GeneticError::Configuration(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use genalg_tsp::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .num_generations(500)
    ///     .population_cap(300)
    ///     .elitism(0.2)
    ///     .mutation_intensities(0.1, 0.01)
    ///     .log_level(LogLevel::Verbose)
    ///     .build();
    /// assert_eq!(options.get_population_cap(), 300);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: DEFAULT_NUM_GENERATIONS,
            population_cap: DEFAULT_POPULATION_CAP,
            elitism: DEFAULT_ELITISM,
            score_weighted: DEFAULT_SCORE_WEIGHTED,
            rank_weighted: DEFAULT_RANK_WEIGHTED,
            mutation_intensity_a: DEFAULT_MUTATION_INTENSITY_A,
            mutation_intensity_b: DEFAULT_MUTATION_INTENSITY_B,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            log_level: LogLevel::Minimal,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
/// Unset fields fall back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    population_cap: Option<usize>,
    elitism: Option<f64>,
    score_weighted: Option<f64>,
    rank_weighted: Option<f64>,
    mutation_intensities: Option<(f64, f64)>,
    parallel_threshold: Option<usize>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn population_cap(mut self, value: usize) -> Self {
        self.population_cap = Some(value);
        self
    }

    pub fn elitism(mut self, value: f64) -> Self {
        self.elitism = Some(value);
        self
    }

    pub fn score_weighted(mut self, value: f64) -> Self {
        self.score_weighted = Some(value);
        self
    }

    pub fn rank_weighted(mut self, value: f64) -> Self {
        self.rank_weighted = Some(value);
        self
    }

    /// Sets the encoded-space (`a`) and tour-space (`b`) mutation probabilities.
    pub fn mutation_intensities(mut self, a: f64, b: f64) -> Self {
        self.mutation_intensities = Some((a, b));
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let (mutation_intensity_a, mutation_intensity_b) = self.mutation_intensities.unwrap_or((
            DEFAULT_MUTATION_INTENSITY_A,
            DEFAULT_MUTATION_INTENSITY_B,
        ));

        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(DEFAULT_NUM_GENERATIONS),
            population_cap: self.population_cap.unwrap_or(DEFAULT_POPULATION_CAP),
            elitism: self.elitism.unwrap_or(DEFAULT_ELITISM),
            score_weighted: self.score_weighted.unwrap_or(DEFAULT_SCORE_WEIGHTED),
            rank_weighted: self.rank_weighted.unwrap_or(DEFAULT_RANK_WEIGHTED),
            mutation_intensity_a,
            mutation_intensity_b,
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
            log_level: self.log_level.unwrap_or(LogLevel::Minimal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EvolutionOptions::default();
        assert_eq!(options.get_num_generations(), 6000);
        assert_eq!(options.get_population_cap(), 2500);
        assert_eq!(options.get_elitism(), 0.3);
        assert_eq!(options.get_score_weighted(), 0.6);
        assert_eq!(options.get_rank_weighted(), 0.1);
        assert_eq!(options.get_mutation_intensity_a(), 0.05);
        assert_eq!(options.get_mutation_intensity_b(), 0.005);
        assert!(options.validate().is_ok());
        assert_eq!(EvolutionOptions::builder().build(), options);
    }

    #[test]
    fn test_pool_sizes() {
        let options = EvolutionOptions::default();
        assert_eq!(options.elite_count(2500), 750);
        assert_eq!(options.score_weighted_draws(2500), 1500);
        assert_eq!(options.rank_weighted_draws(2500), 250);

        // n = 3 gives a population of 3! = 6.
        assert_eq!(options.elite_count(6), 1);
        assert_eq!(options.score_weighted_draws(6), 4);
        assert_eq!(options.rank_weighted_draws(6), 1);

        // Always keep the best once elitism is on.
        assert_eq!(options.elite_count(2), 1);
        assert_eq!(options.elite_count(0), 0);
    }

    #[test]
    fn test_elitism_disabled() {
        let options = EvolutionOptions::builder().elitism(0.0).build();
        assert_eq!(options.elite_count(100), 0);
    }

    #[test]
    fn test_validate_rejects_zero_generations() {
        let options = EvolutionOptions::builder().num_generations(0).build();
        assert!(matches!(
            options.validate(),
            Err(GeneticError::Configuration(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_population_cap() {
        let mut options = EvolutionOptions::default();
        options.set_population_cap(0);
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_fractions_out_of_range() {
        let options = EvolutionOptions::builder().elitism(1.5).build();
        assert!(options.validate().is_err());

        let options = EvolutionOptions::builder().rank_weighted(-0.1).build();
        assert!(options.validate().is_err());

        let options = EvolutionOptions::builder()
            .mutation_intensities(0.05, f64::NAN)
            .build();
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_setters() {
        let mut options = EvolutionOptions::default();
        options.set_num_generations(10);
        options.set_log_level(LogLevel::Verbose);
        options.set_parallel_threshold(4);
        assert_eq!(options.get_num_generations(), 10);
        assert_eq!(options.get_log_level(), LogLevel::Verbose);
        assert_eq!(options.get_parallel_threshold(), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let options = EvolutionOptions::builder().num_generations(42).build();
        let json = serde_json::to_string(&options).unwrap();
        let restored: EvolutionOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, options);
    }
}
