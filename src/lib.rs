//! # genalg-tsp
//!
//! A genetic algorithm searching for short Traveling Salesman tours.
//!
//! Tours are permutations carried alongside a rank encoding in which every position
//! is bounded by its index, so crossover and mutation never produce an invalid tour.
//! Each generation keeps an elite unchanged and refills the rest from two resampling
//! pools, one weighted by fitness and one by rank. Improvements are streamed to the
//! caller through a blocking progress channel.
//!
//! ```rust
//! use genalg_tsp::evolution::{self, EvolutionOptions, LogLevel};
//! use genalg_tsp::graph::Graph;
//! use genalg_tsp::rng::RandomNumberGenerator;
//!
//! let graph = Graph::from_positions(vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [1.0, 3.0]]);
//! let options = EvolutionOptions::builder()
//!     .num_generations(50)
//!     .log_level(LogLevel::None)
//!     .build();
//!
//! let (handle, receiver) = evolution::spawn(graph, options, RandomNumberGenerator::from_seed(3)).unwrap();
//! for snapshot in receiver {
//!     if snapshot.terminate {
//!         println!("final tour {:?} of length {}", snapshot.order, snapshot.total_distance);
//!     }
//! }
//! evolution::join(handle).unwrap();
//! ```

pub mod codec;
pub mod error;
pub mod evolution;
pub mod graph;
pub mod individual;
pub mod population;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{EvolutionLauncher, EvolutionOptions, GenerationSnapshot, LogLevel};
pub use graph::Graph;
pub use individual::Individual;
pub use strategy::TourStrategy;
