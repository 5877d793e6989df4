//! # Error Types
//!
//! This module defines the error type shared by the whole crate. The evolutionary
//! operators themselves (encoding, decoding, crossover, mutation, fitness) are total
//! over well-formed input and never fail; errors only surface at the boundary, when a
//! graph or a set of options is validated, or when the consumer of the progress
//! stream goes away.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genalg_tsp::error::{GeneticError, Result};
//!
//! fn check_vertices(count: usize) -> Result<()> {
//!     if count < 2 {
//!         return Err(GeneticError::InvalidGraph(format!("{} vertices", count)));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_vertices(1).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genalg_tsp::error::{GeneticError, OptionExt};
//!
//! fn shortest(lengths: &[f64]) -> genalg_tsp::error::Result<f64> {
//!     lengths
//!         .iter()
//!         .copied()
//!         .reduce(f64::min)
//!         .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(shortest(&[3.0, 1.5]).unwrap(), 1.5);
//! ```

use thiserror::Error;

/// Represents errors that can occur while setting up or running the solver.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a graph cannot be used as solver input.
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// The receiving end of the progress stream was dropped before the run finished.
    #[error("Progress consumer disconnected at generation {generation}")]
    ProgressDisconnected { generation: usize },

    /// Error that occurs when an evolution process fails.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for solver operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using a closure to
    /// generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
