//! # Selection
//!
//! Stochastic resampling of a sorted population. Both resampling pools of a
//! generation use the same [`WeightedSampler`]; they differ only in the weights:
//! raw cached scores for the fitness-proportional pool, linear rank for the
//! rank-weighted pool.
pub mod weighted;

pub use weighted::WeightedSampler;
