//! # TourStrategy
//!
//! The one seam between a tour search and its caller: hand over a graph, a progress
//! stream and a random source, get the final tour back. The progress stream receives
//! every reported improvement followed by the terminal snapshot.
use crate::{
    error::Result, evolution::snapshot::GenerationSnapshot, evolution::snapshot::ProgressSender,
    graph::Graph, rng::RandomNumberGenerator,
};

pub trait TourStrategy: Send + Sync {
    /// Searches for a short closed tour over `graph`.
    ///
    /// Snapshots are sent on `progress` as the search runs; the returned value is the
    /// terminal snapshot, identical to the last one sent.
    fn solve(
        &self,
        graph: &Graph,
        progress: &ProgressSender,
        rng: &mut RandomNumberGenerator,
    ) -> Result<GenerationSnapshot>;
}
