pub mod launcher;
pub mod options;
pub mod snapshot;

use std::thread::{self, JoinHandle};

pub use launcher::EvolutionLauncher;
pub use options::{EvolutionOptions, LogLevel};
pub use snapshot::{progress_channel, GenerationSnapshot, ProgressReceiver, ProgressSender, ScoreHistory};

use crate::{
    error::{GeneticError, Result},
    graph::Graph,
    rng::RandomNumberGenerator,
    strategy::TourStrategy,
};

/// Runs an [`EvolutionLauncher`] on a dedicated thread.
///
/// The caller consumes the returned receiver; the thread finishes once the terminal
/// snapshot has been received (or the receiver is dropped).
///
/// # Errors
///
/// Returns [`GeneticError::Io`] if the thread cannot be spawned.
pub fn spawn(
    graph: Graph,
    options: EvolutionOptions,
    rng: RandomNumberGenerator,
) -> Result<(JoinHandle<Result<GenerationSnapshot>>, ProgressReceiver)> {
    spawn_strategy(EvolutionLauncher::new(options), graph, rng)
}

/// Runs any [`TourStrategy`] on a dedicated thread, see [`spawn`].
pub fn spawn_strategy<S>(
    strategy: S,
    graph: Graph,
    mut rng: RandomNumberGenerator,
) -> Result<(JoinHandle<Result<GenerationSnapshot>>, ProgressReceiver)>
where
    S: TourStrategy + 'static,
{
    let (sender, receiver) = progress_channel();
    let handle = thread::Builder::new()
        .name("tour-solver".to_string())
        .spawn(move || strategy.solve(&graph, &sender, &mut rng))?;
    Ok((handle, receiver))
}

/// Waits for a solver thread started by [`spawn`] and returns its terminal snapshot.
///
/// # Errors
///
/// Returns the solver's own error, or [`GeneticError::Evolution`] if the thread
/// panicked.
pub fn join(handle: JoinHandle<Result<GenerationSnapshot>>) -> Result<GenerationSnapshot> {
    handle
        .join()
        .map_err(|_| GeneticError::Evolution("solver thread panicked".to_string()))?
}
