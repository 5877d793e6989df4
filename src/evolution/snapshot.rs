//! # Progress stream
//!
//! The solver reports through a rendezvous channel: [`ProgressSender::send`] blocks
//! until the consumer has taken the snapshot. A slow consumer therefore slows the
//! search down, but never changes its outcome.
//!
//! The consumer reads until it sees a snapshot with `terminate == true`; nothing is
//! sent after that.
//!
//! ```rust
//! use std::thread;
//! use genalg_tsp::evolution::{progress_channel, GenerationSnapshot};
//!
//! let (sender, receiver) = progress_channel();
//! let producer = thread::spawn(move || {
//!     sender.send(GenerationSnapshot::new(1, 10.0, vec![0, 1, 2], false))?;
//!     sender.send(GenerationSnapshot::new(5, 10.0, vec![0, 1, 2], true))
//! });
//!
//! let history = receiver.collect_history();
//! producer.join().unwrap().unwrap();
//! assert_eq!(history.improvements().len(), 1);
//! assert!(history.terminal().is_some());
//! ```

use std::sync::mpsc::{sync_channel, Receiver, SyncSender};

use crate::error::{GeneticError, Result};

/// An immutable progress report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationSnapshot {
    pub generation_id: usize,
    pub total_distance: f64,
    pub order: Vec<usize>,
    pub terminate: bool,
}

impl GenerationSnapshot {
    pub fn new(generation_id: usize, total_distance: f64, order: Vec<usize>, terminate: bool) -> Self {
        Self {
            generation_id,
            total_distance,
            order,
            terminate,
        }
    }
}

/// Creates a connected sender/receiver pair with no buffering.
pub fn progress_channel() -> (ProgressSender, ProgressReceiver) {
    let (tx, rx) = sync_channel(0);
    (ProgressSender { tx }, ProgressReceiver { rx, finished: false })
}

/// Producing half of the progress stream.
#[derive(Debug, Clone)]
pub struct ProgressSender {
    tx: SyncSender<GenerationSnapshot>,
}

impl ProgressSender {
    /// Hands `snapshot` to the consumer, blocking until it is received.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::ProgressDisconnected`] if the receiver was dropped.
    pub fn send(&self, snapshot: GenerationSnapshot) -> Result<()> {
        let generation = snapshot.generation_id;
        self.tx
            .send(snapshot)
            .map_err(|_| GeneticError::ProgressDisconnected { generation })
    }
}

/// Consuming half of the progress stream.
///
/// As an [`Iterator`] it yields snapshots up to and including the terminal one.
#[derive(Debug)]
pub struct ProgressReceiver {
    rx: Receiver<GenerationSnapshot>,
    finished: bool,
}

impl ProgressReceiver {
    /// Blocks for the next snapshot; `None` once the stream has terminated or the
    /// producer went away.
    pub fn recv(&mut self) -> Option<GenerationSnapshot> {
        if self.finished {
            return None;
        }
        match self.rx.recv() {
            Ok(snapshot) => {
                self.finished = snapshot.terminate;
                Some(snapshot)
            }
            Err(_) => {
                self.finished = true;
                None
            }
        }
    }

    /// Drains the stream into a [`ScoreHistory`].
    pub fn collect_history(mut self) -> ScoreHistory {
        let mut history = ScoreHistory::default();
        while let Some(snapshot) = self.recv() {
            history.record(snapshot);
        }
        history
    }
}

impl Iterator for ProgressReceiver {
    type Item = GenerationSnapshot;

    fn next(&mut self) -> Option<Self::Item> {
        self.recv()
    }
}

/// Every snapshot of one run: the improvements in arrival order and the final
/// result, if the run got that far.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreHistory {
    improvements: Vec<GenerationSnapshot>,
    terminal: Option<GenerationSnapshot>,
}

impl ScoreHistory {
    pub fn record(&mut self, snapshot: GenerationSnapshot) {
        if snapshot.terminate {
            self.terminal = Some(snapshot);
        } else {
            self.improvements.push(snapshot);
        }
    }

    pub fn improvements(&self) -> &[GenerationSnapshot] {
        &self.improvements
    }

    pub fn terminal(&self) -> Option<&GenerationSnapshot> {
        self.terminal.as_ref()
    }

    /// `(generation_id, total_distance)` for every improvement, ready for charting.
    pub fn series(&self) -> Vec<(usize, f64)> {
        self.improvements
            .iter()
            .map(|s| (s.generation_id, s.total_distance))
            .collect()
    }
}
