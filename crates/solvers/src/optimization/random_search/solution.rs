use hydrofeed_core::Snapshot;

/// Indicates whether the search ran all its trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every configured trial was drawn.
    Completed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a random search.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// The best sampled variables.
    pub x: Vec<f64>,

    /// Objective value at `x`.
    pub objective: f64,

    /// Snapshot at `x`.
    pub snapshot: Snapshot<I, O>,

    /// Number of trials drawn.
    pub trials: usize,
}
