use hydrofeed_core::Snapshot;

/// Indicates why coordinate descent stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A full pass made no move.
    Converged,

    /// Reached the pass limit while still moving.
    MaxPasses,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a coordinate descent refinement.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// The refined variables.
    pub x: Vec<f64>,

    /// Objective value at `x`.
    pub objective: f64,

    /// Objective value at the starting point.
    pub start_objective: f64,

    /// Snapshot at `x`.
    pub snapshot: Snapshot<I, O>,

    /// Number of passes performed.
    pub passes: usize,
}
