/// Actions an observer can take during random search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best trial found so far.
    StopEarly,

    /// Exclude this trial from best tracking.
    ///
    /// The search continues as if the trial had never been drawn. If every
    /// trial is discarded, the first trial is still reported so the solution
    /// always carries a snapshot.
    Discard,
}
