/// Actions an observer can take during coordinate descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current point.
    StopEarly,
}
