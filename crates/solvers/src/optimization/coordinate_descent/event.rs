use hydrofeed_core::Model;

/// Events emitted by the coordinate descent solver.
pub enum Event<'a, M>
where
    M: Model,
{
    /// A full pass over every variable finished.
    Pass {
        /// One-based pass number.
        pass: usize,

        /// The variables after this pass.
        x: &'a [f64],

        /// The objective after this pass.
        objective: f64,

        /// The objective before this pass.
        previous: f64,

        /// Number of variables that moved during this pass.
        moves: usize,

        /// The model input at `x`.
        input: &'a M::Input,

        /// The model output at `x`.
        output: &'a M::Output,
    },
}

impl<M> Event<'_, M>
where
    M: Model,
{
    /// Returns the pass number.
    #[must_use]
    pub fn pass(&self) -> usize {
        match self {
            Self::Pass { pass, .. } => *pass,
        }
    }

    /// Returns the objective after the pass.
    #[must_use]
    pub fn objective(&self) -> f64 {
        match self {
            Self::Pass { objective, .. } => *objective,
        }
    }

    /// Returns the objective before the pass.
    #[must_use]
    pub fn previous(&self) -> f64 {
        match self {
            Self::Pass { previous, .. } => *previous,
        }
    }

    /// Returns the number of variables that moved.
    #[must_use]
    pub fn moves(&self) -> usize {
        match self {
            Self::Pass { moves, .. } => *moves,
        }
    }
}
