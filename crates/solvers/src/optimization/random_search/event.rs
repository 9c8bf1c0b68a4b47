use hydrofeed_core::Model;

/// Events emitted by the random search solver.
pub enum Event<'a, M>
where
    M: Model,
{
    /// A trial was drawn and evaluated.
    Sampled {
        /// Zero-based trial index.
        trial: usize,

        /// The sampled variables.
        x: &'a [f64],

        /// The objective at `x`.
        objective: f64,

        /// The model input at `x`.
        input: &'a M::Input,

        /// The model output at `x`.
        output: &'a M::Output,

        /// The best objective before this trial, or `None` on the first trial.
        best: Option<f64>,
    },
}

impl<M> Event<'_, M>
where
    M: Model,
{
    /// Returns the trial index.
    #[must_use]
    pub fn trial(&self) -> usize {
        match self {
            Self::Sampled { trial, .. } => *trial,
        }
    }

    /// Returns the sampled variables.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        match self {
            Self::Sampled { x, .. } => x,
        }
    }

    /// Returns the objective of this trial.
    #[must_use]
    pub fn objective(&self) -> f64 {
        match self {
            Self::Sampled { objective, .. } => *objective,
        }
    }

    /// Returns `true` if this trial beats every earlier kept trial.
    #[must_use]
    pub fn is_improvement(&self) -> bool {
        match self {
            Self::Sampled {
                objective, best, ..
            } => best.is_none_or(|best| *objective < best),
        }
    }
}
