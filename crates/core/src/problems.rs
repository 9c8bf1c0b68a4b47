/// Defines a minimization problem over a variable-length vector of solver
/// variables.
///
/// A minimization problem maps solver variables to a model input, then
/// computes an objective value from the model input and output. Solvers
/// search for the variables that minimize the objective.
///
/// Unlike fixed-arity problems, the number of variables is only known at run
/// time (for example, one weight per selected substance), so the problem
/// reports it through [`MinimizationProblem::variables`].
pub trait MinimizationProblem {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the number of solver variables.
    fn variables(&self) -> usize;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64]) -> Result<Self::Input, Self::Error>;

    /// Computes an objective value from model input/output.
    ///
    /// Solvers search for the input that minimizes this objective.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed.
    fn objective(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}
