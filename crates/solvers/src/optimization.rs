//! Solvers for minimization problems over a vector of bounded variables.
//!
//! A [`MinimizationProblem`] maps solver variables `x: &[f64]` to model
//! inputs, calls the model, and extracts a scalar objective. Solvers in this
//! module search for the `x` that minimizes that objective.
//!
//! # Solvers
//!
//! - [`random_search`]: uniform sampling of the whole box, keeping the best
//!   trial; a coarse global exploration
//! - [`coordinate_descent`]: fixed-step coordinate hill-climbing from a
//!   starting point; a local refinement
//!
//! The two are designed to be chained: the best sample from
//! [`random_search`] seeds [`coordinate_descent`].
//!
//! [`MinimizationProblem`]: hydrofeed_core::MinimizationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod coordinate_descent;
pub mod random_search;
