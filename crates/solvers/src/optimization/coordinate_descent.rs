//! Fixed-step coordinate descent for refining a starting point.
//!
//! # Algorithm
//!
//! Each pass visits every variable once, in index order. For variable `i` the
//! solver proposes two candidates, `xᵢ + step` and `max(lower_bound, xᵢ - step)`,
//! scores each, and commits the one that improves on the current objective:
//!
//! - the increase wins if it beats the current objective and is no worse than
//!   the decrease
//! - otherwise the decrease wins if it beats the current objective
//! - otherwise `xᵢ` is left unchanged
//!
//! Updates are applied immediately, so later variables in the same pass see
//! the updated earlier values (Gauss-Seidel order). The search stops after a
//! pass that changes nothing, or after the configured number of passes.
//!
//! Because a move is only committed when it strictly lowers the objective,
//! the objective never increases from pass to pass.
//!
//! # Observer Events
//!
//! The solver emits one [`Event::Pass`] at the end of every pass. Observers can
//! return [`Action::StopEarly`] to halt and keep the current point.

mod action;
mod config;
mod error;
mod event;
mod search;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use hydrofeed_core::{MinimizationProblem, Model, Observer};

use search::search;

/// Refines `start` toward a local minimum of the objective.
///
/// The observer receives an [`Event`] after each pass.
/// See the [module docs](self) for details on the move rules.
///
/// # Errors
///
/// Returns an error if `start` does not have one entry per problem variable,
/// or if the model or problem fails during evaluation.
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    start: Vec<f64>,
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: MinimizationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M>, Action>,
{
    search(model, problem, start, config, observer)
}

/// Refines `start` without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `start` does not have one entry per problem variable,
/// or if the model or problem fails during evaluation.
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    start: Vec<f64>,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: MinimizationProblem<Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, start, config, ())
}
