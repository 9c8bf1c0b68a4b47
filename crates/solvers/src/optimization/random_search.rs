//! Uniform random search over a box of solver variables.
//!
//! # Algorithm
//!
//! Each trial draws every variable independently and uniformly from the
//! configured half-open range `[low, high)`, evaluates the problem, and keeps
//! the trial with the lowest objective seen so far. Ties keep the earliest
//! trial. Draws are made trial by trial, in variable order, so a seeded
//! [`RandomSource`] reproduces the same sequence of trials.
//!
//! # When to Use
//!
//! Random search is a cheap way to land somewhere reasonable in a
//! multi-dimensional space before handing off to a local method such as
//! [`coordinate_descent`](super::coordinate_descent). It makes no assumption
//! about the shape of the objective and gives no optimality guarantee.
//!
//! # Observer Events
//!
//! The solver emits one [`Event::Sampled`] per successful trial. Observers can
//! return [`Action::StopEarly`] to halt and keep the best trial so far, or
//! [`Action::Discard`] to exclude the trial from best tracking.
//!
//! Evaluation failures are not recoverable and are returned as [`Error`].

mod action;
mod config;
mod error;
mod event;
mod search;
mod solution;
mod source;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use source::RandomSource;

use hydrofeed_core::{MinimizationProblem, Model, Observer};

use search::search;

/// Finds the lowest-objective sample using uniform random search.
///
/// The observer receives an [`Event`] for each trial.
/// See the [module docs](self) for details on observer actions.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation.
pub fn minimize<M, P, R, Obs>(
    model: &M,
    problem: &P,
    config: &Config,
    rng: &mut R,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: MinimizationProblem<Input = M::Input, Output = M::Output>,
    R: RandomSource + ?Sized,
    Obs: for<'a> Observer<Event<'a, M>, Action>,
{
    search(model, problem, config, rng, observer)
}

/// Finds the lowest-objective sample without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation.
pub fn minimize_unobserved<M, P, R>(
    model: &M,
    problem: &P,
    config: &Config,
    rng: &mut R,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: MinimizationProblem<Input = M::Input, Output = M::Output>,
    R: RandomSource + ?Sized,
{
    minimize(model, problem, config, rng, ())
}
