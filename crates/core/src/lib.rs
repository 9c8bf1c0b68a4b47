//! Core traits and types for the Hydrofeed framework.
//!
//! This crate defines the shared abstractions that the solvers and the
//! nutrient model build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`MinimizationProblem`]: adapts a vector of solver variables to a model
//!   input and scores the model output

mod model;
mod observer;
mod problems;

pub use observer::Observer;
pub use problems::MinimizationProblem;
pub use {model::Model, model::Snapshot};
