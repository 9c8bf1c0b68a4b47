//! Numerical solvers for the Hydrofeed framework.
//!
//! Solvers are generic over a [`Model`] and a [`MinimizationProblem`] from
//! `hydrofeed-core`, so they know nothing about the domain they optimize.
//! Progress is reported through an [`Observer`], which can also stop a solver
//! early.
//!
//! [`Model`]: hydrofeed_core::Model
//! [`MinimizationProblem`]: hydrofeed_core::MinimizationProblem
//! [`Observer`]: hydrofeed_core::Observer

pub mod optimization;
