use thiserror::Error;

use hydrofeed_solvers::optimization::{coordinate_descent, random_search};

use crate::Nutrient;

/// Errors returned by the nutrient solver.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("random search failed")]
    Sampling(#[from] random_search::Error),

    #[error("refinement failed")]
    Refinement(#[from] coordinate_descent::Error),
}

/// Inputs the solver refuses to work with.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    /// The solution volume would make every concentration infinite or NaN.
    #[error("solution volume must be finite and positive, got {0} mL")]
    Volume(f64),

    #[error("target for {nutrient} must be finite and non-negative, got {ppm} ppm")]
    Target { nutrient: Nutrient, ppm: f64 },

    #[error("unknown volume unit `{0}`")]
    Unit(String),
}
