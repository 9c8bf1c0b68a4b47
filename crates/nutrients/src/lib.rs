//! Hydroponic nutrient-solution solver.
//!
//! Given a set of fertilizer [`Substance`]s, per-nutrient ppm
//! [`NutrientTargets`], and a [`SolutionVolume`], this crate finds how many
//! grams of each substance to dissolve so the solution lands as close to the
//! targets as a bounded search can get it.
//!
//! The pieces line up with the Hydrofeed framework:
//!
//! - [`ConcentrationModel`] is a [`Model`](hydrofeed_core::Model) from grams
//!   to achieved [`Concentrations`]
//! - [`DeviationProblem`] scores those concentrations by mean percent
//!   deviation from the targets
//! - [`Solver`] chains random sampling and coordinate refinement from
//!   `hydrofeed-solvers` over the two
//!
//! # Example
//!
//! ```
//! use hydrofeed_nutrients::{Element, Nutrient, NutrientTargets, Substance, solve};
//!
//! let substances = vec![Substance::new(
//!     "kno3",
//!     "Potassium nitrate",
//!     "KNO3",
//!     vec![Element::ionic("NO3", 13.85), Element::new("K", 38.67)],
//! )];
//! let targets = NutrientTargets::new()
//!     .with(Nutrient::NitrateNitrogen, 150.0)
//!     .with(Nutrient::Potassium, 200.0);
//!
//! let result = solve(&substances, &targets, 1000.0).unwrap();
//!
//! assert_eq!(result.weights.len(), 1);
//! assert!(result.weights[0].grams >= 0.0);
//! ```

pub mod chemistry;
pub mod conductivity;

mod concentration;
mod deviation;
mod element;
mod error;
mod nutrient;
mod recipe;
mod result;
mod solver;
mod substance;
mod targets;
mod volume;

pub use concentration::{ConcentrationModel, Concentrations, WeightVector};
pub use conductivity::estimate_ec;
pub use deviation::{DeviationProblem, deviation, nutrient_deviation};
pub use element::Element;
pub use error::{Error, InputError};
pub use nutrient::{Nutrient, NutrientCategory};
pub use recipe::{Recipe, RecipeSubstance};
pub use result::{
    CalculationResult, Diagnostics, NutrientRow, Precision, SearchStatus, SubstanceWeight,
};
pub use solver::{Action, Config, Progress, Solver, solve};
pub use substance::{Substance, SubstanceError};
pub use targets::{NutrientTargets, Preset};
pub use volume::{SolutionVolume, VolumeUnit};

pub use hydrofeed_solvers::optimization::random_search::RandomSource;
