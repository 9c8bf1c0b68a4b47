use serde::{Deserialize, Serialize};

use crate::{Concentrations, Nutrient, NutrientCategory, NutrientTargets, nutrient_deviation};

/// Grams of one substance to dissolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstanceWeight {
    /// The substance's id.
    pub id: String,

    /// Grams to weigh out for the whole solution volume.
    pub grams: f64,
}

/// How a solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// Refinement reached a point no single step could improve.
    Converged,

    /// Refinement was still improving when it ran out of passes.
    PassLimit,

    /// An observer stopped the search before it finished.
    Stopped,
}

/// Bookkeeping from the two search phases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Best deviation found by random sampling, before refinement.
    pub sampled_deviation: f64,

    /// Number of random trials drawn.
    pub trials: usize,

    /// Number of refinement passes performed.
    pub passes: usize,

    pub status: SearchStatus,
}

/// A verbal grade for how close a solve came to its targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// Average deviation below 5 %.
    Excellent,

    /// Average deviation below 10 %.
    Good,

    NeedsAdjustment,
}

impl Precision {
    /// Grades an average percent deviation.
    #[must_use]
    pub fn from_deviation(deviation: f64) -> Self {
        if deviation < 5.0 {
            Self::Excellent
        } else if deviation < 10.0 {
            Self::Good
        } else {
            Self::NeedsAdjustment
        }
    }
}

/// One line of a target-versus-achieved report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientRow {
    pub nutrient: Nutrient,
    pub category: NutrientCategory,

    /// Target in ppm, `0.0` when the nutrient is unconstrained.
    pub target: f64,

    /// Achieved ppm, rounded to two decimals.
    pub achieved: f64,

    /// Percent deviation, `None` when the nutrient has no positive target.
    pub deviation: Option<f64>,
}

/// The outcome of solving for substance weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// One entry per input substance, in input order.
    pub weights: Vec<SubstanceWeight>,

    /// Sum of all weights in grams.
    pub total_weight: f64,

    /// Concentrations produced by `weights`.
    pub achieved: Concentrations,

    /// Mean percent deviation over the positive targets.
    pub deviation: f64,

    /// Estimated conductivity in mS/cm, rounded to three decimals.
    pub ec: Option<f64>,

    pub diagnostics: Diagnostics,
}

impl CalculationResult {
    /// Returns the grams of the substance with the given id.
    #[must_use]
    pub fn weight_of(&self, id: &str) -> Option<f64> {
        self.weights.iter().find(|w| w.id == id).map(|w| w.grams)
    }

    #[must_use]
    pub fn precision(&self) -> Precision {
        Precision::from_deviation(self.deviation)
    }

    /// Builds a report line for every nutrient that is targeted or present.
    ///
    /// Rows follow the order of [`Nutrient::ALL`].
    #[must_use]
    pub fn rows(&self, targets: &NutrientTargets) -> Vec<NutrientRow> {
        Nutrient::ALL
            .iter()
            .filter_map(|&nutrient| {
                let target = targets.get(nutrient);
                let achieved = self.achieved.nutrient(nutrient);
                if target <= 0.0 && achieved <= 0.0 {
                    return None;
                }

                Some(NutrientRow {
                    nutrient,
                    category: nutrient.category(),
                    target,
                    achieved: (achieved * 100.0).round() / 100.0,
                    deviation: nutrient_deviation(achieved, target),
                })
            })
            .collect()
    }
}
