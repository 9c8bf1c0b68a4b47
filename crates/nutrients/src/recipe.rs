use serde::{Deserialize, Serialize};

use crate::{
    CalculationResult, ConcentrationModel, Concentrations, InputError, NutrientTargets,
    SolutionVolume, Substance, WeightVector, deviation,
};

/// A substance together with the grams a recipe uses of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSubstance {
    #[serde(flatten)]
    pub substance: Substance,
    pub grams: f64,
}

/// A named, saved solve.
///
/// Recipes keep full substance definitions rather than ids so they still
/// evaluate after the substance library changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub substances: Vec<RecipeSubstance>,
    pub targets: NutrientTargets,
    pub volume: SolutionVolume,

    /// EC at the time the recipe was saved, in mS/cm.
    #[serde(default)]
    pub ec: Option<f64>,

    /// Measured or intended pH, recorded by the grower.
    #[serde(default)]
    pub ph: Option<f64>,
}

impl Recipe {
    /// Captures the weights of a solve.
    ///
    /// `substances`, `targets`, and `volume` must be the ones `result` was
    /// solved from; weights are paired with substances by position.
    #[must_use]
    pub fn from_result(
        name: impl Into<String>,
        substances: &[Substance],
        targets: &NutrientTargets,
        volume: SolutionVolume,
        result: &CalculationResult,
    ) -> Self {
        let substances = substances
            .iter()
            .zip(&result.weights)
            .map(|(substance, weight)| RecipeSubstance {
                substance: substance.clone(),
                grams: weight.grams,
            })
            .collect();

        Self {
            name: name.into(),
            description: None,
            substances,
            targets: targets.clone(),
            volume,
            ec: result.ec,
            ph: None,
        }
    }

    #[must_use]
    pub fn with_ph(mut self, ph: f64) -> Self {
        self.ph = Some(ph);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the saved grams, in substance order.
    #[must_use]
    pub fn weights(&self) -> WeightVector {
        self.substances.iter().map(|s| s.grams).collect()
    }

    /// Returns the total grams of the recipe.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.substances.iter().map(|s| s.grams).sum()
    }

    /// Evaluates the saved weights without searching again.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Volume`] if the saved volume is not usable.
    pub fn concentrations(&self) -> Result<Concentrations, InputError> {
        let substances: Vec<Substance> = self
            .substances
            .iter()
            .map(|s| s.substance.clone())
            .collect();
        let model = ConcentrationModel::new(&substances, self.volume)?;

        Ok(model.concentrations(&self.weights()))
    }

    /// Returns the mean percent deviation of the saved weights from the saved targets.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Volume`] if the saved volume is not usable.
    pub fn deviation(&self) -> Result<f64, InputError> {
        Ok(deviation(&self.concentrations()?, &self.targets))
    }
}
