use std::convert::Infallible;

use hydrofeed_core::MinimizationProblem;

use crate::{Concentrations, NutrientTargets, WeightVector};

/// Returns the absolute percent deviation of `achieved` from `target`.
///
/// Returns `None` when `target` is not positive: such nutrients are
/// unconstrained and never scored.
#[must_use]
pub fn nutrient_deviation(achieved: f64, target: f64) -> Option<f64> {
    (target > 0.0).then(|| (achieved - target).abs() / target * 100.0)
}

/// Returns the mean percent deviation over every positive target.
///
/// Nutrients without a positive target are excluded entirely, whatever their
/// achieved value. With no positive targets the deviation is `0.0`.
#[must_use]
pub fn deviation(achieved: &Concentrations, targets: &NutrientTargets) -> f64 {
    let (sum, count) = targets
        .positive()
        .filter_map(|(nutrient, target)| nutrient_deviation(achieved.nutrient(nutrient), target))
        .fold((0.0, 0_usize), |(sum, count), d| (sum + d, count + 1));

    if count == 0 {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let count = count as f64;
        sum / count
    }
}

/// Scores a weight vector by the deviation of its concentrations from targets.
///
/// Pairs with [`ConcentrationModel`](crate::ConcentrationModel): the problem
/// passes the solver's variables through as grams, and the model turns them
/// into concentrations to score.
#[derive(Debug, Clone, Copy)]
pub struct DeviationProblem<'a> {
    targets: &'a NutrientTargets,
    substances: usize,
}

impl<'a> DeviationProblem<'a> {
    #[must_use]
    pub fn new(targets: &'a NutrientTargets, substances: usize) -> Self {
        Self {
            targets,
            substances,
        }
    }
}

impl MinimizationProblem for DeviationProblem<'_> {
    type Input = WeightVector;
    type Output = Concentrations;
    type Error = Infallible;

    fn variables(&self) -> usize {
        self.substances
    }

    fn input(&self, x: &[f64]) -> Result<WeightVector, Self::Error> {
        Ok(x.to_vec())
    }

    fn objective(
        &self,
        _input: &WeightVector,
        output: &Concentrations,
    ) -> Result<f64, Self::Error> {
        Ok(deviation(output, self.targets))
    }
}
