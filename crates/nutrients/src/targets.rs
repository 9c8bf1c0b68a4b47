use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{InputError, Nutrient};

/// Target concentrations in ppm (mg/L) per nutrient.
///
/// A missing entry and an entry of `0.0` both mean "no target": the nutrient
/// is left unconstrained and does not count toward the deviation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientTargets(BTreeMap<Nutrient, f64>);

/// Built-in starting points for common growth stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    Vegetative,
    Flowering,
    General,
}

impl NutrientTargets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the targets with `nutrient` set to `ppm`.
    #[must_use]
    pub fn with(mut self, nutrient: Nutrient, ppm: f64) -> Self {
        self.set(nutrient, ppm);
        self
    }

    pub fn set(&mut self, nutrient: Nutrient, ppm: f64) {
        self.0.insert(nutrient, ppm);
    }

    /// Returns the target for `nutrient`, or `0.0` if none is set.
    #[must_use]
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        self.0.get(&nutrient).copied().unwrap_or(0.0)
    }

    /// Iterates over every stored target, including zeros.
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.0.iter().map(|(n, ppm)| (*n, *ppm))
    }

    /// Iterates over the targets that take part in scoring.
    pub fn positive(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.iter().filter(|(_, ppm)| *ppm > 0.0)
    }

    /// Checks that every target is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Target`] for the first offending nutrient.
    pub fn validate(&self) -> Result<(), InputError> {
        match self.iter().find(|(_, ppm)| !ppm.is_finite() || *ppm < 0.0) {
            Some((nutrient, ppm)) => Err(InputError::Target { nutrient, ppm }),
            None => Ok(()),
        }
    }

    /// Returns the targets of a built-in preset.
    ///
    /// Presets state total nitrogen, which is assigned to nitrate nitrogen.
    #[must_use]
    pub fn preset(preset: Preset) -> Self {
        let (n, p, k, ca, mg, s) = match preset {
            Preset::Vegetative => (200.0, 50.0, 300.0, 200.0, 50.0, 100.0),
            Preset::Flowering => (150.0, 80.0, 350.0, 180.0, 60.0, 120.0),
            Preset::General => (180.0, 60.0, 320.0, 190.0, 55.0, 110.0),
        };

        Self::new()
            .with(Nutrient::NitrateNitrogen, n)
            .with(Nutrient::Phosphorus, p)
            .with(Nutrient::Potassium, k)
            .with(Nutrient::Calcium, ca)
            .with(Nutrient::Magnesium, mg)
            .with(Nutrient::Sulfur, s)
            .with(Nutrient::Iron, 3.0)
            .with(Nutrient::Manganese, 0.5)
            .with(Nutrient::Zinc, 0.3)
            .with(Nutrient::Boron, 0.5)
            .with(Nutrient::Copper, 0.1)
            .with(Nutrient::Molybdenum, 0.05)
    }
}

impl FromIterator<(Nutrient, f64)> for NutrientTargets {
    fn from_iter<T: IntoIterator<Item = (Nutrient, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_targets_read_as_zero() {
        let targets = NutrientTargets::new().with(Nutrient::Potassium, 200.0);

        assert_eq!(targets.get(Nutrient::Potassium), 200.0);
        assert_eq!(targets.get(Nutrient::Calcium), 0.0);
    }

    #[test]
    fn positive_skips_zero_targets() {
        let targets: NutrientTargets = [
            (Nutrient::Potassium, 200.0),
            (Nutrient::Boron, 0.0),
            (Nutrient::NitrateNitrogen, 150.0),
        ]
        .into_iter()
        .collect();

        let positive: Vec<_> = targets.positive().map(|(n, _)| n).collect();

        assert_eq!(
            positive,
            vec![Nutrient::NitrateNitrogen, Nutrient::Potassium]
        );
    }

    #[test]
    fn rejects_negative_and_nan_targets() {
        let negative = NutrientTargets::new().with(Nutrient::Calcium, -1.0);
        assert_eq!(
            negative.validate(),
            Err(InputError::Target {
                nutrient: Nutrient::Calcium,
                ppm: -1.0
            })
        );

        let nan = NutrientTargets::new().with(Nutrient::Zinc, f64::NAN);
        assert!(nan.validate().is_err());

        assert_eq!(NutrientTargets::preset(Preset::General).validate(), Ok(()));
    }

    #[test]
    fn presets_match_growth_stage_tables() {
        let flowering = NutrientTargets::preset(Preset::Flowering);

        assert_eq!(flowering.get(Nutrient::NitrateNitrogen), 150.0);
        assert_eq!(flowering.get(Nutrient::AmmoniumNitrogen), 0.0);
        assert_eq!(flowering.get(Nutrient::Potassium), 350.0);
        assert_eq!(flowering.get(Nutrient::Molybdenum), 0.05);
        assert_eq!(flowering.positive().count(), 12);
    }

    #[test]
    fn serializes_as_symbol_map() {
        let targets = NutrientTargets::new()
            .with(Nutrient::NitrateNitrogen, 150.0)
            .with(Nutrient::Potassium, 200.0);

        let json = serde_json::to_string(&targets).unwrap();

        assert_eq!(json, r#"{"NO3_N":150.0,"K":200.0}"#);
        let back: NutrientTargets = serde_json::from_str(&json).unwrap();
        assert_eq!(back, targets);
    }
}
