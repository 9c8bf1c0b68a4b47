use std::{collections::BTreeMap, convert::Infallible};

use serde::{Deserialize, Serialize};
use tracing::debug;

use hydrofeed_core::Model;

use crate::{
    InputError, Nutrient, SolutionVolume, Substance,
    chemistry::{IonConversion, Species},
};

/// Grams of each substance, indexed like the substance list.
pub type WeightVector = Vec<f64>;

/// Achieved concentration in ppm per bucket.
///
/// Buckets are canonical symbols: a [`Nutrient`] symbol for targetable
/// nutrients, or the normalized literal symbol for anything else (for
/// example `"N"` for nitrogen of unspecified form).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Concentrations(BTreeMap<String, f64>);

impl Concentrations {
    /// Returns the concentration of a bucket, or `0.0` if nothing feeds it.
    #[must_use]
    pub fn get(&self, bucket: &str) -> f64 {
        self.0.get(bucket).copied().unwrap_or(0.0)
    }

    /// Returns the concentration of a targetable nutrient.
    #[must_use]
    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        self.get(nutrient.symbol())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(bucket, ppm)| (bucket.as_str(), *ppm))
    }

    fn add(&mut self, bucket: &str, ppm: f64) {
        match self.0.get_mut(bucket) {
            Some(total) => *total += ppm,
            None => {
                self.0.insert(bucket.to_owned(), ppm);
            }
        }
    }
}

impl FromIterator<(String, f64)> for Concentrations {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        let mut achieved = Self::default();
        for (bucket, ppm) in iter {
            achieved.add(&bucket, ppm);
        }
        achieved
    }
}

/// One element entry, resolved to its bucket ahead of time.
#[derive(Debug, Clone)]
struct Contribution {
    bucket: String,
    percentage: f64,

    /// Ion-to-element mass ratio; `None` for elemental entries.
    ratio: Option<f64>,
}

/// Computes the concentrations produced by dissolving a weight vector.
///
/// Symbols and species are resolved once, at construction. Each call then
/// applies, per substance weight `w` and component percentage `p`:
///
/// ```text
/// ppm = (w * p / 100) / (volume_ml / 1000) * 1000
/// ```
///
/// followed by the ion-to-element ratio for ionic components. Contributions
/// to the same bucket add up.
#[derive(Debug, Clone)]
pub struct ConcentrationModel {
    contributions: Vec<Vec<Contribution>>,
    volume_liters: f64,
}

impl ConcentrationModel {
    /// Builds the model for a substance list dissolved into `volume`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Volume`] if the volume is not finite and positive.
    pub fn new(substances: &[Substance], volume: SolutionVolume) -> Result<Self, InputError> {
        volume.validate()?;

        let contributions = substances
            .iter()
            .map(|substance| substance.elements.iter().map(resolve).collect())
            .collect();

        Ok(Self {
            contributions,
            volume_liters: volume.milliliters() / 1000.0,
        })
    }

    /// Returns the number of substances the model expects weights for.
    #[must_use]
    pub fn substances(&self) -> usize {
        self.contributions.len()
    }

    /// Returns the concentrations produced by `weights` grams.
    ///
    /// Weights beyond the substance count are ignored; missing weights count
    /// as zero grams.
    #[must_use]
    pub fn concentrations(&self, weights: &[f64]) -> Concentrations {
        let mut achieved = Concentrations::default();

        for (components, &grams) in self.contributions.iter().zip(weights) {
            for c in components {
                let element_grams = grams * c.percentage / 100.0;
                let ppm = element_grams / self.volume_liters * 1000.0;
                match c.ratio {
                    Some(ratio) => achieved.add(&c.bucket, ppm * ratio),
                    None => achieved.add(&c.bucket, ppm),
                }
            }
        }

        achieved
    }
}

impl Model for ConcentrationModel {
    type Input = WeightVector;
    type Output = Concentrations;
    type Error = Infallible;

    fn call(&self, weights: &WeightVector) -> Result<Concentrations, Self::Error> {
        Ok(self.concentrations(weights))
    }
}

fn resolve(element: &crate::Element) -> Contribution {
    let symbol = element.canonical_symbol();

    let conversion = match element.species() {
        Species::Ionic => {
            let conversion = IonConversion::lookup(&symbol);
            if conversion.is_none() {
                debug!(%symbol, "no ion conversion known, counting as elemental");
            }
            conversion
        }
        Species::Elemental => None,
    };

    match conversion {
        Some(c) => Contribution {
            bucket: c.nutrient.symbol().to_owned(),
            percentage: element.percentage,
            ratio: Some(c.ratio),
        },
        None => Contribution {
            bucket: symbol,
            percentage: element.percentage,
            ratio: None,
        },
    }
}
