use serde::{Deserialize, Serialize};

use crate::chemistry::{IonConversion, Oxide, Species, normalize};

/// One component of a substance's composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Element or ion symbol as entered, for example `"Ca"`, `"NO3-"`, `"N (ureic)"`.
    pub symbol: String,

    /// Mass percentage of the substance contributed by this component (0–100).
    pub percentage: f64,

    /// Explicit species, if known. When absent it is inferred from the symbol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<Species>,
}

impl Element {
    /// Creates an element whose species is inferred from its symbol.
    pub fn new(symbol: impl Into<String>, percentage: f64) -> Self {
        Self {
            symbol: symbol.into(),
            percentage,
            species: None,
        }
    }

    /// Creates an element counted directly by its own mass.
    pub fn elemental(symbol: impl Into<String>, percentage: f64) -> Self {
        Self {
            species: Some(Species::Elemental),
            ..Self::new(symbol, percentage)
        }
    }

    /// Creates an ion entry that is converted to its nutrient element.
    pub fn ionic(symbol: impl Into<String>, percentage: f64) -> Self {
        Self {
            species: Some(Species::Ionic),
            ..Self::new(symbol, percentage)
        }
    }

    /// Creates an elemental entry from an oxide-basis label value.
    ///
    /// `K2O 34 %` becomes `K 28.22 %`. The conversion happens here, once, so
    /// the solver never sees oxide percentages.
    #[must_use]
    pub fn from_oxide(oxide: Oxide, oxide_percentage: f64) -> Self {
        Self::elemental(oxide.nutrient().symbol(), oxide.to_elemental(oxide_percentage))
    }

    /// Returns the canonical form of the symbol.
    #[must_use]
    pub fn canonical_symbol(&self) -> String {
        normalize(&self.symbol)
    }

    /// Returns the explicit species, or infers one from the ion table.
    #[must_use]
    pub fn species(&self) -> Species {
        self.species.unwrap_or_else(|| {
            if IonConversion::lookup(&self.canonical_symbol()).is_some() {
                Species::Ionic
            } else {
                Species::Elemental
            }
        })
    }
}
