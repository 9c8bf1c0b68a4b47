use serde::{Deserialize, Serialize};

use crate::Nutrient;

/// Oxide bases used on fertilizer labels.
///
/// Labels often state phosphorus as P2O5, potassium as K2O, and so on. These
/// are converted to elemental percentages once, when the element is defined,
/// so the solver only ever sees elemental or ionic values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Oxide {
    P2O5,
    K2O,
    CaO,
    MgO,
    SO3,
    SiO2,
}

impl Oxide {
    pub const ALL: [Oxide; 6] = [
        Oxide::P2O5,
        Oxide::K2O,
        Oxide::CaO,
        Oxide::MgO,
        Oxide::SO3,
        Oxide::SiO2,
    ];

    /// Returns the nutrient element the oxide is converted to.
    #[must_use]
    pub fn nutrient(self) -> Nutrient {
        match self {
            Self::P2O5 => Nutrient::Phosphorus,
            Self::K2O => Nutrient::Potassium,
            Self::CaO => Nutrient::Calcium,
            Self::MgO => Nutrient::Magnesium,
            Self::SO3 => Nutrient::Sulfur,
            Self::SiO2 => Nutrient::Silicon,
        }
    }

    /// Returns the element mass fraction of the oxide.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::P2O5 => 0.436,
            Self::K2O => 0.830,
            Self::CaO => 0.715,
            Self::MgO => 0.603,
            Self::SO3 => 0.400,
            Self::SiO2 => 0.467,
        }
    }

    /// Converts an oxide-basis percentage to an elemental percentage.
    #[must_use]
    pub fn to_elemental(self, oxide_percentage: f64) -> f64 {
        oxide_percentage * self.factor()
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::P2O5 => "P2O5",
            Self::K2O => "K2O",
            Self::CaO => "CaO",
            Self::MgO => "MgO",
            Self::SO3 => "SO3",
            Self::SiO2 => "SiO2",
        }
    }

    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.symbol() == symbol.trim())
    }
}
