use std::fmt;

use serde::{Deserialize, Serialize};

/// A nutrient that can carry a target concentration.
///
/// Nitrogen is tracked as two separate forms because fertigation recipes care
/// about the nitrate/ammonium ratio, not just total nitrogen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Nutrient {
    #[serde(rename = "NO3_N")]
    NitrateNitrogen,
    #[serde(rename = "NH4_N")]
    AmmoniumNitrogen,
    #[serde(rename = "P")]
    Phosphorus,
    #[serde(rename = "K")]
    Potassium,
    #[serde(rename = "Ca")]
    Calcium,
    #[serde(rename = "Mg")]
    Magnesium,
    #[serde(rename = "S")]
    Sulfur,
    #[serde(rename = "Fe")]
    Iron,
    #[serde(rename = "Mn")]
    Manganese,
    #[serde(rename = "Zn")]
    Zinc,
    #[serde(rename = "B")]
    Boron,
    #[serde(rename = "Cu")]
    Copper,
    #[serde(rename = "Mo")]
    Molybdenum,
    #[serde(rename = "Si")]
    Silicon,
    #[serde(rename = "Na")]
    Sodium,
    #[serde(rename = "Cl")]
    Chlorine,
}

/// Agronomic grouping of a nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientCategory {
    Primary,
    Secondary,
    Micronutrient,
}

impl Nutrient {
    /// Every targetable nutrient, macros first.
    pub const ALL: [Nutrient; 16] = [
        Nutrient::NitrateNitrogen,
        Nutrient::AmmoniumNitrogen,
        Nutrient::Phosphorus,
        Nutrient::Potassium,
        Nutrient::Calcium,
        Nutrient::Magnesium,
        Nutrient::Sulfur,
        Nutrient::Iron,
        Nutrient::Manganese,
        Nutrient::Zinc,
        Nutrient::Boron,
        Nutrient::Copper,
        Nutrient::Molybdenum,
        Nutrient::Silicon,
        Nutrient::Sodium,
        Nutrient::Chlorine,
    ];

    /// Returns the canonical bucket symbol used in concentration maps.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::NitrateNitrogen => "NO3_N",
            Self::AmmoniumNitrogen => "NH4_N",
            Self::Phosphorus => "P",
            Self::Potassium => "K",
            Self::Calcium => "Ca",
            Self::Magnesium => "Mg",
            Self::Sulfur => "S",
            Self::Iron => "Fe",
            Self::Manganese => "Mn",
            Self::Zinc => "Zn",
            Self::Boron => "B",
            Self::Copper => "Cu",
            Self::Molybdenum => "Mo",
            Self::Silicon => "Si",
            Self::Sodium => "Na",
            Self::Chlorine => "Cl",
        }
    }

    /// Looks up a nutrient by its canonical symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.symbol() == symbol)
    }

    #[must_use]
    pub fn category(self) -> NutrientCategory {
        match self {
            Self::NitrateNitrogen | Self::AmmoniumNitrogen | Self::Phosphorus | Self::Potassium => {
                NutrientCategory::Primary
            }
            Self::Calcium | Self::Magnesium | Self::Sulfur => NutrientCategory::Secondary,
            _ => NutrientCategory::Micronutrient,
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for nutrient in Nutrient::ALL {
            assert_eq!(Nutrient::from_symbol(nutrient.symbol()), Some(nutrient));
        }
        assert_eq!(Nutrient::from_symbol("N"), None);
    }

    #[test]
    fn nitrogen_forms_are_primary() {
        assert_eq!(Nutrient::NitrateNitrogen.category(), NutrientCategory::Primary);
        assert_eq!(Nutrient::AmmoniumNitrogen.category(), NutrientCategory::Primary);
        assert_eq!(Nutrient::Sulfur.category(), NutrientCategory::Secondary);
        assert_eq!(Nutrient::Chlorine.category(), NutrientCategory::Micronutrient);
    }

    #[test]
    fn serializes_as_symbol() {
        let json = serde_json::to_string(&Nutrient::NitrateNitrogen).unwrap();
        assert_eq!(json, "\"NO3_N\"");
    }
}
