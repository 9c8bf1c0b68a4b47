use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uom::si::{f64::Volume, volume::milliliter};

use crate::InputError;

/// Units a solution volume can be entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    #[serde(rename = "mL")]
    Milliliter,
    #[serde(rename = "L")]
    Liter,
    #[serde(rename = "gal")]
    Gallon,
}

impl VolumeUnit {
    /// Milliliters per one of this unit.
    #[must_use]
    pub fn milliliters(self) -> f64 {
        match self {
            Self::Milliliter => 1.0,
            Self::Liter => 1000.0,
            Self::Gallon => 3785.41,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Milliliter => "mL",
            Self::Liter => "L",
            Self::Gallon => "gal",
        }
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for VolumeUnit {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "mL" | "ml" => Ok(Self::Milliliter),
            "L" | "l" => Ok(Self::Liter),
            "gal" => Ok(Self::Gallon),
            other => Err(InputError::Unit(other.to_owned())),
        }
    }
}

/// The volume of finished solution, as entered by the user.
///
/// All computation uses [`SolutionVolume::milliliters`]; the unit is kept
/// only so the volume can be shown back the way it was entered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolutionVolume {
    pub value: f64,
    pub unit: VolumeUnit,
}

impl SolutionVolume {
    #[must_use]
    pub fn new(value: f64, unit: VolumeUnit) -> Self {
        Self { value, unit }
    }

    #[must_use]
    pub fn from_milliliters(milliliters: f64) -> Self {
        Self::new(milliliters, VolumeUnit::Milliliter)
    }

    /// Creates a volume from a dimensioned quantity, stored in milliliters.
    #[must_use]
    pub fn from_quantity(volume: Volume) -> Self {
        Self::from_milliliters(volume.get::<milliliter>())
    }

    /// Returns the volume normalized to milliliters.
    #[must_use]
    pub fn milliliters(&self) -> f64 {
        self.value * self.unit.milliliters()
    }

    /// Returns the volume in liters.
    #[must_use]
    pub fn liters(&self) -> f64 {
        self.milliliters() / 1000.0
    }

    /// Returns the same volume expressed in another unit.
    #[must_use]
    pub fn to_unit(&self, unit: VolumeUnit) -> Self {
        Self::new(self.milliliters() / unit.milliliters(), unit)
    }

    /// Returns the volume as a dimensioned quantity.
    #[must_use]
    pub fn quantity(&self) -> Volume {
        Volume::new::<milliliter>(self.milliliters())
    }

    /// Checks that the volume can be divided by.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Volume`] if the volume is not finite and positive.
    pub fn validate(&self) -> Result<(), InputError> {
        let milliliters = self.milliliters();
        if milliliters.is_finite() && milliliters > 0.0 {
            Ok(())
        } else {
            Err(InputError::Volume(milliliters))
        }
    }
}

impl fmt::Display for SolutionVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
