//! Electrical conductivity estimate from achieved concentrations.
//!
//! Each tracked nutrient is assumed to be fully dissociated as one ionic
//! species, and the solution's conductivity is the sum over species of
//! `λ · c`, with `λ` the limiting molar conductivity (S·cm²/mol) and `c` the
//! molar concentration (mol/L). With those units the sum is directly in
//! mS/cm.
//!
//! Phosphorus is counted as H2PO4⁻, sulfur as SO4²⁻ and molybdenum as
//! MoO4²⁻. This is a fixed simplification, not a speciation model; neutral
//! species (boric and silicic acid) and unknown buckets add nothing. The
//! estimate is informational and does not feed the solver's objective.

use crate::{Concentrations, Nutrient};

/// Conductivity data for the ion a nutrient is counted as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IonConductivity {
    pub nutrient: Nutrient,

    /// The ion the nutrient is assumed to be present as.
    pub ion: &'static str,

    /// Molar mass of the nutrient element, g/mol. Each ion carries one atom
    /// of it, so moles of element equal moles of ion.
    pub molar_mass: f64,

    /// Limiting molar conductivity of the ion, S·cm²/mol.
    pub molar_conductivity: f64,
}

const fn ion(
    nutrient: Nutrient,
    ion: &'static str,
    molar_mass: f64,
    molar_conductivity: f64,
) -> IonConductivity {
    IonConductivity {
        nutrient,
        ion,
        molar_mass,
        molar_conductivity,
    }
}

// Molar masses are standard atomic weights, not the rounded masses behind the
// ion ratios in `chemistry`.
pub const CONDUCTIVITY: [IonConductivity; 14] = [
    ion(Nutrient::NitrateNitrogen, "NO3-", 14.007, 71.46),
    ion(Nutrient::AmmoniumNitrogen, "NH4+", 14.007, 73.5),
    ion(Nutrient::Potassium, "K+", 39.098, 73.48),
    ion(Nutrient::Calcium, "Ca2+", 40.078, 119.0),
    ion(Nutrient::Magnesium, "Mg2+", 24.305, 106.0),
    ion(Nutrient::Phosphorus, "H2PO4-", 30.974, 36.0),
    ion(Nutrient::Sulfur, "SO4 2-", 32.06, 160.0),
    ion(Nutrient::Iron, "Fe2+", 55.845, 108.0),
    ion(Nutrient::Manganese, "Mn2+", 54.938, 107.0),
    ion(Nutrient::Zinc, "Zn2+", 65.38, 105.6),
    ion(Nutrient::Copper, "Cu2+", 63.546, 107.2),
    ion(Nutrient::Molybdenum, "MoO4 2-", 95.95, 149.0),
    ion(Nutrient::Sodium, "Na+", 22.990, 50.08),
    ion(Nutrient::Chlorine, "Cl-", 35.45, 76.31),
];

/// Returns the estimated conductivity in mS/cm, unrounded.
#[must_use]
pub fn estimate_ec(achieved: &Concentrations) -> f64 {
    CONDUCTIVITY
        .iter()
        .map(|c| {
            let ppm = achieved.nutrient(c.nutrient);
            let mol_per_liter = ppm / (c.molar_mass * 1000.0);
            c.molar_conductivity * mol_per_liter
        })
        .sum()
}

/// Rounds a conductivity to three decimals for reporting.
#[must_use]
pub fn round_ec(ec: f64) -> f64 {
    (ec * 1000.0).round() / 1000.0
}
