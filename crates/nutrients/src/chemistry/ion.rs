use crate::Nutrient;

// Rounded standard atomic masses, g/mol. Ion ratios use these whole-number
// values so saved recipes keep solving to the same grams; the EC table in
// `conductivity` uses standard atomic weights instead.
const H: f64 = 1.0;
const N: f64 = 14.0;
const O: f64 = 16.0;
const P: f64 = 31.0;
const S: f64 = 32.0;
const MO: f64 = 96.0;

/// Mass ratio from an ion to the nutrient element it carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IonConversion {
    /// Canonical ion symbol, without charge.
    pub ion: &'static str,

    /// The nutrient bucket the ion feeds.
    pub nutrient: Nutrient,

    /// Element mass per unit ion mass.
    pub ratio: f64,
}

/// Every ion the concentration model converts.
pub const IONS: [IonConversion; 7] = [
    IonConversion {
        ion: "NO3",
        nutrient: Nutrient::NitrateNitrogen,
        ratio: N / (N + 3.0 * O),
    },
    IonConversion {
        ion: "NH4",
        nutrient: Nutrient::AmmoniumNitrogen,
        ratio: N / (N + 4.0 * H),
    },
    IonConversion {
        ion: "H2PO4",
        nutrient: Nutrient::Phosphorus,
        ratio: P / (2.0 * H + P + 4.0 * O),
    },
    IonConversion {
        ion: "HPO4",
        nutrient: Nutrient::Phosphorus,
        ratio: P / (H + P + 4.0 * O),
    },
    IonConversion {
        ion: "PO4",
        nutrient: Nutrient::Phosphorus,
        ratio: P / (P + 4.0 * O),
    },
    IonConversion {
        ion: "SO4",
        nutrient: Nutrient::Sulfur,
        ratio: S / (S + 4.0 * O),
    },
    IonConversion {
        ion: "MoO4",
        nutrient: Nutrient::Molybdenum,
        ratio: MO / (MO + 4.0 * O),
    },
];

impl IonConversion {
    /// Looks up the conversion for a canonical ion symbol.
    #[must_use]
    pub fn lookup(ion: &str) -> Option<&'static IonConversion> {
        IONS.iter().find(|c| c.ion == ion)
    }
}

/// Converts an ion concentration to the concentration of its nutrient element.
///
/// Returns `None` if the ion is not in [`IONS`].
#[must_use]
pub fn ion_to_nutrient_ppm(ion: &str, ion_ppm: f64) -> Option<(Nutrient, f64)> {
    IonConversion::lookup(ion).map(|c| (c.nutrient, ion_ppm * c.ratio))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn nitrate_converts_to_nitrate_nitrogen() {
        let (nutrient, ppm) = ion_to_nutrient_ppm("NO3", 100.0).unwrap();

        assert_eq!(nutrient, Nutrient::NitrateNitrogen);
        assert_relative_eq!(ppm, 100.0 * 14.0 / 62.0, max_relative = 1e-12);
        assert_relative_eq!(ppm, 22.58, epsilon = 0.01);
    }

    #[test]
    fn ammonium_converts_to_ammonium_nitrogen() {
        let (nutrient, ppm) = ion_to_nutrient_ppm("NH4", 18.0).unwrap();

        assert_eq!(nutrient, Nutrient::AmmoniumNitrogen);
        assert_relative_eq!(ppm, 14.0, max_relative = 1e-12);
    }

    #[test]
    fn phosphate_and_sulfate_ratios() {
        assert_relative_eq!(
            IonConversion::lookup("H2PO4").unwrap().ratio,
            31.0 / 97.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            IonConversion::lookup("SO4").unwrap().ratio,
            32.0 / 96.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            IonConversion::lookup("MoO4").unwrap().ratio,
            0.6,
            max_relative = 1e-12
        );
    }

    #[test]
    fn unknown_ion_is_not_converted() {
        assert!(ion_to_nutrient_ppm("CO3", 10.0).is_none());
    }
}
