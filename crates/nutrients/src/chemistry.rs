//! Fixed chemistry tables and symbol handling.
//!
//! Everything here is constant domain data: how an ion's mass converts to the
//! mass of the nutrient it carries, how oxide-basis label values convert to
//! elemental percentages, and how free-form element symbols are reduced to a
//! canonical bucket key. Recipes saved with one set of factors must solve to
//! the same grams later, so these values are part of the public contract.

mod ion;
mod oxide;
mod species;
mod symbol;

pub use ion::{IONS, IonConversion, ion_to_nutrient_ppm};
pub use oxide::Oxide;
pub use species::Species;
pub use symbol::normalize;
