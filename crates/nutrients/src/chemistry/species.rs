use serde::{Deserialize, Serialize};

/// How an element entry's percentage is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    /// The percentage is the mass of the element itself (for example `Ca`).
    Elemental,

    /// The percentage is the mass of a composite ion (for example `NO3`),
    /// which is converted to its nutrient element before counting.
    Ionic,
}
