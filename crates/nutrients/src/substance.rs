use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::Element;

/// A fertilizer or salt that can be dissolved into the solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substance {
    pub id: String,
    pub name: String,
    pub formula: String,
    pub elements: Vec<Element>,
}

/// Reasons a substance definition is refused before it is saved.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubstanceError {
    #[error("substance name is empty")]
    MissingName,

    #[error("substance formula is empty")]
    MissingFormula,

    #[error("substance has no elements")]
    NoElements,

    #[error("element `{symbol}` must have a finite percentage above 0, got {percentage}")]
    Percentage { symbol: String, percentage: f64 },
}

impl Substance {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        formula: impl Into<String>,
        elements: Vec<Element>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            formula: formula.into(),
            elements,
        }
    }

    /// Returns the summed percentage of all components.
    #[must_use]
    pub fn total_percentage(&self) -> f64 {
        self.elements.iter().map(|e| e.percentage).sum()
    }

    /// Checks the rules a substance must satisfy before it is stored.
    ///
    /// The solver itself never calls this; it accepts whatever it is given.
    /// A composition above 100 % is suspicious but allowed, and only logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or formula is blank, there are no
    /// elements, or any element has a non-positive or non-finite percentage.
    pub fn validate(&self) -> Result<(), SubstanceError> {
        if self.name.trim().is_empty() {
            return Err(SubstanceError::MissingName);
        }
        if self.formula.trim().is_empty() {
            return Err(SubstanceError::MissingFormula);
        }
        if self.elements.is_empty() {
            return Err(SubstanceError::NoElements);
        }
        if let Some(bad) = self
            .elements
            .iter()
            .find(|e| !e.percentage.is_finite() || e.percentage <= 0.0)
        {
            return Err(SubstanceError::Percentage {
                symbol: bad.symbol.clone(),
                percentage: bad.percentage,
            });
        }

        let total = self.total_percentage();
        if total > 100.0 {
            warn!(substance = %self.id, total, "composition exceeds 100% of substance mass");
        }

        Ok(())
    }
}
