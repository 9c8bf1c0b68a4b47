use thiserror::Error;

/// Configuration for the coordinate descent solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_passes: usize,
    step: f64,
    lower_bound: f64,
}

/// Errors that can occur when validating a coordinate descent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step must be finite and positive")]
    Step,

    #[error("lower_bound must be finite")]
    LowerBound,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 0.1, 0.0).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated step and lower bound.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not finite and positive, or if
    /// `lower_bound` is not finite.
    pub fn new(max_passes: usize, step: f64, lower_bound: f64) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step);
        }
        if !lower_bound.is_finite() {
            return Err(ConfigError::LowerBound);
        }

        Ok(Self {
            max_passes,
            step,
            lower_bound,
        })
    }

    /// Returns the maximum number of passes over all variables.
    #[must_use]
    pub fn max_passes(&self) -> usize {
        self.max_passes
    }

    /// Returns the size of each proposed move.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the value below which no variable is moved.
    #[must_use]
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }
}
