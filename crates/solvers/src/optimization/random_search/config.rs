use thiserror::Error;

/// Configuration for the random search solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    trials: usize,
    low: f64,
    high: f64,
}

/// Errors that can occur when validating a random search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("trials must be at least one")]
    Trials,

    #[error("range must be finite with low < high")]
    Range,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1000, [0.0, 5.0]).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated trial count and sampling range.
    ///
    /// # Errors
    ///
    /// Returns an error if `trials` is zero, or if the range bounds are
    /// non-finite or not strictly increasing.
    pub fn new(trials: usize, range: [f64; 2]) -> Result<Self, ConfigError> {
        let [low, high] = range;
        if trials == 0 {
            return Err(ConfigError::Trials);
        }
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(ConfigError::Range);
        }

        Ok(Self { trials, low, high })
    }

    /// Returns the number of trials to draw.
    #[must_use]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the half-open sampling range `[low, high)` for every variable.
    #[must_use]
    pub fn range(&self) -> [f64; 2] {
        [self.low, self.high]
    }
}
