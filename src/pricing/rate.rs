//! Per-kg and per-km delivery rates.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Multipliers applied to a package's weight and distance when computing
/// its delivery cost before discounts.
///
/// # Examples
///
/// ```
/// use courier_fleet::pricing::RateConfig;
///
/// let rates = RateConfig::new(10.0, 5.0);
/// assert!(rates.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateConfig {
    /// Cost per kg of package weight.
    pub weight: f64,
    /// Cost per km of delivery distance.
    pub distance: f64,
}

impl RateConfig {
    /// Creates a rate table.
    pub fn new(weight: f64, distance: f64) -> Self {
        Self { weight, distance }
    }

    /// Checks that both rates are positive and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "weight rate must be positive, got {}",
                self.weight
            )));
        }
        if !self.distance.is_finite() || self.distance <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "distance rate must be positive, got {}",
                self.distance
            )));
        }
        Ok(())
    }
}
