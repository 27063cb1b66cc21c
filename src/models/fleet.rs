//! Fleet capacity type.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Capacity parameters shared by every vehicle in a homogeneous fleet.
///
/// # Examples
///
/// ```
/// use courier_fleet::models::FleetCapacity;
///
/// let fleet = FleetCapacity::new(2, 70.0, 200.0);
/// assert_eq!(fleet.vehicle_count(), 2);
/// assert!(fleet.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetCapacity {
    vehicle_count: u32,
    max_speed: f64,
    max_carriable_weight: f64,
}

impl FleetCapacity {
    /// Creates fleet capacity parameters.
    ///
    /// Call [`validate`](Self::validate) before scheduling; construction
    /// itself never fails so that deserialized values can be checked the
    /// same way as programmatic ones.
    pub fn new(vehicle_count: u32, max_speed: f64, max_carriable_weight: f64) -> Self {
        Self {
            vehicle_count,
            max_speed,
            max_carriable_weight,
        }
    }

    /// Number of vehicles in the fleet.
    pub fn vehicle_count(&self) -> u32 {
        self.vehicle_count
    }

    /// Maximum speed in km/h.
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Per-vehicle weight limit in kg.
    pub fn max_carriable_weight(&self) -> f64 {
        self.max_carriable_weight
    }

    /// Checks that scheduling is possible under these parameters.
    ///
    /// Fails on zero vehicles, non-positive or non-finite speed, or
    /// non-positive or non-finite carriable weight.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.vehicle_count == 0 {
            return Err(EngineError::InvalidFleetConfiguration(
                "fleet has no vehicles".to_string(),
            ));
        }
        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            return Err(EngineError::InvalidFleetConfiguration(format!(
                "maximum speed must be positive, got {}",
                self.max_speed
            )));
        }
        if !self.max_carriable_weight.is_finite() || self.max_carriable_weight <= 0.0 {
            return Err(EngineError::InvalidFleetConfiguration(format!(
                "maximum carriable weight must be positive, got {}",
                self.max_carriable_weight
            )));
        }
        Ok(())
    }
}
