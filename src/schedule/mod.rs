//! Fleet scheduler: assigns the ordered shipment queue to vehicles and
//! derives per-package delivery times.
//!
//! # Algorithm
//!
//! Every vehicle starts available at time 0. For each shipment in dispatch
//! order, the vehicle with the minimum next-available time takes it (lowest
//! index on ties — the fleet is homogeneous, so the choice only has to be
//! deterministic). Each package in the shipment is delivered at the
//! vehicle's departure time plus its own one-way travel time; the vehicle
//! becomes available again only after the full round trip to the farthest
//! drop point and back.
//!
//! All times are hours as floating point, measured from scheduling start.
//! Delivery times are one-way arrival times, not the vehicle's return time.

use std::collections::BTreeMap;

use crate::error::EngineError;
use crate::models::{FleetCapacity, Package, Shipment};
use crate::partition::plan_shipments;

/// Simulates the fleet over an ordered shipment queue, returning each
/// package's delivery completion time in hours keyed by package ID.
///
/// The map type is ordered so repeated runs produce identical output down
/// to iteration and serialization order.
///
/// # Errors
///
/// [`EngineError::InvalidFleetConfiguration`] if the fleet has no vehicles
/// or a non-positive speed or weight limit. Shipment feasibility is the
/// partitioner's responsibility and is not re-checked here.
///
/// # Examples
///
/// ```
/// use courier_fleet::models::{FleetCapacity, Package, Shipment};
/// use courier_fleet::schedule::schedule_deliveries;
///
/// let fleet = FleetCapacity::new(2, 70.0, 200.0);
/// let shipments = vec![Shipment::new(vec![Package::new("PKG1", 10.0, 100.0)], 70.0)];
/// let times = schedule_deliveries(&shipments, &fleet).unwrap();
/// assert!((times["PKG1"] - 100.0 / 70.0).abs() < 1e-9);
/// ```
pub fn schedule_deliveries(
    shipments: &[Shipment],
    fleet: &FleetCapacity,
) -> Result<BTreeMap<String, f64>, EngineError> {
    fleet.validate()?;

    // Fresh per call; the engine holds no state across invocations.
    let mut next_available = vec![0.0_f64; fleet.vehicle_count() as usize];
    let mut delivery_times = BTreeMap::new();

    for shipment in shipments {
        let vehicle = next_free_vehicle(&next_available);
        let departs_at = next_available[vehicle];
        for package in shipment.packages() {
            delivery_times.insert(
                package.id().to_string(),
                departs_at + package.distance() / fleet.max_speed(),
            );
        }
        next_available[vehicle] = departs_at + shipment.round_trip_time();
    }

    Ok(delivery_times)
}

/// Combined entry point: consolidates, prioritizes, and schedules a batch
/// in one call.
///
/// # Errors
///
/// [`EngineError::UnshippablePackage`] if any package outweighs the fleet
/// limit; [`EngineError::InvalidFleetConfiguration`] for unusable fleet
/// parameters. Either every package receives a delivery time or the call
/// fails as a whole.
///
/// # Examples
///
/// ```
/// use courier_fleet::models::{FleetCapacity, Package};
/// use courier_fleet::schedule::compute_delivery_times;
///
/// let packages = vec![Package::new("PKG1", 10.0, 100.0)];
/// let fleet = FleetCapacity::new(2, 70.0, 200.0);
/// let times = compute_delivery_times(&packages, &fleet).unwrap();
/// assert_eq!(times.len(), 1);
/// ```
pub fn compute_delivery_times(
    packages: &[Package],
    fleet: &FleetCapacity,
) -> Result<BTreeMap<String, f64>, EngineError> {
    let shipments = plan_shipments(packages, fleet)?;
    schedule_deliveries(&shipments, fleet)
}

/// Index of the vehicle with the earliest next-available time, lowest
/// index on ties.
fn next_free_vehicle(next_available: &[f64]) -> usize {
    let mut best = 0;
    for (vehicle, &at) in next_available.iter().enumerate().skip(1) {
        if at < next_available[best] {
            best = vehicle;
        }
    }
    best
}
