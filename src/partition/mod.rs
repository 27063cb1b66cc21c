//! Shipment consolidation strategies and dispatch ordering.
//!
//! - [`pack_optimal`] — Exhaustive branch-and-bound, minimum shipment count (reference behavior)
//! - [`pack_best_fit`] — Best-fit-decreasing approximation, O(n²)
//! - [`prioritize`] / [`dispatch_cmp`] — Stable three-key dispatch ordering
//! - [`plan_shipments`] — Consolidation and prioritization composed

mod greedy;
mod optimal;
mod priority;

pub use greedy::pack_best_fit;
pub use optimal::pack_optimal;
pub use priority::{dispatch_cmp, prioritize};

use crate::error::EngineError;
use crate::models::{FleetCapacity, Package, Shipment};

/// Rejects any package that outweighs the per-vehicle limit.
///
/// Reported for the first offender in batch order.
pub(crate) fn ensure_shippable(
    packages: &[Package],
    max_carriable_weight: f64,
) -> Result<(), EngineError> {
    for package in packages {
        if package.weight() > max_carriable_weight {
            return Err(EngineError::UnshippablePackage {
                package_id: package.id().to_string(),
                weight: package.weight(),
                max_carriable_weight,
            });
        }
    }
    Ok(())
}

/// Consolidates a batch into the minimum number of capacity-feasible
/// shipments and sorts them into dispatch order.
///
/// The returned queue is consumed head-first by
/// [`schedule_deliveries`](crate::schedule::schedule_deliveries).
///
/// # Errors
///
/// [`EngineError::InvalidFleetConfiguration`] for a fleet with no vehicles
/// or non-positive speed or weight limit;
/// [`EngineError::UnshippablePackage`] if any package can never ship.
///
/// # Examples
///
/// ```
/// use courier_fleet::models::{FleetCapacity, Package};
/// use courier_fleet::partition::plan_shipments;
///
/// let packages = vec![
///     Package::new("PKG1", 50.0, 30.0),
///     Package::new("PKG4", 110.0, 60.0),
/// ];
/// let fleet = FleetCapacity::new(2, 70.0, 200.0);
/// let shipments = plan_shipments(&packages, &fleet).unwrap();
/// assert_eq!(shipments.len(), 1);
/// assert_eq!(shipments[0].package_count(), 2);
/// ```
pub fn plan_shipments(
    packages: &[Package],
    fleet: &FleetCapacity,
) -> Result<Vec<Shipment>, EngineError> {
    fleet.validate()?;
    let groups = pack_optimal(packages, fleet.max_carriable_weight())?;
    let mut shipments: Vec<Shipment> = groups
        .into_iter()
        .map(|group| Shipment::new(group, fleet.max_speed()))
        .collect();
    prioritize(&mut shipments);
    Ok(shipments)
}
