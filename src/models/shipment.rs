//! Shipment type.

use serde::Serialize;

use super::Package;

/// A group of packages traveling together on one vehicle trip.
///
/// Invariants: `total_weight` is the sum of the constituent package weights
/// and never exceeds the fleet's per-vehicle limit (enforced by the
/// partitioner); `round_trip_time = 2 × max(distance) / max_speed`, since
/// the vehicle returns to the depot before taking its next shipment.
/// Shipments are never mutated after construction.
///
/// # Examples
///
/// ```
/// use courier_fleet::models::{Package, Shipment};
///
/// let shipment = Shipment::new(
///     vec![Package::new("PKG1", 50.0, 30.0), Package::new("PKG2", 75.0, 125.0)],
///     70.0,
/// );
/// assert_eq!(shipment.package_count(), 2);
/// assert_eq!(shipment.total_weight(), 125.0);
/// assert!((shipment.round_trip_time() - 2.0 * 125.0 / 70.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    packages: Vec<Package>,
    total_weight: f64,
    round_trip_time: f64,
}

impl Shipment {
    /// Assembles a shipment, computing its total weight and the round-trip
    /// time for a vehicle at `max_speed` km/h.
    ///
    /// Package order reflects insertion order from the partitioner, not
    /// dispatch priority.
    pub fn new(packages: Vec<Package>, max_speed: f64) -> Self {
        let total_weight = packages.iter().map(Package::weight).sum();
        let max_distance = packages.iter().map(Package::distance).fold(0.0, f64::max);
        Self {
            packages,
            total_weight,
            round_trip_time: 2.0 * max_distance / max_speed,
        }
    }

    /// The packages in this shipment, in insertion order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Number of packages in this shipment.
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Sum of constituent package weights in kg.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Hours for the full round trip: out to the farthest drop point and
    /// back to the depot.
    pub fn round_trip_time(&self) -> f64 {
        self.round_trip_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipment_totals() {
        let shipment = Shipment::new(
            vec![
                Package::new("PKG1", 50.0, 30.0),
                Package::new("PKG2", 75.0, 125.0),
            ],
            70.0,
        );
        assert_eq!(shipment.package_count(), 2);
        assert_eq!(shipment.total_weight(), 125.0);
        assert!((shipment.round_trip_time() - 250.0 / 70.0).abs() < 1e-10);
    }

    #[test]
    fn test_shipment_round_trip_uses_max_distance() {
        let shipment = Shipment::new(
            vec![
                Package::new("A", 10.0, 10.0),
                Package::new("B", 10.0, 90.0),
                Package::new("C", 10.0, 40.0),
            ],
            45.0,
        );
        assert!((shipment.round_trip_time() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_package_round_trip() {
        let shipment = Shipment::new(vec![Package::new("PKG1", 10.0, 100.0)], 70.0);
        assert!((shipment.round_trip_time() - 200.0 / 70.0).abs() < 1e-10);
    }

    #[test]
    fn test_shipment_preserves_insertion_order() {
        let shipment = Shipment::new(
            vec![Package::new("B", 1.0, 1.0), Package::new("A", 2.0, 2.0)],
            10.0,
        );
        let ids: Vec<&str> = shipment.packages().iter().map(Package::id).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }
}
