//! Dispatch ordering for completed shipments.
//!
//! Fuller, heavier shipments go out first to maximize vehicle utilization
//! per trip; among equally full and heavy shipments, the fastest round trip
//! goes first so a vehicle frees up sooner.

use std::cmp::Ordering;

use crate::models::Shipment;

/// Compares two shipments by dispatch priority: package count descending,
/// then total weight descending, then round-trip time ascending.
///
/// Input weights and distances are positive and finite, so `total_cmp`
/// agrees with the usual ordering here.
pub fn dispatch_cmp(a: &Shipment, b: &Shipment) -> Ordering {
    b.package_count()
        .cmp(&a.package_count())
        .then_with(|| b.total_weight().total_cmp(&a.total_weight()))
        .then_with(|| a.round_trip_time().total_cmp(&b.round_trip_time()))
}

/// Sorts shipments into dispatch order.
///
/// The sort is a single stable multi-key pass: shipments that tie on all
/// three keys keep the order the partitioner created them in.
pub fn prioritize(shipments: &mut [Shipment]) {
    shipments.sort_by(dispatch_cmp);
}
