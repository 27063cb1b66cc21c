//! Best-fit-decreasing bin packing.
//!
//! # Algorithm
//!
//! Packages are placed heaviest first. Each package goes into the open
//! shipment with the least residual capacity that still fits it; a new
//! shipment opens only when none fits. O(n²), suitable for batches where
//! the exhaustive search in [`pack_optimal`](super::pack_optimal) would be
//! too expensive.
//!
//! This is an approximation: it does not always reach the minimum shipment
//! count (see `test_suboptimal_on_adversarial_weights`), so the dispatch
//! order and delivery times downstream can differ from the reference
//! behavior of the exhaustive search.

use crate::error::EngineError;
use crate::models::Package;

use super::ensure_shippable;

/// Partitions packages into capacity-feasible groups with best-fit
/// decreasing placement.
///
/// Same contract as [`pack_optimal`](super::pack_optimal) except the group
/// count is not guaranteed minimal.
///
/// # Errors
///
/// [`EngineError::UnshippablePackage`] if any single package outweighs
/// `max_carriable_weight`.
///
/// # Examples
///
/// ```
/// use courier_fleet::models::Package;
/// use courier_fleet::partition::pack_best_fit;
///
/// let packages = vec![
///     Package::new("PKG3", 175.0, 100.0),
///     Package::new("PKG1", 50.0, 30.0),
/// ];
/// let groups = pack_best_fit(&packages, 200.0).unwrap();
/// assert_eq!(groups.len(), 2);
/// ```
pub fn pack_best_fit(
    packages: &[Package],
    max_carriable_weight: f64,
) -> Result<Vec<Vec<Package>>, EngineError> {
    ensure_shippable(packages, max_carriable_weight)?;

    let mut order: Vec<usize> = (0..packages.len()).collect();
    order.sort_by(|&a, &b| packages[b].weight().total_cmp(&packages[a].weight()));

    let mut bins: Vec<(Vec<Package>, f64)> = Vec::new();
    for index in order {
        let package = &packages[index];
        let mut target: Option<usize> = None;
        for (bin, (_, bin_weight)) in bins.iter().enumerate() {
            if bin_weight + package.weight() > max_carriable_weight {
                continue;
            }
            // Tightest fit wins; first such bin on ties.
            if target.map_or(true, |best| bins[best].1 < *bin_weight) {
                target = Some(bin);
            }
        }
        match target {
            Some(bin) => {
                bins[bin].0.push(package.clone());
                bins[bin].1 += package.weight();
            }
            None => bins.push((vec![package.clone()], package.weight())),
        }
    }

    Ok(bins.into_iter().map(|(group, _)| group).collect())
}
