//! Exhaustive branch-and-bound bin packing.
//!
//! # Algorithm
//!
//! Packages are visited one at a time, heaviest first. At each package the
//! search branches: one branch per open shipment with enough residual
//! capacity, plus one branch that opens a new shipment for the package.
//! A complete branch (every package placed) becomes the incumbent when it
//! uses strictly fewer shipments than the best found so far; any branch
//! whose open-shipment count already reaches the incumbent count is pruned,
//! since continuing can never improve it. The incumbent at exhaustion is
//! therefore a partition with the minimum possible shipment count.
//!
//! Shipments-in-progress live in an indexable arena with explicit
//! place/undo on each branch, rather than cloned state per node.
//!
//! # Complexity
//!
//! Exponential in the worst case, bounded in practice by the incumbent
//! prune and the small batch sizes (tens of packages) the system expects.
//! For larger batches see [`pack_best_fit`](super::pack_best_fit).

use crate::error::EngineError;
use crate::models::Package;

use super::ensure_shippable;

/// An open shipment in the search arena.
struct Bin {
    members: Vec<usize>,
    weight: f64,
}

struct Search<'a> {
    packages: &'a [Package],
    /// Package indices in descending-weight visit order.
    order: Vec<usize>,
    capacity: f64,
    bins: Vec<Bin>,
    best: Option<Vec<Vec<usize>>>,
    best_count: usize,
}

impl Search<'_> {
    fn branch(&mut self, depth: usize) {
        if depth == self.order.len() {
            if self.bins.len() < self.best_count {
                self.best_count = self.bins.len();
                self.best = Some(self.bins.iter().map(|b| b.members.clone()).collect());
            }
            return;
        }
        if self.bins.len() >= self.best_count {
            return;
        }

        let index = self.order[depth];
        let weight = self.packages[index].weight();

        for bin in 0..self.bins.len() {
            if self.bins[bin].weight + weight <= self.capacity {
                // Restore the exact previous weight on undo; adding then
                // subtracting the same float is not always an identity.
                let previous = self.bins[bin].weight;
                self.bins[bin].members.push(index);
                self.bins[bin].weight = previous + weight;
                self.branch(depth + 1);
                self.bins[bin].members.pop();
                self.bins[bin].weight = previous;
            }
        }

        self.bins.push(Bin {
            members: vec![index],
            weight,
        });
        self.branch(depth + 1);
        self.bins.pop();
    }
}

/// Partitions packages into the minimum number of capacity-feasible groups.
///
/// Every package appears in exactly one group, no group's weight exceeds
/// `max_carriable_weight`, and no feasible partition uses fewer groups.
/// Within a group, packages appear in the order the search placed them
/// (descending weight, stable on ties). Deterministic: identical input
/// always yields an identical partition.
///
/// # Errors
///
/// [`EngineError::UnshippablePackage`] if any single package outweighs
/// `max_carriable_weight`; such a package can never travel on any vehicle.
///
/// # Examples
///
/// ```
/// use courier_fleet::models::Package;
/// use courier_fleet::partition::pack_optimal;
///
/// let packages = vec![
///     Package::new("PKG1", 50.0, 30.0),
///     Package::new("PKG2", 75.0, 125.0),
///     Package::new("PKG4", 110.0, 60.0),
/// ];
/// let groups = pack_optimal(&packages, 200.0).unwrap();
/// assert_eq!(groups.len(), 2);
/// ```
pub fn pack_optimal(
    packages: &[Package],
    max_carriable_weight: f64,
) -> Result<Vec<Vec<Package>>, EngineError> {
    ensure_shippable(packages, max_carriable_weight)?;
    if packages.is_empty() {
        return Ok(Vec::new());
    }

    let mut order: Vec<usize> = (0..packages.len()).collect();
    order.sort_by(|&a, &b| packages[b].weight().total_cmp(&packages[a].weight()));

    let mut search = Search {
        packages,
        order,
        capacity: max_carriable_weight,
        bins: Vec::new(),
        best: None,
        best_count: usize::MAX,
    };
    search.branch(0);

    // One-package-per-shipment always completes, so an incumbent exists.
    let Some(best) = search.best else {
        return Ok(Vec::new());
    };
    Ok(best
        .into_iter()
        .map(|members| members.into_iter().map(|i| packages[i].clone()).collect())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(group: &[Package]) -> Vec<&str> {
        group.iter().map(Package::id).collect()
    }

    #[test]
    fn test_empty_batch() {
        let groups = pack_optimal(&[], 200.0).expect("empty batch is valid");
        assert!(groups.is_empty());
    }

    #[test]
    fn test_single_package() {
        let groups = pack_optimal(&[Package::new("PKG1", 10.0, 100.0)], 200.0).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(ids(&groups[0]), vec!["PKG1"]);
    }

    #[test]
    fn test_all_fit_in_one_shipment() {
        let packages = vec![
            Package::new("A", 50.0, 10.0),
            Package::new("B", 60.0, 20.0),
            Package::new("C", 70.0, 30.0),
        ];
        let groups = pack_optimal(&packages, 200.0).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 3);
    }

    #[test]
    fn test_reference_batch_partition() {
        // Minimum is 4 shipments: only one disjoint pair fits under 200 kg,
        // and the heaviest-first search pairs PKG4 with PKG2.
        let packages = vec![
            Package::new("PKG1", 50.0, 30.0),
            Package::new("PKG2", 75.0, 125.0),
            Package::new("PKG3", 175.0, 100.0),
            Package::new("PKG4", 110.0, 60.0),
            Package::new("PKG5", 155.0, 95.0),
        ];
        let groups = pack_optimal(&packages, 200.0).unwrap();
        assert_eq!(groups.len(), 4);
        assert_eq!(ids(&groups[0]), vec!["PKG3"]);
        assert_eq!(ids(&groups[1]), vec!["PKG5"]);
        assert_eq!(ids(&groups[2]), vec!["PKG4", "PKG2"]);
        assert_eq!(ids(&groups[3]), vec!["PKG1"]);
    }

    #[test]
    fn test_finds_three_bin_optimum() {
        // Best-fit decreasing needs 4 bins here; the optimum is 3:
        // {4,3,3} {4,3,3} {5,5} with capacity 10.
        let weights = [5.0, 5.0, 4.0, 4.0, 3.0, 3.0, 3.0, 3.0];
        let packages: Vec<Package> = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Package::new(format!("P{i}"), w, 10.0))
            .collect();
        let groups = pack_optimal(&packages, 10.0).unwrap();
        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn test_no_package_lost_or_duplicated() {
        let packages = vec![
            Package::new("A", 90.0, 1.0),
            Package::new("B", 90.0, 2.0),
            Package::new("C", 90.0, 3.0),
            Package::new("D", 20.0, 4.0),
            Package::new("E", 20.0, 5.0),
        ];
        let groups = pack_optimal(&packages, 100.0).unwrap();
        let mut seen: Vec<&str> = groups.iter().flat_map(|g| ids(g)).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_capacity_never_exceeded() {
        let packages = vec![
            Package::new("A", 60.0, 1.0),
            Package::new("B", 60.0, 2.0),
            Package::new("C", 60.0, 3.0),
            Package::new("D", 60.0, 4.0),
        ];
        let groups = pack_optimal(&packages, 130.0).unwrap();
        for group in &groups {
            let total: f64 = group.iter().map(Package::weight).sum();
            assert!(total <= 130.0);
        }
    }

    #[test]
    fn test_unshippable_package_rejected() {
        let packages = vec![
            Package::new("PKG1", 50.0, 30.0),
            Package::new("PKG2", 250.0, 10.0),
        ];
        let err = pack_optimal(&packages, 200.0).unwrap_err();
        match err {
            EngineError::UnshippablePackage {
                package_id, weight, ..
            } => {
                assert_eq!(package_id, "PKG2");
                assert_eq!(weight, 250.0);
            }
            other => panic!("expected UnshippablePackage, got {other:?}"),
        }
    }

    #[test]
    fn test_deterministic() {
        let packages = vec![
            Package::new("A", 30.0, 5.0),
            Package::new("B", 30.0, 6.0),
            Package::new("C", 30.0, 7.0),
            Package::new("D", 30.0, 8.0),
        ];
        let first = pack_optimal(&packages, 70.0).unwrap();
        let second = pack_optimal(&packages, 70.0).unwrap();
        let shape =
            |groups: &[Vec<Package>]| -> Vec<Vec<String>> {
                groups
                    .iter()
                    .map(|g| g.iter().map(|p| p.id().to_string()).collect())
                    .collect()
            };
        assert_eq!(shape(&first), shape(&second));
    }
}
