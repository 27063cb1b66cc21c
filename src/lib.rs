//! # courier-fleet
//!
//! Package consolidation and fleet scheduling for courier deliveries.
//!
//! Groups a batch of packages into weight-feasible shipments using as few
//! shipments as possible, orders them for dispatch, and simulates a
//! homogeneous vehicle fleet to derive each package's delivery completion
//! time. A pricing module computes per-package delivery costs with
//! offer-code discounts loaded from JSON configuration.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Package, FleetCapacity, Shipment)
//! - [`partition`] — Shipment consolidation strategies and dispatch ordering
//! - [`schedule`] — Fleet simulation producing per-package delivery times
//! - [`pricing`] — Delivery cost and offer discount computation
//! - [`config`] — JSON configuration loading for coupons and rates
//! - [`error`] — Engine and configuration error types
//!
//! ## Example
//!
//! ```
//! use courier_fleet::models::{FleetCapacity, Package};
//! use courier_fleet::schedule::compute_delivery_times;
//!
//! let packages = vec![
//!     Package::new("PKG1", 50.0, 30.0).with_offer_code("OFR001"),
//!     Package::new("PKG2", 75.0, 125.0),
//! ];
//! let fleet = FleetCapacity::new(2, 70.0, 200.0);
//!
//! let times = compute_delivery_times(&packages, &fleet).unwrap();
//! assert!((times["PKG2"] - 125.0 / 70.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod partition;
pub mod pricing;
pub mod schedule;
