//! Domain model types for courier delivery estimation.
//!
//! Provides the core abstractions: packages with weights, distances, and
//! optional offer codes, the homogeneous fleet's capacity parameters, and
//! shipments as groups of packages traveling together on one round trip.

mod fleet;
mod package;
mod shipment;

pub use fleet::FleetCapacity;
pub use package::Package;
pub use shipment::Shipment;
