//! Error types for the consolidation and scheduling engine.

use thiserror::Error;

/// Fatal errors raised while consolidating or scheduling a batch.
///
/// No partial results are returned: either every package in the batch
/// receives a delivery time or the call fails as a whole.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A package outweighs the fleet's per-vehicle limit and can never ship.
    #[error("package {package_id} weighs {weight} kg, which exceeds the maximum carriable weight of {max_carriable_weight} kg")]
    UnshippablePackage {
        /// ID of the offending package.
        package_id: String,
        /// The package's weight in kg.
        weight: f64,
        /// The fleet's per-vehicle weight limit in kg.
        max_carriable_weight: f64,
    },

    /// Fleet parameters under which scheduling is impossible.
    #[error("invalid fleet configuration: {0}")]
    InvalidFleetConfiguration(String),
}

/// Errors raised while loading or validating JSON configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}")]
    Io {
        /// Path that failed to read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for the expected schema.
    #[error("failed to parse config file {path}")]
    Parse {
        /// Path that failed to parse.
        path: String,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The configuration parsed but violates a semantic rule.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
