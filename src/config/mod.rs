//! JSON configuration loading for coupon and rate tables.
//!
//! Default tables ship under `configs/` at the crate root; callers pass
//! whatever path suits their deployment. Loaded configurations are
//! validated before being returned, so a successfully loaded config is
//! safe to hand straight to [`Pricer::new`](crate::pricing::Pricer::new).

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::pricing::{CouponConfig, RateConfig};

/// Loads and validates a coupon table from a JSON file.
///
/// # Errors
///
/// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Parse`]
/// if it is not valid JSON for the coupon schema, [`ConfigError::Invalid`]
/// if it parses but violates a semantic rule.
pub fn load_coupon_config(path: impl AsRef<Path>) -> Result<CouponConfig, ConfigError> {
    let config: CouponConfig = read_json(path.as_ref())?;
    config.validate()?;
    Ok(config)
}

/// Loads and validates a rate table from a JSON file.
///
/// Same error contract as [`load_coupon_config`].
pub fn load_rate_config(path: impl AsRef<Path>) -> Result<RateConfig, ConfigError> {
    let config: RateConfig = read_json(path.as_ref())?;
    config.validate()?;
    Ok(config)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}
