//! Package type.

use serde::{Deserialize, Serialize};

/// A package to be delivered.
///
/// Immutable once created; the engine only reads it. The optional offer
/// code is consumed by the pricing layer, not by scheduling.
///
/// # Examples
///
/// ```
/// use courier_fleet::models::Package;
///
/// let pkg = Package::new("PKG1", 50.0, 30.0).with_offer_code("OFR001");
/// assert_eq!(pkg.id(), "PKG1");
/// assert_eq!(pkg.weight(), 50.0);
/// assert_eq!(pkg.distance(), 30.0);
/// assert_eq!(pkg.offer_code(), Some("OFR001"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    package_id: String,
    weight: f64,
    distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    offer_code: Option<String>,
}

impl Package {
    /// Creates a package with the given ID, weight (kg), and distance (km).
    pub fn new(package_id: impl Into<String>, weight: f64, distance: f64) -> Self {
        Self {
            package_id: package_id.into(),
            weight,
            distance,
            offer_code: None,
        }
    }

    /// Sets an offer code for this package.
    pub fn with_offer_code(mut self, code: impl Into<String>) -> Self {
        self.offer_code = Some(code.into());
        self
    }

    /// Package ID, unique within a batch.
    pub fn id(&self) -> &str {
        &self.package_id
    }

    /// Weight in kg.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Distance to the drop point in km.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Offer code, if any.
    pub fn offer_code(&self) -> Option<&str> {
        self.offer_code.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_new() {
        let pkg = Package::new("PKG1", 50.0, 30.0);
        assert_eq!(pkg.id(), "PKG1");
        assert_eq!(pkg.weight(), 50.0);
        assert_eq!(pkg.distance(), 30.0);
        assert!(pkg.offer_code().is_none());
    }

    #[test]
    fn test_package_with_offer_code() {
        let pkg = Package::new("PKG2", 75.0, 125.0).with_offer_code("OFR008");
        assert_eq!(pkg.offer_code(), Some("OFR008"));
    }

    #[test]
    fn test_package_json_field_names() {
        let json = r#"{"packageId":"PKG1","weight":50,"distance":30,"offerCode":"OFR001"}"#;
        let pkg: Package = serde_json::from_str(json).expect("valid package json");
        assert_eq!(pkg.id(), "PKG1");
        assert_eq!(pkg.offer_code(), Some("OFR001"));
    }

    #[test]
    fn test_package_json_offer_code_optional() {
        let json = r#"{"packageId":"PKG2","weight":75,"distance":125}"#;
        let pkg: Package = serde_json::from_str(json).expect("valid package json");
        assert!(pkg.offer_code().is_none());
    }
}
