//! Coupon and discount-condition types.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::Package;

/// Which package attribute a condition constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionParam {
    /// Package weight in kg.
    Weight,
    /// Delivery distance in km.
    Distance,
}

/// A single eligibility condition on a package attribute.
///
/// Matches the original wire format: the JSON `type` field selects the
/// variant, e.g. `{"param":"weight","type":"between","min":70,"max":200,
/// "unit":"kg"}`. `between` bounds are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Condition {
    /// Attribute strictly below `max`.
    LessThan {
        /// Constrained attribute.
        param: ConditionParam,
        /// Exclusive upper bound.
        max: f64,
        /// Display unit, e.g. `"kg"` or `"km"`.
        unit: String,
    },
    /// Attribute strictly above `min`.
    GreaterThan {
        /// Constrained attribute.
        param: ConditionParam,
        /// Exclusive lower bound.
        min: f64,
        /// Display unit.
        unit: String,
    },
    /// Attribute within `[min, max]`.
    Between {
        /// Constrained attribute.
        param: ConditionParam,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
        /// Display unit.
        unit: String,
    },
}

impl Condition {
    /// Returns `true` if the package satisfies this condition.
    pub fn matches(&self, package: &Package) -> bool {
        let value = |param: ConditionParam| match param {
            ConditionParam::Weight => package.weight(),
            ConditionParam::Distance => package.distance(),
        };
        match *self {
            Condition::LessThan { param, max, .. } => value(param) < max,
            Condition::GreaterThan { param, min, .. } => value(param) > min,
            Condition::Between { param, min, max, .. } => {
                let v = value(param);
                v >= min && v <= max
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Condition::Between { min, max, .. } = self {
            if min > max {
                return Err(ConfigError::Invalid(format!(
                    "between condition requires min <= max, got {min}..{max}"
                )));
            }
        }
        Ok(())
    }
}

/// A discount offer: a percentage applied when every condition matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    /// Offer code packages reference, e.g. `"OFR001"`.
    pub code: String,
    /// Code pattern from the source config; kept as opaque data.
    pub pattern: String,
    /// Discount percentage in 0–100.
    pub discount: f64,
    /// Eligibility conditions; all must match.
    pub conditions: Vec<Condition>,
}

impl Coupon {
    /// Returns `true` if the package meets every condition of this coupon.
    ///
    /// The offer code itself is matched by the caller; this only checks
    /// eligibility.
    pub fn applies_to(&self, package: &Package) -> bool {
        !self.conditions.is_empty() && self.conditions.iter().all(|c| c.matches(package))
    }
}

/// Cross-coupon validation rules from the source config.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    /// Whether conditions may be combined across coupons. Carried for wire
    /// fidelity; nothing consumes it yet.
    pub combined_conditions: bool,
}

/// The full coupon table.
///
/// # Examples
///
/// ```
/// use courier_fleet::pricing::CouponConfig;
///
/// let json = r#"{
///     "coupons": [{
///         "code": "OFR001",
///         "pattern": "^OFR[0-9]{3}$",
///         "discount": 10,
///         "conditions": [
///             {"param": "distance", "type": "lessThan", "max": 200, "unit": "km"},
///             {"param": "weight", "type": "between", "min": 70, "max": 200, "unit": "kg"}
///         ]
///     }],
///     "validationRules": {"combinedConditions": false}
/// }"#;
/// let config: CouponConfig = serde_json::from_str(json).unwrap();
/// assert!(config.validate().is_ok());
/// assert!(config.find("OFR001").is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponConfig {
    /// All known coupons.
    pub coupons: Vec<Coupon>,
    /// Cross-coupon rules.
    pub validation_rules: ValidationRules,
}

impl CouponConfig {
    /// Looks up a coupon by exact code.
    pub fn find(&self, code: &str) -> Option<&Coupon> {
        self.coupons.iter().find(|c| c.code == code)
    }

    /// Checks the semantic rules the original schema enforced: at least one
    /// coupon, non-empty codes, discount within 0–100, at least one
    /// condition per coupon, and well-formed bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.coupons.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one coupon is required".to_string(),
            ));
        }
        for coupon in &self.coupons {
            if coupon.code.is_empty() {
                return Err(ConfigError::Invalid("coupon code is required".to_string()));
            }
            if !coupon.discount.is_finite() || !(0.0..=100.0).contains(&coupon.discount) {
                return Err(ConfigError::Invalid(format!(
                    "coupon {} discount must be within 0-100, got {}",
                    coupon.code, coupon.discount
                )));
            }
            if coupon.conditions.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "coupon {} requires at least one condition",
                    coupon.code
                )));
            }
            for condition in &coupon.conditions {
                condition.validate()?;
            }
        }
        Ok(())
    }
}
