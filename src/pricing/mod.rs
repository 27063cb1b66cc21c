//! Delivery cost and offer discount computation.
//!
//! Cost before discount is `base + rate.weight × kg + rate.distance × km`.
//! A package earns its coupon's percentage discount when it carries the
//! coupon's code and satisfies every condition; unknown or ineligible
//! codes simply earn no discount. This layer is independent of scheduling:
//! the caller merges [`Bill`]s with delivery times by package ID.

mod coupon;
mod rate;

pub use coupon::{Condition, ConditionParam, Coupon, CouponConfig, ValidationRules};
pub use rate::RateConfig;

use serde::Serialize;

use crate::error::ConfigError;
use crate::models::Package;

/// One priced package.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// ID of the billed package.
    pub package_id: String,
    /// Discount amount in currency units (not a percentage).
    pub discount: f64,
    /// Final cost after discount.
    pub total_cost: f64,
}

/// Prices packages against a validated coupon table and rate config.
///
/// # Examples
///
/// ```
/// use courier_fleet::models::Package;
/// use courier_fleet::pricing::{
///     Condition, ConditionParam, Coupon, CouponConfig, Pricer, RateConfig, ValidationRules,
/// };
///
/// let coupons = CouponConfig {
///     coupons: vec![Coupon {
///         code: "OFR001".to_string(),
///         pattern: "^OFR[0-9]{3}$".to_string(),
///         discount: 10.0,
///         conditions: vec![Condition::LessThan {
///             param: ConditionParam::Weight,
///             max: 10.0,
///             unit: "kg".to_string(),
///         }],
///     }],
///     validation_rules: ValidationRules { combined_conditions: false },
/// };
/// let pricer = Pricer::new(coupons, RateConfig::new(10.0, 5.0)).unwrap();
///
/// let bills = pricer.bill(&[Package::new("PKG1", 5.0, 5.0).with_offer_code("OFR001")], 100.0);
/// assert_eq!(bills[0].discount, 17.5);
/// assert_eq!(bills[0].total_cost, 157.5);
/// ```
pub struct Pricer {
    coupons: CouponConfig,
    rates: RateConfig,
}

impl Pricer {
    /// Creates a pricer, validating both configurations first.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] if either configuration violates its
    /// semantic rules.
    pub fn new(coupons: CouponConfig, rates: RateConfig) -> Result<Self, ConfigError> {
        coupons.validate()?;
        rates.validate()?;
        Ok(Self { coupons, rates })
    }

    /// Delivery cost for one package before any discount.
    pub fn cost_before_discount(&self, package: &Package, base_delivery_cost: f64) -> f64 {
        base_delivery_cost
            + self.rates.weight * package.weight()
            + self.rates.distance * package.distance()
    }

    /// Discount amount for one package given its pre-discount cost.
    ///
    /// Zero when the package has no offer code, the code is unknown, or
    /// any coupon condition fails.
    pub fn discount_for(&self, package: &Package, cost_before_discount: f64) -> f64 {
        let Some(code) = package.offer_code() else {
            return 0.0;
        };
        match self.coupons.find(code) {
            Some(coupon) if coupon.applies_to(package) => {
                cost_before_discount * coupon.discount / 100.0
            }
            _ => 0.0,
        }
    }

    /// Prices a whole batch, preserving batch order.
    pub fn bill(&self, packages: &[Package], base_delivery_cost: f64) -> Vec<Bill> {
        packages
            .iter()
            .map(|package| {
                let cost = self.cost_before_discount(package, base_delivery_cost);
                let discount = self.discount_for(package, cost);
                Bill {
                    package_id: package.id().to_string(),
                    discount,
                    total_cost: cost - discount,
                }
            })
            .collect()
    }
}
