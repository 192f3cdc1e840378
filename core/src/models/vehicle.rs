//! Vehicle model and classifier
//!
//! A vehicle is classified as Compact or Standard on arrival. The class
//! determines the hourly rate and which spots the vehicle may occupy.
//!
//! Rates are policy constants held in [`RatePolicy`], never hard-coded in
//! the engine. Classification is a pure, total function: every class maps
//! to exactly one rate, and there are no error conditions here — malformed
//! class input is the caller's input layer's problem.
//!
//! CRITICAL: All money values are i64 (whole currency units)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle class, fixed at creation.
///
/// Determines hourly rate and spot eligibility. Immutable once the
/// vehicle exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleClass {
    /// Small vehicle, eligible for compact-only spots
    Compact,

    /// Full-size vehicle, eligible for standard spots
    Standard,
}

impl VehicleClass {
    /// All classes, in declaration order. Used by setup validation to
    /// check every class has a level.
    pub const ALL: [VehicleClass; 2] = [VehicleClass::Compact, VehicleClass::Standard];
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleClass::Compact => write!(f, "Compact"),
            VehicleClass::Standard => write!(f, "Standard"),
        }
    }
}

/// Hourly rate table, one flat rate per vehicle class.
///
/// Policy constants live here so the engine never embeds pricing. The
/// default mirrors the observed tariff: 5/hour compact, 10/hour standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePolicy {
    /// Hourly rate for compact vehicles
    pub compact_hourly: i64,

    /// Hourly rate for standard vehicles
    pub standard_hourly: i64,
}

impl Default for RatePolicy {
    fn default() -> Self {
        Self {
            compact_hourly: 5,
            standard_hourly: 10,
        }
    }
}

impl RatePolicy {
    /// Look up the flat hourly rate for a class.
    pub fn rate_for(&self, class: VehicleClass) -> i64 {
        match class {
            VehicleClass::Compact => self.compact_hourly,
            VehicleClass::Standard => self.standard_hourly,
        }
    }

    /// Classify an arriving vehicle: class plus its hourly rate.
    ///
    /// Pure and total — no error conditions.
    pub fn classify(&self, class: VehicleClass) -> (VehicleClass, i64) {
        (class, self.rate_for(class))
    }
}

/// A vehicle requesting or occupying a spot.
///
/// Make and model are descriptive only; they flow onto the receipt but
/// never affect allocation or billing. The hourly rate is derived from
/// the class at creation and may be overridden per vehicle.
///
/// # Example
/// ```
/// use parking_core_rs::{RatePolicy, Vehicle, VehicleClass};
///
/// let rates = RatePolicy::default();
/// let car = Vehicle::new("Honda", "Fit", VehicleClass::Compact, &rates);
/// assert_eq!(car.hourly_rate(), 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique vehicle identifier (UUID)
    id: String,

    /// Manufacturer, descriptive only
    make: String,

    /// Model name, descriptive only
    model: String,

    /// Vehicle class, fixed at creation
    class: VehicleClass,

    /// Flat hourly rate (i64 whole units), derived from class
    hourly_rate: i64,
}

impl Vehicle {
    /// Create a vehicle, deriving its rate from the policy table.
    pub fn new(make: &str, model: &str, class: VehicleClass, rates: &RatePolicy) -> Self {
        let (class, hourly_rate) = rates.classify(class);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            make: make.to_string(),
            model: model.to_string(),
            class,
            hourly_rate,
        }
    }

    /// Override the derived hourly rate (builder pattern).
    ///
    /// # Panics
    /// Panics if the rate is negative.
    pub fn with_hourly_rate(mut self, hourly_rate: i64) -> Self {
        assert!(hourly_rate >= 0, "hourly rate must be non-negative");
        self.hourly_rate = hourly_rate;
        self
    }

    /// Get vehicle ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get manufacturer
    pub fn make(&self) -> &str {
        &self.make
    }

    /// Get model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get vehicle class
    pub fn class(&self) -> VehicleClass {
        self.class
    }

    /// Get flat hourly rate (i64 whole units)
    pub fn hourly_rate(&self) -> i64 {
        self.hourly_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let rates = RatePolicy::default();
        assert_eq!(rates.rate_for(VehicleClass::Compact), 5);
        assert_eq!(rates.rate_for(VehicleClass::Standard), 10);
    }

    #[test]
    fn test_classify_is_total() {
        let rates = RatePolicy::default();
        for class in VehicleClass::ALL {
            let (c, rate) = rates.classify(class);
            assert_eq!(c, class);
            assert_eq!(rate, rates.rate_for(class));
        }
    }

    #[test]
    fn test_vehicle_derives_rate_from_class() {
        let rates = RatePolicy::default();
        let compact = Vehicle::new("Honda", "Fit", VehicleClass::Compact, &rates);
        let standard = Vehicle::new("Ford", "F-150", VehicleClass::Standard, &rates);

        assert_eq!(compact.hourly_rate(), 5);
        assert_eq!(standard.hourly_rate(), 10);
    }

    #[test]
    fn test_rate_override() {
        let rates = RatePolicy::default();
        let car = Vehicle::new("Honda", "Fit", VehicleClass::Compact, &rates).with_hourly_rate(7);

        assert_eq!(car.hourly_rate(), 7);
        assert_eq!(car.class(), VehicleClass::Compact);
    }

    #[test]
    fn test_custom_policy_table() {
        let rates = RatePolicy {
            compact_hourly: 3,
            standard_hourly: 12,
        };
        let car = Vehicle::new("Fiat", "500", VehicleClass::Compact, &rates);
        assert_eq!(car.hourly_rate(), 3);
    }

    #[test]
    fn test_vehicle_ids_are_unique() {
        let rates = RatePolicy::default();
        let a = Vehicle::new("A", "A", VehicleClass::Compact, &rates);
        let b = Vehicle::new("A", "A", VehicleClass::Compact, &rates);
        assert_ne!(a.id(), b.id());
    }
}
