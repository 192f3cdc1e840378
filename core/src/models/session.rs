//! Parking session model
//!
//! A session records one vehicle's occupancy of one spot from park to
//! settlement. It is created by a successful `park`, transitions
//! Active → Settled exactly once on a successful `leave`, and is never
//! mutated otherwise. The spot reference is non-owning and never
//! reassigned.

use crate::models::vehicle::Vehicle;
use crate::payment::PaymentMethod;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Session lifecycle state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Vehicle occupies its spot; payment not yet accepted
    Active,

    /// Payment accepted and spot released (terminal)
    Settled {
        /// Billed duration in hours
        duration_hours: i64,

        /// Amount actually paid (equals the amount due on acceptance)
        amount_paid: i64,

        /// How the tender was presented; recorded for reporting only
        method: PaymentMethod,
    },
}

/// Errors that can occur during session transitions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("session already settled")]
    AlreadySettled,
}

/// One vehicle's occupancy of one spot, park to settlement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingSession {
    /// Unique session identifier (UUID)
    id: String,

    /// The parked vehicle
    vehicle: Vehicle,

    /// Assigned spot id; set at creation, never reassigned
    spot_id: String,

    /// Level owning the assigned spot
    level_id: String,

    /// Current lifecycle state
    state: SessionState,
}

impl ParkingSession {
    /// Create an active session for a freshly occupied spot.
    pub(crate) fn new(vehicle: Vehicle, spot_id: &str, level_id: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            vehicle,
            spot_id: spot_id.to_string(),
            level_id: level_id.to_string(),
            state: SessionState::Active,
        }
    }

    /// Get session ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the parked vehicle
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Get the assigned spot id
    pub fn spot_id(&self) -> &str {
        &self.spot_id
    }

    /// Get the id of the level owning the assigned spot
    pub fn level_id(&self) -> &str {
        &self.level_id
    }

    /// Get current state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether the session is still active
    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active)
    }

    /// Transition Active → Settled. Settling twice is rejected, not
    /// silently accepted.
    pub(crate) fn settle(
        &mut self,
        duration_hours: i64,
        amount_paid: i64,
        method: PaymentMethod,
    ) -> Result<(), SessionError> {
        if !self.is_active() {
            return Err(SessionError::AlreadySettled);
        }

        self.state = SessionState::Settled {
            duration_hours,
            amount_paid,
            method,
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::{RatePolicy, VehicleClass};

    fn test_session() -> ParkingSession {
        let rates = RatePolicy::default();
        let vehicle = Vehicle::new("Honda", "Fit", VehicleClass::Compact, &rates);
        ParkingSession::new(vehicle, "L1-0", "L1")
    }

    #[test]
    fn test_new_session_is_active() {
        let session = test_session();
        assert!(session.is_active());
        assert_eq!(session.spot_id(), "L1-0");
        assert_eq!(session.level_id(), "L1");
    }

    #[test]
    fn test_settle_transitions_once() {
        let mut session = test_session();

        session.settle(3, 15, PaymentMethod::Cash).unwrap();
        assert!(!session.is_active());
        assert_eq!(
            session.state(),
            &SessionState::Settled {
                duration_hours: 3,
                amount_paid: 15,
                method: PaymentMethod::Cash,
            }
        );
    }

    #[test]
    fn test_double_settle_rejected() {
        let mut session = test_session();
        session.settle(3, 15, PaymentMethod::Cash).unwrap();

        let err = session.settle(3, 15, PaymentMethod::Card).unwrap_err();
        assert_eq!(err, SessionError::AlreadySettled);
    }
}
