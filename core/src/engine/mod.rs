//! Allocation & settlement engine
//!
//! Orchestrates the two mutating operations of the facility:
//!
//! ```text
//! park:  classify → scan eligible levels → lowest free spot → occupy
//! leave: guard session → compute fee → validate tender → release → settle
//! ```
//!
//! Both operations are atomic: any failure aborts with no partial
//! mutation. In `park`, the occupy step is the only mutation and is
//! guarded by the availability scan. In `leave`, the release is the
//! single commit point — it runs only after payment validation accepts,
//! so a rejected tender leaves the session active and the spot occupied
//! for the caller to retry.
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (whole currency units)
//! 2. Allocation is deterministic: declaration-ordered levels, then
//!    lowest spot index
//! 3. Mutating operations take `&mut self`; the borrow checker enforces
//!    the single-writer discipline, and shared adapters wrap the engine
//!    in a `Mutex`
//! 4. The core never blocks on input or I/O; duration and tender arrive
//!    already resolved from the adapter

use crate::fees::{self, FeeError};
use crate::models::event::{Event, EventLog};
use crate::models::facility::Facility;
use crate::models::session::{ParkingSession, SessionError};
use crate::models::spot::{LedgerError, Level};
use crate::models::vehicle::{RatePolicy, Vehicle, VehicleClass};
use crate::payment::{PaymentAttempt, PaymentMethod, PaymentOutcome};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

// ============================================================================
// Configuration Types
// ============================================================================

/// Configuration for one level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Level identifier, unique within the facility
    pub id: String,

    /// Whether every spot in this level is compact-only
    pub reserved_for_compact: bool,

    /// Number of spots to create
    pub num_spots: usize,
}

/// Complete facility configuration.
///
/// The default mirrors the observed two-level lot: 200 compact spots on
/// the first level, 100 standard spots on the second, rates 5/10.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityConfig {
    /// Levels in allocation order
    pub levels: Vec<LevelConfig>,

    /// Hourly rate table
    pub rates: RatePolicy,
}

impl FacilityConfig {
    /// Two-level configuration: one compact level, one standard level.
    pub fn two_level(compact_spots: usize, standard_spots: usize) -> Self {
        Self {
            levels: vec![
                LevelConfig {
                    id: "L1".to_string(),
                    reserved_for_compact: true,
                    num_spots: compact_spots,
                },
                LevelConfig {
                    id: "L2".to_string(),
                    reserved_for_compact: false,
                    num_spots: standard_spots,
                },
            ],
            rates: RatePolicy::default(),
        }
    }
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self::two_level(200, 100)
    }
}

// ============================================================================
// Errors and Results
// ============================================================================

/// Errors surfaced by the engine.
///
/// Configuration errors (`NoLevelForClass`, `DuplicateLevelId`) are fatal
/// at setup. Allocation and payment errors are reported to the caller,
/// which owns all retry policy. Ledger, fee, and session variants are
/// invariant violations, never silently coerced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("no level configured for {0} vehicles")]
    NoLevelForClass(VehicleClass),

    #[error("duplicate level id {0}")]
    DuplicateLevelId(String),

    #[error("no available spot for a {0} vehicle")]
    NoAvailableSpot(VehicleClass),

    #[error("unknown session {0}")]
    UnknownSession(String),

    #[error("session {0} is not active")]
    SessionNotActive(String),

    #[error("payment rejected ({outcome}): due {amount_due}, tendered {tendered}")]
    PaymentRejected {
        outcome: PaymentOutcome,
        amount_due: i64,
        tendered: i64,
    },

    #[error("fee error: {0}")]
    Fee(#[from] FeeError),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("session error: {0}")]
    Session(#[from] SessionError),
}

/// Proof of a settled session, returned by a successful `leave`.
///
/// Adapters format and display it; the core never prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Settled session id
    pub session_id: String,

    /// Class of the departing vehicle
    pub vehicle_class: VehicleClass,

    /// Vehicle make, descriptive
    pub make: String,

    /// Vehicle model, descriptive
    pub model: String,

    /// Billed duration in hours
    pub duration_hours: i64,

    /// Amount owed
    pub amount_due: i64,

    /// Amount tendered (equals `amount_due` on acceptance)
    pub tendered: i64,

    /// How the tender was presented
    pub method: PaymentMethod,

    /// Final ladder outcome (always `Accepted` on a receipt)
    pub outcome: PaymentOutcome,
}

/// Point-in-time occupancy snapshot, in the style of an operator
/// inspection record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OccupancyReport {
    pub total_spots: usize,
    pub occupied_spots: usize,
    pub available_spots: usize,
}

impl OccupancyReport {
    /// Occupancy as a percentage of total spots. Zero for an empty
    /// facility rather than a division error.
    pub fn occupancy_rate(&self) -> f64 {
        if self.total_spots == 0 {
            return 0.0;
        }
        self.occupied_spots as f64 / self.total_spots as f64 * 100.0
    }
}

// ============================================================================
// Engine
// ============================================================================

/// The allocation & settlement engine for one facility.
///
/// # Example
/// ```
/// use parking_core_rs::{FacilityConfig, ParkingEngine, PaymentMethod, VehicleClass};
///
/// let mut engine = ParkingEngine::new(FacilityConfig::two_level(2, 1)).unwrap();
///
/// let session_id = engine.park_class(VehicleClass::Compact).unwrap();
/// assert_eq!(engine.availability(VehicleClass::Compact), 1);
///
/// // rate 5/hour * 3 hours = 15
/// let receipt = engine
///     .leave(&session_id, 3, 15, PaymentMethod::Cash)
///     .unwrap();
/// assert_eq!(receipt.amount_due, 15);
/// assert_eq!(engine.availability(VehicleClass::Compact), 2);
/// ```
#[derive(Debug)]
pub struct ParkingEngine {
    facility: Facility,
    rates: RatePolicy,
    sessions: HashMap<String, ParkingSession>,
    events: EventLog,
}

impl ParkingEngine {
    /// Build the engine from configuration.
    ///
    /// Validates the topology at setup: level ids must be unique, and
    /// every vehicle class must have at least one level. Both are fatal
    /// configuration errors, never runtime retry cases.
    pub fn new(config: FacilityConfig) -> Result<Self, EngineError> {
        let mut seen = std::collections::HashSet::new();
        for level in &config.levels {
            if !seen.insert(level.id.clone()) {
                return Err(EngineError::DuplicateLevelId(level.id.clone()));
            }
        }

        let levels: Vec<Level> = config
            .levels
            .iter()
            .map(|l| Level::new(&l.id, l.reserved_for_compact, l.num_spots))
            .collect();
        let facility = Facility::new(levels);

        for class in VehicleClass::ALL {
            if facility.level_for(class).is_err() {
                return Err(EngineError::NoLevelForClass(class));
            }
        }

        Ok(Self {
            facility,
            rates: config.rates,
            sessions: HashMap::new(),
            events: EventLog::new(),
        })
    }

    /// Park a vehicle: classify, scan eligible levels in order, occupy
    /// the lowest-indexed free spot, create an active session.
    ///
    /// Returns the new session id, or [`EngineError::NoAvailableSpot`]
    /// with no state mutated (beyond the audit log).
    pub fn park(&mut self, vehicle: Vehicle) -> Result<String, EngineError> {
        let class = vehicle.class();

        let found = self.facility.levels_for(class).find_map(|level| {
            level
                .find_available(class)
                .map(|spot| (level.id().to_string(), spot.id().to_string()))
        });

        let Some((level_id, spot_id)) = found else {
            self.events.record(|seq| Event::ParkRejected { seq, class });
            return Err(EngineError::NoAvailableSpot(class));
        };

        let session = ParkingSession::new(vehicle, &spot_id, &level_id);
        let session_id = session.id().to_string();

        // The availability scan guards this, so occupy cannot fail short
        // of an invariant breach; propagate rather than mask if it does.
        self.facility.occupy(&spot_id, &session_id)?;
        self.sessions.insert(session_id.clone(), session);

        self.events.record(|seq| Event::VehicleParked {
            seq,
            session_id: session_id.clone(),
            spot_id,
            class,
        });

        Ok(session_id)
    }

    /// Park an anonymous vehicle of the given class.
    ///
    /// Convenience for adapters that collect no make/model.
    pub fn park_class(&mut self, class: VehicleClass) -> Result<String, EngineError> {
        let vehicle = Vehicle::new("", "", class, &self.rates);
        self.park(vehicle)
    }

    /// Settle a session: compute the fee, validate the tender, and on
    /// acceptance release the spot and mark the session settled.
    ///
    /// On any rejected outcome the session stays active and the spot
    /// stays occupied; the caller re-invokes with a corrected tender.
    pub fn leave(
        &mut self,
        session_id: &str,
        duration_hours: i64,
        tendered: i64,
        method: PaymentMethod,
    ) -> Result<Receipt, EngineError> {
        let session = self
            .sessions
            .get(session_id)
            .ok_or_else(|| EngineError::UnknownSession(session_id.to_string()))?;

        if !session.is_active() {
            return Err(EngineError::SessionNotActive(session_id.to_string()));
        }

        let amount_due = fees::amount_due(session.vehicle().hourly_rate(), duration_hours)?;
        let attempt = PaymentAttempt::evaluate(amount_due, tendered, method);

        if !attempt.is_accepted() {
            let outcome = attempt.outcome();
            self.events.record(|seq| Event::PaymentRejected {
                seq,
                session_id: session_id.to_string(),
                outcome,
                amount_due,
                tendered,
                method,
            });
            return Err(EngineError::PaymentRejected {
                outcome,
                amount_due,
                tendered,
            });
        }

        // Commit point: validation accepted, release and settle together
        let spot_id = session.spot_id().to_string();
        self.facility.release(&spot_id)?;

        let session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| EngineError::UnknownSession(session_id.to_string()))?;
        session.settle(duration_hours, tendered, method)?;

        let receipt = Receipt {
            session_id: session_id.to_string(),
            vehicle_class: session.vehicle().class(),
            make: session.vehicle().make().to_string(),
            model: session.vehicle().model().to_string(),
            duration_hours,
            amount_due,
            tendered,
            method,
            outcome: attempt.outcome(),
        };

        self.events.record(|seq| Event::VehicleLeft {
            seq,
            session_id: session_id.to_string(),
            spot_id,
            amount_paid: tendered,
            duration_hours,
            method,
        });

        Ok(receipt)
    }

    /// Number of free spots eligible for the given class. Read-only.
    pub fn availability(&self, class: VehicleClass) -> usize {
        self.facility.available_for(class)
    }

    /// Total free spots across all levels. Read-only.
    pub fn total_available(&self) -> usize {
        self.facility.total_available()
    }

    /// Get a session by id
    pub fn session(&self, session_id: &str) -> Option<&ParkingSession> {
        self.sessions.get(session_id)
    }

    /// Get the facility topology
    pub fn facility(&self) -> &Facility {
        &self.facility
    }

    /// Get the rate table in force
    pub fn rates(&self) -> &RatePolicy {
        &self.rates
    }

    /// Get the audit log
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Take an occupancy snapshot and record it in the audit log.
    pub fn inspect(&mut self) -> OccupancyReport {
        let report = OccupancyReport {
            total_spots: self.facility.total_spots(),
            occupied_spots: self.facility.occupied_count(),
            available_spots: self.facility.total_available(),
        };

        self.events.record(|seq| Event::InspectionTaken {
            seq,
            total_spots: report.total_spots,
            occupied_spots: report.occupied_spots,
            available_spots: report.available_spots,
        });

        report
    }
}
