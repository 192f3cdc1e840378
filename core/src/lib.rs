//! Parking Facility Core - Rust Engine
//!
//! Allocation-and-settlement engine for a typed parking facility:
//! vehicles occupy class-restricted spots across levels, accrue a flat
//! time-based fee, and must pass payment validation before release.
//!
//! # Architecture
//!
//! - **models**: Domain types (Vehicle, Spot, Level, Facility, Session, Event)
//! - **fees**: Pure fee calculation (rate x duration)
//! - **payment**: Tender validation ladder and payment records
//! - **engine**: Park / leave orchestration and availability queries
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (whole currency units)
//! 2. Allocation is deterministic (declaration-ordered levels, lowest
//!    spot index first)
//! 3. Failure paths mutate no occupancy or session state; retry policy
//!    belongs to the caller
//! 4. Mutating operations are serialized through `&mut self`; shared
//!    adapters wrap the engine in a `Mutex`

// Module declarations
pub mod engine;
pub mod fees;
pub mod models;
pub mod payment;

// Re-exports for convenience
pub use engine::{
    EngineError, FacilityConfig, LevelConfig, OccupancyReport, ParkingEngine, Receipt,
};
pub use fees::{amount_due, FeeError};
pub use models::{
    event::{Event, EventLog},
    facility::{Facility, TopologyError},
    session::{ParkingSession, SessionError, SessionState},
    spot::{LedgerError, Level, Spot},
    vehicle::{RatePolicy, Vehicle, VehicleClass},
};
pub use payment::{
    validate, PaymentAttempt, PaymentMethod, PaymentOutcome, MAX_TENDER,
};
