//! Audit events
//!
//! Every state change and every rejection is appended to an in-memory
//! [`EventLog`]. The log exists for auditing and debugging; adapters may
//! drain it for reporting, but the core never persists it.
//!
//! Events carry a sequence number assigned by the log, so ordering is
//! recoverable even after filtering.

use crate::models::vehicle::VehicleClass;
use crate::payment::{PaymentMethod, PaymentOutcome};

/// A state change or rejection inside the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A vehicle was assigned a spot and an active session was created
    VehicleParked {
        seq: u64,
        session_id: String,
        spot_id: String,
        class: VehicleClass,
    },

    /// A park request found no eligible free spot; nothing was mutated
    ParkRejected { seq: u64, class: VehicleClass },

    /// A leave attempt failed payment validation; session stays active
    PaymentRejected {
        seq: u64,
        session_id: String,
        outcome: PaymentOutcome,
        amount_due: i64,
        tendered: i64,
        method: PaymentMethod,
    },

    /// Payment accepted, spot released, session settled
    VehicleLeft {
        seq: u64,
        session_id: String,
        spot_id: String,
        amount_paid: i64,
        duration_hours: i64,
        method: PaymentMethod,
    },

    /// An operator took an occupancy snapshot
    InspectionTaken {
        seq: u64,
        total_spots: usize,
        occupied_spots: usize,
        available_spots: usize,
    },
}

impl Event {
    /// Get the log-assigned sequence number
    pub fn seq(&self) -> u64 {
        match self {
            Event::VehicleParked { seq, .. }
            | Event::ParkRejected { seq, .. }
            | Event::PaymentRejected { seq, .. }
            | Event::VehicleLeft { seq, .. }
            | Event::InspectionTaken { seq, .. } => *seq,
        }
    }

    /// Get the session this event concerns, if any
    pub fn session_id(&self) -> Option<&str> {
        match self {
            Event::VehicleParked { session_id, .. }
            | Event::PaymentRejected { session_id, .. }
            | Event::VehicleLeft { session_id, .. } => Some(session_id),
            Event::ParkRejected { .. } | Event::InspectionTaken { .. } => None,
        }
    }
}

/// Append-only log of engine events.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
    next_seq: u64,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, assigning it the next sequence number.
    ///
    /// The closure receives the assigned sequence number and builds the
    /// event, so callers cannot forge out-of-order numbering.
    pub(crate) fn record(&mut self, build: impl FnOnce(u64) -> Event) {
        let event = build(self.next_seq);
        self.next_seq += 1;
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events in order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events for a specific session
    pub fn events_for_session(&self, session_id: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.session_id() == Some(session_id))
            .collect()
    }
}
