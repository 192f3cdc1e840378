//! Facility topology
//!
//! A [`Facility`] exclusively owns its [`Level`]s and aggregates their
//! availability. The simplest configuration is the observed two-level lot
//! (one compact-only, one standard-only), but the topology generalizes to
//! N levels per class; allocation scans levels in declaration order.

use crate::models::spot::{LedgerError, Level};
use crate::models::vehicle::VehicleClass;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors in facility configuration or lookup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    /// No level is configured for the class. A configuration error,
    /// fatal at setup — never a runtime retry case.
    #[error("no level configured for {0} vehicles")]
    NoLevelForClass(VehicleClass),
}

/// A collection of levels making up one parking facility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    /// Levels in declaration order; order is the allocation tie-break
    /// across levels serving the same class
    levels: Vec<Level>,
}

impl Facility {
    /// Create a facility from its levels.
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    /// Get the levels in declaration order
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// First level serving the given class.
    ///
    /// Fails with [`TopologyError::NoLevelForClass`] if the facility has
    /// no level for that class.
    pub fn level_for(&self, class: VehicleClass) -> Result<&Level, TopologyError> {
        self.levels
            .iter()
            .find(|l| l.serves(class))
            .ok_or(TopologyError::NoLevelForClass(class))
    }

    /// All levels serving the given class, in declaration order.
    pub fn levels_for(&self, class: VehicleClass) -> impl Iterator<Item = &Level> {
        self.levels.iter().filter(move |l| l.serves(class))
    }

    /// Number of free spots eligible for the given class.
    pub fn available_for(&self, class: VehicleClass) -> usize {
        self.levels_for(class).map(Level::available_count).sum()
    }

    /// Total free spots across all levels. O(number of levels) given
    /// per-level counts.
    pub fn total_available(&self) -> usize {
        self.levels.iter().map(Level::available_count).sum()
    }

    /// Total spots across all levels.
    pub fn total_spots(&self) -> usize {
        self.levels.iter().map(Level::total_spots).sum()
    }

    /// Total occupied spots across all levels.
    pub fn occupied_count(&self) -> usize {
        self.levels.iter().map(Level::occupied_count).sum()
    }

    /// Occupy a spot, dispatching to the level that owns it.
    pub fn occupy(&mut self, spot_id: &str, session_id: &str) -> Result<(), LedgerError> {
        self.owning_level_mut(spot_id)?.occupy(spot_id, session_id)
    }

    /// Release a spot, dispatching to the level that owns it.
    pub fn release(&mut self, spot_id: &str) -> Result<(), LedgerError> {
        self.owning_level_mut(spot_id)?.release(spot_id)
    }

    fn owning_level_mut(&mut self, spot_id: &str) -> Result<&mut Level, LedgerError> {
        self.levels
            .iter_mut()
            .find(|l| l.contains_spot(spot_id))
            .ok_or_else(|| LedgerError::UnknownSpot {
                spot_id: spot_id.to_string(),
            })
    }
}
