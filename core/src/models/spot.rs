//! Spot ledger
//!
//! A [`Level`] owns an ordered collection of [`Spot`]s and is the single
//! authority over their occupancy flags. Every spot in a level shares the
//! level's class restriction.
//!
//! # Critical Invariants
//!
//! 1. `spot.compact_only == level.reserved_for_compact` for every spot
//!    (enforced by construction: spots are only created by their level)
//! 2. Occupancy is mutated only through `occupy` / `release`; double
//!    occupy and double release are rejected, never silently accepted
//! 3. `find_available` is deterministic: lowest index wins, so allocation
//!    is reproducible under test
//! 4. Side effects are confined to the targeted spot

use crate::models::vehicle::VehicleClass;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during ledger operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("spot {spot_id} is already occupied by session {session_id}")]
    AlreadyOccupied { spot_id: String, session_id: String },

    #[error("spot {spot_id} is not occupied")]
    NotOccupied { spot_id: String },

    #[error("no spot with id {spot_id}")]
    UnknownSpot { spot_id: String },
}

/// A single physical parking location.
///
/// Created at facility setup and never destroyed during normal operation.
/// Holds a non-owning back-reference (by id) to the occupying session,
/// cleared on release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spot {
    /// Deterministic identifier assigned at setup, e.g. "L1-3"
    id: String,

    /// Whether only compact vehicles may occupy this spot
    compact_only: bool,

    /// Occupancy flag, the only mutable shared state in the system
    occupied: bool,

    /// Id of the occupying session, if any
    session_id: Option<String>,
}

impl Spot {
    fn new(id: String, compact_only: bool) -> Self {
        Self {
            id,
            compact_only,
            occupied: false,
            session_id: None,
        }
    }

    /// Get spot ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this spot is restricted to compact vehicles
    pub fn is_compact_only(&self) -> bool {
        self.compact_only
    }

    /// Whether this spot is currently occupied
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Id of the occupying session, if any
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Whether a vehicle of the given class may occupy this spot
    pub fn accepts(&self, class: VehicleClass) -> bool {
        self.compact_only == (class == VehicleClass::Compact)
    }
}

/// A group of spots uniformly restricted to one vehicle class.
///
/// # Example
/// ```
/// use parking_core_rs::{Level, VehicleClass};
///
/// let level = Level::new("L1", true, 3);
/// assert_eq!(level.available_count(), 3);
/// assert!(level.find_available(VehicleClass::Compact).is_some());
/// assert!(level.find_available(VehicleClass::Standard).is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Level identifier, unique within the facility
    id: String,

    /// Class restriction shared by every spot in this level
    reserved_for_compact: bool,

    /// Ordered spots; index order is the allocation tie-break
    spots: Vec<Spot>,
}

impl Level {
    /// Create a level with `num_spots` spots, all inheriting the level's
    /// class restriction. Spot ids are `"{level_id}-{index}"`.
    pub fn new(id: &str, reserved_for_compact: bool, num_spots: usize) -> Self {
        let spots = (0..num_spots)
            .map(|i| Spot::new(format!("{id}-{i}"), reserved_for_compact))
            .collect();

        Self {
            id: id.to_string(),
            reserved_for_compact,
            spots,
        }
    }

    /// Get level ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this level serves compact vehicles
    pub fn is_reserved_for_compact(&self) -> bool {
        self.reserved_for_compact
    }

    /// Whether this level serves the given class at all
    pub fn serves(&self, class: VehicleClass) -> bool {
        self.reserved_for_compact == (class == VehicleClass::Compact)
    }

    /// Get the spots in index order
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Number of free spots in this level
    pub fn available_count(&self) -> usize {
        self.spots.iter().filter(|s| !s.is_occupied()).count()
    }

    /// Number of occupied spots in this level
    pub fn occupied_count(&self) -> usize {
        self.spots.iter().filter(|s| s.is_occupied()).count()
    }

    /// Total number of spots in this level
    pub fn total_spots(&self) -> usize {
        self.spots.len()
    }

    /// Find the lowest-indexed free spot eligible for `class`.
    ///
    /// Deterministic: stable index order makes allocation reproducible.
    /// Returns `None` if the level does not serve the class or has no
    /// free spot.
    pub fn find_available(&self, class: VehicleClass) -> Option<&Spot> {
        self.spots
            .iter()
            .find(|s| !s.is_occupied() && s.accepts(class))
    }

    /// Mark a spot occupied and link the session.
    ///
    /// Rejects a second occupy without an intervening release — double
    /// occupancy is an invariant violation, not a no-op.
    pub fn occupy(&mut self, spot_id: &str, session_id: &str) -> Result<(), LedgerError> {
        let spot = self.spot_mut(spot_id)?;
        if spot.occupied {
            return Err(LedgerError::AlreadyOccupied {
                spot_id: spot_id.to_string(),
                // Occupied flag and session link are set together, so the
                // link is always present here.
                session_id: spot.session_id.clone().unwrap_or_default(),
            });
        }

        spot.occupied = true;
        spot.session_id = Some(session_id.to_string());
        Ok(())
    }

    /// Clear a spot's occupancy and unlink the session.
    pub fn release(&mut self, spot_id: &str) -> Result<(), LedgerError> {
        let spot = self.spot_mut(spot_id)?;
        if !spot.occupied {
            return Err(LedgerError::NotOccupied {
                spot_id: spot_id.to_string(),
            });
        }

        spot.occupied = false;
        spot.session_id = None;
        Ok(())
    }

    /// Whether this level owns the given spot id
    pub fn contains_spot(&self, spot_id: &str) -> bool {
        self.spots.iter().any(|s| s.id() == spot_id)
    }

    fn spot_mut(&mut self, spot_id: &str) -> Result<&mut Spot, LedgerError> {
        self.spots
            .iter_mut()
            .find(|s| s.id() == spot_id)
            .ok_or_else(|| LedgerError::UnknownSpot {
                spot_id: spot_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spots_inherit_level_restriction() {
        let level = Level::new("L1", true, 4);
        for spot in level.spots() {
            assert!(spot.is_compact_only());
        }

        let level = Level::new("L2", false, 4);
        for spot in level.spots() {
            assert!(!spot.is_compact_only());
        }
    }

    #[test]
    fn test_find_available_lowest_index_first() {
        let mut level = Level::new("L1", true, 3);

        let first = level.find_available(VehicleClass::Compact).unwrap();
        assert_eq!(first.id(), "L1-0");

        level.occupy("L1-0", "s1").unwrap();
        let next = level.find_available(VehicleClass::Compact).unwrap();
        assert_eq!(next.id(), "L1-1");
    }

    #[test]
    fn test_find_available_rejects_wrong_class() {
        let level = Level::new("L1", true, 3);
        assert!(level.find_available(VehicleClass::Standard).is_none());
    }

    #[test]
    fn test_occupy_then_release_round_trip() {
        let mut level = Level::new("L1", true, 2);
        assert_eq!(level.available_count(), 2);

        level.occupy("L1-0", "s1").unwrap();
        assert_eq!(level.available_count(), 1);
        assert_eq!(level.spots()[0].session_id(), Some("s1"));

        level.release("L1-0").unwrap();
        assert_eq!(level.available_count(), 2);
        assert_eq!(level.spots()[0].session_id(), None);
    }

    #[test]
    fn test_double_occupy_rejected() {
        let mut level = Level::new("L1", true, 1);
        level.occupy("L1-0", "s1").unwrap();

        let err = level.occupy("L1-0", "s2").unwrap_err();
        assert_eq!(
            err,
            LedgerError::AlreadyOccupied {
                spot_id: "L1-0".to_string(),
                session_id: "s1".to_string(),
            }
        );
        // First session still holds the spot
        assert_eq!(level.spots()[0].session_id(), Some("s1"));
    }

    #[test]
    fn test_double_release_rejected() {
        let mut level = Level::new("L1", false, 1);
        level.occupy("L1-0", "s1").unwrap();
        level.release("L1-0").unwrap();

        let err = level.release("L1-0").unwrap_err();
        assert_eq!(
            err,
            LedgerError::NotOccupied {
                spot_id: "L1-0".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_spot() {
        let mut level = Level::new("L1", false, 1);
        let err = level.occupy("L9-0", "s1").unwrap_err();
        assert_eq!(
            err,
            LedgerError::UnknownSpot {
                spot_id: "L9-0".to_string(),
            }
        );
    }

    #[test]
    fn test_occupy_touches_only_target_spot() {
        let mut level = Level::new("L1", true, 3);
        level.occupy("L1-1", "s1").unwrap();

        assert!(!level.spots()[0].is_occupied());
        assert!(level.spots()[1].is_occupied());
        assert!(!level.spots()[2].is_occupied());
    }
}
