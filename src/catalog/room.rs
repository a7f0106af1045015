//! Bookable rooms and status derivation
//!
//! Room attributes are static catalog data; the current status is never
//! stored, it is derived on demand from the confirmed reservation slots plus
//! the operator-set maintenance flag.

use crate::scheduler::Slot;
use crate::types::{RoomCategory, RoomId, RoomStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookable gaming room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Catalog slug identifying the room
    pub id: RoomId,
    /// Human-readable name of the room
    pub name: String,
    /// Room category, which drives pricing tiers and game compatibility
    pub category: RoomCategory,
    /// Price per hour in rubles, always positive
    pub hourly_rate: i64,
    /// Hardware specs shown to members, in display order
    pub specs: Vec<String>,
}

impl Room {
    /// Create a new room
    pub fn new(
        id: impl Into<RoomId>,
        name: impl Into<String>,
        category: RoomCategory,
        hourly_rate: i64,
        specs: Vec<String>,
    ) -> Self {
        Self { id: id.into(), name: name.into(), category, hourly_rate, specs }
    }

    /// Derive the room's current status
    ///
    /// Maintenance overrides everything. Otherwise the room is Occupied if a
    /// confirmed slot covers `now`, Reserved if any confirmed slot is still
    /// ahead, and Free when nothing active remains.
    pub fn status(&self, maintenance: bool, confirmed_slots: &[Slot], now: DateTime<Utc>) -> RoomStatus {
        if maintenance {
            return RoomStatus::Maintenance;
        }
        if confirmed_slots.iter().any(|slot| slot.covers(now)) {
            return RoomStatus::Occupied;
        }
        if confirmed_slots.iter().any(|slot| !slot.has_elapsed(now)) {
            return RoomStatus::Reserved;
        }
        RoomStatus::Free
    }

    /// Validate the room's invariants
    pub fn validate(&self) -> Result<(), String> {
        if self.id.as_str().is_empty() {
            return Err("room id must not be empty".to_string());
        }
        if self.hourly_rate <= 0 {
            return Err(format!("room {} must have a positive hourly rate", self.id));
        }
        Ok(())
    }
}

/// A room paired with its derived status, as returned by catalog listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomView {
    /// The underlying catalog room
    #[serde(flatten)]
    pub room: Room,
    /// Status derived at listing time
    pub status: RoomStatus,
}
