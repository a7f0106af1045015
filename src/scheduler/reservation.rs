//! Reservation records and slot interval math
//!
//! A slot is the half-open interval `[start, start + duration)` a reservation
//! occupies on a room. Overlap is checked on half-open intervals, so a
//! session may begin exactly when the previous one ends.

use crate::types::{AccountId, GameId, ReservationId, ReservationStatus, RoomId};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The time window a reservation occupies on a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Session start
    pub start: DateTime<Utc>,
    /// Session length in whole hours
    pub duration_hours: u8,
}

impl Slot {
    /// Create a slot
    pub fn new(start: DateTime<Utc>, duration_hours: u8) -> Self {
        Self { start, duration_hours }
    }

    /// Exclusive end of the slot
    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::hours(i64::from(self.duration_hours))
    }

    /// Whether the slot covers the given instant
    pub fn covers(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end()
    }

    /// Whether this slot overlaps another on the half-open intervals
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// Whether the slot lies entirely in the past
    pub fn has_elapsed(&self, now: DateTime<Utc>) -> bool {
        self.end() <= now
    }
}

/// A confirmed, completed or cancelled booking of a room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique identifier for the reservation
    pub id: ReservationId,
    /// Room being booked
    pub room_id: RoomId,
    /// Game the member intends to play
    pub game_id: GameId,
    /// Paying account
    pub account_id: AccountId,
    /// Occupied time window
    pub slot: Slot,
    /// Price charged for the session, in rubles
    pub price: i64,
    /// Lifecycle state
    pub status: ReservationStatus,
    /// When the reservation was created
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Create a new confirmed reservation
    pub fn new(
        room_id: RoomId,
        game_id: GameId,
        account_id: AccountId,
        slot: Slot,
        price: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ReservationId::new(),
            room_id,
            game_id,
            account_id,
            slot,
            price,
            status: ReservationStatus::Confirmed,
            created_at,
        }
    }

    /// Whether the reservation still holds its slot
    pub fn is_confirmed(&self) -> bool {
        self.status == ReservationStatus::Confirmed
    }
}
