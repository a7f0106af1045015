//! Reservation scheduling and slot-conflict resolution
//!
//! The scheduler is the sole mutation point for the reservation collection.
//! Every booking request runs a fail-fast validation pipeline, and the
//! conflict check and insert happen inside one critical section so no other
//! request can interleave between check and commit on the same room.

use crate::booking::{BookingError, BookingResult};
use crate::catalog::{GameLibrary, RoomCatalog};
use crate::scheduler::{Reservation, Slot};
use crate::types::{AccountId, Clock, GameId, ReservationId, ReservationStatus, RoomId};
use chrono::Duration;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// Result of a cancellation request
///
/// Distinguishes a fresh transition from an idempotent no-op so the caller
/// knows whether a refund is owed.
#[derive(Debug, Clone)]
pub enum CancelOutcome {
    /// The reservation was Confirmed and has now been cancelled
    Cancelled(Reservation),
    /// The reservation was already Cancelled; nothing changed
    AlreadyCancelled(Reservation),
}

impl CancelOutcome {
    /// The reservation in its post-call state
    pub fn reservation(&self) -> &Reservation {
        match self {
            CancelOutcome::Cancelled(r) | CancelOutcome::AlreadyCancelled(r) => r,
        }
    }
}

/// Validates booking requests and manages the reservation collection
#[derive(Debug)]
pub struct ReservationScheduler {
    /// Room catalog for existence and maintenance checks
    catalog: Arc<RoomCatalog>,
    /// Game library for compatibility checks
    library: Arc<GameLibrary>,
    /// Source of the current time
    clock: Arc<dyn Clock>,
    /// Minimum lead time for member-initiated cancellation
    cancellation_lead: Duration,
    /// Bookable duration range in hours, inclusive
    duration_bounds: (u8, u8),
    /// All reservations, keyed by ID
    reservations: Mutex<HashMap<ReservationId, Reservation>>,
}

impl ReservationScheduler {
    /// Create a scheduler over the given catalog and library
    pub fn new(
        catalog: Arc<RoomCatalog>,
        library: Arc<GameLibrary>,
        clock: Arc<dyn Clock>,
        cancellation_lead: Duration,
        duration_bounds: (u8, u8),
    ) -> Self {
        Self {
            catalog,
            library,
            clock,
            cancellation_lead,
            duration_bounds,
            reservations: Mutex::new(HashMap::new()),
        }
    }

    /// Reserve a slot on a room
    ///
    /// Validation order, first violated rule wins:
    /// 1. room exists and is not under maintenance,
    /// 2. game is compatible with the room's category,
    /// 3. duration is in range and the start time is not in the past,
    /// 4. no confirmed reservation on the room overlaps the slot.
    pub fn reserve(
        &self,
        room_id: &RoomId,
        game_id: &GameId,
        account_id: AccountId,
        slot: Slot,
        price: i64,
    ) -> BookingResult<Reservation> {
        let room = self
            .catalog
            .get(room_id)
            .ok_or_else(|| BookingError::RoomNotFound(room_id.clone()))?;
        if self.catalog.in_maintenance(room_id) {
            return Err(BookingError::RoomUnavailable { room: room_id.clone() });
        }

        match self.library.is_compatible(game_id, room.category) {
            None => return Err(BookingError::GameNotFound(game_id.clone())),
            Some(false) => {
                return Err(BookingError::IncompatibleGame {
                    game: game_id.clone(),
                    category: room.category,
                })
            }
            Some(true) => {}
        }

        let (min_hours, max_hours) = self.duration_bounds;
        if slot.duration_hours < min_hours || slot.duration_hours > max_hours {
            return Err(BookingError::validation(format!(
                "duration must be between {} and {} hours, got {}",
                min_hours, max_hours, slot.duration_hours
            )));
        }
        let now = self.clock.now();
        if slot.start < now {
            return Err(BookingError::validation(format!(
                "start time {} is in the past",
                slot.start
            )));
        }

        // Conflict check and insert must not be separated by another request
        // touching the same room.
        let mut reservations = self.reservations.lock().expect("reservation lock poisoned");
        let conflict = reservations
            .values()
            .any(|r| r.room_id == *room_id && r.is_confirmed() && r.slot.overlaps(&slot));
        if conflict {
            debug!(room = %room_id, start = %slot.start, "slot conflict");
            return Err(BookingError::SlotConflict { room: room_id.clone() });
        }

        let reservation =
            Reservation::new(room_id.clone(), game_id.clone(), account_id, slot, price, now);
        info!(
            reservation = %reservation.id,
            room = %room_id,
            game = %game_id,
            start = %slot.start,
            hours = slot.duration_hours,
            price,
            "reservation confirmed"
        );
        reservations.insert(reservation.id, reservation.clone());
        Ok(reservation)
    }

    /// Cancel a reservation on a member's request
    ///
    /// Allowed only while the reservation is Confirmed and its start lies
    /// more than the configured lead time ahead. Cancelling an
    /// already-Cancelled reservation is an idempotent no-op success.
    pub fn cancel(&self, reservation_id: ReservationId) -> BookingResult<CancelOutcome> {
        let now = self.clock.now();
        let mut reservations = self.reservations.lock().expect("reservation lock poisoned");
        let reservation = reservations
            .get_mut(&reservation_id)
            .ok_or(BookingError::ReservationNotFound(reservation_id))?;

        match reservation.status {
            ReservationStatus::Cancelled => {
                debug!(reservation = %reservation_id, "already cancelled, no-op");
                return Ok(CancelOutcome::AlreadyCancelled(reservation.clone()));
            }
            ReservationStatus::Completed => {
                return Err(BookingError::validation(
                    "completed reservations cannot be cancelled",
                ));
            }
            ReservationStatus::Confirmed => {}
        }

        if reservation.slot.start - now <= self.cancellation_lead {
            return Err(BookingError::validation(format!(
                "cancellation requires at least {} hours of lead time",
                self.cancellation_lead.num_hours()
            )));
        }

        reservation.status = ReservationStatus::Cancelled;
        info!(reservation = %reservation_id, "reservation cancelled");
        Ok(CancelOutcome::Cancelled(reservation.clone()))
    }

    /// Revoke a reservation, bypassing the lead-time policy
    ///
    /// Used by the orchestrator to roll back a tentative reservation whose
    /// payment failed; it must always succeed on a known reservation.
    pub(crate) fn revoke(&self, reservation_id: ReservationId) -> BookingResult<Reservation> {
        let mut reservations = self.reservations.lock().expect("reservation lock poisoned");
        let reservation = reservations
            .get_mut(&reservation_id)
            .ok_or(BookingError::ReservationNotFound(reservation_id))?;

        if reservation.status == ReservationStatus::Confirmed {
            reservation.status = ReservationStatus::Cancelled;
            warn!(reservation = %reservation_id, "reservation revoked");
        }
        Ok(reservation.clone())
    }

    /// Get a reservation by ID
    pub fn get(&self, reservation_id: ReservationId) -> Option<Reservation> {
        self.reservations
            .lock()
            .expect("reservation lock poisoned")
            .get(&reservation_id)
            .cloned()
    }

    /// Slots held by confirmed reservations on a room
    pub fn confirmed_slots_for(&self, room_id: &RoomId) -> Vec<Slot> {
        self.reservations
            .lock()
            .expect("reservation lock poisoned")
            .values()
            .filter(|r| r.room_id == *room_id && r.is_confirmed())
            .map(|r| r.slot)
            .collect()
    }

    /// A member's reservations, newest session first
    pub fn reservations_for_account(&self, account_id: AccountId) -> Vec<Reservation> {
        let mut result: Vec<Reservation> = self
            .reservations
            .lock()
            .expect("reservation lock poisoned")
            .values()
            .filter(|r| r.account_id == account_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.slot.start.cmp(&a.slot.start));
        result
    }

    /// Transition confirmed reservations whose window has elapsed to
    /// Completed; returns the number of transitions
    pub fn sweep_completed(&self) -> usize {
        let now = self.clock.now();
        let mut reservations = self.reservations.lock().expect("reservation lock poisoned");
        let mut swept = 0;
        for reservation in reservations.values_mut() {
            if reservation.is_confirmed() && reservation.slot.has_elapsed(now) {
                reservation.status = ReservationStatus::Completed;
                swept += 1;
            }
        }
        if swept > 0 {
            debug!(swept, "reservations completed");
        }
        swept
    }

    /// Total number of reservations ever created, any status
    pub fn reservation_count(&self) -> usize {
        self.reservations.lock().expect("reservation lock poisoned").len()
    }
}
