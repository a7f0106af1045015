//! End-to-end booking coordination
//!
//! The orchestrator wires the catalog, pricing engine, scheduler, and ledger
//! together and guarantees that a reservation and its payment either both
//! happen or neither does.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::booking::error::{BookingError, BookingResult};
use crate::catalog::{Game, GameLibrary, Room, RoomCatalog, RoomView};
use crate::ledger::{BalanceLedger, LedgerEntry, Receipt};
use crate::pricing::PricingEngine;
use crate::scheduler::{CancelOutcome, Reservation, ReservationScheduler, Slot};
use crate::types::{
    AccountId, BookingConfig, Clock, GameId, ReservationId, RoomCategory, RoomId, SystemClock,
    TxCause,
};

/// A member's request to book a room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Room to book
    pub room_id: RoomId,
    /// Game the member intends to play
    pub game_id: GameId,
    /// Paying account
    pub account_id: AccountId,
    /// Requested start of the session
    pub start_time: DateTime<Utc>,
    /// Requested session length in whole hours
    pub duration_hours: u8,
}

/// Coordinates the club subsystems behind a single call surface
///
/// All mutating operations go through here so that cross-component
/// invariants hold: a Confirmed reservation always has a matching charge in
/// the ledger, and a failed charge leaves no reservation behind.
#[derive(Debug)]
pub struct BookingOrchestrator {
    config: BookingConfig,
    catalog: Arc<RoomCatalog>,
    library: Arc<GameLibrary>,
    pricing: PricingEngine,
    scheduler: ReservationScheduler,
    ledger: BalanceLedger,
    clock: Arc<dyn Clock>,
}

impl BookingOrchestrator {
    /// Create an orchestrator over the default club setup, on the wall clock
    pub fn new(config: BookingConfig) -> BookingResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create an orchestrator with an injected clock
    pub fn with_clock(config: BookingConfig, clock: Arc<dyn Clock>) -> BookingResult<Self> {
        config
            .validate()
            .map_err(|e| BookingError::validation(e.to_string()))?;

        let catalog = Arc::new(RoomCatalog::club_default());
        let library = Arc::new(GameLibrary::club_default());
        catalog.validate().map_err(BookingError::validation)?;
        library.validate().map_err(BookingError::validation)?;

        let pricing =
            PricingEngine::club_default(config.min_duration_hours, config.max_duration_hours);
        let scheduler = ReservationScheduler::new(
            Arc::clone(&catalog),
            Arc::clone(&library),
            Arc::clone(&clock),
            chrono::Duration::hours(config.cancellation_lead_hours),
            pricing.duration_bounds(),
        );
        let ledger = BalanceLedger::new(Arc::clone(&clock));

        info!(
            rooms = catalog.room_count(),
            games = library.games().len(),
            starting_balance = config.starting_balance,
            "booking orchestrator ready"
        );

        Ok(Self {
            config,
            catalog,
            library,
            pricing,
            scheduler,
            ledger,
            clock,
        })
    }

    /// The configuration this orchestrator was built with
    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    // --- catalog surface ---

    /// All rooms with their status derived at the current instant
    pub fn list_rooms(&self) -> Vec<RoomView> {
        let now = self.clock.now();
        self.catalog
            .rooms()
            .iter()
            .map(|room| self.view_of(room, now))
            .collect()
    }

    /// A single room with its derived status
    pub fn get_room(&self, room_id: &RoomId) -> BookingResult<RoomView> {
        let room = self
            .catalog
            .get(room_id)
            .ok_or_else(|| BookingError::RoomNotFound(room_id.clone()))?;
        Ok(self.view_of(room, self.clock.now()))
    }

    fn view_of(&self, room: &Room, now: DateTime<Utc>) -> RoomView {
        let slots = self.scheduler.confirmed_slots_for(&room.id);
        let status = room.status(self.catalog.in_maintenance(&room.id), &slots, now);
        RoomView {
            room: room.clone(),
            status,
        }
    }

    /// All games in the library
    pub fn games(&self) -> Vec<Game> {
        self.library.games().to_vec()
    }

    /// Games playable in rooms of the given category
    pub fn games_for(&self, category: RoomCategory) -> Vec<Game> {
        self.library
            .games_for(category)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Flag a room for maintenance, or return it to service
    ///
    /// Returns the previous maintenance state.
    pub fn set_maintenance(&self, room_id: &RoomId, maintenance: bool) -> BookingResult<bool> {
        if !self.catalog.exists(room_id) {
            return Err(BookingError::RoomNotFound(room_id.clone()));
        }
        let previous = self.catalog.in_maintenance(room_id);
        self.catalog.set_maintenance(room_id, maintenance);
        info!(room = %room_id, maintenance, "maintenance flag updated");
        Ok(previous)
    }

    // --- pricing surface ---

    /// Price a session in the given room without booking it
    pub fn quote(&self, room_id: &RoomId, duration_hours: u8) -> BookingResult<i64> {
        let room = self
            .catalog
            .get(room_id)
            .ok_or_else(|| BookingError::RoomNotFound(room_id.clone()))?;
        self.pricing.quote(room, duration_hours)
    }

    // --- booking surface ---

    /// Book a room: price the session, hold the slot, charge the account
    ///
    /// The charge and the reservation succeed or fail together. When the
    /// account cannot cover the price the tentative reservation is revoked
    /// and the balance is left untouched.
    #[instrument(skip(self, request), fields(room = %request.room_id, account = %request.account_id))]
    pub fn create_reservation(&self, request: &BookingRequest) -> BookingResult<Reservation> {
        let price = self.quote(&request.room_id, request.duration_hours)?;
        let slot = Slot::new(request.start_time, request.duration_hours);

        let reservation = self.scheduler.reserve(
            &request.room_id,
            &request.game_id,
            request.account_id,
            slot,
            price,
        )?;

        if let Err(charge_err) = self.ledger.debit(
            request.account_id,
            price,
            TxCause::ReservationCharge(reservation.id),
        ) {
            warn!(
                reservation = %reservation.id,
                error = %charge_err,
                "charge failed, revoking reservation"
            );
            self.scheduler.revoke(reservation.id)?;
            return Err(charge_err);
        }

        info!(
            reservation = %reservation.id,
            price,
            "reservation booked and charged"
        );
        Ok(reservation)
    }

    /// Cancel a reservation and refund its full price
    ///
    /// Cancelling an already-cancelled reservation succeeds without issuing
    /// a second refund.
    #[instrument(skip(self))]
    pub fn cancel_reservation(&self, reservation_id: ReservationId) -> BookingResult<Reservation> {
        match self.scheduler.cancel(reservation_id)? {
            CancelOutcome::Cancelled(reservation) => {
                if reservation.price > 0 {
                    self.ledger.credit(
                        reservation.account_id,
                        reservation.price,
                        TxCause::ReservationRefund(reservation.id),
                    )?;
                }
                info!(
                    reservation = %reservation.id,
                    refund = reservation.price,
                    "reservation cancelled and refunded"
                );
                Ok(reservation)
            }
            CancelOutcome::AlreadyCancelled(reservation) => Ok(reservation),
        }
    }

    /// Look up a reservation by ID
    pub fn get_reservation(&self, reservation_id: ReservationId) -> Option<Reservation> {
        self.scheduler.get(reservation_id)
    }

    /// A member's reservations, newest session first
    pub fn reservations_for_account(&self, account_id: AccountId) -> Vec<Reservation> {
        self.scheduler.reservations_for_account(account_id)
    }

    /// Mark elapsed Confirmed reservations Completed
    ///
    /// Returns the number of reservations transitioned.
    pub fn sweep_completed(&self) -> usize {
        self.scheduler.sweep_completed()
    }

    // --- ledger surface ---

    /// Open a member account credited with the configured starting balance
    pub fn open_account(&self) -> BookingResult<AccountId> {
        self.ledger.open_account(self.config.starting_balance)
    }

    /// Open a member account with an explicit opening balance
    pub fn open_account_with(&self, opening_balance: i64) -> BookingResult<AccountId> {
        self.ledger.open_account(opening_balance)
    }

    /// Current balance of an account
    pub fn get_balance(&self, account_id: AccountId) -> BookingResult<i64> {
        self.ledger.balance(account_id)
    }

    /// Credit an account from an external payment
    pub fn top_up(&self, account_id: AccountId, amount: i64) -> BookingResult<Receipt> {
        self.ledger.credit(account_id, amount, TxCause::TopUp)
    }

    /// An account's transaction history, oldest first
    pub fn transactions(&self, account_id: AccountId) -> Vec<LedgerEntry> {
        self.ledger.transactions(account_id)
    }

    /// The full append-only transaction log across all accounts
    pub fn full_log(&self) -> Vec<LedgerEntry> {
        self.ledger.full_log()
    }
}
