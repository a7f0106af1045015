//! Error taxonomy for the booking engine
//!
//! Every failure is a typed, recoverable result returned to the caller;
//! nothing in the core aborts the process.

use crate::types::{AccountId, GameId, ReservationId, RoomCategory, RoomId};
use thiserror::Error;

/// Errors returned by the booking engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    /// Malformed or out-of-range input; correct and resubmit
    #[error("validation failed: {0}")]
    Validation(String),

    /// Room exists but cannot be booked (under maintenance)
    #[error("room {room} is unavailable for booking")]
    RoomUnavailable {
        /// The unavailable room
        room: RoomId,
    },

    /// The requested game cannot be played in the room's category
    #[error("game {game} cannot be played in a {category} room")]
    IncompatibleGame {
        /// The requested game
        game: GameId,
        /// The room's category
        category: RoomCategory,
    },

    /// An existing confirmed reservation overlaps the requested slot
    #[error("room {room} already has a reservation overlapping the requested slot")]
    SlotConflict {
        /// The contested room
        room: RoomId,
    },

    /// The account balance does not cover the quoted price
    #[error("insufficient balance: {required} required, {available} available")]
    InsufficientBalance {
        /// Amount the operation needed, in rubles
        required: i64,
        /// Balance at the time of the attempt, in rubles
        available: i64,
    },

    /// Unknown room ID
    #[error("room {0} not found")]
    RoomNotFound(RoomId),

    /// Unknown game ID
    #[error("game {0} not found")]
    GameNotFound(GameId),

    /// Unknown reservation ID
    #[error("reservation {0} not found")]
    ReservationNotFound(ReservationId),

    /// Unknown account ID
    #[error("account {0} not found")]
    AccountNotFound(AccountId),
}

impl BookingError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Check if this is a recoverable error
    ///
    /// Every error in this taxonomy is recoverable: the caller corrects the
    /// request, tops up, or refreshes stale client state.
    pub fn is_recoverable(&self) -> bool {
        true
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            BookingError::Validation(_) => "Validation",
            BookingError::RoomUnavailable { .. } => "Room Unavailable",
            BookingError::IncompatibleGame { .. } => "Incompatible Game",
            BookingError::SlotConflict { .. } => "Slot Conflict",
            BookingError::InsufficientBalance { .. } => "Insufficient Balance",
            BookingError::RoomNotFound(_)
            | BookingError::GameNotFound(_)
            | BookingError::ReservationNotFound(_)
            | BookingError::AccountNotFound(_) => "Not Found",
        }
    }
}

/// Result type for booking operations
pub type BookingResult<T> = Result<T, BookingError>;
