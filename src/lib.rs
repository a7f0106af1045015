//! Game Club Booking Engine
//!
//! A reservation and payment engine for a gaming club: rooms in three
//! categories (VIP, Standard, VR), a game library with per-category
//! compatibility, duration-tiered pricing, conflict-free scheduling, and an
//! append-only balance ledger, coordinated so a booking and its charge
//! always succeed or fail together.
//!
//! # Overview
//!
//! The library models the front desk of a gaming club. Members open an
//! account with a starting balance, browse rooms and the games playable in
//! them, get a price quote for a session, and book. Cancellation inside the
//! policy window refunds the full price. Every balance change is recorded
//! as an immutable ledger entry for audit.
//!
//! ## Key Features
//!
//! - **Room Catalog**: VIP, Standard, and VR rooms with hardware specs and
//!   derived live status (Free, Reserved, Occupied, Maintenance)
//! - **Game Compatibility**: games declare the room categories they run in
//! - **Tiered Pricing**: per-category duration discounts with deterministic
//!   rounding
//! - **Conflict-Free Scheduling**: overlap detection on half-open time
//!   slots, with a cancellation lead-time policy
//! - **Audited Balances**: append-only transaction log with running
//!   balances
//! - **Lounge Mini-Games**: rock-paper-scissors and number guessing for
//!   members waiting on a room
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use gameclub_booking::*;
//!
//! let orchestrator = BookingOrchestrator::new(BookingConfig::default())?;
//! let account_id = orchestrator.open_account()?;
//!
//! let reservation = orchestrator.create_reservation(&BookingRequest {
//!     room_id: "std-1".into(),
//!     game_id: "csgo".into(),
//!     account_id,
//!     start_time: Utc::now() + Duration::hours(3),
//!     duration_hours: 2,
//! })?;
//!
//! println!("booked {} for {}₽", reservation.room_id, reservation.price);
//! # Ok::<(), gameclub_booking::BookingError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, enums, clock abstraction, and configuration
//! - [`catalog`]: rooms, games, and the seeded club registries
//! - [`pricing`]: discount tiers and the quoting engine
//! - [`scheduler`]: time slots, reservations, and conflict detection
//! - [`ledger`]: accounts and the append-only transaction log
//! - [`booking`]: the orchestrator, error taxonomy, and logging setup
//! - [`arcade`]: lounge mini-games
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod arcade;
pub mod booking;
pub mod catalog;
pub mod ledger;
pub mod pricing;
pub mod scheduler;

pub mod types;

// Core types and identifiers
pub use types::{
    AccountId,
    BookingConfig,
    CliArgs,
    Clock,
    ConfigError,
    // Identifiers
    GameId,
    ManualClock,
    ReservationId,
    ReservationStatus,
    // Enums
    RoomCategory,
    RoomId,
    RoomStatus,
    SystemClock,
    TxCause,
};

// Catalog types and functionality
pub use catalog::{Game, GameLibrary, Room, RoomCatalog, RoomView};

// Pricing
pub use pricing::{PriceTier, PricingEngine};

// Scheduling
pub use scheduler::{CancelOutcome, Reservation, ReservationScheduler, Slot};

// Ledger
pub use ledger::{Account, BalanceLedger, LedgerEntry, Receipt};

// Booking coordination
pub use booking::{
    BookingError, BookingOrchestrator, BookingRequest, BookingResult, LoggingConfig,
};
