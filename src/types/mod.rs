//! Core types for the booking engine
//!
//! Identifiers, enumerations, the booking policy configuration and the clock
//! abstraction used by the temporal rules.
//!
//! # Usage Example
//!
//! ```rust
//! use gameclub_booking::types::*;
//!
//! let room: RoomId = "vip-1".into();
//! let reservation_id = ReservationId::new();
//! let category = RoomCategory::Vip;
//!
//! let config = BookingConfig::default();
//! assert!(config.validate().is_ok());
//! ```

pub mod clock;
pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use clock::*;
pub use config::*;
pub use enums::*;
pub use identifiers::*;
