//! Enumeration types for the booking engine
//!
//! Room categories, derived room statuses, reservation lifecycle states and
//! ledger transaction causes.

use crate::types::ReservationId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a bookable room
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomCategory {
    /// Premium rooms with top-end hardware
    Vip,
    /// Standard gaming rooms
    Standard,
    /// Virtual reality zones
    Vr,
}

impl RoomCategory {
    /// All categories, in catalog display order
    pub const ALL: [RoomCategory; 3] =
        [RoomCategory::Vip, RoomCategory::Standard, RoomCategory::Vr];
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomCategory::Vip => write!(f, "VIP"),
            RoomCategory::Standard => write!(f, "Standard"),
            RoomCategory::Vr => write!(f, "VR"),
        }
    }
}

impl FromStr for RoomCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vip" => Ok(RoomCategory::Vip),
            "standard" | "std" => Ok(RoomCategory::Standard),
            "vr" => Ok(RoomCategory::Vr),
            _ => Err(format!("Unknown room category: {}", s)),
        }
    }
}

/// Current status of a room, derived from the active reservation set
///
/// Maintenance is operator-set and overrides every other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomStatus {
    /// No confirmed reservation touches the room
    Free,
    /// A confirmed reservation exists but none covers the current instant
    Reserved,
    /// A confirmed reservation covers the current instant
    Occupied,
    /// Taken out of service by an operator
    Maintenance,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomStatus::Free => write!(f, "Free"),
            RoomStatus::Reserved => write!(f, "Reserved"),
            RoomStatus::Occupied => write!(f, "Occupied"),
            RoomStatus::Maintenance => write!(f, "Maintenance"),
        }
    }
}

impl FromStr for RoomStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(RoomStatus::Free),
            "reserved" => Ok(RoomStatus::Reserved),
            "occupied" => Ok(RoomStatus::Occupied),
            "maintenance" => Ok(RoomStatus::Maintenance),
            _ => Err(format!("Unknown room status: {}", s)),
        }
    }
}

/// Lifecycle state of a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationStatus {
    /// Booked and paid; the slot is held
    Confirmed,
    /// The reserved window has fully elapsed
    Completed,
    /// Cancelled before the session; the slot is released
    Cancelled,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationStatus::Confirmed => write!(f, "Confirmed"),
            ReservationStatus::Completed => write!(f, "Completed"),
            ReservationStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Cause attached to every ledger mutation, for auditability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxCause {
    /// Opening credit when the account is created
    OpeningBalance,
    /// Member top-up
    TopUp,
    /// Charge for a confirmed reservation
    ReservationCharge(ReservationId),
    /// Refund for a cancelled (or rolled-back) reservation
    ReservationRefund(ReservationId),
}

impl fmt::Display for TxCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxCause::OpeningBalance => write!(f, "opening balance"),
            TxCause::TopUp => write!(f, "top-up"),
            TxCause::ReservationCharge(id) => write!(f, "charge for {}", id),
            TxCause::ReservationRefund(id) => write!(f, "refund for {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_category_display_and_parse() {
        assert_eq!(RoomCategory::Vip.to_string(), "VIP");
        assert_eq!(RoomCategory::Standard.to_string(), "Standard");
        assert_eq!(RoomCategory::Vr.to_string(), "VR");

        assert_eq!("vip".parse::<RoomCategory>().unwrap(), RoomCategory::Vip);
        assert_eq!("std".parse::<RoomCategory>().unwrap(), RoomCategory::Standard);
        assert_eq!("VR".parse::<RoomCategory>().unwrap(), RoomCategory::Vr);
        assert!("arcade".parse::<RoomCategory>().is_err());
    }

    #[test]
    fn test_room_status_parse() {
        assert_eq!("free".parse::<RoomStatus>().unwrap(), RoomStatus::Free);
        assert_eq!("Maintenance".parse::<RoomStatus>().unwrap(), RoomStatus::Maintenance);
        assert!("broken".parse::<RoomStatus>().is_err());
    }

    #[test]
    fn test_reservation_status_display() {
        assert_eq!(ReservationStatus::Confirmed.to_string(), "Confirmed");
        assert_eq!(ReservationStatus::Completed.to_string(), "Completed");
        assert_eq!(ReservationStatus::Cancelled.to_string(), "Cancelled");
    }

    #[test]
    fn test_tx_cause_display() {
        let id = ReservationId::new();
        assert_eq!(TxCause::TopUp.to_string(), "top-up");
        assert!(TxCause::ReservationCharge(id).to_string().contains("RES_"));
        assert!(TxCause::ReservationRefund(id).to_string().starts_with("refund"));
    }

    #[test]
    fn test_enum_serialization() {
        let json = serde_json::to_string(&RoomCategory::Vr).unwrap();
        let back: RoomCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RoomCategory::Vr);

        let json = serde_json::to_string(&ReservationStatus::Cancelled).unwrap();
        let back: ReservationStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ReservationStatus::Cancelled);
    }
}
