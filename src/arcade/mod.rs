//! Lounge mini-games
//!
//! Small games members can play at the front desk while waiting for a room:
//! rock-paper-scissors against the house and a 1-to-100 number guess.

pub mod guess;
pub mod rps;
pub mod stats;

pub use guess::*;
pub use rps::*;
pub use stats::*;
