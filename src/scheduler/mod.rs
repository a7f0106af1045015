//! Reservation scheduling
//!
//! Slot interval math, reservation records and the scheduler that validates
//! booking requests against the catalog, the game library and the existing
//! reservation set.

pub mod reservation;
#[allow(clippy::module_inception)]
pub mod scheduler;

// Re-export all public types for convenience
pub use reservation::*;
pub use scheduler::*;
