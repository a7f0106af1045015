//! Booking coordination layer
//!
//! Ties the catalog, pricing, scheduler, and ledger subsystems together and
//! exposes the error taxonomy and logging setup shared across the crate.

pub mod error;
pub mod logging;
pub mod orchestrator;

pub use error::*;
pub use logging::*;
pub use orchestrator::*;
