//! Account balances and the transaction log
//!
//! The ledger is the only place balances change. Every mutation is atomic
//! and appends to an auditable log.

pub mod account;
#[allow(clippy::module_inception)]
pub mod ledger;

// Re-export all public types for convenience
pub use account::*;
pub use ledger::*;
