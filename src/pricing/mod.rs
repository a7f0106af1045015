//! Price computation
//!
//! Deterministic quotes from hourly rates, requested duration and
//! per-category discount tiers.

pub mod engine;
pub mod tier;

// Re-export all public types for convenience
pub use engine::*;
pub use tier::*;
