//! Room and game catalog
//!
//! Seeded, effectively immutable registries of the club's bookable rooms and
//! its game library, with category-based compatibility lookups and lazy room
//! status derivation.

pub mod game;
pub mod registry;
pub mod room;

// Re-export all public types for convenience
pub use game::*;
pub use registry::*;
pub use room::*;
