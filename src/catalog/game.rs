//! Games and room-category compatibility
//!
//! Each game lists the room categories it may be played in. The invariant
//! that every game is playable somewhere is enforced at validation time.

use crate::types::{GameId, RoomCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A game offered by the club
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Catalog slug identifying the game
    pub id: GameId,
    /// Name shown to members
    pub display_name: String,
    /// Room categories this game may be booked on; never empty
    pub compatible_categories: BTreeSet<RoomCategory>,
}

impl Game {
    /// Create a new game
    pub fn new(
        id: impl Into<GameId>,
        display_name: impl Into<String>,
        compatible_categories: impl IntoIterator<Item = RoomCategory>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            compatible_categories: compatible_categories.into_iter().collect(),
        }
    }

    /// Whether this game may be played in rooms of the given category
    pub fn is_compatible(&self, category: RoomCategory) -> bool {
        self.compatible_categories.contains(&category)
    }

    /// Validate the game's invariants
    pub fn validate(&self) -> Result<(), String> {
        if self.id.as_str().is_empty() {
            return Err("game id must not be empty".to_string());
        }
        if self.compatible_categories.is_empty() {
            return Err(format!("game {} must list at least one compatible category", self.id));
        }
        Ok(())
    }
}
