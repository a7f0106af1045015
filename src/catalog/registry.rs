//! Room catalog and game library
//!
//! Indexed registries over the seeded catalog data. Rooms and games are
//! immutable after startup; the only mutable piece of catalog state is the
//! operator-set maintenance flag per room.

use crate::catalog::{Game, Room};
use crate::types::{GameId, RoomCategory, RoomId};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Registry of bookable rooms with maintenance flags
#[derive(Debug)]
pub struct RoomCatalog {
    /// All rooms in stable listing order
    rooms: Vec<Room>,
    /// Quick lookup map from room ID to index
    room_index: HashMap<RoomId, usize>,
    /// Rooms currently taken out of service by an operator
    maintenance: Mutex<HashSet<RoomId>>,
}

impl RoomCatalog {
    /// Create a catalog from a list of rooms
    pub fn new(rooms: Vec<Room>) -> Self {
        let room_index =
            rooms.iter().enumerate().map(|(idx, room)| (room.id.clone(), idx)).collect();
        Self { rooms, room_index, maintenance: Mutex::new(HashSet::new()) }
    }

    /// All rooms, in stable catalog order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Get a room by ID
    pub fn get(&self, room_id: &RoomId) -> Option<&Room> {
        self.room_index.get(room_id).and_then(|&idx| self.rooms.get(idx))
    }

    /// Check if a room exists in the catalog
    pub fn exists(&self, room_id: &RoomId) -> bool {
        self.room_index.contains_key(room_id)
    }

    /// Number of rooms in the catalog
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Flag a room for maintenance (operator action)
    ///
    /// Returns false if the room is unknown.
    pub fn set_maintenance(&self, room_id: &RoomId, under_maintenance: bool) -> bool {
        if !self.exists(room_id) {
            return false;
        }
        let mut flags = self.maintenance.lock().expect("maintenance lock poisoned");
        if under_maintenance {
            flags.insert(room_id.clone());
        } else {
            flags.remove(room_id);
        }
        true
    }

    /// Whether a room is currently flagged for maintenance
    pub fn in_maintenance(&self, room_id: &RoomId) -> bool {
        self.maintenance.lock().expect("maintenance lock poisoned").contains(room_id)
    }

    /// Validate every room in the catalog
    pub fn validate(&self) -> Result<(), String> {
        if self.rooms.is_empty() {
            return Err("catalog must have at least one room".to_string());
        }
        for room in &self.rooms {
            room.validate()?;
        }
        Ok(())
    }

    /// The club's standard room lineup
    pub fn club_default() -> Self {
        let pc_vip = vec!["RTX 4090".to_string(), "Intel i9".to_string(), "32GB RAM".to_string()];
        let pc_std = vec!["RTX 3070".to_string(), "Intel i7".to_string(), "16GB RAM".to_string()];
        let vr = vec![
            "Meta Quest 3".to_string(),
            "VR Ready PC".to_string(),
            "Tracking System".to_string(),
        ];

        let catalog = Self::new(vec![
            Room::new("vip-1", "VIP 01", RoomCategory::Vip, 500, pc_vip.clone()),
            Room::new("vip-2", "VIP 02", RoomCategory::Vip, 500, pc_vip),
            Room::new("std-1", "Standard 01", RoomCategory::Standard, 300, pc_std.clone()),
            Room::new("std-2", "Standard 02", RoomCategory::Standard, 300, pc_std),
            Room::new("vr-1", "VR Zone 01", RoomCategory::Vr, 800, vr.clone()),
            Room::new("vr-2", "VR Zone 02", RoomCategory::Vr, 800, vr),
        ]);

        // vr-2 is down for maintenance when the club opens
        catalog.set_maintenance(&"vr-2".into(), true);
        catalog
    }
}

/// Registry of games and their room-category compatibility
#[derive(Debug, Clone)]
pub struct GameLibrary {
    /// All games in stable listing order
    games: Vec<Game>,
    /// Quick lookup map from game ID to index
    game_index: HashMap<GameId, usize>,
}

impl GameLibrary {
    /// Create a library from a list of games
    pub fn new(games: Vec<Game>) -> Self {
        let game_index =
            games.iter().enumerate().map(|(idx, game)| (game.id.clone(), idx)).collect();
        Self { games, game_index }
    }

    /// All games, in stable catalog order
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Get a game by ID
    pub fn get(&self, game_id: &GameId) -> Option<&Game> {
        self.game_index.get(game_id).and_then(|&idx| self.games.get(idx))
    }

    /// Check if a game exists in the library
    pub fn exists(&self, game_id: &GameId) -> bool {
        self.game_index.contains_key(game_id)
    }

    /// All games playable in rooms of the given category
    pub fn games_for(&self, category: RoomCategory) -> Vec<&Game> {
        self.games.iter().filter(|game| game.is_compatible(category)).collect()
    }

    /// Whether a game may be played in the given category
    ///
    /// Returns None for an unknown game ID.
    pub fn is_compatible(&self, game_id: &GameId, category: RoomCategory) -> Option<bool> {
        self.get(game_id).map(|game| game.is_compatible(category))
    }

    /// Validate every game in the library
    pub fn validate(&self) -> Result<(), String> {
        if self.games.is_empty() {
            return Err("library must have at least one game".to_string());
        }
        for game in &self.games {
            game.validate()?;
        }
        Ok(())
    }

    /// The club's standard game lineup
    pub fn club_default() -> Self {
        let pc = [RoomCategory::Vip, RoomCategory::Standard];
        Self::new(vec![
            Game::new("vr5", "VR5", [RoomCategory::Vr]),
            Game::new("csgo", "CS:GO", pc),
            Game::new("ml", "Mobile Legends", pc),
            Game::new("valorant", "Valorant", pc),
            Game::new("dota2", "Dota 2", pc),
        ])
    }
}
