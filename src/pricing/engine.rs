//! Deterministic price quoting
//!
//! `quote` is a pure function of the room's hourly rate, the requested
//! duration and the category's discount tier. Identical inputs always yield
//! identical prices.

use crate::booking::{BookingError, BookingResult};
use crate::catalog::Room;
use crate::pricing::PriceTier;
use crate::types::RoomCategory;
use std::collections::HashMap;

/// Computes session prices from hourly rates and discount tiers
#[derive(Debug, Clone)]
pub struct PricingEngine {
    /// Tier tables keyed by room category
    tiers: HashMap<RoomCategory, PriceTier>,
    /// Minimum bookable duration in hours
    min_duration_hours: u8,
    /// Maximum bookable duration in hours
    max_duration_hours: u8,
}

impl PricingEngine {
    /// Create a pricing engine from tier tables and duration bounds
    pub fn new(
        tiers: impl IntoIterator<Item = PriceTier>,
        min_duration_hours: u8,
        max_duration_hours: u8,
    ) -> Self {
        let tiers = tiers.into_iter().map(|tier| (tier.category, tier)).collect();
        Self { tiers, min_duration_hours, max_duration_hours }
    }

    /// The club's standard discount schedule
    ///
    /// VIP and Standard: 10% at three hours, 20% at six. VR sessions reach
    /// the same discounts sooner, at two and three hours.
    pub fn club_default(min_duration_hours: u8, max_duration_hours: u8) -> Self {
        Self::new(
            [
                PriceTier::new(RoomCategory::Vip, vec![(3, 10), (6, 20)]),
                PriceTier::new(RoomCategory::Standard, vec![(3, 10), (6, 20)]),
                PriceTier::new(RoomCategory::Vr, vec![(2, 10), (3, 20)]),
            ],
            min_duration_hours,
            max_duration_hours,
        )
    }

    /// Bookable duration range in hours, inclusive
    pub fn duration_bounds(&self) -> (u8, u8) {
        (self.min_duration_hours, self.max_duration_hours)
    }

    /// Quote the price for a session in the given room, in rubles
    ///
    /// `price = round(rate * hours * (1 - discount/100))`, computed in
    /// integer math with half-up rounding. Rejects durations outside the
    /// configured bounds.
    pub fn quote(&self, room: &Room, duration_hours: u8) -> BookingResult<i64> {
        if duration_hours < self.min_duration_hours || duration_hours > self.max_duration_hours {
            return Err(BookingError::validation(format!(
                "duration must be between {} and {} hours, got {}",
                self.min_duration_hours, self.max_duration_hours, duration_hours
            )));
        }

        let base = room.hourly_rate * i64::from(duration_hours);
        let discount = self
            .tiers
            .get(&room.category)
            .map(|tier| tier.discount_for(duration_hours))
            .unwrap_or(0);

        Ok((base * i64::from(100 - discount) + 50) / 100)
    }

    /// Validate every tier table
    pub fn validate(&self) -> Result<(), String> {
        for tier in self.tiers.values() {
            tier.validate()?;
        }
        Ok(())
    }
}
