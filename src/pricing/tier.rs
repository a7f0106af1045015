//! Duration-based discount tiers
//!
//! Each room category carries an ordered threshold table; a quote applies
//! the discount of the largest threshold not exceeding the requested
//! duration.

use crate::types::RoomCategory;
use serde::{Deserialize, Serialize};

/// Discount thresholds for one room category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTier {
    /// Category this tier table applies to
    pub category: RoomCategory,
    /// `(min_hours, discount_percent)` pairs, ascending by `min_hours`
    pub thresholds: Vec<(u8, u8)>,
}

impl PriceTier {
    /// Create a tier table; thresholds are normalized to ascending order
    pub fn new(category: RoomCategory, mut thresholds: Vec<(u8, u8)>) -> Self {
        thresholds.sort_by_key(|&(min_hours, _)| min_hours);
        Self { category, thresholds }
    }

    /// Discount percent for the given duration
    ///
    /// Picks the largest threshold with `min_hours <= duration_hours`;
    /// returns 0 when none matches.
    pub fn discount_for(&self, duration_hours: u8) -> u8 {
        self.thresholds
            .iter()
            .rev()
            .find(|&&(min_hours, _)| min_hours <= duration_hours)
            .map(|&(_, discount)| discount)
            .unwrap_or(0)
    }

    /// Validate the tier table
    pub fn validate(&self) -> Result<(), String> {
        for &(min_hours, discount) in &self.thresholds {
            if min_hours == 0 {
                return Err(format!("{} tier threshold must start at 1 hour", self.category));
            }
            if discount > 100 {
                return Err(format!(
                    "{} tier discount {}% exceeds 100%",
                    self.category, discount
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_selection() {
        let tier = PriceTier::new(RoomCategory::Vip, vec![(3, 10), (6, 20)]);

        assert_eq!(tier.discount_for(1), 0);
        assert_eq!(tier.discount_for(2), 0);
        assert_eq!(tier.discount_for(3), 10);
        assert_eq!(tier.discount_for(5), 10);
        assert_eq!(tier.discount_for(6), 20);
    }

    #[test]
    fn test_thresholds_are_normalized() {
        // Out-of-order input still selects correctly
        let tier = PriceTier::new(RoomCategory::Vr, vec![(3, 20), (2, 10)]);
        assert_eq!(tier.thresholds, vec![(2, 10), (3, 20)]);
        assert_eq!(tier.discount_for(2), 10);
        assert_eq!(tier.discount_for(4), 20);
    }

    #[test]
    fn test_empty_table_means_no_discount() {
        let tier = PriceTier::new(RoomCategory::Standard, Vec::new());
        assert_eq!(tier.discount_for(6), 0);
    }

    #[test]
    fn test_validation() {
        assert!(PriceTier::new(RoomCategory::Vip, vec![(3, 10)]).validate().is_ok());
        assert!(PriceTier::new(RoomCategory::Vip, vec![(0, 10)]).validate().is_err());
        assert!(PriceTier::new(RoomCategory::Vip, vec![(3, 101)]).validate().is_err());
    }
}
