//! Member accounts
//!
//! An account is a prepaid balance. It is only ever mutated through the
//! ledger, which keeps the balance non-negative at all times.

use crate::types::AccountId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A member's prepaid account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: AccountId,
    /// Current balance in rubles, never negative
    pub balance: i64,
    /// When the account was opened
    pub opened_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(opened_at: DateTime<Utc>) -> Self {
        Self { id: AccountId::new(), balance: 0, opened_at }
    }

    /// Whether the balance covers the given amount
    pub fn can_afford(&self, amount: i64) -> bool {
        self.balance >= amount
    }
}
