//! Balance ledger with an append-only transaction log
//!
//! Accounts are mutated exclusively here. Each credit or debit reads and
//! updates the balance inside one critical section, appending a log entry
//! with the resulting balance, so a failed debit leaves no trace and the log
//! replays to the current state.

use crate::booking::{BookingError, BookingResult};
use crate::ledger::Account;
use crate::types::{AccountId, Clock, TxCause};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// One recorded ledger mutation; returned to callers as their receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Position in the append-only log, starting at 0
    pub seq: u64,
    /// Account the mutation applied to
    pub account_id: AccountId,
    /// Signed amount in rubles: positive for credits, negative for debits
    pub delta: i64,
    /// Balance immediately after the mutation
    pub resulting_balance: i64,
    /// Why the mutation happened
    pub cause: TxCause,
    /// When the mutation happened
    pub at: DateTime<Utc>,
}

/// Receipt handed back for every successful ledger mutation
pub type Receipt = LedgerEntry;

#[derive(Debug, Default)]
struct LedgerState {
    accounts: HashMap<AccountId, Account>,
    log: Vec<LedgerEntry>,
}

/// Authoritative store of account balances
#[derive(Debug)]
pub struct BalanceLedger {
    clock: Arc<dyn Clock>,
    state: Mutex<LedgerState>,
}

impl BalanceLedger {
    /// Create an empty ledger
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock, state: Mutex::new(LedgerState::default()) }
    }

    /// Open a new account, crediting the opening balance through the log
    pub fn open_account(&self, opening_balance: i64) -> BookingResult<AccountId> {
        if opening_balance < 0 {
            return Err(BookingError::validation("opening balance must not be negative"));
        }

        let now = self.clock.now();
        let mut state = self.state.lock().expect("ledger lock poisoned");
        let mut account = Account::new(now);
        let account_id = account.id;

        if opening_balance > 0 {
            account.balance = opening_balance;
            let seq = state.log.len() as u64;
            state.log.push(LedgerEntry {
                seq,
                account_id,
                delta: opening_balance,
                resulting_balance: opening_balance,
                cause: TxCause::OpeningBalance,
                at: now,
            });
        }

        state.accounts.insert(account_id, account);
        info!(account = %account_id, opening_balance, "account opened");
        Ok(account_id)
    }

    /// Credit an account (top-up or refund)
    pub fn credit(
        &self,
        account_id: AccountId,
        amount: i64,
        cause: TxCause,
    ) -> BookingResult<Receipt> {
        if amount <= 0 {
            return Err(BookingError::validation("credit amount must be positive"));
        }

        let now = self.clock.now();
        let mut state = self.state.lock().expect("ledger lock poisoned");
        let seq = state.log.len() as u64;
        let account = state
            .accounts
            .get_mut(&account_id)
            .ok_or(BookingError::AccountNotFound(account_id))?;

        account.balance += amount;
        let entry = LedgerEntry {
            seq,
            account_id,
            delta: amount,
            resulting_balance: account.balance,
            cause,
            at: now,
        };
        debug!(account = %account_id, amount, balance = account.balance, "credit applied");
        state.log.push(entry.clone());
        Ok(entry)
    }

    /// Debit an account
    ///
    /// Fails without any mutation when the balance does not cover the
    /// amount; the balance check and the write are one atomic step.
    pub fn debit(
        &self,
        account_id: AccountId,
        amount: i64,
        cause: TxCause,
    ) -> BookingResult<Receipt> {
        if amount <= 0 {
            return Err(BookingError::validation("debit amount must be positive"));
        }

        let now = self.clock.now();
        let mut state = self.state.lock().expect("ledger lock poisoned");
        let seq = state.log.len() as u64;
        let account = state
            .accounts
            .get_mut(&account_id)
            .ok_or(BookingError::AccountNotFound(account_id))?;

        if !account.can_afford(amount) {
            debug!(account = %account_id, amount, balance = account.balance, "debit refused");
            return Err(BookingError::InsufficientBalance {
                required: amount,
                available: account.balance,
            });
        }

        account.balance -= amount;
        let entry = LedgerEntry {
            seq,
            account_id,
            delta: -amount,
            resulting_balance: account.balance,
            cause,
            at: now,
        };
        debug!(account = %account_id, amount, balance = account.balance, "debit applied");
        state.log.push(entry.clone());
        Ok(entry)
    }

    /// Current balance of an account
    pub fn balance(&self, account_id: AccountId) -> BookingResult<i64> {
        self.state
            .lock()
            .expect("ledger lock poisoned")
            .accounts
            .get(&account_id)
            .map(|account| account.balance)
            .ok_or(BookingError::AccountNotFound(account_id))
    }

    /// An account's log entries, oldest first
    pub fn transactions(&self, account_id: AccountId) -> Vec<LedgerEntry> {
        self.state
            .lock()
            .expect("ledger lock poisoned")
            .log
            .iter()
            .filter(|entry| entry.account_id == account_id)
            .cloned()
            .collect()
    }

    /// The full transaction log, oldest first
    pub fn full_log(&self) -> Vec<LedgerEntry> {
        self.state.lock().expect("ledger lock poisoned").log.clone()
    }

    /// Number of open accounts
    pub fn account_count(&self) -> usize {
        self.state.lock().expect("ledger lock poisoned").accounts.len()
    }
}
