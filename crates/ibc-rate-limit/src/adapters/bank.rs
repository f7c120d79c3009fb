//! In-Memory Bank Adapter
//!
//! Implements `BankReader` over in-memory balance and supply records.
//! Used by tests and by embedders without a real token ledger.

use crate::domain::{AccountAddress, Amount};
use crate::ports::outbound::BankReader;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory balances and supplies.
#[derive(Default)]
pub struct InMemoryBank {
    /// (account, denom) -> balance.
    balances: RwLock<HashMap<(AccountAddress, String), Amount>>,
    /// denom -> total supply.
    supplies: RwLock<HashMap<String, Amount>>,
    /// denom -> signed supply offset.
    offsets: RwLock<HashMap<String, i128>>,
}

impl InMemoryBank {
    /// Create an empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the balance of `denom` held by `account`.
    pub fn set_balance(&self, account: &AccountAddress, denom: &str, amount: Amount) {
        self.balances
            .write()
            .insert((account.clone(), denom.to_string()), amount);
    }

    /// Set the total supply of `denom`.
    pub fn set_supply(&self, denom: &str, amount: Amount) {
        self.supplies.write().insert(denom.to_string(), amount);
    }

    /// Set the supply offset of `denom` (negative excludes locked allocations).
    pub fn set_supply_offset(&self, denom: &str, offset: i128) {
        self.offsets.write().insert(denom.to_string(), offset);
    }
}

impl BankReader for InMemoryBank {
    fn balance(&self, account: &AccountAddress, denom: &str) -> Amount {
        self.balances
            .read()
            .get(&(account.clone(), denom.to_string()))
            .copied()
            .unwrap_or_default()
    }

    fn supply_with_offset(&self, denom: &str) -> Amount {
        let supply = self.supplies.read().get(denom).copied().unwrap_or_default();
        let offset = self.offsets.read().get(denom).copied().unwrap_or(0);
        if offset >= 0 {
            supply.saturating_add(Amount::from(offset.unsigned_abs()))
        } else {
            // Clamp at zero.
            supply.saturating_sub(Amount::from(offset.unsigned_abs()))
        }
    }
}
