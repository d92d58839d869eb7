//! Native-currency seam between the ledger and its host.

use std::collections::BTreeMap;

use fave_types::{Address, Amount};

/// Moves native currency into and out of the ledger's custody.
///
/// A returned `Err` is the host's rejection reason; the ledger surfaces it
/// as `TransferFailed` and leaves its own state unchanged.
pub trait NativeBank {
    /// Move `amount` from `from` into the ledger's custody.
    fn collect(&mut self, from: &Address, amount: Amount) -> Result<(), String>;

    /// Pay `amount` out of the ledger's custody to `to`.
    fn pay(&mut self, to: &Address, amount: Amount) -> Result<(), String>;
}

/// A single payout recorded by [`MemoryBank`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payout {
    pub to: Address,
    pub amount: Amount,
}

/// In-memory bank for tests and embedding. Tracks external account
/// balances and the ledger's custody; currency only moves between them.
#[derive(Debug, Clone, Default)]
pub struct MemoryBank {
    balances: BTreeMap<Address, Amount>,
    custody: Amount,
    payouts: Vec<Payout>,
    reject: Option<String>,
}

impl MemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give `account` native currency to deposit.
    pub fn fund(&mut self, account: Address, amount: Amount) {
        let balance = self.balances.entry(account).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    /// Reject every subsequent payout with `reason`.
    pub fn reject_payouts(&mut self, reason: impl Into<String>) {
        self.reject = Some(reason.into());
    }

    pub fn accept_payouts(&mut self) {
        self.reject = None;
    }

    /// Native currency held by an external account.
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Native currency held on the ledger's behalf.
    pub fn custody(&self) -> Amount {
        self.custody
    }

    pub fn payouts(&self) -> &[Payout] {
        &self.payouts
    }
}

impl NativeBank for MemoryBank {
    fn collect(&mut self, from: &Address, amount: Amount) -> Result<(), String> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(format!(
                "insufficient native balance: have {available}, need {amount}"
            ));
        }
        let custody = self
            .custody
            .checked_add(amount)
            .ok_or_else(|| "custody balance overflow".to_string())?;
        if available == amount {
            self.balances.remove(from);
        } else {
            self.balances.insert(*from, available - amount);
        }
        self.custody = custody;
        Ok(())
    }

    fn pay(&mut self, to: &Address, amount: Amount) -> Result<(), String> {
        if let Some(reason) = &self.reject {
            return Err(reason.clone());
        }
        let custody = self.custody.checked_sub(amount).ok_or_else(|| {
            format!(
                "insufficient custody: have {}, need {amount}",
                self.custody
            )
        })?;
        let balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or_else(|| "recipient balance overflow".to_string())?;
        self.custody = custody;
        self.balances.insert(*to, balance);
        self.payouts.push(Payout { to: *to, amount });
        Ok(())
    }
}
