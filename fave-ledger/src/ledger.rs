//! Balance and allowance bookkeeping.
//!
//! Methods here do not check pause state or roles; [`FaveToken`](crate::token::FaveToken)
//! applies those guards before delegating. Every method validates all of
//! its preconditions before the first write, so a returned error means
//! nothing changed.
//!
//! Zero entries are never stored: an absent key reads as zero.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use borsh::{BorshDeserialize, BorshSerialize};
use fave_types::{Address, Amount, LedgerError, LedgerEvent};

use crate::context::Context;
use crate::fee::FeePolicy;
use crate::response::{ContractResult, Response};

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Ledger {
    balances: BTreeMap<Address, Amount>,
    allowances: BTreeMap<(Address, Address), Amount>,
    total_supply: Amount,
}

impl Ledger {
    /// A ledger whose whole `supply` is held by `holder`.
    pub fn with_supply(holder: Address, supply: Amount) -> Self {
        let mut balances = BTreeMap::new();
        if supply > 0 {
            balances.insert(holder, supply);
        }
        Ledger {
            balances,
            allowances: BTreeMap::new(),
            total_supply: supply,
        }
    }

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of every balance, or `None` if it does not fit in an `Amount`.
    pub fn sum_balances(&self) -> Option<Amount> {
        self.balances
            .values()
            .try_fold(0 as Amount, |acc, b| acc.checked_add(*b))
    }

    /// Accounts holding a non-zero balance, in address order.
    pub fn holders(&self) -> impl Iterator<Item = (&Address, &Amount)> {
        self.balances.iter()
    }

    // ── Internal helpers ───────────────────────────────────────────────

    fn ensure_balance(&self, account: &Address, required: Amount) -> Result<(), LedgerError> {
        let available = self.balance_of(account);
        if available < required {
            return Err(LedgerError::InsufficientBalance {
                available,
                required,
            });
        }
        Ok(())
    }

    /// Caller must have checked the balance with `ensure_balance`.
    fn debit(&mut self, account: &Address, amount: Amount) -> Result<(), LedgerError> {
        if amount == 0 {
            return Ok(());
        }
        match self.balances.entry(*account) {
            Entry::Occupied(mut entry) => {
                let remaining = entry
                    .get()
                    .checked_sub(amount)
                    .ok_or(LedgerError::InsufficientBalance {
                        available: *entry.get(),
                        required: amount,
                    })?;
                if remaining == 0 {
                    entry.remove();
                } else {
                    *entry.get_mut() = remaining;
                }
                Ok(())
            }
            Entry::Vacant(_) => Err(LedgerError::InsufficientBalance {
                available: 0,
                required: amount,
            }),
        }
    }

    fn credit(&mut self, account: &Address, amount: Amount) -> Result<(), LedgerError> {
        if amount == 0 {
            return Ok(());
        }
        let balance = self.balances.entry(*account).or_insert(0);
        *balance = balance.checked_add(amount).ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    fn set_allowance(&mut self, owner: Address, spender: Address, amount: Amount) {
        if amount == 0 {
            self.allowances.remove(&(owner, spender));
        } else {
            self.allowances.insert((owner, spender), amount);
        }
    }

    /// Shared fee-bearing move used by `transfer` and `transfer_from`.
    fn move_with_fee(
        &mut self,
        from: Address,
        to: Address,
        amount: Amount,
        fees: &FeePolicy,
        project: &Address,
    ) -> ContractResult {
        self.ensure_balance(&from, amount)?;
        let split = fees.split(amount)?;

        self.debit(&from, amount)?;
        self.credit(&to, split.net)?;
        self.credit(project, split.fee)?;

        Ok(Response::new()
            .add_event(LedgerEvent::Transfer {
                from,
                to,
                amount: split.net,
            })
            .add_event_if(
                split.fee > 0,
                LedgerEvent::Transfer {
                    from,
                    to: *project,
                    amount: split.fee,
                },
            ))
    }

    // ── Operations ─────────────────────────────────────────────────────

    /// Move `amount` from the caller to `to`, routing the fee to `project`.
    pub fn transfer(
        &mut self,
        ctx: &Context,
        to: Address,
        amount: Amount,
        fees: &FeePolicy,
        project: &Address,
    ) -> ContractResult {
        self.move_with_fee(ctx.sender(), to, amount, fees, project)
    }

    /// Set `allowance[caller][spender] = amount`, overwriting any prior value.
    pub fn approve(&mut self, ctx: &Context, spender: Address, amount: Amount) -> ContractResult {
        let owner = ctx.sender();
        self.set_allowance(owner, spender, amount);
        Ok(Response::new().add_event(LedgerEvent::Approval {
            owner,
            spender,
            amount,
        }))
    }

    /// Spend the caller's allowance over `from`. The spender's own balance
    /// is never touched.
    pub fn transfer_from(
        &mut self,
        ctx: &Context,
        from: Address,
        to: Address,
        amount: Amount,
        fees: &FeePolicy,
        project: &Address,
    ) -> ContractResult {
        let spender = ctx.sender();
        let available = self.allowance(&from, &spender);
        if available < amount {
            return Err(LedgerError::InsufficientAllowance {
                available,
                required: amount,
            });
        }
        self.ensure_balance(&from, amount)?;
        fees.split(amount)?;

        self.set_allowance(from, spender, available - amount);
        self.move_with_fee(from, to, amount, fees, project)
    }

    /// Move the full `amount` from the caller to `to` with no fee.
    pub fn transfer_without_fee(
        &mut self,
        ctx: &Context,
        to: Address,
        amount: Amount,
    ) -> ContractResult {
        let from = ctx.sender();
        self.ensure_balance(&from, amount)?;
        self.debit(&from, amount)?;
        self.credit(&to, amount)?;
        Ok(Response::new().add_event(LedgerEvent::Transfer { from, to, amount }))
    }

    /// Burn `amount` from the caller. The fee portion goes to `project`;
    /// only the remainder leaves circulation.
    pub fn burn(
        &mut self,
        ctx: &Context,
        amount: Amount,
        fees: &FeePolicy,
        project: &Address,
    ) -> ContractResult {
        let from = ctx.sender();
        self.ensure_balance(&from, amount)?;
        let split = fees.split(amount)?;
        let total_supply = self
            .total_supply
            .checked_sub(split.net)
            .ok_or(LedgerError::Overflow)?;

        self.debit(&from, amount)?;
        self.credit(project, split.fee)?;
        self.total_supply = total_supply;

        Ok(Response::new()
            .add_event_if(
                split.fee > 0,
                LedgerEvent::Transfer {
                    from,
                    to: *project,
                    amount: split.fee,
                },
            )
            .add_event(LedgerEvent::Burn {
                from,
                amount: split.net,
            }))
    }
}
