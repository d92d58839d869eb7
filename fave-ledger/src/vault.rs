//! Custody of native currency sent to the ledger.

use borsh::{BorshDeserialize, BorshSerialize};
use fave_types::{Amount, LedgerError, LedgerEvent};
use tracing::info;

use crate::access::AccessControl;
use crate::context::Context;
use crate::host::NativeBank;
use crate::response::{ContractResult, Response};

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct CurrencyVault {
    held: Amount,
}

impl CurrencyVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> Amount {
        self.held
    }

    /// Take `amount` of native currency from the caller into custody. Open
    /// to any caller; the host rejects deposits the caller cannot fund.
    pub fn receive(
        &mut self,
        ctx: &Context,
        bank: &mut dyn NativeBank,
        amount: Amount,
    ) -> ContractResult {
        let from = ctx.sender();
        let held = self.held.checked_add(amount).ok_or(LedgerError::Overflow)?;
        bank.collect(&from, amount)
            .map_err(|reason| LedgerError::TransferFailed { reason })?;
        self.held = held;
        Ok(Response::new().add_event(LedgerEvent::Deposit { from, amount }))
    }

    /// Pay the entire held balance to the owner (owner-only). The payout is
    /// the last step, so a rejection leaves the vault untouched.
    pub fn withdraw_all(
        &mut self,
        ctx: &Context,
        access: &AccessControl,
        bank: &mut dyn NativeBank,
    ) -> ContractResult {
        access.require_owner(ctx)?;
        let owner = access.owner();
        let amount = self.held;
        bank.pay(&owner, amount)
            .map_err(|reason| LedgerError::TransferFailed { reason })?;
        self.held = 0;
        info!(amount, "vault withdrawn");
        Ok(Response::new().add_event(LedgerEvent::Withdrawal { to: owner, amount }))
    }
}
