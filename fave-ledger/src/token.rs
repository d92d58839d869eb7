//! The Favecoin contract: component state plus guarded entry points.
//!
//! Each mutating entry point runs its role and pause guards before
//! delegating to the owning component. The pause-gated set is exactly
//! `transfer`, `transfer_from` and `burn`.

use borsh::{BorshDeserialize, BorshSerialize};
use fave_types::constants::{TOKEN_NAME, TOKEN_SYMBOL};
use fave_types::{Address, Amount, Execute, FeeRate, InitMsg, Query, TokenInfo};

use crate::access::AccessControl;
use crate::context::Context;
use crate::fee::FeePolicy;
use crate::host::NativeBank;
use crate::ledger::Ledger;
use crate::pause::PauseGate;
use crate::response::{ok, ContractResult};
use crate::treasury::TreasuryOps;
use crate::vault::CurrencyVault;

/// Display metadata. Name and symbol are fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl TokenMetadata {
    pub fn new(decimals: u8) -> Self {
        TokenMetadata {
            name: TOKEN_NAME.to_string(),
            symbol: TOKEN_SYMBOL.to_string(),
            decimals,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct FaveToken {
    metadata: TokenMetadata,
    access: AccessControl,
    gate: PauseGate,
    fees: FeePolicy,
    ledger: Ledger,
    vault: CurrencyVault,
}

impl FaveToken {
    /// Create the token. The caller becomes the owner and receives the
    /// whole fixed supply.
    pub fn new(ctx: &Context, msg: InitMsg) -> Self {
        let owner = ctx.sender();
        FaveToken {
            metadata: TokenMetadata::new(msg.decimals),
            access: AccessControl::new(owner, msg.project),
            gate: PauseGate::new(),
            fees: FeePolicy::new(msg.fee_ppm),
            ledger: Ledger::with_supply(owner, msg.fixed_supply),
            vault: CurrencyVault::new(),
        }
    }

    // ── Guarded entry points ───────────────────────────────────────────

    pub fn transfer(&mut self, ctx: &Context, to: Address, amount: Amount) -> ContractResult {
        self.gate.require_active()?;
        let project = self.access.project();
        self.ledger.transfer(ctx, to, amount, &self.fees, &project)
    }

    pub fn approve(&mut self, ctx: &Context, spender: Address, amount: Amount) -> ContractResult {
        self.ledger.approve(ctx, spender, amount)
    }

    pub fn transfer_from(
        &mut self,
        ctx: &Context,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> ContractResult {
        self.gate.require_active()?;
        let project = self.access.project();
        self.ledger
            .transfer_from(ctx, from, to, amount, &self.fees, &project)
    }

    pub fn transfer_without_fee_deduction(
        &mut self,
        ctx: &Context,
        to: Address,
        amount: Amount,
    ) -> ContractResult {
        self.access.require_project_or_owner(ctx)?;
        self.ledger.transfer_without_fee(ctx, to, amount)
    }

    pub fn burn(&mut self, ctx: &Context, amount: Amount) -> ContractResult {
        self.gate.require_active()?;
        let project = self.access.project();
        self.ledger.burn(ctx, amount, &self.fees, &project)
    }

    pub fn pause(&mut self, ctx: &Context) -> ContractResult {
        self.gate.pause(ctx, &self.access)
    }

    pub fn unpause(&mut self, ctx: &Context) -> ContractResult {
        self.gate.unpause(ctx, &self.access)
    }

    pub fn update_decimals(&mut self, ctx: &Context, decimals: u8) -> ContractResult {
        TreasuryOps::update_decimals(ctx, &self.access, &mut self.metadata, decimals)
    }

    pub fn update_fee(&mut self, ctx: &Context, fee_ppm: FeeRate) -> ContractResult {
        TreasuryOps::update_fee(ctx, &self.access, &mut self.fees, fee_ppm)
    }

    pub fn update_project(&mut self, ctx: &Context, project: Address) -> ContractResult {
        TreasuryOps::update_project(ctx, &mut self.access, project)
    }

    pub fn receive(
        &mut self,
        ctx: &Context,
        bank: &mut dyn NativeBank,
        amount: Amount,
    ) -> ContractResult {
        self.vault.receive(ctx, bank, amount)
    }

    pub fn withdraw_all(&mut self, ctx: &Context, bank: &mut dyn NativeBank) -> ContractResult {
        self.vault.withdraw_all(ctx, &self.access, bank)
    }

    /// Dispatch an [`Execute`] message.
    pub fn execute(
        &mut self,
        ctx: &Context,
        bank: &mut dyn NativeBank,
        msg: Execute,
    ) -> ContractResult {
        match msg {
            Execute::Transfer { to, amount } => self.transfer(ctx, to, amount),
            Execute::Approve { spender, amount } => self.approve(ctx, spender, amount),
            Execute::TransferFrom { from, to, amount } => {
                self.transfer_from(ctx, from, to, amount)
            }
            Execute::TransferWithoutFeeDeduction { to, amount } => {
                self.transfer_without_fee_deduction(ctx, to, amount)
            }
            Execute::Burn { amount } => self.burn(ctx, amount),
            Execute::Pause => self.pause(ctx),
            Execute::Unpause => self.unpause(ctx),
            Execute::UpdateDecimals { decimals } => self.update_decimals(ctx, decimals),
            Execute::UpdateFee { fee_ppm } => self.update_fee(ctx, fee_ppm),
            Execute::UpdateProject { project } => self.update_project(ctx, project),
            Execute::Receive { amount } => self.receive(ctx, bank, amount),
            Execute::WithdrawAll => self.withdraw_all(ctx, bank),
        }
    }

    // ── Reads ──────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    pub fn total_supply(&self) -> Amount {
        self.ledger.total_supply()
    }

    pub fn owner(&self) -> Address {
        self.access.owner()
    }

    pub fn project(&self) -> Address {
        self.access.project()
    }

    pub fn project_fee(&self) -> FeeRate {
        self.fees.rate_ppm()
    }

    pub fn is_paused(&self) -> bool {
        self.gate.is_paused()
    }

    pub fn balance_of(&self, account: &Address) -> Amount {
        self.ledger.balance_of(account)
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.ledger.allowance(owner, spender)
    }

    pub fn vault_balance(&self) -> Amount {
        self.vault.held()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn info(&self) -> TokenInfo {
        TokenInfo {
            name: self.metadata.name.clone(),
            symbol: self.metadata.symbol.clone(),
            decimals: self.metadata.decimals,
            total_supply: self.total_supply(),
            owner: self.owner(),
            project: self.project(),
            project_fee: self.project_fee(),
            paused: self.is_paused(),
        }
    }

    /// Answer a [`Query`] with borsh-encoded data.
    pub fn query(&self, msg: Query) -> ContractResult {
        match msg {
            Query::Name => ok(self.metadata.name.clone()),
            Query::Symbol => ok(self.metadata.symbol.clone()),
            Query::Decimals => ok(self.decimals()),
            Query::TotalSupply => ok(self.total_supply()),
            Query::Project => ok(self.project()),
            Query::ProjectFee => ok(self.project_fee()),
            Query::BalanceOf { account } => ok(self.balance_of(&account)),
            Query::Allowance { owner, spender } => ok(self.allowance(&owner, &spender)),
            Query::Owner => ok(self.owner()),
            Query::IsPaused => ok(self.is_paused()),
            Query::VaultBalance => ok(self.vault_balance()),
            Query::Info => ok(self.info()),
        }
    }
}
