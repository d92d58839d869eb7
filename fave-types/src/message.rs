//! Borsh-encoded messages accepted by the ledger's entry points.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::primitives::{Address, Amount, FeeRate};

/// Constructor parameters.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct InitMsg {
    /// Total supply, credited in full to the deploying account.
    pub fixed_supply: Amount,
    /// Initial fee-beneficiary account.
    pub project: Address,
    pub decimals: u8,
    pub fee_ppm: FeeRate,
}

/// State-changing operations. The caller is supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum Execute {
    Transfer { to: Address, amount: Amount },
    Approve { spender: Address, amount: Amount },
    TransferFrom {
        from: Address,
        to: Address,
        amount: Amount,
    },
    TransferWithoutFeeDeduction { to: Address, amount: Amount },
    Burn { amount: Amount },
    Pause,
    Unpause,
    UpdateDecimals { decimals: u8 },
    UpdateFee { fee_ppm: FeeRate },
    UpdateProject { project: Address },
    /// Deposit native currency; the host collects it from the caller.
    Receive { amount: Amount },
    WithdrawAll,
}

impl Execute {
    /// Short action name used in logs.
    pub fn action(&self) -> &'static str {
        match self {
            Execute::Transfer { .. } => "transfer",
            Execute::Approve { .. } => "approve",
            Execute::TransferFrom { .. } => "transfer_from",
            Execute::TransferWithoutFeeDeduction { .. } => "transfer_without_fee_deduction",
            Execute::Burn { .. } => "burn",
            Execute::Pause => "pause",
            Execute::Unpause => "unpause",
            Execute::UpdateDecimals { .. } => "update_decimals",
            Execute::UpdateFee { .. } => "update_fee",
            Execute::UpdateProject { .. } => "update_project",
            Execute::Receive { .. } => "receive",
            Execute::WithdrawAll => "withdraw_all",
        }
    }
}

/// Read-only queries.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum Query {
    Name,
    Symbol,
    Decimals,
    TotalSupply,
    Project,
    ProjectFee,
    BalanceOf { account: Address },
    Allowance { owner: Address, spender: Address },
    Owner,
    IsPaused,
    VaultBalance,
    Info,
}

/// Token metadata returned by [`Query::Info`].
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Amount,
    pub owner: Address,
    pub project: Address,
    pub project_fee: FeeRate,
    pub paused: bool,
}
