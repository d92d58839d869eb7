use borsh::{BorshDeserialize, BorshSerialize};
use thiserror::Error;

use crate::primitives::Amount;

/// Privileged role an operation may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum Role {
    /// The immutable administrative account.
    Owner,
    /// Either the fee-beneficiary project account or the owner.
    ProjectOrOwner,
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Role::Owner => f.write_str("caller is not the owner"),
            Role::ProjectOrOwner => f.write_str("caller is neither project nor owner"),
        }
    }
}

/// Every reason a ledger operation can be rejected.
///
/// A rejected operation never mutates ledger state.
#[derive(Debug, Clone, PartialEq, Eq, Error, BorshSerialize, BorshDeserialize)]
pub enum LedgerError {
    #[error("unauthorized: {required}")]
    Unauthorized { required: Role },

    #[error("contract is paused")]
    Paused,

    #[error("insufficient balance: have {available}, need {required}")]
    InsufficientBalance { available: Amount, required: Amount },

    #[error("insufficient allowance: have {available}, need {required}")]
    InsufficientAllowance { available: Amount, required: Amount },

    #[error("new project can't be address zero")]
    InvalidAddress,

    #[error("new project can't be old project")]
    NoChange,

    #[error("native currency transfer failed: {reason}")]
    TransferFailed { reason: String },

    #[error("arithmetic overflow")]
    Overflow,

    #[error("malformed address: {reason}")]
    MalformedAddress { reason: String },

    #[error("serialize: {reason}")]
    Serialization { reason: String },
}

impl LedgerError {
    /// Stable machine-readable reason code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::Unauthorized { .. } => "unauthorized",
            LedgerError::Paused => "paused",
            LedgerError::InsufficientBalance { .. } => "insufficient-balance",
            LedgerError::InsufficientAllowance { .. } => "insufficient-allowance",
            LedgerError::InvalidAddress => "invalid-address",
            LedgerError::NoChange => "no-change",
            LedgerError::TransferFailed { .. } => "transfer-failed",
            LedgerError::Overflow => "overflow",
            LedgerError::MalformedAddress { .. } => "malformed-address",
            LedgerError::Serialization { .. } => "serialization",
        }
    }
}
