use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::primitives::{addr_to_hex, Address, Amount, FeeRate};

/// A state-change notification emitted by a successful ledger operation.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// Tokens moved between two accounts (fee credits included).
    Transfer {
        from: Address,
        to: Address,
        amount: Amount,
    },
    /// An allowance was set.
    Approval {
        owner: Address,
        spender: Address,
        amount: Amount,
    },
    /// Tokens permanently removed from circulation.
    Burn { from: Address, amount: Amount },
    /// The fee-beneficiary account was rotated.
    ProjectChanged {
        old_project: Address,
        new_project: Address,
    },
    Paused { account: Address },
    Unpaused { account: Address },
    DecimalsUpdated { old: u8, new: u8 },
    FeeUpdated { old: FeeRate, new: FeeRate },
    /// Native currency entered the ledger's custody.
    Deposit { from: Address, amount: Amount },
    /// Native currency swept out of custody.
    Withdrawal { to: Address, amount: Amount },
}

impl LedgerEvent {
    /// Event type name.
    pub fn ty(&self) -> &'static str {
        match self {
            LedgerEvent::Transfer { .. } => "Transfer",
            LedgerEvent::Approval { .. } => "Approval",
            LedgerEvent::Burn { .. } => "Burn",
            LedgerEvent::ProjectChanged { .. } => "LogProjectChanged",
            LedgerEvent::Paused { .. } => "Paused",
            LedgerEvent::Unpaused { .. } => "Unpaused",
            LedgerEvent::DecimalsUpdated { .. } => "DecimalsUpdated",
            LedgerEvent::FeeUpdated { .. } => "FeeUpdated",
            LedgerEvent::Deposit { .. } => "Deposit",
            LedgerEvent::Withdrawal { .. } => "Withdrawal",
        }
    }

    /// Key-value attributes with hex addresses and decimal amounts.
    pub fn attributes(&self) -> Vec<(String, String)> {
        fn addr(key: &str, a: &Address) -> (String, String) {
            (key.to_string(), addr_to_hex(a))
        }
        fn num(key: &str, n: impl ToString) -> (String, String) {
            (key.to_string(), n.to_string())
        }

        match self {
            LedgerEvent::Transfer { from, to, amount } => {
                vec![addr("from", from), addr("to", to), num("amount", amount)]
            }
            LedgerEvent::Approval {
                owner,
                spender,
                amount,
            } => vec![
                addr("owner", owner),
                addr("spender", spender),
                num("amount", amount),
            ],
            LedgerEvent::Burn { from, amount } => vec![addr("from", from), num("amount", amount)],
            LedgerEvent::ProjectChanged {
                old_project,
                new_project,
            } => vec![
                addr("oldProject", old_project),
                addr("newProject", new_project),
            ],
            LedgerEvent::Paused { account } | LedgerEvent::Unpaused { account } => {
                vec![addr("account", account)]
            }
            LedgerEvent::DecimalsUpdated { old, new } => vec![num("old", old), num("new", new)],
            LedgerEvent::FeeUpdated { old, new } => vec![num("old", old), num("new", new)],
            LedgerEvent::Deposit { from, amount } => {
                vec![addr("from", from), num("amount", amount)]
            }
            LedgerEvent::Withdrawal { to, amount } => vec![addr("to", to), num("amount", amount)],
        }
    }
}
