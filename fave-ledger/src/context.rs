//! Caller identity supplied by the host on every call.

use fave_types::{Address, LedgerError};

/// Execution context for a single ledger call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    sender: Address,
}

impl Context {
    pub fn new(sender: Address) -> Self {
        Context { sender }
    }

    /// The account that invoked the current operation.
    pub fn sender(&self) -> Address {
        self.sender
    }

    /// Fail with `err` unless the caller is `expected`.
    pub fn require_sender(&self, expected: &Address, err: LedgerError) -> Result<(), LedgerError> {
        if self.sender != *expected {
            return Err(err);
        }
        Ok(())
    }
}
