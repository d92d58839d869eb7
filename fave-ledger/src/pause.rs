//! Emergency pause switch.
//!
//! While paused, fee-bearing transfers, delegated transfers and burns are
//! rejected with [`LedgerError::Paused`]. Approvals, privileged transfers,
//! administrative updates and vault operations are unaffected.

use borsh::{BorshDeserialize, BorshSerialize};
use fave_types::{LedgerError, LedgerEvent};
use tracing::info;

use crate::access::AccessControl;
use crate::context::Context;
use crate::response::{ContractResult, Response};

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum PauseState {
    Active,
    Paused,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PauseGate {
    state: PauseState,
}

impl PauseGate {
    /// A fresh gate starts active.
    pub fn new() -> Self {
        PauseGate {
            state: PauseState::Active,
        }
    }

    pub fn state(&self) -> PauseState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == PauseState::Paused
    }

    /// Assert that the ledger is active.
    pub fn require_active(&self) -> Result<(), LedgerError> {
        if self.is_paused() {
            return Err(LedgerError::Paused);
        }
        Ok(())
    }

    /// Pause the ledger (owner-only). Pausing an already paused ledger
    /// succeeds without emitting an event.
    pub fn pause(&mut self, ctx: &Context, access: &AccessControl) -> ContractResult {
        access.require_owner(ctx)?;
        if self.is_paused() {
            return Ok(Response::new());
        }
        self.state = PauseState::Paused;
        info!("ledger paused");
        Ok(Response::new().add_event(LedgerEvent::Paused {
            account: ctx.sender(),
        }))
    }

    /// Unpause the ledger (owner-only). Idempotent like [`pause`](Self::pause).
    pub fn unpause(&mut self, ctx: &Context, access: &AccessControl) -> ContractResult {
        access.require_owner(ctx)?;
        if !self.is_paused() {
            return Ok(Response::new());
        }
        self.state = PauseState::Active;
        info!("ledger unpaused");
        Ok(Response::new().add_event(LedgerEvent::Unpaused {
            account: ctx.sender(),
        }))
    }
}

impl Default for PauseGate {
    fn default() -> Self {
        Self::new()
    }
}
