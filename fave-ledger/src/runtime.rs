//! Host-side executor for a deployed ledger.
//!
//! The runtime owns the token state and the native bank, serializes calls,
//! and makes each call all-or-nothing: the state is snapshotted before
//! execution and restored if the call fails. Committed events are appended
//! to a log that callers can read back.

use borsh::BorshDeserialize;
use fave_types::{addr_to_hex, Address, Execute, LedgerEvent, Query};
use tracing::{debug, info, warn};

use crate::config::TokenConfig;
use crate::context::Context;
use crate::error::RuntimeError;
use crate::host::NativeBank;
use crate::response::Response;
use crate::token::FaveToken;

pub struct Runtime<B: NativeBank> {
    token: FaveToken,
    bank: B,
    events: Vec<LedgerEvent>,
}

impl<B: NativeBank> Runtime<B> {
    /// Deploy a fresh ledger owned by `owner`.
    pub fn deploy(owner: Address, config: &TokenConfig, bank: B) -> Result<Self, RuntimeError> {
        let msg = config.to_init_msg()?;
        info!(
            owner = %addr_to_hex(&owner),
            project = %addr_to_hex(&msg.project),
            supply = msg.fixed_supply,
            fee_ppm = msg.fee_ppm,
            "ledger deployed"
        );
        Ok(Runtime {
            token: FaveToken::new(&Context::new(owner), msg),
            bank,
            events: Vec::new(),
        })
    }

    /// Resume from state previously produced by [`export_state`](Self::export_state).
    pub fn restore(state: &[u8], bank: B) -> Result<Self, RuntimeError> {
        if state.is_empty() {
            return Err(RuntimeError::NotInitialized);
        }
        let token = FaveToken::try_from_slice(state).map_err(|e| RuntimeError::Serialization {
            reason: format!("failed to decode ledger state: {e}"),
        })?;
        Ok(Runtime {
            token,
            bank,
            events: Vec::new(),
        })
    }

    pub fn export_state(&self) -> Result<Vec<u8>, RuntimeError> {
        borsh::to_vec(&self.token).map_err(|e| RuntimeError::Serialization {
            reason: e.to_string(),
        })
    }

    /// BLAKE3 hash of the borsh-encoded ledger state.
    pub fn state_hash(&self) -> Result<[u8; 32], RuntimeError> {
        Ok(*blake3::hash(&self.export_state()?).as_bytes())
    }

    /// Run one state-changing call as `sender`.
    pub fn execute(&mut self, sender: Address, msg: Execute) -> Result<Response, RuntimeError> {
        let action = msg.action();
        debug!(sender = %addr_to_hex(&sender), action, "execute");

        let ctx = Context::new(sender);
        let snapshot = self.token.clone();
        match self.token.execute(&ctx, &mut self.bank, msg) {
            Ok(response) => {
                self.events.extend_from_slice(response.events());
                Ok(response)
            }
            Err(err) => {
                self.token = snapshot;
                warn!(action, code = err.code(), reason = %err, "execution rolled back");
                Err(err.into())
            }
        }
    }

    /// Decode a borsh [`Execute`] message and run it.
    pub fn execute_raw(&mut self, sender: Address, input: &[u8]) -> Result<Response, RuntimeError> {
        let msg = Execute::try_from_slice(input).map_err(|e| RuntimeError::Serialization {
            reason: format!("failed to decode execute message: {e}"),
        })?;
        self.execute(sender, msg)
    }

    pub fn query(&self, msg: Query) -> Result<Response, RuntimeError> {
        Ok(self.token.query(msg)?)
    }

    /// Decode a borsh [`Query`] message and answer it.
    pub fn query_raw(&self, input: &[u8]) -> Result<Response, RuntimeError> {
        let msg = Query::try_from_slice(input).map_err(|e| RuntimeError::Serialization {
            reason: format!("failed to decode query message: {e}"),
        })?;
        self.query(msg)
    }

    pub fn token(&self) -> &FaveToken {
        &self.token
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }

    pub fn bank_mut(&mut self) -> &mut B {
        &mut self.bank
    }

    /// Every event committed so far, in order.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}
