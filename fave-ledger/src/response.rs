//! Structured success value returned by every ledger operation.
//!
//! A [`Response`] carries optional borsh-encoded data plus the events the
//! operation emitted. Events are only observable once the host commits the
//! call; a rejected call produces no response at all.

use borsh::BorshSerialize;
use fave_types::{LedgerError, LedgerEvent};

/// The result type returned by ledger `execute` and `query` paths.
pub type ContractResult = Result<Response, LedgerError>;

/// Ledger response with optional data and emitted events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    data: Vec<u8>,
    events: Vec<LedgerEvent>,
}

impl Response {
    /// Create an empty response.
    pub fn new() -> Self {
        Response::default()
    }

    /// Append an event.
    pub fn add_event(mut self, event: LedgerEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Append an event only when `emit` is true.
    pub fn add_event_if(self, emit: bool, event: LedgerEvent) -> Self {
        if emit {
            self.add_event(event)
        } else {
            self
        }
    }

    /// Raw response data bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Events emitted, in order.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }
}

/// Shorthand for a response that only carries `value` as data.
pub fn ok<T: BorshSerialize>(value: T) -> ContractResult {
    let data = borsh::to_vec(&value).map_err(|e| LedgerError::Serialization {
        reason: e.to_string(),
    })?;
    Ok(Response {
        data,
        events: Vec::new(),
    })
}
