//! Shared type definitions for the Favecoin token ledger.

pub mod constants;
pub mod error;
pub mod event;
pub mod message;
pub mod primitives;

pub use error::{LedgerError, Role};
pub use event::LedgerEvent;
pub use message::{Execute, InitMsg, Query, TokenInfo};
pub use primitives::{addr_to_hex, hex_to_addr, Address, Amount, FeeRate, ZERO_ADDRESS};
