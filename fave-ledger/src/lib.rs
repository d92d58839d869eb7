//! Favecoin: a fixed-supply fungible token ledger with a per-transfer
//! project fee, an emergency pause switch and custody of native currency.
//!
//! The [`FaveToken`] contract composes six components:
//! [`AccessControl`], [`PauseGate`], [`FeePolicy`], [`Ledger`],
//! [`TreasuryOps`] and [`CurrencyVault`]. A [`Runtime`] hosts a deployed
//! token and makes every call atomic.

pub mod access;
pub mod config;
pub mod context;
pub mod error;
pub mod fee;
pub mod host;
pub mod ledger;
pub mod pause;
pub mod response;
pub mod runtime;
#[cfg(feature = "testing")]
pub mod testing;
pub mod token;
pub mod treasury;
pub mod vault;

pub use access::AccessControl;
pub use config::TokenConfig;
pub use context::Context;
pub use error::RuntimeError;
pub use fee::{compute_fee, FeePolicy, FeeSplit};
pub use host::{MemoryBank, NativeBank, Payout};
pub use ledger::Ledger;
pub use pause::{PauseGate, PauseState};
pub use response::{ContractResult, Response};
pub use runtime::Runtime;
pub use token::{FaveToken, TokenMetadata};
pub use treasury::TreasuryOps;
pub use vault::CurrencyVault;
