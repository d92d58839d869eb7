//! Test harness for ledger behavior.
//!
//! ```ignore
//! use fave_ledger::testing::*;
//!
//! #[test]
//! fn test_something() {
//!     let mut env = TestEnv::new();
//!     let resp = env.exec(OWNER, Execute::Transfer { to: ALICE, amount: 100 }).unwrap();
//!     assert_event(&resp, "Transfer");
//! }
//! ```

use std::fmt::Debug;

use borsh::BorshDeserialize;
use fave_types::{addr_to_hex, Address, Amount, Execute, LedgerError};
use tracing_subscriber::EnvFilter;

use crate::config::TokenConfig;
use crate::error::RuntimeError;
use crate::host::MemoryBank;
use crate::response::Response;
use crate::runtime::Runtime;
use crate::token::FaveToken;

pub const OWNER: Address = [1u8; 20];
pub const ALICE: Address = [2u8; 20];
pub const BOB: Address = [3u8; 20];
pub const CHARLIE: Address = [4u8; 20];
pub const DAVE: Address = [5u8; 20];
pub const PROJECT: Address = [6u8; 20];
pub const NEW_PROJECT: Address = [7u8; 20];
pub const MALLORY: Address = [8u8; 20];

/// Install a fmt subscriber honouring `RUST_LOG` (default `info`) that
/// writes through the test harness. Safe to call from every test.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// A deployed ledger with `OWNER` as owner and `PROJECT` as project.
pub struct TestEnv {
    runtime: Runtime<MemoryBank>,
}

impl TestEnv {
    /// Deploy with default supply, decimals and fee.
    pub fn new() -> Self {
        Self::with_config(TokenConfig {
            project: addr_to_hex(&PROJECT),
            ..TokenConfig::default()
        })
    }

    pub fn with_config(config: TokenConfig) -> Self {
        init_tracing();
        let runtime = Runtime::deploy(OWNER, &config, MemoryBank::new())
            .unwrap_or_else(|e| panic!("TestEnv: deploy failed: {e}"));
        TestEnv { runtime }
    }

    pub fn exec(&mut self, sender: Address, msg: Execute) -> Result<Response, RuntimeError> {
        self.runtime.execute(sender, msg)
    }

    /// Execute and expect the ledger to reject with `expected`.
    pub fn exec_err(&mut self, sender: Address, msg: Execute, expected: LedgerError) {
        match self.runtime.execute(sender, msg) {
            Ok(resp) => panic!("expected {expected:?}, call succeeded: {resp:?}"),
            Err(err) => assert_eq!(err.ledger_error(), Some(&expected), "got {err}"),
        }
    }

    pub fn token(&self) -> &FaveToken {
        self.runtime.token()
    }

    pub fn balance(&self, account: &Address) -> Amount {
        self.runtime.token().balance_of(account)
    }

    pub fn runtime(&self) -> &Runtime<MemoryBank> {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime<MemoryBank> {
        &mut self.runtime
    }

    pub fn bank_mut(&mut self) -> &mut MemoryBank {
        self.runtime.bank_mut()
    }

    /// Give `account` native currency it can deposit.
    pub fn fund(&mut self, account: Address, amount: Amount) {
        self.runtime.bank_mut().fund(account, amount);
    }

    pub fn state_hash(&self) -> [u8; 32] {
        self.runtime
            .state_hash()
            .unwrap_or_else(|e| panic!("TestEnv: state hash failed: {e}"))
    }

    /// Assert `sum(balances) == total_supply`.
    pub fn assert_conserved(&self) {
        let ledger = self.token().ledger();
        assert_eq!(
            ledger.sum_balances(),
            Some(ledger.total_supply()),
            "balances no longer sum to total supply"
        );
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

// ── Assertion helpers ──────────────────────────────────────────────────

/// Deserialize the data from a `Response` as a borsh-encoded value.
pub fn from_response<T: BorshDeserialize>(response: &Response) -> Result<T, RuntimeError> {
    T::try_from_slice(response.data()).map_err(|e| RuntimeError::Serialization {
        reason: format!("deserialize response: {e}"),
    })
}

/// Assert that a `Response` contains borsh-encoded data equal to `expected`.
pub fn assert_data<T: BorshDeserialize + Debug + PartialEq>(response: &Response, expected: &T) {
    let actual: T = from_response(response).expect("assert_data: failed to deserialize response");
    assert_eq!(&actual, expected);
}

/// Assert that a `Response` contains an event with the given type name.
pub fn assert_event(response: &Response, ty: &str) {
    if response.events().iter().any(|e| e.ty() == ty) {
        return;
    }
    panic!(
        "expected event '{}', found: [{}]",
        ty,
        response
            .events()
            .iter()
            .map(|e| e.ty())
            .collect::<Vec<_>>()
            .join(", ")
    );
}

/// Assert that a `Response` contains an event with the given type and attribute.
pub fn assert_event_attribute(response: &Response, ty: &str, key: &str, value: &str) {
    let found = response.events().iter().any(|e| {
        e.ty() == ty
            && e
                .attributes()
                .iter()
                .any(|(k, v)| k == key && v == value)
    });
    if found {
        return;
    }
    panic!(
        "expected event '{}' with attribute {}={}, found events: [{}]",
        ty,
        key,
        value,
        response
            .events()
            .iter()
            .map(|e| format!(
                "{}({})",
                e.ty(),
                e.attributes()
                    .iter()
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
            .collect::<Vec<_>>()
            .join(", ")
    );
}
