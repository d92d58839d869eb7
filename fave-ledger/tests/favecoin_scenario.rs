//! End-to-end Favecoin flow:
//! deploy → admin updates → paused burn → fee-bearing transfer and burn →
//! privileged distribution → delegated transfer → project rotation → vault sweep.

use fave_ledger::testing::*;
use fave_types::{addr_to_hex, Execute, LedgerError, Query, Role, TokenInfo, ZERO_ADDRESS};

const FIXED_SUPPLY: u128 = 10_000_000_000_000_000;
const ONE_ETHER: u128 = 1_000_000_000_000_000_000;

fn owner_only() -> LedgerError {
    LedgerError::Unauthorized {
        required: Role::Owner,
    }
}

#[test]
fn test_full_favecoin_flow() {
    let mut env = TestEnv::new();

    // ── Construction ───────────────────────────────────────────────────
    let info: TokenInfo = from_response(&env.runtime().query(Query::Info).unwrap()).unwrap();
    assert_eq!(info.name, "Favecoin");
    assert_eq!(info.symbol, "FAVE");
    assert_eq!(info.decimals, 7);
    assert_eq!(info.total_supply, FIXED_SUPPLY);
    assert_eq!(info.project, PROJECT);
    assert_eq!(env.balance(&OWNER), FIXED_SUPPLY);

    // ── updateDecimals ─────────────────────────────────────────────────
    env.exec_err(ALICE, Execute::UpdateDecimals { decimals: 18 }, owner_only());
    env.exec(OWNER, Execute::UpdateDecimals { decimals: 18 })
        .unwrap();
    assert_data(&env.runtime().query(Query::Decimals).unwrap(), &18u8);
    env.exec(OWNER, Execute::UpdateDecimals { decimals: 7 }).unwrap();
    assert_eq!(env.balance(&OWNER), FIXED_SUPPLY);

    // ── updateFee ──────────────────────────────────────────────────────
    env.exec_err(ALICE, Execute::UpdateFee { fee_ppm: 35_000 }, owner_only());
    assert_data(&env.runtime().query(Query::ProjectFee).unwrap(), &10_000u64);
    env.exec(OWNER, Execute::UpdateFee { fee_ppm: 35_000 }).unwrap();
    assert_data(&env.runtime().query(Query::ProjectFee).unwrap(), &35_000u64);
    env.exec(OWNER, Execute::UpdateFee { fee_ppm: 10_000 }).unwrap();

    // ── burn while paused ──────────────────────────────────────────────
    env.exec(OWNER, Execute::Pause).unwrap();
    env.exec_err(
        ALICE,
        Execute::Burn {
            amount: 10_000_000_000,
        },
        LedgerError::Paused,
    );
    env.exec(OWNER, Execute::Unpause).unwrap();
    env.exec(
        OWNER,
        Execute::Transfer {
            to: ALICE,
            amount: 10_000_000_000,
        },
    )
    .unwrap();
    assert_eq!(env.balance(&PROJECT), 100_000_000);
    assert_eq!(env.balance(&ALICE), 9_900_000_000);

    // ── burn ───────────────────────────────────────────────────────────
    let resp = env
        .exec(
            ALICE,
            Execute::Burn {
                amount: 9_900_000_000,
            },
        )
        .unwrap();
    assert_event_attribute(&resp, "Burn", "amount", "9801000000");
    assert_eq!(env.balance(&PROJECT), 199_000_000);
    assert_eq!(env.balance(&ALICE), 0);
    assert_eq!(env.token().total_supply(), FIXED_SUPPLY - 9_801_000_000);
    env.assert_conserved();

    // ── transfer ───────────────────────────────────────────────────────
    for holder in [CHARLIE, DAVE] {
        env.exec(
            OWNER,
            Execute::TransferWithoutFeeDeduction {
                to: holder,
                amount: 10_000_000_000,
            },
        )
        .unwrap();
    }
    assert_eq!(env.balance(&PROJECT), 199_000_000);
    assert_eq!(env.balance(&CHARLIE), 10_000_000_000);
    assert_eq!(env.balance(&DAVE), 10_000_000_000);

    env.exec(
        CHARLIE,
        Execute::Transfer {
            to: DAVE,
            amount: 5_000_000_000,
        },
    )
    .unwrap();
    assert_eq!(env.balance(&PROJECT), 249_000_000);
    assert_eq!(env.balance(&CHARLIE), 5_000_000_000);
    assert_eq!(env.balance(&DAVE), 14_950_000_000);

    // ── transferFrom ───────────────────────────────────────────────────
    env.exec(
        DAVE,
        Execute::Approve {
            spender: CHARLIE,
            amount: u128::MAX,
        },
    )
    .unwrap();
    env.exec(
        CHARLIE,
        Execute::TransferFrom {
            from: DAVE,
            to: BOB,
            amount: 5_000_000_000,
        },
    )
    .unwrap();
    assert_eq!(env.balance(&PROJECT), 299_000_000);
    assert_eq!(env.balance(&BOB), 4_950_000_000);
    assert_eq!(env.balance(&DAVE), 9_950_000_000);
    assert_eq!(env.balance(&CHARLIE), 5_000_000_000);

    // ── transferWithoutFeeDeduction ────────────────────────────────────
    env.exec_err(
        MALLORY,
        Execute::TransferWithoutFeeDeduction {
            to: NEW_PROJECT,
            amount: 299_000_000,
        },
        LedgerError::Unauthorized {
            required: Role::ProjectOrOwner,
        },
    );
    env.exec(
        PROJECT,
        Execute::TransferWithoutFeeDeduction {
            to: NEW_PROJECT,
            amount: 299_000_000,
        },
    )
    .unwrap();
    assert_eq!(env.balance(&PROJECT), 0);
    assert_eq!(env.balance(&NEW_PROJECT), 299_000_000);

    // ── updateProject ──────────────────────────────────────────────────
    env.exec_err(
        OWNER,
        Execute::UpdateProject {
            project: ZERO_ADDRESS,
        },
        LedgerError::InvalidAddress,
    );
    env.exec_err(
        OWNER,
        Execute::UpdateProject { project: PROJECT },
        LedgerError::NoChange,
    );
    let resp = env
        .exec(
            OWNER,
            Execute::UpdateProject {
                project: NEW_PROJECT,
            },
        )
        .unwrap();
    assert_event_attribute(&resp, "LogProjectChanged", "oldProject", &addr_to_hex(&PROJECT));
    assert_event_attribute(
        &resp,
        "LogProjectChanged",
        "newProject",
        &addr_to_hex(&NEW_PROJECT),
    );
    assert_data(&env.runtime().query(Query::Project).unwrap(), &NEW_PROJECT);

    // ── withdrawAll ────────────────────────────────────────────────────
    env.fund(OWNER, ONE_ETHER);
    env.exec(OWNER, Execute::Receive { amount: ONE_ETHER })
        .unwrap();
    assert_data(&env.runtime().query(Query::VaultBalance).unwrap(), &ONE_ETHER);
    assert_eq!(env.runtime().bank().balance_of(&OWNER), 0);
    env.exec(OWNER, Execute::WithdrawAll).unwrap();
    assert_data(&env.runtime().query(Query::VaultBalance).unwrap(), &0u128);
    assert_eq!(env.runtime().bank().balance_of(&OWNER), ONE_ETHER);
    assert_eq!(env.runtime().bank().custody(), 0);

    env.assert_conserved();
}

#[test]
fn test_error_messages_match_revert_reasons() {
    let mut env = TestEnv::new();
    let err = env
        .exec(ALICE, Execute::UpdateFee { fee_ppm: 1 })
        .unwrap_err();
    assert!(err.to_string().contains("caller is not the owner"));

    let err = env
        .exec(
            ALICE,
            Execute::TransferWithoutFeeDeduction { to: BOB, amount: 1 },
        )
        .unwrap_err();
    assert!(err
        .to_string()
        .contains("caller is neither project nor owner"));

    env.exec(OWNER, Execute::Pause).unwrap();
    let err = env.exec(OWNER, Execute::Burn { amount: 1 }).unwrap_err();
    assert!(err.to_string().contains("contract is paused"));
}

#[test]
fn test_admin_ops_available_while_paused() {
    let mut env = TestEnv::new();
    env.exec(OWNER, Execute::Pause).unwrap();
    env.exec(OWNER, Execute::UpdateFee { fee_ppm: 20_000 }).unwrap();
    env.exec(OWNER, Execute::UpdateDecimals { decimals: 9 }).unwrap();
    env.exec(
        OWNER,
        Execute::UpdateProject {
            project: NEW_PROJECT,
        },
    )
    .unwrap();
    env.fund(ALICE, 5);
    env.exec(ALICE, Execute::Receive { amount: 5 }).unwrap();
    env.exec(OWNER, Execute::WithdrawAll).unwrap();
    env.exec(
        OWNER,
        Execute::TransferWithoutFeeDeduction { to: BOB, amount: 10 },
    )
    .unwrap();
    env.exec(BOB, Execute::Approve { spender: ALICE, amount: 10 })
        .unwrap();
    env.exec_err(
        ALICE,
        Execute::TransferFrom {
            from: BOB,
            to: ALICE,
            amount: 10,
        },
        LedgerError::Paused,
    );
    assert!(env.token().is_paused());
}

#[test]
fn test_withdraw_rejected_by_host() {
    let mut env = TestEnv::new();
    env.fund(ALICE, ONE_ETHER);
    env.exec(ALICE, Execute::Receive { amount: ONE_ETHER })
        .unwrap();
    env.bank_mut().reject_payouts("owner account refuses payment");
    let before = env.state_hash();

    env.exec_err(
        OWNER,
        Execute::WithdrawAll,
        LedgerError::TransferFailed {
            reason: "owner account refuses payment".into(),
        },
    );
    assert_eq!(env.state_hash(), before);
    assert_eq!(env.token().vault_balance(), ONE_ETHER);

    env.bank_mut().accept_payouts();
    env.exec(OWNER, Execute::WithdrawAll).unwrap();
    assert_eq!(env.token().vault_balance(), 0);
}

#[test]
fn test_unfunded_deposit_rejected() {
    let mut env = TestEnv::new();
    let before = env.state_hash();
    let err = env
        .exec(MALLORY, Execute::Receive { amount: 1_000_000 })
        .unwrap_err();
    assert_eq!(err.ledger_error().map(|e| e.code()), Some("transfer-failed"));
    assert_eq!(env.state_hash(), before);
    assert_eq!(env.token().vault_balance(), 0);

    env.exec(OWNER, Execute::WithdrawAll).unwrap();
    assert_eq!(env.runtime().bank().balance_of(&OWNER), 0);
}

#[test]
fn test_failure_table() {
    let mut env = TestEnv::new();
    let owner_only = LedgerError::Unauthorized {
        required: Role::Owner,
    };

    env.exec(OWNER, Execute::Pause).unwrap();
    env.exec_err(MALLORY, Execute::Unpause, owner_only.clone());
    env.exec_err(PROJECT, Execute::Unpause, owner_only.clone());
    assert!(env.token().is_paused());
    env.exec(OWNER, Execute::Unpause).unwrap();
    env.exec_err(MALLORY, Execute::Pause, owner_only.clone());

    env.fund(ALICE, 50);
    env.exec(ALICE, Execute::Receive { amount: 50 }).unwrap();
    env.exec_err(MALLORY, Execute::WithdrawAll, owner_only.clone());
    env.exec_err(PROJECT, Execute::WithdrawAll, owner_only);
    assert_eq!(env.token().vault_balance(), 50);

    env.exec_err(
        ALICE,
        Execute::Burn { amount: 1 },
        LedgerError::InsufficientBalance {
            available: 0,
            required: 1,
        },
    );
    env.exec_err(
        PROJECT,
        Execute::TransferWithoutFeeDeduction { to: BOB, amount: 1 },
        LedgerError::InsufficientBalance {
            available: 0,
            required: 1,
        },
    );
    env.assert_conserved();
}

#[test]
fn test_committed_event_log() {
    let mut env = TestEnv::new();
    env.exec(
        OWNER,
        Execute::Transfer {
            to: ALICE,
            amount: 1_000_000,
        },
    )
    .unwrap();
    env.exec_err(
        ALICE,
        Execute::Transfer {
            to: BOB,
            amount: 10_000_000,
        },
        LedgerError::InsufficientBalance {
            available: 990_000,
            required: 10_000_000,
        },
    );
    env.exec(OWNER, Execute::Pause).unwrap();
    env.exec(OWNER, Execute::Pause).unwrap();

    let types: Vec<&str> = env.runtime().events().iter().map(|e| e.ty()).collect();
    assert_eq!(types, ["Transfer", "Transfer", "Paused"]);
}
