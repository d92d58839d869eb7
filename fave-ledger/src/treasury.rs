//! Owner-only administrative updates.

use fave_types::{Address, FeeRate, LedgerError, LedgerEvent, ZERO_ADDRESS};
use tracing::info;

use crate::access::AccessControl;
use crate::context::Context;
use crate::fee::FeePolicy;
use crate::response::{ContractResult, Response};
use crate::token::TokenMetadata;

/// Administrative operations. All methods are static and take the state
/// they touch explicitly. None of them is gated by the pause switch.
pub struct TreasuryOps;

impl TreasuryOps {
    /// Overwrite the display decimals. Balances are not rescaled.
    pub fn update_decimals(
        ctx: &Context,
        access: &AccessControl,
        metadata: &mut TokenMetadata,
        decimals: u8,
    ) -> ContractResult {
        access.require_owner(ctx)?;
        let old = std::mem::replace(&mut metadata.decimals, decimals);
        info!(old, new = decimals, "decimals updated");
        Ok(Response::new().add_event(LedgerEvent::DecimalsUpdated { old, new: decimals }))
    }

    /// Replace the fee rate. No bounds are enforced here; a rate that would
    /// make a fee exceed its amount is rejected by the transfer itself.
    pub fn update_fee(
        ctx: &Context,
        access: &AccessControl,
        fees: &mut FeePolicy,
        fee_ppm: FeeRate,
    ) -> ContractResult {
        access.require_owner(ctx)?;
        let old = fees.set_rate(fee_ppm);
        info!(old, new = fee_ppm, "fee rate updated");
        Ok(Response::new().add_event(LedgerEvent::FeeUpdated { old, new: fee_ppm }))
    }

    /// Rotate the fee-beneficiary account.
    pub fn update_project(
        ctx: &Context,
        access: &mut AccessControl,
        project: Address,
    ) -> ContractResult {
        access.require_owner(ctx)?;
        if project == ZERO_ADDRESS {
            return Err(LedgerError::InvalidAddress);
        }
        if project == access.project() {
            return Err(LedgerError::NoChange);
        }
        let old_project = access.set_project(project);
        info!(
            old = %fave_types::addr_to_hex(&old_project),
            new = %fave_types::addr_to_hex(&project),
            "project changed"
        );
        Ok(Response::new().add_event(LedgerEvent::ProjectChanged {
            old_project,
            new_project: project,
        }))
    }
}
