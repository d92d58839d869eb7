//! Owner / project role checks.
//!
//! The owner is fixed at creation. The project account is the fee
//! beneficiary and may run privileged unfee'd transfers; it can be rotated
//! by the owner through [`TreasuryOps::update_project`](crate::treasury::TreasuryOps::update_project).

use borsh::{BorshDeserialize, BorshSerialize};
use fave_types::{Address, LedgerError, Role};

use crate::context::Context;

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct AccessControl {
    owner: Address,
    project: Address,
}

impl AccessControl {
    pub fn new(owner: Address, project: Address) -> Self {
        AccessControl { owner, project }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn project(&self) -> Address {
        self.project
    }

    pub fn is_owner(&self, caller: &Address) -> bool {
        *caller == self.owner
    }

    pub fn is_project_or_owner(&self, caller: &Address) -> bool {
        *caller == self.project || self.is_owner(caller)
    }

    /// Assert that the caller is the owner.
    pub fn require_owner(&self, ctx: &Context) -> Result<(), LedgerError> {
        ctx.require_sender(
            &self.owner,
            LedgerError::Unauthorized {
                required: Role::Owner,
            },
        )
    }

    /// Assert that the caller is the project account or the owner.
    pub fn require_project_or_owner(&self, ctx: &Context) -> Result<(), LedgerError> {
        if !self.is_project_or_owner(&ctx.sender()) {
            return Err(LedgerError::Unauthorized {
                required: Role::ProjectOrOwner,
            });
        }
        Ok(())
    }

    /// Replace the project account, returning the previous one.
    pub(crate) fn set_project(&mut self, project: Address) -> Address {
        std::mem::replace(&mut self.project, project)
    }
}
