//! Authorization policy for privileged vault operations.
//!
//! Handlers never compare the sender against a stored role themselves. They
//! ask an `AuthPolicy` whether the sender may perform an `Action`, so the
//! deployed single-administrator rule can be replaced (multi-sig approval,
//! time-locked governance) without touching the ledger logic.

use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::state::CONFIG;

/// Privileged operations guarded by the policy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    SetAdministrator,
    SetNodeManager,
    RegisterToken,
    SendToken,
    UpdateHardening,
}

pub trait AuthPolicy {
    fn authorize(
        &self,
        storage: &dyn Storage,
        sender: &Addr,
        action: Action,
    ) -> Result<(), ContractError>;
}

/// Deployed policy: the current administrator may perform every action.
pub struct RoleAuthorizer;

impl AuthPolicy for RoleAuthorizer {
    fn authorize(
        &self,
        storage: &dyn Storage,
        sender: &Addr,
        _action: Action,
    ) -> Result<(), ContractError> {
        let config = CONFIG.load(storage)?;
        if *sender != config.administrator {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }
}
