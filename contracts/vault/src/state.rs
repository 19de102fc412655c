//! State definitions for the Fooswap vault contract
//!
//! The vault stores only its role store, hardening switches and the token
//! registry. Custody balances are not stored; they belong to the bank module
//! and to each CW20 contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;
use common::AssetInfo;

// ============================================================================
// Core Configuration
// ============================================================================

/// Role store and hardening switches
#[cw_serde]
pub struct Config {
    /// Account with full control over roles, registry and custody
    pub administrator: Addr,
    /// Trusted off-chain operator of the bridge pair
    pub node_manager: Addr,
    /// Optional guards on top of the base vault behavior
    pub hardening: Hardening,
}

/// Hardening switches
#[cw_serde]
pub struct Hardening {
    /// Reject deposits and payouts of a zero amount
    pub reject_zero_amounts: bool,
    /// Add a `vault_deposit` event to deposit responses
    pub emit_deposit_events: bool,
}

impl Default for Hardening {
    fn default() -> Self {
        Hardening {
            reject_zero_amounts: true,
            emit_deposit_events: false,
        }
    }
}

impl Hardening {
    pub fn check_amount(&self, amount: Uint128) -> Result<(), ContractError> {
        if self.reject_zero_amounts && amount.is_zero() {
            return Err(ContractError::InvalidAmount {
                reason: "amount must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:fooswap-vault";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default page size for registry enumeration
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Maximum page size for registry enumeration
pub const MAX_PAGE_LIMIT: u32 = 50;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Foreign token (normalised hex) => local asset
pub const TOKEN_REGISTRY: Map<&str, AssetInfo> = Map::new("token_registry");

/// CW20 contract => number of registry entries mapping to it.
/// Only these contracts may deliver deposits through `Receive`.
pub const LOCAL_CW20_TOKENS: Map<&Addr, u32> = Map::new("local_cw20_tokens");
