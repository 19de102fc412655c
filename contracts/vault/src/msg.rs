//! Message types for the Fooswap vault contract

use common::AssetInfo;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::state::Hardening;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
///
/// The instantiating sender becomes the administrator.
#[cw_serde]
pub struct InstantiateMsg {
    /// Initial node manager (defaults to the instantiating sender)
    pub node_manager: Option<String>,
    /// Hardening switches (defaults to `Hardening::default()`)
    pub hardening: Option<Hardening>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Role Management
    // ========================================================================
    /// Replace the administrator
    ///
    /// Authorization: Administrator only
    SetAdministrator { administrator: String },

    /// Replace the node manager
    ///
    /// Authorization: Administrator only
    SetNodeManager { node_manager: String },

    // ========================================================================
    // Token Registry
    // ========================================================================
    /// Map a counterpart-chain token to a local asset (last write wins)
    ///
    /// Authorization: Administrator only
    RegisterToken {
        /// 0x-prefixed hex address on the counterpart chain (20 or 32 bytes)
        foreign_token: String,
        /// Asset custodied by this vault
        local_token: AssetInfo,
    },

    // ========================================================================
    // Deposits
    // ========================================================================
    /// Pull `amount` of a CW20 token from the sender into custody.
    /// The sender must have granted the vault an allowance first.
    DepositToken { token: String, amount: Uint128 },

    /// Deposit the single bank coin attached as funds
    DepositNative {},

    /// Deposit CW20 tokens pushed with `Cw20ExecuteMsg::Send`
    Receive(cw20::Cw20ReceiveMsg),

    // ========================================================================
    // Payout
    // ========================================================================
    /// Release `amount` of a custodied asset to `recipient`
    ///
    /// Authorization: Administrator only
    SendToken {
        recipient: String,
        asset: AssetInfo,
        amount: Uint128,
    },

    // ========================================================================
    // Configuration
    // ========================================================================
    /// Replace the hardening switches
    ///
    /// Authorization: Administrator only
    UpdateHardening { hardening: Hardening },
}

/// Payload of a CW20 `Send` to the vault
#[cw_serde]
pub enum ReceiveMsg {
    Deposit {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(AdministratorResponse)]
    Administrator {},

    #[returns(NodeManagerResponse)]
    NodeManager {},

    /// Local asset registered for a counterpart-chain token, if any
    #[returns(LookupTokenResponse)]
    LookupToken { foreign_token: String },

    /// Paginated registry listing, ordered by foreign token
    #[returns(RegisteredTokensResponse)]
    RegisteredTokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Amount of `asset` currently held by the vault
    #[returns(HeldBalanceResponse)]
    Balance { asset: AssetInfo },

    /// Whether the vault holds at least `amount` of `asset`.
    /// Unknown assets report zero held, never an error.
    #[returns(LiquidityResponse)]
    CheckLiquidity { asset: AssetInfo, amount: Uint128 },

    /// Liquidity check addressed by counterpart-chain token.
    /// Unregistered tokens are reported as insufficient.
    #[returns(BridgeLiquidityResponse)]
    BridgeLiquidity {
        foreign_token: String,
        amount: Uint128,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub administrator: Addr,
    pub node_manager: Addr,
    pub hardening: Hardening,
}

#[cw_serde]
pub struct AdministratorResponse {
    pub administrator: Addr,
}

#[cw_serde]
pub struct NodeManagerResponse {
    pub node_manager: Addr,
}

#[cw_serde]
pub struct LookupTokenResponse {
    pub foreign_token: String,
    pub local_token: Option<AssetInfo>,
}

#[cw_serde]
pub struct RegisteredToken {
    pub foreign_token: String,
    pub local_token: AssetInfo,
}

#[cw_serde]
pub struct RegisteredTokensResponse {
    pub tokens: Vec<RegisteredToken>,
}

#[cw_serde]
pub struct HeldBalanceResponse {
    pub asset: AssetInfo,
    pub amount: Uint128,
}

#[cw_serde]
pub struct LiquidityResponse {
    pub asset: AssetInfo,
    pub requested: Uint128,
    pub held: Uint128,
    pub sufficient: bool,
}

#[cw_serde]
pub struct BridgeLiquidityResponse {
    pub foreign_token: String,
    pub local_token: Option<AssetInfo>,
    pub requested: Uint128,
    pub held: Uint128,
    pub sufficient: bool,
}
