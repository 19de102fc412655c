//! Query handlers for the Fooswap vault contract.
//!
//! Every query is open to any caller. Liquidity queries never fail because of
//! an unfamiliar asset: a balance that cannot be read counts as zero.

use cosmwasm_std::{Deps, Env, Order, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::msg::{
    AdministratorResponse, BridgeLiquidityResponse, ConfigResponse, HeldBalanceResponse,
    LiquidityResponse, LookupTokenResponse, NodeManagerResponse, RegisteredToken,
    RegisteredTokensResponse,
};
use crate::state::{CONFIG, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, TOKEN_REGISTRY};
use common::{AssetInfo, ForeignToken};

// ============================================================================
// Role Queries
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        administrator: config.administrator,
        node_manager: config.node_manager,
        hardening: config.hardening,
    })
}

pub fn query_administrator(deps: Deps) -> StdResult<AdministratorResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(AdministratorResponse {
        administrator: config.administrator,
    })
}

pub fn query_node_manager(deps: Deps) -> StdResult<NodeManagerResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(NodeManagerResponse {
        node_manager: config.node_manager,
    })
}

// ============================================================================
// Registry Queries
// ============================================================================

/// Resolve a foreign token. Malformed identifiers resolve to nothing.
pub fn query_lookup_token(deps: Deps, foreign_token: String) -> StdResult<LookupTokenResponse> {
    let local_token = resolve(deps, &foreign_token)?;
    Ok(LookupTokenResponse {
        foreign_token,
        local_token,
    })
}

pub fn query_registered_tokens(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<RegisteredTokensResponse> {
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize;
    let start_after = start_after
        .map(|s| ForeignToken::parse(&s).map(ForeignToken::into_string))
        .transpose()?;
    let start = start_after.as_deref().map(Bound::exclusive);

    let tokens = TOKEN_REGISTRY
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (foreign_token, local_token) = item?;
            Ok(RegisteredToken {
                foreign_token,
                local_token,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(RegisteredTokensResponse { tokens })
}

fn resolve(deps: Deps, foreign_token: &str) -> StdResult<Option<AssetInfo>> {
    match ForeignToken::parse(foreign_token) {
        Ok(foreign) => TOKEN_REGISTRY.may_load(deps.storage, foreign.as_str()),
        Err(_) => Ok(None),
    }
}

// ============================================================================
// Custody Queries
// ============================================================================

/// Amount of `asset` held by the vault, zero when it cannot be read.
fn held_balance(deps: Deps, env: &Env, asset: &AssetInfo) -> Uint128 {
    asset
        .validate(deps.api)
        .and_then(|asset| asset.query_balance(&deps.querier, env.contract.address.as_str()))
        .unwrap_or_default()
}

pub fn query_balance(deps: Deps, env: Env, asset: AssetInfo) -> StdResult<HeldBalanceResponse> {
    let amount = held_balance(deps, &env, &asset);
    Ok(HeldBalanceResponse { asset, amount })
}

pub fn query_check_liquidity(
    deps: Deps,
    env: Env,
    asset: AssetInfo,
    amount: Uint128,
) -> StdResult<LiquidityResponse> {
    let held = held_balance(deps, &env, &asset);
    Ok(LiquidityResponse {
        asset,
        requested: amount,
        held,
        sufficient: held >= amount,
    })
}

pub fn query_bridge_liquidity(
    deps: Deps,
    env: Env,
    foreign_token: String,
    amount: Uint128,
) -> StdResult<BridgeLiquidityResponse> {
    let local_token = resolve(deps, &foreign_token)?;
    let held = local_token
        .as_ref()
        .map(|asset| held_balance(deps, &env, asset))
        .unwrap_or_default();

    Ok(BridgeLiquidityResponse {
        sufficient: local_token.is_some() && held >= amount,
        foreign_token,
        local_token,
        requested: amount,
        held,
    })
}
