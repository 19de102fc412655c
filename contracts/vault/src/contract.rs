//! Fooswap Vault Contract - Entry Points
//!
//! Handlers live in:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::auth::{AuthPolicy, RoleAuthorizer};
use crate::error::ContractError;
use crate::execute::{
    execute_deposit_native, execute_deposit_token, execute_receive, execute_register_token,
    execute_send_token, execute_set_administrator, execute_set_node_manager,
    execute_update_hardening,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_administrator, query_balance, query_bridge_liquidity, query_check_liquidity,
    query_config, query_lookup_token, query_node_manager, query_registered_tokens,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // The deployer administers the vault until it hands the role over
    let administrator = info.sender;
    let node_manager = match msg.node_manager {
        Some(node_manager) => deps
            .api
            .addr_validate(&node_manager)
            .map_err(|e| ContractError::invalid_address(format!("No address zero allowed: {e}")))?,
        None => administrator.clone(),
    };

    let config = Config {
        administrator,
        node_manager,
        hardening: msg.hardening.unwrap_or_default(),
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("administrator", config.administrator)
        .add_attribute("node_manager", config.node_manager)
        .add_attribute(
            "reject_zero_amounts",
            config.hardening.reject_zero_amounts.to_string(),
        )
        .add_attribute(
            "emit_deposit_events",
            config.hardening.emit_deposit_events.to_string(),
        ))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    execute_with_policy(deps, env, info, msg, &RoleAuthorizer)
}

/// Dispatch an execute message, guarding privileged operations with `policy`.
pub fn execute_with_policy(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
    policy: &dyn AuthPolicy,
) -> Result<Response, ContractError> {
    match msg {
        // Roles
        ExecuteMsg::SetAdministrator { administrator } => {
            execute_set_administrator(deps, env, info, policy, administrator)
        }
        ExecuteMsg::SetNodeManager { node_manager } => {
            execute_set_node_manager(deps, env, info, policy, node_manager)
        }

        // Registry
        ExecuteMsg::RegisterToken {
            foreign_token,
            local_token,
        } => execute_register_token(deps, info, policy, foreign_token, local_token),

        // Deposits
        ExecuteMsg::DepositToken { token, amount } => {
            execute_deposit_token(deps, env, info, token, amount)
        }
        ExecuteMsg::DepositNative {} => execute_deposit_native(deps, info),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),

        // Payout
        ExecuteMsg::SendToken {
            recipient,
            asset,
            amount,
        } => execute_send_token(deps, env, info, policy, recipient, asset, amount),

        // Configuration
        ExecuteMsg::UpdateHardening { hardening } => {
            execute_update_hardening(deps, info, policy, hardening)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Administrator {} => to_json_binary(&query_administrator(deps)?),
        QueryMsg::NodeManager {} => to_json_binary(&query_node_manager(deps)?),
        QueryMsg::LookupToken { foreign_token } => {
            to_json_binary(&query_lookup_token(deps, foreign_token)?)
        }
        QueryMsg::RegisteredTokens { start_after, limit } => {
            to_json_binary(&query_registered_tokens(deps, start_after, limit)?)
        }
        QueryMsg::Balance { asset } => to_json_binary(&query_balance(deps, env, asset)?),
        QueryMsg::CheckLiquidity { asset, amount } => {
            to_json_binary(&query_check_liquidity(deps, env, asset, amount)?)
        }
        QueryMsg::BridgeLiquidity {
            foreign_token,
            amount,
        } => to_json_binary(&query_bridge_liquidity(deps, env, foreign_token, amount)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
