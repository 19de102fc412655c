//! Role store handlers.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::auth::{Action, AuthPolicy};
use crate::error::ContractError;
use crate::events;
use crate::state::{Hardening, CONFIG};

/// Replace the administrator. The outgoing administrator loses every right
/// in the same transaction.
pub fn execute_set_administrator(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    policy: &dyn AuthPolicy,
    administrator: String,
) -> Result<Response, ContractError> {
    policy.authorize(deps.storage, &info.sender, Action::SetAdministrator)?;

    let new_admin = deps
        .api
        .addr_validate(&administrator)
        .map_err(|e| ContractError::invalid_address(format!("No address zero allowed: {e}")))?;

    let mut config = CONFIG.load(deps.storage)?;
    let previous = config.administrator;
    config.administrator = new_admin.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_event(events::new_administrator(&new_admin, env.block.time))
        .add_attribute("method", "set_administrator")
        .add_attribute("previous", previous)
        .add_attribute("administrator", new_admin))
}

/// Replace the node manager.
pub fn execute_set_node_manager(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    policy: &dyn AuthPolicy,
    node_manager: String,
) -> Result<Response, ContractError> {
    policy.authorize(deps.storage, &info.sender, Action::SetNodeManager)?;

    let new_manager = deps
        .api
        .addr_validate(&node_manager)
        .map_err(|e| ContractError::invalid_address(format!("No address zero allowed: {e}")))?;

    let mut config = CONFIG.load(deps.storage)?;
    config.node_manager = new_manager.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_event(events::new_node_manager(&new_manager, env.block.time))
        .add_attribute("method", "set_node_manager")
        .add_attribute("node_manager", new_manager))
}

pub fn execute_update_hardening(
    deps: DepsMut,
    info: MessageInfo,
    policy: &dyn AuthPolicy,
    hardening: Hardening,
) -> Result<Response, ContractError> {
    policy.authorize(deps.storage, &info.sender, Action::UpdateHardening)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.hardening = hardening;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_event(events::hardening_updated(&config.hardening))
        .add_attribute("method", "update_hardening"))
}
