//! Token registry handlers.

use cosmwasm_std::{Addr, DepsMut, MessageInfo, Response, StdResult, Storage};

use crate::auth::{Action, AuthPolicy};
use crate::error::ContractError;
use crate::events;
use crate::state::{LOCAL_CW20_TOKENS, TOKEN_REGISTRY};
use common::{AssetInfo, ForeignToken};

/// Map a counterpart-chain token to a local asset. An existing mapping for
/// the same foreign token is overwritten.
pub fn execute_register_token(
    deps: DepsMut,
    info: MessageInfo,
    policy: &dyn AuthPolicy,
    foreign_token: String,
    local_token: AssetInfo,
) -> Result<Response, ContractError> {
    policy.authorize(deps.storage, &info.sender, Action::RegisterToken)?;

    let foreign = ForeignToken::parse(&foreign_token).map_err(ContractError::invalid_address)?;
    let local = local_token
        .validate(deps.api)
        .map_err(ContractError::invalid_address)?;

    let previous = TOKEN_REGISTRY.may_load(deps.storage, foreign.as_str())?;
    TOKEN_REGISTRY.save(deps.storage, foreign.as_str(), &local)?;

    if let Some(AssetInfo::Cw20 { contract_addr }) = &previous {
        release_local_cw20(deps.storage, contract_addr)?;
    }
    if let AssetInfo::Cw20 { contract_addr } = &local {
        LOCAL_CW20_TOKENS.update(deps.storage, contract_addr, |count| -> StdResult<_> {
            Ok(count.unwrap_or_default() + 1)
        })?;
    }

    let mut response = Response::new()
        .add_event(events::token_registered(&foreign, &local))
        .add_attribute("method", "register_token")
        .add_attribute("foreign_token", foreign.as_str())
        .add_attribute("local_token", local.to_string());
    if let Some(previous) = previous {
        response = response.add_attribute("replaced", previous.to_string());
    }

    Ok(response)
}

/// Drop one registry reference to a CW20 contract, forgetting it at zero.
fn release_local_cw20(storage: &mut dyn Storage, contract_addr: &Addr) -> StdResult<()> {
    match LOCAL_CW20_TOKENS.may_load(storage, contract_addr)? {
        Some(count) if count > 1 => LOCAL_CW20_TOKENS.save(storage, contract_addr, &(count - 1)),
        _ => {
            LOCAL_CW20_TOKENS.remove(storage, contract_addr);
            Ok(())
        }
    }
}
