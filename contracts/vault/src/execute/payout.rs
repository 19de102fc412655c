//! Payout handler, the only exit path for custodied assets.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::auth::{Action, AuthPolicy};
use crate::error::ContractError;
use crate::events;
use crate::state::CONFIG;
use common::{Asset, AssetInfo};

/// Release `amount` of `asset` to `recipient`.
///
/// The held balance is read in the same transaction that dispatches the
/// transfer, so the payout can never exceed custody.
pub fn execute_send_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    policy: &dyn AuthPolicy,
    recipient: String,
    asset: AssetInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    policy.authorize(deps.storage, &info.sender, Action::SendToken)?;

    let recipient = deps.api.addr_validate(&recipient).map_err(|e| {
        ContractError::invalid_address(format!("transfer to null identity not allowed: {e}"))
    })?;
    let asset_info = asset
        .validate(deps.api)
        .map_err(ContractError::invalid_address)?;

    let config = CONFIG.load(deps.storage)?;
    config.hardening.check_amount(amount)?;

    let held = asset_info
        .query_balance(&deps.querier, env.contract.address.as_str())
        .map_err(|e| ContractError::TransferFailed {
            reason: format!("cannot read custody of {asset_info}: {e}"),
        })?;
    if held < amount {
        return Err(ContractError::InsufficientBalance {
            asset: asset_info.to_string(),
            held,
            requested: amount,
        });
    }

    let payout = Asset::new(asset_info, amount);
    let transfer = payout.transfer_msg(&recipient)?;

    Ok(Response::new()
        .add_message(transfer)
        .add_event(events::generic_token_sent(
            &recipient,
            &payout.info,
            amount,
            env.block.time,
        ))
        .add_attribute("method", "send_token")
        .add_attribute("recipient", recipient.to_string())
        .add_attribute("asset", payout.info.to_string())
        .add_attribute("amount", amount))
}
