//! Deposit handlers.
//!
//! None of these write to storage: custody is whatever the bank module or the
//! token contract says the vault holds once the transaction commits.

use cosmwasm_std::{from_json, Addr, DepsMut, Env, MessageInfo, Response, Uint128};
use cw20::{AllowanceResponse, Cw20QueryMsg, Cw20ReceiveMsg};

use crate::error::ContractError;
use crate::events;
use crate::msg::ReceiveMsg;
use crate::state::{Config, CONFIG, LOCAL_CW20_TOKENS};
use common::{Asset, AssetInfo};

/// Pull CW20 tokens from the sender using a previously granted allowance.
///
/// Allowance and balance are checked up front so a depositor shortfall is
/// reported as `TransferFailed` instead of an opaque sub-message error.
pub fn execute_deposit_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    config.hardening.check_amount(amount)?;

    let asset_info = AssetInfo::cw20(token)
        .validate(deps.api)
        .map_err(ContractError::invalid_address)?;

    let allowance: AllowanceResponse = deps
        .querier
        .query_wasm_smart(
            asset_info.to_string(),
            &Cw20QueryMsg::Allowance {
                owner: info.sender.to_string(),
                spender: env.contract.address.to_string(),
            },
        )
        .map_err(|e| ContractError::TransferFailed {
            reason: format!("cannot read allowance from {asset_info}: {e}"),
        })?;

    if allowance.expires.is_expired(&env.block) || allowance.allowance < amount {
        return Err(ContractError::TransferFailed {
            reason: format!(
                "insufficient allowance: granted {}, required {amount}",
                allowance.allowance
            ),
        });
    }

    let depositor_balance = asset_info
        .query_balance(&deps.querier, info.sender.as_str())
        .map_err(|e| ContractError::TransferFailed {
            reason: format!("cannot read depositor balance: {e}"),
        })?;
    if depositor_balance < amount {
        return Err(ContractError::TransferFailed {
            reason: format!(
                "insufficient depositor balance: holds {depositor_balance}, required {amount}"
            ),
        });
    }

    let asset = Asset::new(asset_info, amount);
    let pull = asset.transfer_from_msg(&info.sender, &env.contract.address)?;

    Ok(deposit_response(&config, "deposit_token", &info.sender, &asset).add_message(pull))
}

/// Deposit CW20 tokens pushed through `Cw20ExecuteMsg::Send`.
///
/// The caller is the token contract and must be a CW20 the registry maps to.
pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let depositor = deps.api.addr_validate(&cw20_msg.sender)?;
    let receive_msg: ReceiveMsg = from_json(&cw20_msg.msg)?;

    match receive_msg {
        ReceiveMsg::Deposit {} => {
            if !LOCAL_CW20_TOKENS.has(deps.storage, &info.sender) {
                return Err(ContractError::TokenNotSupported {
                    token: info.sender.to_string(),
                });
            }
            config.hardening.check_amount(cw20_msg.amount)?;

            let asset = Asset::new(AssetInfo::cw20(info.sender), cw20_msg.amount);
            Ok(deposit_response(&config, "receive", &depositor, &asset))
        }
    }
}

/// Deposit the single bank coin attached to the call.
pub fn execute_deposit_native(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.funds.is_empty() {
        return Err(ContractError::NoFundsSent);
    }
    if info.funds.len() > 1 {
        return Err(ContractError::InvalidAmount {
            reason: "Only one token type allowed per transaction".to_string(),
        });
    }

    let coin = &info.funds[0];
    config.hardening.check_amount(coin.amount)?;

    let asset = Asset::new(AssetInfo::native(coin.denom.clone()), coin.amount);
    Ok(deposit_response(
        &config,
        "deposit_native",
        &info.sender,
        &asset,
    ))
}

fn deposit_response(config: &Config, method: &str, depositor: &Addr, asset: &Asset) -> Response {
    let mut response = Response::new()
        .add_attribute("method", method)
        .add_attribute("depositor", depositor.to_string())
        .add_attribute("asset", asset.info.to_string())
        .add_attribute("amount", asset.amount);
    if config.hardening.emit_deposit_events {
        response = response.add_event(events::vault_deposit(depositor, &asset.info, asset.amount));
    }
    response
}
