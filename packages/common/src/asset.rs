//! Local asset handles.
//!
//! An asset is either a bank coin (`Native`) or a CW20 token contract. The
//! vault never keeps its own balance counters; everything it holds is read
//! back from the bank module or the token contract through these helpers.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Api, BankMsg, Coin, CosmosMsg, QuerierWrapper, StdError, StdResult,
    Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

/// Identifier of an asset held on this chain
#[cw_serde]
pub enum AssetInfo {
    /// Bank coin, identified by its denom
    Native { denom: String },
    /// CW20 token, identified by its contract address
    Cw20 { contract_addr: Addr },
}

impl AssetInfo {
    pub fn native(denom: impl Into<String>) -> Self {
        AssetInfo::Native {
            denom: denom.into(),
        }
    }

    pub fn cw20(contract_addr: impl Into<String>) -> Self {
        AssetInfo::Cw20 {
            contract_addr: Addr::unchecked(contract_addr),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, AssetInfo::Native { .. })
    }

    /// Validate the identifier, rejecting the empty denom and unparseable
    /// contract addresses.
    pub fn validate(&self, api: &dyn Api) -> StdResult<AssetInfo> {
        match self {
            AssetInfo::Native { denom } => {
                let denom = denom.trim();
                if denom.is_empty() {
                    return Err(StdError::generic_err("native denom must not be empty"));
                }
                if denom.chars().any(char::is_whitespace) {
                    return Err(StdError::generic_err(format!(
                        "native denom contains whitespace: {denom:?}"
                    )));
                }
                Ok(AssetInfo::native(denom))
            }
            AssetInfo::Cw20 { contract_addr } => Ok(AssetInfo::Cw20 {
                contract_addr: api.addr_validate(contract_addr.as_str())?,
            }),
        }
    }

    /// Amount of this asset currently held by `account`.
    pub fn query_balance(
        &self,
        querier: &QuerierWrapper,
        account: impl Into<String>,
    ) -> StdResult<Uint128> {
        match self {
            AssetInfo::Native { denom } => Ok(querier.query_balance(account, denom)?.amount),
            AssetInfo::Cw20 { contract_addr } => {
                let res: BalanceResponse = querier.query_wasm_smart(
                    contract_addr,
                    &Cw20QueryMsg::Balance {
                        address: account.into(),
                    },
                )?;
                Ok(res.balance)
            }
        }
    }
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetInfo::Native { denom } => write!(f, "{denom}"),
            AssetInfo::Cw20 { contract_addr } => write!(f, "{contract_addr}"),
        }
    }
}

/// An amount of a specific asset
#[cw_serde]
pub struct Asset {
    pub info: AssetInfo,
    pub amount: Uint128,
}

impl Asset {
    pub fn new(info: AssetInfo, amount: impl Into<Uint128>) -> Self {
        Asset {
            info,
            amount: amount.into(),
        }
    }

    /// Message moving this asset from the executing contract to `recipient`.
    pub fn transfer_msg(&self, recipient: &Addr) -> StdResult<CosmosMsg> {
        match &self.info {
            AssetInfo::Native { denom } => Ok(CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient.to_string(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount: self.amount,
                }],
            })),
            AssetInfo::Cw20 { contract_addr } => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount: self.amount,
                })?,
                funds: vec![],
            })),
        }
    }

    /// Message pulling this asset from `owner` into `recipient` using an
    /// allowance previously granted by `owner`. Only CW20 tokens support it.
    pub fn transfer_from_msg(&self, owner: &Addr, recipient: &Addr) -> StdResult<CosmosMsg> {
        match &self.info {
            AssetInfo::Native { denom } => Err(StdError::generic_err(format!(
                "native asset {denom} cannot be pulled, attach it as funds"
            ))),
            AssetInfo::Cw20 { contract_addr } => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: owner.to_string(),
                    recipient: recipient.to_string(),
                    amount: self.amount,
                })?,
                funds: vec![],
            })),
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.info)
    }
}
