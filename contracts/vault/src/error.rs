//! Error types for the Fooswap vault contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only the current vault admin can perform this operation")]
    Unauthorized,

    // ========================================================================
    // Argument Errors
    // ========================================================================

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Token not supported: {token}")]
    TokenNotSupported { token: String },

    #[error("No funds sent")]
    NoFundsSent,

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    // ========================================================================
    // Custody Errors
    // ========================================================================

    #[error("Insufficient balance of {asset}: held {held}, requested {requested}")]
    InsufficientBalance {
        asset: String,
        held: Uint128,
        requested: Uint128,
    },

    #[error("Transfer failed: {reason}")]
    TransferFailed { reason: String },
}

impl ContractError {
    pub(crate) fn invalid_address(reason: impl ToString) -> Self {
        ContractError::InvalidAddress {
            reason: reason.to_string(),
        }
    }
}
