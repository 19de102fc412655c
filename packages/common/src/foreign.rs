//! Counterpart-chain token identifiers.
//!
//! A foreign token is an address that only has meaning on the other chain of
//! a vault pair. Accepted forms are `0x`-prefixed hex strings of 20 bytes (EVM
//! address) or 32 bytes (left-padded universal address). The all-zero address
//! is the null identity and is never a valid token.

use std::fmt;

use cosmwasm_std::{StdError, StdResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Byte length of an EVM address
pub const EVM_ADDRESS_LEN: usize = 20;

/// Byte length of a universal (32-byte) address
pub const UNIVERSAL_ADDRESS_LEN: usize = 32;

/// Normalised foreign token identifier (lowercase `0x` hex)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema)]
#[serde(transparent)]
pub struct ForeignToken(String);

impl ForeignToken {
    /// Parse and normalise a foreign token identifier.
    pub fn parse(input: &str) -> StdResult<Self> {
        let trimmed = input.trim();
        let hex_part = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| {
                StdError::generic_err(format!("foreign token must be 0x-prefixed hex: {input:?}"))
            })?;

        let bytes = hex::decode(hex_part)
            .map_err(|e| StdError::generic_err(format!("invalid foreign token hex: {e}")))?;

        if bytes.len() != EVM_ADDRESS_LEN && bytes.len() != UNIVERSAL_ADDRESS_LEN {
            return Err(StdError::generic_err(format!(
                "foreign token must be {EVM_ADDRESS_LEN} or {UNIVERSAL_ADDRESS_LEN} bytes, got {}",
                bytes.len()
            )));
        }

        if bytes.iter().all(|b| *b == 0) {
            return Err(StdError::generic_err("No address zero allowed"));
        }

        Ok(ForeignToken(format!("0x{}", hex::encode(bytes))))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ForeignToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
