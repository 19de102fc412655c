//! Typed events emitted by the vault.
//!
//! Off-chain watchers (the node manager's tooling) subscribe to these on one
//! deployment and issue the matching call on the counterpart deployment. The
//! host prefixes every type with `wasm-`.

use cosmwasm_std::{Addr, Event, Timestamp, Uint128};

use crate::state::Hardening;
use common::{AssetInfo, ForeignToken};

pub const NEW_ADMINISTRATOR: &str = "new_administrator";
pub const NEW_NODE_MANAGER: &str = "new_node_manager";
pub const TOKEN_REGISTERED: &str = "token_registered";
pub const GENERIC_TOKEN_SENT: &str = "generic_token_sent";
pub const VAULT_DEPOSIT: &str = "vault_deposit";
pub const HARDENING_UPDATED: &str = "hardening_updated";

pub fn new_administrator(administrator: &Addr, timestamp: Timestamp) -> Event {
    Event::new(NEW_ADMINISTRATOR)
        .add_attribute("administrator", administrator.to_string())
        .add_attribute("timestamp", timestamp.seconds().to_string())
}

pub fn new_node_manager(node_manager: &Addr, timestamp: Timestamp) -> Event {
    Event::new(NEW_NODE_MANAGER)
        .add_attribute("node_manager", node_manager.to_string())
        .add_attribute("timestamp", timestamp.seconds().to_string())
}

pub fn token_registered(foreign_token: &ForeignToken, local_token: &AssetInfo) -> Event {
    Event::new(TOKEN_REGISTERED)
        .add_attribute("foreign_token", foreign_token.as_str())
        .add_attribute("local_token", local_token.to_string())
}

pub fn generic_token_sent(
    recipient: &Addr,
    asset: &AssetInfo,
    amount: Uint128,
    timestamp: Timestamp,
) -> Event {
    Event::new(GENERIC_TOKEN_SENT)
        .add_attribute("recipient", recipient.to_string())
        .add_attribute("asset", asset.to_string())
        .add_attribute("amount", amount)
        .add_attribute("timestamp", timestamp.seconds().to_string())
}

/// Only emitted when `Hardening::emit_deposit_events` is set.
pub fn vault_deposit(depositor: &Addr, asset: &AssetInfo, amount: Uint128) -> Event {
    Event::new(VAULT_DEPOSIT)
        .add_attribute("depositor", depositor.to_string())
        .add_attribute("asset", asset.to_string())
        .add_attribute("amount", amount)
}

pub fn hardening_updated(hardening: &Hardening) -> Event {
    Event::new(HARDENING_UPDATED)
        .add_attribute(
            "reject_zero_amounts",
            hardening.reject_zero_amounts.to_string(),
        )
        .add_attribute(
            "emit_deposit_events",
            hardening.emit_deposit_events.to_string(),
        )
}
