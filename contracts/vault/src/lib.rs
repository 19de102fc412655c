//! Fooswap Vault Contract - Cross-Chain Custody for One Side of a Bridge Pair
//!
//! The same contract is deployed independently on each chain of a pair. Each
//! deployment custodies bank coins and CW20 tokens and knows which token on the
//! counterpart chain corresponds to which local asset.
//!
//! # Roles
//! - Administrator: registers tokens, changes roles, releases custody
//! - Node manager: trusted off-chain operator, settable by the administrator
//!
//! # Flow
//! 1. A user deposits into the vault on chain A (pull via allowance, CW20
//!    send, or attached bank coins)
//! 2. The node manager watches chain A and checks `CheckLiquidity` on chain B
//! 3. The administrator releases the counterpart asset on chain B with
//!    `SendToken`
//!
//! Custody is never tracked in a counter: every balance is read back from the
//! bank module or the token contract.

pub mod auth;
pub mod contract;
pub mod error;
pub mod events;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::auth::{Action, AuthPolicy, RoleAuthorizer};
pub use crate::error::ContractError;
