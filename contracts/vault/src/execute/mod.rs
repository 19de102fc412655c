//! Execute handlers for the Fooswap vault contract.
//!
//! - `roles` - administrator, node manager and hardening updates
//! - `registry` - foreign/local token registration
//! - `deposit` - pull, push and native deposits
//! - `payout` - release of custodied assets

mod deposit;
mod payout;
mod registry;
mod roles;

pub use deposit::*;
pub use payout::*;
pub use registry::*;
pub use roles::*;
