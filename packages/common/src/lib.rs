//! Common - Shared Types and Utilities for the Fooswap Vault Contracts
//!
//! This package provides the identifier types used on both sides of a vault
//! deployment: the local asset handle (`AssetInfo`) and the counterpart-chain
//! token identifier (`ForeignToken`).

pub mod asset;
pub mod foreign;

pub use asset::{Asset, AssetInfo};
pub use foreign::ForeignToken;
