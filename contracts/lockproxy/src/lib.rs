//! LockProxy - Asset Binding Registry and Lock/Unlock Settlement
//!
//! Moves fungible coins between this chain and remote chains through a
//! cross-chain manager.
//!
//! # Outgoing Flow (Lock)
//! 1. A user locks coins through a lock proxy they are bound to
//! 2. Coins move into module custody (and are burned from version 1 on)
//! 3. An `unlock` call carrying the encoded [`common::TxArgs`] is queued for the destination chain
//!
//! # Incoming Flow (Unlock)
//! 1. The cross-chain manager authenticates and relays an `unlock` call
//! 2. The binding is checked, coins are minted (from version 1 on) and paid out
//! 3. The custody ledger is debited and unlock hooks are notified
//!
//! # Onboarding
//! A lock proxy owner creates a new denom, binds it to its native asset and
//! announces it to the native chain with a `registerAsset` call.

pub mod bank;
pub mod ccm;
pub mod context;
pub mod contract;
pub mod error;
pub mod events;
pub mod expected;
pub mod genesis;
pub mod hooks;
pub mod keeper;
pub mod msg;
mod query;
pub mod state;
pub mod store;

#[cfg(test)]
mod testing;

pub use crate::bank::StoreBank;
pub use crate::ccm::StoreCrossChainManager;
pub use crate::context::Context;
pub use crate::error::LockProxyError;
pub use crate::genesis::{export_genesis, init_genesis, GenesisState};
pub use crate::hooks::{LockProxyHooks, MultiLockProxyHooks};
pub use crate::keeper::{Keeper, LockRequest};
pub use crate::state::{Binding, Params, MODULE_NAME};
pub use crate::store::CacheStore;
