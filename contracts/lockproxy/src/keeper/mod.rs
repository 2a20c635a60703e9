//! LockProxy keeper
//!
//! The keeper owns the binding registry, the custody ledger and the nonce,
//! and drives the bank, supply and cross-chain collaborators. Operations are
//! organized by category:
//! - `registry` - lock proxy creation and asset bindings
//! - `ledger` - per-binding custody balances and the lock nonce
//! - `lock` - outgoing transfers
//! - `unlock` - incoming transfers
//! - `onboarding` - coin creation delegated to a lock proxy
//!
//! Operations apply their side effects in order and stop at the first error
//! without undoing earlier effects. Callers that need all-or-nothing
//! semantics run them through [`crate::contract`], which buffers writes in a
//! [`crate::store::CacheStore`].

mod ledger;
mod lock;
mod onboarding;
mod registry;
mod unlock;

pub use lock::LockRequest;

use cosmwasm_std::{CanonicalAddr, StdResult, Storage};

use crate::context::Context;
use crate::error::LockProxyError;
use crate::expected::{BankKeeper, CrossChainManager, SupplyKeeper};
use crate::hooks::MultiLockProxyHooks;
use crate::state::{Params, MODULE_NAME, PARAMS};

pub struct Keeper {
    bank: Box<dyn BankKeeper>,
    supply: Box<dyn SupplyKeeper>,
    ccm: Box<dyn CrossChainManager>,
    hooks: Option<MultiLockProxyHooks>,
    module_address: CanonicalAddr,
}

impl Keeper {
    /// Build a keeper; fails if the custody module account has not been set up.
    pub fn new(
        bank: Box<dyn BankKeeper>,
        supply: Box<dyn SupplyKeeper>,
        ccm: Box<dyn CrossChainManager>,
    ) -> Result<Self, LockProxyError> {
        let module_address =
            supply
                .module_address(MODULE_NAME)
                .ok_or_else(|| LockProxyError::ModuleAccountMissing {
                    module: MODULE_NAME.to_string(),
                })?;

        Ok(Self {
            bank,
            supply,
            ccm,
            hooks: None,
            module_address,
        })
    }

    /// Install the unlock observers. Can only be done once.
    pub fn with_hooks(mut self, hooks: MultiLockProxyHooks) -> Result<Self, LockProxyError> {
        if self.hooks.is_some() {
            return Err(LockProxyError::HooksAlreadySet);
        }
        self.hooks = Some(hooks);
        Ok(self)
    }

    /// Custody account of this module
    pub fn module_address(&self) -> &CanonicalAddr {
        &self.module_address
    }

    // ========================================================================
    // Params
    // ========================================================================

    /// Stored params. Unset params read as the legacy version 0.
    pub fn get_params(&self, storage: &dyn Storage) -> StdResult<Params> {
        Ok(PARAMS
            .may_load(storage)?
            .unwrap_or(Params { version: 0 }))
    }

    pub fn set_params(&self, storage: &mut dyn Storage, params: &Params) -> StdResult<()> {
        PARAMS.save(storage, params)
    }

    pub fn get_version(&self, storage: &dyn Storage) -> StdResult<u64> {
        Ok(self.get_params(storage)?.version)
    }

    /// Context for one call, pinned to the currently stored version
    pub fn new_context<'a>(&self, storage: &'a mut dyn Storage) -> StdResult<Context<'a>> {
        let version = self.get_version(storage)?;
        Ok(Context::new(storage, version))
    }

    fn after_proxy_unlock(
        &self,
        ctx: &mut Context,
        from: &CanonicalAddr,
        to: &CanonicalAddr,
        coins: &[common::Coin],
    ) {
        if let Some(hooks) = &self.hooks {
            hooks.after_unlock(ctx.storage_mut(), from, to, coins);
        }
    }
}
