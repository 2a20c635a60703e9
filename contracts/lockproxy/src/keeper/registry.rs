//! Lock proxy identities and asset bindings.

use cosmwasm_std::{Binary, CanonicalAddr, Event, Order, StdResult, Storage};
use cw_storage_plus::Bound;
use tracing::info;

use super::Keeper;
use crate::context::Context;
use crate::error::LockProxyError;
use crate::events::{ATTRIBUTE_KEY_CREATOR, ATTRIBUTE_KEY_PROXY_HASH, EVENT_TYPE_CREATE_LOCK_PROXY};
use crate::state::{Binding, CHAIN_BINDINGS, LOCK_PROXIES, REGISTRY};

impl Keeper {
    /// Whether `creator` has created its lock proxy
    pub fn ensure_lock_proxy_exist(&self, storage: &dyn Storage, creator: &[u8]) -> StdResult<bool> {
        Ok(self.get_lock_proxy_by_operator(storage, creator)?.is_some())
    }

    /// Lock proxy hash owned by `operator`, if any
    pub fn get_lock_proxy_by_operator(
        &self,
        storage: &dyn Storage,
        operator: &[u8],
    ) -> StdResult<Option<Binary>> {
        Ok(LOCK_PROXIES
            .may_load(storage, operator)?
            .filter(|proxy| !proxy.is_empty() && proxy.as_slice() == operator))
    }

    pub fn create_lock_proxy(
        &self,
        ctx: &mut Context,
        creator: &CanonicalAddr,
    ) -> Result<(), LockProxyError> {
        if self.ensure_lock_proxy_exist(ctx.storage(), creator.as_slice())? {
            return Err(LockProxyError::LockProxyAlreadyExists {
                creator: hex::encode(creator.as_slice()),
            });
        }

        LOCK_PROXIES.save(
            ctx.storage_mut(),
            creator.as_slice(),
            &Binary::from(creator.as_slice()),
        )?;

        ctx.emit_event(
            Event::new(EVENT_TYPE_CREATE_LOCK_PROXY)
                .add_attribute(ATTRIBUTE_KEY_CREATOR, hex::encode(creator.as_slice()))
                .add_attribute(ATTRIBUTE_KEY_PROXY_HASH, hex::encode(creator.as_slice())),
        );
        info!(creator = %hex::encode(creator.as_slice()), "lock proxy created");
        Ok(())
    }

    /// Record a binding and flag its (proxy, remote chain) pair.
    pub fn register_binding(
        &self,
        ctx: &mut Context,
        binding: &Binding,
    ) -> Result<(), LockProxyError> {
        if self.asset_is_registered(ctx.storage(), binding)? {
            return Err(LockProxyError::BindingAlreadyExists {
                binding: binding.to_string(),
            });
        }

        REGISTRY.save(ctx.storage_mut(), &binding.storage_key(), &true)?;

        // Lets the cross-chain manager route inbound calls from this chain to us
        let chain_key = (binding.lock_proxy.as_slice(), binding.remote_chain_id);
        if !CHAIN_BINDINGS.has(ctx.storage(), chain_key) {
            CHAIN_BINDINGS.save(ctx.storage_mut(), chain_key, &true)?;
        }

        info!(%binding, "asset binding registered");
        Ok(())
    }

    pub fn asset_is_registered(&self, storage: &dyn Storage, binding: &Binding) -> StdResult<bool> {
        Ok(REGISTRY
            .may_load(storage, &binding.storage_key())?
            .unwrap_or(false))
    }

    /// Whether `to_contract` has any binding to `from_chain_id`
    pub fn contain_to_contract_addr(
        &self,
        storage: &dyn Storage,
        to_contract: &[u8],
        from_chain_id: u64,
    ) -> StdResult<bool> {
        Ok(CHAIN_BINDINGS
            .may_load(storage, (to_contract, from_chain_id))?
            .unwrap_or(false))
    }

    /// Registered bindings in key order, starting after `start_after`
    pub fn registries(
        &self,
        storage: &dyn Storage,
        start_after: Option<&Binding>,
        limit: usize,
    ) -> StdResult<Vec<Binding>> {
        let start_key = start_after.map(Binding::storage_key);
        let start = start_key.as_deref().map(Bound::exclusive);
        REGISTRY
            .keys(storage, start, None, Order::Ascending)
            .take(limit)
            .map(|key| Binding::from_storage_key(&key?))
            .collect()
    }
}
