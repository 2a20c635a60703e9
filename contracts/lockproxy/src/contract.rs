//! LockProxy dispatch
//!
//! Entry points a host calls with its storage and a built [`Keeper`]:
//! - `execute` - user messages
//! - `sudo` - privileged messages from the cross-chain manager and governance
//! - `query` - read-only JSON queries
//!
//! Every `execute` and `sudo` call runs inside a [`CacheStore`]. Writes reach
//! the host storage only when the keeper returns `Ok`, so a failed call leaves
//! storage untouched even where the keeper itself stopped half way.

use cosmwasm_std::{to_json_binary, Binary, CanonicalAddr, Response, StdResult, Storage};
use tracing::info;

use crate::context::Context;
use crate::error::LockProxyError;
use crate::keeper::Keeper;
use crate::msg::{ExecuteMsg, QueryMsg, SudoMsg};
use crate::query::{
    query_balance, query_has_chain_binding, query_is_registered, query_lock_proxy, query_nonce,
    query_params, query_registries,
};
use crate::store::CacheStore;

/// Run `f` in a fresh context over a cached view of `storage`, committing on success.
fn transact<F>(
    storage: &mut dyn Storage,
    keeper: &Keeper,
    action: &str,
    f: F,
) -> Result<Response, LockProxyError>
where
    F: FnOnce(&mut Context) -> Result<(), LockProxyError>,
{
    let mut cache = CacheStore::new(storage);
    let events = {
        let mut ctx = keeper.new_context(&mut cache)?;
        f(&mut ctx)?;
        ctx.into_events()
    };
    cache.commit();

    Ok(Response::new()
        .add_attribute("action", action)
        .add_events(events))
}

// ============================================================================
// Execute
// ============================================================================

pub fn execute(
    storage: &mut dyn Storage,
    keeper: &Keeper,
    sender: &CanonicalAddr,
    msg: ExecuteMsg,
) -> Result<Response, LockProxyError> {
    match msg {
        ExecuteMsg::CreateLockProxy {} => transact(storage, keeper, "create_lock_proxy", |ctx| {
            keeper.create_lock_proxy(ctx, sender)
        }),
        ExecuteMsg::CreateCoinAndDelegateToProxy {
            coin,
            lock_proxy,
            native_chain_id,
            native_lock_proxy,
            native_asset,
        } => transact(
            storage,
            keeper,
            "create_coin_and_delegate_to_proxy",
            |ctx| {
                keeper.create_coin_and_delegate_to_proxy(
                    ctx,
                    sender,
                    &coin,
                    &lock_proxy,
                    native_chain_id,
                    &native_lock_proxy,
                    &native_asset,
                )
            },
        ),
        ExecuteMsg::Lock(req) => {
            transact(storage, keeper, "lock", |ctx| keeper.lock(ctx, sender, &req))
        }
    }
}

// ============================================================================
// Sudo
// ============================================================================

pub fn sudo(
    storage: &mut dyn Storage,
    keeper: &Keeper,
    msg: SudoMsg,
) -> Result<Response, LockProxyError> {
    match msg {
        SudoMsg::Unlock {
            from_chain_id,
            from_contract,
            to_contract,
            args,
        } => transact(storage, keeper, "unlock", |ctx| {
            keeper.unlock(ctx, from_chain_id, &from_contract, &to_contract, &args)
        }),
        SudoMsg::RegisterAsset {
            from_chain_id,
            from_contract,
            to_contract,
            args,
        } => transact(storage, keeper, "register_asset", |ctx| {
            keeper.register_asset(ctx, from_chain_id, &from_contract, &to_contract, &args)
        }),
        SudoMsg::UpdateParams { params } => transact(storage, keeper, "update_params", |ctx| {
            keeper.set_params(ctx.storage_mut(), &params)?;
            info!(version = params.version, "params updated");
            Ok(())
        }),
    }
}

// ============================================================================
// Query
// ============================================================================

pub fn query(storage: &dyn Storage, keeper: &Keeper, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Params {} => to_json_binary(&query_params(storage, keeper)?),
        QueryMsg::Nonce {} => to_json_binary(&query_nonce(storage, keeper)?),
        QueryMsg::LockProxy { operator } => {
            to_json_binary(&query_lock_proxy(storage, keeper, operator)?)
        }
        QueryMsg::IsRegistered { binding } => {
            to_json_binary(&query_is_registered(storage, keeper, binding)?)
        }
        QueryMsg::HasChainBinding {
            lock_proxy,
            chain_id,
        } => to_json_binary(&query_has_chain_binding(storage, keeper, lock_proxy, chain_id)?),
        QueryMsg::Balance { binding } => to_json_binary(&query_balance(storage, keeper, binding)?),
        QueryMsg::Registries { start_after, limit } => {
            to_json_binary(&query_registries(storage, keeper, start_after, limit)?)
        }
    }
}
