//! Query handlers for the LockProxy module.

use cosmwasm_std::{Binary, StdResult, Storage};

use crate::keeper::Keeper;
use crate::msg::{
    BalanceResponse, HasChainBindingResponse, IsRegisteredResponse, LockProxyResponse,
    NonceResponse, ParamsResponse, RegistriesResponse,
};
use crate::state::Binding;

/// Default page size for registry listing
pub const DEFAULT_LIMIT: u32 = 10;
/// Maximum page size for registry listing
pub const MAX_LIMIT: u32 = 30;

pub fn query_params(storage: &dyn Storage, keeper: &Keeper) -> StdResult<ParamsResponse> {
    Ok(ParamsResponse {
        params: keeper.get_params(storage)?,
    })
}

pub fn query_nonce(storage: &dyn Storage, keeper: &Keeper) -> StdResult<NonceResponse> {
    Ok(NonceResponse {
        nonce: keeper.get_nonce(storage)?,
    })
}

pub fn query_lock_proxy(
    storage: &dyn Storage,
    keeper: &Keeper,
    operator: Binary,
) -> StdResult<LockProxyResponse> {
    Ok(LockProxyResponse {
        lock_proxy: keeper.get_lock_proxy_by_operator(storage, operator.as_slice())?,
    })
}

pub fn query_is_registered(
    storage: &dyn Storage,
    keeper: &Keeper,
    binding: Binding,
) -> StdResult<IsRegisteredResponse> {
    Ok(IsRegisteredResponse {
        registered: keeper.asset_is_registered(storage, &binding)?,
    })
}

pub fn query_has_chain_binding(
    storage: &dyn Storage,
    keeper: &Keeper,
    lock_proxy: Binary,
    chain_id: u64,
) -> StdResult<HasChainBindingResponse> {
    Ok(HasChainBindingResponse {
        bound: keeper.contain_to_contract_addr(storage, lock_proxy.as_slice(), chain_id)?,
    })
}

pub fn query_balance(
    storage: &dyn Storage,
    keeper: &Keeper,
    binding: Binding,
) -> StdResult<BalanceResponse> {
    Ok(BalanceResponse {
        amount: keeper.get_balance(storage, &binding)?,
    })
}

/// Query registered bindings with pagination.
pub fn query_registries(
    storage: &dyn Storage,
    keeper: &Keeper,
    start_after: Option<Binding>,
    limit: Option<u32>,
) -> StdResult<RegistriesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    Ok(RegistriesResponse {
        registries: keeper.registries(storage, start_after.as_ref(), limit)?,
    })
}
