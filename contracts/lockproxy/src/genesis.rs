//! Genesis import and export
//!
//! Genesis is the only configuration surface besides `SudoMsg::UpdateParams`.
//! It is supplied as JSON and any import failure is fatal for the host.

use std::collections::BTreeSet;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Order, StdResult, Storage, Uint256};
use cw2::set_contract_version;
use tracing::info;

use crate::error::LockProxyError;
use crate::keeper::Keeper;
use crate::state::{
    Binding, Params, BALANCES, CHAIN_BINDINGS, CONTRACT_NAME, CONTRACT_VERSION, LOCK_PROXIES,
    REGISTRY,
};

/// A (lock proxy, remote chain) pair with at least one binding
#[cw_serde]
pub struct ChainBindingEntry {
    pub lock_proxy: Binary,
    pub chain_id: u64,
}

/// Custody ledger entry
#[cw_serde]
pub struct BalanceEntry {
    pub binding: Binding,
    pub amount: Uint256,
}

#[cw_serde]
pub struct GenesisState {
    pub params: Params,
    /// Nonce of the last lock
    pub nonce: Uint256,
    /// Creators that own a lock proxy
    pub operators: Vec<Binary>,
    pub chain_bindings: Vec<ChainBindingEntry>,
    pub registries: Vec<Binding>,
    pub balances: Vec<BalanceEntry>,
}

impl Default for GenesisState {
    fn default() -> Self {
        Self {
            params: Params::default(),
            nonce: Uint256::zero(),
            operators: vec![],
            chain_bindings: vec![],
            registries: vec![],
            balances: vec![],
        }
    }
}

fn invalid(reason: impl Into<String>) -> LockProxyError {
    LockProxyError::InvalidGenesis {
        reason: reason.into(),
    }
}

impl GenesisState {
    pub fn validate(&self) -> Result<(), LockProxyError> {
        let mut operators = BTreeSet::new();
        for operator in &self.operators {
            if operator.is_empty() {
                return Err(invalid("empty operator"));
            }
            if !operators.insert(operator.as_slice()) {
                return Err(invalid(format!(
                    "duplicate operator {}",
                    hex::encode(operator.as_slice())
                )));
            }
        }

        let mut registries = BTreeSet::new();
        let mut implied_chain_bindings = BTreeSet::new();
        for binding in &self.registries {
            if !operators.contains(binding.lock_proxy.as_slice()) {
                return Err(invalid(format!("binding of unknown lock proxy: {binding}")));
            }
            if !registries.insert(binding.storage_key()) {
                return Err(invalid(format!("duplicate binding: {binding}")));
            }
            implied_chain_bindings.insert((binding.lock_proxy.as_slice(), binding.remote_chain_id));
        }

        let mut chain_bindings = BTreeSet::new();
        for entry in &self.chain_bindings {
            let key = (entry.lock_proxy.as_slice(), entry.chain_id);
            if !implied_chain_bindings.contains(&key) {
                return Err(invalid(format!(
                    "chain binding without asset binding: {} -> {}",
                    hex::encode(entry.lock_proxy.as_slice()),
                    entry.chain_id
                )));
            }
            if !chain_bindings.insert(key) {
                return Err(invalid(format!(
                    "duplicate chain binding: {} -> {}",
                    hex::encode(entry.lock_proxy.as_slice()),
                    entry.chain_id
                )));
            }
        }

        let mut balances = BTreeSet::new();
        for entry in &self.balances {
            let key = entry.binding.storage_key();
            if !registries.contains(&key) {
                return Err(invalid(format!(
                    "balance of unregistered binding: {}",
                    entry.binding
                )));
            }
            if !balances.insert(key) {
                return Err(invalid(format!("duplicate balance: {}", entry.binding)));
            }
        }

        Ok(())
    }
}

/// Validate `genesis` and write it into `storage`.
///
/// The keeper can only be built once the custody module account exists, so
/// holding one is enough to know the account is set up.
pub fn init_genesis(
    storage: &mut dyn Storage,
    keeper: &Keeper,
    genesis: &GenesisState,
) -> Result<(), LockProxyError> {
    genesis.validate()?;

    set_contract_version(storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    keeper.set_params(storage, &genesis.params)?;
    keeper.set_nonce(storage, genesis.nonce)?;

    for operator in &genesis.operators {
        LOCK_PROXIES.save(storage, operator.as_slice(), operator)?;
    }
    for binding in &genesis.registries {
        REGISTRY.save(storage, &binding.storage_key(), &true)?;
        CHAIN_BINDINGS.save(
            storage,
            (binding.lock_proxy.as_slice(), binding.remote_chain_id),
            &true,
        )?;
    }
    for entry in &genesis.chain_bindings {
        CHAIN_BINDINGS.save(storage, (entry.lock_proxy.as_slice(), entry.chain_id), &true)?;
    }
    for entry in &genesis.balances {
        keeper.store_balance(storage, &entry.binding, entry.amount)?;
    }

    info!(
        version = genesis.params.version,
        operators = genesis.operators.len(),
        registries = genesis.registries.len(),
        custody = %hex::encode(keeper.module_address().as_slice()),
        "lockproxy genesis initialized"
    );
    Ok(())
}

/// Read every table back in key order.
pub fn export_genesis(storage: &dyn Storage, keeper: &Keeper) -> StdResult<GenesisState> {
    let operators = LOCK_PROXIES
        .range(storage, None, None, Order::Ascending)
        .filter(|item| match item {
            Ok((creator, proxy)) => !proxy.is_empty() && proxy.as_slice() == creator.as_slice(),
            Err(_) => true,
        })
        .map(|item| item.map(|(_, proxy)| proxy))
        .collect::<StdResult<Vec<_>>>()?;

    let chain_bindings = CHAIN_BINDINGS
        .range(storage, None, None, Order::Ascending)
        .filter(|item| !matches!(item, Ok((_, false))))
        .map(|item| {
            item.map(|((lock_proxy, chain_id), _)| ChainBindingEntry {
                lock_proxy: Binary::from(lock_proxy),
                chain_id,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    let registries = REGISTRY
        .range(storage, None, None, Order::Ascending)
        .filter(|item| !matches!(item, Ok((_, false))))
        .map(|item| Binding::from_storage_key(&item?.0))
        .collect::<StdResult<Vec<_>>>()?;

    let balances = BALANCES
        .range(storage, None, None, Order::Ascending)
        .map(|item| {
            let (key, amount) = item?;
            Ok(BalanceEntry {
                binding: Binding::from_storage_key(&key)?,
                amount,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(GenesisState {
        params: keeper.get_params(storage)?,
        nonce: keeper.get_nonce(storage)?,
        operators,
        chain_bindings,
        registries,
        balances,
    })
}
