//! Storage-backed cross-chain manager
//!
//! Records every outbound call in an append-only table keyed by a sequential
//! id, and keeps the denom creator registry. Relaying the recorded calls to
//! other chains is left to the host.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, CanonicalAddr, Order, StdResult, Storage};
use cw_storage_plus::{Item, Map};

use crate::expected::CrossChainManager;

pub const CCM_TX_COUNT: Item<u64> = Item::new("ccm_tx_count");
pub const CCM_TXS: Map<u64, CrossChainTx> = Map::new("ccm_txs");
pub const DENOM_CREATORS: Map<&str, Binary> = Map::new("denom_creators");

/// An outbound cross-chain call waiting to be relayed
#[cw_serde]
pub struct CrossChainTx {
    pub id: u64,
    pub signer: Binary,
    pub to_chain_id: u64,
    pub from_contract: Binary,
    pub to_contract: Binary,
    pub method: String,
    pub args: Binary,
}

#[derive(Clone, Debug, Default)]
pub struct StoreCrossChainManager;

impl StoreCrossChainManager {
    pub fn new() -> Self {
        Self
    }

    pub fn tx_count(&self, storage: &dyn Storage) -> StdResult<u64> {
        Ok(CCM_TX_COUNT.may_load(storage)?.unwrap_or_default())
    }

    pub fn tx(&self, storage: &dyn Storage, id: u64) -> StdResult<Option<CrossChainTx>> {
        CCM_TXS.may_load(storage, id)
    }

    /// All recorded calls in id order
    pub fn txs(&self, storage: &dyn Storage) -> StdResult<Vec<CrossChainTx>> {
        CCM_TXS
            .range(storage, None, None, Order::Ascending)
            .map(|item| item.map(|(_, tx)| tx))
            .collect()
    }
}

impl CrossChainManager for StoreCrossChainManager {
    fn create_cross_chain_tx(
        &self,
        storage: &mut dyn Storage,
        signer: &CanonicalAddr,
        to_chain_id: u64,
        from_contract: &[u8],
        to_contract: &[u8],
        method: &str,
        args: &[u8],
    ) -> StdResult<()> {
        let id = self.tx_count(storage)? + 1;
        let tx = CrossChainTx {
            id,
            signer: Binary::from(signer.as_slice()),
            to_chain_id,
            from_contract: Binary::from(from_contract),
            to_contract: Binary::from(to_contract),
            method: method.to_string(),
            args: Binary::from(args),
        };
        CCM_TXS.save(storage, id, &tx)?;
        CCM_TX_COUNT.save(storage, &id)
    }

    fn denom_creator(&self, storage: &dyn Storage, denom: &str) -> StdResult<Option<CanonicalAddr>> {
        Ok(DENOM_CREATORS
            .may_load(storage, denom)?
            .map(CanonicalAddr::from))
    }

    fn set_denom_creator(
        &self,
        storage: &mut dyn Storage,
        denom: &str,
        creator: &CanonicalAddr,
    ) -> StdResult<()> {
        DENOM_CREATORS.save(storage, denom, &Binary::from(creator.as_slice()))
    }
}
