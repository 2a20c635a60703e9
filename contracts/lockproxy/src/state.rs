//! State definitions for the LockProxy module
//!
//! Every table the keeper owns lives here. Bindings are stored under a
//! composite byte key (see [`Binding::storage_key`]) because the tuple has
//! five components.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, StdError, StdResult, Uint256};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Constants
// ============================================================================

/// Module name, also the name of the custody module account
pub const MODULE_NAME: &str = "lockproxypip1";

/// Module name for cw2 version info
pub const CONTRACT_NAME: &str = "crates.io:lockproxy";

/// Module version for cw2 version info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version at which lock burns and unlock mints
pub const MINT_BURN_VERSION: u64 = 1;

// ============================================================================
// Params
// ============================================================================

/// Module parameters
#[cw_serde]
pub struct Params {
    /// Supply-management mode: 0 = legacy custody, >= 1 = burn on lock, mint on unlock
    pub version: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            version: MINT_BURN_VERSION,
        }
    }
}

// ============================================================================
// Binding
// ============================================================================

/// An authorized (local proxy, local asset, remote chain, remote proxy, remote asset) tuple
#[cw_serde]
#[derive(Eq, PartialOrd, Ord, Hash)]
pub struct Binding {
    /// Local lock proxy hash
    pub lock_proxy: Binary,
    /// Local asset hash (denom bytes)
    pub asset: Binary,
    /// Remote chain id
    pub remote_chain_id: u64,
    /// Lock proxy hash on the remote chain
    pub remote_lock_proxy: Binary,
    /// Asset hash on the remote chain
    pub remote_asset: Binary,
}

impl Binding {
    pub fn new(
        lock_proxy: &[u8],
        asset: &[u8],
        remote_chain_id: u64,
        remote_lock_proxy: &[u8],
        remote_asset: &[u8],
    ) -> Self {
        Self {
            lock_proxy: Binary::from(lock_proxy),
            asset: Binary::from(asset),
            remote_chain_id,
            remote_lock_proxy: Binary::from(remote_lock_proxy),
            remote_asset: Binary::from(remote_asset),
        }
    }

    /// Composite key used by [`REGISTRY`] and [`BALANCES`].
    ///
    /// Byte strings are prefixed with their u32 big-endian length and the chain id
    /// is 8 bytes big-endian, so distinct tuples never share a key.
    pub fn storage_key(&self) -> Vec<u8> {
        let segments = [
            self.lock_proxy.as_slice(),
            self.asset.as_slice(),
            self.remote_lock_proxy.as_slice(),
            self.remote_asset.as_slice(),
        ];
        let mut key = Vec::with_capacity(8 + 16 + segments.iter().map(|s| s.len()).sum::<usize>());
        push_segment(&mut key, segments[0]);
        push_segment(&mut key, segments[1]);
        key.extend_from_slice(&self.remote_chain_id.to_be_bytes());
        push_segment(&mut key, segments[2]);
        push_segment(&mut key, segments[3]);
        key
    }

    pub fn from_storage_key(key: &[u8]) -> StdResult<Self> {
        let mut rest = key;
        let lock_proxy = take_segment(&mut rest)?;
        let asset = take_segment(&mut rest)?;
        let chain_id_bytes: [u8; 8] = take(&mut rest, 8)?
            .try_into()
            .map_err(|_| StdError::generic_err("binding key: bad chain id"))?;
        let remote_lock_proxy = take_segment(&mut rest)?;
        let remote_asset = take_segment(&mut rest)?;
        if !rest.is_empty() {
            return Err(StdError::generic_err("binding key: trailing bytes"));
        }
        Ok(Self::new(
            lock_proxy,
            asset,
            u64::from_be_bytes(chain_id_bytes),
            remote_lock_proxy,
            remote_asset,
        ))
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lock_proxy: {}, asset: {}, remote_chain_id: {}, remote_lock_proxy: {}, remote_asset: {}",
            hex::encode(self.lock_proxy.as_slice()),
            String::from_utf8_lossy(self.asset.as_slice()),
            self.remote_chain_id,
            hex::encode(self.remote_lock_proxy.as_slice()),
            hex::encode(self.remote_asset.as_slice()),
        )
    }
}

fn push_segment(key: &mut Vec<u8>, segment: &[u8]) {
    key.extend_from_slice(&(segment.len() as u32).to_be_bytes());
    key.extend_from_slice(segment);
}

fn take<'a>(rest: &mut &'a [u8], len: usize) -> StdResult<&'a [u8]> {
    if rest.len() < len {
        return Err(StdError::generic_err("binding key: truncated"));
    }
    let (head, tail) = rest.split_at(len);
    *rest = tail;
    Ok(head)
}

fn take_segment<'a>(rest: &mut &'a [u8]) -> StdResult<&'a [u8]> {
    let len_bytes: [u8; 4] = take(rest, 4)?
        .try_into()
        .map_err(|_| StdError::generic_err("binding key: bad length"))?;
    take(rest, u32::from_be_bytes(len_bytes) as usize)
}

// ============================================================================
// State Storage
// ============================================================================

/// Module parameters
pub const PARAMS: Item<Params> = Item::new("params");

/// Nonce of the last lock
pub const NONCE: Item<Uint256> = Item::new("nonce");

/// Lock proxies by creator
/// Key: creator bytes, Value: lock proxy hash (equal to the creator bytes)
pub const LOCK_PROXIES: Map<&[u8], Binary> = Map::new("lock_proxies");

/// Coarse "proxy has any binding to chain" index
/// Key: (lock proxy hash, remote chain id), Value: always true
pub const CHAIN_BINDINGS: Map<(&[u8], u64), bool> = Map::new("chain_bindings");

/// Registered bindings
/// Key: `Binding::storage_key`, Value: always true
pub const REGISTRY: Map<&[u8], bool> = Map::new("registry");

/// Per-binding custody ledger
/// Key: `Binding::storage_key`, Value: amount
pub const BALANCES: Map<&[u8], Uint256> = Map::new("balances");
