//! Message types for the LockProxy module
//!
//! `ExecuteMsg` is sent by user accounts, `SudoMsg` by the host (the
//! cross-chain manager for inbound calls, governance for params).

use common::Coin;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint256};

use crate::keeper::LockRequest;
use crate::state::{Binding, Params};

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Create the sender's lock proxy
    CreateLockProxy {},

    /// Create a new coin owned by `lock_proxy` and bind it to its native asset
    CreateCoinAndDelegateToProxy {
        coin: Coin,
        lock_proxy: Binary,
        native_chain_id: u64,
        native_lock_proxy: Binary,
        native_asset: Binary,
    },

    /// Lock the sender's coins for release on another chain
    Lock(LockRequest),
}

// ============================================================================
// Sudo Messages
// ============================================================================

#[cw_serde]
pub enum SudoMsg {
    /// Inbound `unlock` relayed by the cross-chain manager
    Unlock {
        from_chain_id: u64,
        from_contract: Binary,
        to_contract: Binary,
        args: Binary,
    },

    /// Inbound `registerAsset`, always rejected
    RegisterAsset {
        from_chain_id: u64,
        from_contract: Binary,
        to_contract: Binary,
        args: Binary,
    },

    /// Replace the module params
    UpdateParams { params: Params },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ParamsResponse)]
    Params {},

    /// Nonce of the last lock
    #[returns(NonceResponse)]
    Nonce {},

    /// Lock proxy owned by `operator`
    #[returns(LockProxyResponse)]
    LockProxy { operator: Binary },

    #[returns(IsRegisteredResponse)]
    IsRegistered { binding: Binding },

    /// Whether `lock_proxy` has any binding to `chain_id`
    #[returns(HasChainBindingResponse)]
    HasChainBinding { lock_proxy: Binary, chain_id: u64 },

    /// Custody ledger of a binding
    #[returns(BalanceResponse)]
    Balance { binding: Binding },

    /// Registered bindings, paginated in key order
    #[returns(RegistriesResponse)]
    Registries {
        start_after: Option<Binding>,
        limit: Option<u32>,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ParamsResponse {
    pub params: Params,
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: Uint256,
}

#[cw_serde]
pub struct LockProxyResponse {
    pub lock_proxy: Option<Binary>,
}

#[cw_serde]
pub struct IsRegisteredResponse {
    pub registered: bool,
}

#[cw_serde]
pub struct HasChainBindingResponse {
    pub bound: bool,
}

#[cw_serde]
pub struct BalanceResponse {
    pub amount: Uint256,
}

#[cw_serde]
pub struct RegistriesResponse {
    pub registries: Vec<Binding>,
}
