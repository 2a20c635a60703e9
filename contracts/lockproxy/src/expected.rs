//! Collaborator interfaces consumed by the keeper
//!
//! Each method receives the storage of the running call so that a host can
//! back every collaborator with the same transactional store as the keeper.

use common::Coin;
use cosmwasm_std::{CanonicalAddr, StdError, StdResult, Storage, Uint256};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum BankError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Insufficient funds: {address} has {available}{denom}, needs {required}{denom}")]
    InsufficientFunds {
        address: String,
        denom: String,
        available: Uint256,
        required: Uint256,
    },

    #[error("Amount overflow for {denom}")]
    Overflow { denom: String },

    #[error("Empty account address")]
    EmptyAddress,

    #[error("Unknown module account: {module}")]
    UnknownModule { module: String },
}

/// Account to account transfers
pub trait BankKeeper {
    fn send_coins(
        &self,
        storage: &mut dyn Storage,
        from: &CanonicalAddr,
        to: &CanonicalAddr,
        coins: &[Coin],
    ) -> Result<(), BankError>;
}

/// Module custody accounts and total supply
pub trait SupplyKeeper {
    /// Custody address of a named module, `None` if the module account was never set up
    fn module_address(&self, module: &str) -> Option<CanonicalAddr>;

    fn send_coins_from_account_to_module(
        &self,
        storage: &mut dyn Storage,
        from: &CanonicalAddr,
        module: &str,
        coins: &[Coin],
    ) -> Result<(), BankError>;

    fn send_coins_from_module_to_account(
        &self,
        storage: &mut dyn Storage,
        module: &str,
        to: &CanonicalAddr,
        coins: &[Coin],
    ) -> Result<(), BankError>;

    fn mint_coins(
        &self,
        storage: &mut dyn Storage,
        module: &str,
        coins: &[Coin],
    ) -> Result<(), BankError>;

    fn burn_coins(
        &self,
        storage: &mut dyn Storage,
        module: &str,
        coins: &[Coin],
    ) -> Result<(), BankError>;
}

/// Outbound half of the cross-chain transaction manager
pub trait CrossChainManager {
    /// Queue an outbound call of `method` on `to_contract` at `to_chain_id`.
    ///
    /// Success means the message is owned by the outbound pipeline.
    #[allow(clippy::too_many_arguments)]
    fn create_cross_chain_tx(
        &self,
        storage: &mut dyn Storage,
        signer: &CanonicalAddr,
        to_chain_id: u64,
        from_contract: &[u8],
        to_contract: &[u8],
        method: &str,
        args: &[u8],
    ) -> StdResult<()>;

    fn denom_creator(&self, storage: &dyn Storage, denom: &str) -> StdResult<Option<CanonicalAddr>>;

    fn set_denom_creator(
        &self,
        storage: &mut dyn Storage,
        denom: &str,
        creator: &CanonicalAddr,
    ) -> StdResult<()>;
}
